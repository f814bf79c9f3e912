use visus_core::models::assessment::RiskCategory;
use visus_core::models::measurement::ClinicalMeasurementSet;

#[test]
fn default_set_is_empty() {
    let set = ClinicalMeasurementSet::default();
    assert!(set.is_empty());
    assert_eq!(set.max_intraocular_pressure(), None);
    assert_eq!(set.max_cup_disc_ratio(), None);
    assert_eq!(set.max_lens_opacity_grade(), None);
}

#[test]
fn worse_eye_wins() {
    let set = ClinicalMeasurementSet {
        intraocular_pressure_left: 32.0,
        intraocular_pressure_right: 18.0,
        cup_disc_ratio_left: None,
        cup_disc_ratio_right: Some(0.7),
        lens_opacity_grade_left: 1,
        lens_opacity_grade_right: 3,
        notes: None,
    };
    assert_eq!(set.max_intraocular_pressure(), Some(32.0));
    assert_eq!(set.max_cup_disc_ratio(), Some(0.7));
    assert_eq!(set.max_lens_opacity_grade(), Some(3));
    assert!(!set.is_empty());
}

#[test]
fn non_positive_and_nan_values_are_not_measured() {
    let set = ClinicalMeasurementSet {
        intraocular_pressure_left: -4.0,
        intraocular_pressure_right: f64::NAN,
        cup_disc_ratio_left: Some(0.0),
        cup_disc_ratio_right: Some(-0.2),
        lens_opacity_grade_left: -1,
        lens_opacity_grade_right: 0,
        notes: Some("patient uncooperative".to_string()),
    };
    assert!(set.is_empty());
}

#[test]
fn deserializes_camel_case_with_missing_fields() {
    let set: ClinicalMeasurementSet =
        serde_json::from_str(r#"{"intraocularPressureLeft": 22.5, "lensOpacityGradeRight": 2}"#)
            .unwrap();
    assert_eq!(set.intraocular_pressure_left, 22.5);
    assert_eq!(set.intraocular_pressure_right, 0.0);
    assert_eq!(set.cup_disc_ratio_left, None);
    assert_eq!(set.lens_opacity_grade_right, 2);
}

#[test]
fn risk_category_is_ordinal() {
    assert!(RiskCategory::Low < RiskCategory::Moderate);
    assert!(RiskCategory::Moderate < RiskCategory::High);
    assert_eq!(RiskCategory::default(), RiskCategory::Low);
    assert_eq!(
        serde_json::to_string(&RiskCategory::Moderate).unwrap(),
        "\"Moderate\""
    );
    assert_eq!(RiskCategory::High.to_string(), "High");
}
