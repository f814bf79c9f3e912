use std::collections::HashMap;
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;

use visus_api::config::ServiceConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(config.thresholds_path, None);
}

#[test]
fn reads_bind_addr_and_thresholds_path() {
    let config = ServiceConfig::from_lookup(lookup(&[
        ("VISUS_BIND_ADDR", "127.0.0.1:9000"),
        ("VISUS_THRESHOLDS", "/etc/visus/thresholds.json"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    assert_eq!(
        config.thresholds_path,
        Some(PathBuf::from("/etc/visus/thresholds.json"))
    );
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServiceConfig::from_lookup(lookup(&[
        ("VISUS_BIND_ADDR", "  "),
        ("VISUS_THRESHOLDS", ""),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.thresholds_path, None);
}

#[test]
fn rejects_malformed_bind_addr() {
    let err = ServiceConfig::from_lookup(lookup(&[("VISUS_BIND_ADDR", "localhost")])).unwrap_err();
    assert!(err.to_string().contains("VISUS_BIND_ADDR"));
}

#[test]
fn default_thresholds_without_path() {
    let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
    let table = config.load_thresholds().unwrap();
    assert_eq!(table, visus_risk::ThresholdTable::default());
}

#[test]
fn loads_and_validates_configured_thresholds() {
    let dir = std::env::temp_dir().join(format!("visus-api-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::File::create(&good)
        .unwrap()
        .write_all(br#"{"protocolName": "Glaucoma Service"}"#)
        .unwrap();
    let bad = dir.join("bad.json");
    std::fs::File::create(&bad)
        .unwrap()
        .write_all(br#"{"intraocularPressure": {"moderateAbove": 30, "highAbove": 21}}"#)
        .unwrap();

    let config = ServiceConfig::from_lookup(lookup(&[(
        "VISUS_THRESHOLDS",
        good.to_str().unwrap(),
    )]))
    .unwrap();
    assert_eq!(config.load_thresholds().unwrap().protocol_name, "Glaucoma Service");

    let config = ServiceConfig::from_lookup(lookup(&[(
        "VISUS_THRESHOLDS",
        bad.to_str().unwrap(),
    )]))
    .unwrap();
    assert!(config.load_thresholds().is_err());

    std::fs::remove_dir_all(&dir).unwrap();
}
