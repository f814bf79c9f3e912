use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;
use visus_core::models::patient::PatientProfile;
use visus_core::models::visit::ClinicalVisit;
use visus_risk::RiskEvaluator;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<RiskEvaluator>,
    pub patients: Arc<Mutex<PatientRegistry>>,
    pub visits: Arc<Mutex<VisitRegistry>>,
}

impl AppState {
    pub fn new(evaluator: RiskEvaluator) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
            patients: Arc::new(Mutex::new(PatientRegistry::default())),
            visits: Arc::new(Mutex::new(VisitRegistry::default())),
        }
    }
}

/// In-memory visit records, listed in the order they were recorded.
#[derive(Debug, Default)]
pub struct VisitRegistry {
    by_id: HashMap<Uuid, ClinicalVisit>,
    order: Vec<Uuid>,
}

impl VisitRegistry {
    pub fn insert(&mut self, visit: ClinicalVisit) {
        if !self.by_id.contains_key(&visit.id) {
            self.order.push(visit.id);
        }
        self.by_id.insert(visit.id, visit);
    }

    pub fn get(&self, id: Uuid) -> Option<&ClinicalVisit> {
        self.by_id.get(&id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut ClinicalVisit> {
        self.by_id.get_mut(&id)
    }

    /// One patient's visits, newest first.
    pub fn for_patient(&self, patient_id: Uuid) -> Vec<ClinicalVisit> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.by_id.get(id))
            .filter(|visit| visit.patient_id == patient_id)
            .cloned()
            .collect()
    }

    pub fn list(&self) -> Vec<ClinicalVisit> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// In-memory patient profiles, keyed by id and by normalized email.
#[derive(Debug, Default)]
pub struct PatientRegistry {
    by_id: HashMap<Uuid, PatientProfile>,
    by_email: HashMap<String, Uuid>,
    order: Vec<Uuid>,
}

impl PatientRegistry {
    /// Insert a new profile, or fold it into the existing profile with the
    /// same email. Returns the stored profile and whether it was created.
    pub fn upsert(&mut self, profile: PatientProfile) -> (PatientProfile, bool) {
        if let Some(existing) = self
            .by_email
            .get(&profile.email)
            .and_then(|id| self.by_id.get_mut(id))
        {
            existing.apply_update(profile);
            return (existing.clone(), false);
        }

        self.by_email.insert(profile.email.clone(), profile.id);
        self.order.push(profile.id);
        self.by_id.insert(profile.id, profile.clone());
        (profile, true)
    }

    pub fn get(&self, id: Uuid) -> Option<&PatientProfile> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn list(&self) -> Vec<PatientProfile> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }
}
