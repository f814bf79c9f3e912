use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A registered patient. The normalized email is the registration key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl PatientProfile {
    /// Overwrite the demographic fields with a newer registration of the
    /// same patient. Identity, email and creation time are kept.
    pub fn apply_update(&mut self, newer: PatientProfile) {
        self.first_name = newer.first_name;
        self.last_name = newer.last_name;
        self.date_of_birth = newer.date_of_birth;
        self.gender = newer.gender;
        self.contact_number = newer.contact_number;
        self.address = newer.address;
        self.updated_at = newer.updated_at;
    }
}

/// Registration payload submitted by the front desk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PatientRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// ISO date, e.g. `1961-04-23`. Blank means unknown.
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl PatientRegistration {
    /// Lower-cased, trimmed email used to match repeat registrations.
    pub fn normalized_email(&self) -> Result<String, CoreError> {
        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(CoreError::MissingField("email".to_string()));
        }
        if !email.contains('@') {
            return Err(CoreError::InvalidEmail(email));
        }
        Ok(email)
    }

    pub fn into_profile(self, id: Uuid, now: jiff::Timestamp) -> Result<PatientProfile, CoreError> {
        let email = self.normalized_email()?;
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let date_of_birth = match non_blank(self.dob) {
            Some(dob) => Some(dob.parse::<jiff::civil::Date>()?),
            None => None,
        };

        Ok(PatientProfile {
            id,
            first_name,
            last_name,
            email,
            date_of_birth,
            gender: non_blank(self.gender),
            contact_number: non_blank(self.phone),
            address: non_blank(self.address),
            created_at: now,
            updated_at: now,
        })
    }
}

fn required(value: String, field: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(value.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
