use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    /// Regional medical council registration, e.g. `CRM/CE 12345`.
    pub crm: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Body of both create and update; updates replace every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub crm: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
}

impl DoctorRequest {
    pub fn validate(&self) -> Result<(), DoctorError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("specialty", &self.specialty),
            ("crm", &self.crm),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DoctorError::Validation(format!("{} is required", field)));
            }
        }

        if !self.email.contains('@') {
            return Err(DoctorError::Validation(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor {0} not found")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
