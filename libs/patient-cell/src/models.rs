use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub blood_type: Option<BloodType>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub medical_history: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Patient {
    /// Whole years completed on `date`; zero for birth dates in the future.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        date.years_since(self.birth_date).unwrap_or(0)
    }

    pub fn is_adult_on(&self, date: NaiveDate) -> bool {
        self.age_on(date) >= ADULT_AGE
    }
}

pub const ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "Não informado")]
    NotInformed,
}

/// Body of both create and update; updates replace every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub address: String,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub emergency_phone: Option<String>,
    #[serde(default)]
    pub blood_type: Option<BloodType>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub medications: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
}

impl PatientRequest {
    pub fn validate(&self) -> Result<(), PatientError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("cpf", &self.cpf),
            ("address", &self.address),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PatientError::Validation(format!("{} is required", field)));
            }
        }

        if !self.email.contains('@') {
            return Err(PatientError::Validation(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub total: usize,
    pub adults: usize,
    pub minors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum PatientError {
    #[error("Patient {0} not found")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
