use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_utils::{contains_ignore_case, normalize_optional, Clock};

use crate::models::{AgeBreakdown, Patient, PatientError, PatientRequest};

// Synchronous for the same reason as the doctor registry: no guard
// outlives a call, so nothing awaits while holding it.
pub type SharedPatientRegistry = Arc<RwLock<PatientRegistry>>;

/// In-memory patient list, kept in insertion order.
pub struct PatientRegistry {
    patients: Vec<Patient>,
    clock: Arc<dyn Clock>,
}

impl PatientRegistry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            patients: Vec::new(),
            clock,
        }
    }

    pub fn into_shared(self) -> SharedPatientRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn seed(&mut self, patients: Vec<Patient>) -> Result<(), PatientError> {
        let mut incoming = HashSet::new();
        for patient in &patients {
            if self.position(&patient.id).is_some() || !incoming.insert(patient.id.as_str()) {
                return Err(PatientError::Validation(format!(
                    "patient id {} is already registered",
                    patient.id
                )));
            }
        }

        self.patients.extend(patients);
        info!("Patient registry seeded with {} patients", self.patients.len());
        Ok(())
    }

    pub fn create(&mut self, request: PatientRequest) -> Result<Patient, PatientError> {
        if let Err(e) = request.validate() {
            warn!("Rejected patient creation: {}", e);
            return Err(e);
        }

        let today = self.clock.today();
        let patient = Patient {
            id: self.fresh_id(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            cpf: request.cpf,
            birth_date: request.birth_date,
            address: request.address,
            emergency_contact: normalize_optional(request.emergency_contact),
            emergency_phone: normalize_optional(request.emergency_phone),
            blood_type: request.blood_type,
            allergies: normalize_optional(request.allergies),
            medications: normalize_optional(request.medications),
            medical_history: normalize_optional(request.medical_history),
            created_at: today,
            updated_at: today,
        };

        info!("Registered patient {}", patient.id);
        self.patients.push(patient.clone());
        Ok(patient)
    }

    pub fn update(&mut self, id: &str, request: PatientRequest) -> Result<Patient, PatientError> {
        let index = self
            .position(id)
            .ok_or_else(|| PatientError::NotFound(id.to_string()))?;
        if let Err(e) = request.validate() {
            warn!("Rejected update of patient {}: {}", id, e);
            return Err(e);
        }

        let today = self.clock.today();
        let existing = &self.patients[index];
        let updated = Patient {
            id: existing.id.clone(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            cpf: request.cpf,
            birth_date: request.birth_date,
            address: request.address,
            emergency_contact: normalize_optional(request.emergency_contact),
            emergency_phone: normalize_optional(request.emergency_phone),
            blood_type: request.blood_type,
            allergies: normalize_optional(request.allergies),
            medications: normalize_optional(request.medications),
            medical_history: normalize_optional(request.medical_history),
            created_at: existing.created_at,
            updated_at: today,
        };

        self.patients[index] = updated.clone();
        info!("Updated patient {}", id);
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), PatientError> {
        let index = self
            .position(id)
            .ok_or_else(|| PatientError::NotFound(id.to_string()))?;
        self.patients.remove(index);
        info!("Removed patient {}", id);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Patient, PatientError> {
        self.patients
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PatientError::NotFound(id.to_string()))
    }

    pub fn list(&self) -> &[Patient] {
        &self.patients
    }

    /// Name or email ignoring case; CPF and phone as typed.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Patient> + 'a {
        debug!("Searching patients for '{}'", term);
        self.patients.iter().filter(move |p| {
            contains_ignore_case(&p.name, term)
                || contains_ignore_case(&p.email, term)
                || p.cpf.contains(term)
                || p.phone.contains(term)
        })
    }

    pub fn age_breakdown(&self, on: NaiveDate) -> AgeBreakdown {
        let adults = self.patients.iter().filter(|p| p.is_adult_on(on)).count();
        AgeBreakdown {
            total: self.patients.len(),
            adults,
            minors: self.patients.len() - adults,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.patients.iter().position(|p| p.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
