use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_utils::{contains_ignore_case, normalize_optional, Clock};

use crate::models::{Doctor, DoctorError, DoctorRequest};

// Synchronous lock: guards are never held across an `.await`, and the
// appointment directory reads through it while holding its own async lock.
pub type SharedDoctorRegistry = Arc<RwLock<DoctorRegistry>>;

/// In-memory doctor roster, kept in insertion order.
pub struct DoctorRegistry {
    doctors: Vec<Doctor>,
    clock: Arc<dyn Clock>,
}

impl DoctorRegistry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            doctors: Vec::new(),
            clock,
        }
    }

    pub fn into_shared(self) -> SharedDoctorRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Insert pre-built records (mock data) keeping their ids and dates.
    /// The whole batch is rejected if any id is already taken.
    pub fn seed(&mut self, doctors: Vec<Doctor>) -> Result<(), DoctorError> {
        let mut incoming = HashSet::new();
        for doctor in &doctors {
            if self.position(&doctor.id).is_some() || !incoming.insert(doctor.id.as_str()) {
                return Err(DoctorError::Validation(format!(
                    "doctor id {} is already registered",
                    doctor.id
                )));
            }
        }

        self.doctors.extend(doctors);
        info!("Doctor registry seeded with {} doctors", self.doctors.len());
        Ok(())
    }

    pub fn create(&mut self, request: DoctorRequest) -> Result<Doctor, DoctorError> {
        request.validate().map_err(|e| {
            warn!("Rejected doctor creation: {}", e);
            e
        })?;

        let today = self.clock.today();
        let doctor = Doctor {
            id: self.fresh_id(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            specialty: request.specialty,
            crm: request.crm,
            address: normalize_optional(request.address),
            birth_date: request.birth_date,
            created_at: today,
            updated_at: today,
        };

        info!("Registered doctor {} ({})", doctor.id, doctor.specialty);
        self.doctors.push(doctor.clone());
        Ok(doctor)
    }

    pub fn update(&mut self, id: &str, request: DoctorRequest) -> Result<Doctor, DoctorError> {
        let index = self
            .position(id)
            .ok_or_else(|| DoctorError::NotFound(id.to_string()))?;
        request.validate().map_err(|e| {
            warn!("Rejected update of doctor {}: {}", id, e);
            e
        })?;

        let today = self.clock.today();
        let existing = &mut self.doctors[index];
        existing.name = request.name;
        existing.email = request.email;
        existing.phone = request.phone;
        existing.specialty = request.specialty;
        existing.crm = request.crm;
        existing.address = normalize_optional(request.address);
        existing.birth_date = request.birth_date;
        existing.updated_at = today;

        info!("Updated doctor {}", id);
        Ok(existing.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), DoctorError> {
        let index = self
            .position(id)
            .ok_or_else(|| DoctorError::NotFound(id.to_string()))?;
        self.doctors.remove(index);
        info!("Removed doctor {}", id);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Doctor, DoctorError> {
        self.doctors
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DoctorError::NotFound(id.to_string()))
    }

    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Name, specialty or CRM containing `term`, ignoring case.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Doctor> + 'a {
        debug!("Searching doctors for '{}'", term);
        self.doctors.iter().filter(move |d| {
            contains_ignore_case(&d.name, term)
                || contains_ignore_case(&d.specialty, term)
                || contains_ignore_case(&d.crm, term)
        })
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.doctors.iter().position(|d| d.id == id)
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
