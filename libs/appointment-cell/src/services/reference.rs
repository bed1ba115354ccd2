// libs/appointment-cell/src/services/reference.rs
use tracing::warn;

use doctor_cell::{Doctor, SharedDoctorRegistry};
use patient_cell::{Patient, SharedPatientRegistry};

use crate::models::{DoctorReference, PatientReference};

/// Read-only access to the doctors and patients appointments point at.
///
/// The directory only consults this when a record is written, to check the
/// foreign keys and copy display fields into the snapshot.
pub trait ReferenceDataLookup: Send + Sync {
    fn resolve_doctor(&self, id: &str) -> Option<DoctorReference>;
    fn resolve_patient(&self, id: &str) -> Option<PatientReference>;
}

impl From<&Doctor> for DoctorReference {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
        }
    }
}

impl From<&Patient> for PatientReference {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.name.clone(),
            email: patient.email.clone(),
            phone: patient.phone.clone(),
        }
    }
}

/// Lookup backed by the live doctor and patient registries.
#[derive(Clone)]
pub struct RegistryLookup {
    doctors: SharedDoctorRegistry,
    patients: SharedPatientRegistry,
}

impl RegistryLookup {
    pub fn new(doctors: SharedDoctorRegistry, patients: SharedPatientRegistry) -> Self {
        Self { doctors, patients }
    }
}

impl ReferenceDataLookup for RegistryLookup {
    fn resolve_doctor(&self, id: &str) -> Option<DoctorReference> {
        let registry = match self.doctors.read() {
            Ok(guard) => guard,
            Err(_) => {
                warn!("Doctor registry lock poisoned while resolving {}", id);
                return None;
            }
        };
        registry.get(id).ok().map(DoctorReference::from)
    }

    fn resolve_patient(&self, id: &str) -> Option<PatientReference> {
        let registry = match self.patients.read() {
            Ok(guard) => guard,
            Err(_) => {
                warn!("Patient registry lock poisoned while resolving {}", id);
                return None;
            }
        };
        registry.get(id).ok().map(PatientReference::from)
    }
}

/// Fixed reference data, for embedding the directory without registries.
#[derive(Debug, Clone, Default)]
pub struct StaticReferenceData {
    pub doctors: Vec<DoctorReference>,
    pub patients: Vec<PatientReference>,
}

impl ReferenceDataLookup for StaticReferenceData {
    fn resolve_doctor(&self, id: &str) -> Option<DoctorReference> {
        self.doctors.iter().find(|d| d.id == id).cloned()
    }

    fn resolve_patient(&self, id: &str) -> Option<PatientReference> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctor_cell::{mock_doctors, DoctorRegistry};
    use patient_cell::{mock_patients, PatientRegistry};
    use shared_utils::test_utils::fixed_clock;

    #[test]
    fn registry_lookup_sees_live_registry_changes() {
        let mut doctors = DoctorRegistry::new(fixed_clock());
        doctors.seed(mock_doctors()).unwrap();
        let mut patients = PatientRegistry::new(fixed_clock());
        patients.seed(mock_patients()).unwrap();

        let doctors = doctors.into_shared();
        let lookup = RegistryLookup::new(doctors.clone(), patients.into_shared());

        let cardio = lookup.resolve_doctor("1").unwrap();
        assert_eq!(cardio.specialty, "Cardiologia");
        assert_eq!(lookup.resolve_patient("3").unwrap().name, "Antonio Gabriel");
        assert!(lookup.resolve_patient("9").is_none());

        doctors.write().unwrap().delete("1").unwrap();
        assert!(lookup.resolve_doctor("1").is_none());
    }
}
