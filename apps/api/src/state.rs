use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use appointment_cell::{mock_appointments, AppointmentDirectory, RegistryLookup, SharedAppointmentDirectory};
use doctor_cell::{mock_doctors, DoctorRegistry, SharedDoctorRegistry};
use patient_cell::{mock_patients, PatientRegistry, SharedPatientRegistry};
use shared_config::AppConfig;
use shared_utils::Clock;

/// Everything the console serves, owned for the life of the process.
#[derive(Clone)]
pub struct ClinicState {
    pub doctors: SharedDoctorRegistry,
    pub patients: SharedPatientRegistry,
    pub appointments: SharedAppointmentDirectory,
}

impl ClinicState {
    pub fn build(config: &AppConfig, clock: Arc<dyn Clock>) -> anyhow::Result<Self> {
        let mut doctors = DoctorRegistry::new(clock.clone());
        let mut patients = PatientRegistry::new(clock.clone());
        if config.seed_mock_data {
            doctors.seed(mock_doctors())?;
            patients.seed(mock_patients())?;
        }

        let doctors = doctors.into_shared();
        let patients = patients.into_shared();

        let lookup = RegistryLookup::new(doctors.clone(), patients.clone());
        let mut directory = AppointmentDirectory::new(Arc::new(lookup), clock);
        if config.seed_mock_data {
            directory.seed(mock_appointments())?;
        }

        info!(
            "Clinic state ready: seed_mock_data={}, write_timeout_ms={}",
            config.seed_mock_data, config.write_timeout_ms
        );

        Ok(Self {
            doctors,
            patients,
            appointments: SharedAppointmentDirectory::new(
                directory,
                Duration::from_millis(config.write_timeout_ms),
            ),
        })
    }
}
