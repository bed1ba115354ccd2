pub mod registry;
pub mod mock;

pub use registry::{PatientRegistry, SharedPatientRegistry};
pub use mock::mock_patients;
