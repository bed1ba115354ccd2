pub mod directory;
pub mod reference;
pub mod shared;
pub mod mock;

pub use directory::AppointmentDirectory;
pub use reference::{ReferenceDataLookup, RegistryLookup, StaticReferenceData};
pub use shared::SharedAppointmentDirectory;
pub use mock::mock_appointments;
