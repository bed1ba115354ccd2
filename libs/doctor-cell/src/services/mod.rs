pub mod registry;
pub mod mock;

pub use registry::{DoctorRegistry, SharedDoctorRegistry};
pub use mock::mock_doctors;
