pub mod clock;
pub mod text;
pub mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use text::{contains_ignore_case, normalize_optional};
