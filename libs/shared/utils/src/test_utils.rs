use std::sync::Arc;
use chrono::NaiveDate;

use shared_config::AppConfig;

use crate::clock::FixedClock;

/// Date the console fixtures are pinned to.
pub const FIXTURE_TODAY: (i32, u32, u32) = (2025, 5, 30);

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {}-{}-{}", year, month, day))
}

pub fn fixture_today() -> NaiveDate {
    let (y, m, d) = FIXTURE_TODAY;
    ymd(y, m, d)
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(fixture_today()))
}

pub struct TestConfig {
    pub seed_mock_data: bool,
    pub write_timeout_ms: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            seed_mock_data: true,
            write_timeout_ms: 200,
        }
    }
}

impl TestConfig {
    pub fn empty() -> Self {
        Self {
            seed_mock_data: false,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            seed_mock_data: self.seed_mock_data,
            write_timeout_ms: self.write_timeout_ms,
        }
    }
}
