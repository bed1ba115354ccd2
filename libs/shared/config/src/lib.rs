use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_mock_data: bool,
    pub write_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_mock_data: true,
            write_timeout_ms: 2000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using default");
                    defaults.host.clone()
                }),
            port: parse_var("SERVER_PORT", defaults.port),
            seed_mock_data: parse_var("SEED_MOCK_DATA", defaults.seed_mock_data),
            write_timeout_ms: parse_var("DIRECTORY_WRITE_TIMEOUT_MS", defaults.write_timeout_ms),
        };

        if config.write_timeout_ms == 0 {
            warn!("DIRECTORY_WRITE_TIMEOUT_MS is 0 - every contended write will time out");
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}
