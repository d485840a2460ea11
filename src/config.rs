use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_PORT: u16 = 3456;
pub const DEFAULT_DATA_PATH: &str = "data/db.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub seed_teams: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("PORT").ok(),
            env::var("APP_DATA_PATH").ok(),
            env::var("APP_SEED_TEAMS").ok(),
        )
    }

    fn from_vars(port: Option<String>, data_path: Option<String>, seed: Option<String>) -> Self {
        let port = port
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = data_path
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let seed_teams = seed
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            port,
            data_path,
            seed_teams,
        }
    }
}

/// Builds the log filter from `RUST_LOG` directives, falling back to `info`
/// when they are unset or invalid.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
