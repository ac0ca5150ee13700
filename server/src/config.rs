//! Runtime configuration read from the environment.
//!
//! DESIGN
//! ======
//! Every knob has a default so a bare `cargo run` serves a working app backed
//! by a local JSON-lines file. Setting `DATABASE_URL` switches storage to
//! Postgres. Unparsable numeric values fall back to their defaults rather
//! than aborting startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HAZARDS_FILE: &str = "hazards.txt";
const DEFAULT_RECENT_LIMIT: usize = 5;
const DEFAULT_AVOID_THRESHOLD: u32 = 3;

/// Tunables for the hazard lookup and prediction routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardConfig {
    /// Maximum records returned by `GET /api/hazards`.
    pub recent_limit: usize,
    /// Report count at or above which a location is flagged to avoid.
    pub avoid_threshold: u32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self { recent_limit: DEFAULT_RECENT_LIMIT, avoid_threshold: DEFAULT_AVOID_THRESHOLD }
    }
}

/// Process-level configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Postgres connection string. `None` selects the file store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub hazards_file: PathBuf,
    pub hazards: HazardConfig,
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let hazards_file = std::env::var("HAZARDS_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_HAZARDS_FILE), PathBuf::from);

        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            database_url,
            db_max_connections: env_parse("DATABASE_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            hazards_file,
            hazards: HazardConfig {
                recent_limit: env_parse("RECENT_LIMIT", DEFAULT_RECENT_LIMIT),
                avoid_threshold: env_parse("AVOID_THRESHOLD", DEFAULT_AVOID_THRESHOLD),
            },
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
