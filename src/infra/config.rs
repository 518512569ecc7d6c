use std::{fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use axum::http::HeaderValue;
use env_helpers::get_env_opt;

use super::InfraError;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// JSON file replacing the built-in activity catalogue.
    pub seed_path: Option<PathBuf>,
    /// Reject signups once an activity reaches `max_participants`. Off by default.
    pub enforce_capacity: bool,
    /// When set, JSON logs are also written to this file.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr = parse_or_default(
            "BIND_ADDR",
            get_env_opt("BIND_ADDR"),
            SocketAddr::from(([127, 0, 0, 1], 8000)),
        )?;
        let cors_origin: HeaderValue = parse_or_default(
            "CORS_ORIGIN",
            get_env_opt("CORS_ORIGIN"),
            HeaderValue::from_static("http://localhost:8000"),
        )?;
        let static_dir: PathBuf = get_env_opt("STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));
        let seed_path: Option<PathBuf> = optional_path(get_env_opt("ACTIVITIES_SEED_PATH"));
        let enforce_capacity: bool = parse_or_default(
            "ENFORCE_CAPACITY",
            get_env_opt("ENFORCE_CAPACITY"),
            false,
        )?;
        let log_file: Option<PathBuf> = optional_path(get_env_opt("LOG_FILE"));

        Ok(Self {
            bind_addr,
            cors_origin,
            static_dir,
            seed_path,
            enforce_capacity,
            log_file,
        })
    }
}

/// Parses `raw` when the variable is set, otherwise falls back to `default`.
fn parse_or_default<T>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, InfraError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| InfraError::InvalidConfig {
                var,
                reason: format!("{value:?}: {e}"),
            }),
        None => Ok(default),
    }
}

fn optional_path(raw: Option<String>) -> Option<PathBuf> {
    raw.filter(|s| !s.trim().is_empty()).map(PathBuf::from)
}
