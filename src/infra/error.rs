use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {var} is invalid ({reason})")]
    InvalidConfig { var: &'static str, reason: String },

    #[error("Could not read activities seed file {}", path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Activities seed file {} is not valid JSON", path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Activities seed is invalid: {0}")]
    InvalidSeed(String),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
