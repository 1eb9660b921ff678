use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error downloading {file}: {source}")]
    Network {
        file: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error following redirect for {file}: {source}")]
    Redirect {
        file: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Redirect location missing for {file}")]
    MissingLocation { file: String },

    #[error("Invalid redirect location for {file}: {location}")]
    InvalidLocation { file: String, location: String },

    #[error("Failed to download {file}: {code} {reason}")]
    Status {
        file: String,
        code: u16,
        reason: String,
    },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Download task failed: {0}")]
    Join(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
