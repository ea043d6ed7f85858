//! Error taxonomy for the generator.
//!
//! Every failure is terminal for the run. The binary prints the message and
//! exits with [`Error::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// An input file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The data file is not valid JSON, or not an array of records.
    #[error("Failed to parse JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing an existing path failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The API answered, but not with an array of records.
    #[error("Unexpected API response format: {0}")]
    Format(String),

    /// Transport failure, timeout or non-success HTTP status.
    #[error("API request failed: {0}")]
    Network(String),

    /// A concrete classification matched no records.
    #[error("No animals found for skin type '{value}'.")]
    EmptyResult { value: String },

    /// Required input is missing or unusable.
    #[error("{0}")]
    Validation(String),

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an I/O failure on `path`, singling out a missing file.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::Parse { .. } | Self::Io { .. } | Self::Console(_) => 1,
            Self::EmptyResult { .. } | Self::Validation(_) => 2,
            Self::Network(_) | Self::Format(_) => 3,
        }
    }
}
