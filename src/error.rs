//! Error types for merge operations.

use thiserror::Error;

/// Errors that abort a merge.
///
/// Per-symbol anomalies (parameter lists that cannot be correlated, index
/// overflow) never surface here; they are skipped and logged where they occur.
#[derive(Debug, Error)]
pub enum MergeError {
    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Archive(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(String),

    /// A mapping document could not be parsed.
    #[error("{format} parse error at line {line}: {message}")]
    Parse {
        format: &'static str,
        line: usize,
        message: String,
    },

    /// The curated database declares a version this crate cannot read.
    #[error("Curated data version was {0} and did not start with \"1.\", cannot parse")]
    IncompatibleVersion(String),

    /// Missing required archive entry, artifact or document field.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// A mapping version string did not match the expected grammar.
    #[error("Mapping version {0} is invalid")]
    InvalidVersion(String),

    /// An artifact coordinate could not be resolved to a local file.
    #[error("Could not resolve artifact {0}")]
    Unresolved(String),
}

impl MergeError {
    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }

    /// Create a CSV error.
    pub fn csv(message: impl Into<String>) -> Self {
        Self::Csv(message.into())
    }

    /// Create a parse error for the given format and 1-based line.
    pub fn parse(format: &'static str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            message: message.into(),
        }
    }

    /// Create a missing archive entry error.
    pub fn missing_entry(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "archive entry",
            name: name.into(),
        }
    }

    /// Create a missing artifact error.
    pub fn missing_artifact(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "artifact",
            name: name.into(),
        }
    }

    /// Create a missing document field error.
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "field",
            name: name.into(),
        }
    }
}

impl From<serde_json::Error> for MergeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<csv::Error> for MergeError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

#[cfg(feature = "archive")]
impl From<zip::result::ZipError> for MergeError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Archive(e.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = MergeError> = std::result::Result<T, E>;
