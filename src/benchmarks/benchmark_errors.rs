//! Error types for loading generator configs and exporting suites.

use crate::errors::CatalogError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BenchmarkError {
    ConfigParseError {
        path: String,
        source: serde_json::Error,
    },
    ConfigValidationError {
        field: String,
        message: String,
    },
    InvalidThreadCount {
        value: u32,
    },
    DuplicateThreadCount {
        value: u32,
    },
    UnknownPlatform {
        name: String,
    },
    IoError {
        source: std::io::Error,
    },
    SerializationError {
        source: serde_json::Error,
    },
    CatalogError {
        source: CatalogError,
    },
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::ConfigParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration file '{}': {}",
                    path, source
                )
            }
            BenchmarkError::ConfigValidationError { field, message } => {
                write!(
                    f,
                    "Configuration validation error for field '{}': {}",
                    field, message
                )
            }
            BenchmarkError::InvalidThreadCount { value } => {
                write!(f, "Invalid thread count: {}. Must be greater than 0", value)
            }
            BenchmarkError::DuplicateThreadCount { value } => {
                write!(
                    f,
                    "Thread count {} is listed more than once and would produce duplicate execution config ids",
                    value
                )
            }
            BenchmarkError::UnknownPlatform { name } => {
                write!(f, "Unknown benchmark platform: '{}'", name)
            }
            BenchmarkError::IoError { source } => {
                write!(f, "IO error: {}", source)
            }
            BenchmarkError::SerializationError { source } => {
                write!(f, "Failed to serialize benchmark suite: {}", source)
            }
            BenchmarkError::CatalogError { source } => {
                write!(f, "Catalog error: {}", source)
            }
        }
    }
}

impl Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchmarkError::ConfigParseError { source, .. } => Some(source),
            BenchmarkError::IoError { source } => Some(source),
            BenchmarkError::SerializationError { source } => Some(source),
            BenchmarkError::CatalogError { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchmarkError {
    fn from(error: std::io::Error) -> Self {
        BenchmarkError::IoError { source: error }
    }
}

impl From<serde_json::Error> for BenchmarkError {
    fn from(error: serde_json::Error) -> Self {
        BenchmarkError::SerializationError { source: error }
    }
}

impl From<CatalogError> for BenchmarkError {
    fn from(error: CatalogError) -> Self {
        BenchmarkError::CatalogError { source: error }
    }
}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
