//! Dataset loading errors.
//!
//! Every variant is fatal: the process must not start with partial data.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while reading one of the dataset files.
#[derive(Debug, Error)]
pub enum DataError {
    /// A dataset file does not exist.
    #[error("Dataset file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A dataset file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV table is malformed or is missing a required column.
    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The country geometry file is not a valid GeoJSON feature collection.
    #[error("Malformed GeoJSON in {}: {source}", path.display())]
    GeoJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            DataError::FileNotFound { path }
            | DataError::Io { path, .. }
            | DataError::Csv { path, .. }
            | DataError::GeoJson { path, .. } => path,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DataError::FileNotFound { .. } => "E_DATA_NOT_FOUND",
            DataError::Io { .. } => "E_DATA_IO",
            DataError::Csv { .. } => "E_DATA_CSV",
            DataError::GeoJson { .. } => "E_DATA_GEOJSON",
        }
    }

    /// Build the error for a failed `File::open`, separating a missing file
    /// from other I/O failures.
    pub(crate) fn from_open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::FileNotFound { path }
        } else {
            DataError::Io { path, source }
        }
    }
}
