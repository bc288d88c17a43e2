// Error and outcome types shared by loaders and views
use std::path::PathBuf;

/// Result of reading a source file that may legitimately be absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Available(T),
    Unavailable { path: PathBuf },
}

impl<T: Default> Loaded<T> {
    /// The loaded value, or an empty one when the source was absent
    pub fn unwrap_or_empty(self) -> T {
        match self {
            Loaded::Available(value) => value,
            Loaded::Unavailable { .. } => T::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("invalid data in {}: {}", .path.display(), .cause)]
    Invalid { path: PathBuf, cause: String },

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    pub fn invalid(path: impl Into<PathBuf>, cause: impl ToString) -> Self {
        DataError::Invalid {
            path: path.into(),
            cause: cause.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("no numeric values in column {0}")]
    NoNumericValues(String),
}
