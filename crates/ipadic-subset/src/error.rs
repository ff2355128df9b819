use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SubsetError {
    #[error("IO error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write progress report")]
    Report(#[source] std::io::Error),

    #[error("Failed to serialize dictionary")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse dictionary subset")]
    Parse(#[source] serde_json::Error),

    #[error("Missing \"entries\" array")]
    MissingEntries,

    #[error("Entry count mismatch: expected {expected}, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

impl SubsetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SubsetError::Io {
            path: path.into(),
            source,
        }
    }
}
