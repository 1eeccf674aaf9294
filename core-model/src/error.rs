use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read snapshot {path}: {source}")]
    SnapshotRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write snapshot {path}: {source}")]
    SnapshotWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Snapshot document is not valid JSON: {0}")]
    SnapshotParse(#[from] serde_json::Error),

    #[error("Invalid record: {field} - {message}")]
    InvalidRecord { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
