use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Snapshot load/save failure. Fatal: the run cannot proceed without
    /// its base, and assembled work must not be silently lost.
    #[error("Snapshot persistence failed: {0}")]
    Persistence(#[from] core_model::ModelError),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
