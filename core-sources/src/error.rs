use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] bridge_http::HttpError),

    #[error("Failed to parse listing response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;
