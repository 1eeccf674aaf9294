use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse provider response: {0}")]
    JsonParse(String),

    #[error("Rate limited by {provider}, retry after {retry_after_seconds}s")]
    RateLimited {
        provider: String,
        retry_after_seconds: u64,
    },
}

pub type Result<T> = std::result::Result<T, CoverError>;
