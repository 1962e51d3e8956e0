use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssessError>;

#[derive(Debug, Error)]
pub enum AssessError {
    #[error("Embedding error: {0}")]
    Embedding(String),
}
