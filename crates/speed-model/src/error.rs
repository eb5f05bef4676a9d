use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown year '{value}' (expected one of 2017..=2024)")]
    UnknownYear { value: String },
    #[error("invalid top-N value '{value}'")]
    InvalidTopN { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
