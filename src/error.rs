use thiserror::Error;

pub type StyleResult<T> = Result<T, StyleError>;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid tick format `{pattern}`: {reason}")]
    InvalidTickFormat { pattern: String, reason: String },

    #[error("invalid style: {0}")]
    InvalidStyle(String),
}
