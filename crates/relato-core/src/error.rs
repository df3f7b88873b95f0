use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid term pattern: {0}")]
    Pattern(#[from] regex::Error),
}
