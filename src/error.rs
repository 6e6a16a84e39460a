use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("invalid ticket number {input:?}: must be exactly 6 digits")]
    InvalidNumber { input: String },

    #[error("draw data contains no draws")]
    EmptyRepository,

    #[error("failed to parse draw data: {0}")]
    Parse(#[from] serde_json::Error),
}
