use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: expected `#rrggbb` or `rrggbb`")]
    InvalidHex { input: String },

    #[error("invalid domain: {reason}")]
    InvalidDomain { reason: String },

    #[error("value is not a finite number")]
    InvalidValue,

    #[error("invalid gradient config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read gradient config: {0}")]
    Io(#[from] std::io::Error),
}
