use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid amount '{value}': {reason}")]
    AmountError { value: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ShippingError>;
