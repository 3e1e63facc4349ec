use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreditError {
    #[error("Invalid {field}: {value:?} (expected one of: {expected})")]
    InvalidInput {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Delivery of {filename} failed: {reason}")]
    Delivery { filename: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl CreditError {
    pub fn invalid(field: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        CreditError::InvalidInput {
            field,
            value: value.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, CreditError>;
