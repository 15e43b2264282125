use crate::utils::validation::SchemaViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Schema validation failed: {}", format_violations(.violations))]
    SchemaError { violations: Vec<SchemaViolation> },

    #[error("Command error: {message}")]
    CommandError { message: String },
}

impl AppError {
    /// One-line message suitable for the console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "File not found".to_string(),
                std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
                _ => format!("File access failed: {}", e),
            },
            AppError::SerializationError(e) => format!("Malformed JSON: {}", e),
            AppError::ConfigError { message } => format!("Bad configuration: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration value for {}: {}", field, reason)
            }
            AppError::SchemaError { violations } => format_violations(violations),
            AppError::CommandError { message } => message.clone(),
        }
    }
}

fn format_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, AppError>;
