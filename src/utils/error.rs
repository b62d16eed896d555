use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Field '{field}' cannot be coerced from '{value}': {reason}")]
    Coercion {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    #[error("{operation} requires a non-empty collection")]
    EmptyCollection { operation: &'static str },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClinicError {
    pub fn coercion(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Coercion {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClinicError::EmptyCollection { .. } => ErrorSeverity::Low,
            ClinicError::Coercion { .. } | ClinicError::MissingField { .. } => {
                ErrorSeverity::Medium
            }
            ClinicError::Config { .. } | ClinicError::Toml(_) => ErrorSeverity::High,
            ClinicError::Io(_) | ClinicError::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClinicError::Coercion { .. } => "Check the field type in the seed file",
            ClinicError::MissingField { .. } => "Add the missing field to the seed record",
            ClinicError::EmptyCollection { .. } => "Seed at least one record before querying",
            ClinicError::Config { .. } => "Check the command line arguments and seed records",
            ClinicError::Toml(_) => {
                "Make sure the seed file is valid TOML with [[services]] and [[users]] tables"
            }
            ClinicError::Io(_) => "Make sure the seed file exists and is readable",
            ClinicError::Serialization(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
