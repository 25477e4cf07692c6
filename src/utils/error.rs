use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },

    #[error("Worker {id} failed: {message}")]
    WorkerError { id: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    Network,
    Concurrency,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::ConfigError { .. }
            | DrillError::ConfigValidationError { .. }
            | DrillError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DrillError::InputError { .. } => ErrorCategory::Input,
            DrillError::ProcessingError { .. } | DrillError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            DrillError::ServerError { .. } => ErrorCategory::Network,
            DrillError::WorkerError { .. } => ErrorCategory::Concurrency,
            DrillError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Concurrency => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the config file and command-line flags",
            ErrorCategory::Input => "Re-run and enter whitespace separated integers",
            ErrorCategory::Processing => "Use smaller values or fewer inputs",
            ErrorCategory::Network => "Make sure the port is free and the host is valid",
            ErrorCategory::Concurrency => "Re-run with --verbose to see which worker failed",
            ErrorCategory::System => "Check file permissions and available resources",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DrillError::InputError { message } => format!("Could not read input: {}", message),
            DrillError::WorkerError { id, message } => {
                format!("Worker {} did not finish: {}", id, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
