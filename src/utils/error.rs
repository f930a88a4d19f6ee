use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShearError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Invalid age threshold '{input}': {reason}")]
    InvalidAge { input: String, reason: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShearError>;

impl ShearError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn invalid_age(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAge {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}
