use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },

    #[error("Generation failed: {message}")]
    GenerationError { message: String },
}

impl MatchError {
    /// Exit code for the CLI. Configuration and input problems are the
    /// user's to fix (2); everything else is a runtime failure (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            MatchError::ConfigError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. }
            | MatchError::TomlError(_)
            | MatchError::InvalidInputError { .. } => 2,
            MatchError::IoError(_) | MatchError::GenerationError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
