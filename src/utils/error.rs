use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Interface '{name}' is already initialized")]
    AlreadyInitialized { name: String },
}

impl ArcadeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ArcadeError::IoError(e) => format!("Could not read or write a file: {}", e),
            ArcadeError::SerializationError(e) => format!("Could not encode output: {}", e),
            ArcadeError::ConfigParseError { message } => {
                format!("The configuration file is not valid: {}", message)
            }
            ArcadeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ArcadeError::AlreadyInitialized { name } => {
                format!("'{}' was already initialized", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ArcadeError::IoError(_) => "Check that the path exists and is readable",
            ArcadeError::SerializationError(_) => "Retry without --json",
            ArcadeError::ConfigParseError { .. } => "Check the file is valid TOML",
            ArcadeError::InvalidConfigValueError { .. } => {
                "Fix the field named above in the config file or on the command line"
            }
            ArcadeError::AlreadyInitialized { .. } => {
                "Create a new interface instead of initializing twice"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ArcadeError::ConfigParseError { .. } | ArcadeError::InvalidConfigValueError { .. } => 1,
            ArcadeError::AlreadyInitialized { .. } => 2,
            ArcadeError::IoError(_) | ArcadeError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArcadeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_exit_with_one() {
        let err = ArcadeError::InvalidConfigValueError {
            field: "interface.name".to_string(),
            value: String::new(),
            reason: "cannot be empty".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("interface.name"));
    }

    #[test]
    fn io_errors_exit_with_three() {
        let err = ArcadeError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.exit_code(), 3);
    }
}
