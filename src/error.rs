//! Error types and handling for the CityAtlas application

use thiserror::Error;

/// Main error type for the CityAtlas application
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl AtlasError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AtlasError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AtlasError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AtlasError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            AtlasError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = AtlasError::config("missing port");
        assert!(matches!(config_err, AtlasError::Config { .. }));

        let validation_err = AtlasError::validation("empty prompt");
        assert!(matches!(validation_err, AtlasError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = AtlasError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = AtlasError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let atlas_err: AtlasError = io_err.into();
        assert!(matches!(atlas_err, AtlasError::Io { .. }));
    }
}
