//! Error types and handling for the `AskWeather` application

use thiserror::Error;

/// Main error type for the `AskWeather` application
#[derive(Error, Debug)]
pub enum AskWeatherError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather provider communication errors
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Input validation errors
    #[error("Invalid query: {message}")]
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

impl AskWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
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
            AskWeatherError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            AskWeatherError::Provider { .. } => {
                "Unable to reach the weather provider. Please check your internet connection."
                    .to_string()
            }
            AskWeatherError::Validation { message } => {
                format!("Invalid query: {message}")
            }
            AskWeatherError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            AskWeatherError::General { message } => message.clone(),
        }
    }
}
