use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Gateway rejected request (HTTP {status}): {}", .message.as_deref().unwrap_or("no error message"))]
    ServerRejection { status: u16, message: Option<String> },

    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Protocol,
    Configuration,
    Internal,
}

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Invalid server response";

impl SiteError {
    /// Classify a transport error from `reqwest`.
    ///
    /// Body decode failures mean the gateway answered with something we could not read;
    /// everything else means the request never completed.
    pub fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_decode() {
            SiteError::MalformedResponse {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }
        } else {
            SiteError::Network {
                message: err.to_string(),
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::Network { .. } => ErrorCategory::Network,
            SiteError::ServerRejection { .. } => ErrorCategory::Server,
            SiteError::MalformedResponse { .. } | SiteError::SerializationError(_) => {
                ErrorCategory::Protocol
            }
            SiteError::ConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SiteError::IoError(_) => ErrorCategory::Internal,
        }
    }

    /// Text shown to a visitor. `generic` is used when the gateway rejected the request
    /// without saying why.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            SiteError::Network { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            SiteError::ServerRejection {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            SiteError::ServerRejection { .. } => generic.to_string(),
            SiteError::MalformedResponse { .. } | SiteError::SerializationError(_) => {
                MALFORMED_RESPONSE_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
