// src/shared/api/error.rs

/// Shown when a failed response carries no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "API request failed";

/// Failure talking to the portfolio service.
///
/// `NotFound` is kept apart from `Transport` because "no portfolio for this
/// slug" and "no portfolio yet" are normal states for the caller, not failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    /// Network failure or any non-2xx response other than 404.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Transport {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Could not encode request body: {0}")]
    Encode(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        ApiError::Transport {
            status,
            message: Some(message.into()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Message suitable for a dismissible error banner.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: Some(err.to_string()),
        }
    }
}
