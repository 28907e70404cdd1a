//! # Transport Errors
//!
//! Every failed call is normalized into one [`ErrorBody`] shape so callers can
//! present it without caring whether the request was cancelled, never reached
//! the server, or was refused by it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error code attached to cancelled requests.
pub const CANCEL_CODE: &str = "CANCEL";
/// Error code attached to requests that produced no server response.
pub const NETWORK_ERROR_CODE: &str = "D0000";

pub const CANCEL_MESSAGE: &str = "Request cancelled";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const SESSION_EXPIRED_MESSAGE: &str =
    "Login expired or login credential invalid, please log in again";

/// The uniform `{tip, message, errorCode, status}` error shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Short text meant for display.
    pub tip: String,
    pub message: String,
    pub error_code: String,
    pub status: u16,
}

impl ErrorBody {
    /// A body whose tip and message are the same text.
    pub fn new(error_code: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            tip: message.clone(),
            message,
            error_code: error_code.into(),
            status,
        }
    }

    pub fn cancelled() -> Self {
        Self::new(CANCEL_CODE, 500, CANCEL_MESSAGE)
    }

    pub fn network() -> Self {
        Self::new(NETWORK_ERROR_CODE, 500, NETWORK_ERROR_MESSAGE)
    }

    /// Keeps the server's code so callers can tell the two expiry causes apart.
    pub fn session_expired(error_code: impl Into<String>) -> Self {
        Self::new(error_code, 401, SESSION_EXPIRED_MESSAGE)
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (status {})", self.error_code, self.message, self.status)
    }
}

/// Outcome of a call that did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request cancelled: {0}")]
    Cancelled(ErrorBody),

    #[error("Network unreachable: {0}")]
    Network(ErrorBody),

    /// The credential was rejected; the expiry hook has already run.
    #[error("Session expired: {0}")]
    SessionExpired(ErrorBody),

    /// A business error reported by the backend.
    #[error("Application error: {0}")]
    Application(ErrorBody),

    #[error("Failed to encode request body: {0}")]
    Encode(String),

    #[error("Unexpected response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// The normalized body, for every variant that carries one.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Cancelled(body)
            | ApiError::Network(body)
            | ApiError::SessionExpired(body)
            | ApiError::Application(body) => Some(body),
            ApiError::Encode(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        self.body().map(|body| body.error_code.as_str())
    }

    pub fn status(&self) -> Option<u16> {
        self.body().map(|body| body.status)
    }
}
