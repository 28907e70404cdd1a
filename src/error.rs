//! Top-level error for portal setup and the demo binary.

use crate::clients::{AuthError, StorageError};
use crate::config::ConfigError;
use crate::menu::MenuError;
use crate::navigation::NavigationError;
use crate::transport::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
