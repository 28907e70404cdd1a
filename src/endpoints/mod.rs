//! # Endpoint Catalog
//!
//! Pure functions from resource coordinates to backend URLs.
//!
//! Every REST path hangs off one of two prefixes:
//!
//! ```text
//! {base_url}/api/v1/...          regular scope
//! {base_url}/api/v1/admin/...    admin scope
//! ```
//!
//! Methods that accept an `admin` flag pick the prefix with it and nothing
//! else: the path suffix is identical in both scopes. No input is validated;
//! ids are spliced into the path exactly as given and the backend is left to
//! reject malformed ones.
//!
//! ```rust
//! use cloudhub_portal::endpoints::EndpointCatalog;
//!
//! let catalog = EndpointCatalog::new("http://", "disk.local");
//! assert_eq!(
//!     catalog.storage("user", "42", "file", "7", false),
//!     "http://disk.local/api/v1/user/42/disk/file/7"
//! );
//! assert_eq!(
//!     catalog.storage("user", "42", "file", "7", true),
//!     "http://disk.local/api/v1/admin/user/42/disk/file/7"
//! );
//! ```

mod auth;
mod favorite;
mod share;
mod storage;
mod system;
mod tag;
mod user;

use crate::config::PortalConfig;
use std::fmt::Display;

/// Path segment under `base_url` that every REST endpoint shares.
pub const API_ROOT: &str = "/api/v1";
/// Additional segment selecting the admin scope.
pub const ADMIN_SEGMENT: &str = "/admin";

/// Coordinates of one storage entity: the owner pair plus kind and id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageCoord {
    pub owner_type: String,
    pub owner_id: String,
    pub storage_type: String,
    pub storage_id: String,
}

impl StorageCoord {
    pub fn new(
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
    ) -> Self {
        Self {
            owner_type: owner_type.to_string(),
            owner_id: owner_id.to_string(),
            storage_type: storage_type.to_string(),
            storage_id: storage_id.to_string(),
        }
    }
}

/// Builds backend URLs for a fixed base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCatalog {
    base_url: String,
    ws_base_url: String,
    prefix: String,
    admin_prefix: String,
}

impl EndpointCatalog {
    /// `http_prefix` is the scheme part (`http://`), `base_host` the rest.
    pub fn new(http_prefix: impl Display, base_host: impl Display) -> Self {
        let base_url = format!("{http_prefix}{base_host}");
        let prefix = format!("{base_url}{API_ROOT}");
        Self {
            ws_base_url: format!("ws://{base_host}"),
            admin_prefix: format!("{prefix}{ADMIN_SEGMENT}"),
            prefix,
            base_url,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(&config.http_prefix, &config.base_host)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ws_base_url(&self) -> &str {
        &self.ws_base_url
    }

    /// `{base_url}/api/v1`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `{base_url}/api/v1/admin`
    pub fn admin_prefix(&self) -> &str {
        &self.admin_prefix
    }

    /// The only branch in the catalog.
    pub(crate) fn scope(&self, admin: bool) -> &str {
        if admin {
            &self.admin_prefix
        } else {
            &self.prefix
        }
    }
}

/// `/{id}` when a non-empty id is given, nothing otherwise.
pub(crate) fn optional_segment(id: Option<&str>) -> String {
    id.filter(|id| !id.is_empty())
        .map(|id| format!("/{id}"))
        .unwrap_or_default()
}
