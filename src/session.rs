//! # Session Access
//!
//! The navigation gate and the transport only ever *read* the login state. They
//! receive it through the [`SessionProvider`] trait instead of reaching for a
//! global store, so tests can hand them a fixed [`SessionSnapshot`].
//!
//! [`SharedSession`] is the in-process store the portal wires together: the auth
//! client writes it on login/logout and the transport's expiry hook clears it.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Role string the backend assigns to ordinary, non-privileged accounts.
pub const BASELINE_ROLE: &str = "USER";

/// Read-only view of the current login state.
pub trait SessionProvider: Send + Sync {
    /// Whether a credential is currently held.
    fn is_login(&self) -> bool;

    /// The credential sent as the `Authorization` header.
    fn token(&self) -> Option<String>;

    /// Role of the signed-in user, as issued by the backend.
    fn role(&self) -> Option<String>;
}

/// Details of the signed-in user kept next to the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// An immutable copy of the session, usable directly as a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl SessionSnapshot {
    /// An anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in session holding `token` for `user`.
    pub fn signed_in(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }
}

impl SessionProvider for SessionSnapshot {
    fn is_login(&self) -> bool {
        self.token.is_some()
    }

    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn role(&self) -> Option<String> {
        self.user.as_ref().and_then(|user| user.role.clone())
    }
}

/// Cloneable handle to the process-wide session.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<SessionSnapshot>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the session with a signed-in one.
    pub fn sign_in(&self, token: impl Into<String>, user: SessionUser) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = SessionSnapshot::signed_in(token, user);
    }

    /// Drops the credential and user details.
    pub fn sign_out(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = SessionSnapshot::anonymous();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SessionProvider for SharedSession {
    fn is_login(&self) -> bool {
        self.snapshot().is_login()
    }

    fn token(&self) -> Option<String> {
        self.snapshot().token
    }

    fn role(&self) -> Option<String> {
        self.snapshot().role()
    }
}
