//! # Portal Lifecycle
//!
//! [`Portal`] is the wiring point: it owns the session and builds every
//! component around it, so the rest of the crate never reaches for global
//! state.
//!
//! ```text
//! PortalConfig ─► EndpointCatalog ─┐
//!              └► HttpBackend ─────┼─► ApiClient ─► AuthClient / StorageClient
//! SharedSession ───────────────────┘        │
//!       ▲                                   └─ expiry hook clears the session
//!       └──────────── NavigationGate ◄── RouteTable
//! ```

pub mod portal;
pub mod tracing;

pub use portal::*;
pub use tracing::*;
