//! # Navigation
//!
//! Route table, the gate that guards every transition and a small navigator
//! tying both together.
//!
//! ```rust
//! use cloudhub_portal::navigation::{RouteName, RouteTable};
//!
//! let table = RouteTable::standard();
//! let resolved = table.resolve("/drive").unwrap();
//! assert_eq!(resolved.name, RouteName::DriveFile);
//! ```

mod error;
mod guard;
mod navigator;
mod route;
mod table;

pub use error::NavigationError;
pub use guard::{
    decide, document_title, GuardDecision, NavigationGate, LOGIN_ROUTE, NOT_FOUND_ROUTE,
};
pub use navigator::{NavigationOutcome, Navigator, MAX_GUARD_REDIRECTS};
pub use route::{RouteEntry, RouteMeta, RouteName, ViewId, ADMIN_ROUTE_PREFIX};
pub use table::{ResolvedRoute, RouteRecord, RouteTable, MAX_REDIRECTS};
