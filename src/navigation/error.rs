//! Error types for route lookup and navigation.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// A route name string that is not part of the route table.
    #[error("Unknown route name: {0}")]
    UnknownRoute(String),

    #[error("No route matches path: {0}")]
    NoMatch(String),

    /// A path could not be built because a `:param` value was not supplied.
    #[error("Route {route} requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    #[error("Too many redirects while navigating to {0}")]
    RedirectLoop(String),
}
