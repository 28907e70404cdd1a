//! Drives a navigation from a requested path to a committed route.

use super::error::NavigationError;
use super::guard::{GuardDecision, NavigationGate};
use super::route::RouteName;
use super::table::{ResolvedRoute, RouteTable};
use std::sync::Arc;
use tracing::{debug, info};

/// Upper bound on guard redirects for a single navigation.
pub const MAX_GUARD_REDIRECTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationOutcome {
    pub requested: String,
    pub route: ResolvedRoute,
    pub title: String,
    /// Routes the gate redirected through, in order.
    pub guard_redirects: Vec<RouteName>,
}

impl NavigationOutcome {
    pub fn was_redirected(&self) -> bool {
        !self.guard_redirects.is_empty()
    }
}

pub struct Navigator {
    table: Arc<RouteTable>,
    gate: NavigationGate,
    current: Option<ResolvedRoute>,
    title: String,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, gate: NavigationGate) -> Self {
        let title = gate.titles().default_title.clone();
        Self {
            table,
            gate,
            current: None,
            title,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    /// The document title set by the last completed navigation.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn push(&mut self, path: &str) -> Result<NavigationOutcome, NavigationError> {
        let mut target = self.table.resolve(path)?;
        let mut guard_redirects = Vec::new();

        loop {
            match self.gate.before_each(&target, self.current.as_ref()) {
                GuardDecision::Proceed => break,
                GuardDecision::Redirect(name) => {
                    if guard_redirects.len() == MAX_GUARD_REDIRECTS {
                        return Err(NavigationError::RedirectLoop(path.to_string()));
                    }
                    debug!(from = %target.name, to = %name, "Guard redirect");
                    guard_redirects.push(name);
                    let redirect_path = self.table.href(name, &[])?;
                    target = self.table.resolve(&redirect_path)?;
                }
            }
        }

        let title = self.gate.after_each(&target);
        info!(path = %target.path, route = %target.name, "Navigated");
        self.title = title.clone();
        self.current = Some(target.clone());

        Ok(NavigationOutcome {
            requested: path.to_string(),
            route: target,
            title,
            guard_redirects,
        })
    }

    pub fn push_named(
        &mut self,
        name: RouteName,
        params: &[(&str, &str)],
    ) -> Result<NavigationOutcome, NavigationError> {
        let path = self.table.href(name, params)?;
        self.push(&path)
    }
}
