//! # Navigation Gate
//!
//! Synchronous decision run before every transition, plus the title effect
//! run after it. The gate only reads the session; it never signs anyone out.
//!
//! Decision order:
//!
//! 1. target requires login and nobody is signed in → login page
//! 2. target is not admin-scoped → proceed
//! 3. anonymous, role missing or role is the baseline role → not-found page
//! 4. proceed

use super::route::{RouteMeta, RouteName};
use super::table::ResolvedRoute;
use crate::config::TitleConfig;
use crate::session::{SessionProvider, BASELINE_ROLE};
use std::sync::Arc;
use tracing::debug;

pub const LOGIN_ROUTE: RouteName = RouteName::Login;
pub const NOT_FOUND_ROUTE: RouteName = RouteName::Page404;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(RouteName),
}

#[derive(Clone)]
pub struct NavigationGate {
    session: Arc<dyn SessionProvider>,
    titles: TitleConfig,
}

impl NavigationGate {
    pub fn new(session: Arc<dyn SessionProvider>, titles: TitleConfig) -> Self {
        Self { session, titles }
    }

    pub fn titles(&self) -> &TitleConfig {
        &self.titles
    }

    pub fn before_each(&self, to: &ResolvedRoute, from: Option<&ResolvedRoute>) -> GuardDecision {
        let decision = decide(to.name, &to.meta, self.session.as_ref());
        debug!(
            to = %to.name,
            from = ?from.map(|route| route.name),
            ?decision,
            "Navigation guard"
        );
        decision
    }

    /// Document title to show once the transition to `to` has completed.
    pub fn after_each(&self, to: &ResolvedRoute) -> String {
        document_title(&to.meta, &self.titles)
    }
}

/// The gate decision for a target route against a session.
pub fn decide(name: RouteName, meta: &RouteMeta, session: &dyn SessionProvider) -> GuardDecision {
    let signed_in = session.is_login();

    if meta.require_login && !signed_in {
        return GuardDecision::Redirect(LOGIN_ROUTE);
    }
    if !name.is_admin_scope() {
        return GuardDecision::Proceed;
    }

    let privileged = session
        .role()
        .is_some_and(|role| !role.is_empty() && role != BASELINE_ROLE);
    if !signed_in || !privileged {
        return GuardDecision::Redirect(NOT_FOUND_ROUTE);
    }
    GuardDecision::Proceed
}

pub fn document_title(meta: &RouteMeta, titles: &TitleConfig) -> String {
    match meta.title {
        Some(title) if meta.original_title => title.to_string(),
        Some(title) => format!("{title}{}", titles.suffix),
        None => titles.default_title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RouteTable;
    use crate::session::{SessionSnapshot, SessionUser};

    fn user_with_role(role: Option<&str>) -> SessionSnapshot {
        SessionSnapshot::signed_in(
            "tok",
            SessionUser {
                user_id: 3,
                username: "alice".to_string(),
                role: role.map(str::to_string),
                email: None,
            },
        )
    }

    #[test]
    fn test_login_required_for_anonymous() {
        let table = RouteTable::standard();
        let anonymous = SessionSnapshot::anonymous();
        for record in table.records() {
            let Some(name) = record.name else { continue };
            if record.meta.require_login {
                assert_eq!(
                    decide(name, &record.meta, &anonymous),
                    GuardDecision::Redirect(RouteName::Login),
                    "{name}"
                );
            }
        }
    }

    #[test]
    fn test_admin_scope_denied_to_baseline_role() {
        let table = RouteTable::standard();
        let sessions = [
            user_with_role(Some("USER")),
            user_with_role(None),
            user_with_role(Some("")),
        ];
        for record in table.records() {
            let Some(name) = record.name else { continue };
            if !name.is_admin_scope() {
                continue;
            }
            for session in &sessions {
                assert_eq!(
                    decide(name, &record.meta, session),
                    GuardDecision::Redirect(RouteName::Page404),
                    "{name}"
                );
            }
        }
    }

    #[test]
    fn test_admin_scope_allowed_for_privileged_roles() {
        let table = RouteTable::standard();
        let record = table.by_name(RouteName::AdminSystemJobs).unwrap();
        assert_eq!(
            decide(
                RouteName::AdminSystemJobs,
                &record.meta,
                &user_with_role(Some("ADMIN")),
            ),
            GuardDecision::Proceed
        );
        assert_eq!(
            decide(
                RouteName::AdminSystemJobs,
                &record.meta,
                &user_with_role(Some("RESOURCE_MANAGER")),
            ),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn test_public_routes_always_proceed() {
        let anonymous = SessionSnapshot::anonymous();
        let meta = RouteMeta::public("About");
        assert_eq!(
            decide(RouteName::About, &meta, &anonymous),
            GuardDecision::Proceed
        );
        assert_eq!(
            decide(RouteName::AdminLayout, &RouteMeta::default(), &anonymous),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn test_document_title() {
        let titles = TitleConfig {
            default_title: "Disk".to_string(),
            suffix: " | Disk".to_string(),
        };
        assert_eq!(document_title(&RouteMeta::private("Tags"), &titles), "Tags | Disk");
        assert_eq!(document_title(&RouteMeta::default(), &titles), "Disk");
        let original = RouteMeta {
            title: Some("Welcome"),
            require_login: false,
            original_title: true,
        };
        assert_eq!(document_title(&original, &titles), "Welcome");
    }
}
