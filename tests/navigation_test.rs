use cloudhub_portal::config::TitleConfig;
use cloudhub_portal::navigation::{GuardDecision, NavigationGate, Navigator, RouteName, RouteTable};
use cloudhub_portal::session::{SessionProvider, SessionSnapshot, SessionUser, SharedSession};
use std::sync::Arc;

fn session_with_role(role: Option<&str>) -> SessionSnapshot {
    SessionSnapshot::signed_in(
        "tok",
        SessionUser {
            user_id: 5,
            username: "carol".to_string(),
            role: role.map(str::to_string),
            email: None,
        },
    )
}

fn gate(session: SessionSnapshot) -> NavigationGate {
    NavigationGate::new(Arc::new(session), TitleConfig::default())
}

/// Every login-required route sends an anonymous visitor to the login page.
#[test]
fn test_private_routes_redirect_anonymous_to_login() {
    let table = RouteTable::standard();
    let gate = gate(SessionSnapshot::anonymous());

    for name in RouteName::ALL {
        let Some(record) = table.by_name(*name) else { continue };
        if record.redirect.is_some() {
            continue;
        }
        let Ok(path) = table.href(*name, &[]) else { continue };
        let target = table.resolve(&path).unwrap();
        if target.meta.require_login {
            assert_eq!(
                gate.before_each(&target, None),
                GuardDecision::Redirect(RouteName::Login),
                "{name}"
            );
        }
    }
}

/// Admin screens are invisible to baseline users and sessions without a role.
#[test]
fn test_admin_routes_hidden_from_baseline_users() {
    let table = RouteTable::standard();
    let paths = [
        "/admin",
        "/admin/users/42",
        "/admin/storages/user/1/file/2",
        "/admin/system/cfs/fs-1/monitor",
    ];

    for session in [session_with_role(Some("USER")), session_with_role(None)] {
        let gate = gate(session);
        for path in paths {
            let target = table.resolve(path).unwrap();
            assert!(target.name.is_admin_scope());
            assert_eq!(
                gate.before_each(&target, None),
                GuardDecision::Redirect(RouteName::Page404),
                "{path}"
            );
        }
    }

    let admin = gate(session_with_role(Some("ADMIN")));
    for path in paths {
        let target = table.resolve(path).unwrap();
        assert_eq!(admin.before_each(&target, None), GuardDecision::Proceed);
    }
}

#[test]
fn test_navigator_follows_session_changes() {
    let session = SharedSession::new();
    let gate = NavigationGate::new(Arc::new(session.clone()), TitleConfig::default());
    let mut navigator = Navigator::new(Arc::new(RouteTable::standard()), gate);

    let denied = navigator.push("/admin/tags").unwrap();
    assert_eq!(denied.route.name, RouteName::Login);

    session.sign_in(
        "tok",
        SessionUser {
            user_id: 1,
            username: "root".to_string(),
            role: Some("ADMIN".to_string()),
            email: None,
        },
    );
    assert!(session.is_login());

    let allowed = navigator.push("/admin/tags").unwrap();
    assert_eq!(allowed.route.name, RouteName::AdminTags);
    assert!(!allowed.was_redirected());
    assert_eq!(allowed.title, "Tags | Cloudhub Personal File Library");

    session.sign_out();
    let after_logout = navigator.push("/admin/tags").unwrap();
    assert_eq!(after_logout.route.name, RouteName::Login);
}

#[test]
fn test_share_links_are_public() {
    let session = SharedSession::new();
    let gate = NavigationGate::new(Arc::new(session), TitleConfig::default());
    let mut navigator = Navigator::new(Arc::new(RouteTable::standard()), gate);

    let outcome = navigator
        .push_named(RouteName::DriveShareToken, &[("token", "x9Yz")])
        .unwrap();
    assert_eq!(outcome.route.path, "/s/x9Yz");
    assert_eq!(outcome.route.param("token"), Some("x9Yz"));
    assert!(!outcome.was_redirected());
}
