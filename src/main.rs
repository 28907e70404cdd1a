//! Demo binary: builds the portal from the environment, prints the side
//! menus and walks a few navigations as an anonymous visitor.

use cloudhub_portal::config::PortalConfig;
use cloudhub_portal::lifecycle::{setup_tracing, Portal};
use cloudhub_portal::menu::MenuSectionKey;
use cloudhub_portal::navigation::RouteName;
use cloudhub_portal::PortalError;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    setup_tracing();

    let config = PortalConfig::from_env()?;
    let portal = Portal::from_config(config)?;
    info!(
        api = portal.endpoints.prefix(),
        admin_api = portal.endpoints.admin_prefix(),
        "Starting portal"
    );

    for section in [MenuSectionKey::User, MenuSectionKey::Admin] {
        let options = portal.menu_options(section)?;
        println!(
            "{section} menu:\n{}",
            serde_json::to_string_pretty(&options)?
        );
    }

    let mut navigator = portal.navigator();
    let span = tracing::info_span!("navigation");
    async {
        for path in ["/", "/drive", "/admin/users", "/s/abc123", "/no/such/page"] {
            let outcome = navigator.push(path)?;
            info!(
                requested = path,
                route = %outcome.route.name,
                title = %outcome.title,
                redirects = ?outcome.guard_redirects,
                "Navigation finished"
            );
        }
        let outcome = navigator.push_named(RouteName::DriveShareToken, &[("token", "demo")])?;
        info!(path = %outcome.route.path, "Share page reachable without login");
        Ok::<_, PortalError>(())
    }
    .instrument(span)
    .await?;

    info!("Portal demo completed");
    Ok(())
}
