use crate::clients::{AuthClient, StorageClient};
use crate::config::PortalConfig;
use crate::endpoints::EndpointCatalog;
use crate::error::PortalError;
use crate::menu::{
    convert_to_menu_options, standard_menus, validate_menus, MenuOption, MenuSectionKey, Menus,
};
use crate::navigation::{NavigationGate, Navigator, RouteTable};
use crate::session::SharedSession;
use crate::transport::{ApiClient, HttpBackend, ReqwestBackend};
use std::sync::Arc;
use tracing::{info, warn};

/// Every component of the portal, wired around one shared session.
pub struct Portal<B: HttpBackend = ReqwestBackend> {
    pub config: PortalConfig,
    pub session: SharedSession,
    pub endpoints: Arc<EndpointCatalog>,
    pub api: ApiClient<B>,
    pub auth_client: AuthClient<B>,
    pub storage_client: StorageClient<B>,
    pub routes: Arc<RouteTable>,
    pub menus: Menus,
}

impl Portal {
    /// Builds the portal against the real backend described by `config`.
    pub fn from_config(config: PortalConfig) -> Result<Self, PortalError> {
        let backend = ReqwestBackend::new(config.request_timeout)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> Portal<B> {
    pub fn with_backend(config: PortalConfig, backend: B) -> Result<Self, PortalError> {
        let session = SharedSession::new();
        let endpoints = Arc::new(EndpointCatalog::from_config(&config));
        let routes = Arc::new(RouteTable::standard());
        let menus = standard_menus();
        validate_menus(&menus, &routes)?;

        let expired = session.clone();
        let api = ApiClient::new(backend, Arc::new(session.clone())).on_login_expired(move || {
            warn!("Login expired, clearing session");
            expired.sign_out();
        });

        let auth_client = AuthClient::new(api.clone(), Arc::clone(&endpoints), session.clone());
        let storage_client = StorageClient::new(api.clone(), Arc::clone(&endpoints));

        info!(base_url = endpoints.base_url(), "Portal ready");
        Ok(Self {
            config,
            session,
            endpoints,
            api,
            auth_client,
            storage_client,
            routes,
            menus,
        })
    }

    /// A fresh navigator reading this portal's session.
    pub fn navigator(&self) -> Navigator {
        let gate = NavigationGate::new(Arc::new(self.session.clone()), self.config.titles.clone());
        Navigator::new(Arc::clone(&self.routes), gate)
    }

    /// Render-ready options for one menu section; empty when the section is missing.
    pub fn menu_options(&self, section: MenuSectionKey) -> Result<Vec<MenuOption>, PortalError> {
        let Some(section) = self.menus.find_menu_section(section) else {
            return Ok(Vec::new());
        };
        Ok(convert_to_menu_options(&section.menus, &self.routes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionProvider, SessionUser};
    use crate::transport::mock::MockBackend;
    use crate::transport::{ApiError, Method};

    #[tokio::test]
    async fn test_expiry_hook_clears_shared_session() {
        let backend = MockBackend::new();
        let portal = Portal::with_backend(PortalConfig::default(), backend.clone()).unwrap();
        portal.session.sign_in(
            "stale",
            SessionUser {
                user_id: 2,
                username: "eve".to_string(),
                role: Some("USER".to_string()),
                email: None,
            },
        );
        backend
            .expect(Method::Get, "http://localhost:7010/api/v1/user")
            .respond_error(200, "A1002", "Token expired");

        let err = portal.auth_client.current_user().await.unwrap_err();
        assert!(matches!(
            err,
            crate::clients::AuthError::Api(ApiError::SessionExpired(ref body)) if body.status == 401
        ));
        assert!(!portal.session.is_login());
    }

    #[test]
    fn test_menu_options_for_both_sections() {
        let portal = Portal::with_backend(PortalConfig::default(), MockBackend::new()).unwrap();
        assert_eq!(portal.menu_options(MenuSectionKey::User).unwrap().len(), 4);
        assert_eq!(portal.menu_options(MenuSectionKey::Admin).unwrap().len(), 7);
    }

    #[test]
    fn test_navigator_uses_configured_titles() {
        let mut config = PortalConfig::default();
        config.titles.suffix = " - Disk".to_string();
        let portal = Portal::with_backend(config, MockBackend::new()).unwrap();
        let mut nav = portal.navigator();
        nav.push("/about").unwrap();
        assert_eq!(nav.title(), "About - Disk");
    }
}
