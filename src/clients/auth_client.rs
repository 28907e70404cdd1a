use crate::clients::portal_client::PortalClient;
use crate::endpoints::EndpointCatalog;
use crate::session::{SessionUser, SharedSession};
use crate::transport::{ApiClient, ApiError, ApiRequest, HttpBackend, ReqwestBackend};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Identity and password are required")]
    MissingCredentials,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Serialize)]
struct PasswordLogin<'a> {
    identity: &'a str,
    token: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct Registration<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

/// Payload of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Signs users in and out, keeping the shared session in step.
#[derive(Clone)]
pub struct AuthClient<B: HttpBackend = ReqwestBackend> {
    api: ApiClient<B>,
    endpoints: Arc<EndpointCatalog>,
    session: SharedSession,
}

impl<B: HttpBackend> AuthClient<B> {
    pub fn new(api: ApiClient<B>, endpoints: Arc<EndpointCatalog>, session: SharedSession) -> Self {
        Self {
            api,
            endpoints,
            session,
        }
    }

    /// Password login. On success the returned token becomes the session credential.
    #[instrument(skip(self, password))]
    pub async fn login(&self, identity: &str, password: &str) -> Result<SessionUser, AuthError> {
        if identity.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let body = PasswordLogin {
            identity,
            token: password,
        };
        let response: LoginResponse = self
            .api
            .post_json(self.endpoints.password_login(), &body)
            .await?;

        info!(user_id = response.user.user_id, "Signed in");
        self.session.sign_in(response.token, response.user.clone());
        Ok(response.user)
    }

    /// Ends the session on the server, then locally.
    ///
    /// The local session is cleared even when the server call fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AuthError> {
        let result = self
            .api
            .execute(ApiRequest::post(self.endpoints.logout()))
            .await;
        self.session.sign_out();
        info!("Signed out");
        result.map(|_| ()).map_err(AuthError::from)
    }

    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<(), AuthError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        debug!("Sending request");
        let request = ApiRequest::post(self.endpoints.register()).json(&Registration {
            username,
            password,
            email,
        })?;
        self.api.execute(request).await?;
        Ok(())
    }

    /// Details of the signed-in user as the server sees them.
    pub async fn current_user(&self) -> Result<SessionUser, AuthError> {
        self.fetch(self.endpoints.current_user_info()).await
    }
}

#[async_trait]
impl<B: HttpBackend> PortalClient for AuthClient<B> {
    type Backend = B;
    type Error = AuthError;

    fn api(&self) -> &ApiClient<B> {
        &self.api
    }

    fn endpoints(&self) -> &EndpointCatalog {
        &self.endpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionProvider;
    use crate::transport::mock::MockBackend;
    use crate::transport::{Method, AUTHORIZATION};
    use serde_json::json;

    fn setup() -> (AuthClient<MockBackend>, MockBackend, SharedSession) {
        let backend = MockBackend::new();
        let session = SharedSession::new();
        let api = ApiClient::new(backend.clone(), Arc::new(session.clone()));
        let endpoints = Arc::new(EndpointCatalog::new("http://", "disk.test"));
        (AuthClient::new(api, endpoints, session.clone()), backend, session)
    }

    #[tokio::test]
    async fn test_login_stores_token_and_user() {
        let (client, backend, session) = setup();
        backend
            .expect(Method::Post, "http://disk.test/api/v1/user/login/password")
            .respond_ok(json!({
                "token": "tok-9",
                "user": {"userId": 9, "username": "ada", "role": "ADMIN", "email": "ada@disk.test"}
            }));

        let user = client.login("ada", "secret").await.unwrap();
        assert_eq!(user.user_id, 9);
        assert_eq!(session.token().as_deref(), Some("tok-9"));
        assert_eq!(session.role().as_deref(), Some("ADMIN"));

        let sent = &backend.requests()[0];
        assert_eq!(
            sent.body,
            Some(json!({"identity": "ada", "token": "secret"}))
        );
        assert_eq!(sent.header(AUTHORIZATION), None);
        backend.verify();
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_anonymous() {
        let (client, backend, session) = setup();
        backend
            .expect(Method::Post, "http://disk.test/api/v1/user/login/password")
            .respond_error(200, "A0201", "Wrong password");

        let err = client.login("ada", "nope").await.unwrap_err();
        assert!(
            matches!(err, AuthError::Api(ApiError::Application(ref body)) if body.error_code == "A0201")
        );
        assert!(!session.is_login());
    }

    #[tokio::test]
    async fn test_empty_credentials_never_reach_the_server() {
        let (client, backend, _) = setup();
        assert!(matches!(client.login(" ", "x").await, Err(AuthError::MissingCredentials)));
        assert!(
            matches!(client.register("bob", "", "b@x").await, Err(AuthError::MissingCredentials))
        );
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_on_network_error() {
        let (client, backend, session) = setup();
        session.sign_in(
            "tok",
            SessionUser {
                user_id: 1,
                username: "ada".to_string(),
                role: None,
                email: None,
            },
        );
        backend
            .expect(Method::Post, "http://disk.test/api/v1/user/logout")
            .fail_network("connection reset");

        let err = client.logout().await.unwrap_err();
        assert!(matches!(err, AuthError::Api(ApiError::Network(_))));
        assert!(!session.is_login());
        assert_eq!(backend.requests()[0].header(AUTHORIZATION), Some("tok"));
    }
}
