use crate::endpoints::EndpointCatalog;
use crate::transport::{ApiClient, ApiError, ApiRequest, HttpBackend};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Trait for resource-specific clients to share the plain read and delete calls.
///
/// Implementors only expose their transport and catalog; `fetch` and `remove`
/// come for free and map transport failures into the client's own error.
#[async_trait]
pub trait PortalClient: Send + Sync {
    type Backend: HttpBackend;

    /// The resource-specific error type.
    type Error: From<ApiError> + Send + Sync;

    fn api(&self) -> &ApiClient<Self::Backend>;

    fn endpoints(&self) -> &EndpointCatalog;

    /// GET `url` and decode the payload.
    #[tracing::instrument(skip(self))]
    async fn fetch<T>(&self, url: String) -> Result<T, Self::Error>
    where
        T: DeserializeOwned + Send + 'static,
    {
        tracing::debug!("Sending request");
        self.api().get(url).await.map_err(Self::Error::from)
    }

    /// DELETE `url`, ignoring any payload.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, url: String) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.api()
            .execute(ApiRequest::delete(url))
            .await
            .map(|_| ())
            .map_err(Self::Error::from)
    }
}
