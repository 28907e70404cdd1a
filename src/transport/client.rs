//! # API Client
//!
//! [`ApiClient`] is the shared transport every screen uses. It adds the
//! session headers, hands the request to its [`HttpBackend`], and classifies
//! the completion into a payload or an [`ApiError`].
//!
//! The client is cheap to clone: backend, session and expiry hook are all
//! behind `Arc`s.
//!
//! ```rust,ignore
//! let client = ApiClient::new(ReqwestBackend::new(timeout)?, session.clone())
//!     .on_login_expired(move || session.sign_out());
//! let info: StorageInfo = client.get(catalog.storage_info("user", 1, "file", 7, false)).await?;
//! ```

use super::backend::{HttpBackend, ReqwestBackend};
use super::classify::{classify, Completion};
use super::envelope::{Page, ResponseEnvelope};
use super::error::ApiError;
use super::request::{request_config, ApiRequest, PreparedRequest};
use crate::session::SessionProvider;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Callback run when the server rejects the session credential.
pub type LoginExpiredHook = Arc<dyn Fn() + Send + Sync>;

pub struct ApiClient<B: HttpBackend = ReqwestBackend> {
    backend: Arc<B>,
    session: Arc<dyn SessionProvider>,
    on_login_expired: LoginExpiredHook,
}

impl<B: HttpBackend> Clone for ApiClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            session: Arc::clone(&self.session),
            on_login_expired: Arc::clone(&self.on_login_expired),
        }
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// A client with no expiry hook registered.
    pub fn new(backend: B, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            backend: Arc::new(backend),
            session,
            on_login_expired: Arc::new(|| {}),
        }
    }

    /// Registers the callback fired on session-expiry error codes.
    pub fn on_login_expired<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_login_expired = Arc::new(hook);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Adds the session credential and, for requests with a body, the JSON
    /// content type.
    pub fn prepare(&self, request: ApiRequest) -> PreparedRequest {
        let config = request_config(self.session.as_ref(), request.body.is_some());
        PreparedRequest::new(request, config)
    }

    /// Sends `request` and returns the unwrapped payload.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        debug!("Sending request");
        let completion = self.backend.send(self.prepare(request)).await;
        self.finish(completion)
    }

    /// Like [`execute`](Self::execute), but resolves to a cancelled error as
    /// soon as `cancel` completes, whatever the server is doing.
    #[instrument(skip(self, request, cancel), fields(method = %request.method, url = %request.url))]
    pub async fn execute_with_cancel<C>(
        &self,
        request: ApiRequest,
        cancel: C,
    ) -> Result<Value, ApiError>
    where
        C: Future<Output = ()> + Send,
    {
        debug!("Sending cancellable request");
        let prepared = self.prepare(request);
        let completion = tokio::select! {
            biased;
            _ = cancel => Completion::Cancelled,
            completion = self.backend.send(prepared) => completion,
        };
        self.finish(completion)
    }

    pub async fn get<T: DeserializeOwned>(&self, url: impl Into<String>) -> Result<T, ApiError> {
        let payload = self.execute(ApiRequest::get(url)).await?;
        data(payload)
    }

    /// Fetches page `page` (1-based) of `size` entries from a listing.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
        page: u64,
        size: u64,
    ) -> Result<Page<T>, ApiError> {
        let request = ApiRequest::get(url).query("page", page).query("size", size);
        let payload = self.execute(request).await?;
        page_of(payload, page, size)
    }

    pub async fn post_json<P, T>(&self, url: impl Into<String>, body: &P) -> Result<T, ApiError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = self.execute(ApiRequest::post(url).json(body)?).await?;
        data(payload)
    }

    pub async fn put_json<P, T>(&self, url: impl Into<String>, body: &P) -> Result<T, ApiError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = self.execute(ApiRequest::put(url).json(body)?).await?;
        data(payload)
    }

    pub async fn delete<T: DeserializeOwned>(&self, url: impl Into<String>) -> Result<T, ApiError> {
        let payload = self.execute(ApiRequest::delete(url)).await?;
        data(payload)
    }

    fn finish(&self, completion: Completion) -> Result<Value, ApiError> {
        let hook = Arc::clone(&self.on_login_expired);
        classify(completion, move || hook())
    }
}

/// Extracts the typed payload of a successful call.
///
/// Enveloped replies (those carrying `errorCode`) yield their `data` field,
/// with a missing field read as `null`; bare replies are decoded whole.
pub fn data<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    let value = match payload {
        Value::Object(mut map) if map.contains_key("errorCode") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Reads a paged listing. Counters missing from the envelope fall back to
/// the requested page and size, and the total to the number of items.
pub fn page_of<T: DeserializeOwned>(
    payload: Value,
    page: u64,
    size: u64,
) -> Result<Page<T>, ApiError> {
    let envelope = ResponseEnvelope::from_body(&payload).unwrap_or_default();
    let items = data::<Option<Vec<T>>>(payload)?.unwrap_or_default();
    Ok(Page {
        page: envelope.page.unwrap_or(page),
        size: envelope.size.unwrap_or(size),
        total: envelope.total.unwrap_or(items.len() as u64),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Folder {
        id: u64,
        name: String,
    }

    #[test]
    fn test_data_unwraps_envelope() {
        let folder: Folder = data(json!({
            "errorCode": "00000",
            "status": 200,
            "data": {"id": 1, "name": "docs"}
        }))
        .unwrap();
        assert_eq!(folder, Folder { id: 1, name: "docs".to_string() });
    }

    #[test]
    fn test_data_reads_bare_payload_and_null_data() {
        let folder: Folder = data(json!({"id": 2, "name": "raw"})).unwrap();
        assert_eq!(folder.id, 2);

        assert!(data::<()>(json!({"errorCode": "00000"})).is_ok());
    }

    #[test]
    fn test_page_of_reads_envelope_counters() {
        let page: Page<Folder> = page_of(
            json!({
                "errorCode": "00000",
                "data": [{"id": 1, "name": "a"}],
                "page": 3,
                "size": 1,
                "total": 7
            }),
            1,
            20,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!((page.page, page.size, page.total), (3, 1, 7));
        assert!(page.has_more());
    }

    #[test]
    fn test_page_of_falls_back_to_request() {
        let bare: Page<Folder> = page_of(json!([{"id": 1, "name": "a"}]), 2, 10).unwrap();
        assert_eq!((bare.page, bare.size, bare.total), (2, 10, 1));

        let empty: Page<Folder> =
            page_of(json!({"errorCode": "00000", "data": null}), 1, 10).unwrap();
        assert!(empty.items.is_empty());
        assert_eq!(empty.total, 0);
    }

    #[test]
    fn test_data_shape_mismatch_is_decode_error() {
        let result: Result<Folder, _> = data(json!({"errorCode": "00000", "data": [1, 2]}));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
