use crate::clients::portal_client::PortalClient;
use crate::endpoints::{EndpointCatalog, StorageCoord};
use crate::transport::{ApiClient, ApiError, ApiRequest, HttpBackend, Page, ReqwestBackend};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// One file or folder as listed by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub storage_id: i64,
    pub name: String,
    pub storage_type: String,
    pub owner_id: i64,
    pub owner_type: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Fields this client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct Rename<'a> {
    name: &'a str,
}

/// File and folder operations for one backend.
#[derive(Clone)]
pub struct StorageClient<B: HttpBackend = ReqwestBackend> {
    api: ApiClient<B>,
    endpoints: Arc<EndpointCatalog>,
}

impl<B: HttpBackend> StorageClient<B> {
    pub fn new(api: ApiClient<B>, endpoints: Arc<EndpointCatalog>) -> Self {
        Self { api, endpoints }
    }

    pub async fn info(
        &self,
        coord: &StorageCoord,
        admin: bool,
    ) -> Result<StorageInfo, StorageError> {
        let url = self.endpoints.storage_info(
            &coord.owner_type,
            &coord.owner_id,
            &coord.storage_type,
            &coord.storage_id,
            admin,
        );
        self.fetch(url).await
    }

    #[instrument(skip(self))]
    pub async fn rename(&self, coord: &StorageCoord, name: &str) -> Result<(), StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::EmptyName);
        }
        debug!("Sending request");
        let url = self.endpoints.storage_name(
            &coord.owner_type,
            &coord.owner_id,
            &coord.storage_type,
            &coord.storage_id,
        );
        let request = ApiRequest::put(url).json(&Rename { name })?;
        self.api.execute(request).await?;
        Ok(())
    }

    /// Entries directly inside `folder_id`; `0` is the owner's root folder.
    pub async fn list_folder(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        folder_id: impl Display,
    ) -> Result<Vec<StorageInfo>, StorageError> {
        self.fetch(self.endpoints.folder(owner_type, owner_id, folder_id))
            .await
    }

    /// One page of the signed-in user's files, or of every file in admin scope.
    #[instrument(skip(self))]
    pub async fn list_files(
        &self,
        admin: bool,
        page: u64,
        size: u64,
    ) -> Result<Page<StorageInfo>, StorageError> {
        debug!("Sending request");
        let url = self.endpoints.files(admin);
        Ok(self.api.get_page(url, page, size).await?)
    }

    /// Moves the storage into the recycle bin.
    pub async fn delete(&self, coord: &StorageCoord) -> Result<(), StorageError> {
        self.remove(self.endpoints.storage_at(coord, false)).await
    }
}

#[async_trait]
impl<B: HttpBackend> PortalClient for StorageClient<B> {
    type Backend = B;
    type Error = StorageError;

    fn api(&self) -> &ApiClient<B> {
        &self.api
    }

    fn endpoints(&self) -> &EndpointCatalog {
        &self.endpoints
    }
}
