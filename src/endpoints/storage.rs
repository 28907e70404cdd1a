//! File, folder and generic storage endpoints.

use super::{EndpointCatalog, StorageCoord};
use std::fmt::Display;

impl EndpointCatalog {
    pub fn file(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        file_id: impl Display,
    ) -> String {
        format!(
            "{}/{owner_type}/{owner_id}/disk/file/{file_id}",
            self.prefix
        )
    }

    pub fn recycles(&self, owner_type: impl Display, owner_id: impl Display) -> String {
        format!("{}/{owner_type}/{owner_id}/disk/recycles", self.prefix)
    }

    /// Files of one category (image, video, audio, document...).
    pub fn file_type(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        file_type: impl Display,
    ) -> String {
        format!(
            "{}/{owner_type}/{owner_id}/disk/file/category/{file_type}",
            self.prefix
        )
    }

    /// Download token issuance for a file.
    pub fn file_token(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        file_id: impl Display,
    ) -> String {
        format!(
            "{}/{owner_type}/{owner_id}/disk/file/{file_id}/token",
            self.prefix
        )
    }

    /// Upload target: the folder the new file lands in.
    pub fn upload_file(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        folder_id: impl Display,
    ) -> String {
        format!("{}/{owner_type}/{owner_id}/disk/{folder_id}", self.prefix)
    }

    pub fn storage(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        admin: bool,
    ) -> String {
        format!(
            "{}/{owner_type}/{owner_id}/disk/{storage_type}/{storage_id}",
            self.scope(admin)
        )
    }

    /// [`storage`](Self::storage) for a [`StorageCoord`].
    pub fn storage_at(&self, coord: &StorageCoord, admin: bool) -> String {
        self.storage(
            &coord.owner_type,
            &coord.owner_id,
            &coord.storage_type,
            &coord.storage_id,
            admin,
        )
    }

    pub fn storage_info(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        admin: bool,
    ) -> String {
        format!(
            "{}/info",
            self.storage(owner_type, owner_id, storage_type, storage_id, admin)
        )
    }

    /// Attributes are served from the tag listing of the storage.
    pub fn storage_attributes(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        admin: bool,
    ) -> String {
        self.storage_tags(owner_type, owner_id, storage_type, storage_id, admin)
    }

    pub fn storage_tags(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        admin: bool,
    ) -> String {
        format!(
            "{}/tags",
            self.storage(owner_type, owner_id, storage_type, storage_id, admin)
        )
    }

    pub fn storage_versions(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        admin: bool,
    ) -> String {
        format!(
            "{}/versions",
            self.storage(owner_type, owner_id, storage_type, storage_id, admin)
        )
    }

    pub fn storage_version(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        version: impl Display,
        admin: bool,
    ) -> String {
        format!(
            "{}/{version}",
            self.storage_versions(owner_type, owner_id, storage_type, storage_id, admin)
        )
    }

    pub fn storage_permissions(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        admin: bool,
    ) -> String {
        format!(
            "{}/permissions",
            self.storage(owner_type, owner_id, storage_type, storage_id, admin)
        )
    }

    pub fn storage_public_permission(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
    ) -> String {
        format!(
            "{}/public",
            self.storage_permissions(owner_type, owner_id, storage_type, storage_id, false)
        )
    }

    pub fn storage_user_permission(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        user_id: impl Display,
    ) -> String {
        format!(
            "{}/user/{user_id}",
            self.storage_permissions(owner_type, owner_id, storage_type, storage_id, false)
        )
    }

    pub fn folder(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        folder_id: impl Display,
    ) -> String {
        format!(
            "{}/{owner_type}/{owner_id}/disk/folder/{folder_id}",
            self.prefix
        )
    }

    /// Sub-folders only, without files.
    pub fn folders_in(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        folder_id: impl Display,
    ) -> String {
        format!("{}/folders", self.folder(owner_type, owner_id, folder_id))
    }

    pub fn storage_name(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
    ) -> String {
        format!(
            "{}/name",
            self.storage(owner_type, owner_id, storage_type, storage_id, false)
        )
    }

    /// Moves a storage under another folder.
    pub fn storage_parent(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
    ) -> String {
        self.storage_action(owner_type, owner_id, storage_type, storage_id, "parent")
    }

    pub fn storage_action(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
        action: impl Display,
    ) -> String {
        format!(
            "{}/{action}",
            self.storage_info(owner_type, owner_id, storage_type, storage_id, false)
        )
    }

    pub fn search(&self, owner_type: impl Display, owner_id: impl Display) -> String {
        format!("{}/{owner_type}/{owner_id}/disk/search", self.prefix)
    }

    pub fn files(&self, admin: bool) -> String {
        format!("{}/disk/files", self.scope(admin))
    }

    pub fn user_files(&self, user_id: impl Display, admin: bool) -> String {
        format!("{}/users/{user_id}/files", self.scope(admin))
    }

    pub fn folders(&self, admin: bool) -> String {
        format!("{}/disk/folders", self.scope(admin))
    }

    pub fn storages(&self, admin: bool) -> String {
        format!("{}/disk/storages", self.scope(admin))
    }
}
