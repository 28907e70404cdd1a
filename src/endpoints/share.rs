//! Share creation, lookup by token and save-to-drive endpoints.

use super::EndpointCatalog;
use std::fmt::Display;

impl EndpointCatalog {
    /// Shares created for one storage.
    pub fn storage_share(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
    ) -> String {
        format!(
            "{}/shares",
            self.storage(owner_type, owner_id, storage_type, storage_id, false)
        )
    }

    pub fn share_token_info(&self, token: impl Display) -> String {
        format!("{}/metadata", self.share_token(token))
    }

    pub fn share_token(&self, token: impl Display) -> String {
        format!("{}/shares/{token}", self.prefix)
    }

    pub fn user_share(&self, share_id: impl Display) -> String {
        format!("{}/user/shares/{share_id}", self.prefix)
    }

    /// Copies a shared storage into the caller's drive.
    pub fn share_save(
        &self,
        share_token: impl Display,
        storage_type: impl Display,
        storage_id: impl Display,
    ) -> String {
        format!(
            "{}/save/{storage_type}/{storage_id}",
            self.share_token(share_token)
        )
    }

    pub fn shares(&self, admin: bool) -> String {
        format!("{}/user/shares", self.scope(admin))
    }

    pub fn admin_shares(&self) -> String {
        format!("{}/shares", self.admin_prefix)
    }

    pub fn user_shares(&self, user_id: impl Display, admin: bool) -> String {
        format!("{}/users/{user_id}/shares", self.scope(admin))
    }
}
