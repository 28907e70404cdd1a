//! Favorite groups and their items.

use super::{optional_segment, EndpointCatalog};
use std::fmt::Display;

impl EndpointCatalog {
    /// Favorite groups of the current user, or one group when `group_id` is set.
    pub fn favorites(&self, group_id: Option<&str>) -> String {
        format!(
            "{}/user/favorites{}",
            self.prefix,
            optional_segment(group_id)
        )
    }

    pub fn user_favorites(
        &self,
        user_id: impl Display,
        group_id: Option<&str>,
        admin: bool,
    ) -> String {
        format!(
            "{}/users/{user_id}/favorites{}",
            self.scope(admin),
            optional_segment(group_id)
        )
    }

    pub fn user_favorite_item(
        &self,
        user_id: impl Display,
        group_id: impl Display,
        item_id: Option<&str>,
        admin: bool,
    ) -> String {
        format!(
            "{}/users/{user_id}/favorites/{group_id}{}",
            self.scope(admin),
            optional_segment(item_id)
        )
    }

    pub fn favorite_item(&self, group_id: impl Display, item_id: Option<&str>) -> String {
        format!(
            "{}/user/favorites/{group_id}{}",
            self.prefix,
            optional_segment(item_id)
        )
    }
}
