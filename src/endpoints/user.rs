//! Users, passwords and user groups.

use super::{optional_segment, EndpointCatalog};
use std::fmt::Display;

impl EndpointCatalog {
    pub fn current_user_info(&self) -> String {
        format!("{}/user", self.prefix)
    }

    pub fn user(&self, admin: bool) -> String {
        format!("{}/user", self.scope(admin))
    }

    pub fn users(&self, user_id: Option<&str>, admin: bool) -> String {
        format!("{}/users{}", self.scope(admin), optional_segment(user_id))
    }

    pub fn search_users(&self, admin: bool) -> String {
        format!("{}/users/search", self.scope(admin))
    }

    pub fn user_info(&self, user_id: impl Display, admin: bool) -> String {
        format!("{}/users/{user_id}", self.scope(admin))
    }

    pub fn current_user_password(&self) -> String {
        format!("{}/user/password", self.prefix)
    }

    /// Admin password reset for another account.
    pub fn user_password(&self, user_id: impl Display) -> String {
        format!("{}/users/{user_id}/password", self.admin_prefix)
    }

    pub fn admin_users(&self) -> String {
        format!("{}/users", self.admin_prefix)
    }

    pub fn user_groups(&self, group_id: Option<&str>, admin: bool) -> String {
        format!("{}/groups{}", self.scope(admin), optional_segment(group_id))
    }

    pub fn user_group_setting(&self, group_id: impl Display) -> String {
        format!("{}/{group_id}/settings", self.user_groups(None, true))
    }

    pub fn user_group_members(&self, group_id: impl Display, admin: bool) -> String {
        format!("{}/{group_id}/members", self.user_groups(None, admin))
    }

    /// Groups an owner belongs to; `owner_type` is usually `user`.
    pub fn owner_user_group(
        &self,
        owner_id: impl Display,
        owner_type: impl Display,
        admin: bool,
    ) -> String {
        format!("{}/{owner_type}/{owner_id}/groups", self.scope(admin))
    }
}

#[cfg(test)]
mod tests {
    use crate::endpoints::EndpointCatalog;

    #[test]
    fn test_user_paths() {
        let c = EndpointCatalog::new("http://", "h");
        assert_eq!(c.current_user_info(), "http://h/api/v1/user");
        assert_eq!(c.users(None, true), "http://h/api/v1/admin/users");
        assert_eq!(c.user_info(7, false), "http://h/api/v1/users/7");
        assert_eq!(c.users(Some("7"), false), c.user_info(7, false));
        assert_eq!(c.user_password(7), "http://h/api/v1/admin/users/7/password");
        assert_eq!(c.current_user_password(), "http://h/api/v1/user/password");
        assert_eq!(
            c.user_group_setting(2),
            "http://h/api/v1/admin/groups/2/settings"
        );
        assert_eq!(
            c.user_group_members(2, false),
            "http://h/api/v1/groups/2/members"
        );
        assert_eq!(
            c.owner_user_group(7, "user", false),
            "http://h/api/v1/user/7/groups"
        );
    }
}
