//! Logs, statistics, quota restrictions and cluster status.

use super::EndpointCatalog;
use std::fmt::Display;

impl EndpointCatalog {
    pub fn restricts(&self, owner_type: impl Display, owner_id: impl Display) -> String {
        format!(
            "{}/{owner_type}/{owner_id}/statistics/restricts",
            self.prefix
        )
    }

    pub fn restrict_by_key(
        &self,
        owner_type: impl Display,
        owner_id: impl Display,
        key: impl Display,
    ) -> String {
        format!("{}/{key}", self.restricts(owner_type, owner_id))
    }

    pub fn statistics(&self, key: impl Display) -> String {
        format!("{}/statistics/{key}", self.admin_prefix)
    }

    /// Direct download through a previously issued file token.
    pub fn quickfire(&self, token: impl Display) -> String {
        format!("{}/quickfire/disk/{token}", self.prefix)
    }

    pub fn operation_logs_by_resource(
        &self,
        resource_type: impl Display,
        resource_id: impl Display,
    ) -> String {
        format!(
            "{}/{resource_type}/{resource_id}/operations/logs",
            self.prefix
        )
    }

    pub fn admin_operation_logs(&self) -> String {
        format!("{}/operations/logs", self.admin_prefix)
    }

    pub fn user_operation_logs(&self, user_id: impl Display) -> String {
        format!("{}/users/{user_id}/operations/logs", self.admin_prefix)
    }

    pub fn current_user_operation_logs(&self) -> String {
        format!("{}/user/operations/logs", self.prefix)
    }

    pub fn current_user_login_logs(&self) -> String {
        format!("{}/user/login/logs", self.prefix)
    }

    /// Login logs of every user, or of one user when `user_id` is set.
    pub fn login_logs(&self, user_id: Option<&str>) -> String {
        match user_id.filter(|id| !id.is_empty()) {
            Some(id) => format!("{}/users/{id}/login/logs", self.admin_prefix),
            None => format!("{}/users/login/logs", self.admin_prefix),
        }
    }

    pub fn error_logs(&self) -> String {
        format!("{}/system/errors", self.admin_prefix)
    }

    pub fn jobs(&self) -> String {
        format!("{}/jobs", self.admin_prefix)
    }

    pub fn server_status(&self) -> String {
        format!("{}/server/cfs/status", self.admin_prefix)
    }

    pub fn server_status_summary(&self) -> String {
        format!("{}/server/status/summary", self.admin_prefix)
    }

    pub fn cfs_status(&self, server_id: impl Display) -> String {
        format!("{}/{server_id}", self.server_status())
    }

    pub fn server_containers(&self, server_id: impl Display) -> String {
        format!("{}/containers", self.cfs_status(server_id))
    }

    pub fn file_servers(&self) -> String {
        format!("{}/server/cfs/connected", self.admin_prefix)
    }
}

#[cfg(test)]
mod tests {
    use crate::endpoints::EndpointCatalog;

    const A: &str = "http://h/api/v1/admin";

    #[test]
    fn test_system_paths() {
        let c = EndpointCatalog::new("http://", "h");
        assert_eq!(c.jobs(), format!("{A}/jobs"));
        assert_eq!(c.statistics("users"), format!("{A}/statistics/users"));
        assert_eq!(c.cfs_status("s1"), format!("{A}/server/cfs/status/s1"));
        assert_eq!(
            c.server_containers("s1"),
            format!("{A}/server/cfs/status/s1/containers")
        );
        assert_eq!(c.file_servers(), format!("{A}/server/cfs/connected"));
        assert_eq!(
            c.server_status_summary(),
            format!("{A}/server/status/summary")
        );
        assert_eq!(c.login_logs(None), format!("{A}/users/login/logs"));
        assert_eq!(c.login_logs(Some("3")), format!("{A}/users/3/login/logs"));
        assert_eq!(
            c.restrict_by_key("user", 1, "storage"),
            "http://h/api/v1/user/1/statistics/restricts/storage"
        );
        assert_eq!(
            c.operation_logs_by_resource("file", 9),
            "http://h/api/v1/file/9/operations/logs"
        );
    }
}
