use super::{optional_segment, EndpointCatalog};
use std::fmt::Display;

impl EndpointCatalog {
    pub fn tag_groups(&self, group_id: Option<&str>, admin: bool) -> String {
        format!(
            "{}/tags/groups{}",
            self.scope(admin),
            optional_segment(group_id)
        )
    }

    /// Applies a tag group to file content.
    pub fn tag_groups_file(&self, group_id: impl Display, admin: bool) -> String {
        format!("{}/tags/groups/{group_id}/infile", self.scope(admin))
    }

    pub fn tags(&self, tag_id: Option<&str>, admin: bool) -> String {
        format!("{}/tags{}", self.scope(admin), optional_segment(tag_id))
    }

    pub fn tag_keywords(&self, tag_id: impl Display) -> String {
        format!("{}/tags/{tag_id}/keywords", self.admin_prefix)
    }

    pub fn tag_group_tags(&self, group_id: impl Display, tag_id: Option<&str>) -> String {
        format!(
            "{}/tags/groups/{group_id}/tags{}",
            self.admin_prefix,
            optional_segment(tag_id)
        )
    }
}
