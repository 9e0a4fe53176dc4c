use crate::error::Result;
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::{Group, Project, Visibility};

use super::with_query;

impl GitLabClient {
    /// List all groups visible to the token.
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        self.get_list("/groups").await
    }

    /// List the direct subgroups of a group.
    pub async fn list_subgroups(&self, group_id: u64) -> Result<Vec<Group>> {
        self.get_list(&format!("/groups/{}/subgroups", group_id))
            .await
    }

    /// List projects in a group (simple representation).
    pub async fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>> {
        self.get_list(&format!("/groups/{}/projects?simple=yes", group_id))
            .await
    }

    /// Get a single group.
    pub async fn get_group(&self, group_id: u64) -> Result<Group> {
        self.get_resource(&format!("/groups/{}", group_id)).await
    }

    /// Create a private subgroup whose path equals its name.
    pub async fn create_subgroup(&self, name: &str, parent_id: u64) -> Result<Group> {
        let parent_id = parent_id.to_string();
        let endpoint = with_query(
            "/groups",
            &[
                ("name", name),
                ("path", name),
                ("parent_id", parent_id.as_str()),
                ("visibility", Visibility::Private.as_str()),
            ],
        );
        self.create_resource(&endpoint).await
    }
}
