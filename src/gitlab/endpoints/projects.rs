use crate::error::Result;
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::{Project, Visibility};

use super::with_query;

impl GitLabClient {
    /// List all projects visible to the token, 100 per page.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get_list("/projects?per_page=100").await
    }

    /// Get a single project.
    pub async fn get_project(&self, project_id: u64) -> Result<Project> {
        self.get_resource(&format!("/projects/{}", project_id))
            .await
    }

    /// Create a private project in the given namespace.
    pub async fn create_project(&self, name: &str, namespace_id: u64) -> Result<Project> {
        let namespace_id = namespace_id.to_string();
        let endpoint = with_query(
            "/projects",
            &[
                ("name", name),
                ("namespace_id", namespace_id.as_str()),
                ("visibility", Visibility::Private.as_str()),
            ],
        );
        self.create_resource(&endpoint).await
    }
}
