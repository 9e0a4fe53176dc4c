use crate::error::Result;
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::{Pipeline, Variable};

impl GitLabClient {
    /// List pipelines of a project, newest first.
    pub async fn list_pipelines(&self, project_id: u64) -> Result<Vec<Pipeline>> {
        self.get_list(&format!("/projects/{}/pipelines", project_id))
            .await
    }

    /// Get a single pipeline.
    pub async fn get_pipeline(&self, project_id: u64, pipeline_id: u64) -> Result<Pipeline> {
        self.get_resource(&format!(
            "/projects/{}/pipelines/{}",
            project_id, pipeline_id
        ))
        .await
    }

    /// Get the variables a pipeline was run with.
    pub async fn list_pipeline_variables(
        &self,
        project_id: u64,
        pipeline_id: u64,
    ) -> Result<Vec<Variable>> {
        self.get_list(&format!(
            "/projects/{}/pipelines/{}/variables",
            project_id, pipeline_id
        ))
        .await
    }
}
