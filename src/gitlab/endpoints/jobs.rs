use tracing::info;

use crate::error::Result;
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::{Job, JobAction};

impl GitLabClient {
    /// List jobs of a project.
    pub async fn list_project_jobs(&self, project_id: u64) -> Result<Vec<Job>> {
        self.get_list(&format!("/projects/{}/jobs", project_id))
            .await
    }

    /// List jobs of a pipeline.
    pub async fn list_pipeline_jobs(&self, project_id: u64, pipeline_id: u64) -> Result<Vec<Job>> {
        self.get_list(&format!(
            "/projects/{}/pipelines/{}/jobs",
            project_id, pipeline_id
        ))
        .await
    }

    /// Get a single job.
    pub async fn get_job(&self, project_id: u64, job_id: u64) -> Result<Job> {
        self.get_resource(&format!("/projects/{}/jobs/{}", project_id, job_id))
            .await
    }

    /// Play, retry, cancel, or erase a job and return its new state.
    pub async fn job_action(&self, project_id: u64, job_id: u64, action: JobAction) -> Result<Job> {
        info!(project_id, job_id, action = action.as_str(), "job action");
        self.create_resource(&format!(
            "/projects/{}/jobs/{}/{}",
            project_id,
            job_id,
            action.as_str()
        ))
        .await
    }
}
