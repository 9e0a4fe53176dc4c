use tracing::info;

use crate::error::Result;
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::Webhook;

impl GitLabClient {
    /// Register each hook on the project, stopping at the first failure.
    pub async fn add_webhooks(&self, project_id: u64, webhooks: &[Webhook]) -> Result<()> {
        let endpoint = format!("/projects/{}/hooks", project_id);
        for webhook in webhooks {
            info!(project_id, url = %webhook.url, "adding webhook");
            self.post_json_no_content(&endpoint, webhook).await?;
        }
        Ok(())
    }
}
