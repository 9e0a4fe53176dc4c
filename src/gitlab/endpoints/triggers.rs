use tracing::info;

use crate::error::Result;
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::Trigger;

use super::with_query;

/// Form fields for `POST /projects/:id/trigger/pipeline`.
fn trigger_form(token: &str, git_ref: &str, variables: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut fields = vec![
        ("token".to_string(), token.to_string()),
        ("ref".to_string(), git_ref.to_string()),
    ];
    fields.extend(
        variables
            .iter()
            .map(|(key, value)| (format!("variables[{}]", key), value.to_string())),
    );
    fields
}

impl GitLabClient {
    /// List pipeline triggers of a project.
    pub async fn list_triggers(&self, project_id: u64) -> Result<Vec<Trigger>> {
        self.get_list(&format!("/projects/{}/triggers", project_id))
            .await
    }

    /// Create a pipeline trigger.
    pub async fn create_trigger(&self, project_id: u64, description: &str) -> Result<Trigger> {
        let endpoint = with_query(
            &format!("/projects/{}/triggers", project_id),
            &[("description", description)],
        );
        self.create_resource(&endpoint).await
    }

    /// Token of the first trigger that exposes one, if any.
    pub async fn trigger_token(&self, project_id: u64) -> Result<Option<String>> {
        let triggers = self.list_triggers(project_id).await?;
        Ok(triggers
            .into_iter()
            .map(|trigger| trigger.token)
            .find(|token| !token.is_empty()))
    }

    /// Start a pipeline on `git_ref` with a trigger token, passing extra CI variables.
    pub async fn trigger_pipeline(
        &self,
        project_id: u64,
        token: &str,
        git_ref: &str,
        variables: &[(&str, &str)],
    ) -> Result<()> {
        info!(project_id, git_ref, variables = variables.len(), "triggering pipeline");
        self.post_form(
            &format!("/projects/{}/trigger/pipeline", project_id),
            trigger_form(token, git_ref, variables),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_form_fields() {
        let fields = trigger_form("abc123", "main", &[("DEPLOY_ENV", "staging")]);
        assert_eq!(
            fields,
            vec![
                ("token".to_string(), "abc123".to_string()),
                ("ref".to_string(), "main".to_string()),
                ("variables[DEPLOY_ENV]".to_string(), "staging".to_string()),
            ]
        );
    }
}
