use tracing::info;

use crate::error::Result;
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::{CreateFileOptions, FileAction, TreeEntry};

use super::with_query;

pub const CI_CONFIG_FILE: &str = ".gitlab-ci.yml";

/// Guess the project language from well-known manifest files at the repository root.
fn detect_language_from(entries: &[TreeEntry]) -> Option<&'static str> {
    entries
        .iter()
        .filter(|entry| entry.is_blob())
        .find_map(|entry| match entry.name.as_str() {
            "package.json" => Some("html"),
            "go.mod" | "Gopkg.toml" => Some("go"),
            "composer.json" => Some("php"),
            _ => None,
        })
}

impl GitLabClient {
    /// List the repository root at `git_ref`.
    pub async fn list_tree(&self, project_id: u64, git_ref: &str) -> Result<Vec<TreeEntry>> {
        let endpoint = with_query(
            &format!("/projects/{}/repository/tree", project_id),
            &[("per_page", "100"), ("ref", git_ref)],
        );
        self.get_list(&endpoint).await
    }

    /// Whether `.gitlab-ci.yml` exists at the repository root.
    pub async fn has_ci_file(&self, project_id: u64, git_ref: &str) -> Result<bool> {
        let entries = self.list_tree(project_id, git_ref).await?;
        Ok(entries
            .iter()
            .any(|entry| entry.is_blob() && entry.name == CI_CONFIG_FILE))
    }

    /// Detect the project language: `html`, `go`, or `php`.
    pub async fn detect_language(
        &self,
        project_id: u64,
        git_ref: &str,
    ) -> Result<Option<&'static str>> {
        let entries = self.list_tree(project_id, git_ref).await?;
        Ok(detect_language_from(&entries))
    }

    /// Commit new files to `branch`. `files` holds `(path, content)` pairs.
    pub async fn create_files(
        &self,
        project_id: u64,
        branch: &str,
        commit_message: &str,
        files: &[(&str, &str)],
    ) -> Result<()> {
        let options = CreateFileOptions {
            branch: branch.to_string(),
            commit_message: commit_message.to_string(),
            actions: files
                .iter()
                .map(|(path, content)| FileAction::create(*path, *content))
                .collect(),
            author_email: None,
            author_name: None,
        };

        info!(project_id, branch, files = files.len(), "committing files");
        self.post_json_no_content(
            &format!("/projects/{}/repository/commits", project_id),
            &options,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::types::TreeEntryKind;

    fn entry(name: &str, kind: TreeEntryKind) -> TreeEntry {
        TreeEntry {
            id: "a1e8f8d745cc87e3a9248358d9352bb7f9a0aeba".to_string(),
            name: name.to_string(),
            kind,
            path: name.to_string(),
            mode: "100644".to_string(),
        }
    }

    #[test]
    fn test_detect_language_first_manifest_wins() {
        let entries = vec![
            entry("README.md", TreeEntryKind::Blob),
            entry("go.mod", TreeEntryKind::Blob),
            entry("package.json", TreeEntryKind::Blob),
        ];
        assert_eq!(detect_language_from(&entries), Some("go"));
    }

    #[test]
    fn test_detect_language_ignores_directories() {
        let entries = vec![
            entry("composer.json", TreeEntryKind::Tree),
            entry("src", TreeEntryKind::Tree),
        ];
        assert_eq!(detect_language_from(&entries), None);
    }
}
