// GitLab API resource types.
// Defines structs for (de)serializing GitLab REST API v4 payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visibility level of a group or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Private,
    Internal,
    Public,
    #[serde(other)]
    Unknown,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Internal => "internal",
            Visibility::Public => "public",
            Visibility::Unknown => "unknown",
        }
    }
}

/// GitLab group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub lfs_enabled: bool,
    pub avatar_url: Option<String>,
    pub web_url: String,
    #[serde(default)]
    pub request_access_enabled: bool,
    pub full_name: String,
    pub full_path: String,
    pub file_template_project_id: Option<u64>,
    pub parent_id: Option<u64>,
}

/// Namespace a project lives in (user or group).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub kind: String,
    pub full_path: String,
    pub parent_id: Option<u64>,
}

/// GitLab project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub name_with_namespace: String,
    pub path: String,
    pub path_with_namespace: String,
    pub description: Option<String>,
    /// Absent from `simple=yes` listings.
    pub visibility: Option<Visibility>,
    pub default_branch: Option<String>,
    pub ssh_url_to_repo: Option<String>,
    pub http_url_to_repo: Option<String>,
    pub web_url: String,
    pub readme_url: Option<String>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub star_count: u64,
    pub avatar_url: Option<String>,
    pub namespace: Option<Namespace>,
}

/// Status shared by pipelines and jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Created,
    WaitingForResource,
    Preparing,
    Pending,
    Running,
    Success,
    Failed,
    Canceled,
    Skipped,
    Manual,
    Scheduled,
    #[serde(other)]
    Unknown,
}

impl PipelineStatus {
    /// Whether the pipeline or job can no longer change state on its own.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            PipelineStatus::Success
                | PipelineStatus::Failed
                | PipelineStatus::Canceled
                | PipelineStatus::Skipped
        )
    }
}

/// CI/CD pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: u64,
    pub iid: Option<u64>,
    pub project_id: Option<u64>,
    pub status: PipelineStatus,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
    pub source: Option<String>,
    pub web_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Kind of a CI/CD variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    #[default]
    EnvVar,
    File,
    #[serde(other)]
    Unknown,
}

/// Variable a pipeline was run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub variable_type: VariableType,
}

/// GitLab user as embedded in jobs and triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub state: Option<String>,
    pub avatar_url: Option<String>,
    pub web_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_email: Option<String>,
    pub organization: Option<String>,
}

/// Commit a job ran against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub short_id: String,
    pub title: String,
    pub message: Option<String>,
    #[serde(default)]
    pub parent_ids: Vec<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub authored_date: Option<DateTime<Utc>>,
    pub committer_name: Option<String>,
    pub committer_email: Option<String>,
    pub committed_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Pipeline summary embedded in a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPipeline {
    pub id: u64,
    pub sha: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub status: PipelineStatus,
    pub web_url: Option<String>,
}

/// Runner that picked up a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRunner {
    pub id: u64,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub is_shared: bool,
    pub name: Option<String>,
    pub online: Option<bool>,
    pub status: Option<String>,
}

/// Artifact archive produced by a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub file_type: String,
    #[serde(default)]
    pub size: u64,
    pub filename: String,
    pub file_format: Option<String>,
}

/// CI/CD job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub name: String,
    pub stage: String,
    pub status: PipelineStatus,
    #[serde(rename = "ref")]
    pub ref_name: String,
    #[serde(default)]
    pub tag: bool,
    pub coverage: Option<f64>,
    #[serde(default)]
    pub allow_failure: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Seconds.
    pub duration: Option<f64>,
    pub user: Option<User>,
    pub commit: Option<Commit>,
    pub pipeline: Option<JobPipeline>,
    pub web_url: String,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    pub runner: Option<JobRunner>,
    pub artifacts_expire_at: Option<DateTime<Utc>>,
}

/// Action that can be posted to `/projects/:id/jobs/:job_id/:action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    Play,
    Retry,
    Cancel,
    Erase,
}

impl JobAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobAction::Play => "play",
            JobAction::Retry => "retry",
            JobAction::Cancel => "cancel",
            JobAction::Erase => "erase",
        }
    }
}

/// Pipeline trigger token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    pub id: u64,
    pub description: Option<String>,
    /// Masked by GitLab unless the caller owns the trigger.
    #[serde(default)]
    pub token: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_used: Option<DateTime<Utc>>,
    pub owner: Option<User>,
}

/// Project hook registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub url: String,
    #[serde(default)]
    pub push_events: bool,
    #[serde(default)]
    pub pipeline_events: bool,
    #[serde(default)]
    pub enable_ssl_verification: bool,
    /// Secret echoed back in the `X-Gitlab-Token` header of each delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            push_events: false,
            pipeline_events: false,
            enable_ssl_verification: true,
            token: None,
        }
    }
}

/// Entry kind in a repository tree listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeEntryKind {
    Tree,
    Blob,
    Commit,
    #[serde(other)]
    Unknown,
}

/// File or directory in a repository tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
    pub path: String,
    pub mode: String,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.kind == TreeEntryKind::Blob
    }
}

/// Operation applied to one file in a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileActionKind {
    Create,
    Delete,
    Move,
    Update,
    Chmod,
}

/// Content encoding of a [`FileAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileEncoding {
    Text,
    Base64,
}

/// One file change in a commit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAction {
    pub action: FileActionKind,
    /// Full path inside the repository, e.g. `app/main.go`.
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<FileEncoding>,
}

impl FileAction {
    pub fn create(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            action: FileActionKind::Create,
            file_path: file_path.into(),
            content: Some(content.into()),
            encoding: None,
        }
    }
}

/// Body of `POST /projects/:id/repository/commits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFileOptions {
    pub branch: String,
    pub commit_message: String,
    pub actions: Vec<FileAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_file_options_round_trip() {
        let options = CreateFileOptions {
            branch: "main".to_string(),
            commit_message: "add a.txt".to_string(),
            actions: vec![FileAction::create("a.txt", "hello")],
            author_email: None,
            author_name: None,
        };

        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(
            encoded,
            json!({
                "branch": "main",
                "commit_message": "add a.txt",
                "actions": [{"action": "create", "file_path": "a.txt", "content": "hello"}],
            })
        );

        let decoded: CreateFileOptions = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, options);
    }

    #[test]
    fn test_unknown_enum_values() {
        let status: PipelineStatus = serde_json::from_str(r#""brand_new_state""#).unwrap();
        assert_eq!(status, PipelineStatus::Unknown);

        let kind: TreeEntryKind = serde_json::from_str(r#""symlink""#).unwrap();
        assert_eq!(kind, TreeEntryKind::Unknown);
    }

    #[test]
    fn test_deserialize_simple_project() {
        let project: Project = serde_json::from_value(json!({
            "id": 3,
            "name": "Diaspora Client",
            "name_with_namespace": "Diaspora / Diaspora Client",
            "path": "diaspora-client",
            "path_with_namespace": "diaspora/diaspora-client",
            "description": null,
            "default_branch": "main",
            "web_url": "https://gitlab.example.com/diaspora/diaspora-client",
            "created_at": "2013-09-30T13:46:02Z",
            "last_activity_at": "2013-09-30T13:46:02Z",
            "namespace": {
                "id": 2,
                "name": "Diaspora",
                "path": "diaspora",
                "kind": "group",
                "full_path": "diaspora",
                "parent_id": null
            }
        }))
        .unwrap();

        assert_eq!(project.id, 3);
        assert_eq!(project.visibility, None);
        assert!(project.tag_list.is_empty());
        assert_eq!(project.namespace.unwrap().kind, "group");
    }

    #[test]
    fn test_deserialize_job() {
        let job: Job = serde_json::from_value(json!({
            "id": 7,
            "name": "rspec:other",
            "stage": "test",
            "status": "failed",
            "ref": "main",
            "tag": false,
            "coverage": null,
            "allow_failure": false,
            "created_at": "2015-12-24T15:51:21.802Z",
            "started_at": "2015-12-24T17:54:24.729Z",
            "finished_at": "2015-12-24T17:54:24.921Z",
            "duration": 0.192,
            "pipeline": {"id": 6, "ref": "main", "sha": "0ff3ae19", "status": "pending"},
            "web_url": "https://gitlab.example.com/foo/bar/-/jobs/7",
            "artifacts": [
                {"file_type": "trace", "size": 1505, "filename": "job.log", "file_format": null}
            ],
            "runner": null
        }))
        .unwrap();

        assert_eq!(job.status, PipelineStatus::Failed);
        assert!(job.status.is_finished());
        assert_eq!(job.ref_name, "main");
        assert_eq!(job.pipeline.unwrap().status, PipelineStatus::Pending);
        assert_eq!(job.artifacts[0].size, 1505);
    }

    #[test]
    fn test_webhook_omits_missing_token() {
        let mut hook = Webhook::new("https://ci.example.com/hook");
        hook.pipeline_events = true;

        let encoded = serde_json::to_value(&hook).unwrap();
        assert_eq!(
            encoded,
            json!({
                "url": "https://ci.example.com/hook",
                "push_events": false,
                "pipeline_events": true,
                "enable_ssl_verification": true,
            })
        );
    }

    #[test]
    fn test_job_action_paths() {
        assert_eq!(JobAction::Play.as_str(), "play");
        assert_eq!(JobAction::Retry.as_str(), "retry");
    }
}
