// Async client for the GitLab REST API v4.
// Groups, projects, pipelines, jobs, triggers, webhooks, and repository files.

pub mod config;
pub mod error;
pub mod gitlab;

pub use config::GitLabConfig;
pub use error::{GitLabError, Result};
pub use gitlab::*;
