// GitLab API module.
// Provides the client, pagination, and types for the GitLab REST API v4.

pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod types;

pub use client::{API_VERSION_PATH, GitLabClient};
pub use endpoints::CI_CONFIG_FILE;
pub use pagination::TOTAL_PAGES_HEADER;
pub use types::*;
