// Client configuration.
// Holds the instance URL, access token, and request deadline.

use std::fmt;
use std::time::Duration;

use crate::error::{GitLabError, Result};

pub const ENV_URL: &str = "GITLAB_URL";
pub const ENV_TOKEN: &str = "GITLAB_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "GITLAB_TIMEOUT_SECS";

const DEFAULT_USER_AGENT: &str = concat!("gitlab-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings for a GitLab instance.
#[derive(Clone)]
pub struct GitLabConfig {
    /// Instance root, e.g. `https://gitlab.example.com`. The client adds `/api/v4`.
    pub base_url: String,
    /// Access token sent as `Private-Token`.
    pub token: String,
    /// Deadline applied to every request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl GitLabConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a config from `GITLAB_URL`, `GITLAB_TOKEN`, and optionally `GITLAB_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. A set but unparseable timeout is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(ENV_URL).ok_or(GitLabError::MissingConfig(ENV_URL))?;
        let token = lookup(ENV_TOKEN).ok_or(GitLabError::MissingConfig(ENV_TOKEN))?;

        let mut config = Self::new(base_url, token);
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| GitLabError::InvalidConfig {
                    name: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for GitLabConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
