// Environment-based construction. Kept in its own test binary because it mutates the
// process environment.

use std::time::Duration;

use claims::{assert_matches, assert_ok};
use gitlab_client::config::{ENV_TIMEOUT_SECS, ENV_TOKEN, ENV_URL};
use gitlab_client::{GitLabClient, GitLabConfig, GitLabError};

#[test]
fn test_from_env() {
    // SAFETY: this is the only test in this binary, so no other thread reads the environment.
    unsafe {
        std::env::remove_var(ENV_TOKEN);
        std::env::set_var(ENV_URL, "https://gitlab.example.com/");
    }
    assert_matches!(GitLabConfig::from_env(), Err(GitLabError::MissingConfig(ENV_TOKEN)));

    unsafe {
        std::env::set_var(ENV_TOKEN, "glpat-from-env");
        std::env::set_var(ENV_TIMEOUT_SECS, "15");
    }
    let config = assert_ok!(GitLabConfig::from_env());
    assert_eq!(config.token, "glpat-from-env");
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));

    let client = assert_ok!(GitLabClient::from_env());
    assert_eq!(client.api_base(), "https://gitlab.example.com/api/v4");
    assert_eq!(client.timeout(), Some(Duration::from_secs(15)));

    unsafe {
        std::env::set_var(ENV_TIMEOUT_SECS, "30s");
    }
    assert_matches!(
        GitLabClient::from_env(),
        Err(GitLabError::InvalidConfig { name: ENV_TIMEOUT_SECS, .. })
    );
}
