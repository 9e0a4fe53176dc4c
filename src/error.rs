// Error types for the GitLab client.
// Covers transport failures, non-2xx responses, decoding, and pagination headers.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitLabError {
    #[error("GitLab request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request error response status code {status}, response: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid X-Total-Pages header value: {value:?}")]
    PaginationHeader { value: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid value for {0} header")]
    InvalidHeader(&'static str),

    #[error("Missing {0} environment variable")]
    MissingConfig(&'static str),

    #[error("invalid {name} value: {value:?}")]
    InvalidConfig { name: &'static str, value: String },
}

impl GitLabError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GitLabError::Status { status, .. } => Some(*status),
            GitLabError::Http(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, GitLabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_body() {
        let err = GitLabError::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"message":"404 Group Not Found"}"#.to_string(),
        };

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("404 Group Not Found"));
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        let err = GitLabError::PaginationHeader {
            value: "abc".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), r#"invalid X-Total-Pages header value: "abc""#);
    }
}
