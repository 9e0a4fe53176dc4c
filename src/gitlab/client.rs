// GitLab API HTTP client.
// Handles authentication, status validation, and request/response processing.

use std::time::Duration;

use reqwest::{
    Client, Method, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::config::GitLabConfig;
use crate::error::{GitLabError, Result};

pub const API_VERSION_PATH: &str = "/api/v4";
pub const PRIVATE_TOKEN: &str = "private-token";

/// Request payload variants accepted by GitLab.
#[derive(Debug)]
pub(crate) enum RequestBody {
    Json(Vec<u8>),
    Form(Vec<(String, String)>),
}

/// A 2xx response with its body fully read.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// GitLab API client.
///
/// Cloning is cheap: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    client: Client,
    api_base: String,
    timeout: Option<Duration>,
}

impl GitLabClient {
    /// Create a new client for the configured instance.
    pub fn new(config: GitLabConfig) -> Result<Self> {
        let api_base = format!("{}{}", config.base_url.trim_end_matches('/'), API_VERSION_PATH);
        Url::parse(&api_base)?;

        let mut token = HeaderValue::from_str(&config.token)
            .map_err(|_| GitLabError::InvalidHeader("Private-Token"))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(PRIVATE_TOKEN), token);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| GitLabError::InvalidHeader("User-Agent"))?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_base,
            timeout: config.timeout,
        })
    }

    /// Create a client from `GITLAB_URL` and `GITLAB_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(GitLabConfig::from_env()?)
    }

    /// Clone of this client whose requests fail once `timeout` elapses.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Root of the versioned API, e.g. `https://gitlab.example.com/api/v4`.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Resolve an endpoint such as `/groups/42?simple=yes` against the API root.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.api_base, endpoint))?)
    }

    /// Send one request and read the whole body. Non-2xx statuses become errors.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<RequestBody>,
    ) -> Result<RawResponse> {
        debug!(%method, %url, "GitLab request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request = match body {
            Some(RequestBody::Json(bytes)) => request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes),
            Some(RequestBody::Form(fields)) => request.form(&fields),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            warn!(%method, %url, %status, "GitLab request failed");
            return Err(GitLabError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!(%status, bytes = body.len(), "GitLab response");
        Ok(RawResponse { headers, body })
    }

    /// GET a single resource and decode the JSON object.
    pub async fn get_resource<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        let response = self.send(Method::GET, url, None).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// POST with parameters in the query string and decode the created resource.
    pub async fn create_resource<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        let response = self.send(Method::POST, url, None).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// POST with no payload, ignoring whatever the server answers.
    pub async fn post_action(&self, endpoint: &str) -> Result<()> {
        let url = self.endpoint_url(endpoint)?;
        self.send(Method::POST, url, None).await?;
        Ok(())
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let payload = RequestBody::Json(serde_json::to_vec(body)?);
        let response = self.send(Method::POST, url, Some(payload)).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// POST a JSON body. The response body may be empty and is not decoded.
    pub async fn post_json_no_content<B>(&self, endpoint: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        let payload = RequestBody::Json(serde_json::to_vec(body)?);
        self.send(Method::POST, url, Some(payload)).await?;
        Ok(())
    }

    /// POST an `application/x-www-form-urlencoded` body. The response is not decoded.
    pub async fn post_form(&self, endpoint: &str, fields: Vec<(String, String)>) -> Result<()> {
        let url = self.endpoint_url(endpoint)?;
        self.send(Method::POST, url, Some(RequestBody::Form(fields))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> GitLabClient {
        GitLabClient::new(GitLabConfig::new(base_url, "glpat-test")).unwrap()
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        assert_eq!(
            client("https://gitlab.example.com/").api_base(),
            "https://gitlab.example.com/api/v4"
        );
        assert_eq!(
            client("https://gitlab.example.com").api_base(),
            "https://gitlab.example.com/api/v4"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_query() {
        let url = client("https://gitlab.example.com")
            .endpoint_url("/groups/42/projects?simple=yes")
            .unwrap();
        assert_eq!(url.path(), "/api/v4/groups/42/projects");
        assert_eq!(url.query(), Some("simple=yes"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = GitLabClient::new(GitLabConfig::new("not a url", "glpat-test")).unwrap_err();
        assert!(matches!(err, GitLabError::InvalidUrl(_)));
    }

    #[test]
    fn test_invalid_token() {
        let err = GitLabClient::new(GitLabConfig::new("https://gitlab.example.com", "bad\ntoken"))
            .unwrap_err();
        assert!(matches!(err, GitLabError::InvalidHeader("Private-Token")));
    }

    #[test]
    fn test_with_timeout_leaves_original_untouched() {
        let base = client("https://gitlab.example.com");
        let bounded = base.with_timeout(Duration::from_secs(5));
        assert_eq!(base.timeout(), None);
        assert_eq!(bounded.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(bounded.api_base(), base.api_base());
    }
}
