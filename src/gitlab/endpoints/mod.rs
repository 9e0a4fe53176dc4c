// GitLab API endpoint functions.
// Typed wrappers over the generic GET, paginated GET, and POST verbs.

mod groups;
mod jobs;
mod pipelines;
mod projects;
mod repository;
mod triggers;
mod webhooks;

pub use repository::CI_CONFIG_FILE;

/// Append percent-encoded query parameters to an endpoint path.
pub(crate) fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{}?{}", path, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        assert_eq!(
            with_query("/groups", &[("name", "team a"), ("path", "team&a")]),
            "/groups?name=team+a&path=team%26a"
        );
    }

    #[test]
    fn test_with_query_without_params() {
        assert_eq!(with_query("/projects/1", &[]), "/projects/1");
    }
}
