//! HTTP client for the portfolio backend.

use gloo_net::http::Request;
use web_types::{FetchError, Project, parse_projects_response};

/// Configuration for the backend API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL (default: http://localhost:8000)
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ApiConfig {
    /// URL of the project list endpoint.
    pub fn projects_url(&self) -> String {
        format!("{}/projects", self.base_url)
    }
}

/// Fetch the project list from the backend.
///
/// One plain GET, no headers, no query, no retry, no timeout. A non-success
/// status and a malformed body each map to their own [`FetchError`] variant.
pub async fn fetch_projects(config: &ApiConfig) -> Result<Vec<Project>, FetchError> {
    let response = Request::get(&config.projects_url())
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    parse_projects_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_url() {
        assert_eq!(
            ApiConfig::default().projects_url(),
            "http://localhost:8000/projects"
        );
    }

    #[test]
    fn test_projects_url_with_custom_base() {
        let config = ApiConfig {
            base_url: "https://api.example.com".to_string(),
        };

        assert_eq!(config.projects_url(), "https://api.example.com/projects");
    }
}
