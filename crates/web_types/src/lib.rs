//! Shared wire types for the portfolio backend API.
//!
//! This crate defines:
//! - Project / ProjectsResponse: the JSON payloads served by the backend
//! - parse_projects_response: decoding a raw list-response body
//! - FetchError: everything that can go wrong between request and records

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors from fetching or decoding the project list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Backend answered with a non-success HTTP status.
    #[error("Failed to fetch projects from backend")]
    Status(u16),

    /// Body was valid JSON but `records` was missing or not an array.
    #[error("Fetched data is not an array or does not contain a projects array")]
    Shape,

    /// Request failed before a usable response arrived.
    #[error("{0}")]
    Request(String),

    /// Body could not be decoded as JSON.
    #[error("{0}")]
    Json(String),
}

/// Result type for fetch and decode operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Identifier of a project record.
///
/// The backend is loose about this field: seed rows carry numeric ids
/// while imported rows carry opaque strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

/// One showcased work item.
///
/// Every field is optional on the wire; a record with holes still counts
/// as a record and renders with the gaps left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Record identifier, used for keying and the detail-page URL
    #[serde(default)]
    pub id: Option<ProjectId>,
    /// Image URL
    #[serde(default)]
    pub img: Option<String>,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Long descriptive text
    #[serde(default)]
    pub description: Option<String>,
    /// One-line descriptive text
    #[serde(default)]
    pub short_description: Option<String>,
}

impl Project {
    /// Whether this record's identifier renders to the given string.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.as_ref().is_some_and(|pid| pid.to_string() == id)
    }
}

/// Response payload of `GET /projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    /// Project records, in display order.
    pub records: Vec<Project>,
}

/// Decode a `GET /projects` response body into project records.
///
/// The body must be a JSON object carrying an array field `records`; any
/// other top-level shape is rejected with [`FetchError::Shape`]. Record
/// order is preserved.
pub fn parse_projects_response(body: &str) -> Result<Vec<Project>> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Json(e.to_string()))?;

    if !value.get("records").is_some_and(Value::is_array) {
        return Err(FetchError::Shape);
    }

    let response: ProjectsResponse =
        serde_json::from_value(value).map_err(|e| FetchError::Json(e.to_string()))?;

    Ok(response.records)
}
