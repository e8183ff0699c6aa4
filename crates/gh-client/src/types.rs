//! GitHub API data transfer objects
//!
//! These types represent the subset of the GitHub REST payloads needed to
//! build release notes. Unknown fields are ignored, so the types deserialize
//! straight from the API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State filter accepted by the milestone and issue listing endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateFilter {
    Open,
    Closed,
    #[default]
    All,
}

impl StateFilter {
    /// Query parameter value understood by the GitHub API
    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
            StateFilter::All => "all",
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open/closed state of an issue or milestone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Open,
    Closed,
}

/// A user reference (only the login is kept)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

/// A repository milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Tracker-assigned id
    #[serde(default)]
    pub id: u64,

    /// Milestone number, the value the issue listing filters on
    pub number: u64,

    /// Milestone title (e.g. "1.0.0")
    pub title: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub state: State,

    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub html_url: Option<String>,
}

/// An issue label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            description: None,
        }
    }
}

/// An issue from the GitHub API
///
/// The issues endpoint also returns pull requests; those carry the
/// `pull_request` object, see [`Issue::is_pull_request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: u64,

    /// Issue number (e.g., 123)
    pub number: u64,

    pub title: String,

    /// Issue body, `None` when the issue was opened without a description
    #[serde(default)]
    pub body: Option<String>,

    /// Labels in the order GitHub returns them
    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub state: State,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// Body text, empty when the issue has no body
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Whether the issue carries a label with exactly this name
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    /// Whether this entry is actually a pull request
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// A comment on an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
