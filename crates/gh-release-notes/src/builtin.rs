//! Ready-made filters and renderers
//!
//! These cover the common ways of grouping a milestone (by label, by title)
//! and of rendering an issue (one bullet per issue, or a section taken from a
//! `### Release Notes` block). The engine itself knows nothing about them.

use crate::grouping::{IssueFilter, IssueRenderer, MilestoneRenderer};
use gh_client::{Comment, Issue, Milestone};
use regex::Regex;

/// Marker introducing the release-notes text in an issue body or comment
pub const RELEASE_NOTES_MARKER: &str = "### Release Notes";

/// Matches every issue
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl IssueFilter for MatchAll {
    fn matches(&self, _issue: &Issue) -> bool {
        true
    }
}

/// Matches issues carrying any of `labels` and none of `excluded`
///
/// An empty `labels` list matches every issue not excluded.
#[derive(Debug, Clone, Default)]
pub struct LabelFilter {
    labels: Vec<String>,
    excluded: Vec<String>,
}

impl LabelFilter {
    pub fn any_of<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            excluded: Vec::new(),
        }
    }

    pub fn excluding<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(labels.into_iter().map(Into::into));
        self
    }
}

impl IssueFilter for LabelFilter {
    fn matches(&self, issue: &Issue) -> bool {
        let included = self.labels.is_empty() || self.labels.iter().any(|l| issue.has_label(l));
        included && !self.excluded.iter().any(|l| issue.has_label(l))
    }
}

/// Matches issues whose title matches a regular expression
#[derive(Debug, Clone)]
pub struct TitlePatternFilter {
    pattern: Regex,
}

impl TitlePatternFilter {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl IssueFilter for TitlePatternFilter {
    fn matches(&self, issue: &Issue) -> bool {
        self.pattern.is_match(&issue.title)
    }
}

/// Rejects pull requests listed by the issues endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct NotPullRequest;

impl IssueFilter for NotPullRequest {
    fn matches(&self, issue: &Issue) -> bool {
        !issue.is_pull_request()
    }
}

/// Matches when every inner filter matches (and when there are none)
#[derive(Default)]
pub struct AllOf {
    filters: Vec<Box<dyn IssueFilter>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: impl IssueFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl IssueFilter for AllOf {
    fn matches(&self, issue: &Issue) -> bool {
        self.filters.iter().all(|f| f.matches(issue))
    }
}

/// `- <title>`
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleRenderer;

impl IssueRenderer for TitleRenderer {
    fn render(&self, issue: &Issue, _comments: &[Comment]) -> anyhow::Result<String> {
        Ok(format!("- {}", issue.title))
    }
}

/// `- [GH-<number>]: <title>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletRenderer;

impl IssueRenderer for BulletRenderer {
    fn render(&self, issue: &Issue, _comments: &[Comment]) -> anyhow::Result<String> {
        Ok(format!("- [GH-{}]: {}", issue.number, issue.title))
    }
}

/// A `### <title> [GH-<number>]` section holding the issue's release notes
///
/// The notes are the text after [`RELEASE_NOTES_MARKER`] in the first
/// comment containing it. Without such a comment the issue body is used,
/// from the marker on if present, otherwise whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseNotesSectionRenderer;

impl ReleaseNotesSectionRenderer {
    /// Extract the release notes text of an issue
    pub fn release_notes<'a>(issue: &'a Issue, comments: &'a [Comment]) -> &'a str {
        comments
            .iter()
            .find_map(|c| after_marker(&c.body))
            .unwrap_or_else(|| {
                let body = issue.body_text();
                after_marker(body).unwrap_or(body)
            })
    }
}

fn after_marker(text: &str) -> Option<&str> {
    text.split_once(RELEASE_NOTES_MARKER).map(|(_, notes)| notes)
}

impl IssueRenderer for ReleaseNotesSectionRenderer {
    fn render(&self, issue: &Issue, comments: &[Comment]) -> anyhow::Result<String> {
        let notes = Self::release_notes(issue, comments);
        Ok(format!(
            "### {} [GH-{}]\n\n{}\n",
            issue.title,
            issue.number,
            notes.trim()
        ))
    }
}

/// `<prefix><milestone description>`
#[derive(Debug, Clone, Default)]
pub struct DescriptionRenderer {
    prefix: String,
}

impl DescriptionRenderer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl MilestoneRenderer for DescriptionRenderer {
    fn render(&self, milestone: &Milestone) -> Option<String> {
        let description = milestone.description.as_deref().unwrap_or_default();
        Some(format!("{}{}", self.prefix, description))
    }
}

/// Milestone text from a template with `{title}`, `{number}` and `{description}`
///
/// A missing description renders as the empty string.
#[derive(Debug, Clone, Default)]
pub struct MilestoneTemplateRenderer {
    template: String,
}

impl MilestoneTemplateRenderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl MilestoneRenderer for MilestoneTemplateRenderer {
    fn render(&self, milestone: &Milestone) -> Option<String> {
        let description = milestone.description.as_deref().unwrap_or_default();
        Some(
            self.template
                .replace("{title}", &milestone.title)
                .replace("{number}", &milestone.number.to_string())
                .replace("{description}", description),
        )
    }
}
