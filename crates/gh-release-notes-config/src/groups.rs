//! Declarative issue groups
//!
//! A `[[groups]]` table names a heading, the labels/title pattern an issue
//! must match and one of the built-in renderers. Validation turns it into a
//! [`GroupDefinition`], which builds the engine's [`IssueGrouping`].

use crate::error::ConfigError;
use gh_client::{Comment, Issue, Milestone};
use gh_release_notes::builtin::{
    AllOf, BulletRenderer, DescriptionRenderer, LabelFilter, MilestoneTemplateRenderer,
    NotPullRequest, ReleaseNotesSectionRenderer, TitlePatternFilter, TitleRenderer,
};
use gh_release_notes::{IssueGrouping, IssueRenderer, MilestoneRenderer};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How each issue of a group is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// `- [GH-<number>]: <title>`
    #[default]
    Bullet,
    /// `- <title>`
    Title,
    /// `### <title> [GH-<number>]` followed by the issue's release notes
    ReleaseNotes,
}

impl IssueRenderer for RendererKind {
    fn render(&self, issue: &Issue, comments: &[Comment]) -> anyhow::Result<String> {
        match self {
            RendererKind::Bullet => BulletRenderer.render(issue, comments),
            RendererKind::Title => TitleRenderer.render(issue, comments),
            RendererKind::ReleaseNotes => ReleaseNotesSectionRenderer.render(issue, comments),
        }
    }
}

/// One `[[groups]]` table as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    /// Text above the group, e.g. `## Enhancements`
    pub heading: Option<String>,

    /// Issue must carry any of these labels (empty = no label requirement)
    #[serde(default)]
    pub labels: Vec<String>,

    /// Issue must carry none of these labels
    #[serde(default)]
    pub exclude_labels: Vec<String>,

    /// Regular expression the issue title must match
    #[serde(default)]
    pub title_pattern: Option<String>,

    /// Whether pull requests listed by the issues endpoint may join the group
    #[serde(default = "default_include_pull_requests")]
    pub include_pull_requests: bool,

    #[serde(default)]
    pub renderer: RendererKind,
}

fn default_include_pull_requests() -> bool {
    true
}

impl GroupConfig {
    /// Check required fields and compile the title pattern
    ///
    /// `index` is the group's position, used to name missing fields.
    pub fn validate(self, index: usize) -> Result<GroupDefinition, ConfigError> {
        let heading = self
            .heading
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField(format!("groups[{}].heading", index)))?;

        let title_pattern = self
            .title_pattern
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern {
                    heading: heading.clone(),
                    source,
                })
            })
            .transpose()?;

        Ok(GroupDefinition {
            heading,
            labels: self.labels,
            exclude_labels: self.exclude_labels,
            title_pattern,
            include_pull_requests: self.include_pull_requests,
            renderer: self.renderer,
        })
    }
}

/// A validated group, ready to build an [`IssueGrouping`]
#[derive(Debug, Clone)]
pub struct GroupDefinition {
    pub heading: String,
    pub labels: Vec<String>,
    pub exclude_labels: Vec<String>,
    pub title_pattern: Option<Regex>,
    pub include_pull_requests: bool,
    pub renderer: RendererKind,
}

impl GroupDefinition {
    pub fn to_grouping(&self) -> IssueGrouping {
        let mut filter = AllOf::new().and(
            LabelFilter::any_of(self.labels.iter().cloned())
                .excluding(self.exclude_labels.iter().cloned()),
        );
        if let Some(pattern) = &self.title_pattern {
            filter = filter.and(TitlePatternFilter::new(pattern.clone()));
        }
        if !self.include_pull_requests {
            filter = filter.and(NotPullRequest);
        }

        IssueGrouping::new(self.heading.clone(), filter, self.renderer)
    }
}

/// `[header]` / `[footer]` tables
///
/// Either `prefix` followed by the milestone description, or a `template`
/// with `{title}`, `{number}` and `{description}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MilestoneTextConfig {
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub template: Option<String>,
}

impl MilestoneTextConfig {
    /// Reject a table setting both `prefix` and `template`
    ///
    /// `section` is the table name, used to name the fields.
    pub fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if self.template.is_some() && !self.prefix.is_empty() {
            return Err(ConfigError::ConflictingFields {
                first: format!("{}.prefix", section),
                second: format!("{}.template", section),
            });
        }
        Ok(())
    }
}

impl MilestoneRenderer for MilestoneTextConfig {
    fn render(&self, milestone: &Milestone) -> Option<String> {
        match &self.template {
            Some(template) => MilestoneTemplateRenderer::new(template.as_str()).render(milestone),
            None => DescriptionRenderer::new(self.prefix.as_str()).render(milestone),
        }
    }
}
