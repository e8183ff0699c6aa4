//! Issue groups and the strategies that drive them
//!
//! A group pairs a heading with a filter deciding which issues belong to it
//! and a renderer turning each of those issues into a block of markdown.
//! Closures implement the strategy traits directly, so a group can be built
//! inline:
//!
//! ```rust
//! use gh_client::{Comment, Issue};
//! use gh_release_notes::IssueGrouping;
//!
//! let bugs = IssueGrouping::new(
//!     "## Bug Fixes",
//!     |issue: &Issue| issue.has_label("bug"),
//!     |issue: &Issue, _comments: &[Comment]| -> anyhow::Result<String> {
//!         Ok(format!("- {}", issue.title))
//!     },
//! );
//! assert_eq!(bugs.heading(), "## Bug Fixes");
//! ```

use gh_client::{Comment, Issue, Milestone};
use std::fmt;

/// Decides whether an issue belongs to a group
pub trait IssueFilter: Send + Sync {
    fn matches(&self, issue: &Issue) -> bool;
}

impl<F> IssueFilter for F
where
    F: Fn(&Issue) -> bool + Send + Sync,
{
    fn matches(&self, issue: &Issue) -> bool {
        self(issue)
    }
}

/// Renders one issue of a group, given all of its comments
pub trait IssueRenderer: Send + Sync {
    fn render(&self, issue: &Issue, comments: &[Comment]) -> anyhow::Result<String>;
}

impl<F> IssueRenderer for F
where
    F: Fn(&Issue, &[Comment]) -> anyhow::Result<String> + Send + Sync,
{
    fn render(&self, issue: &Issue, comments: &[Comment]) -> anyhow::Result<String> {
        self(issue, comments)
    }
}

/// Renders header or footer text for the released milestone
///
/// Returning `None` or an empty string leaves the section out.
pub trait MilestoneRenderer: Send + Sync {
    fn render(&self, milestone: &Milestone) -> Option<String>;
}

impl<F> MilestoneRenderer for F
where
    F: Fn(&Milestone) -> Option<String> + Send + Sync,
{
    fn render(&self, milestone: &Milestone) -> Option<String> {
        self(milestone)
    }
}

/// A heading plus the filter and renderer for the issues listed under it
///
/// Each issue is listed in at most one group: the first group whose filter
/// matches claims it.
pub struct IssueGrouping {
    heading: String,
    filter: Box<dyn IssueFilter>,
    renderer: Box<dyn IssueRenderer>,
}

impl IssueGrouping {
    /// Create a group
    ///
    /// # Arguments
    ///
    /// * `heading` - Text emitted above the group, e.g. `## Enhancements`
    /// * `filter` - Which issues belong to the group
    /// * `renderer` - How each issue of the group is rendered
    pub fn new(
        heading: impl Into<String>,
        filter: impl IssueFilter + 'static,
        renderer: impl IssueRenderer + 'static,
    ) -> Self {
        Self {
            heading: heading.into(),
            filter: Box::new(filter),
            renderer: Box::new(renderer),
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        self.filter.matches(issue)
    }

    pub fn render(&self, issue: &Issue, comments: &[Comment]) -> anyhow::Result<String> {
        self.renderer.render(issue, comments)
    }
}

impl fmt::Debug for IssueGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueGrouping")
            .field("heading", &self.heading)
            .finish_non_exhaustive()
    }
}

/// Everything that shapes the release notes document
///
/// Groups are evaluated and emitted in insertion order.
#[derive(Default)]
pub struct ReleaseNotesLayout {
    header: Option<Box<dyn MilestoneRenderer>>,
    groups: Vec<IssueGrouping>,
    footer: Option<Box<dyn MilestoneRenderer>>,
}

impl ReleaseNotesLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text emitted before the first group
    pub fn header(mut self, renderer: impl MilestoneRenderer + 'static) -> Self {
        self.header = Some(Box::new(renderer));
        self
    }

    /// Append a group; earlier groups win ties
    pub fn group(mut self, grouping: IssueGrouping) -> Self {
        self.groups.push(grouping);
        self
    }

    /// Append several groups in order
    pub fn groups(mut self, groupings: impl IntoIterator<Item = IssueGrouping>) -> Self {
        self.groups.extend(groupings);
        self
    }

    /// Text emitted after the last group
    pub fn footer(mut self, renderer: impl MilestoneRenderer + 'static) -> Self {
        self.footer = Some(Box::new(renderer));
        self
    }

    pub fn header_renderer(&self) -> Option<&dyn MilestoneRenderer> {
        self.header.as_deref()
    }

    pub fn groupings(&self) -> &[IssueGrouping] {
        &self.groups
    }

    pub fn footer_renderer(&self) -> Option<&dyn MilestoneRenderer> {
        self.footer.as_deref()
    }
}

impl fmt::Debug for ReleaseNotesLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseNotesLayout")
            .field("header", &self.header.is_some())
            .field("groups", &self.groups)
            .field("footer", &self.footer.is_some())
            .finish()
    }
}
