//! Milestone resolution and issue grouping
//!
//! [`ReleaseNotesService`] performs every request sequentially: the milestone
//! list, the closed issues of the resolved milestone, then the comments of
//! each issue a group claims. Issues no group claims never cost a comment
//! request.

use crate::error::{ReleaseNotesError, Result};
use crate::grouping::{IssueGrouping, MilestoneRenderer, ReleaseNotesLayout};
use gh_client::{GitHubClient, Issue, Milestone, StateFilter};
use log::{debug, info};

/// Builds release notes for one repository
#[derive(Debug, Clone)]
pub struct ReleaseNotesService<C> {
    client: C,
    owner: String,
    repo: String,
}

impl<C: GitHubClient> ReleaseNotesService<C> {
    /// Create a service for `owner/repo` backed by `client`
    pub fn new(client: C, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Resolve the milestone titled `title` and render its release notes
    pub async fn create_release_notes(
        &self,
        title: &str,
        layout: &ReleaseNotesLayout,
    ) -> Result<String> {
        let milestone = self.resolve_milestone(title).await?;
        self.render(&milestone, layout).await
    }

    /// Find the milestone with exactly this title among all milestones
    ///
    /// Titles are compared case-sensitively. When several milestones share
    /// the title, the first one GitHub lists wins.
    pub async fn resolve_milestone(&self, title: &str) -> Result<Milestone> {
        let milestones = self
            .client
            .fetch_milestones(&self.owner, &self.repo, StateFilter::All)
            .await
            .map_err(ReleaseNotesError::Client)?;

        let milestone = find_milestone(milestones, title)?;
        info!(
            "Resolved milestone '{}' to #{} in {}/{}",
            title, milestone.number, self.owner, self.repo
        );
        Ok(milestone)
    }

    /// Render the release notes of a resolved milestone
    ///
    /// Any client or renderer failure aborts the whole document.
    pub async fn render(&self, milestone: &Milestone, layout: &ReleaseNotesLayout) -> Result<String> {
        let mut unclaimed = self
            .client
            .fetch_issues(&self.owner, &self.repo, milestone.number, StateFilter::Closed)
            .await
            .map_err(ReleaseNotesError::Client)?;
        info!(
            "Milestone '{}' has {} closed issues",
            milestone.title,
            unclaimed.len()
        );

        let mut notes = String::new();

        if let Some(header) = render_milestone_text(layout.header_renderer(), milestone) {
            notes.push_str(&header);
            notes.push_str("\n\n");
        }

        let mut sections = Vec::new();
        for grouping in layout.groupings() {
            let claimed = claim(&mut unclaimed, grouping);
            if claimed.is_empty() {
                debug!("No issues for group '{}'", grouping.heading());
                continue;
            }
            debug!(
                "Group '{}' claimed {} issues",
                grouping.heading(),
                claimed.len()
            );

            let mut blocks = Vec::with_capacity(claimed.len());
            for issue in &claimed {
                blocks.push(self.render_issue(grouping, issue).await?);
            }
            sections.push(format!("{}\n\n{}", grouping.heading(), blocks.join("\n")));
        }
        notes.push_str(&sections.join("\n"));

        if !unclaimed.is_empty() {
            debug!("{} issues matched no group", unclaimed.len());
        }

        if let Some(footer) = render_milestone_text(layout.footer_renderer(), milestone) {
            notes.push_str("\n\n");
            notes.push_str(&footer);
        }

        Ok(notes)
    }

    async fn render_issue(&self, grouping: &IssueGrouping, issue: &Issue) -> Result<String> {
        let comments = self
            .client
            .fetch_issue_comments(&self.owner, &self.repo, issue.number)
            .await
            .map_err(ReleaseNotesError::Client)?;

        grouping
            .render(issue, &comments)
            .map_err(ReleaseNotesError::Render)
    }
}

/// First milestone titled exactly `title`
fn find_milestone(milestones: Vec<Milestone>, title: &str) -> Result<Milestone> {
    milestones
        .into_iter()
        .find(|m| m.title == title)
        .ok_or_else(|| ReleaseNotesError::MilestoneNotFound {
            title: title.to_string(),
        })
}

/// Move every issue the group matches out of `unclaimed`, keeping order
fn claim(unclaimed: &mut Vec<Issue>, grouping: &IssueGrouping) -> Vec<Issue> {
    let (claimed, rest): (Vec<Issue>, Vec<Issue>) = std::mem::take(unclaimed)
        .into_iter()
        .partition(|issue| grouping.matches(issue));
    *unclaimed = rest;
    claimed
}

fn render_milestone_text(
    renderer: Option<&dyn MilestoneRenderer>,
    milestone: &Milestone,
) -> Option<String> {
    renderer
        .and_then(|r| r.render(milestone))
        .filter(|text| !text.is_empty())
}
