//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. Every listing is complete: pagination
//! happens beneath the trait.

use crate::types::{Comment, Issue, Milestone, StateFilter};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read operations needed to assemble release notes for a
/// milestone. Implementations can hit the API directly or serve canned data
/// in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, Milestone, StateFilter};
///
/// async fn milestones(client: &dyn GitHubClient) -> anyhow::Result<Vec<Milestone>> {
///     client.fetch_milestones("rust-lang", "rust", StateFilter::All).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the milestones of a repository
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `state` - Which milestones to list (open, closed or all)
    ///
    /// # Returns
    ///
    /// All milestones in the order returned by GitHub, or an error if the
    /// API call fails.
    async fn fetch_milestones(
        &self,
        owner: &str,
        repo: &str,
        state: StateFilter,
    ) -> anyhow::Result<Vec<Milestone>>;

    /// Fetch the issues attached to a milestone
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `milestone_number` - The milestone's `number` (not its id)
    /// * `state` - Which issues to list
    ///
    /// # Returns
    ///
    /// All matching issues (pull requests included, as GitHub reports them).
    async fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
        state: StateFilter,
    ) -> anyhow::Result<Vec<Issue>>;

    /// Fetch all comments on an issue
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `issue_number` - Issue number
    async fn fetch_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<Vec<Comment>>;
}

#[async_trait]
impl<C: GitHubClient + ?Sized> GitHubClient for &C {
    async fn fetch_milestones(
        &self,
        owner: &str,
        repo: &str,
        state: StateFilter,
    ) -> anyhow::Result<Vec<Milestone>> {
        (**self).fetch_milestones(owner, repo, state).await
    }

    async fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
        state: StateFilter,
    ) -> anyhow::Result<Vec<Issue>> {
        (**self)
            .fetch_issues(owner, repo, milestone_number, state)
            .await
    }

    async fn fetch_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<Vec<Comment>> {
        (**self)
            .fetch_issue_comments(owner, repo, issue_number)
            .await
    }
}
