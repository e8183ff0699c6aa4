//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! Requests go through octocrab's raw `get` so the slim DTOs in [`crate::types`]
//! are deserialized straight from the responses, and `all_pages` follows the
//! `Link` headers until every page is collected.

use crate::client::GitHubClient;
use crate::types::{Comment, Issue, Milestone, StateFilter};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Largest page size GitHub accepts
const PER_PAGE: u8 = 100;

/// Query parameters shared by the listing endpoints
#[derive(Debug, Serialize)]
struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    milestone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
    per_page: u8,
}

impl ListParams {
    fn new() -> Self {
        Self {
            milestone: None,
            state: None,
            per_page: PER_PAGE,
        }
    }

    fn state(mut self, state: StateFilter) -> Self {
        self.state = Some(state.as_str());
        self
    }

    fn milestone(mut self, number: u64) -> Self {
        self.milestone = Some(number.to_string());
        self
    }
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// GET the first page of `route` and follow `next` links to the end
    async fn fetch_all<T>(&self, route: &str, params: &ListParams) -> anyhow::Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let first: Page<T> = self.octocrab.get(route, Some(params)).await?;
        let items = self.octocrab.all_pages(first).await?;
        Ok(items)
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_milestones(
        &self,
        owner: &str,
        repo: &str,
        state: StateFilter,
    ) -> anyhow::Result<Vec<Milestone>> {
        debug!("Fetching {} milestones for {}/{}", state, owner, repo);

        let route = format!("/repos/{}/{}/milestones", owner, repo);
        let milestones: Vec<Milestone> = self
            .fetch_all(&route, &ListParams::new().state(state))
            .await
            .with_context(|| format!("Failed to fetch milestones for {}/{}", owner, repo))?;

        debug!(
            "Fetched {} milestones for {}/{}",
            milestones.len(),
            owner,
            repo
        );
        Ok(milestones)
    }

    async fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
        state: StateFilter,
    ) -> anyhow::Result<Vec<Issue>> {
        debug!(
            "Fetching {} issues for {}/{} milestone #{}",
            state, owner, repo, milestone_number
        );

        let route = format!("/repos/{}/{}/issues", owner, repo);
        let params = ListParams::new().milestone(milestone_number).state(state);
        let issues: Vec<Issue> = self.fetch_all(&route, &params).await.with_context(|| {
            format!(
                "Failed to fetch issues for {}/{} milestone #{}",
                owner, repo, milestone_number
            )
        })?;

        debug!("Fetched {} issues for {}/{}", issues.len(), owner, repo);
        Ok(issues)
    }

    async fn fetch_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<Vec<Comment>> {
        debug!("Fetching comments for {}/{}#{}", owner, repo, issue_number);

        let route = format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue_number);
        let comments: Vec<Comment> = self
            .fetch_all(&route, &ListParams::new())
            .await
            .with_context(|| {
                format!(
                    "Failed to fetch comments for {}/{}#{}",
                    owner, repo, issue_number
                )
            })?;

        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OctocrabClient {
        let octocrab = Octocrab::builder()
            .base_uri(server.uri())
            .unwrap()
            .build()
            .unwrap();
        OctocrabClient::new(Arc::new(octocrab))
    }

    #[test]
    fn test_list_params_serialization() {
        let params = ListParams::new().milestone(15).state(StateFilter::Closed);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            json!({ "milestone": "15", "state": "closed", "per_page": 100 })
        );

        let bare = serde_json::to_value(ListParams::new()).unwrap();
        assert_eq!(bare, json!({ "per_page": 100 }));
    }

    #[tokio::test]
    async fn test_fetch_milestones_requests_all_states() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/milestones"))
            .and(query_param("state", "all"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "number": 15, "title": "1.0.0", "state": "closed" },
                { "id": 2, "number": 21, "title": "2.0.0", "state": "open",
                  "description": "Second milestone" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let milestones = client
            .fetch_milestones("octo", "repo", StateFilter::All)
            .await
            .unwrap();

        assert_eq!(milestones.len(), 2);
        assert_eq!(milestones[0].title, "1.0.0");
        assert_eq!(milestones[0].number, 15);
        assert_eq!(
            milestones[1].description.as_deref(),
            Some("Second milestone")
        );
    }

    #[tokio::test]
    async fn test_fetch_issues_filters_by_milestone_and_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues"))
            .and(query_param("milestone", "15"))
            .and(query_param("state", "closed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 100, "number": 12, "title": "My bug yo", "body": "content",
                  "state": "closed", "labels": [{ "name": "bug" }] }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let issues = client
            .fetch_issues("octo", "repo", 15, StateFilter::Closed)
            .await
            .unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].number, 12);
        assert!(issues[0].has_label("bug"));
    }

    #[tokio::test]
    async fn test_fetch_issue_comments_follows_next_link() {
        let server = MockServer::start().await;
        let next = format!(
            "<{}/repos/octo/repo/issues/12/comments?per_page=100&page=2>; rel=\"next\"",
            server.uri()
        );

        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues/12/comments"))
            .and(query_param_is_missing("page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", next.as_str())
                    .set_body_json(json!([{ "id": 30, "body": "first" }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues/12/comments"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "id": 31, "body": "second" }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let comments = client
            .fetch_issue_comments("octo", "repo", 12)
            .await
            .unwrap();

        let ids: Vec<u64> = comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![30, 31]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/missing/milestones"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .fetch_milestones("octo", "missing", StateFilter::All)
            .await
            .unwrap_err();

        assert!(err
            .to_string()
            .contains("Failed to fetch milestones for octo/missing"));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues/3/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch_issue_comments("octo", "repo", 3).await;
        assert!(result.is_err());
    }
}
