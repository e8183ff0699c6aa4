//! GitHub API client for release notes
//!
//! This crate provides a trait-based GitHub API client covering the three
//! read operations release notes are assembled from: listing milestones,
//! listing the issues of a milestone and listing an issue's comments.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_milestones()                            │
//! │  - fetch_issues()                                │
//! │  - fetch_issue_comments()                        │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │◄──── ClientFactory
//!              │ (direct API)    │      (host, token)
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{ClientFactory, GitHubClient, StateFilter};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ClientFactory::new().build().await?;
//! let milestones = client
//!     .fetch_milestones("owner", "repo", StateFilter::All)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_factory;
pub mod octocrab_client;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::GitHubClient;
pub use client_factory::{ClientFactory, TokenResolver};
pub use octocrab_client::OctocrabClient;
pub use types::{Comment, Issue, Label, Milestone, State, StateFilter, User};
