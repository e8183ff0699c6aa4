//! Release notes from GitHub milestones
//!
//! Resolves a milestone by title, claims its closed issues into an ordered
//! list of groups (the first group whose filter matches wins) and renders
//! every group with its own renderer.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::ClientFactory;
//! use gh_release_notes::builtin::{BulletRenderer, DescriptionRenderer, LabelFilter};
//! use gh_release_notes::{IssueGrouping, ReleaseNotesLayout, ReleaseNotesService};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ClientFactory::new().build().await?;
//! let service = ReleaseNotesService::new(client, "owner", "repo");
//!
//! let layout = ReleaseNotesLayout::new()
//!     .header(DescriptionRenderer::new("Release: "))
//!     .group(IssueGrouping::new(
//!         "## Enhancements",
//!         LabelFilter::any_of(["enhancement"]),
//!         BulletRenderer,
//!     ))
//!     .group(IssueGrouping::new(
//!         "## Bug Fixes",
//!         LabelFilter::any_of(["bug"]),
//!         BulletRenderer,
//!     ));
//!
//! let markdown = service.create_release_notes("1.0.0", &layout).await?;
//! # Ok(())
//! # }
//! ```

pub mod builtin;
pub mod error;
pub mod grouping;
pub mod service;

pub use error::{ReleaseNotesError, Result};
pub use grouping::{IssueFilter, IssueGrouping, IssueRenderer, MilestoneRenderer, ReleaseNotesLayout};
pub use service::ReleaseNotesService;
