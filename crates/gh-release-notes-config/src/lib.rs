//! Configuration for gh-release-notes
//!
//! This crate provides:
//! - File path utilities for the config file and the default output
//! - Configuration file discovery and loading (TOML)
//! - Two-phase validation into a [`ValidatedConfig`]
//! - Declarative issue groups turned into the engine's groupings

pub mod config_file;
pub mod error;
pub mod groups;
pub mod paths;
pub mod release_config;

pub use config_file::find_config_file;
pub use error::ConfigError;
pub use groups::{GroupConfig, GroupDefinition, MilestoneTextConfig, RendererKind};
pub use paths::{config_dir, default_output_path, global_config_path, DEFAULT_OUTPUT};
pub use release_config::{ConfigOverrides, ReleaseNotesConfig, ValidatedConfig};
