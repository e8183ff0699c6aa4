//! Release notes configuration
//!
//! Loading happens in two phases. [`ReleaseNotesConfig`] mirrors the TOML
//! file with every field optional and absorbs command-line overrides;
//! [`ReleaseNotesConfig::validate`] then produces a [`ValidatedConfig`] whose
//! required fields are guaranteed to be present.

use crate::error::ConfigError;
use crate::groups::{GroupConfig, GroupDefinition, MilestoneTextConfig};
use crate::{config_file, paths};
use gh_release_notes::ReleaseNotesLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration as read from `.gh-release-notes.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseNotesConfig {
    /// GitHub user or organization owning the repository, e.g. JaneDoe
    pub owner: Option<String>,

    /// Name of the repository, e.g. my-project
    pub repository: Option<String>,

    /// Title of the milestone to release, e.g. 4.0.0
    ///
    /// Usually given on the command line; only required when generating.
    pub milestone: Option<String>,

    /// File the release notes are written to
    #[serde(default = "paths::default_output_path")]
    pub output: PathBuf,

    /// GitHub Enterprise host (None = github.com)
    pub host: Option<String>,

    /// Explicit API base URI, overriding the one derived from `host`
    pub api_url: Option<String>,

    pub header: Option<MilestoneTextConfig>,

    pub footer: Option<MilestoneTextConfig>,

    /// Issue groups in priority order
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repository: None,
            milestone: None,
            output: paths::default_output_path(),
            host: None,
            api_url: None,
            header: None,
            footer: None,
            groups: Vec::new(),
        }
    }
}

/// Values given on the command line; `Some` wins over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub milestone: Option<String>,
    pub output: Option<PathBuf>,
    pub host: Option<String>,
    pub api_url: Option<String>,
}

impl ReleaseNotesConfig {
    /// Load the config file
    ///
    /// An explicit path must exist. Without one the file is discovered
    /// (CWD first, then the global config directory); when none exists the
    /// defaults are used so everything can come from the command line.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_path(path)
            }
            None => match config_file::find_config_file() {
                Some(path) => Self::from_path(&path),
                None => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line values on top of the file values
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides {
            owner,
            repository,
            milestone,
            output,
            host,
            api_url,
        } = overrides;

        if owner.is_some() {
            self.owner = owner;
        }
        if repository.is_some() {
            self.repository = repository;
        }
        if milestone.is_some() {
            self.milestone = milestone;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if host.is_some() {
            self.host = host;
        }
        if api_url.is_some() {
            self.api_url = api_url;
        }
    }

    /// Check every required field and compile the groups
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        let owner = required(self.owner, "owner")?;
        let repository = required(self.repository, "repository")?;

        if let Some(header) = &self.header {
            header.validate("header")?;
        }
        if let Some(footer) = &self.footer {
            footer.validate("footer")?;
        }

        let groups = self
            .groups
            .into_iter()
            .enumerate()
            .map(|(index, group)| group.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedConfig {
            owner,
            repository,
            milestone: self.milestone.filter(|m| !m.is_empty()),
            output: self.output,
            host: self.host.filter(|h| !h.is_empty()),
            api_url: self.api_url.filter(|u| !u.is_empty()),
            header: self.header,
            footer: self.footer,
            groups,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingField(field.to_string()))
}

/// Configuration whose required fields are known to be set
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub owner: String,
    pub repository: String,
    pub milestone: Option<String>,
    pub output: PathBuf,
    pub host: Option<String>,
    pub api_url: Option<String>,
    pub header: Option<MilestoneTextConfig>,
    pub footer: Option<MilestoneTextConfig>,
    pub groups: Vec<GroupDefinition>,
}

impl ValidatedConfig {
    /// The milestone to release; an error if none was configured
    pub fn require_milestone(&self) -> Result<&str, ConfigError> {
        self.milestone
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField("milestone".to_string()))
    }

    /// Build the header, groups and footer the engine renders
    pub fn layout(&self) -> ReleaseNotesLayout {
        let mut layout =
            ReleaseNotesLayout::new().groups(self.groups.iter().map(GroupDefinition::to_grouping));
        if let Some(header) = &self.header {
            layout = layout.header(header.clone());
        }
        if let Some(footer) = &self.footer {
            layout = layout.footer(footer.clone());
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_CONFIG: &str = r###"
        owner = "JaneDoe"
        repository = "my-project"
        output = "build/myfile.md"

        [header]
        prefix = "Milestone release: "

        [footer]
        prefix = "Footer: "

        [[groups]]
        heading = """## Enhancements
New features that have been added"""
        labels = ["enhancement"]
        renderer = "release-notes"

        [[groups]]
        heading = "## Bug Fixes"
        labels = ["bug"]
    "###;

    #[test]
    fn test_default_config() {
        let config = ReleaseNotesConfig::default();
        assert!(config.owner.is_none());
        assert_eq!(config.output, PathBuf::from("target/github/release-notes.md"));
        assert!(config.groups.is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let config: ReleaseNotesConfig = toml::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.owner.as_deref(), Some("JaneDoe"));
        assert_eq!(config.repository.as_deref(), Some("my-project"));
        assert!(config.milestone.is_none());
        assert_eq!(config.output, PathBuf::from("build/myfile.md"));
        assert_eq!(config.header.unwrap().prefix, "Milestone release: ");
        assert_eq!(config.groups.len(), 2);
        assert_eq!(
            config.groups[0].heading.as_deref(),
            Some("## Enhancements\nNew features that have been added")
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: ReleaseNotesConfig = toml::from_str(r#"owner = "someone""#).unwrap();
        assert_eq!(config.owner.as_deref(), Some("someone"));
        assert_eq!(config.output, paths::default_output_path());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<ReleaseNotesConfig, _> = toml::from_str(r#"gitHubUser = "x""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config: ReleaseNotesConfig = toml::from_str(FULL_CONFIG).unwrap();
        config.apply(ConfigOverrides {
            milestone: Some("1.0.0".to_string()),
            output: Some(PathBuf::from("notes.md")),
            ..Default::default()
        });

        assert_eq!(config.owner.as_deref(), Some("JaneDoe"));
        assert_eq!(config.milestone.as_deref(), Some("1.0.0"));
        assert_eq!(config.output, PathBuf::from("notes.md"));
    }

    #[test]
    fn test_validate_requires_owner() {
        let err = ReleaseNotesConfig::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Required field 'owner' is not set");
    }

    #[test]
    fn test_validate_requires_repository() {
        let config = ReleaseNotesConfig {
            owner: Some("JaneDoe".to_string()),
            repository: Some("  ".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Required field 'repository' is not set");
    }

    #[test]
    fn test_milestone_only_required_on_demand() {
        let config: ReleaseNotesConfig = toml::from_str(FULL_CONFIG).unwrap();
        let validated = config.validate().unwrap();

        let err = validated.require_milestone().unwrap_err();
        assert_eq!(err.to_string(), "Required field 'milestone' is not set");
    }

    #[test]
    fn test_layout_from_config() {
        let mut config: ReleaseNotesConfig = toml::from_str(FULL_CONFIG).unwrap();
        config.apply(ConfigOverrides {
            milestone: Some("1.0.0".to_string()),
            ..Default::default()
        });
        let validated = config.validate().unwrap();
        assert_eq!(validated.require_milestone().unwrap(), "1.0.0");

        let layout = validated.layout();
        let headings: Vec<&str> = layout.groupings().iter().map(|g| g.heading()).collect();
        assert_eq!(
            headings,
            vec![
                "## Enhancements\nNew features that have been added",
                "## Bug Fixes"
            ]
        );
        assert!(layout.header_renderer().is_some());
        assert!(layout.footer_renderer().is_some());
    }

    #[test]
    fn test_validate_rejects_prefix_and_template() {
        let config: ReleaseNotesConfig = toml::from_str(
            r#"
            owner = "JaneDoe"
            repository = "my-project"

            [header]
            prefix = "Release: "
            template = "Release {title}"
        "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingFields { .. }));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", FULL_CONFIG).unwrap();

        let config = ReleaseNotesConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.repository.as_deref(), Some("my-project"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = ReleaseNotesConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_unparsable_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "owner = [").unwrap();

        let err = ReleaseNotesConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
