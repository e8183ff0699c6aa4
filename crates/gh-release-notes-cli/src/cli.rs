use clap::{Parser, Subcommand};
use gh_release_notes_config::ConfigOverrides;
use std::path::PathBuf;

/// gh-release-notes - Release notes from the closed issues of a GitHub milestone
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file to use instead of .gh-release-notes.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// GitHub user or organization owning the repository
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long, global = true)]
    pub repository: Option<String>,

    /// Title of the milestone to release, e.g. 1.0.0
    #[arg(short, long, global = true, env = "GH_RELEASE_NOTES_MILESTONE")]
    pub milestone: Option<String>,

    /// File the release notes are written to
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// GitHub Enterprise host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API base URI, overriding the one derived from --host
    #[arg(long, global = true, env = "GH_RELEASE_NOTES_API_URL")]
    pub api_url: Option<String>,

    /// Print the release notes instead of writing the output file
    #[arg(long, global = true)]
    pub stdout: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate the release notes (default)
    Generate,
    /// Validate the configuration without contacting GitHub
    Check,
}

impl Cli {
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or(Command::Generate)
    }

    /// Command-line values that override the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            owner: self.owner.clone(),
            repository: self.repository.clone(),
            milestone: self.milestone.clone(),
            output: self.output.clone(),
            host: self.host.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_generate() {
        let cli = Cli::parse_from(["gh-release-notes", "--milestone", "1.0.0"]);
        assert_eq!(cli.subcommand(), Command::Generate);
        assert_eq!(cli.milestone.as_deref(), Some("1.0.0"));
        assert!(!cli.stdout);
    }

    #[test]
    fn test_check_subcommand_with_global_flags() {
        let cli = Cli::parse_from([
            "gh-release-notes",
            "check",
            "--owner",
            "JaneDoe",
            "--repository",
            "my-project",
            "-vv",
        ]);
        assert_eq!(cli.subcommand(), Command::Check);
        assert_eq!(cli.verbose, 2);

        let overrides = cli.overrides();
        assert_eq!(overrides.owner.as_deref(), Some("JaneDoe"));
        assert_eq!(overrides.repository.as_deref(), Some("my-project"));
        assert!(overrides.output.is_none());
    }

    #[test]
    fn test_output_and_stdout() {
        let cli = Cli::parse_from([
            "gh-release-notes",
            "generate",
            "-o",
            "notes/RELEASE.md",
            "--stdout",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("notes/RELEASE.md")));
        assert!(cli.stdout);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
