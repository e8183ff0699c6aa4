use crate::cli::{Cli, Command};
use crate::output::Sink;
use anyhow::Result;
use gh_client::{ClientFactory, GitHubClient};
use gh_release_notes::ReleaseNotesService;
use gh_release_notes_config::{ReleaseNotesConfig, ValidatedConfig};

/// Load and validate the configuration, then run the selected command
pub async fn run(cli: &Cli) -> Result<()> {
    let mut config = ReleaseNotesConfig::load(cli.config.as_deref())?;
    config.apply(cli.overrides());
    let config = config.validate()?;

    match cli.subcommand() {
        Command::Check => check(&config),
        Command::Generate => {
            // Fail on a missing milestone before any request is sent
            config.require_milestone()?;

            let client = ClientFactory::new()
                .host(config.host.clone())
                .api_url(config.api_url.clone())
                .build()
                .await?;

            generate(&config, client, &Sink::new(&config.output, cli.stdout)).await
        }
    }
}

fn check(config: &ValidatedConfig) -> Result<()> {
    println!(
        "Configuration OK: {}/{} with {} group(s)",
        config.owner,
        config.repository,
        config.groups.len()
    );
    for group in &config.groups {
        println!("  {}", group.heading.lines().next().unwrap_or_default());
    }
    Ok(())
}

/// Render the release notes of the configured milestone and emit them
///
/// Nothing is emitted unless every request and every renderer succeeded.
pub async fn generate<C: GitHubClient>(
    config: &ValidatedConfig,
    client: C,
    sink: &Sink,
) -> Result<()> {
    let milestone = config.require_milestone()?;
    log::info!(
        "Generating release notes for {}/{} milestone '{}'",
        config.owner,
        config.repository,
        milestone
    );

    let service = ReleaseNotesService::new(client, &config.owner, &config.repository);
    let notes = service
        .create_release_notes(milestone, &config.layout())
        .await?;

    sink.emit(&notes)
}
