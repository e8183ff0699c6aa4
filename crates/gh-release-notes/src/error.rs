use thiserror::Error;

/// Errors raised while assembling release notes
#[derive(Debug, Error)]
pub enum ReleaseNotesError {
    /// No milestone of the repository carries the requested title
    #[error("No milestone found with name: {title}")]
    MilestoneNotFound { title: String },

    /// The GitHub client failed (transport, status or payload)
    #[error(transparent)]
    Client(anyhow::Error),

    /// A caller-supplied renderer failed
    #[error(transparent)]
    Render(anyhow::Error),
}

pub type Result<T, E = ReleaseNotesError> = std::result::Result<T, E>;
