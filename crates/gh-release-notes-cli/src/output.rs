use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where finished release notes go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    File(PathBuf),
    Stdout,
}

impl Sink {
    pub fn new(output: &Path, stdout: bool) -> Self {
        if stdout {
            Sink::Stdout
        } else {
            Sink::File(output.to_path_buf())
        }
    }

    /// Emit the release notes verbatim
    pub fn emit(&self, notes: &str) -> Result<()> {
        match self {
            Sink::File(path) => write_to_path(path, notes),
            Sink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(notes.as_bytes())
                    .context("Failed to write release notes to stdout")?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

/// Write release notes to a file, replacing any previous content
fn write_to_path(path: &Path, notes: &str) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(path, notes)
        .with_context(|| format!("Failed to write release notes: {}", path.display()))?;

    log::info!("Wrote release notes to {}", path.display());
    Ok(())
}
