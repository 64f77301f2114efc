//! Error types shared by the config store, detector and installer

use crate::framework::Framework;
use std::path::{Path, PathBuf};

/// Errors surfaced to the invoking user
///
/// Informational outcomes (config or destination already present) are not
/// errors; see [`crate::InitOutcome`] and [`crate::InstallOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} not found. Run `{product} init` first.", file_name(.path))]
    ConfigNotFound { path: PathBuf, product: &'static str },

    #[error("Failed to parse {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("No template for component '{component}' ({framework} framework){}", available_hint(.available))]
    TemplateNotFound {
        framework: Framework,
        component: String,
        available: Vec<String>,
    },

    #[error("Invalid component name '{0}'")]
    InvalidComponentName(String),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the operation and path it came from
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn available_hint(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(". Available: {}", available.join(", "))
    }
}
