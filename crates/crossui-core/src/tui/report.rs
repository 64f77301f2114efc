//! Charm-style status output for the `init` and `add` commands

use crate::commands;
use crate::config::InitOutcome;
use crate::detect::Evidence;
use crate::product::ProductConfig;
use crate::templates::{InstallOutcome, TemplateRegistry, TemplateSource};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Command to run against a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the config file if it is missing
    Init,
    /// Copy one component template into the components directory
    Add { component: String },
}

/// Run a command and report its outcome
///
/// Returns `Ok(false)` when the command failed; the failure has already been
/// reported to the user.
pub async fn run<C: ProductConfig>(config: &C, command: Command, root: &Path) -> Result<bool> {
    cliclack::intro(config.display_name())?;

    let result = match command {
        Command::Init => run_init(config, root).await,
        Command::Add { component } => run_add(config, root, &component).await,
    };

    match result {
        Ok(()) => {
            cliclack::outro("Done")?;
            Ok(true)
        }
        Err(e) => {
            cliclack::outro_cancel(e.to_string())?;
            Ok(false)
        }
    }
}

async fn run_init<C: ProductConfig>(config: &C, root: &Path) -> Result<()> {
    match commands::init(config, root).await? {
        InitOutcome::Created {
            path,
            record,
            detection,
        } => {
            if let Some(issue) = &detection.manifest_issue {
                cliclack::log::remark(format!("Ignoring unreadable manifest: {}", issue))?;
            }
            match &detection.evidence {
                Evidence::None => cliclack::log::warning(format!(
                    "Could not detect a supported framework ({}); recording {}",
                    detection.evidence,
                    record.framework.as_str().yellow()
                ))?,
                evidence => cliclack::log::info(format!(
                    "Detected {} ({})",
                    detection.framework.display_name().bold(),
                    evidence
                ))?,
            }
            cliclack::log::success(format!(
                "Created {} with defaults",
                file_label(&path).green()
            ))?;
        }
        InitOutcome::AlreadyExists { path } => {
            cliclack::log::warning(format!(
                "{} already exists. Skipping creation.",
                file_label(&path)
            ))?;
        }
    }
    Ok(())
}

async fn run_add<C: ProductConfig>(config: &C, root: &Path, component: &str) -> Result<()> {
    let registry = TemplateRegistry::from_config(config);
    if let TemplateSource::Override(dir) = registry.source() {
        cliclack::log::info(format!("Using local templates from {}", dir.display()))?;
    }

    let (record, outcome) = commands::add(config, &registry, root, component).await?;
    match outcome {
        InstallOutcome::Installed { dest, bytes, .. } => {
            cliclack::log::success(format!(
                "Added {} to {} ({} bytes)",
                component.bold(),
                record.components_directory.cyan(),
                bytes
            ))?;
            cliclack::log::remark(display_relative(&dest, root))?;
        }
        InstallOutcome::AlreadyExists { dest } => {
            cliclack::log::warning(format!(
                "File {} already exists. Skipping copy.",
                file_label(&dest)
            ))?;
        }
    }
    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
