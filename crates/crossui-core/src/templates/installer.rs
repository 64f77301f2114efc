//! Non-destructive template installation

use super::registry::TemplateRegistry;
use crate::error::{Error, Result};
use crate::framework::Framework;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Result of installing one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Template copied to `dest`
    Installed {
        template: PathBuf,
        dest: PathBuf,
        bytes: usize,
    },
    /// `dest` already existed and was left untouched
    AlreadyExists { dest: PathBuf },
}

/// Copy the template for `component` into `dest_dir`
///
/// Never overwrites an existing file. On failure the filesystem is left as
/// it was found: a partial file and any directories created here are removed.
pub async fn install(
    registry: &TemplateRegistry,
    framework: Framework,
    component: &str,
    dest_dir: &Path,
) -> Result<InstallOutcome> {
    let (template, file_name) = match (
        registry.template_path(framework, component)?,
        registry.file_name(framework, component)?,
    ) {
        (Some(template), Some(file_name)) => (template, file_name),
        _ => return Err(template_not_found(registry, framework, component).await),
    };

    let content = match fs::read(&template).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(template_not_found(registry, framework, component).await)
        }
        Err(e) => return Err(Error::io("Failed to read template", template, e)),
    };

    let dest = dest_dir.join(file_name);
    if fs::try_exists(&dest)
        .await
        .map_err(|e| Error::io("Failed to check", &dest, e))?
    {
        return Ok(InstallOutcome::AlreadyExists { dest });
    }

    let created = create_dir_tree(dest_dir).await?;
    commit(template, dest, &content, &created).await
}

/// Write the copy into an already-created tree, undoing `created` on failure
async fn commit(
    template: PathBuf,
    dest: PathBuf,
    content: &[u8],
    created: &[PathBuf],
) -> Result<InstallOutcome> {
    match write_new(&dest, content).await {
        Ok(()) => Ok(InstallOutcome::Installed {
            template,
            dest,
            bytes: content.len(),
        }),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            // Lost a race with another writer; their file stands.
            remove_dirs(created).await;
            Ok(InstallOutcome::AlreadyExists { dest })
        }
        Err(e) => {
            remove_dirs(created).await;
            Err(Error::io("Failed to write", dest, e))
        }
    }
}

async fn template_not_found(
    registry: &TemplateRegistry,
    framework: Framework,
    component: &str,
) -> Error {
    Error::TemplateNotFound {
        framework,
        component: component.to_string(),
        available: registry.available(framework).await,
    }
}

/// Ancestors of `dir` (itself included) that are known not to exist, deepest first
///
/// The walk stops at the first ancestor that exists or cannot be inspected,
/// so nothing outside this install ever lands on the rollback list.
async fn missing_ancestors(dir: &Path) -> Vec<PathBuf> {
    let mut missing = Vec::new();
    for ancestor in dir.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        match fs::try_exists(ancestor).await {
            Ok(false) => missing.push(ancestor.to_path_buf()),
            Ok(true) | Err(_) => break,
        }
    }
    missing
}

/// Create `dir` recursively, returning the directories that did not exist (deepest first)
async fn create_dir_tree(dir: &Path) -> Result<Vec<PathBuf>> {
    let missing = missing_ancestors(dir).await;

    if let Err(e) = fs::create_dir_all(dir).await {
        remove_dirs(&missing).await;
        return Err(Error::io("Failed to create directory", dir, e));
    }

    Ok(missing)
}

/// Remove directories created by this install, deepest first; non-empty ones stay
async fn remove_dirs(dirs: &[PathBuf]) {
    for dir in dirs {
        let _ = fs::remove_dir(dir).await;
    }
}

/// Write `content` to a file that must not exist yet; a partial file is removed
async fn write_new(dest: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await?;

    let written = async {
        file.write_all(content).await?;
        file.flush().await?;
        file.sync_all().await
    }
    .await;

    if let Err(e) = written {
        drop(file);
        let _ = fs::remove_file(dest).await;
        return Err(e);
    }
    Ok(())
}
