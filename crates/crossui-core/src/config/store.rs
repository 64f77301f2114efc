//! Config file creation and loading at a project root

use super::record::ConfigRecord;
use crate::detect::{detect_project, Detection};
use crate::error::{Error, Result};
use crate::product::ProductConfig;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Result of `init_config`
#[derive(Debug)]
pub enum InitOutcome {
    /// A new config file was written
    Created {
        path: PathBuf,
        record: ConfigRecord,
        detection: Detection,
    },
    /// A config file was already present; nothing was written
    AlreadyExists { path: PathBuf },
}

/// Location of the config file for a project rooted at `root`
pub fn config_path<C: ProductConfig>(config: &C, root: &Path) -> PathBuf {
    root.join(config.config_file_name())
}

/// Create the config file if it does not exist yet
pub async fn init_config<C: ProductConfig>(config: &C, root: &Path) -> Result<InitOutcome> {
    let path = config_path(config, root);

    if fs::try_exists(&path)
        .await
        .map_err(|e| Error::io("Failed to check", &path, e))?
    {
        return Ok(InitOutcome::AlreadyExists { path });
    }

    let detection = detect_project(root).await;
    let record = ConfigRecord::new(detection.framework, config.default_components_dir());
    let content = record.to_json().map_err(|e| Error::InvalidConfig {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    write_atomic(&path, content.as_bytes()).await?;

    Ok(InitOutcome::Created {
        path,
        record,
        detection,
    })
}

/// Load the config file, signalling `ConfigNotFound` when it is absent
pub async fn read_config<C: ProductConfig>(config: &C, root: &Path) -> Result<ConfigRecord> {
    let path = config_path(config, root);

    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::ConfigNotFound {
                path,
                product: config.name(),
            })
        }
        Err(e) => return Err(Error::io("Failed to read", path, e)),
    };

    serde_json::from_str(&content).map_err(|e| Error::InvalidConfig {
        path,
        reason: e.to_string(),
    })
}

/// Write via a sibling temp file and rename so readers never see a partial file
async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp_path, content).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(Error::io("Failed to write", tmp_path, e));
    }

    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(Error::io("Failed to write", path, e));
    }

    Ok(())
}
