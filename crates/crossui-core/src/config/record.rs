//! Configuration record types and parsing

use crate::framework::Framework;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default components directory, relative to the project root
pub const DEFAULT_COMPONENTS_DIR: &str = "components/ui";

/// Project configuration (crossui.config.json)
///
/// The file is plain, human-editable JSON. Reads accept the legacy
/// `adapter` / `componentsDir` keys; writes always use the canonical names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    /// UI framework used to select the template set
    #[serde(default = "default_framework", alias = "adapter")]
    pub framework: Framework,

    /// Directory components are installed into, relative to the project root
    #[serde(default = "default_components_dir", alias = "componentsDir")]
    pub components_directory: String,
}

fn default_framework() -> Framework {
    Framework::Expo
}

fn default_components_dir() -> String {
    DEFAULT_COMPONENTS_DIR.to_string()
}

impl ConfigRecord {
    pub fn new(framework: Framework, components_directory: impl Into<String>) -> Self {
        Self {
            framework,
            components_directory: components_directory.into(),
        }
    }

    /// Absolute components directory for a project rooted at `root`
    pub fn components_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.components_directory)
    }

    /// Serialize as 2-space indented JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
