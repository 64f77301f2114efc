//! Project framework detection
//!
//! Detection is total: every failure along the way is downgraded to "keep
//! looking", and the final fallback is [`Framework::Unknown`].

use crate::framework::{Framework, FRAMEWORKS};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use tokio::fs;

/// Manifest file read from the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Why a framework was (or was not) detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    /// A marker package listed in the manifest dependencies
    Dependency(&'static str),
    /// A marker file present at the project root
    MarkerFile(&'static str),
    None,
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evidence::Dependency(name) => write!(f, "dependency `{}` in {}", name, MANIFEST_FILE),
            Evidence::MarkerFile(name) => write!(f, "{} found", name),
            Evidence::None => write!(f, "no framework markers found"),
        }
    }
}

/// Detection result
#[derive(Debug, Clone)]
pub struct Detection {
    pub framework: Framework,
    pub evidence: Evidence,
    /// Why the manifest could not be used, when it exists but is unreadable
    pub manifest_issue: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: Option<Value>,
    #[serde(default)]
    dev_dependencies: Option<Value>,
}

impl PackageManifest {
    /// Merge runtime and development dependency maps into one lookup
    fn merged_dependencies(&self) -> Map<String, Value> {
        let mut deps = Map::new();
        for section in [&self.dependencies, &self.dev_dependencies] {
            if let Some(Value::Object(map)) = section {
                deps.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        deps
    }
}

/// Read and parse the manifest; `Ok(None)` when the file is absent
async fn read_manifest(root: &Path) -> Result<Option<PackageManifest>, String> {
    let path = root.join(MANIFEST_FILE);
    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("Failed to read {}: {}", MANIFEST_FILE, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| format!("Failed to parse {}: {}", MANIFEST_FILE, e))
}

/// Classify the project at `root`
pub async fn detect_project(root: &Path) -> Detection {
    let mut manifest_issue = None;

    // Step 1: marker packages in the merged dependency maps
    match read_manifest(root).await {
        Ok(Some(manifest)) => {
            let deps = manifest.merged_dependencies();
            for profile in FRAMEWORKS {
                if let Some(pkg) = profile
                    .marker_packages
                    .iter()
                    .find(|pkg| deps.get(**pkg).is_some_and(is_declared))
                {
                    return Detection {
                        framework: profile.framework,
                        evidence: Evidence::Dependency(*pkg),
                        manifest_issue: None,
                    };
                }
            }
        }
        Ok(None) => {}
        Err(issue) => manifest_issue = Some(issue),
    }

    // Step 2: marker files at the project root
    for profile in FRAMEWORKS {
        for file in profile.marker_files {
            if fs::try_exists(root.join(file)).await.unwrap_or(false) {
                return Detection {
                    framework: profile.framework,
                    evidence: Evidence::MarkerFile(*file),
                    manifest_issue,
                };
            }
        }
    }

    Detection {
        framework: Framework::Unknown,
        evidence: Evidence::None,
        manifest_issue,
    }
}

/// Classify the project at `root`, returning only the tag
pub async fn detect(root: &Path) -> Framework {
    detect_project(root).await.framework
}

/// A dependency entry counts when its version spec is truthy
fn is_declared(version: &Value) -> bool {
    match version {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_detects_marker_dependency() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "package.json",
            r#"{"dependencies": {"expo": "~51.0.0", "react": "18.2.0"}}"#,
        );

        let detection = detect_project(dir.path()).await;
        assert_eq!(detection.framework, Framework::Expo);
        assert_eq!(detection.evidence, Evidence::Dependency("expo"));
    }

    #[tokio::test]
    async fn test_detects_marker_in_dev_dependencies() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "package.json",
            r#"{"dependencies": {"react": "18.2.0"}, "devDependencies": {"expo": "^50"}}"#,
        );

        assert_eq!(detect(dir.path()).await, Framework::Expo);
    }

    #[tokio::test]
    async fn test_unknown_without_marker() {
        let dir = TempDir::new().unwrap();
        write(&dir, "package.json", r#"{"dependencies": {"react": "18.2.0"}}"#);

        let detection = detect_project(dir.path()).await;
        assert_eq!(detection.framework, Framework::Unknown);
        assert_eq!(detection.evidence, Evidence::None);
        assert!(detection.manifest_issue.is_none());
    }

    #[tokio::test]
    async fn test_empty_directory_is_unknown() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect(dir.path()).await, Framework::Unknown);
    }

    #[tokio::test]
    async fn test_malformed_manifest_falls_back_to_marker_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "package.json", "{ not json");
        write(&dir, "app.json", "{}");

        let detection = detect_project(dir.path()).await;
        assert_eq!(detection.framework, Framework::Expo);
        assert_eq!(detection.evidence, Evidence::MarkerFile("app.json"));
        assert!(detection.manifest_issue.is_some());
    }

    #[tokio::test]
    async fn test_malformed_manifest_without_markers_is_unknown() {
        let dir = TempDir::new().unwrap();
        write(&dir, "package.json", "[1, 2");

        let detection = detect_project(dir.path()).await;
        assert_eq!(detection.framework, Framework::Unknown);
        assert!(detection.manifest_issue.is_some());
    }

    #[tokio::test]
    async fn test_marker_file_without_manifest() {
        let dir = TempDir::new().unwrap();
        write(&dir, "app.config.ts", "export default {};");

        assert_eq!(detect(dir.path()).await, Framework::Expo);
    }

    #[tokio::test]
    async fn test_non_object_dependencies_are_ignored() {
        let dir = TempDir::new().unwrap();
        write(&dir, "package.json", r#"{"dependencies": ["expo"]}"#);

        assert_eq!(detect(dir.path()).await, Framework::Unknown);
    }

    #[test]
    fn test_is_declared() {
        assert!(is_declared(&Value::String("1.0.0".into())));
        assert!(!is_declared(&Value::String(String::new())));
        assert!(!is_declared(&Value::Null));
    }
}
