//! Framework tags and the profile table that drives detection and template lookup

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI framework of the consuming project
///
/// Unrecognized tags in a hand-edited config read back as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Framework {
    Expo,
    Unknown,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Expo => "expo",
            Framework::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Expo => "Expo",
            Framework::Unknown => "Unknown",
        }
    }

    /// Profile for this framework, if it has one
    pub fn profile(&self) -> Option<&'static FrameworkProfile> {
        FRAMEWORKS.iter().find(|p| p.framework == *self)
    }

    pub fn is_recognized(&self) -> bool {
        self.profile().is_some()
    }
}

impl From<String> for Framework {
    fn from(tag: String) -> Self {
        FRAMEWORKS
            .iter()
            .find(|p| p.framework.as_str().eq_ignore_ascii_case(tag.trim()))
            .map(|p| p.framework)
            .unwrap_or(Framework::Unknown)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the scaffolder knows about one recognized framework
#[derive(Debug)]
pub struct FrameworkProfile {
    pub framework: Framework,
    /// Packages in `dependencies`/`devDependencies` that identify the framework
    pub marker_packages: &'static [&'static str],
    /// Files at the project root that identify the framework
    pub marker_files: &'static [&'static str],
    /// Directory under the template root holding this framework's templates
    pub template_dir: &'static str,
    /// File extension of installed components
    pub extension: &'static str,
}

/// Recognized frameworks, in detection order
pub const FRAMEWORKS: &[FrameworkProfile] = &[FrameworkProfile {
    framework: Framework::Expo,
    marker_packages: &["expo"],
    marker_files: &["app.json", "app.config.js", "app.config.ts"],
    template_dir: "expo",
    extension: "tsx",
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase_tag() {
        assert_eq!(serde_json::to_string(&Framework::Expo).unwrap(), "\"expo\"");
        assert_eq!(
            serde_json::to_string(&Framework::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn test_unrecognized_tag_reads_as_unknown() {
        let fw: Framework = serde_json::from_str("\"flutter\"").unwrap();
        assert_eq!(fw, Framework::Unknown);

        let fw: Framework = serde_json::from_str("\"Expo\"").unwrap();
        assert_eq!(fw, Framework::Expo);
    }

    #[test]
    fn test_unknown_has_no_profile() {
        assert!(Framework::Expo.is_recognized());
        assert!(!Framework::Unknown.is_recognized());
        assert_eq!(Framework::Expo.profile().unwrap().extension, "tsx");
    }
}
