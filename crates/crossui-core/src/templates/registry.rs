//! Template root resolution and per-framework template lookup

use crate::error::{Error, Result};
use crate::framework::Framework;
use crate::product::ProductConfig;
use std::path::{Component, Path, PathBuf};

/// Where the template tree was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Directory named by the product's override env var
    Override(PathBuf),
    /// `templates/` next to the running executable
    Installed(PathBuf),
    /// Directory fixed at build time
    Bundled(PathBuf),
}

impl TemplateSource {
    /// Resolve the template root for a product
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        let override_dir = std::env::var_os(config.template_dir_env())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self::resolve(
            override_dir,
            exe_dir.as_deref(),
            Path::new(config.bundled_template_dir()),
        )
    }

    /// First match wins: override, then next to the executable, then bundled
    pub fn resolve(override_dir: Option<PathBuf>, exe_dir: Option<&Path>, bundled: &Path) -> Self {
        if let Some(dir) = override_dir {
            return Self::Override(dir);
        }
        if let Some(dir) = exe_dir.map(|d| d.join("templates")).filter(|d| d.is_dir()) {
            return Self::Installed(dir);
        }
        Self::Bundled(bundled.to_path_buf())
    }

    pub fn root(&self) -> &Path {
        match self {
            Self::Override(p) | Self::Installed(p) | Self::Bundled(p) => p,
        }
    }
}

/// Lookup table from (framework, component) to a template file
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    source: TemplateSource,
}

impl TemplateRegistry {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        Self::new(TemplateSource::from_config(config))
    }

    /// Registry over a local template directory
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self::new(TemplateSource::Override(path.into()))
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// File name an installed component gets, e.g. `Button.tsx`
    ///
    /// `None` when the framework has no template set.
    pub fn file_name(&self, framework: Framework, component: &str) -> Result<Option<String>> {
        let name = normalize_component_name(component)?;
        Ok(framework
            .profile()
            .map(|profile| format!("{}.{}", name, profile.extension)))
    }

    /// Path of the bundled template for a component
    ///
    /// A pure function of (framework, name); it does not check existence.
    pub fn template_path(&self, framework: Framework, component: &str) -> Result<Option<PathBuf>> {
        let (Some(file_name), Some(profile)) =
            (self.file_name(framework, component)?, framework.profile())
        else {
            return Ok(None);
        };
        Ok(Some(
            self.source.root().join(profile.template_dir).join(file_name),
        ))
    }

    /// Component names bundled for a framework, sorted
    ///
    /// Each name normalizes back to its template file: `OTPInput.tsx` is
    /// listed as `oTPInput`, `Button.tsx` as `button`.
    pub async fn available(&self, framework: Framework) -> Vec<String> {
        let Some(profile) = framework.profile() else {
            return Vec::new();
        };
        let dir = self.source.root().join(profile.template_dir);
        let Ok(mut entries) = tokio::fs::read_dir(&dir).await else {
            return Vec::new();
        };

        let suffix = format!(".{}", profile.extension);
        let mut names = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if let Some(stem) = file_name.strip_suffix(&suffix) {
                names.push(lowercase_first(stem));
            }
        }
        names.sort();
        names
    }
}

/// Inverse of the naming rule: first character lowercased, rest untouched
fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply the fixed naming rule: first character uppercased, rest untouched
///
/// Names that could escape the components directory are rejected.
pub fn normalize_component_name(component: &str) -> Result<String> {
    let trimmed = component.trim();
    let mut components = Path::new(trimmed).components();
    let is_single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if trimmed.is_empty() || !is_single_normal || trimmed.contains(['/', '\\']) {
        return Err(Error::InvalidComponentName(component.to_string()));
    }

    let mut chars = trimmed.chars();
    Ok(match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    })
}
