//! Bundled component templates
//!
//! This module provides:
//! - Template root resolution (env override, next to the executable, or bundled)
//! - Lookup of a component template by framework and name
//! - Non-destructive installation into a project's components directory

pub mod installer;
pub mod registry;

pub use installer::{install, InstallOutcome};
pub use registry::{normalize_component_name, TemplateRegistry, TemplateSource};
