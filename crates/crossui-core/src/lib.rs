//! CrossUI Core - Shared library for the CrossUI component scaffolder
//!
//! This library detects the host project's UI framework, keeps a small JSON
//! configuration file at the project root, and copies bundled component
//! templates into the project. Binaries supply their identity through
//! [`ProductConfig`] and drive the commands in [`commands`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Framework detection, config store, template lookup and install
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the `init` / `add` pipelines
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based reporting (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based reporting module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use crossui_core::{commands, templates::TemplateRegistry};
//!
//! let root = std::env::current_dir()?;
//! commands::init(&MyConfig, &root).await?;
//!
//! let registry = TemplateRegistry::from_config(&MyConfig);
//! let outcome = commands::add(&MyConfig, &registry, &root, "button").await?;
//! ```

pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod framework;
pub mod product;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ConfigRecord, InitOutcome};
pub use detect::{detect, detect_project, Detection, Evidence};
pub use error::{Error, Result};
pub use framework::Framework;
pub use product::ProductConfig;
pub use templates::{InstallOutcome, TemplateRegistry};

#[cfg(feature = "tui")]
pub use tui::{run, Command};
