//! CLI reporting using cliclack (Charm-style inline output)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod report;

#[cfg(feature = "tui")]
pub use report::{run, Command};
