//! Project configuration record and its on-disk store
//!
//! This module provides:
//! - The `ConfigRecord` persisted at the project root
//! - `init_config` / `read_config` against a project root

pub mod record;
pub mod store;

pub use record::ConfigRecord;
pub use store::{init_config, read_config, InitOutcome};
