//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a branded CLI implements to configure
//! where its config file lives and where its bundled templates come from.

/// Configuration trait for CLI products built on this core
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The config file written at the project root
/// - Template locations (bundled directory and override env var)
/// - Defaults recorded by `init`
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// File name of the config record at the project root
    fn config_file_name(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Template directory bundled with the tool at build time
    fn bundled_template_dir(&self) -> &'static str;

    /// Components directory written into a fresh config
    fn default_components_dir(&self) -> &'static str {
        "components/ui"
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ProductConfig;

    /// Minimal product used by unit tests across the crate
    #[derive(Clone)]
    pub struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "crossui"
        }

        fn display_name(&self) -> &'static str {
            "CrossUI"
        }

        fn config_file_name(&self) -> &'static str {
            "crossui.config.json"
        }

        fn template_dir_env(&self) -> &'static str {
            "CROSSUI_TEST_TEMPLATE_DIR"
        }

        fn bundled_template_dir(&self) -> &'static str {
            "templates"
        }
    }
}
