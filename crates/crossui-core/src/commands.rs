//! The `init` and `add` pipelines
//!
//! Each command takes the project root explicitly and runs one linear
//! sequence of filesystem steps. Nothing is kept between invocations.

use crate::config::{self, ConfigRecord, InitOutcome};
use crate::error::Result;
use crate::product::ProductConfig;
use crate::templates::{self, InstallOutcome, TemplateRegistry};
use std::path::Path;

/// Create the project config if it is missing
pub async fn init<C: ProductConfig>(config: &C, root: &Path) -> Result<InitOutcome> {
    config::init_config(config, root).await
}

/// Install one component using the project's config
///
/// Fails with `ConfigNotFound` before touching the filesystem when the
/// project has not been initialized.
pub async fn add<C: ProductConfig>(
    config: &C,
    registry: &TemplateRegistry,
    root: &Path,
    component: &str,
) -> Result<(ConfigRecord, InstallOutcome)> {
    let record = config::read_config(config, root).await?;
    let outcome = templates::install(
        registry,
        record.framework,
        component,
        &record.components_dir(root),
    )
    .await?;
    Ok((record, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::framework::Framework;
    use crate::product::testing::TestProduct;
    use tempfile::TempDir;

    fn expo_templates() -> TempDir {
        let root = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("expo")).unwrap();
        std::fs::write(root.path().join("expo/Button.tsx"), "button template").unwrap();
        root
    }

    #[tokio::test]
    async fn test_add_without_config_writes_nothing() {
        let templates = expo_templates();
        let project = TempDir::new().unwrap();
        let registry = TemplateRegistry::from_local(templates.path());

        let err = add(&TestProduct, &registry, project.path(), "button")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(!project.path().join("components").exists());
        assert_eq!(std::fs::read_dir(project.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_add_uses_configured_directory() {
        let templates = expo_templates();
        let project = TempDir::new().unwrap();
        std::fs::write(
            project.path().join("crossui.config.json"),
            r#"{"framework": "expo", "componentsDirectory": "src/components"}"#,
        )
        .unwrap();
        let registry = TemplateRegistry::from_local(templates.path());

        let (record, outcome) = add(&TestProduct, &registry, project.path(), "button")
            .await
            .unwrap();

        assert_eq!(record.framework, Framework::Expo);
        assert!(matches!(outcome, InstallOutcome::Installed { .. }));
        assert_eq!(
            std::fs::read_to_string(project.path().join("src/components/Button.tsx")).unwrap(),
            "button template"
        );
    }

    #[tokio::test]
    async fn test_init_then_add_in_expo_project() {
        let templates = expo_templates();
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join("app.json"), "{}").unwrap();
        let registry = TemplateRegistry::from_local(templates.path());

        let outcome = init(&TestProduct, project.path()).await.unwrap();
        assert!(matches!(outcome, InitOutcome::Created { .. }));

        let (_, outcome) = add(&TestProduct, &registry, project.path(), "button")
            .await
            .unwrap();
        assert!(matches!(outcome, InstallOutcome::Installed { .. }));
        assert!(project.path().join("components/ui/Button.tsx").exists());
    }
}
