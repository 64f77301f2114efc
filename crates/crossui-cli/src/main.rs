//! CrossUI CLI - Add CrossUI components to a project

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossui_core::tui::Command as CoreCommand;
use crossui_core::ProductConfig;

/// CrossUI product configuration
#[derive(Clone)]
pub struct CrossUiConfig;

impl ProductConfig for CrossUiConfig {
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
        "CROSSUI_TEMPLATE_DIR"
    }

    fn bundled_template_dir(&self) -> &'static str {
        concat!(env!("CARGO_MANIFEST_DIR"), "/templates")
    }
}

#[derive(Parser, Debug)]
#[command(name = "crossui")]
#[command(about = "CrossUI CLI for scaffolding components")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize CrossUI config
    Init,
    /// Add a UI component
    Add {
        /// Component name (e.g. button)
        component: String,
    },
}

impl From<Command> for CoreCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Init => CoreCommand::Init,
            Command::Add { component } => CoreCommand::Add { component },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = CrossUiConfig;
    let root = std::env::current_dir().context("Failed to determine current directory")?;

    let succeeded = crossui_core::run(&config, args.command.into(), &root).await?;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_add_component() {
        let args = Args::try_parse_from(["crossui", "add", "button"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Add { ref component } if component == "button"
        ));
    }

    #[test]
    fn test_add_requires_component() {
        assert!(Args::try_parse_from(["crossui", "add"]).is_err());
    }

    #[test]
    fn test_bundled_templates_ship_with_the_binary() {
        let dir = std::path::Path::new(CrossUiConfig.bundled_template_dir());
        assert!(dir.join("expo/Button.tsx").is_file());
    }
}
