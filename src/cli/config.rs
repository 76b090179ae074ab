//! Configuration management CLI commands.

use crate::branding::APP_DISPLAY_NAME;
use crate::cli::common::{config_load_error, load_config, print_json, CliError, CliResult};
use crate::config::{Config, InitialMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Token table to resolve instead of the built-in one
    #[arg(long, value_name = "FILE")]
    token_table: Option<PathBuf>,

    /// Theme mode on first run (light, dark, or system)
    #[arg(long, value_name = "MODE")]
    initial_mode: Option<InitialMode>,

    /// Default brand preset key
    #[arg(long, value_name = "KEY")]
    brand: Option<String>,

    /// Token build output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    build: BuildOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    token_table: Option<String>,
    state_dir: String,
}

#[derive(Serialize, Debug)]
struct BuildOutput {
    output_dir: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    initial_mode: String,
    brand: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&to_output(&config)?)?;
        } else {
            output_human_readable(&config)?;
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.token_table.is_none()
            && self.initial_mode.is_none()
            && self.brand.is_none()
            && self.output_dir.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --token-table, --initial-mode, --brand, or --output-dir",
            ));
        }

        // Stale values are checked after the edits, so a moved table can be repointed
        let mut config = Config::load_unvalidated().map_err(config_load_error)?;

        if let Some(path) = &self.token_table {
            if !path.exists() {
                return Err(CliError::validation(format!(
                    "Token table does not exist: {}",
                    path.display()
                )));
            }
            config.paths.token_table = Some(path.clone());
        }

        if let Some(mode) = self.initial_mode {
            config.ui.initial_mode = mode;
        }

        if let Some(brand) = &self.brand {
            config.ui.brand.clone_from(brand);
        }

        if let Some(path) = &self.output_dir {
            config.build.output_dir.clone_from(path);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn to_output(config: &Config) -> CliResult<ConfigOutput> {
    let state_dir = config
        .state_dir()
        .map_err(|e| CliError::io(format!("Failed to locate state directory: {e}")))?;

    Ok(ConfigOutput {
        paths: PathsOutput {
            token_table: config
                .paths
                .token_table
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            state_dir: state_dir.to_string_lossy().to_string(),
        },
        build: BuildOutput {
            output_dir: config.build.output_dir.to_string_lossy().to_string(),
        },
        ui: UiOutput {
            initial_mode: config.ui.initial_mode.as_str().to_string(),
            brand: config.ui.brand.clone(),
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) -> CliResult<()> {
    let output = to_output(config)?;

    let title = format!("{APP_DISPLAY_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Paths:");
    match &output.paths.token_table {
        Some(table) => println!("  Token Table: {table}"),
        None => println!("  Token Table: (built-in)"),
    }
    println!("  State Directory: {}", output.paths.state_dir);
    println!();

    println!("Build:");
    println!("  Output Directory: {}", output.build.output_dir);
    println!();

    println!("UI:");
    println!("  Initial Mode: {}", output.ui.initial_mode);
    println!("  Brand: {}", output.ui.brand);
    println!();

    Ok(())
}
