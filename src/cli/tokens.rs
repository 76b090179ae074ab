//! Token resolution and export commands.

use crate::cli::common::{load_config, load_tokens, print_json, CliError, CliResult};
use crate::tokens::export::build;
use crate::tokens::ExportFormat;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Design token commands
#[derive(Args, Debug)]
pub struct TokensArgs {
    #[command(subcommand)]
    command: TokensCommand,
}

#[derive(Subcommand, Debug)]
enum TokensCommand {
    /// Resolve the token table and print the tree
    Resolve(TokensResolveArgs),
    /// Print one resolved value by dotted path
    Get(TokensGetArgs),
    /// Write CSS, SCSS, JSON and ES6 token files
    Build(TokensBuildArgs),
}

/// Resolve the token table and print the tree
#[derive(Args, Debug)]
pub struct TokensResolveArgs {
    /// Token table to resolve (.json, .json5, .js, .mjs)
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Override a table entry before resolving (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Output the nested tree as JSON
    #[arg(long)]
    json: bool,
}

/// Print one resolved value by dotted path
#[derive(Args, Debug)]
pub struct TokensGetArgs {
    /// Dotted path such as `spacing.scale.4`
    #[arg(value_name = "PATH")]
    path: String,

    /// Token table to resolve
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,
}

/// Write token files for the stylesheet toolchain
#[derive(Args, Debug)]
pub struct TokensBuildArgs {
    /// Output directory (defaults to the configured build directory)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Format to write: css, scss, json, es6 or all
    #[arg(long, default_value = "all", value_name = "FORMAT")]
    format: String,

    /// Token table to resolve
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,
}

impl TokensArgs {
    /// Execute tokens subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            TokensCommand::Resolve(args) => args.execute(),
            TokensCommand::Get(args) => args.execute(),
            TokensCommand::Build(args) => args.execute(),
        }
    }
}

impl TokensResolveArgs {
    /// Execute resolve command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let tokens = load_tokens(self.table.as_deref(), &self.overrides, &config)?;

        if self.json {
            return print_json(&tokens);
        }

        let flat = tokens.flatten();
        println!("Resolved {} design tokens", flat.len());
        println!();
        let mut current_group = "";
        for (path, value) in &flat {
            let group = path.split('.').next().unwrap_or_default();
            if group != current_group {
                if !current_group.is_empty() {
                    println!();
                }
                println!("{group}:");
                current_group = group;
            }
            println!("  {path} = {value}");
        }
        Ok(())
    }
}

impl TokensGetArgs {
    /// Execute get command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let tokens = load_tokens(self.table.as_deref(), &[], &config)?;
        let value = tokens.require(&self.path)?;
        println!("{value}");
        Ok(())
    }
}

impl TokensBuildArgs {
    /// Execute build command
    pub fn execute(&self) -> CliResult<()> {
        let formats = parse_formats(&self.format)?;
        let config = load_config()?;
        let tokens = load_tokens(self.table.as_deref(), &[], &config)?;

        let out_dir = self
            .out
            .clone()
            .unwrap_or_else(|| config.build.output_dir.clone());

        let written = build(&tokens, &out_dir, &formats)
            .map_err(|e| CliError::io(format!("Failed to write token files: {e:#}")))?;

        for path in &written {
            println!("{}", path.display());
        }
        Ok(())
    }
}

fn parse_formats(value: &str) -> CliResult<Vec<ExportFormat>> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(ExportFormat::ALL.to_vec());
    }

    value
        .split(',')
        .map(|part| part.trim().parse::<ExportFormat>().map_err(CliError::validation))
        .collect()
}
