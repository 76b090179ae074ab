//! Record checking command for screen data documents.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{summarize_json, RecordKind};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Screen record commands
#[derive(Args, Debug)]
pub struct RecordsArgs {
    #[command(subcommand)]
    command: RecordsCommand,
}

#[derive(Subcommand, Debug)]
enum RecordsCommand {
    /// Parse a JSON array of records and summarize their statuses
    Check(RecordsCheckArgs),
}

/// Parse a JSON array of records and summarize their statuses
#[derive(Args, Debug)]
pub struct RecordsCheckArgs {
    /// Record kind: payroll, attendance, leave, database or directory
    #[arg(long, value_name = "KIND")]
    kind: RecordKind,

    /// JSON file holding an array of records
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct CheckOutput {
    kind: String,
    total: usize,
    counts: BTreeMap<String, usize>,
    badges: BTreeMap<String, String>,
}

impl RecordsArgs {
    /// Execute records subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            RecordsCommand::Check(args) => args.execute(),
        }
    }
}

impl RecordsCheckArgs {
    /// Execute check command
    pub fn execute(&self) -> CliResult<()> {
        let source = std::fs::read_to_string(&self.file).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.file.display()))
        })?;

        let summary = summarize_json(self.kind, &source)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if self.json {
            return print_json(&CheckOutput {
                kind: summary.kind.to_string(),
                total: summary.total,
                counts: summary.counts,
                badges: summary
                    .variants
                    .iter()
                    .map(|(label, variant)| (label.clone(), variant.to_string()))
                    .collect(),
            });
        }

        println!("{} {} record(s)", summary.total, summary.kind);
        for (label, count) in &summary.counts {
            match summary.variants.get(label) {
                Some(variant) => println!("  {label}: {count} [{variant}]"),
                None => println!("  {label}: {count}"),
            }
        }
        Ok(())
    }
}
