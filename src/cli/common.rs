//! Shared CLI plumbing: error type, exit codes and token/config loading.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::tokens::{resolve, unused_keys, DesignTokens, TokenError, TokenTable};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Bad input, missing tokens or invalid configuration.
    Validation = 1,
    /// Reading or writing files failed.
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A command failure with the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code category.
    pub kind: ExitCode,
    /// Message printed to stderr.
    pub message: String,
}

impl CliError {
    /// Invalid input or state.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<TokenError> for CliError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Io { .. } => Self::io(err.to_string()),
            _ => Self::validation(err.to_string()),
        }
    }
}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration. An unreadable file is an I/O error; bad
/// contents are validation errors.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(config_load_error)
}

/// Maps a configuration load failure to the matching exit code.
pub fn config_load_error(err: anyhow::Error) -> CliError {
    let message = format!("Failed to load configuration: {err:#}");
    if err.chain().any(|cause| cause.is::<std::io::Error>()) {
        CliError::io(message)
    } else {
        CliError::validation(message)
    }
}

/// Picks the token table: `--table`, then the configured table, then the built-in one.
pub fn load_table(explicit: Option<&Path>, config: &Config) -> CliResult<TokenTable> {
    let path: Option<PathBuf> = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.paths.token_table.clone());

    let table = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading token table");
            TokenTable::load(&path)?
        }
        None => TokenTable::builtin()?,
    };
    Ok(table)
}

/// Parses `KEY=VALUE` overrides and applies them to the table.
pub fn apply_overrides(table: TokenTable, overrides: &[String]) -> CliResult<TokenTable> {
    overrides.iter().try_fold(table, |table, pair| {
        let (key, value) = pair
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| {
                CliError::validation(format!("Invalid override '{pair}': expected KEY=VALUE"))
            })?;
        Ok(table.with_override(key.trim(), value))
    })
}

/// Loads, overrides and resolves the token table in one go.
pub fn load_tokens(
    explicit: Option<&Path>,
    overrides: &[String],
    config: &Config,
) -> CliResult<DesignTokens> {
    let table = apply_overrides(load_table(explicit, config)?, overrides)?;
    let tokens = resolve(&table)?;

    let unused = unused_keys(&table);
    if !unused.is_empty() {
        warn!(count = unused.len(), keys = %unused.join(", "), "Token table has unused keys");
    }
    Ok(tokens)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
