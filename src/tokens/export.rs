//! Renders the resolved tree into the generator's output platforms.

use super::path::{css_name, token_key};
use super::DesignTokens;
use crate::branding::generated_header;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Output platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSS custom properties on `:root`.
    Css,
    /// SCSS variables.
    Scss,
    /// Nested JSON.
    Json,
    /// ES6 module of `export const` declarations.
    Es6,
}

impl ExportFormat {
    /// All formats, in build order.
    pub const ALL: [Self; 4] = [Self::Css, Self::Scss, Self::Json, Self::Es6];

    /// Relative output path used by [`build_all`].
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Css => "css/variables.css",
            Self::Scss => "scss/_variables.scss",
            Self::Json => "json/tokens.json",
            Self::Es6 => "js/tokens.js",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "json" => Ok(Self::Json),
            "es6" | "js" => Ok(Self::Es6),
            other => Err(format!(
                "Unknown export format '{other}'. Expected css, scss, json or es6"
            )),
        }
    }
}

/// Renders the tree in the requested format.
#[must_use]
pub fn render(tokens: &DesignTokens, format: ExportFormat) -> String {
    let flat = tokens.flatten();
    let header = generated_header();
    let mut out = String::new();

    match format {
        ExportFormat::Css => {
            let _ = writeln!(out, "/**\n * {header}\n */\n\n:root {{");
            for (path, value) in &flat {
                let _ = writeln!(out, "  --{}: {};", css_name(path), value);
            }
            out.push_str("}\n");
        }
        ExportFormat::Scss => {
            let _ = writeln!(out, "// {header}\n");
            for (path, value) in &flat {
                let _ = writeln!(out, "${}: {};", css_name(path), value);
            }
        }
        ExportFormat::Json => {
            out = serde_json::to_string_pretty(&tokens.to_json()).unwrap_or_default();
            out.push('\n');
        }
        ExportFormat::Es6 => {
            let _ = writeln!(out, "/**\n * {header}\n */\n");
            for (path, value) in &flat {
                let quoted = serde_json::to_string(value).unwrap_or_default();
                let _ = writeln!(out, "export const {} = {};", token_key(path), quoted);
            }
        }
    }

    debug!(?format, bytes = out.len(), "rendered tokens");
    out
}

/// Writes every format below `out_dir`, returning the written files.
pub fn build_all(tokens: &DesignTokens, out_dir: &Path) -> Result<Vec<PathBuf>> {
    build(tokens, out_dir, &ExportFormat::ALL)
}

/// Writes the selected formats below `out_dir`.
pub fn build(tokens: &DesignTokens, out_dir: &Path, formats: &[ExportFormat]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(formats.len());

    for &format in formats {
        let path = out_dir.join(format.file_name());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create output directory: {}",
                parent.display()
            ))?;
        }
        fs::write(&path, render(tokens, format))
            .context(format!("Failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
