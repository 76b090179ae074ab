//! Error type for token loading and resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, resolving or referencing design tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// One or more table keys required by the resolved tree are absent.
    #[error("missing design token(s): {}", keys.join(", "))]
    MissingTokens {
        /// Missing table keys, in the order the resolver required them.
        keys: Vec<String>,
    },

    /// The token source could not be parsed.
    #[error("failed to parse token table: {0}")]
    Parse(String),

    /// The token source has an extension no loader understands.
    #[error("unsupported token table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A brand preset references a token path that does not exist.
    #[error("preset '{preset}' references unknown token '{{{path}}}'")]
    UnknownReference {
        /// Preset key holding the reference.
        preset: String,
        /// Dotted path inside the braces.
        path: String,
    },

    /// A dotted path does not name a leaf of the resolved tree.
    #[error("unknown token path: {0}")]
    UnknownPath(String),

    /// Reading the token source failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl TokenError {
    /// Returns the missing keys when this is a [`TokenError::MissingTokens`].
    #[must_use]
    pub fn missing_keys(&self) -> &[String] {
        match self {
            Self::MissingTokens { keys } => keys,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tokens_message_names_every_key() {
        let err = TokenError::MissingTokens {
            keys: vec!["ColorBrandPrimary".to_string(), "SpacingScale4".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("ColorBrandPrimary"));
        assert!(msg.contains("SpacingScale4"));
        assert_eq!(err.missing_keys().len(), 2);
    }

    #[test]
    fn test_unknown_reference_message() {
        let err = TokenError::UnknownReference {
            preset: "platform".to_string(),
            path: "colors.brand.teal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "preset 'platform' references unknown token '{colors.brand.teal}'"
        );
        assert!(err.missing_keys().is_empty());
    }
}
