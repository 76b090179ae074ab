//! The flat token table produced by the external generator.

use super::TokenError;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Immutable flat map of generated token names to their primitive values.
///
/// Values are kept as strings; numeric values (font weights, unitless line
/// heights) are normalised to their decimal representation on load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenTable {
    entries: BTreeMap<String, String>,
}

impl TokenTable {
    /// Builds a table from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parses a flat JSON (or JSON5) object.
    ///
    /// Only string and number values are accepted; the generator never
    /// emits anything else into the flat table.
    pub fn from_json_str(source: &str) -> Result<Self, TokenError> {
        let value: serde_json::Value =
            json5::from_str(source).map_err(|e| TokenError::Parse(e.to_string()))?;

        let object = value
            .as_object()
            .ok_or_else(|| TokenError::Parse("expected a flat JSON object".to_string()))?;

        let mut entries = BTreeMap::new();
        for (key, value) in object {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => number_text(n),
                other => {
                    return Err(TokenError::Parse(format!(
                        "token '{key}' must be a string or number, found {}",
                        json_kind(other)
                    )))
                }
            };
            entries.insert(key.clone(), text);
        }

        debug!(tokens = entries.len(), "parsed JSON token table");
        Ok(Self { entries })
    }

    /// Parses the generator's `javascript/es6` module output.
    ///
    /// Accepts `export const Name = "value";` statements. Blank lines and
    /// comments are skipped; any other statement is rejected.
    pub fn from_es6_module(source: &str) -> Result<Self, TokenError> {
        let export_regex =
            Regex::new(r"^export\s+const\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(.+?)\s*;?\s*$")
                .map_err(|e| TokenError::Parse(e.to_string()))?;

        let mut entries = BTreeMap::new();
        let mut in_block_comment = false;

        for (index, raw_line) in source.lines().enumerate() {
            let line = raw_line.trim();
            let line_no = index + 1;

            if in_block_comment {
                if line.contains("*/") {
                    in_block_comment = false;
                }
                continue;
            }
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            if line.starts_with("/*") {
                in_block_comment = !line.contains("*/");
                continue;
            }

            let captures = export_regex.captures(line).ok_or_else(|| {
                TokenError::Parse(format!("line {line_no}: expected `export const NAME = VALUE;`"))
            })?;

            let name = captures[1].to_string();
            let value = parse_js_literal(&captures[2])
                .ok_or_else(|| TokenError::Parse(format!("line {line_no}: unsupported value for {name}")))?;

            if entries.insert(name.clone(), value).is_some() {
                warn!(token = %name, line = line_no, "duplicate token definition, keeping the last one");
            }
        }

        debug!(tokens = entries.len(), "parsed ES6 token module");
        Ok(Self { entries })
    }

    /// Loads a table from disk, choosing the parser by file extension.
    pub fn load(path: &Path) -> Result<Self, TokenError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parser: fn(&str) -> Result<Self, TokenError> = match extension.as_deref() {
            Some("json" | "json5") => Self::from_json_str,
            Some("js" | "mjs") => Self::from_es6_module,
            _ => return Err(TokenError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = fs::read_to_string(path).map_err(|source| TokenError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        parser(&source)
    }

    /// The table generated for the platform, embedded at compile time.
    pub fn builtin() -> Result<Self, TokenError> {
        Self::from_json_str(include_str!("../data/tokens.json"))
    }

    /// Returns a copy of this table with one entry added or replaced.
    #[must_use]
    pub fn with_override(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Returns a copy of this table without `key`.
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(key);
        Self { entries }
    }

    /// Looks up a raw value by generated token name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the table defines `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Number(_) => "a number",
    }
}

/// Renders a JSON number the way the generator writes it (`700`, `1.5`).
fn number_text(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}

/// Parses the right-hand side of a generated `export const`.
fn parse_js_literal(literal: &str) -> Option<String> {
    if literal.starts_with('"') {
        return serde_json::from_str::<String>(literal).ok();
    }
    if let Some(inner) = literal
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        return Some(inner.replace("\\'", "'"));
    }
    if literal.parse::<f64>().is_ok() {
        return Some(literal.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_json_normalises_numbers() {
        let table = TokenTable::from_json_str(
            r##"{"ColorBrandPrimary": "#1976d2", "TypographyFontWeightsBold": 700, "TypographyLineHeightsNormal": 1.5}"##,
        )
        .unwrap();
        assert_eq!(table.get("ColorBrandPrimary"), Some("#1976d2"));
        assert_eq!(table.get("TypographyFontWeightsBold"), Some("700"));
        assert_eq!(table.get("TypographyLineHeightsNormal"), Some("1.5"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_json5_allows_comments_and_trailing_commas() {
        let table = TokenTable::from_json_str(
            "{\n  // brand\n  ColorBrandPrimary: '#1976d2',\n  SpacingScale4: '16px',\n}",
        )
        .unwrap();
        assert_eq!(table.get("SpacingScale4"), Some("16px"));
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let err = TokenTable::from_json_str(r#"{"Color": {"brand": "x"}}"#).unwrap_err();
        assert!(err.to_string().contains("'Color'"));
        assert!(err.to_string().contains("an object"));

        assert!(TokenTable::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn test_from_es6_module() {
        let source = r##"/**
 * Do not edit directly
 * Generated on Fri, 24 Jan 2025 10:00:00 GMT
 */

export const ColorBrandPrimary = "#1976d2";
export const TypographyFontWeightsBold = 700;
export const TypographyFontsPrimary = "'Inter', sans-serif";
// trailing comment
export const SpacingScale4 = '16px';
"##;
        let table = TokenTable::from_es6_module(source).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("ColorBrandPrimary"), Some("#1976d2"));
        assert_eq!(table.get("TypographyFontWeightsBold"), Some("700"));
        assert_eq!(table.get("TypographyFontsPrimary"), Some("'Inter', sans-serif"));
        assert_eq!(table.get("SpacingScale4"), Some("16px"));
    }

    #[test]
    fn test_from_es6_module_duplicate_keeps_last() {
        let source = "export const SpacingScale4 = \"1rem\";\nexport const SpacingScale4 = \"16px\";\n";
        let table = TokenTable::from_es6_module(source).unwrap();
        assert_eq!(table.get("SpacingScale4"), Some("16px"));
    }

    #[test]
    fn test_from_es6_module_rejects_other_statements() {
        let err = TokenTable::from_es6_module("export const A = \"x\";\nmodule.exports = {};\n")
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("tokens.json");
        fs::write(&json, r#"{"SpacingScale4": "16px"}"#).unwrap();
        let js = dir.path().join("tokens.js");
        fs::write(&js, "export const SpacingScale4 = \"16px\";\n").unwrap();
        let txt = dir.path().join("tokens.txt");
        fs::write(&txt, "").unwrap();

        assert_eq!(TokenTable::load(&json).unwrap(), TokenTable::load(&js).unwrap());
        assert!(matches!(
            TokenTable::load(&txt),
            Err(TokenError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            TokenTable::load(&dir.path().join("missing.json")),
            Err(TokenError::Io { .. })
        ));
    }

    #[test]
    fn test_builtin_table_loads() {
        let table = TokenTable::builtin().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.get("ColorBrandPrimary"), Some("#1976d2"));
    }

    #[test]
    fn test_with_override_leaves_original_untouched() {
        let table = TokenTable::from_pairs([("SpacingScale4", "1rem")]);
        let changed = table.with_override("SpacingScale4", "16px");
        assert_eq!(table.get("SpacingScale4"), Some("1rem"));
        assert_eq!(changed.get("SpacingScale4"), Some("16px"));
        assert!(!changed.without("SpacingScale4").contains("SpacingScale4"));
    }
}
