//! Directory classes shown by the service file manager.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A managed directory and what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryClass {
    /// Lookup key such as `development-logs`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Relative path on the server.
    pub path: String,
    /// What the directory is for.
    pub description: String,
    /// Accent colour as `#rrggbb`.
    pub color: String,
    /// Human-readable total size.
    pub size: String,
    /// Number of files.
    pub file_count: u32,
    /// File extensions found in the directory.
    #[serde(default)]
    pub types: Vec<String>,
}

impl DirectoryClass {
    /// Whether the directory holds files with the given extension.
    #[must_use]
    pub fn holds(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.types.iter().any(|t| t.eq_ignore_ascii_case(extension))
    }
}

/// How many directories hold each file type.
#[must_use]
pub fn count_file_types(classes: &[DirectoryClass]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for class in classes {
        for file_type in &class.types {
            *counts.entry(file_type.clone()).or_insert(0) += 1;
        }
    }
    counts
}
