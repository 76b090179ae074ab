//! CLI command handlers for Platform Tokens.
//!
//! Headless, scriptable access to token resolution, the theme mode store,
//! brand presets, component styles and screen records.

pub mod brand;
pub mod common;
pub mod config;
pub mod records;
pub mod style;
pub mod theme;
pub mod tokens;

// Re-export types used by main.rs and tests
pub use brand::BrandArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use records::RecordsArgs;
pub use style::StyleArgs;
pub use theme::ThemeArgs;
pub use tokens::TokensArgs;
