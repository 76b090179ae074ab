//! Branding and application identity configuration.
//!
//! This module centralizes the application's names and paths. Change values
//! here to rename the tool.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Platform Tokens";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Binary executable name
/// - Command examples in documentation
pub const APP_BINARY_NAME: &str = "platform-tokens";

/// The directory name for application data (config, persisted theme mode).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "PlatformTokens";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PLATFORM_TOKENS_CONFIG_DIR";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Design tokens, theme mode and brand presets for the platform UI";

/// Banner written at the top of every generated token file.
pub fn generated_header() -> String {
    format!("Do not edit directly, this file was auto-generated by {APP_BINARY_NAME}.")
}
