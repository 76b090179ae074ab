//! Platform Tokens Library
//!
//! Core functionality of the platform UI toolchain: resolving the flat
//! design-token table into a typed tree, exporting it as CSS/SCSS/ES6/JSON,
//! persisting the light/dark theme mode, brand identity presets, component
//! style composition, and the record shapes the management screens render.

// Module declarations
pub mod brand;
pub mod branding;
pub mod cli;
pub mod config;
pub mod models;
pub mod styles;
pub mod theme;
pub mod tokens;
