//! Mode-specific palette derived from the design tokens.
//!
//! Surfaces and text have light and dark token variants; brand, module and
//! semantic colors are shared by both modes.

use super::ThemeMode;
use crate::tokens::DesignTokens;
use serde::Serialize;

/// Semantic colors for one theme mode.
///
/// Everything a screen needs to paint itself in the current mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    /// Mode this palette was built for.
    pub mode: ThemeMode,

    // Surfaces
    /// Page background.
    pub background: String,
    /// Card/paper background.
    pub paper: String,
    /// Modal scrim.
    pub overlay: String,
    /// Divider and border color.
    pub divider: String,

    // Text hierarchy
    /// Primary text.
    pub text_primary: String,
    /// Secondary text.
    pub text_secondary: String,
    /// Disabled text.
    pub text_disabled: String,

    // Brand
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,

    // State indicators
    /// Success.
    pub success: String,
    /// Warning.
    pub warning: String,
    /// Error.
    pub error: String,
    /// Informational.
    pub info: String,
}

impl ThemePalette {
    /// Builds the palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode, tokens: &DesignTokens) -> Self {
        let dark = mode.is_dark();
        let colors = &tokens.colors;

        Self {
            mode,
            background: colors.surface.background.pick(dark).to_string(),
            paper: colors.surface.paper.pick(dark).to_string(),
            overlay: colors.surface.overlay.pick(dark).to_string(),
            divider: if dark {
                colors.neutral.n700.clone()
            } else {
                colors.neutral.n200.clone()
            },
            text_primary: colors.text.primary.pick(dark).to_string(),
            text_secondary: colors.text.secondary.pick(dark).to_string(),
            text_disabled: colors.text.disabled.pick(dark).to_string(),
            primary: colors.brand.primary.clone(),
            secondary: colors.brand.secondary.clone(),
            accent: colors.brand.accent.clone(),
            success: colors.semantic.success.clone(),
            warning: colors.semantic.warning.clone(),
            error: colors.semantic.error.clone(),
            info: colors.semantic.info.clone(),
        }
    }

    /// Light palette.
    #[must_use]
    pub fn light(tokens: &DesignTokens) -> Self {
        Self::for_mode(ThemeMode::Light, tokens)
    }

    /// Dark palette.
    #[must_use]
    pub fn dark(tokens: &DesignTokens) -> Self {
        Self::for_mode(ThemeMode::Dark, tokens)
    }
}
