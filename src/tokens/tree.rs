//! The resolved, nested design-token tree.
//!
//! Every leaf is a required field, so a tree that exists is complete: code
//! that reads `tokens.colors.brand.primary` can never observe a missing
//! value. Construction goes through [`super::resolve`], which refuses to
//! build a partial tree.

use super::{resolve, TokenError, TokenTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete set of resolved design tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    /// Color palette.
    pub colors: ColorTokens,
    /// Spacing scale and semantic spacing.
    pub spacing: SpacingTokens,
    /// Fonts, weights, sizes and composed text styles.
    pub typography: TypographyTokens,
    /// Corner radii.
    pub border_radius: RadiusScale,
    /// Elevation shadows.
    pub shadows: ShadowScale,
}

/// Color groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    /// Platform brand colors.
    pub brand: BrandColors,
    /// Per-module accent colors.
    pub modules: ModuleColors,
    /// Status colors.
    pub semantic: SemanticColors,
    /// Gray ramp, 50 (lightest) to 900 (darkest).
    pub neutral: NeutralScale,
    /// Theme-aware surface colors.
    pub surface: SurfaceColors,
    /// Theme-aware text colors.
    pub text: TextColors,
}

/// Brand colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
}

/// Colors for the three platform modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleColors {
    /// AI-HRMS module.
    pub ai: ModuleColor,
    /// NOSE research module.
    pub nose: ModuleColor,
    /// Web-Hunter module.
    pub hunter: ModuleColor,
}

/// A single module's color set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleColor {
    /// Main color.
    pub primary: String,
    /// Lighter tint.
    pub light: String,
    /// Darker shade.
    pub dark: String,
    /// CSS gradient built from the module colors.
    pub gradient: String,
}

/// Status colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Success.
    pub success: String,
    /// Warning.
    pub warning: String,
    /// Error.
    pub error: String,
    /// Informational.
    pub info: String,
}

/// Neutral gray ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct NeutralScale {
    #[serde(rename = "50")]
    pub n50: String,
    #[serde(rename = "100")]
    pub n100: String,
    #[serde(rename = "200")]
    pub n200: String,
    #[serde(rename = "300")]
    pub n300: String,
    #[serde(rename = "400")]
    pub n400: String,
    #[serde(rename = "500")]
    pub n500: String,
    #[serde(rename = "600")]
    pub n600: String,
    #[serde(rename = "700")]
    pub n700: String,
    #[serde(rename = "800")]
    pub n800: String,
    #[serde(rename = "900")]
    pub n900: String,
}

impl NeutralScale {
    /// Steps present in the ramp.
    pub const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

    /// Looks up a step of the ramp.
    #[must_use]
    pub fn get(&self, step: u16) -> Option<&str> {
        let value = match step {
            50 => &self.n50,
            100 => &self.n100,
            200 => &self.n200,
            300 => &self.n300,
            400 => &self.n400,
            500 => &self.n500,
            600 => &self.n600,
            700 => &self.n700,
            800 => &self.n800,
            900 => &self.n900,
            _ => return None,
        };
        Some(value)
    }
}

/// A value with light and dark variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeVariants {
    /// Value used in light mode.
    pub light: String,
    /// Value used in dark mode.
    pub dark: String,
}

impl ModeVariants {
    /// Picks the variant for the given darkness.
    #[must_use]
    pub fn pick(&self, dark: bool) -> &str {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// Surface colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceColors {
    /// Page background.
    pub background: ModeVariants,
    /// Card/paper background.
    pub paper: ModeVariants,
    /// Modal scrim.
    pub overlay: ModeVariants,
}

/// Text colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    /// Body text.
    pub primary: ModeVariants,
    /// Labels and secondary content.
    pub secondary: ModeVariants,
    /// Disabled controls.
    pub disabled: ModeVariants,
}

/// Spacing groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingTokens {
    /// Numeric scale (4px base unit).
    pub scale: SpacingScale,
    /// Semantic spacing for components, layout and grids.
    pub semantic: SemanticSpacing,
}

/// The numeric spacing scale, keyed by step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SpacingScale {
    #[serde(rename = "0")]
    pub s0: String,
    #[serde(rename = "1")]
    pub s1: String,
    #[serde(rename = "2")]
    pub s2: String,
    #[serde(rename = "3")]
    pub s3: String,
    #[serde(rename = "4")]
    pub s4: String,
    #[serde(rename = "5")]
    pub s5: String,
    #[serde(rename = "6")]
    pub s6: String,
    #[serde(rename = "8")]
    pub s8: String,
    #[serde(rename = "10")]
    pub s10: String,
    #[serde(rename = "12")]
    pub s12: String,
    #[serde(rename = "16")]
    pub s16: String,
    #[serde(rename = "20")]
    pub s20: String,
    #[serde(rename = "24")]
    pub s24: String,
    #[serde(rename = "32")]
    pub s32: String,
}

impl SpacingScale {
    /// Steps present in the scale. Gaps (7, 9, ...) are intentional.
    pub const STEPS: [u8; 14] = [0, 1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24, 32];

    /// Looks up a step of the scale.
    #[must_use]
    pub fn get(&self, step: u8) -> Option<&str> {
        let value = match step {
            0 => &self.s0,
            1 => &self.s1,
            2 => &self.s2,
            3 => &self.s3,
            4 => &self.s4,
            5 => &self.s5,
            6 => &self.s6,
            8 => &self.s8,
            10 => &self.s10,
            12 => &self.s12,
            16 => &self.s16,
            20 => &self.s20,
            24 => &self.s24,
            32 => &self.s32,
            _ => return None,
        };
        Some(value)
    }
}

/// Semantic spacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticSpacing {
    /// Inside components.
    pub component: ComponentSpacing,
    /// Page structure.
    pub layout: LayoutSpacing,
    /// Grid and flex gaps.
    pub grid: GridSpacing,
}

/// Four-step size ramp used by semantic spacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SizeSteps {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

/// Component padding and margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ComponentSpacing {
    pub padding: SizeSteps,
    pub margin: SizeSteps,
}

/// Container widths and section gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct LayoutSpacing {
    pub container: SizeSteps,
    pub section: SizeSteps,
}

/// Grid gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct GridSpacing {
    pub gap: SizeSteps,
}

/// Typography groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    /// Font stacks.
    pub fonts: FontFamilies,
    /// Numeric font weights.
    pub font_weights: FontWeights,
    /// Font size ramp.
    pub font_sizes: FontSizes,
    /// Unitless line heights.
    pub line_heights: LineHeights,
    /// Composed text styles per heading/body variant.
    pub text_styles: TextStyles,
}

/// Font stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    /// UI and body text.
    pub primary: String,
    /// Display headings.
    pub secondary: String,
    /// Code and data.
    pub monospace: String,
}

/// Font weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FontWeights {
    pub light: String,
    pub regular: String,
    pub medium: String,
    pub semi_bold: String,
    pub bold: String,
    pub extra_bold: String,
}

/// Font sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct FontSizes {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    #[serde(rename = "3xl")]
    pub xl3: String,
    #[serde(rename = "4xl")]
    pub xl4: String,
    #[serde(rename = "5xl")]
    pub xl5: String,
    #[serde(rename = "6xl")]
    pub xl6: String,
}

/// Line heights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct LineHeights {
    pub tight: String,
    pub snug: String,
    pub normal: String,
    pub relaxed: String,
    pub loose: String,
}

/// Text styles by variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TextStyles {
    pub display: TextStyle,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub body: TextStyle,
    pub body_large: TextStyle,
    pub caption: TextStyle,
    pub code: TextStyle,
}

/// A composed text style.
///
/// Only the display and h1 styles carry letter spacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TextStyle {
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    pub font_family: String,
}

/// Corner radii.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RadiusScale {
    pub none: String,
    pub sm: String,
    pub base: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    #[serde(rename = "3xl")]
    pub xl3: String,
    pub full: String,
}

/// Shadows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ShadowScale {
    pub none: String,
    pub sm: String,
    pub base: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
}

impl DesignTokens {
    /// Resolves the embedded platform token table.
    pub fn builtin() -> Result<Self, TokenError> {
        resolve(&TokenTable::builtin()?)
    }

    /// Serialises the tree to nested JSON using the public camelCase names.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Every leaf of the tree as `dotted.path -> value`.
    #[must_use]
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        flatten_into(&self.to_json(), String::new(), &mut out);
        out
    }

    /// Looks up a single leaf by dotted path (`"spacing.scale.4"`).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<String> {
        let json = self.to_json();
        let mut node = &json;
        for segment in path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str().map(str::to_string)
    }

    /// Like [`DesignTokens::get`], but reports an unknown path as an error.
    pub fn require(&self, path: &str) -> Result<String, TokenError> {
        self.get(path)
            .ok_or_else(|| TokenError::UnknownPath(path.to_string()))
    }
}

fn flatten_into(node: &serde_json::Value, prefix: String, out: &mut BTreeMap<String, String>) {
    match node {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, path, out);
            }
        }
        serde_json::Value::String(value) => {
            out.insert(prefix, value.clone());
        }
        _ => {}
    }
}
