//! Maps the flat generated table onto the nested [`DesignTokens`] tree.

use super::path::token_key;
use super::tree::{
    BrandColors, ColorTokens, ComponentSpacing, DesignTokens, FontFamilies, FontSizes,
    FontWeights, GridSpacing, LayoutSpacing, LineHeights, ModeVariants, ModuleColor,
    ModuleColors, NeutralScale, RadiusScale, SemanticColors, SemanticSpacing, ShadowScale,
    SizeSteps, SpacingScale, SpacingTokens, SurfaceColors, TextColors, TextStyle, TextStyles,
    TypographyTokens,
};
use super::{TokenError, TokenTable};
use std::collections::BTreeSet;
use tracing::debug;

/// Resolves a complete token table into the nested tree.
///
/// Resolution is pure: the same table always yields an equal tree. Every
/// leaf of the tree is required; if any are absent the call fails with
/// [`TokenError::MissingTokens`] listing all of them.
pub fn resolve(table: &TokenTable) -> Result<DesignTokens, TokenError> {
    let mut lookup = Lookup::new(table);

    let tokens = DesignTokens {
        colors: colors(&mut lookup),
        spacing: spacing(&mut lookup),
        typography: typography(&mut lookup),
        border_radius: border_radius(&mut lookup),
        shadows: shadows(&mut lookup),
    };

    if !lookup.missing.is_empty() {
        return Err(TokenError::MissingTokens {
            keys: lookup.missing,
        });
    }

    debug!(
        tokens = lookup.used.len(),
        unused = table.len() - lookup.used.len(),
        "resolved design tokens"
    );
    Ok(tokens)
}

/// Table keys that the resolved tree does not consume.
#[must_use]
pub fn unused_keys(table: &TokenTable) -> Vec<String> {
    let mut lookup = Lookup::new(table);
    let _ = colors(&mut lookup);
    let _ = spacing(&mut lookup);
    let _ = typography(&mut lookup);
    let _ = border_radius(&mut lookup);
    let _ = shadows(&mut lookup);

    table
        .iter()
        .map(|(key, _)| key)
        .filter(|key| !lookup.used.contains(*key))
        .map(str::to_string)
        .collect()
}

/// Records every key requested, and every key the table lacks.
struct Lookup<'a> {
    table: &'a TokenTable,
    used: BTreeSet<String>,
    missing: Vec<String>,
}

impl<'a> Lookup<'a> {
    fn new(table: &'a TokenTable) -> Self {
        Self {
            table,
            used: BTreeSet::new(),
            missing: Vec::new(),
        }
    }

    /// Value at `path`. A missing key yields an empty placeholder that
    /// never escapes `resolve`.
    fn at(&mut self, path: &str) -> String {
        let key = token_key(path);
        match self.table.get(&key) {
            Some(value) => {
                let value = value.to_string();
                self.used.insert(key);
                value
            }
            None => {
                self.missing.push(key);
                String::new()
            }
        }
    }

    fn optional(&mut self, path: &str) -> Option<String> {
        let key = token_key(path);
        let value = self.table.get(&key)?.to_string();
        self.used.insert(key);
        Some(value)
    }

    fn modes(&mut self, prefix: &str) -> ModeVariants {
        ModeVariants {
            light: self.at(&format!("{prefix}.light")),
            dark: self.at(&format!("{prefix}.dark")),
        }
    }

    fn sizes(&mut self, prefix: &str) -> SizeSteps {
        SizeSteps {
            sm: self.at(&format!("{prefix}.sm")),
            md: self.at(&format!("{prefix}.md")),
            lg: self.at(&format!("{prefix}.lg")),
            xl: self.at(&format!("{prefix}.xl")),
        }
    }

    fn module(&mut self, name: &str) -> ModuleColor {
        let prefix = format!("colors.modules.{name}");
        ModuleColor {
            primary: self.at(&format!("{prefix}.primary")),
            light: self.at(&format!("{prefix}.light")),
            dark: self.at(&format!("{prefix}.dark")),
            gradient: self.at(&format!("{prefix}.gradient")),
        }
    }

    /// `with_letter_spacing` marks the styles whose letter spacing is
    /// part of the required set.
    fn text_style(&mut self, name: &str, with_letter_spacing: bool) -> TextStyle {
        let prefix = format!("typography.textStyles.{name}");
        let letter_spacing_path = format!("{prefix}.letterSpacing");
        TextStyle {
            font_size: self.at(&format!("{prefix}.fontSize")),
            font_weight: self.at(&format!("{prefix}.fontWeight")),
            line_height: self.at(&format!("{prefix}.lineHeight")),
            letter_spacing: if with_letter_spacing {
                Some(self.at(&letter_spacing_path))
            } else {
                self.optional(&letter_spacing_path)
            },
            font_family: self.at(&format!("{prefix}.fontFamily")),
        }
    }
}

fn colors(l: &mut Lookup<'_>) -> ColorTokens {
    ColorTokens {
        brand: BrandColors {
            primary: l.at("colors.brand.primary"),
            secondary: l.at("colors.brand.secondary"),
            accent: l.at("colors.brand.accent"),
        },
        modules: ModuleColors {
            ai: l.module("ai"),
            nose: l.module("nose"),
            hunter: l.module("hunter"),
        },
        semantic: SemanticColors {
            success: l.at("colors.semantic.success"),
            warning: l.at("colors.semantic.warning"),
            error: l.at("colors.semantic.error"),
            info: l.at("colors.semantic.info"),
        },
        neutral: NeutralScale {
            n50: l.at("colors.neutral.50"),
            n100: l.at("colors.neutral.100"),
            n200: l.at("colors.neutral.200"),
            n300: l.at("colors.neutral.300"),
            n400: l.at("colors.neutral.400"),
            n500: l.at("colors.neutral.500"),
            n600: l.at("colors.neutral.600"),
            n700: l.at("colors.neutral.700"),
            n800: l.at("colors.neutral.800"),
            n900: l.at("colors.neutral.900"),
        },
        surface: SurfaceColors {
            background: l.modes("colors.surface.background"),
            paper: l.modes("colors.surface.paper"),
            overlay: l.modes("colors.surface.overlay"),
        },
        text: TextColors {
            primary: l.modes("colors.text.primary"),
            secondary: l.modes("colors.text.secondary"),
            disabled: l.modes("colors.text.disabled"),
        },
    }
}

fn spacing(l: &mut Lookup<'_>) -> SpacingTokens {
    SpacingTokens {
        scale: SpacingScale {
            s0: l.at("spacing.scale.0"),
            s1: l.at("spacing.scale.1"),
            s2: l.at("spacing.scale.2"),
            s3: l.at("spacing.scale.3"),
            s4: l.at("spacing.scale.4"),
            s5: l.at("spacing.scale.5"),
            s6: l.at("spacing.scale.6"),
            s8: l.at("spacing.scale.8"),
            s10: l.at("spacing.scale.10"),
            s12: l.at("spacing.scale.12"),
            s16: l.at("spacing.scale.16"),
            s20: l.at("spacing.scale.20"),
            s24: l.at("spacing.scale.24"),
            s32: l.at("spacing.scale.32"),
        },
        semantic: SemanticSpacing {
            component: ComponentSpacing {
                padding: l.sizes("spacing.semantic.component.padding"),
                margin: l.sizes("spacing.semantic.component.margin"),
            },
            layout: LayoutSpacing {
                container: l.sizes("spacing.semantic.layout.container"),
                section: l.sizes("spacing.semantic.layout.section"),
            },
            grid: GridSpacing {
                gap: l.sizes("spacing.semantic.grid.gap"),
            },
        },
    }
}

fn typography(l: &mut Lookup<'_>) -> TypographyTokens {
    TypographyTokens {
        fonts: FontFamilies {
            primary: l.at("typography.fonts.primary"),
            secondary: l.at("typography.fonts.secondary"),
            monospace: l.at("typography.fonts.monospace"),
        },
        font_weights: FontWeights {
            light: l.at("typography.fontWeights.light"),
            regular: l.at("typography.fontWeights.regular"),
            medium: l.at("typography.fontWeights.medium"),
            semi_bold: l.at("typography.fontWeights.semiBold"),
            bold: l.at("typography.fontWeights.bold"),
            extra_bold: l.at("typography.fontWeights.extraBold"),
        },
        font_sizes: FontSizes {
            xs: l.at("typography.fontSizes.xs"),
            sm: l.at("typography.fontSizes.sm"),
            base: l.at("typography.fontSizes.base"),
            lg: l.at("typography.fontSizes.lg"),
            xl: l.at("typography.fontSizes.xl"),
            xl2: l.at("typography.fontSizes.2xl"),
            xl3: l.at("typography.fontSizes.3xl"),
            xl4: l.at("typography.fontSizes.4xl"),
            xl5: l.at("typography.fontSizes.5xl"),
            xl6: l.at("typography.fontSizes.6xl"),
        },
        line_heights: LineHeights {
            tight: l.at("typography.lineHeights.tight"),
            snug: l.at("typography.lineHeights.snug"),
            normal: l.at("typography.lineHeights.normal"),
            relaxed: l.at("typography.lineHeights.relaxed"),
            loose: l.at("typography.lineHeights.loose"),
        },
        text_styles: TextStyles {
            display: l.text_style("display", true),
            h1: l.text_style("h1", true),
            h2: l.text_style("h2", false),
            h3: l.text_style("h3", false),
            h4: l.text_style("h4", false),
            body: l.text_style("body", false),
            body_large: l.text_style("bodyLarge", false),
            caption: l.text_style("caption", false),
            code: l.text_style("code", false),
        },
    }
}

fn border_radius(l: &mut Lookup<'_>) -> RadiusScale {
    RadiusScale {
        none: l.at("borderRadius.none"),
        sm: l.at("borderRadius.sm"),
        base: l.at("borderRadius.base"),
        md: l.at("borderRadius.md"),
        lg: l.at("borderRadius.lg"),
        xl: l.at("borderRadius.xl"),
        xl2: l.at("borderRadius.2xl"),
        xl3: l.at("borderRadius.3xl"),
        full: l.at("borderRadius.full"),
    }
}

fn shadows(l: &mut Lookup<'_>) -> ShadowScale {
    ShadowScale {
        none: l.at("shadows.none"),
        sm: l.at("shadows.sm"),
        base: l.at("shadows.base"),
        md: l.at("shadows.md"),
        lg: l.at("shadows.lg"),
        xl: l.at("shadows.xl"),
        xl2: l.at("shadows.2xl"),
    }
}
