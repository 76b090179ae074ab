use super::{StyleRecord, WHITE};
use crate::tokens::DesignTokens;

style_option! {
    /// Badge colour scheme.
    BadgeVariant {
        /// Neutral grey.
        Default => "default",
        /// Brand primary.
        Primary => "primary",
        /// Brand secondary.
        Secondary => "secondary",
        /// Brand accent.
        Accent => "accent",
        /// Success colour.
        Success => "success",
        /// Warning colour.
        Warning => "warning",
        /// Error colour.
        Error => "error",
        /// Info colour.
        Info => "info",
    }
}

style_option! {
    /// Badge size.
    BadgeSize {
        /// Extra small.
        Xs => "xs",
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
    }
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl Default for BadgeSize {
    fn default() -> Self {
        Self::Md
    }
}

/// Shape options of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeOptions {
    /// Transparent fill with coloured text and border.
    pub outline: bool,
    /// Pill shape; square corners otherwise.
    pub rounded: bool,
    /// Render as a small coloured dot without content.
    pub dot: bool,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            outline: false,
            rounded: true,
            dot: false,
        }
    }
}

impl BadgeOptions {
    /// Every combination of the option flags.
    #[must_use]
    pub fn all() -> Vec<Self> {
        (0u8..8)
            .map(|bits| Self {
                outline: bits & 1 != 0,
                rounded: bits & 2 != 0,
                dot: bits & 4 != 0,
            })
            .collect()
    }
}

/// Composes the style of a badge.
#[must_use]
pub fn badge_style(
    tokens: &DesignTokens,
    variant: BadgeVariant,
    size: BadgeSize,
    options: BadgeOptions,
) -> StyleRecord {
    let mut style = StyleRecord::default();

    style.set("display", "inline-flex");
    style.set("alignItems", "center");
    style.set("justifyContent", "center");
    style.set("fontFamily", &tokens.typography.fonts.primary);
    style.set("fontWeight", &tokens.typography.font_weights.medium);
    style.set("textAlign", "center");
    style.set("whiteSpace", "nowrap");
    style.set("verticalAlign", "middle");
    style.set("userSelect", "none");
    style.set("border", "none");
    style.set("textDecoration", "none");

    variant_layer(&mut style, tokens, variant, options.outline);
    size_layer(&mut style, tokens, size);

    let radius = if options.rounded {
        &tokens.border_radius.full
    } else {
        &tokens.border_radius.sm
    };
    style.set("borderRadius", radius);

    if options.dot {
        let diameter = match size {
            BadgeSize::Xs => "8px",
            BadgeSize::Sm => "10px",
            BadgeSize::Md => "12px",
            BadgeSize::Lg => "14px",
        };
        style.set("width", diameter);
        style.set("height", diameter);
        style.set("padding", "0");
        style.set("minHeight", "auto");
        style.set("borderRadius", "50%");
    }

    style
}

fn variant_layer(
    style: &mut StyleRecord,
    tokens: &DesignTokens,
    variant: BadgeVariant,
    outline: bool,
) {
    let colors = &tokens.colors;
    if variant == BadgeVariant::Default {
        style.set("backgroundColor", &colors.neutral.n100);
        style.set("color", &colors.text.primary.light);
        if outline {
            style.set("backgroundColor", "transparent");
            style.set("border", format!("1px solid {}", colors.neutral.n300));
        }
        return;
    }

    let fill = match variant {
        BadgeVariant::Primary => &colors.brand.primary,
        BadgeVariant::Secondary => &colors.brand.secondary,
        BadgeVariant::Accent => &colors.brand.accent,
        BadgeVariant::Success => &colors.semantic.success,
        BadgeVariant::Warning => &colors.semantic.warning,
        BadgeVariant::Error => &colors.semantic.error,
        BadgeVariant::Info | BadgeVariant::Default => &colors.semantic.info,
    };
    if outline {
        style.set("backgroundColor", "transparent");
        style.set("color", fill);
        style.set("border", format!("1px solid {fill}"));
    } else {
        style.set("backgroundColor", fill);
        style.set("color", WHITE);
    }
}

fn size_layer(style: &mut StyleRecord, tokens: &DesignTokens, size: BadgeSize) {
    let sizes = &tokens.typography.font_sizes;
    let scale = &tokens.spacing.scale;
    let (font_size, vertical, horizontal, min_height, line_height) = match size {
        BadgeSize::Xs => (&sizes.xs, &scale.s1, &scale.s2, "16px", "1"),
        BadgeSize::Sm => (&sizes.xs, &scale.s1, &scale.s2, "20px", "1.2"),
        BadgeSize::Md => (&sizes.sm, &scale.s1, &scale.s3, "24px", "1.2"),
        BadgeSize::Lg => (&sizes.base, &scale.s2, &scale.s3, "28px", "1.2"),
    };
    style.set("fontSize", font_size);
    style.set("padding", format!("{vertical} {horizontal}"));
    style.set("minHeight", min_height);
    style.set("lineHeight", line_height);
}
