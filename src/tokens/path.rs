//! Conversions between dotted tree paths and generated token names.
//!
//! The generator names every token after its position in the source tree:
//! `colors.modules.ai.primary` is emitted as `ColorModulesAiPrimary` in the
//! JavaScript module and as `--color-modules-ai-primary` in CSS. The first
//! segment uses the generator's category name, which differs from the
//! resolved tree's group name for colors.

/// Top-level groups: (tree name, PascalCase prefix, kebab-case prefix).
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("colors", "Color", "color"),
    ("spacing", "Spacing", "spacing"),
    ("typography", "Typography", "typography"),
    ("borderRadius", "BorderRadius", "border-radius"),
    ("shadows", "Shadows", "shadows"),
];

fn category(segment: &str) -> Option<(&'static str, &'static str)> {
    CATEGORIES
        .iter()
        .find(|(name, _, _)| *name == segment)
        .map(|(_, pascal, kebab)| (*pascal, *kebab))
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn kebab(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    for (i, c) in segment.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a dotted tree path into the generated table key.
///
/// ```
/// use platform_tokens::tokens::token_key;
///
/// assert_eq!(token_key("colors.brand.primary"), "ColorBrandPrimary");
/// assert_eq!(token_key("typography.fontSizes.2xl"), "TypographyFontSizes2xl");
/// assert_eq!(token_key("spacing.scale.4"), "SpacingScale4");
/// ```
#[must_use]
pub fn token_key(path: &str) -> String {
    let mut segments = path.split('.');
    let mut key = String::new();
    if let Some(first) = segments.next() {
        match category(first) {
            Some((pascal, _)) => key.push_str(pascal),
            None => key.push_str(&capitalize(first)),
        }
    }
    for segment in segments {
        key.push_str(&capitalize(segment));
    }
    key
}

/// Converts a dotted tree path into the stylesheet variable name (without
/// the `--` or `$` sigil).
#[must_use]
pub fn css_name(path: &str) -> String {
    path.split('.')
        .enumerate()
        .map(|(i, segment)| match (i, category(segment)) {
            (0, Some((_, kebab_prefix))) => kebab_prefix.to_string(),
            _ => kebab(segment),
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_key_categories() {
        assert_eq!(token_key("colors.neutral.50"), "ColorNeutral50");
        assert_eq!(token_key("borderRadius.full"), "BorderRadiusFull");
        assert_eq!(token_key("shadows.2xl"), "Shadows2xl");
        assert_eq!(
            token_key("spacing.semantic.component.padding.sm"),
            "SpacingSemanticComponentPaddingSm"
        );
    }

    #[test]
    fn test_token_key_camel_segments() {
        assert_eq!(
            token_key("typography.textStyles.bodyLarge.fontFamily"),
            "TypographyTextStylesBodyLargeFontFamily"
        );
        assert_eq!(
            token_key("typography.fontWeights.semiBold"),
            "TypographyFontWeightsSemiBold"
        );
    }

    #[test]
    fn test_css_name() {
        assert_eq!(css_name("colors.brand.primary"), "color-brand-primary");
        assert_eq!(css_name("borderRadius.2xl"), "border-radius-2xl");
        assert_eq!(
            css_name("typography.textStyles.bodyLarge.letterSpacing"),
            "typography-text-styles-body-large-letter-spacing"
        );
        assert_eq!(css_name("spacing.scale.0"), "spacing-scale-0");
    }

    #[test]
    fn test_unknown_category_is_capitalized() {
        assert_eq!(token_key("motion.fast"), "MotionFast");
        assert_eq!(css_name("motion.fastOut"), "motion-fast-out");
    }
}
