use super::{StyleRecord, WHITE};
use crate::tokens::DesignTokens;

style_option! {
    /// Button colour scheme.
    ButtonVariant {
        /// Filled brand primary.
        Primary => "primary",
        /// Outlined brand primary.
        Secondary => "secondary",
        /// Filled brand accent.
        Accent => "accent",
        /// Filled success colour.
        Success => "success",
        /// Filled warning colour.
        Warning => "warning",
        /// Filled error colour.
        Error => "error",
        /// Transparent with body text colour.
        Ghost => "ghost",
    }
}

style_option! {
    /// Button size.
    ButtonSize {
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

/// Interaction state flags of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// The button ignores input and is dimmed.
    pub disabled: bool,
    /// An action is in flight; input is ignored.
    pub loading: bool,
    /// Stretch to the container width.
    pub full_width: bool,
}

impl ButtonState {
    /// Every combination of the three flags.
    #[must_use]
    pub fn all() -> Vec<Self> {
        (0u8..8)
            .map(|bits| Self {
                disabled: bits & 1 != 0,
                loading: bits & 2 != 0,
                full_width: bits & 4 != 0,
            })
            .collect()
    }
}

/// Composes the style of a button.
#[must_use]
pub fn button_style(
    tokens: &DesignTokens,
    variant: ButtonVariant,
    size: ButtonSize,
    state: ButtonState,
) -> StyleRecord {
    let mut style = StyleRecord::default();
    base_layer(&mut style, tokens);
    variant_layer(&mut style, tokens, variant);
    size_layer(&mut style, tokens, size);
    state_layer(&mut style, state);
    style
}

fn base_layer(style: &mut StyleRecord, tokens: &DesignTokens) {
    let typography = &tokens.typography;
    style.set("display", "inline-flex");
    style.set("alignItems", "center");
    style.set("justifyContent", "center");
    style.set("border", "none");
    style.set("borderRadius", &tokens.border_radius.md);
    style.set("fontFamily", &typography.fonts.primary);
    style.set("fontWeight", &typography.font_weights.medium);
    style.set("textDecoration", "none");
    style.set("transition", "all 0.2s ease-in-out");
    style.set("outline", "none");
    style.set("position", "relative");
    style.set("overflow", "hidden");
    style.set("whiteSpace", "nowrap");
    style.set("userSelect", "none");
}

fn variant_layer(style: &mut StyleRecord, tokens: &DesignTokens, variant: ButtonVariant) {
    let colors = &tokens.colors;
    match variant {
        ButtonVariant::Primary => {
            style.set("backgroundColor", &colors.brand.primary);
            style.set("color", WHITE);
            style.set_hover("backgroundColor", &colors.modules.ai.dark);
            style.set_hover("transform", "translateY(-1px)");
            style.set_hover("boxShadow", &tokens.shadows.md);
            style.set_active("transform", "translateY(0)");
        }
        ButtonVariant::Secondary => {
            style.set("backgroundColor", "transparent");
            style.set("color", &colors.brand.primary);
            style.set("border", format!("1px solid {}", colors.brand.primary));
            style.set_hover("backgroundColor", &colors.brand.primary);
            style.set_hover("color", WHITE);
        }
        ButtonVariant::Accent => {
            style.set("backgroundColor", &colors.brand.accent);
            style.set("color", WHITE);
            style.set_hover("backgroundColor", &colors.modules.hunter.dark);
            style.set_hover("transform", "translateY(-1px)");
            style.set_hover("boxShadow", &tokens.shadows.md);
        }
        ButtonVariant::Success => {
            style.set("backgroundColor", &colors.semantic.success);
            style.set("color", WHITE);
            style.set_hover("backgroundColor", "#45a049");
        }
        ButtonVariant::Warning => {
            style.set("backgroundColor", &colors.semantic.warning);
            style.set("color", WHITE);
            style.set_hover("backgroundColor", "#e68900");
        }
        ButtonVariant::Error => {
            style.set("backgroundColor", &colors.semantic.error);
            style.set("color", WHITE);
            style.set_hover("backgroundColor", "#d32f2f");
        }
        ButtonVariant::Ghost => {
            style.set("backgroundColor", "transparent");
            style.set("color", &colors.text.primary.light);
            style.set_hover("backgroundColor", &colors.neutral.n100);
        }
    }
}

fn size_layer(style: &mut StyleRecord, tokens: &DesignTokens, size: ButtonSize) {
    let sizes = &tokens.typography.font_sizes;
    let scale = &tokens.spacing.scale;
    let (font_size, vertical, horizontal, min_height) = match size {
        ButtonSize::Sm => (&sizes.sm, &scale.s2, &scale.s3, "32px"),
        ButtonSize::Md => (&sizes.base, &scale.s3, &scale.s4, "40px"),
        ButtonSize::Lg => (&sizes.lg, &scale.s4, &scale.s6, "48px"),
    };
    style.set("fontSize", font_size);
    style.set("padding", format!("{vertical} {horizontal}"));
    style.set("minHeight", min_height);
}

fn state_layer(style: &mut StyleRecord, state: ButtonState) {
    let blocked = state.disabled || state.loading;
    style.set("cursor", if blocked { "not-allowed" } else { "pointer" });
    style.set("opacity", if state.disabled { "0.6" } else { "1" });
    style.set("width", if state.full_width { "100%" } else { "auto" });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> DesignTokens {
        DesignTokens::builtin().expect("builtin tokens resolve")
    }

    #[test]
    fn test_primary_md_defaults() {
        let tokens = tokens();
        let style = button_style(
            &tokens,
            ButtonVariant::default(),
            ButtonSize::default(),
            ButtonState::default(),
        );
        assert_eq!(style.get("backgroundColor"), Some("#1976d2"));
        assert_eq!(style.get("color"), Some("#ffffff"));
        assert_eq!(style.get("fontSize"), Some("1rem"));
        assert_eq!(style.get("padding"), Some("12px 16px"));
        assert_eq!(style.get("minHeight"), Some("40px"));
        assert_eq!(style.get("borderRadius"), Some("6px"));
        assert_eq!(style.get("cursor"), Some("pointer"));
        assert_eq!(style.get("opacity"), Some("1"));
        assert_eq!(style.get("width"), Some("auto"));
        assert_eq!(style.hover_get("backgroundColor"), Some("#1565c0"));
        assert_eq!(style.hover_get("boxShadow"), Some(tokens.shadows.md.as_str()));
    }

    #[test]
    fn test_disabled_and_loading() {
        let tokens = tokens();
        let disabled = button_style(
            &tokens,
            ButtonVariant::Primary,
            ButtonSize::Md,
            ButtonState { disabled: true, ..ButtonState::default() },
        );
        assert_eq!(disabled.get("cursor"), Some("not-allowed"));
        assert_eq!(disabled.get("opacity"), Some("0.6"));

        let loading = button_style(
            &tokens,
            ButtonVariant::Primary,
            ButtonSize::Md,
            ButtonState { loading: true, ..ButtonState::default() },
        );
        assert_eq!(loading.get("cursor"), Some("not-allowed"));
        assert_eq!(loading.get("opacity"), Some("1"));
    }

    #[test]
    fn test_secondary_border_overrides_base() {
        let tokens = tokens();
        let style = button_style(
            &tokens,
            ButtonVariant::Secondary,
            ButtonSize::Sm,
            ButtonState::default(),
        );
        assert_eq!(style.get("border"), Some("1px solid #1976d2"));
        assert_eq!(style.get("backgroundColor"), Some("transparent"));
        assert_eq!(style.get("padding"), Some("8px 12px"));
        assert_eq!(style.get("minHeight"), Some("32px"));
    }

    #[test]
    fn test_full_width_large_ghost() {
        let tokens = tokens();
        let style = button_style(
            &tokens,
            ButtonVariant::Ghost,
            ButtonSize::Lg,
            ButtonState { full_width: true, ..ButtonState::default() },
        );
        assert_eq!(style.get("width"), Some("100%"));
        assert_eq!(style.get("padding"), Some("16px 24px"));
        assert_eq!(style.get("color"), Some("#333333"));
        assert_eq!(style.hover_get("backgroundColor"), Some("#f5f5f5"));
    }

    #[test]
    fn test_every_combination_is_complete() {
        let tokens = tokens();
        let required = [
            "backgroundColor",
            "color",
            "fontSize",
            "padding",
            "minHeight",
            "cursor",
            "opacity",
            "width",
            "borderRadius",
            "fontFamily",
            "fontWeight",
        ];
        let mut count = 0;
        for &variant in ButtonVariant::ALL {
            for &size in ButtonSize::ALL {
                for state in ButtonState::all() {
                    let style = button_style(&tokens, variant, size, state);
                    for key in required {
                        let value = style.get(key).unwrap_or_default();
                        assert!(!value.is_empty(), "{variant}/{size}/{state:?} lacks {key}");
                    }
                    assert!(!style.hover.is_empty());
                    count += 1;
                }
            }
        }
        assert_eq!(count, 7 * 3 * 8);
    }

    #[test]
    fn test_only_primary_has_pressed_layer() {
        let tokens = tokens();
        for &variant in ButtonVariant::ALL {
            let style = button_style(&tokens, variant, ButtonSize::Md, ButtonState::default());
            if variant == ButtonVariant::Primary {
                assert_eq!(style.active_get("transform"), Some("translateY(0)"));
                assert!(style.to_css().ends_with("&:active {\n  transform: translateY(0);\n}\n"));
            } else {
                assert!(style.active.is_empty(), "{variant} has a pressed layer");
            }
        }
    }

    #[test]
    fn test_parse_options() {
        assert_eq!("ghost".parse::<ButtonVariant>(), Ok(ButtonVariant::Ghost));
        assert_eq!(" LG ".parse::<ButtonSize>(), Ok(ButtonSize::Lg));
        assert!("huge".parse::<ButtonSize>().is_err());
    }
}
