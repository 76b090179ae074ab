//! Component style composition.
//!
//! Each component style is built from layers applied in a fixed order
//! (base, variant, size, state). A later layer overwrites keys set by an
//! earlier one. Every option is an enum with an `ALL` table, so the full set
//! of combinations can be enumerated and checked.

/// Declares a unit enum with `ALL`, `as_str`, `Display` and `FromStr`.
macro_rules! style_option {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every option, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Lowercase name used on the command line.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == wanted)
                    .ok_or_else(|| {
                        let names: Vec<&str> = Self::ALL.iter().map(|o| o.as_str()).collect();
                        format!(
                            "unknown {} '{}' (expected one of: {})",
                            stringify!($name),
                            s,
                            names.join(", ")
                        )
                    })
            }
        }
    };
}

mod badge;
mod button;

use std::collections::BTreeMap;

use serde::Serialize;

pub use badge::{badge_style, BadgeOptions, BadgeSize, BadgeVariant};
pub use button::{button_style, ButtonSize, ButtonState, ButtonVariant};

/// Plain white used for text on filled components.
pub(crate) const WHITE: &str = "#ffffff";

/// A fully composed style: CSS-in-JS property names (camelCase) to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleRecord {
    /// Properties of the resting state.
    pub base: BTreeMap<String, String>,
    /// Overrides applied on hover.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub hover: BTreeMap<String, String>,
    /// Overrides applied while pressed.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub active: BTreeMap<String, String>,
}

impl StyleRecord {
    /// Value of a resting-state property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.base.get(property).map(String::as_str)
    }

    /// Value of a hover property.
    #[must_use]
    pub fn hover_get(&self, property: &str) -> Option<&str> {
        self.hover.get(property).map(String::as_str)
    }

    /// Value of a pressed-state property.
    #[must_use]
    pub fn active_get(&self, property: &str) -> Option<&str> {
        self.active.get(property).map(String::as_str)
    }

    pub(crate) fn set(&mut self, property: &str, value: impl Into<String>) {
        self.base.insert(property.to_string(), value.into());
    }

    pub(crate) fn set_hover(&mut self, property: &str, value: impl Into<String>) {
        self.hover.insert(property.to_string(), value.into());
    }

    pub(crate) fn set_active(&mut self, property: &str, value: impl Into<String>) {
        self.active.insert(property.to_string(), value.into());
    }

    /// Renders the resting state as CSS declarations, one per line.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (property, value) in &self.base {
            out.push_str(&format!("{}: {value};\n", kebab_case(property)));
        }
        push_block(&mut out, "&:hover", &self.hover);
        push_block(&mut out, "&:active", &self.active);
        out
    }
}

fn push_block(out: &mut String, selector: &str, declarations: &BTreeMap<String, String>) {
    if declarations.is_empty() {
        return;
    }
    out.push_str(selector);
    out.push_str(" {\n");
    for (property, value) in declarations {
        out.push_str(&format!("  {}: {value};\n", kebab_case(property)));
    }
    out.push_str("}\n");
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
