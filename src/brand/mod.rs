//! Brand identity presets.
//!
//! Presets are purely descriptive records (values, voice, visual guidelines,
//! module descriptions) embedded from `data/brands.yaml`. Colour and font
//! fields may reference design tokens as `{colors.brand.primary}`; those are
//! resolved once when the registry is loaded.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tokens::{DesignTokens, TokenError};

const BRANDS_YAML: &str = include_str!("../data/brands.yaml");

const TOKEN_REF_PATTERN: &str = r"^\{([A-Za-z0-9_.]+)\}$";

/// Tone-of-voice guidance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voice {
    /// Qualities the copy should have.
    pub characteristics: Vec<String>,
    /// Things the copy should steer clear of.
    pub avoid: Vec<String>,
}

/// A logo symbol and how to use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoMark {
    /// Symbol (emoji) used as the mark.
    pub symbol: String,
    /// What the symbol represents.
    pub description: String,
    /// Where the mark is used.
    pub usage: String,
}

/// Primary logo plus optional per-module marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    /// Main brand mark.
    pub primary: LogoMark,
    /// Marks for individual product modules.
    pub modules: BTreeMap<String, LogoMark>,
}

/// Guidance for one brand colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorGuide {
    /// Colour value, resolved from a token reference when one was given.
    pub color: String,
    /// Marketing name of the colour.
    pub name: String,
    /// What the colour conveys.
    pub description: String,
    /// Where the colour is used.
    pub usage: String,
    /// Contrast notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,
}

/// Guidance for a product module's colour pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleColorGuide {
    /// Main module colour.
    pub primary: String,
    /// Module gradient.
    pub gradient: String,
    /// Marketing name.
    pub name: String,
    /// What the colour conveys.
    pub description: String,
    /// Personality keywords.
    pub personality: String,
}

/// Guidance for one font family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontGuide {
    /// Font stack, resolved from a token reference when one was given.
    pub family: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// What the font is for.
    pub description: String,
    /// Where the font is used.
    pub usage: String,
    /// Qualities of the face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<String>,
}

/// Visual guidelines of a preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visual {
    /// Logo marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Brand colours by role (`primary`, `secondary`, `accent`).
    pub colors: BTreeMap<String, ColorGuide>,
    /// Colours of the product modules.
    pub module_colors: BTreeMap<String, ModuleColorGuide>,
    /// Font guidance by role (`primary`, `secondary`, `monospace`).
    pub typography: BTreeMap<String, FontGuide>,
}

/// Description of one product module under a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleBrand {
    /// Short name.
    pub name: String,
    /// Expanded name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// One-line tagline.
    pub tagline: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Personality keywords.
    pub personality: String,
    /// Suggested imagery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagery: Option<String>,
    /// Typical applications.
    pub applications: Vec<String>,
}

/// A complete brand identity preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandPreset {
    /// Lookup key (`"platform"`, `"ecommerce"`, ...).
    pub key: String,
    /// Display name.
    pub name: String,
    /// Icon shown next to the name.
    #[serde(default)]
    pub icon: String,
    /// Core values.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    /// Personality traits.
    #[serde(default)]
    pub personality: BTreeMap<String, String>,
    /// Tone of voice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    /// Visual guidelines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<Visual>,
    /// Product modules.
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleBrand>,
}

impl BrandPreset {
    /// Summary line for listings.
    #[must_use]
    pub fn summary(&self) -> PresetSummary {
        PresetSummary {
            key: self.key.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
        }
    }

    /// The resolved colour for a role such as `"primary"`, if the preset defines one.
    #[must_use]
    pub fn color(&self, role: &str) -> Option<&str> {
        self.visual
            .as_ref()?
            .colors
            .get(role)
            .map(|guide| guide.color.as_str())
    }

    fn resolve_references(
        &mut self,
        pattern: &Regex,
        tokens: &DesignTokens,
    ) -> Result<(), TokenError> {
        let key = self.key.clone();
        let Some(visual) = self.visual.as_mut() else {
            return Ok(());
        };
        for guide in visual.colors.values_mut() {
            resolve_reference(pattern, &key, &mut guide.color, tokens)?;
        }
        for guide in visual.module_colors.values_mut() {
            resolve_reference(pattern, &key, &mut guide.primary, tokens)?;
            resolve_reference(pattern, &key, &mut guide.gradient, tokens)?;
        }
        for guide in visual.typography.values_mut() {
            resolve_reference(pattern, &key, &mut guide.family, tokens)?;
        }
        Ok(())
    }
}

/// Key, name and icon of a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    /// Lookup key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Icon.
    pub icon: String,
}

#[derive(Debug, Deserialize)]
struct BrandDocument {
    default: String,
    presets: Vec<BrandPreset>,
}

/// All shipped presets with a designated default.
#[derive(Debug, Clone)]
pub struct BrandRegistry {
    presets: Vec<BrandPreset>,
    default_index: usize,
}

impl BrandRegistry {
    /// Loads the embedded presets and resolves their token references.
    ///
    /// # Errors
    /// Returns [`TokenError::Parse`] if the embedded document is malformed and
    /// [`TokenError::UnknownReference`] if a preset names a token path that
    /// does not exist.
    pub fn load(tokens: &DesignTokens) -> Result<Self, TokenError> {
        Self::from_yaml_str(BRANDS_YAML, tokens)
    }

    /// Parses a preset document in the embedded format.
    ///
    /// # Errors
    /// Same as [`BrandRegistry::load`]; also rejects duplicate keys and a
    /// default that names no preset.
    pub fn from_yaml_str(source: &str, tokens: &DesignTokens) -> Result<Self, TokenError> {
        let document: BrandDocument = serde_yml::from_str(source)
            .map_err(|e| TokenError::Parse(format!("brand presets: {e}")))?;

        let mut presets = document.presets;
        for (i, preset) in presets.iter().enumerate() {
            if presets[..i].iter().any(|p| p.key == preset.key) {
                return Err(TokenError::Parse(format!(
                    "brand presets: duplicate key '{}'",
                    preset.key
                )));
            }
        }
        let default_index = presets
            .iter()
            .position(|p| p.key == document.default)
            .ok_or_else(|| {
                TokenError::Parse(format!(
                    "brand presets: default '{}' is not a preset",
                    document.default
                ))
            })?;

        let pattern =
            Regex::new(TOKEN_REF_PATTERN).map_err(|e| TokenError::Parse(e.to_string()))?;
        for preset in &mut presets {
            preset.resolve_references(&pattern, tokens)?;
        }

        debug!(count = presets.len(), default = %document.default, "Loaded brand presets");
        Ok(Self {
            presets,
            default_index,
        })
    }

    /// The designated default preset.
    #[must_use]
    pub fn default_preset(&self) -> &BrandPreset {
        &self.presets[self.default_index]
    }

    /// Looks up a preset by key, falling back to the default for unknown keys.
    #[must_use]
    pub fn get_preset(&self, key: &str) -> &BrandPreset {
        self.find(key).unwrap_or_else(|| {
            debug!(key, "Unknown brand preset, using default");
            self.default_preset()
        })
    }

    /// Exact lookup without fallback.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&BrandPreset> {
        self.presets.iter().find(|p| p.key == key)
    }

    /// Key, name and icon of every preset in document order.
    #[must_use]
    pub fn available(&self) -> Vec<PresetSummary> {
        self.presets.iter().map(BrandPreset::summary).collect()
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the registry is empty. Never true for a loaded registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn resolve_reference(
    pattern: &Regex,
    preset: &str,
    value: &mut String,
    tokens: &DesignTokens,
) -> Result<(), TokenError> {
    let Some(captures) = pattern.captures(value.trim()) else {
        return Ok(());
    };
    let path = captures[1].to_string();
    match tokens.get(&path) {
        Some(resolved) => {
            *value = resolved;
            Ok(())
        }
        None => Err(TokenError::UnknownReference {
            preset: preset.to_string(),
            path,
        }),
    }
}
