//! Theme mode handling: the light/dark selection, its persistence, and
//! the mode-specific palette derived from the design tokens.

pub mod palette;
pub mod storage;
pub mod store;

pub use palette::ThemePalette;
pub use storage::{FileStorage, MemoryStorage, ThemeStorage, STORAGE_KEY};
pub use store::{Subscription, ThemeStore};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl ThemeMode {
    /// Both modes.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The persisted string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// True for [`ThemeMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Asks the OS which mode it is in.
    ///
    /// Returns `None` when the platform does not report a preference.
    #[must_use]
    pub fn detect_system() -> Option<Self> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Some(Self::Light),
            Ok(dark_light::Mode::Dark) => Some(Self::Dark),
            Ok(dark_light::Mode::Unspecified) | Err(_) => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!(
                "Invalid theme mode '{other}'. Must be 'light' or 'dark'"
            )),
        }
    }
}
