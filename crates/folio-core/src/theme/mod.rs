//! Theme system for the portfolio.
//!
//! Four fixed palettes: Default (near-black), Light, Olive and Velvet.

pub mod palette;
pub mod store;
pub mod style;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use palette::Palette;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Light,
    Olive,
    Velvet,
}

impl ThemeName {
    /// Persisted / attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Light => "light",
            ThemeName::Olive => "olive",
            ThemeName::Velvet => "velvet",
        }
    }

    /// Capitalized name shown in the toggler tooltip.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Light => "Light",
            ThemeName::Olive => "Olive",
            ThemeName::Velvet => "Velvet",
        }
    }

    /// Body marker class, e.g. `theme-olive`.
    pub fn css_class(&self) -> &'static str {
        match self {
            ThemeName::Default => "theme-default",
            ThemeName::Light => "theme-light",
            ThemeName::Olive => "theme-olive",
            ThemeName::Velvet => "theme-velvet",
        }
    }

    /// All themes in swatch order.
    pub fn all() -> &'static [ThemeName] {
        &[
            ThemeName::Default,
            ThemeName::Light,
            ThemeName::Olive,
            ThemeName::Velvet,
        ]
    }

    /// Parse a name, falling back to [`ThemeName::Default`] on anything unknown.
    pub fn resolve(value: &str) -> ThemeName {
        value.parse().unwrap_or_default()
    }

    /// Whether text on this palette should be dark.
    pub fn is_light(&self) -> bool {
        matches!(self, ThemeName::Light)
    }

    /// The static palette for this theme.
    pub fn palette(&self) -> &'static Palette {
        Palette::for_theme(*self)
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
