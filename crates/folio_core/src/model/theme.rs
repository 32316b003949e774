//! Light/dark theme preference.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Applied color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Stored value for the light theme.
pub const THEME_LIGHT: &str = "light";
/// Stored value for the dark theme.
pub const THEME_DARK: &str = "dark";

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => THEME_LIGHT,
            Self::Dark => THEME_DARK,
        }
    }

    /// The other mode of the two-state flip.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Mode implied by the host's color-scheme preference.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Parses a stored theme string.
pub fn parse_theme_mode(value: &str) -> Result<ThemeMode, ThemeParseError> {
    match value.trim() {
        THEME_LIGHT => Ok(ThemeMode::Light),
        THEME_DARK => Ok(ThemeMode::Dark),
        other => Err(ThemeParseError(other.to_string())),
    }
}

/// Stored theme value is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParseError(pub String);

impl Display for ThemeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported theme value `{}`", self.0)
    }
}

impl Error for ThemeParseError {}
