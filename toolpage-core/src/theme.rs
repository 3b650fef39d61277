//! Light/dark theme preference
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Outcome of reading the persisted preference at page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredTheme {
    /// A valid value was found in the slot.
    Found(Theme),
    /// The slot was empty.
    Missing,
    /// The slot held something other than `light` or `dark`.
    Unrecognized(String),
}

impl StoredTheme {
    #[must_use]
    pub fn from_slot(value: Option<&str>) -> Self {
        match value {
            None => Self::Missing,
            Some(raw) => raw
                .parse()
                .map_or_else(|ThemeParseError(bad)| Self::Unrecognized(bad), Self::Found),
        }
    }

    /// Theme to apply: the stored one, or light otherwise.
    #[must_use]
    pub fn resolve(&self) -> Theme {
        match self {
            Self::Found(theme) => *theme,
            Self::Missing | Self::Unrecognized(_) => Theme::default(),
        }
    }
}

/// Read the preference slot through a [`PreferenceStore`].
///
/// # Errors
///
/// Returns the store's error when the slot cannot be read.
pub fn read_stored_theme<S>(store: &S, key: &str) -> Result<StoredTheme, S::Error>
where
    S: PreferenceStore + ?Sized,
{
    let raw = store.load(key)?;
    Ok(StoredTheme::from_slot(raw.as_deref()))
}

/// Document-level theme as last applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub current: Theme,
}

impl ThemeState {
    #[must_use]
    pub const fn new(current: Theme) -> Self {
        Self { current }
    }

    /// Flip the theme and return the value to apply and persist.
    pub const fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn parses_known_values_and_rejects_others() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err, ThemeParseError("sepia".into()));
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn stored_theme_defaults_to_light() {
        assert_eq!(StoredTheme::from_slot(None).resolve(), Theme::Light);
        let odd = StoredTheme::from_slot(Some("blue"));
        assert_eq!(odd, StoredTheme::Unrecognized("blue".into()));
        assert_eq!(odd.resolve(), Theme::Light);
        assert_eq!(StoredTheme::from_slot(Some("dark")).resolve(), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_reports_next_value() {
        let mut state = ThemeState::default();
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.current, Theme::Light);
    }

    #[test]
    fn reads_slot_from_store() {
        let store = MemoryStore::default();
        assert_eq!(read_stored_theme(&store, "theme"), Ok(StoredTheme::Missing));
        store.save("theme", "dark").unwrap();
        assert_eq!(
            read_stored_theme(&store, "theme"),
            Ok(StoredTheme::Found(Theme::Dark))
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
