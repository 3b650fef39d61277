//! Page configuration: DOM contract selectors and behavior constants
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 150.0;
pub const DEFAULT_NARROW_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_FEEDBACK_MS: u32 = 1200;
pub const DEFAULT_CONFIRMATION_LABEL: &str = "\u{2705} Copied!";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NotFiniteOrNegative { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` slot holding the theme preference.
    pub storage_key: String,
    /// Attribute on the root element reflecting the theme.
    pub theme_attribute: String,
    /// Lookahead subtracted from each section top before comparing with the scroll offset.
    pub scroll_threshold: f64,
    /// Viewports at or below this width skip revealing the active nav item.
    pub narrow_breakpoint: f64,
    pub feedback_ms: u32,
    pub confirmation_label: String,
    pub accent_property: String,
    pub active_class: String,
    pub collapsed_class: String,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            theme_attribute: "data-theme".to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            feedback_ms: DEFAULT_FEEDBACK_MS,
            confirmation_label: DEFAULT_CONFIRMATION_LABEL.to_string(),
            accent_property: "--accent".to_string(),
            active_class: "active".to_string(),
            collapsed_class: "collapsed".to_string(),
            selectors: Selectors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub sidebar: String,
    pub collapse_button: String,
    pub nav_items: String,
    pub sections: String,
    pub file_inputs: String,
    pub copy_button: String,
    pub text_box: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#themeToggle".to_string(),
            sidebar: ".sidebar".to_string(),
            collapse_button: "#collapseBtn".to_string(),
            nav_items: ".tool-item".to_string(),
            sections: "section".to_string(),
            file_inputs: "input[type=file]".to_string(),
            copy_button: "#copyBtn".to_string(),
            text_box: "#promptText".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or a value fails [`PageConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first field that is out of range or empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scroll_threshold", self.scroll_threshold),
            ("narrow_breakpoint", self.narrow_breakpoint),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NotFiniteOrNegative { field, value });
            }
        }
        if self.feedback_ms == 0 {
            return Err(ConfigError::Zero {
                field: "feedback_ms",
            });
        }

        let s = &self.selectors;
        let required = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("accent_property", &self.accent_property),
            ("active_class", &self.active_class),
            ("collapsed_class", &self.collapsed_class),
            ("selectors.theme_toggle", &s.theme_toggle),
            ("selectors.sidebar", &s.sidebar),
            ("selectors.collapse_button", &s.collapse_button),
            ("selectors.nav_items", &s.nav_items),
            ("selectors.sections", &s.sections),
            ("selectors.file_inputs", &s.file_inputs),
            ("selectors.copy_button", &s.copy_button),
            ("selectors.text_box", &s.text_box),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::Empty { field: *field }),
            None => Ok(()),
        }
    }

    /// Whether a viewport of `width` counts as narrow.
    #[must_use]
    pub fn is_narrow(&self, width: f64) -> bool {
        width <= self.narrow_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.storage_key, "theme");
        assert!((cfg.scroll_threshold - 150.0).abs() < f64::EPSILON);
        assert_eq!(cfg.feedback_ms, 1200);
        assert_eq!(cfg.selectors.copy_button, "#copyBtn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = PageConfig::from_json(r##"{"feedback_ms": 500, "selectors": {"sidebar": "#nav"}}"##)
            .expect("valid override");
        assert_eq!(cfg.feedback_ms, 500);
        assert_eq!(cfg.selectors.sidebar, "#nav");
        assert_eq!(cfg.selectors.text_box, "#promptText");
        assert_eq!(cfg.active_class, "active");
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = PageConfig::from_json(r#"{"scroll_threshold": -1}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotFiniteOrNegative {
                field: "scroll_threshold",
                ..
            }
        ));
        let err = PageConfig::from_json(r#"{"feedback_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { .. }));
        let err = PageConfig::from_json(r#"{"selectors": {"copy_button": " "}}"#).unwrap_err();
        assert_eq!(err.to_string(), "selectors.copy_button must not be empty");
        assert!(matches!(
            PageConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let cfg = PageConfig::default();
        assert!(cfg.is_narrow(768.0));
        assert!(!cfg.is_narrow(769.0));
    }
}
