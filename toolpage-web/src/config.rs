//! Inline configuration override
use toolpage_core::PageConfig;
use web_sys::Document;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "toolpage-config";

/// Read the page configuration, falling back to defaults when the override
/// is absent or invalid.
#[must_use]
pub fn read_page_config(document: &Document) -> PageConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    parse_override(raw.as_deref())
}

/// Parse override text; blank or invalid input yields the defaults.
#[must_use]
pub fn parse_override(raw: Option<&str>) -> PageConfig {
    let Some(raw) = raw.filter(|text| !text.trim().is_empty()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_invalid_override_uses_defaults() {
        assert_eq!(parse_override(None), PageConfig::default());
        assert_eq!(parse_override(Some("  \n")), PageConfig::default());
        assert_eq!(parse_override(Some("{oops")), PageConfig::default());
        assert_eq!(
            parse_override(Some(r#"{"feedback_ms": 0}"#)),
            PageConfig::default()
        );
    }

    #[test]
    fn valid_override_is_applied() {
        let cfg = parse_override(Some(r#"{"scroll_threshold": 90, "active_class": "is-active"}"#));
        assert!((cfg.scroll_threshold - 90.0).abs() < f64::EPSILON);
        assert_eq!(cfg.active_class, "is-active");
    }
}
