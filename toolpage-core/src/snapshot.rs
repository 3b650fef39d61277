//! Observable page state
use serde::{Deserialize, Serialize};

/// What a user can see on the page right now.
///
/// The web test bridge fills this from the live DOM and the headless runner
/// from [`crate::PageState`], so both can be checked against the same
/// expectations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub theme: Option<String>,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub active_section: Option<String>,
    #[serde(default)]
    pub active_nav: Vec<usize>,
    #[serde(default)]
    pub copy_label: Option<String>,
    #[serde(default)]
    pub visible_previews: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_camel_case_keys_for_the_bridge() {
        let snapshot = PageSnapshot {
            theme: Some("dark".into()),
            active_nav: vec![1],
            ..PageSnapshot::default()
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["activeNav"], serde_json::json!([1]));
        assert_eq!(json["sidebarCollapsed"], serde_json::json!(false));
        let parsed: PageSnapshot =
            serde_json::from_str(r#"{"theme":"light","activeSection":"style"}"#).unwrap();
        assert_eq!(parsed.active_section.as_deref(), Some("style"));
        assert!(parsed.visible_previews.is_empty());
    }
}
