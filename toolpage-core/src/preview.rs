//! Inline image preview for file inputs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Object URLs currently displayed, keyed by preview image id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreviewState {
    shown: BTreeMap<String, String>,
}

impl PreviewState {
    /// Whether a selection should produce a preview at all.
    #[must_use]
    pub const fn wants_preview(file_count: u32) -> bool {
        file_count > 0
    }

    /// Record `url` as displayed in `preview_id`, returning the URL it replaced.
    pub fn shown(&mut self, preview_id: &str, url: &str) -> Option<String> {
        let previous = self.shown.insert(preview_id.to_string(), url.to_string());
        previous.filter(|old| old != url)
    }

    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.shown.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacing_a_preview_returns_the_stale_url() {
        let mut state = PreviewState::default();
        assert!(state.shown("face-preview", "blob:a").is_none());
        assert_eq!(state.shown("face-preview", "blob:b").as_deref(), Some("blob:a"));
        assert!(state.shown("face-preview", "blob:b").is_none());
        assert!(state.shown("hair-preview", "blob:c").is_none());
        assert_eq!(state.visible().collect::<Vec<_>>(), vec!["face-preview", "hair-preview"]);
    }

    #[test]
    fn empty_selection_wants_no_preview() {
        assert!(!PreviewState::wants_preview(0));
        assert!(PreviewState::wants_preview(1));
    }
}
