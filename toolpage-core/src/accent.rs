use serde::{Deserialize, Serialize};

/// Value last written to the shared accent variable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccentState {
    pub current: Option<String>,
}

impl AccentState {
    /// Record a hover over an item carrying `accent`; items without one leave the variable alone.
    pub fn hover(&mut self, accent: Option<&str>) -> Option<String> {
        let value = accent?.to_string();
        self.current = Some(value.clone());
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_hovered_wins_and_blank_items_are_ignored() {
        let mut accent = AccentState::default();
        assert_eq!(accent.hover(Some("#ff7a00")).as_deref(), Some("#ff7a00"));
        assert_eq!(accent.hover(Some("#00d9c0")).as_deref(), Some("#00d9c0"));
        assert!(accent.hover(None).is_none());
        assert_eq!(accent.current.as_deref(), Some("#00d9c0"));
    }
}
