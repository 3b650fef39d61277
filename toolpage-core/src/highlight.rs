//! Scroll-linked navigation highlight
//!
//! On every scroll the current section is recomputed from the section tops and
//! the navigation items are re-marked so that only the items pointing at it
//! carry the active class.
use serde::{Deserialize, Serialize};

use crate::nav::NavItem;

/// A content section as measured at scroll time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: Some(id.into()),
            top,
        }
    }
}

/// Find the current section: the last one in document order whose top,
/// minus the lookahead `threshold`, is at or above `scroll_y`.
///
/// A qualifying section without an id clears the result.
#[must_use]
pub fn current_section(sections: &[SectionBounds], scroll_y: f64, threshold: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - threshold {
            current = section.id.as_deref();
        }
    }
    current
}

/// What the adapter should do to the navigation after one scroll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightPlan {
    pub active_section: Option<String>,
    /// Active flag for every nav item, by index.
    pub marks: Vec<bool>,
    /// Items to scroll into view inside the sidebar.
    pub reveal: Vec<usize>,
}

impl HighlightPlan {
    #[must_use]
    pub fn active_indices(&self) -> Vec<usize> {
        self.marks
            .iter()
            .enumerate()
            .filter_map(|(idx, active)| active.then_some(idx))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightState {
    /// `None` until the first scroll, or when no section qualifies.
    pub active_section: Option<String>,
}

impl HighlightState {
    pub fn on_scroll(
        &mut self,
        nav_items: &[NavItem],
        sections: &[SectionBounds],
        scroll_y: f64,
        threshold: f64,
        narrow: bool,
    ) -> HighlightPlan {
        let active = current_section(sections, scroll_y, threshold).map(str::to_string);
        let marks: Vec<bool> = nav_items
            .iter()
            .map(|item| active.as_deref().is_some_and(|id| item.targets(id)))
            .collect();
        let reveal = if narrow {
            Vec::new()
        } else {
            marks
                .iter()
                .enumerate()
                .filter_map(|(idx, active)| active.then_some(idx))
                .collect()
        };
        self.active_section.clone_from(&active);
        HighlightPlan {
            active_section: active,
            marks,
            reveal,
        }
    }
}
