//! Navigation items discovered on the page
use serde::{Deserialize, Serialize};

/// One `.tool-item` entry: the section it points at and its accent color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

impl NavItem {
    #[must_use]
    pub fn new(section: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            accent: Some(accent.into()),
        }
    }

    #[must_use]
    pub fn targets(&self, section: &str) -> bool {
        self.section.as_deref() == Some(section)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
}

impl PageLayout {
    #[must_use]
    pub const fn new(nav_items: Vec<NavItem>) -> Self {
        Self { nav_items }
    }

    #[must_use]
    pub fn nav_item(&self, index: usize) -> Option<&NavItem> {
        self.nav_items.get(index)
    }
}
