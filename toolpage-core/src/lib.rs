//! Toolpage core
//!
//! Platform-agnostic behavior of the tools page enhancement layer: theme
//! preference, sidebar collapse, accent hover, scroll-linked highlight, file
//! preview and copy feedback. Each behavior is a pure transition from an
//! event to a list of effects; the web crate performs those effects against
//! the DOM and the tester performs them against an in-memory page.

pub mod accent;
pub mod config;
pub mod copy;
pub mod headless;
pub mod highlight;
pub mod nav;
pub mod preview;
pub mod sidebar;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod theme;

pub use accent::AccentState;
pub use config::{ConfigError, PageConfig, Selectors};
pub use copy::{CopyFeedback, CopyMethod, CopyPhase};
pub use headless::{HeadlessDom, HeadlessPage};
pub use highlight::{HighlightPlan, HighlightState, SectionBounds, current_section};
pub use nav::{NavItem, PageLayout};
pub use preview::PreviewState;
pub use sidebar::SidebarState;
pub use snapshot::PageSnapshot;
pub use state::{Effect, Effects, PageEvent, PageState};
pub use store::{MemoryStore, PreferenceStore, StoreError};
pub use theme::{StoredTheme, Theme, ThemeParseError, ThemeState, read_stored_theme};

/// Build the page state at load time from the persisted preference.
///
/// # Errors
///
/// Returns the store's error when the preference slot cannot be read.
pub fn load_page<S>(store: &S, config: PageConfig, layout: PageLayout) -> Result<PageState, S::Error>
where
    S: PreferenceStore + ?Sized,
{
    let stored = read_stored_theme(store, &config.storage_key)?;
    Ok(PageState::new(config, layout, stored))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_page_reads_configured_slot() {
        let store = MemoryStore::default();
        store.save("prefs.theme", "dark").unwrap();
        let config = PageConfig {
            storage_key: "prefs.theme".into(),
            ..PageConfig::default()
        };
        let page = load_page(&store, config, PageLayout::default()).unwrap();
        assert_eq!(page.theme(), Theme::Dark);
    }

    #[test]
    fn load_page_propagates_store_failure() {
        let store = MemoryStore::unavailable();
        let err = load_page(&store, PageConfig::default(), PageLayout::default()).unwrap_err();
        assert_eq!(err, StoreError::Unavailable);
    }
}
