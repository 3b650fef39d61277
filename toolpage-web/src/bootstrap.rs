//! Page startup: config, element lookup, stored preference, bindings
use std::rc::Rc;

use toolpage_core::{PageState, StoredTheme, read_stored_theme};

use crate::bindings;
use crate::config::read_page_config;
use crate::dom;
use crate::elements::PageElements;
use crate::error::WebError;
use crate::runtime::Page;
use crate::storage::LocalPreferenceStore;

/// Resolve the page, apply the stored theme and bind every behavior found.
///
/// # Errors
///
/// Returns an error only when there is no window or document at all.
pub fn mount() -> Result<Rc<Page>, WebError> {
    dom::window().ok_or(WebError::NoWindow)?;
    let document = dom::document().ok_or(WebError::NoDocument)?;
    let config = read_page_config(&document);
    let elements = PageElements::resolve(&document, &config.selectors);

    let store = match LocalPreferenceStore::open() {
        Ok(store) => Some(store),
        Err(err) => {
            log::warn!("theme preference will not persist: {err}");
            None
        }
    };
    let stored = store
        .as_ref()
        .map_or(Ok(StoredTheme::Missing), |store| {
            read_stored_theme(store, &config.storage_key)
        })
        .unwrap_or_else(|err| {
            log::warn!("could not read theme preference: {err}");
            StoredTheme::Missing
        });
    if let StoredTheme::Unrecognized(value) = &stored {
        log::warn!("ignoring stored theme `{value}`");
    }

    let collapsed = elements.sidebar_collapsed(&config.collapsed_class);
    let layout = elements.layout();
    let state = PageState::new(config, layout, stored).with_sidebar_collapsed(collapsed);
    let page = Page::new(state, elements, store);
    page.boot();
    let bound = bindings::attach_all(&page);
    log::info!("toolpage ready ({bound} behaviors bound)");
    Ok(page)
}
