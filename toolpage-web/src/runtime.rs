//! Live page: core state plus the adapter that performs its effects
use std::cell::RefCell;
use std::rc::Rc;

use toolpage_core::{Effect, PageConfig, PageEvent, PageSnapshot, PageState, PreferenceStore};
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Url};

use crate::clipboard;
use crate::dom;
use crate::elements::PageElements;
use crate::storage::LocalPreferenceStore;

pub struct Page {
    state: RefCell<PageState>,
    elements: PageElements,
    store: Option<LocalPreferenceStore>,
}

impl Page {
    #[must_use]
    pub fn new(
        state: PageState,
        elements: PageElements,
        store: Option<LocalPreferenceStore>,
    ) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            elements,
            store,
        })
    }

    #[must_use]
    pub const fn elements(&self) -> &PageElements {
        &self.elements
    }

    #[must_use]
    pub const fn store(&self) -> Option<&LocalPreferenceStore> {
        self.store.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> PageConfig {
        self.state.borrow().config().clone()
    }

    pub fn boot(self: &Rc<Self>) {
        let effects = self.state.borrow().boot();
        for effect in effects {
            self.perform(effect);
        }
    }

    /// Feed one event through the core and perform the resulting effects.
    ///
    /// The state borrow ends before any effect runs, so effects may dispatch
    /// follow-up events.
    pub fn dispatch(self: &Rc<Self>, event: PageEvent) {
        let effects = self.state.borrow_mut().apply(event);
        for effect in effects {
            self.perform(effect);
        }
    }

    /// Measure the page and dispatch a scroll.
    pub fn scrolled(self: &Rc<Self>) {
        let Some(win) = dom::window() else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or_default();
        let viewport_width = win
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default();
        self.dispatch(PageEvent::Scrolled {
            scroll_y,
            viewport_width,
            sections: self.elements.section_bounds(),
        });
    }

    fn perform(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::ApplyTheme { theme } => {
                let attribute = self.state.borrow().config().theme_attribute.clone();
                if let Some(root) = &self.elements.root {
                    if let Err(err) = root.set_attribute(&attribute, theme.as_str()) {
                        log::warn!("could not apply theme: {}", dom::js_error_message(&err));
                    }
                }
            }
            Effect::PersistTheme { theme } => self.persist_theme(theme.as_str()),
            Effect::SetSidebarCollapsed { collapsed } => {
                let class = self.state.borrow().config().collapsed_class.clone();
                if let Some(sidebar) = &self.elements.sidebar {
                    let _ = sidebar.class_list().toggle_with_force(&class, collapsed);
                }
            }
            Effect::SetAccent { value } => {
                let property = self.state.borrow().config().accent_property.clone();
                if let Some(root) = &self.elements.root {
                    let _ = root.style().set_property(&property, &value);
                }
            }
            Effect::SetNavActive { index, active } => {
                let class = self.state.borrow().config().active_class.clone();
                if let Some(item) = self.elements.nav_items.get(index) {
                    let classes = item.class_list();
                    let _ = if active {
                        classes.add_1(&class)
                    } else {
                        classes.remove_1(&class)
                    };
                }
            }
            Effect::RevealNavItem { index } => {
                if let Some(item) = self.elements.nav_items.get(index) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Nearest);
                    item.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Effect::ShowPreview { input, preview_id } => self.show_preview(input, &preview_id),
            Effect::RevokeObjectUrl { url } => {
                if let Err(err) = Url::revoke_object_url(&url) {
                    log::debug!("revokeObjectURL failed: {}", dom::js_error_message(&err));
                }
            }
            Effect::CopyText { text } => self.copy_text(text),
            Effect::SetCopyLabel { label } => {
                if let Some(button) = &self.elements.copy_button {
                    button.set_inner_text(&label);
                }
            }
            Effect::ScheduleFeedbackRestore {
                generation,
                delay_ms,
            } => {
                let page = Rc::clone(self);
                let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
                if let Err(err) = dom::set_timeout(delay, move || {
                    page.dispatch(PageEvent::FeedbackElapsed { generation });
                }) {
                    log::error!("failed to schedule copy label restore: {err}");
                }
            }
        }
    }

    fn persist_theme(&self, value: &str) {
        let key = self.state.borrow().config().storage_key.clone();
        match &self.store {
            Some(store) => {
                if let Err(err) = store.save(&key, value) {
                    log::warn!("theme not saved, it applies to this visit only: {err}");
                }
            }
            None => log::warn!("theme not saved, localStorage unavailable"),
        }
    }

    fn show_preview(self: &Rc<Self>, input: usize, preview_id: &str) {
        let Some(file) = self
            .elements
            .file_inputs
            .get(input)
            .and_then(|input| input.element.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        let Some(image) = dom::document()
            .and_then(|doc| doc.get_element_by_id(preview_id))
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        else {
            log::debug!("no preview image #{preview_id}");
            return;
        };
        let url = match Url::create_object_url_with_blob(&file) {
            Ok(url) => url,
            Err(err) => {
                log::warn!("could not preview file: {}", dom::js_error_message(&err));
                return;
            }
        };
        image.set_src(&url);
        let _ = image.style().set_property("display", "block");
        self.dispatch(PageEvent::PreviewShown {
            preview_id: preview_id.to_string(),
            url,
        });
    }

    fn copy_text(self: &Rc<Self>, text: String) {
        let Some(text_box) = self.elements.text_box.clone() else {
            return;
        };
        let page = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let method = clipboard::copy_text(&text, &text_box).await;
            let label = page
                .elements
                .copy_button
                .as_ref()
                .map(web_sys::HtmlElement::inner_text)
                .unwrap_or_default();
            page.dispatch(PageEvent::CopySettled { method, label });
        });
    }

    /// What the page shows right now, read from the live DOM.
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.state.borrow();
        let config = state.config();
        let root = self.elements.root.as_ref();
        let active_nav = self
            .elements
            .nav_items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| item.class_list().contains(&config.active_class).then_some(idx))
            .collect();
        let visible_previews = self
            .elements
            .file_inputs
            .iter()
            .filter(|input| {
                dom::document()
                    .and_then(|doc| doc.get_element_by_id(&input.preview_id))
                    .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
                    .is_some_and(|img| {
                        !img.src().is_empty()
                            && img.style().get_property_value("display").ok().as_deref()
                                == Some("block")
                    })
            })
            .map(|input| input.preview_id.clone())
            .collect();
        PageSnapshot {
            theme: root.and_then(|el| el.get_attribute(&config.theme_attribute)),
            sidebar_collapsed: self.elements.sidebar_collapsed(&config.collapsed_class),
            accent: root
                .and_then(|el| el.style().get_property_value(&config.accent_property).ok())
                .filter(|value| !value.is_empty()),
            active_section: state.active_section().map(str::to_string),
            active_nav,
            copy_label: self
                .elements
                .copy_button
                .as_ref()
                .map(web_sys::HtmlElement::inner_text),
            visible_previews,
        }
    }
}
