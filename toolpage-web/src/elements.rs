//! DOM contract resolution
//!
//! Every element a behavior needs is looked up once at startup. Missing
//! elements stay `None` (or empty) and the matching behavior is not bound.
use toolpage_core::{NavItem, PageLayout, SectionBounds, Selectors};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;
use crate::error::WebError;

/// A file input that declares the preview image it feeds.
#[derive(Debug, Clone)]
pub struct FileInput {
    pub element: HtmlInputElement,
    pub preview_id: String,
}

/// The copy source: a `<textarea>` on the tools page, a text `<input>` elsewhere.
#[derive(Debug, Clone)]
pub enum TextBox {
    Area(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl TextBox {
    fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => Some(Self::Area(area)),
            Err(element) => element.dyn_into::<HtmlInputElement>().ok().map(Self::Input),
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Area(area) => area.value(),
            Self::Input(input) => input.value(),
        }
    }

    /// Select the whole contents for the legacy copy path.
    ///
    /// # Errors
    /// Returns an error if the browser rejects the selection range.
    pub fn select_all(&self) -> Result<(), WebError> {
        let selected = match self {
            Self::Area(area) => {
                area.select();
                area.set_selection_range(0, 99_999)
            }
            Self::Input(input) => {
                input.select();
                input.set_selection_range(0, 99_999)
            }
        };
        selected.map_err(WebError::js("setSelectionRange"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageElements {
    pub root: Option<HtmlElement>,
    pub theme_toggle: Option<Element>,
    pub sidebar: Option<Element>,
    pub collapse_button: Option<Element>,
    pub nav_items: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub file_inputs: Vec<FileInput>,
    pub copy_button: Option<HtmlElement>,
    pub text_box: Option<TextBox>,
}

impl PageElements {
    #[must_use]
    pub fn resolve(document: &Document, selectors: &Selectors) -> Self {
        let html_all = |selector: &str| -> Vec<HtmlElement> {
            dom::query_all(document, selector)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect()
        };

        let file_inputs = dom::query_all(document, &selectors.file_inputs)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .filter_map(|input| {
                let preview_id = input.get_attribute("data-preview")?;
                Some(FileInput {
                    element: input,
                    preview_id,
                })
            })
            .collect();

        Self {
            root: document
                .document_element()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            theme_toggle: dom::query(document, &selectors.theme_toggle),
            sidebar: dom::query(document, &selectors.sidebar),
            collapse_button: dom::query(document, &selectors.collapse_button),
            nav_items: html_all(&selectors.nav_items),
            sections: html_all(&selectors.sections),
            file_inputs,
            copy_button: dom::query(document, &selectors.copy_button)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            text_box: dom::query(document, &selectors.text_box).and_then(TextBox::from_element),
        }
    }

    /// Navigation items as the core sees them.
    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout::new(
            self.nav_items
                .iter()
                .map(|item| NavItem {
                    section: item.get_attribute("data-section"),
                    accent: item.get_attribute("data-accent"),
                })
                .collect(),
        )
    }

    /// Current section offsets; measured per scroll since layout can change.
    #[must_use]
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|section| SectionBounds {
                id: section.get_attribute("id"),
                top: f64::from(section.offset_top()),
            })
            .collect()
    }

    #[must_use]
    pub fn sidebar_collapsed(&self, collapsed_class: &str) -> bool {
        self.sidebar
            .as_ref()
            .is_some_and(|sidebar| sidebar.class_list().contains(collapsed_class))
    }
}
