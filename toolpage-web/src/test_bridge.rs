//! `window.__toolpageTest` for browser automation, enabled with `?test=1`
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::runtime::Page;

pub const BRIDGE_NAME: &str = "__toolpageTest";

/// Whether a `location.search` string asks for the bridge.
#[must_use]
pub fn test_mode_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "test=1")
}

fn test_mode_enabled() -> bool {
    dom::window()
        .and_then(|win| win.location().search().ok())
        .is_some_and(|search| test_mode_requested(&search))
}

/// Install the bridge when the page was opened in test mode.
pub fn install(page: &Rc<Page>) {
    if !test_mode_enabled() {
        return;
    }
    if let Err(err) = expose(page) {
        log::error!(
            "Failed to install test bridge: {}",
            dom::js_error_message(&err)
        );
    }
}

/// Install unconditionally.
///
/// # Errors
/// Returns an error if the bridge object cannot be attached to `window`.
pub fn expose(page: &Rc<Page>) -> Result<(), JsValue> {
    let win = dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let bridge = js_sys::Object::new();

    let state_page = Rc::clone(page);
    let state = Closure::wrap(Box::new(move || {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        state_page
            .snapshot()
            .serialize(&serializer)
            .unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    let scroll_page = Rc::clone(page);
    let scroll_to = Closure::wrap(Box::new(move |value: JsValue| {
        let y = value.as_f64().unwrap_or_default();
        if let Some(win) = dom::window() {
            win.scroll_to_with_x_and_y(0.0, y);
        }
        scroll_page.scrolled();
    }) as Box<dyn FnMut(JsValue)>);

    let reset_page = Rc::clone(page);
    let reset = Closure::wrap(Box::new(move || {
        let key = reset_page.config().storage_key;
        if let Some(store) = reset_page.store() {
            if let Err(err) = store.remove(&key) {
                log::warn!("bridge reset could not clear `{key}`: {err}");
            }
        }
    }) as Box<dyn FnMut()>);

    js_sys::Reflect::set(&bridge, &"state".into(), state.as_ref().unchecked_ref())?;
    js_sys::Reflect::set(&bridge, &"scrollTo".into(), scroll_to.as_ref().unchecked_ref())?;
    js_sys::Reflect::set(&bridge, &"reset".into(), reset.as_ref().unchecked_ref())?;
    js_sys::Reflect::set(&win, &BRIDGE_NAME.into(), &bridge)?;

    state.forget();
    scroll_to.forget();
    reset.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_test_flag_among_other_params() {
        assert!(test_mode_requested("?test=1"));
        assert!(test_mode_requested("?lang=en&test=1"));
        assert!(!test_mode_requested("?test=10"));
        assert!(!test_mode_requested(""));
        assert!(!test_mode_requested("?contest=1"));
    }
}
