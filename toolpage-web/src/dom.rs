use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Storage, Window};

use crate::error::WebError;

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    set_timeout(duration_ms, move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    })
    .map_err(|err| JsValue::from_str(&err.to_string()))?;

    JsFuture::from(promise).await?;
    Ok(())
}

/// Run `callback` once after `duration_ms`.
///
/// # Errors
/// Returns an error if there is no window or the browser refuses the timer.
pub fn set_timeout(duration_ms: i32, callback: impl FnOnce() + 'static) -> Result<i32, WebError> {
    let win = window().ok_or(WebError::NoWindow)?;
    // Freed by the JS side once it has been called.
    let callback = Closure::once_into_js(callback);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        duration_ms,
    )
    .map_err(WebError::js("setTimeout"))
}

/// Attach a listener that lives as long as the page.
///
/// # Errors
/// Returns an error if the browser rejects the registration.
pub fn listen(
    target: &EventTarget,
    event_type: &'static str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(WebError::js("addEventListener"))?;
    closure.forget();
    Ok(())
}

/// First element matching `selector`; an invalid selector counts as no match.
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector `{selector}`: {}", js_error_message(&err));
            None
        }
    }
}

/// Every element matching `selector` in document order.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector `{selector}`: {}", js_error_message(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, WebError> {
    window()
        .ok_or(WebError::NoWindow)?
        .local_storage()
        .map_err(WebError::js("localStorage"))?
        .ok_or(WebError::NoStorage)
}
