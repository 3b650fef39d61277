//! Clipboard writes with a selection-based fallback
use toolpage_core::CopyMethod;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlDocument;

use crate::dom;
use crate::elements::TextBox;
use crate::error::WebError;

/// Copy `text`, preferring the asynchronous clipboard API.
///
/// Any failure of the primary path (missing API, insecure context, denied
/// permission) falls back to selecting `text_box` and `execCommand("copy")`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_text(text: &str, text_box: &TextBox) -> CopyMethod {
    match write_clipboard(text).await {
        Ok(()) => CopyMethod::Clipboard,
        Err(err) => {
            log::info!("clipboard API failed ({err}); using selection copy");
            if let Err(err) = legacy_copy(text_box) {
                log::warn!("selection copy failed: {err}");
            }
            CopyMethod::Legacy
        }
    }
}

#[allow(clippy::future_not_send)]
async fn write_clipboard(text: &str) -> Result<(), WebError> {
    let navigator = dom::window().ok_or(WebError::NoWindow)?.navigator();
    let api = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .map_err(WebError::js("navigator.clipboard"))?;
    if api.is_undefined() || api.is_null() {
        return Err(WebError::Js {
            context: "navigator.clipboard",
            message: "not available in this context".to_string(),
        });
    }
    let promise = navigator.clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(WebError::js("clipboard.writeText"))
}

fn legacy_copy(text_box: &TextBox) -> Result<(), WebError> {
    text_box.select_all()?;
    let document = dom::document()
        .ok_or(WebError::NoDocument)?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| WebError::NoDocument)?;
    let copied = document
        .exec_command("copy")
        .map_err(WebError::js("execCommand"))?;
    if !copied {
        log::warn!("execCommand(\"copy\") reported no copy");
    }
    Ok(())
}
