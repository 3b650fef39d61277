use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::dom::js_error_message;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("localStorage unavailable")]
    NoStorage,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl WebError {
    /// Adapter for `map_err` on JavaScript results.
    pub fn js(context: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| Self::Js {
            context,
            message: js_error_message(&value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_step() {
        let err = WebError::Js {
            context: "clipboard write",
            message: "NotAllowedError".into(),
        };
        assert_eq!(err.to_string(), "clipboard write: NotAllowedError");
        assert_eq!(WebError::NoStorage.to_string(), "localStorage unavailable");
    }
}
