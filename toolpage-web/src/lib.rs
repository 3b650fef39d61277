#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod bootstrap;
pub mod clipboard;
pub mod config;
pub mod dom;
pub mod elements;
pub mod error;
pub mod runtime;
pub mod storage;
pub mod test_bridge;

pub use error::WebError;
pub use runtime::Page;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    match bootstrap::mount() {
        Ok(page) => test_bridge::install(&page),
        Err(err) => log::error!("toolpage failed to start: {err}"),
    }
}
