//! Event listener wiring, one module per behavior
//!
//! Each `attach` binds its listeners only when the elements it needs were
//! found at startup and returns whether it bound anything.
use std::rc::Rc;

use crate::error::WebError;
use crate::runtime::Page;

pub mod accent;
pub mod copy;
pub mod preview;
pub mod scroll;
pub mod sidebar;
pub mod theme;

type Attach = fn(&Rc<Page>) -> Result<bool, WebError>;

const BEHAVIORS: [(&str, Attach); 6] = [
    ("theme", theme::attach),
    ("sidebar", sidebar::attach),
    ("accent", accent::attach),
    ("scroll", scroll::attach),
    ("preview", preview::attach),
    ("copy", copy::attach),
];

/// Bind every behavior; a failing behavior is logged and the rest still bind.
pub fn attach_all(page: &Rc<Page>) -> usize {
    let mut bound = 0;
    for (name, attach) in BEHAVIORS {
        match attach(page) {
            Ok(true) => bound += 1,
            Ok(false) => log::debug!("{name}: markup not found, not bound"),
            Err(err) => log::error!("{name}: failed to bind: {err}"),
        }
    }
    bound
}
