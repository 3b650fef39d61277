use std::rc::Rc;

use crate::dom;
use crate::error::WebError;
use crate::runtime::Page;

/// Passive window scroll listener driving the nav highlight.
pub fn attach(page: &Rc<Page>) -> Result<bool, WebError> {
    if page.elements().nav_items.is_empty() {
        return Ok(false);
    }
    let win = dom::window().ok_or(WebError::NoWindow)?;
    let page = Rc::clone(page);
    dom::listen(&win, "scroll", true, move |_| page.scrolled())?;
    Ok(true)
}
