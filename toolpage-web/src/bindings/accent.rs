use std::rc::Rc;

use toolpage_core::PageEvent;

use crate::dom;
use crate::error::WebError;
use crate::runtime::Page;

/// Hover listeners on the nav items that carry `data-accent`.
pub fn attach(page: &Rc<Page>) -> Result<bool, WebError> {
    let mut bound = false;
    for (index, item) in page.elements().nav_items.iter().enumerate() {
        if !item.has_attribute("data-accent") {
            continue;
        }
        let page = Rc::clone(page);
        dom::listen(item, "mouseenter", false, move |_| {
            page.dispatch(PageEvent::NavHovered { index });
        })?;
        bound = true;
    }
    Ok(bound)
}
