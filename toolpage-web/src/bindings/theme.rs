use std::rc::Rc;

use toolpage_core::PageEvent;

use crate::dom;
use crate::error::WebError;
use crate::runtime::Page;

pub fn attach(page: &Rc<Page>) -> Result<bool, WebError> {
    let Some(toggle) = page.elements().theme_toggle.clone() else {
        return Ok(false);
    };
    let page = Rc::clone(page);
    dom::listen(&toggle, "click", false, move |_| {
        page.dispatch(PageEvent::ThemeToggled);
    })?;
    Ok(true)
}
