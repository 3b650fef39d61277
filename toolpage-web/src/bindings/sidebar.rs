use std::rc::Rc;

use toolpage_core::PageEvent;

use crate::dom;
use crate::error::WebError;
use crate::runtime::Page;

pub fn attach(page: &Rc<Page>) -> Result<bool, WebError> {
    let elements = page.elements();
    let (Some(button), Some(_)) = (elements.collapse_button.clone(), elements.sidebar.as_ref())
    else {
        return Ok(false);
    };
    let page = Rc::clone(page);
    dom::listen(&button, "click", false, move |_| {
        page.dispatch(PageEvent::SidebarToggled);
    })?;
    Ok(true)
}
