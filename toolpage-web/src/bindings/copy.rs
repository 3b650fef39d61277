use std::rc::Rc;

use toolpage_core::PageEvent;

use crate::dom;
use crate::error::WebError;
use crate::runtime::Page;

pub fn attach(page: &Rc<Page>) -> Result<bool, WebError> {
    let elements = page.elements();
    let (Some(button), Some(text_box)) = (elements.copy_button.clone(), elements.text_box.clone())
    else {
        return Ok(false);
    };
    let page = Rc::clone(page);
    dom::listen(&button, "click", false, move |_| {
        page.dispatch(PageEvent::CopyRequested {
            text: text_box.value(),
        });
    })?;
    Ok(true)
}
