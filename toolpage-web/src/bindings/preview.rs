use std::rc::Rc;

use toolpage_core::PageEvent;

use crate::dom;
use crate::error::WebError;
use crate::runtime::Page;

pub fn attach(page: &Rc<Page>) -> Result<bool, WebError> {
    let inputs = page.elements().file_inputs.clone();
    for (index, input) in inputs.iter().enumerate() {
        let page = Rc::clone(page);
        let element = input.element.clone();
        let preview_id = input.preview_id.clone();
        dom::listen(&input.element, "change", false, move |_| {
            let file_count = element.files().map_or(0, |files| files.length());
            page.dispatch(PageEvent::FilesSelected {
                input: index,
                preview_id: preview_id.clone(),
                file_count,
            });
        })?;
    }
    Ok(!inputs.is_empty())
}
