use crate::constants::OVERLAY_ID;
use web_sys as web;

/// Remove the start overlay from the page. Returns false if it was already gone.
#[inline]
pub fn remove(document: &web::Document) -> bool {
    match document.get_element_by_id(OVERLAY_ID) {
        Some(el) => {
            el.remove();
            true
        }
        None => false,
    }
}
