use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

pub const NOMINATION_FORM_ID: &str = "nomination-form";
pub const CONTACT_ID: &str = "contact-us";

/// Smooth-scrolls the element with `id` into view, if it is on the page.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("scroll target #{} not found", id);
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
