use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

/// Element id an in-page link points at, if any.
pub fn href_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

fn scroll_to_id(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Click handler for `<a href="#...">` links: smooth-scrolls to the target
/// instead of jumping. Links to missing ids do nothing.
pub fn anchor_click() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        let href = e
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|anchor| anchor.get_attribute("href"));

        let Some(href) = href else { return };
        if !href.starts_with('#') {
            return;
        }

        e.prevent_default();
        if let Some(id) = href_target(&href) {
            scroll_to_id(id);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(href_target("#services"), Some("services"));
        assert_eq!(href_target("#contact-form"), Some("contact-form"));
    }

    #[test]
    fn bare_hash_and_other_links_have_no_target() {
        assert_eq!(href_target("#"), None);
        assert_eq!(href_target("/pricing"), None);
        assert_eq!(href_target("https://example.com/#top"), None);
        assert_eq!(href_target(""), None);
    }
}
