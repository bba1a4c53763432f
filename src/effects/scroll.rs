//! Scroll-position helpers: the navbar threshold and smooth in-page anchor
//! scrolling.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config;

/// True once the page has scrolled far enough for the navbar to switch to
/// its condensed style. Strictly greater: an offset of exactly 50 still
/// counts as at the top.
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

/// The fragment id a link points at, when it is an in-page anchor.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Intercepts clicks on fragment anchors and scrolls the target section
/// into view smoothly. The default jump is suppressed for every fragment
/// anchor, even when the id matches nothing. Dropping the handle removes
/// the listener.
pub struct AnchorScroll {
    document: Document,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for AnchorScroll {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}

/// Install one delegated click listener on the document; anchors rendered or
/// replaced later are covered without rewiring.
pub fn mount(document: &Document) -> AnchorScroll {
    let on_click = {
        let document = document.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(target) = event.target() else {
                return;
            };
            let Ok(element) = target.dyn_into::<Element>() else {
                return;
            };
            let Ok(Some(anchor)) = element.closest("a[href^='#']") else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Some(section) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());

    AnchorScroll {
        document: document.clone(),
        on_click,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive_at_fifty() {
        assert!(navbar_scrolled(51.0));
        assert!(!navbar_scrolled(50.0));
        assert!(!navbar_scrolled(49.0));
        assert!(!navbar_scrolled(0.0));
    }

    #[test]
    fn fragment_targets_only_in_page_anchors() {
        assert_eq!(fragment_target("#services"), Some("services"));
        assert_eq!(fragment_target("/pricing"), None);
        assert_eq!(fragment_target("https://example.com/#services"), None);
    }

    // A fragment anchor whose id matches nothing is still intercepted: the
    // handler prevents the default jump before the lookup, and the lookup
    // simply finds no element to scroll to. A bare `#` maps to the empty id
    // and is swallowed the same way.
    #[test]
    fn missing_fragments_are_still_interceptions() {
        assert_eq!(fragment_target("#not-on-this-page"), Some("not-on-this-page"));
        assert_eq!(fragment_target("#"), Some(""));
    }
}
