//! Scroll-triggered reveal: elements carrying the `reveal-up` class gain an
//! `active` class the first time they enter the viewport, and only once.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;

/// Write-once activation gate for a single reveal target.
#[derive(Debug, Default)]
pub struct RevealGate {
    fired: bool,
}

impl RevealGate {
    pub fn new() -> Self {
        RevealGate { fired: false }
    }

    /// Returns `true` exactly once, on the first intersecting notification;
    /// the gate never resets, so scrolling away and back cannot re-trigger.
    pub fn fire(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Observes the page's reveal targets. Dropping the handle disconnects the
/// observer and drops the per-target gates.
pub struct Reveal {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every `.reveal-up` element currently in the document. Zero
/// targets is a no-op observer; `None` only when the observer itself cannot
/// be constructed.
pub fn mount(document: &Document) -> Option<Reveal> {
    let targets: Vec<Element> = match document.query_selector_all(".reveal-up") {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    };
    debug!("observing {} reveal targets", targets.len());

    let gates: Rc<RefCell<Vec<(Element, RevealGate)>>> = Rc::new(RefCell::new(
        targets
            .iter()
            .cloned()
            .map(|el| (el, RevealGate::new()))
            .collect(),
    ));

    let on_intersect = {
        let gates = gates.clone();
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let mut gates = gates.borrow_mut();
                    if let Some((el, gate)) = gates.iter_mut().find(|(el, _)| *el == target) {
                        if gate.fire(entry.is_intersecting()) {
                            let _ = el.class_list().add_1("active");
                            observer.unobserve(el);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .ok()?;
    for el in &targets {
        observer.observe(el);
    }

    Some(Reveal {
        observer,
        _on_intersect: on_intersect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_fires_once_on_first_intersection() {
        let mut gate = RevealGate::new();
        assert!(!gate.fire(false));
        assert!(gate.fire(true));
        assert!(gate.fired());
    }

    #[test]
    fn gate_never_fires_twice() {
        let mut gate = RevealGate::new();
        assert!(gate.fire(true));
        // Scrolled away and back in.
        assert!(!gate.fire(false));
        assert!(!gate.fire(true));
        assert!(gate.fired());
    }

    #[test]
    fn gate_stays_cold_without_intersection() {
        let mut gate = RevealGate::new();
        for _ in 0..5 {
            assert!(!gate.fire(false));
        }
        assert!(!gate.fired());
    }
}
