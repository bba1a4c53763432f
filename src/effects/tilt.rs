//! Pointer-driven 3D tilt for hoverable cards: while the pointer is over a
//! card, a per-card frame loop rotates and scales it toward the pointer;
//! on leave the loop stops and the card eases back to neutral.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config;
use crate::effects::frame::FrameLoop;

/// Tilt geometry for one hovered card. The dimensions come from the
/// bounding rectangle captured at hover start and are deliberately never
/// refreshed, so scrolling or resizing mid-hover tilts against stale
/// geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    width: f64,
    height: f64,
    pointer_x: f64,
    pointer_y: f64,
}

impl TiltState {
    pub fn new(width: f64, height: f64) -> Self {
        TiltState {
            width,
            height,
            pointer_x: 0.0,
            pointer_y: 0.0,
        }
    }

    /// Latest pointer offset relative to the captured rectangle origin.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    /// Rotation in degrees around the x and y axes. Unclamped: a pointer
    /// offset computed against a stale rectangle can push past the nominal
    /// maximum.
    pub fn rotation(&self) -> (f64, f64) {
        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;
        let rotate_x = ((self.pointer_y - center_y) / center_y) * -config::TILT_MAX_DEG;
        let rotate_y = ((self.pointer_x - center_x) / center_x) * config::TILT_MAX_DEG;
        (rotate_x, rotate_y)
    }

    /// The transform applied while hovered.
    pub fn transform(&self) -> String {
        let (rotate_x, rotate_y) = self.rotation();
        format!(
            "perspective(1200px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) \
             scale3d({scale}, {scale}, {scale})",
            scale = config::TILT_SCALE
        )
    }
}

/// The neutral transform a card returns to after hover.
pub fn rest_transform() -> String {
    "perspective(1200px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)".to_string()
}

/// Live hover state: the captured rectangle origin, the shared tilt
/// geometry, and the frame loop writing the transform.
struct ActiveTilt {
    state: Rc<RefCell<TiltState>>,
    rect_left: f64,
    rect_top: f64,
    frame_loop: FrameLoop,
}

/// Hover-tilt behavior attached to one card. Dropping the handle detaches
/// the listeners and stops any running frame loop.
pub struct Tilt {
    element: HtmlElement,
    on_enter: Closure<dyn FnMut(MouseEvent)>,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
    active: Rc<RefCell<Option<ActiveTilt>>>,
}

impl Drop for Tilt {
    fn drop(&mut self) {
        self.active.borrow_mut().take();
        for (name, closure) in [
            ("mouseenter", &self.on_enter),
            ("mousemove", &self.on_move),
            ("mouseleave", &self.on_leave),
        ] {
            let _ = self
                .element
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

/// Attach the tilt behavior to a card element. Cards are independent; each
/// call owns its own state and frame loop.
pub fn mount(element: HtmlElement) -> Tilt {
    let active: Rc<RefCell<Option<ActiveTilt>>> = Rc::new(RefCell::new(None));

    let on_enter = {
        let element = element.clone();
        let active = active.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            let rect = element.get_bounding_client_rect();
            let state = Rc::new(RefCell::new(TiltState::new(rect.width(), rect.height())));
            let _ = element
                .style()
                .set_property("transition", config::TILT_ENTER_TRANSITION);

            let frame_loop = {
                let element = element.clone();
                let state = state.clone();
                FrameLoop::start(move || {
                    let transform = state.borrow().transform();
                    let _ = element.style().set_property("transform", &transform);
                })
            };

            *active.borrow_mut() = Some(ActiveTilt {
                state,
                rect_left: rect.left(),
                rect_top: rect.top(),
                frame_loop,
            });
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let on_move = {
        let active = active.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(tilt) = active.borrow_mut().as_mut() {
                tilt.state.borrow_mut().set_pointer(
                    event.client_x() as f64 - tilt.rect_left,
                    event.client_y() as f64 - tilt.rect_top,
                );
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let on_leave = {
        let element = element.clone();
        let active = active.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            if let Some(tilt) = active.borrow_mut().take() {
                tilt.frame_loop.cancel();
            }
            let _ = element
                .style()
                .set_property("transition", config::TILT_LEAVE_TRANSITION);
            let _ = element.style().set_property("transform", &rest_transform());
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    for (name, closure) in [
        ("mouseenter", &on_enter),
        ("mousemove", &on_move),
        ("mouseleave", &on_leave),
    ] {
        let _ = element.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }

    Tilt {
        element,
        on_enter,
        on_move,
        on_leave,
        active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_matches_the_reference_card() {
        let mut state = TiltState::new(200.0, 100.0);
        state.set_pointer(150.0, 75.0);
        assert_eq!(state.rotation(), (-4.0, 4.0));
    }

    #[test]
    fn centered_pointer_is_flat() {
        let mut state = TiltState::new(300.0, 180.0);
        state.set_pointer(150.0, 90.0);
        let (rotate_x, rotate_y) = state.rotation();
        assert_eq!(rotate_x, 0.0);
        assert_eq!(rotate_y, 0.0);
    }

    #[test]
    fn hover_start_tilts_toward_the_top_left_until_the_pointer_moves() {
        let state = TiltState::new(200.0, 100.0);
        assert_eq!(state.rotation(), (8.0, -8.0));
    }

    #[test]
    fn stale_rectangles_can_push_past_the_nominal_maximum() {
        let mut state = TiltState::new(200.0, 100.0);
        state.set_pointer(400.0, 200.0);
        assert_eq!(state.rotation(), (-24.0, 24.0));
    }

    #[test]
    fn active_transform_carries_rotation_and_scale() {
        let mut state = TiltState::new(200.0, 100.0);
        state.set_pointer(150.0, 75.0);
        assert_eq!(
            state.transform(),
            "perspective(1200px) rotateX(-4deg) rotateY(4deg) scale3d(1.04, 1.04, 1.04)"
        );
    }

    #[test]
    fn rest_transform_is_exactly_neutral() {
        assert_eq!(
            rest_transform(),
            "perspective(1200px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
        );
    }
}
