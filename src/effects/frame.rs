use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A cancellable `requestAnimationFrame` loop.
///
/// The callback reschedules itself every frame until the loop is cancelled.
/// Cancelling clears the pending frame request, so no callback ever fires
/// against torn-down state.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Start running `tick` once per display refresh.
    pub fn start(mut tick: impl FnMut() + 'static) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let raf_id_inner = raf_id.clone();
        let closure_inner = closure.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if raf_id_inner.get().is_none() {
                // Cancelled after this frame was already dispatched.
                return;
            }
            tick();
            if let Some(window) = web_sys::window() {
                if let Ok(id) = window.request_animation_frame(
                    closure_inner
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    raf_id_inner.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(window) = web_sys::window() {
            if let Ok(id) = window.request_animation_frame(
                closure.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                raf_id.set(Some(id));
            }
        }

        FrameLoop { raf_id, tick: closure }
    }

    /// Cancel the pending frame request and release the callback.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Dropping the closure breaks the self-referential cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
