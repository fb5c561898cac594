use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop. The closure receives the frame
/// timestamp and returns whether another frame is wanted. Dropping the
/// loop cancels the pending frame.
pub struct FrameLoop {
    window: Window,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let window = window()?;
        let frame_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        {
            let window = window.clone();
            let frame_id = frame_id.clone();
            let callback_ref = callback.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                frame_id.set(None);
                if !on_frame(timestamp) {
                    return;
                }
                if let Some(callback) = callback_ref.borrow().as_ref() {
                    frame_id.set(window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let first = callback
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        frame_id.set(first);

        Some(Self {
            window,
            frame_id,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure's reference cycle back to itself.
        self.callback.borrow_mut().take();
    }
}
