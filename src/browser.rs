//! Thin wrappers over the handful of `web_sys` calls the site makes.
//! Every failure is logged and swallowed: a missing element or window
//! turns the call into a no-op.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::routing::route::strip_delimiter;

/// Current `location.hash` without its leading `#`.
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| strip_delimiter(&hash).to_string())
        .unwrap_or_default()
}

pub fn set_fragment(fragment: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.location().set_hash(fragment) {
            log::warn!("Failed to set location hash to {:?}: {:?}", fragment, err);
        }
    }
}

pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Document offset of the element with the given id, if it is mounted.
pub fn element_top(id: &str) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(id)?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(element.offset_top() as f64)
}

/// Smooth-scrolls the element with the given id into view. Returns
/// false when the element is not in the DOM.
pub fn scroll_to_element(id: &str) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("No element #{} to scroll to", id);
            false
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Event listener on `window` that unsubscribes itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to subscribe to {}: {:?}", event, err);
            return None;
        }
        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
