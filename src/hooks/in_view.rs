use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Intersection observer that fires once, on the target's first entry
/// into the viewport, and disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe_once(
        target: &Element,
        root_margin: &str,
        on_enter: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let mut on_enter = Some(on_enter);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                if let Some(on_enter) = on_enter.take() {
                    on_enter();
                }
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    gloo_console::warn!("IntersectionObserver unavailable:", err);
                    return None;
                }
            };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True from the moment `node` first scrolls into view. `root_margin`
/// uses CSS margin syntax, e.g. `"-100px"` to require the element be
/// well inside the viewport.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let seen = in_view.clone();
                        ViewportObserver::observe_once(&element, root_margin, move || seen.set(true))
                    }
                    None => None,
                };
                // Without an observer there is nothing to wait for.
                if observer.is_none() {
                    in_view.set(true);
                }
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}
