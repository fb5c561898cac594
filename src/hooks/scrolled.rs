use yew::prelude::*;

use crate::browser::{self, WindowListener};

/// Whether the window is scrolled further than `threshold_px`,
/// refreshed on every scroll event.
#[hook]
pub fn use_scrolled_past(threshold_px: f64) -> bool {
    let scrolled = use_state_eq(|| browser::scroll_y() > threshold_px);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                scrolled.set(browser::scroll_y() > threshold);
                let listener = WindowListener::new("scroll", move || {
                    scrolled.set(browser::scroll_y() > threshold);
                });
                move || drop(listener)
            },
            threshold_px,
        );
    }

    *scrolled
}
