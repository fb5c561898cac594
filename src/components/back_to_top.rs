use yew::prelude::*;

use crate::browser;
use crate::components::icon::{Icon, IconGlyph};
use crate::config;
use crate::hooks::scrolled::use_scrolled_past;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_scrolled_past(config::BACK_TO_TOP_THRESHOLD_PX);
    let onclick = Callback::from(|_: MouseEvent| browser::scroll_to_top());

    html! {
        <button
            class={classes!("back-to-top", visible.then_some("visible"))}
            {onclick}
            aria-label="Back to top"
        >
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    z-index: 900;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: none;
                    background: #d4af37;
                    color: #0a1628;
                    font-size: 1.25rem;
                    cursor: pointer;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);
                    opacity: 0;
                    transform: translateY(20px);
                    pointer-events: none;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .back-to-top.visible {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                "#}
            </style>
            <IconGlyph icon={Icon::ArrowUp} />
        </button>
    }
}
