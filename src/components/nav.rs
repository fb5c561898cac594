use yew::prelude::*;

use crate::config;
use crate::hooks::scrolled::use_scrolled_past;
use crate::routing::route::Page;
use crate::routing::scroll_spy::{use_scroll_spy, Section};
use crate::routing::store::use_navigator;

/// Sections listed in the bar. Contact is reached through the
/// consultation button instead.
const NAV_SECTIONS: [Section; 7] = [
    Section::Home,
    Section::About,
    Section::Services,
    Section::Gallery,
    Section::Reviews,
    Section::Faq,
    Section::Foundation,
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let navigator = use_navigator();
    let active = use_scroll_spy();
    let is_scrolled = use_scrolled_past(config::NAV_SOLID_THRESHOLD_PX);
    let menu_open = use_state(|| false);

    let on_home = navigator.page() == Page::Home;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        move |section: Section| {
            let navigator = navigator.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                navigator.scroll_to_section(section);
            })
        }
    };

    let go_home = {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigator.go_home();
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    padding: 1.25rem 0;
                    background: transparent;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(10, 22, 40, 0.95);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img {
                    height: 48px;
                    cursor: pointer;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    position: relative;
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                    font-size: 0.95rem;
                    letter-spacing: 0.03em;
                    padding: 0.25rem 0;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #d4af37;
                }
                .nav-link::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    height: 2px;
                    width: 100%;
                    background: #d4af37;
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 0.3s ease;
                }
                .nav-link.active::after {
                    transform: scaleX(1);
                }
                .nav-cta {
                    background: #d4af37;
                    color: #0a1628;
                    border: none;
                    padding: 0.7rem 1.4rem;
                    border-radius: 4px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .nav-cta:hover {
                    background: #e5c158;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        background: rgba(10, 22, 40, 0.98);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go_home}>
                    <img src={config::LOGO} alt={config::PRACTICE_NAME} />
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|&section| {
                        let class = classes!(
                            "nav-link",
                            (on_home && section == active).then_some("active")
                        );
                        html! {
                            <a href={format!("#{}", section.anchor())} {class} onclick={go_to(section)}>
                                {section.label()}
                            </a>
                        }
                    }) }
                    <button class="nav-cta" onclick={go_to(Section::Contact)}>
                        {"Book Consultation"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
