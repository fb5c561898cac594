use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::config;
use crate::data::services::SERVICES;
use crate::routing::route::Page;
use crate::routing::scroll_spy::Section;
use crate::routing::store::use_navigator;

const QUICK_LINKS: [(Section, &str); 4] = [
    (Section::Home, "Home"),
    (Section::Services, "Our Services"),
    (Section::About, "About Dr. Obayemi"),
    (Section::Foundation, "Foundation"),
];

const SOCIAL_LINKS: [(Icon, &str); 3] = [
    (Icon::Facebook, "Facebook"),
    (Icon::Instagram, "Instagram"),
    (Icon::Twitter, "Twitter"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigator = use_navigator();
    let year = Local::now().year();

    let scroll_to = |section: Section| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.scroll_to_section(section))
    };

    let open = |page: Page| {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.open(page);
        })
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #0a1628;
                    color: rgba(255, 255, 255, 0.7);
                    padding: 4rem 1.5rem 2rem;
                    border-top: 1px solid rgba(212, 175, 55, 0.2);
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-logo {
                    height: 56px;
                    margin-bottom: 1.25rem;
                }
                .site-footer h4 {
                    color: #d4af37;
                    font-size: 1rem;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    margin-bottom: 1.25rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: inherit;
                    font: inherit;
                    text-align: left;
                    text-decoration: none;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .footer-link:hover {
                    color: #d4af37;
                }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .footer-social a {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.08);
                    color: #ffffff;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .footer-social a:hover {
                    background: #d4af37;
                }
                .footer-bottom {
                    max-width: 1280px;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
                @media (max-width: 900px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 600px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <img class="footer-logo" src={config::LOGO} alt={config::PRACTICE_NAME} />
                    <p>
                        {"Excellence, precision, and safety in facial plastic and reconstructive surgery. \
                          Committed to enhancing natural beauty and transforming lives."}
                    </p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|&(icon, label)| html! {
                            <a href="#" aria-label={label} onclick={Callback::from(|e: MouseEvent| e.prevent_default())}>
                                <IconGlyph icon={icon} />
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|&(section, label)| html! {
                            <li>
                                <button class="footer-link" onclick={scroll_to(section)}>{label}</button>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for SERVICES.iter().map(|service| html! {
                            <li>
                                <a href={Page::ServiceDetail(service).fragment_href()}
                                   class="footer-link"
                                   onclick={open(Page::ServiceDetail(service))}>
                                    {service.title}
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a class="footer-link" href={format!("tel:{}", config::PHONE)}>{config::PHONE}</a></li>
                        <li><a class="footer-link" href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a></li>
                        { for config::ADDRESS_LINES.iter().map(|line| html! { <li>{*line}</li> }) }
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, config::PRACTICE_NAME)}</span>
                <div class="footer-legal">
                    <a href={Page::Privacy.fragment_href()} class="footer-link" onclick={open(Page::Privacy)}>
                        {"Privacy Policy"}
                    </a>
                    <a href={Page::Terms.fragment_href()} class="footer-link" onclick={open(Page::Terms)}>
                        {"Terms of Service"}
                    </a>
                </div>
            </div>
        </footer>
    }
}
