use chrono::{Local, NaiveDate};
use yew::prelude::*;

use crate::browser;
use crate::components::footer::Footer;
use crate::components::icon::{Icon, IconGlyph};
use crate::components::nav::Nav;
use crate::config;
use crate::routing::store::use_navigator;

/// Long-form US date, e.g. "March 4, 2025".
pub fn format_last_updated(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub title: &'static str,
    pub children: Children,
}

/// Frame shared by the privacy policy and terms of service.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let navigator = use_navigator();

    use_effect_with_deps(
        |_| {
            browser::scroll_to_top();
            || ()
        },
        (),
    );

    let back_home = Callback::from(move |_: MouseEvent| navigator.go_home());
    let last_updated = format_last_updated(Local::now().date_naive());

    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    background: #f8f7f4;
                }
                .legal-main {
                    max-width: 860px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                }
                .legal-back {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    padding: 0.6rem 1.2rem;
                    border: none;
                    border-radius: 999px;
                    background: #0a1628;
                    color: #d4af37;
                    font: inherit;
                    cursor: pointer;
                }
                .legal-main h1 {
                    color: #0a1628;
                    font-size: clamp(2.25rem, 5vw, 3.25rem);
                }
                .legal-updated {
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin-top: 1rem;
                }
                .legal-content {
                    margin-top: 3rem;
                }
                .legal-content section {
                    margin-bottom: 2.5rem;
                }
                .legal-content h2 {
                    color: #0a1628;
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }
                .legal-content p,
                .legal-content li {
                    color: #4b5563;
                    line-height: 1.8;
                }
                .legal-content ul {
                    padding-left: 1.25rem;
                    margin-top: 0.75rem;
                }
                .legal-contact {
                    background: #ffffff;
                    border-left: 3px solid #d4af37;
                    border-radius: 6px;
                    padding: 1.25rem 1.5rem;
                    margin-top: 1rem;
                }
                "#}
            </style>
            <Nav />
            <main class="legal-main">
                <button class="legal-back" onclick={back_home}>
                    <IconGlyph icon={Icon::ArrowLeft} />
                    <span>{"Back to Home"}</span>
                </button>
                <h1>{props.title}</h1>
                <div class="section-rule left"></div>
                <p class="legal-updated">{format!("Last updated: {}", last_updated)}</p>
                <div class="legal-content">
                    { for props.children.iter() }
                </div>
            </main>
            <Footer />
        </div>
    }
}

#[function_component(LegalContact)]
pub fn legal_contact() -> Html {
    html! {
        <div class="legal-contact">
            <p><strong>{config::LEGAL_NAME}</strong></p>
            <p>{format!("{}, {}", config::ADDRESS_LINES[0], config::ADDRESS_LINES[1])}</p>
            <p>{config::ADDRESS_LINES[2]}</p>
            <p>{format!("Phone: {}", config::PHONE)}</p>
            <p>{format!("Email: {}", config::EMAIL)}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_updated_uses_long_month_and_unpadded_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).expect("valid date");
        assert_eq!(format_last_updated(date), "March 4, 2025");
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).expect("valid date");
        assert_eq!(format_last_updated(date), "December 25, 2024");
    }
}
