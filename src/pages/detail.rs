//! Layout shared by the gallery and service detail pages.

use yew::prelude::*;

use crate::data::content::DetailedContent;
use crate::routing::scroll_spy::Section;
use crate::routing::store::use_navigator;

pub const DETAIL_STYLES: &str = r#"
    .detail-page {
        min-height: 100vh;
        background: #f8f7f4;
    }
    .detail-main {
        max-width: 1000px;
        margin: 0 auto;
        padding: 8rem 1.5rem 4rem;
    }
    .detail-header {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 0.75rem;
    }
    .detail-header h1 {
        color: #0a1628;
        font-size: clamp(2.25rem, 5vw, 3.5rem);
    }
    .detail-back {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.6rem;
        border: none;
        border-radius: 50%;
        background: #0a1628;
        color: #d4af37;
        cursor: pointer;
    }
    .detail-back.labelled {
        border-radius: 999px;
        padding: 0.6rem 1.2rem;
        margin-bottom: 1.5rem;
    }
    .detail-hero {
        border-radius: 12px;
        overflow: hidden;
        min-height: 400px;
        margin: 2rem 0;
        box-shadow: 0 20px 50px rgba(10, 22, 40, 0.2);
    }
    .detail-hero img {
        width: 100%;
        display: block;
        object-fit: cover;
        animation: fadeIn 0.4s ease;
    }
    .detail-body > p.lead {
        font-size: 1.2rem;
        line-height: 1.8;
        color: #374151;
        margin-bottom: 2rem;
    }
    .detail-body section {
        margin-bottom: 2rem;
    }
    .detail-body h2 {
        color: #0a1628;
        font-size: 1.6rem;
        margin-bottom: 0.75rem;
    }
    .detail-body p,
    .detail-body li {
        color: #4b5563;
        line-height: 1.8;
    }
    .detail-body ul {
        padding-left: 1.25rem;
    }
    .detail-faq {
        background: #ffffff;
        border-left: 3px solid #d4af37;
        border-radius: 6px;
        padding: 1.25rem 1.5rem;
        margin-bottom: 1rem;
    }
    .detail-faq h3 {
        color: #0a1628;
        font-size: 1.05rem;
        margin-bottom: 0.5rem;
    }
    .detail-cta {
        text-align: center;
        margin: 3rem 0;
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct DetailBodyProps {
    pub description: &'static str,
    pub content: Option<&'static DetailedContent>,
}

/// Lead paragraph followed by whichever long-form sections the entry has.
#[function_component(DetailBody)]
pub fn detail_body(props: &DetailBodyProps) -> Html {
    let content = props.content.unwrap_or(&DetailedContent::EMPTY);

    html! {
        <div class="detail-body">
            <p class="lead">{props.description}</p>
            if let Some(overview) = content.overview {
                <section>
                    <h2>{"Overview"}</h2>
                    <p>{overview}</p>
                </section>
            }
            if !content.benefits.is_empty() {
                <section>
                    <h2>{"Benefits"}</h2>
                    <ul>
                        { for content.benefits.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                    </ul>
                </section>
            }
            if let Some(procedure) = content.procedure {
                <section>
                    <h2>{"The Procedure"}</h2>
                    <p>{procedure}</p>
                </section>
            }
            if let Some(recovery) = content.recovery {
                <section>
                    <h2>{"Recovery"}</h2>
                    <p>{recovery}</p>
                </section>
            }
            if !content.faq.is_empty() {
                <section>
                    <h2>{"Frequently Asked Questions"}</h2>
                    { for content.faq.iter().map(|faq| html! {
                        <div class="detail-faq">
                            <h3>{faq.question}</h3>
                            <p>{faq.answer}</p>
                        </div>
                    }) }
                </section>
            }
        </div>
    }
}

#[function_component(ScheduleConsultation)]
pub fn schedule_consultation() -> Html {
    let navigator = use_navigator();
    let onclick = Callback::from(move |_: MouseEvent| navigator.scroll_to_section(Section::Contact));

    html! {
        <div class="detail-cta">
            <button class="btn-gold" {onclick}>{"Schedule Consultation"}</button>
        </div>
    }
}
