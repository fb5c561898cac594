use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::data::content::Faq;
use crate::data::faqs::FAQS;
use crate::hooks::in_view::use_in_view;
use crate::routing::scroll_spy::Section;

/// Open entry after a click on `clicked`. At most one entry is open.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    faq: &'static Faq,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" onclick={onclick} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.faq.question}</span>
                <IconGlyph icon={Icon::ChevronDown} class={classes!("toggle-icon")} />
            </button>
            <div class="faq-answer">
                <p>{props.faq.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [Faq],
}

/// Single-open accordion over a table of questions.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state_eq(|| None::<usize>);

    html! {
        <div class="faq-list">
            <style>
                {r#"
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    overflow: hidden;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .faq-item.open {
                    border-color: #d4af37;
                    box-shadow: 0 10px 30px rgba(10, 22, 40, 0.08);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                    font: inherit;
                }
                .question-text {
                    color: #0a1628;
                    font-size: 1.1rem;
                    font-weight: 600;
                }
                .toggle-icon {
                    color: #d4af37;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease, opacity 0.3s ease, padding 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 600px;
                    opacity: 1;
                    padding-bottom: 1.5rem;
                }
                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.8;
                }
                "#}
            </style>
            { for props.items.iter().enumerate().map(|(index, faq)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_: ()| open.set(toggle(*open, index)))
                };
                html! {
                    <FaqItem key={index} faq={faq} is_open={*open == Some(index)} on_toggle={on_toggle} />
                }
            }) }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let list = use_node_ref();
    let in_view = use_in_view(list.clone(), "-100px");

    html! {
        <section id={Section::Faq.anchor()} class="faq section-light">
            <div class="section-container narrow">
                <div class="section-header">
                    <span class="section-eyebrow">{"FAQ"}</span>
                    <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lede">
                        {"Find answers to common questions about facial plastic surgery, procedures, and what to \
                          expect during your journey with us."}
                    </p>
                </div>
                <div ref={list} class={classes!("reveal", in_view.then_some("revealed"))}>
                    <FaqList items={&FAQS[..]} />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_closed_entry_opens_it() {
        assert_eq!(toggle(None, 2), Some(2));
    }

    #[test]
    fn clicking_the_open_entry_closes_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }

    #[test]
    fn opening_a_second_entry_closes_the_first() {
        let open = toggle(None, 0);
        let open = toggle(open, 3);
        assert_eq!(open, Some(3));
    }
}
