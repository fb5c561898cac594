use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::data::testimonials::{marquee_track, Testimonial};
use crate::hooks::in_view::use_in_view;
use crate::routing::scroll_spy::Section;

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    testimonial: &'static Testimonial,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let testimonial = props.testimonial;

    html! {
        <div class="review-card">
            <IconGlyph icon={Icon::Quote} class={classes!("review-quote")} />
            <div class="review-stars" aria-label={format!("{} out of 5 stars", testimonial.rating)}>
                { for (0..testimonial.rating).map(|_| html! { <IconGlyph icon={Icon::Star} /> }) }
            </div>
            <p class="review-text">{format!("\"{}\"", testimonial.text)}</p>
            <div class="review-author">
                <p class="review-name">{testimonial.name}</p>
                <p class="review-procedure">{testimonial.procedure}</p>
                <p class="review-year">{testimonial.year}</p>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let marquee = use_node_ref();
    let in_view = use_in_view(marquee.clone(), "-100px");

    html! {
        <section id={Section::Reviews.anchor()} class="reviews section-light">
            <style>
                {r#"
                .reviews-marquee {
                    position: relative;
                    overflow: hidden;
                    opacity: 0;
                    transition: opacity 0.6s ease;
                }
                .reviews-marquee.revealed {
                    opacity: 1;
                }
                .reviews-marquee::before,
                .reviews-marquee::after {
                    content: '';
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 120px;
                    z-index: 2;
                    pointer-events: none;
                }
                .reviews-marquee::before {
                    left: 0;
                    background: linear-gradient(to right, #f8f7f4, transparent);
                }
                .reviews-marquee::after {
                    right: 0;
                    background: linear-gradient(to left, #f8f7f4, transparent);
                }
                .reviews-track {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                    padding: 1rem 0;
                    animation: marquee 40s linear infinite;
                }
                .reviews-track:hover {
                    animation-play-state: paused;
                }
                .review-card {
                    width: 360px;
                    flex-shrink: 0;
                    background: #ffffff;
                    border-radius: 8px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(10, 22, 40, 0.08);
                    transition: transform 0.3s ease;
                }
                .review-card:hover {
                    transform: translateY(-5px) scale(1.03);
                }
                .review-quote {
                    font-size: 2rem;
                    color: rgba(212, 175, 55, 0.4);
                }
                .review-stars {
                    color: #d4af37;
                    margin: 0.75rem 0;
                }
                .review-text {
                    color: #4b5563;
                    line-height: 1.7;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                }
                .review-author {
                    border-top: 1px solid #e5e7eb;
                    padding-top: 1rem;
                }
                .review-name {
                    color: #0a1628;
                    font-weight: 600;
                }
                .review-procedure {
                    color: #d4af37;
                    font-size: 0.875rem;
                }
                .review-year {
                    color: #9ca3af;
                    font-size: 0.8rem;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header">
                    <span class="section-eyebrow">{"Reviews"}</span>
                    <h2 class="section-title">{"Patient Reviews"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lede">
                        {"Real experiences from patients who have trusted us with their care."}
                    </p>
                </div>
            </div>

            <div ref={marquee} class={classes!("reviews-marquee", in_view.then_some("revealed"))}>
                <div class="reviews-track">
                    { for marquee_track().map(|(slot, testimonial)| html! {
                        <ReviewCard key={format!("{}-{}", testimonial.id, slot)} testimonial={testimonial} />
                    }) }
                </div>
            </div>
        </section>
    }
}
