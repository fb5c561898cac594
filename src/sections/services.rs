use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::data::services::{Service, SERVICES};
use crate::hooks::in_view::use_in_view;
use crate::routing::route::Page;
use crate::routing::scroll_spy::Section;
use crate::routing::store::use_navigator;

#[function_component(Services)]
pub fn services() -> Html {
    let navigator = use_navigator();
    let grid = use_node_ref();
    let revealed = use_in_view(grid.clone(), "-100px");

    let open = |service: &'static Service| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.open(Page::ServiceDetail(service)))
    };

    html! {
        <section id={Section::Services.anchor()} class="services section-dark">
            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    position: relative;
                    border-radius: 8px;
                    overflow: hidden;
                    background: #1a2942;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
                }
                .service-card img {
                    width: 100%;
                    height: 220px;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .service-card:hover img {
                    transform: scale(1.08);
                }
                .service-card-body {
                    padding: 1.75rem;
                }
                .service-card .icon {
                    font-size: 1.5rem;
                    color: #d4af37;
                }
                .service-card h3 {
                    color: #ffffff;
                    margin: 0.75rem 0;
                }
                .service-card p {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                }
                .service-card .learn-more {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #d4af37;
                    font-weight: 600;
                }
                @media (max-width: 1000px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header">
                    <span class="section-eyebrow">{"Our Services"}</span>
                    <h2 class="section-title">{"Comprehensive Facial Care"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lede">
                        {"From minimally invasive procedures to complex reconstructive surgery, we offer the \
                          full continuum of facial plastic and aesthetic services."}
                    </p>
                </div>

                <div ref={grid} class={classes!("services-grid", "reveal", revealed.then_some("revealed"))}>
                    { for SERVICES.iter().map(|service| html! {
                        <article class="service-card" key={service.id} onclick={open(service)}>
                            <img src={service.image} alt={service.title} />
                            <div class="service-card-body">
                                <IconGlyph icon={service.icon} />
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <span class="learn-more">{"Learn More →"}</span>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
