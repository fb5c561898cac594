use yew::prelude::*;

use crate::routing::scroll_spy::Section;
use crate::routing::store::use_navigator;

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_navigator();
    let book = Callback::from(move |_: MouseEvent| navigator.scroll_to_section(Section::Contact));

    html! {
        <section id={Section::Home.anchor()} class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                }
                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: heroZoom 1.6s ease-out;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(10, 22, 40, 0.95) 0%, rgba(10, 22, 40, 0.7) 50%, rgba(10, 22, 40, 0.3) 100%);
                }
                .hero-content {
                    position: relative;
                    max-width: 1280px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                }
                .hero-inner {
                    max-width: 640px;
                    animation: fadeUp 0.8s ease-out both;
                }
                .hero h1 {
                    font-size: clamp(3rem, 7vw, 5.5rem);
                    line-height: 1.05;
                    color: #ffffff;
                    margin: 1.25rem 0 1.5rem;
                }
                .hero h1 span {
                    display: block;
                    color: #d4af37;
                }
                .hero p {
                    font-size: 1.2rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 2.5rem;
                }
                .scroll-indicator {
                    position: absolute;
                    left: 50%;
                    bottom: 2rem;
                    width: 26px;
                    height: 42px;
                    margin-left: -13px;
                    border: 2px solid rgba(212, 175, 55, 0.6);
                    border-radius: 13px;
                }
                .scroll-indicator::after {
                    content: '';
                    position: absolute;
                    left: 50%;
                    top: 8px;
                    width: 4px;
                    height: 8px;
                    margin-left: -2px;
                    border-radius: 2px;
                    background: #d4af37;
                    animation: scrollDot 1.6s ease-in-out infinite;
                }
                @keyframes heroZoom {
                    from { transform: scale(1.1); }
                    to { transform: scale(1); }
                }
                @keyframes scrollDot {
                    0% { transform: translateY(0); opacity: 1; }
                    100% { transform: translateY(14px); opacity: 0; }
                }
                "#}
            </style>
            <div class="hero-background">
                <img src="/assets/hero.webp" alt="Dr. Obayemi with Patient" />
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <div class="hero-inner">
                    <span class="section-eyebrow">{"Welcome to AO Facial Plastics"}</span>
                    <h1>
                        {"The Facial"}
                        <span>{"Architect"}</span>
                    </h1>
                    <p>
                        {"Dual board-certified head and neck and facial plastic surgeon dedicated to \
                          enhancing natural beauty through advanced surgical techniques and personalized care."}
                    </p>
                    <button class="btn-gold" onclick={book}>{"Schedule Free Consultation"}</button>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true"></div>
        </section>
    }
}
