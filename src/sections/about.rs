use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::hooks::in_view::use_in_view;
use crate::routing::scroll_spy::Section;

struct Highlight {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: Icon::Award,
        title: "Excellence",
        description: "Dual board-certified in facial plastics and head & neck surgery",
    },
    Highlight {
        icon: Icon::GraduationCap,
        title: "Education",
        description: "MD MBA with advanced surgical training",
    },
    Highlight {
        icon: Icon::Heart,
        title: "Mentorship",
        description: "Dedicated to empowering the next generation of surgeons",
    },
    Highlight {
        icon: Icon::Globe,
        title: "Global Impact",
        description: "Serving patients worldwide through foundation initiatives",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    let body = use_node_ref();
    let revealed = use_in_view(body.clone(), "-100px");

    html! {
        <section id={Section::About.anchor()} class="about section-light">
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .about-portrait {
                    position: relative;
                }
                .about-portrait img {
                    width: 100%;
                    border-radius: 8px;
                    box-shadow: 0 20px 50px rgba(10, 22, 40, 0.25);
                }
                .about-badge {
                    position: absolute;
                    right: -1.5rem;
                    bottom: -1.5rem;
                    background: #d4af37;
                    color: #0a1628;
                    padding: 1.25rem 1.5rem;
                    border-radius: 8px;
                    font-weight: 700;
                    text-align: center;
                    line-height: 1.3;
                }
                .about-copy h3 {
                    font-size: 1.75rem;
                    color: #0a1628;
                    margin-bottom: 1.25rem;
                }
                .about-copy p {
                    color: #4b5563;
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }
                .about-highlights {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin: 2rem 0;
                }
                .about-highlight {
                    display: flex;
                    gap: 1rem;
                }
                .about-highlight .icon {
                    flex-shrink: 0;
                    width: 44px;
                    height: 44px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(212, 175, 55, 0.15);
                }
                .about-highlight h4 {
                    color: #0a1628;
                    margin-bottom: 0.25rem;
                }
                .about-highlight p {
                    font-size: 0.9rem;
                    margin: 0;
                }
                .about-video {
                    width: 100%;
                    border-radius: 8px;
                }
                @media (max-width: 900px) {
                    .about-grid,
                    .about-highlights {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header">
                    <span class="section-eyebrow">{"About"}</span>
                    <h2 class="section-title">{"Meet Ade Obayemi Jr MD MBA"}</h2>
                    <div class="section-rule"></div>
                </div>

                <div ref={body} class={classes!("about-grid", "reveal", revealed.then_some("revealed"))}>
                    <div class="about-portrait">
                        <img src="/assets/dr-obayemi.png" alt="Dr. Ade Obayemi Jr" />
                        <div class="about-badge">
                            <div>{"Dual Board"}</div>
                            <div>{"Certified"}</div>
                        </div>
                    </div>

                    <div class="about-copy">
                        <h3>{"Precision. Artistry. Excellence."}</h3>
                        <p>
                            {"Dr. Ade Obayemi Jr, MD MBA, is a dual board-certified facial plastic and \
                              reconstructive surgeon with a unique understanding of both the structure and \
                              function of the face. His journey combines surgical precision with artistic \
                              vision to deliver exceptional, natural-looking results."}
                        </p>
                        <p>
                            {"With advanced training in both cosmetic and reconstructive procedures, Dr. \
                              Obayemi brings a comprehensive approach to facial aesthetics. His expertise \
                              spans from minimally invasive treatments to complex surgical procedures, \
                              always prioritizing patient safety and satisfaction."}
                        </p>

                        <div class="about-highlights">
                            { for HIGHLIGHTS.iter().map(|highlight| html! {
                                <div class="about-highlight">
                                    <IconGlyph icon={highlight.icon} />
                                    <div>
                                        <h4>{highlight.title}</h4>
                                        <p>{highlight.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <video class="about-video" src="/assets/about.mp4" autoplay=true loop=true muted=true playsinline=true controls=true />
                    </div>
                </div>
            </div>
        </section>
    }
}
