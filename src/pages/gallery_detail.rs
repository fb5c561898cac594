use yew::prelude::*;

use crate::browser;
use crate::components::footer::Footer;
use crate::components::icon::{Icon, IconGlyph};
use crate::components::nav::Nav;
use crate::data::content::neighbors;
use crate::data::gallery::{GalleryItem, GALLERY};
use crate::pages::detail::{DetailBody, ScheduleConsultation, DETAIL_STYLES};
use crate::routing::route::Page;
use crate::routing::scroll_spy::Section;
use crate::routing::store::use_navigator;

const HERO_IMAGE_ID: &str = "hero-image";

#[derive(Properties, PartialEq)]
pub struct GalleryDetailProps {
    pub item: &'static GalleryItem,
}

#[function_component(GalleryDetail)]
pub fn gallery_detail(props: &GalleryDetailProps) -> Html {
    let item = props.item;
    let navigator = use_navigator();
    let selected = use_state_eq(|| item.initial_image());

    {
        let selected = selected.clone();
        use_effect_with_deps(
            move |id| {
                log::debug!("Showing gallery entry {}", id);
                selected.set(item.initial_image());
                browser::scroll_to_top();
                || ()
            },
            item.id,
        );
    }

    let images = item.all_images();
    let (previous, next) = neighbors(&GALLERY, item.id);

    let back_to_gallery = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.scroll_to_section(Section::Gallery))
    };

    let open = |entry: &'static GalleryItem| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.open(Page::GalleryDetail(entry)))
    };

    html! {
        <div class="detail-page">
            <style>
                {DETAIL_STYLES}
                {r#"
                .thumb-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(120px, 1fr));
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .thumb {
                    position: relative;
                    aspect-ratio: 1;
                    padding: 0;
                    border: 2px solid transparent;
                    border-radius: 8px;
                    overflow: hidden;
                    cursor: pointer;
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }
                .thumb:hover {
                    border-color: rgba(212, 175, 55, 0.5);
                }
                .thumb.selected {
                    border-color: #d4af37;
                    transform: scale(1.05);
                    box-shadow: 0 0 0 3px rgba(212, 175, 55, 0.35);
                }
                .thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .entry-nav {
                    display: flex;
                    justify-content: space-between;
                    border-top: 1px solid #e5e7eb;
                    padding-top: 2rem;
                }
                .entry-nav button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #0a1628;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }
                .entry-nav button:hover {
                    color: #d4af37;
                }
                "#}
            </style>
            <Nav />
            <main class="detail-main">
                <div class="detail-header">
                    <button class="detail-back" onclick={back_to_gallery} aria-label="Back to Gallery">
                        <IconGlyph icon={Icon::ArrowLeft} />
                    </button>
                    <h1>{item.category}</h1>
                </div>
                <div class="section-rule left"></div>

                <div id={HERO_IMAGE_ID} class="detail-hero">
                    <img key={*selected} src={*selected} alt={item.category} />
                </div>

                if images.len() > 1 {
                    <>
                    <h2>{"Gallery"}</h2>
                    <div class="thumb-grid">
                        { for images.iter().enumerate().map(|(index, image)| {
                            let image: &'static str = *image;
                            let is_selected = *selected == image;
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| {
                                    selected.set(image);
                                    browser::scroll_to_element(HERO_IMAGE_ID);
                                })
                            };
                            html! {
                                <button key={index} class={classes!("thumb", is_selected.then_some("selected"))} {onclick}>
                                    <img src={image} alt={format!("{} - Image {}", item.category, index + 1)} />
                                </button>
                            }
                        }) }
                    </div>
                    </>
                }

                <DetailBody description={item.description} content={item.detailed_content.as_ref()} />
                <ScheduleConsultation />

                <div class="entry-nav">
                    if let Some(previous) = previous {
                        <button onclick={open(previous)}>
                            <IconGlyph icon={Icon::ChevronLeft} />
                            <span>{previous.category}</span>
                        </button>
                    } else {
                        <div></div>
                    }
                    if let Some(next) = next {
                        <button onclick={open(next)}>
                            <span>{next.category}</span>
                            <IconGlyph icon={Icon::ChevronRight} />
                        </button>
                    } else {
                        <div></div>
                    }
                </div>
            </main>
            <Footer />
        </div>
    }
}
