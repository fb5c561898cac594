use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::icon::{Icon, IconGlyph};
use crate::config;
use crate::data::gallery::{GalleryItem, GALLERY};
use crate::hooks::in_view::use_in_view;
use crate::routing::route::Page;
use crate::routing::scroll_spy::Section;
use crate::routing::store::use_navigator;

/// Index into a ring of `len` entries. All movement wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Out-of-range indices are ignored.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// `(previous, current, next)` indices for the three-up stack.
    pub fn visible(&self) -> (usize, usize, usize) {
        (self.prev().index(), self.index, self.next().index())
    }
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Advance => self.next(),
            CarouselAction::Select(index) => self.select(index),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StackPosition {
    Left,
    Center,
    Right,
}

impl StackPosition {
    fn max_images(self) -> usize {
        match self {
            StackPosition::Left => 3,
            StackPosition::Center => 5,
            StackPosition::Right => 4,
        }
    }

    fn class(self) -> &'static str {
        match self {
            StackPosition::Left => "stack-left",
            StackPosition::Center => "stack-center",
            StackPosition::Right => "stack-right",
        }
    }
}

#[derive(Properties, PartialEq)]
struct CardStackProps {
    item: &'static GalleryItem,
    position: StackPosition,
    onclick: Callback<MouseEvent>,
}

#[function_component(CardStack)]
fn card_stack(props: &CardStackProps) -> Html {
    let item = props.item;
    let images: Vec<&str> = item
        .all_images()
        .iter()
        .copied()
        .take(props.position.max_images())
        .collect();
    let count = images.len();
    let fan = (count as f64 - 1.0).max(0.0);

    html! {
        <div class={classes!("card-stack", props.position.class())} onclick={props.onclick.clone()}>
            { for images.iter().enumerate().map(|(index, image)| {
                let i = index as f64;
                let style = format!(
                    "transform: translate({:.1}px, {:.1}px) rotate({:.1}deg); z-index: {}; opacity: {:.2};",
                    (i - fan / 9.0) * 20.0,
                    i * 5.0,
                    (i - fan / 3.0) * 4.0,
                    count - index,
                    1.0 - i * 0.05,
                );
                html! {
                    <div class="stack-card" key={index} {style}>
                        <img src={*image} alt={format!("{} - Image {}", item.category, index + 1)} />
                        <div class="stack-shade"></div>
                        if index == 0 {
                            <>
                                <div class="stack-caption">
                                    <h3>{item.category}</h3>
                                    <p>{item.description}</p>
                                </div>
                                if count > 1 {
                                    <span class="stack-count">{format!("{} images", count)}</span>
                                }
                            </>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let navigator = use_navigator();
    let carousel = use_reducer_eq(|| Carousel::new(GALLERY.len()));
    let container = use_node_ref();
    let in_view = use_in_view(container.clone(), "-100px");
    let hovered = use_state_eq(|| false);
    let held = use_state_eq(|| false);
    let resume = use_mut_ref(|| None::<Timeout>);

    let autoplay_ms = if in_view && !*hovered && !*held {
        config::CAROUSEL_AUTOPLAY_MS
    } else {
        0
    };
    {
        let carousel = carousel.clone();
        use_interval(move || carousel.dispatch(CarouselAction::Advance), autoplay_ms);
    }

    // Picking a card by hand holds autoplay for a while.
    let pick = {
        let carousel = carousel.clone();
        let held = held.clone();
        move |index: usize| {
            let carousel = carousel.clone();
            let held = held.clone();
            let resume = resume.clone();
            Callback::from(move |_: MouseEvent| {
                held.set(true);
                carousel.dispatch(CarouselAction::Select(index));
                let held = held.clone();
                *resume.borrow_mut() = Some(Timeout::new(config::CAROUSEL_RESUME_MS, move || {
                    held.set(false);
                }));
            })
        }
    };

    let (left, center, right) = carousel.visible();
    let open_center = {
        let item = &GALLERY[center];
        Callback::from(move |_: MouseEvent| navigator.open(Page::GalleryDetail(item)))
    };

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <section id={Section::Gallery.anchor()} class="gallery section-dark">
            <style>
                {r#"
                .gallery-stage {
                    position: relative;
                    height: 640px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .card-stack {
                    position: absolute;
                    cursor: pointer;
                    transition: transform 0.5s ease, opacity 0.5s ease;
                }
                .stack-center {
                    width: 420px;
                    height: 560px;
                    z-index: 3;
                    animation: stackIn 0.6s ease-out;
                }
                .stack-left,
                .stack-right {
                    width: 300px;
                    height: 400px;
                    opacity: 0.6;
                    z-index: 1;
                }
                .stack-left {
                    transform: translateX(-180px) scale(0.7);
                }
                .stack-right {
                    transform: translateX(180px) scale(0.7);
                }
                .stack-left:hover,
                .stack-right:hover {
                    opacity: 0.85;
                }
                .stack-card {
                    position: absolute;
                    inset: 0;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.45);
                    transform-origin: center center;
                    transition: transform 0.3s ease;
                }
                .stack-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .stack-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(10, 22, 40, 0.9), transparent 60%);
                }
                .stack-caption {
                    position: absolute;
                    left: 1.5rem;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    color: #ffffff;
                }
                .stack-caption h3 {
                    color: #d4af37;
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .stack-caption p {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .stack-count {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.3rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(212, 175, 55, 0.9);
                    color: #0a1628;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .gallery-hint {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #d4af37;
                    text-align: center;
                    font-size: 0.9rem;
                    z-index: 4;
                }
                .gallery-hint .icon {
                    display: block;
                    animation: hintBob 1.5s ease-in-out infinite;
                }
                .gallery-dots {
                    position: absolute;
                    bottom: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                }
                .gallery-dot {
                    width: 8px;
                    height: 8px;
                    border: none;
                    border-radius: 999px;
                    background: #4b5563;
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .gallery-dot.active {
                    width: 32px;
                    background: #d4af37;
                }
                @keyframes stackIn {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes hintBob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(5px); }
                }
                @media (max-width: 900px) {
                    .stack-left,
                    .stack-right {
                        display: none;
                    }
                    .stack-center {
                        width: 280px;
                        height: 430px;
                    }
                }
                "#}
            </style>
            <div ref={container} class="section-container">
                <div class={classes!("section-header", "reveal", in_view.then_some("revealed"))}>
                    <span class="section-eyebrow">{"Gallery"}</span>
                    <h2 class="section-title">{"Beautiful Results"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lede">
                        {"Explore our portfolio of transformative results. Each procedure is tailored to \
                          enhance natural beauty while maintaining facial harmony."}
                    </p>
                </div>

                <div class="gallery-stage" onmouseenter={on_enter} onmouseleave={on_leave}>
                    <div class="gallery-hint" key={format!("hint-{}", center)}>
                        <p>{"Click to view more"}</p>
                        <IconGlyph icon={Icon::ChevronDown} />
                    </div>

                    <CardStack item={&GALLERY[left]} position={StackPosition::Left} onclick={pick(left)} />
                    <CardStack
                        key={GALLERY[center].id}
                        item={&GALLERY[center]}
                        position={StackPosition::Center}
                        onclick={open_center}
                    />
                    <CardStack item={&GALLERY[right]} position={StackPosition::Right} onclick={pick(right)} />

                    <div class="gallery-dots">
                        { for GALLERY.iter().enumerate().map(|(index, item)| html! {
                            <button
                                class={classes!("gallery-dot", (index == center).then_some("active"))}
                                aria-label={format!("Go to {}", item.category)}
                                onclick={pick(index)}
                            />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_then_prev_is_identity() {
        let carousel = Carousel::new(7).select(3);
        assert_eq!(carousel.next().prev(), carousel);
        assert_eq!(carousel.prev().next(), carousel);
    }

    #[test]
    fn movement_wraps_both_ways() {
        let carousel = Carousel::new(7);
        assert_eq!(carousel.prev().index(), 6);
        assert_eq!(carousel.select(6).next().index(), 0);
    }

    #[test]
    fn visible_triplet_surrounds_the_current_entry() {
        assert_eq!(Carousel::new(7).visible(), (6, 0, 1));
        assert_eq!(Carousel::new(7).select(4).visible(), (3, 4, 5));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let carousel = Carousel::new(7).select(2);
        assert_eq!(carousel.select(7), carousel);
    }

    #[test]
    fn empty_ring_stays_put() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.next(), carousel);
        assert_eq!(carousel.prev(), carousel);
    }

    #[test]
    fn full_cycle_over_the_gallery_returns_to_start() {
        let start = Carousel::new(GALLERY.len());
        let mut carousel = start;
        for _ in 0..GALLERY.len() {
            carousel = carousel.next();
        }
        assert_eq!(carousel, start);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_moves() {
        let state = Rc::new(Carousel::new(7).select(5));
        let same = state.clone().reduce(CarouselAction::Select(5));
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.reduce(CarouselAction::Advance);
        assert_eq!(moved.index(), 6);
    }
}
