use log::info;
use yew::prelude::*;

mod browser;
mod config;
mod data {
    pub mod content;
    pub mod faqs;
    pub mod gallery;
    pub mod services;
    pub mod testimonials;
}
mod routing {
    pub mod route;
    pub mod scroll_spy;
    pub mod store;
}
mod hooks {
    pub mod count_up;
    pub mod frame_loop;
    pub mod in_view;
    pub mod scrolled;
}
mod components {
    pub mod back_to_top;
    pub mod footer;
    pub mod icon;
    pub mod loading_screen;
    pub mod nav;
    pub mod toast;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod foundation;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod detail;
    pub mod gallery_detail;
    pub mod home;
    pub mod legal;
    pub mod privacy;
    pub mod service_detail;
    pub mod terms;
}

use components::{loading_screen::LoadingScreen, toast::ToastProvider};
use pages::{
    gallery_detail::GalleryDetail, home::Home, privacy::PrivacyPolicy,
    service_detail::ServiceDetail, terms::TermsOfService,
};
use routing::{route::Page, store::{use_navigator, HashRouter}};

fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Page::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Page::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Page::GalleryDetail(item) => {
            info!("Rendering gallery detail page for {}", item.id);
            html! { <GalleryDetail item={item} /> }
        }
        Page::ServiceDetail(service) => {
            info!("Rendering service detail page for {}", service.id);
            html! { <ServiceDetail service={service} /> }
        }
    }
}

/// Re-renders whenever the route store's fragment changes.
#[function_component(RouteView)]
fn route_view() -> Html {
    let page = use_navigator().page();

    use_effect_with_deps(
        |page| {
            browser::set_title(&page.document_title());
            || ()
        },
        page,
    );

    switch(page)
}

#[function_component]
fn App() -> Html {
    // Lives above the router so navigation never brings the splash back.
    let gate_done = use_state(|| false);

    if !*gate_done {
        let on_complete = {
            let gate_done = gate_done.clone();
            Callback::from(move |_: ()| gate_done.set(true))
        };
        return html! { <LoadingScreen on_complete={on_complete} /> };
    }

    html! {
        <HashRouter>
            <ToastProvider>
                <RouteView />
            </ToastProvider>
        </HashRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::Reducible;

    use crate::components::loading_screen::GatePhase;
    use crate::routing::route::Page;
    use crate::routing::store::{RouterAction, RouterState};

    #[test]
    fn privacy_then_cleared_fragment_returns_home_without_the_splash() {
        let mut gate = GatePhase::default();
        while gate != GatePhase::Done {
            gate = gate.advance();
        }

        let state = Rc::new(RouterState::from_fragment("#privacy-policy"));
        assert_eq!(state.page(), Page::Privacy);

        let state = state.reduce(RouterAction::FragmentChanged(String::new()));
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.pending_section, None);
        assert_eq!(gate.advance(), GatePhase::Done);
    }

    #[test]
    fn gallery_fragment_opens_on_the_cover_image() {
        match Page::resolve("gallery-rhinoplasty") {
            Page::GalleryDetail(item) => {
                assert_eq!(item.category, "Rhinoplasty");
                assert_eq!(Some(item.initial_image()), item.images.first().copied());
            }
            other => panic!("unexpected page {:?}", other),
        }
    }
}
