use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::routing::store::use_navigator;
use crate::sections::{
    about::About, contact::Contact, faq::FaqSection, foundation::Foundation, gallery::Gallery,
    hero::Hero, services::Services, testimonials::Testimonials,
};

/// The single-page site. Section order here is the order the
/// scroll-spy scans.
#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();

    // Anchors exist once this view has rendered, so a section scroll
    // requested from another page can finish here.
    {
        let pending = navigator.pending_section();
        use_effect_with_deps(
            move |_| {
                navigator.complete_pending_scroll();
                || ()
            },
            pending,
        );
    }

    html! {
        <div class="home">
            <Nav />
            <main>
                <Hero />
                <About />
                <Services />
                <Gallery />
                <Testimonials />
                <FaqSection />
                <Foundation />
                <Contact />
            </main>
            <Footer />
            <BackToTop />
        </div>
    }
}
