use yew::prelude::*;

use crate::browser;
use crate::components::footer::Footer;
use crate::components::icon::{Icon, IconGlyph};
use crate::components::nav::Nav;
use crate::data::services::Service;
use crate::pages::detail::{DetailBody, ScheduleConsultation, DETAIL_STYLES};
use crate::routing::scroll_spy::Section;
use crate::routing::store::use_navigator;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub service: &'static Service,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let service = props.service;
    let navigator = use_navigator();

    use_effect_with_deps(
        |_| {
            browser::scroll_to_top();
            || ()
        },
        service.id,
    );

    let back_to_services =
        Callback::from(move |_: MouseEvent| navigator.scroll_to_section(Section::Services));

    html! {
        <div class="detail-page">
            <style>{DETAIL_STYLES}</style>
            <Nav />
            <main class="detail-main">
                <button class="detail-back labelled" onclick={back_to_services}>
                    <IconGlyph icon={Icon::ArrowLeft} />
                    <span>{"Back to Services"}</span>
                </button>
                <div class="detail-header">
                    <h1>{service.title}</h1>
                </div>
                <div class="section-rule left"></div>

                <div class="detail-hero">
                    <img src={service.image} alt={service.title} />
                </div>

                <DetailBody description={service.description} content={service.detailed_content.as_ref()} />
                <ScheduleConsultation />
            </main>
            <Footer />
        </div>
    }
}
