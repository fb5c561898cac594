use crate::config;
use crate::data::content::find_by_id;
use crate::data::gallery::{GalleryItem, GALLERY};
use crate::data::services::{Service, SERVICES};

pub const PRIVACY_FRAGMENT: &str = "privacy-policy";
pub const TERMS_FRAGMENT: &str = "terms-of-service";
pub const GALLERY_PREFIX: &str = "gallery-";
pub const SERVICE_PREFIX: &str = "service-";

/// Top-level view chosen from the location fragment. Never stored on
/// its own: it is recomputed from the fragment on every change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Home,
    Privacy,
    Terms,
    GalleryDetail(&'static GalleryItem),
    ServiceDetail(&'static Service),
}

impl Page {
    pub fn resolve(fragment: &str) -> Page {
        Self::resolve_in(fragment, &GALLERY, &SERVICES)
    }

    /// Detail entries win over reserved literals; anything unresolved
    /// is home.
    pub fn resolve_in(
        fragment: &str,
        gallery: &'static [GalleryItem],
        services: &'static [Service],
    ) -> Page {
        let fragment = strip_delimiter(fragment);

        if let Some(item) = fragment
            .strip_prefix(GALLERY_PREFIX)
            .and_then(|id| find_by_id(gallery, id))
        {
            return Page::GalleryDetail(item);
        }
        if let Some(service) = fragment
            .strip_prefix(SERVICE_PREFIX)
            .and_then(|id| find_by_id(services, id))
        {
            return Page::ServiceDetail(service);
        }

        match fragment {
            PRIVACY_FRAGMENT => Page::Privacy,
            TERMS_FRAGMENT => Page::Terms,
            _ => Page::Home,
        }
    }

    /// Fragment that resolves back to this page.
    pub fn fragment(&self) -> String {
        match self {
            Page::Home => String::new(),
            Page::Privacy => PRIVACY_FRAGMENT.to_string(),
            Page::Terms => TERMS_FRAGMENT.to_string(),
            Page::GalleryDetail(item) => format!("{}{}", GALLERY_PREFIX, item.id),
            Page::ServiceDetail(service) => format!("{}{}", SERVICE_PREFIX, service.id),
        }
    }

    /// `href` value for links to this page.
    pub fn fragment_href(&self) -> String {
        format!("#{}", self.fragment())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms of Service",
            Page::GalleryDetail(item) => item.category,
            Page::ServiceDetail(service) => service.title,
        }
    }

    pub fn document_title(&self) -> String {
        match self {
            Page::Home => config::PRACTICE_NAME.to_string(),
            page => format!("{} | {}", page.title(), config::PRACTICE_NAME),
        }
    }
}

pub fn strip_delimiter(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icon::Icon;
    use crate::data::content::DetailedContent;

    #[test]
    fn reserved_literals_resolve_to_their_pages() {
        assert_eq!(Page::resolve("privacy-policy"), Page::Privacy);
        assert_eq!(Page::resolve("terms-of-service"), Page::Terms);
        assert_eq!(Page::resolve("#privacy-policy"), Page::Privacy);
    }

    #[test]
    fn every_gallery_entry_resolves_to_its_detail_view() {
        for item in GALLERY.iter() {
            match Page::resolve(&format!("gallery-{}", item.id)) {
                Page::GalleryDetail(found) => {
                    assert_eq!(found.category, item.category);
                    assert_eq!(found.description, item.description);
                }
                other => panic!("gallery-{} resolved to {:?}", item.id, other),
            }
        }
    }

    #[test]
    fn every_service_resolves_to_its_detail_view() {
        for service in SERVICES.iter() {
            match Page::resolve(&format!("service-{}", service.id)) {
                Page::ServiceDetail(found) => {
                    assert_eq!(found.title, service.title);
                    assert_eq!(found.description, service.description);
                }
                other => panic!("service-{} resolved to {:?}", service.id, other),
            }
        }
    }

    #[test]
    fn unknown_fragments_fall_back_to_home() {
        for fragment in [
            "",
            "#",
            "home",
            "garbage",
            "gallery-",
            "gallery-does-not-exist",
            "service-",
            "service-rhinoplasty-2",
            "rhinoplasty",
            "PRIVACY-POLICY",
            "privacy-policy ",
            "gallery-RHINOPLASTY",
            "🦀",
        ] {
            assert_eq!(Page::resolve(fragment), Page::Home, "{:?}", fragment);
        }
    }

    #[test]
    fn same_id_in_both_tables_is_disambiguated_by_namespace() {
        assert!(matches!(
            Page::resolve("gallery-rhinoplasty"),
            Page::GalleryDetail(item) if item.category == "Rhinoplasty"
        ));
        assert!(matches!(
            Page::resolve("service-rhinoplasty"),
            Page::ServiceDetail(service) if service.title == "Rhinoplasty"
        ));
    }

    #[test]
    fn fragment_round_trips_through_resolve() {
        let mut pages = vec![Page::Home, Page::Privacy, Page::Terms];
        pages.extend(GALLERY.iter().map(Page::GalleryDetail));
        pages.extend(SERVICES.iter().map(Page::ServiceDetail));
        for page in pages {
            assert_eq!(Page::resolve(&page.fragment()), page);
        }
    }

    static PRIVACY_SHADOW: [GalleryItem; 1] = [GalleryItem {
        id: "privacy-policy",
        category: "Shadow",
        image: "/assets/shadow.jpg",
        images: &[],
        description: "",
        detailed_content: None,
    }];

    static NO_SERVICES: [Service; 0] = [];

    #[test]
    fn detail_lookup_runs_before_reserved_literals() {
        let page = Page::resolve_in("gallery-privacy-policy", &PRIVACY_SHADOW, &NO_SERVICES);
        assert_eq!(page, Page::GalleryDetail(&PRIVACY_SHADOW[0]));
        // The bare literal still names the static page.
        let page = Page::resolve_in("privacy-policy", &PRIVACY_SHADOW, &NO_SERVICES);
        assert_eq!(page, Page::Privacy);
    }

    static ONE_SERVICE: [Service; 1] = [Service {
        id: "only",
        icon: Icon::Star,
        title: "Only",
        description: "",
        image: "",
        detailed_content: Some(DetailedContent::EMPTY),
    }];

    #[test]
    fn resolution_uses_the_injected_tables() {
        assert_eq!(
            Page::resolve_in("service-only", &[], &ONE_SERVICE),
            Page::ServiceDetail(&ONE_SERVICE[0])
        );
        assert_eq!(Page::resolve_in("service-rhinoplasty", &[], &ONE_SERVICE), Page::Home);
    }

    #[test]
    fn document_title_names_the_page_and_the_practice() {
        assert_eq!(Page::Home.document_title(), "AO Facial Plastics");
        assert_eq!(Page::Privacy.document_title(), "Privacy Policy | AO Facial Plastics");
        assert_eq!(
            Page::resolve("gallery-rhinoplasty").document_title(),
            "Rhinoplasty | AO Facial Plastics"
        );
    }
}
