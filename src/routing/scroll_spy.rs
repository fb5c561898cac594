use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::browser::{self, WindowListener};
use crate::config;

/// Anchored sections of the home page, in DOM order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Gallery,
    Reviews,
    Faq,
    Foundation,
    Contact,
}

impl Section {
    pub const ORDER: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Gallery,
        Section::Reviews,
        Section::Faq,
        Section::Foundation,
        Section::Contact,
    ];

    /// Element id of the section's anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Gallery => "gallery",
            Section::Reviews => "reviews",
            Section::Faq => "faq",
            Section::Foundation => "foundation",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Gallery => "Gallery",
            Section::Reviews => "Reviews",
            Section::Faq => "FAQ",
            Section::Foundation => "Foundation",
            Section::Contact => "Contact",
        }
    }
}

/// Scans `ORDER` from last to first and returns the first section whose
/// top offset is at or above `adjusted_offset`. Sections whose anchor is
/// not mounted (`None`) are skipped.
pub fn section_at(adjusted_offset: f64, top_of: impl Fn(Section) -> Option<f64>) -> Option<Section> {
    Section::ORDER
        .iter()
        .rev()
        .copied()
        .find(|section| matches!(top_of(*section), Some(top) if top <= adjusted_offset))
}

/// Tracks the section currently under the navigation bar. When no
/// section has been reached yet the previous answer is kept, starting
/// from the first section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSpy {
    current: Section,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            current: Section::ORDER[0],
        }
    }
}

impl ScrollSpy {
    pub fn current(&self) -> Section {
        self.current
    }

    /// Re-evaluates against the raw scroll position. Returns true when
    /// the current section changed.
    pub fn observe(&mut self, scroll_y: f64, top_of: impl Fn(Section) -> Option<f64>) -> bool {
        let adjusted = scroll_y + config::NAV_OFFSET_PX;
        match section_at(adjusted, top_of) {
            Some(section) if section != self.current => {
                self.current = section;
                true
            }
            _ => false,
        }
    }
}

/// Section currently topmost in the viewport, re-evaluated on every
/// scroll event while the calling component is mounted.
#[hook]
pub fn use_scroll_spy() -> Section {
    let current = use_state_eq(|| Section::ORDER[0]);

    {
        let current = current.clone();
        use_effect_with_deps(
            move |_| {
                let spy = Rc::new(RefCell::new(ScrollSpy::default()));
                let check = move || {
                    let mut spy = spy.borrow_mut();
                    let top_of = |section: Section| browser::element_top(section.anchor());
                    if spy.observe(browser::scroll_y(), top_of) {
                        log::debug!("Active section: {:?}", spy.current());
                    }
                    current.set(spy.current());
                };

                check(); // Initial check
                let listener = WindowListener::new("scroll", check);

                move || drop(listener)
            },
            (),
        );
    }

    *current
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tops roughly as laid out on a desktop viewport.
    fn layout(section: Section) -> Option<f64> {
        Some(match section {
            Section::Home => 0.0,
            Section::About => 900.0,
            Section::Services => 1800.0,
            Section::Gallery => 2900.0,
            Section::Reviews => 3800.0,
            Section::Faq => 4500.0,
            Section::Foundation => 5600.0,
            Section::Contact => 6700.0,
        })
    }

    #[test]
    fn starts_on_the_first_section() {
        assert_eq!(ScrollSpy::default().current(), Section::Home);
        let mut spy = ScrollSpy::default();
        assert!(!spy.observe(0.0, layout));
        assert_eq!(spy.current(), Section::Home);
    }

    #[test]
    fn nav_offset_is_added_before_comparing() {
        let mut spy = ScrollSpy::default();
        spy.observe(900.0 - config::NAV_OFFSET_PX - 1.0, layout);
        assert_eq!(spy.current(), Section::Home);
        spy.observe(900.0 - config::NAV_OFFSET_PX, layout);
        assert_eq!(spy.current(), Section::About);
    }

    #[test]
    fn increasing_scroll_walks_forward_through_sections() {
        let mut spy = ScrollSpy::default();
        let mut seen = vec![spy.current()];
        let mut y = 0.0;
        while y < 8000.0 {
            if spy.observe(y, layout) {
                seen.push(spy.current());
            }
            y += 37.0;
        }
        assert_eq!(seen, Section::ORDER.to_vec());
    }

    #[test]
    fn ties_resolve_toward_the_lower_section() {
        // About and Services share a top offset; both are passed.
        let top_of = |section: Section| match section {
            Section::Home => Some(0.0),
            Section::About | Section::Services => Some(500.0),
            _ => Some(10_000.0),
        };
        assert_eq!(section_at(600.0, top_of), Some(Section::Services));
    }

    #[test]
    fn absent_anchors_are_skipped() {
        let top_of = |section: Section| match section {
            Section::Gallery => None,
            other => layout(other),
        };
        assert_eq!(section_at(3000.0, top_of), Some(Section::Services));
        assert_eq!(section_at(4000.0, top_of), Some(Section::Reviews));
    }

    #[test]
    fn keeps_previous_section_when_nothing_is_reached() {
        let mut spy = ScrollSpy::default();
        spy.observe(1000.0, layout);
        assert_eq!(spy.current(), Section::About);

        // A view with none of the anchors mounted.
        assert!(!spy.observe(1000.0, |_| None));
        assert_eq!(spy.current(), Section::About);

        // Every anchor is below the viewport.
        assert_eq!(section_at(10.0, |_| Some(500.0)), None);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<_> = Section::ORDER.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ORDER.len());
    }
}
