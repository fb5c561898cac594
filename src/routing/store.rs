use std::rc::Rc;

use yew::prelude::*;

use super::route::{strip_delimiter, Page};
use super::scroll_spy::Section;
use crate::browser::{self, WindowListener};

/// Single authoritative copy of the location fragment, plus a section
/// the home view should scroll to once it has mounted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouterState {
    pub fragment: String,
    pub pending_section: Option<Section>,
}

pub enum RouterAction {
    FragmentChanged(String),
    /// Scroll to this section as soon as the home view is mounted.
    ScrollAfterMount(Section),
    PendingScrollHandled,
}

impl Reducible for RouterState {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RouterAction::FragmentChanged(raw) => {
                let fragment = strip_delimiter(&raw).to_string();
                if fragment == self.fragment {
                    return self;
                }
                // Leaving for another page abandons a scroll that was
                // waiting for home.
                let pending_section = if fragment.is_empty() {
                    self.pending_section
                } else {
                    None
                };
                Rc::new(Self {
                    fragment,
                    pending_section,
                })
            }
            RouterAction::ScrollAfterMount(section) => Rc::new(Self {
                fragment: self.fragment.clone(),
                pending_section: Some(section),
            }),
            RouterAction::PendingScrollHandled => {
                if self.pending_section.is_none() {
                    return self;
                }
                Rc::new(Self {
                    fragment: self.fragment.clone(),
                    pending_section: None,
                })
            }
        }
    }
}

impl RouterState {
    pub fn from_fragment(fragment: &str) -> Self {
        Self {
            fragment: strip_delimiter(fragment).to_string(),
            pending_section: None,
        }
    }

    pub fn page(&self) -> Page {
        Page::resolve(&self.fragment)
    }
}

/// What a click on a section link has to do from the current fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionNav {
    ScrollNow,
    ClearThenScroll,
}

pub fn plan_section_nav(fragment: &str) -> SectionNav {
    if strip_delimiter(fragment).is_empty() {
        SectionNav::ScrollNow
    } else {
        SectionNav::ClearThenScroll
    }
}

pub type RouterHandle = UseReducerHandle<RouterState>;

#[derive(Properties, PartialEq)]
pub struct HashRouterProps {
    pub children: Children,
}

/// Owns the `hashchange` subscription and provides the route store to
/// its children.
#[function_component(HashRouter)]
pub fn hash_router(props: &HashRouterProps) -> Html {
    let router = use_reducer_eq(|| RouterState::from_fragment(&browser::current_fragment()));

    {
        let router = router.clone();
        use_effect_with_deps(
            move |_| {
                // The fragment may have moved between first render and now.
                router.dispatch(RouterAction::FragmentChanged(browser::current_fragment()));

                let listener = WindowListener::new("hashchange", move || {
                    router.dispatch(RouterAction::FragmentChanged(browser::current_fragment()));
                });

                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <ContextProvider<RouterHandle> context={router}>
            { for props.children.iter() }
        </ContextProvider<RouterHandle>>
    }
}

/// The only writer of `location.hash`. Readers re-derive their view
/// from the store instead of touching `location` directly.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    router: RouterHandle,
}

impl Navigator {
    pub fn page(&self) -> Page {
        self.router.page()
    }

    pub fn pending_section(&self) -> Option<Section> {
        self.router.pending_section
    }

    pub fn scroll_to_section(&self, section: Section) {
        match plan_section_nav(&self.router.fragment) {
            SectionNav::ScrollNow => {
                browser::scroll_to_element(section.anchor());
            }
            SectionNav::ClearThenScroll => {
                self.router.dispatch(RouterAction::ScrollAfterMount(section));
                browser::set_fragment("");
            }
        }
    }

    /// Called by the home view once its anchors exist.
    pub fn complete_pending_scroll(&self) {
        if let Some(section) = self.router.pending_section {
            browser::scroll_to_element(section.anchor());
            self.router.dispatch(RouterAction::PendingScrollHandled);
        }
    }

    pub fn go_home(&self) {
        browser::set_fragment("");
        browser::scroll_to_top();
    }

    pub fn open(&self, page: Page) {
        browser::set_fragment(&page.fragment());
        browser::scroll_to_top();
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    let router = use_context::<RouterHandle>().expect("HashRouter must wrap every routed view");
    Navigator { router }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: RouterState, actions: Vec<RouterAction>) -> RouterState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn page_is_recomputed_from_the_fragment() {
        let state = apply(
            RouterState::default(),
            vec![RouterAction::FragmentChanged("#terms-of-service".into())],
        );
        assert_eq!(state.fragment, "terms-of-service");
        assert_eq!(state.page(), Page::Terms);

        let state = apply(state, vec![RouterAction::FragmentChanged("".into())]);
        assert_eq!(state.page(), Page::Home);
        assert!(state.fragment.is_empty());
    }

    #[test]
    fn unchanged_fragment_keeps_the_same_state() {
        let state = Rc::new(RouterState::from_fragment("privacy-policy"));
        let next = state.clone().reduce(RouterAction::FragmentChanged("#privacy-policy".into()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn section_click_plans_depend_on_the_fragment() {
        assert_eq!(plan_section_nav(""), SectionNav::ScrollNow);
        assert_eq!(plan_section_nav("#"), SectionNav::ScrollNow);
        assert_eq!(plan_section_nav("privacy-policy"), SectionNav::ClearThenScroll);
        assert_eq!(plan_section_nav("gallery-rhinoplasty"), SectionNav::ClearThenScroll);
    }

    #[test]
    fn pending_scroll_survives_the_return_home() {
        let state = apply(
            RouterState::from_fragment("privacy-policy"),
            vec![
                RouterAction::ScrollAfterMount(Section::Contact),
                RouterAction::FragmentChanged("".into()),
            ],
        );
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.pending_section, Some(Section::Contact));

        let state = apply(state, vec![RouterAction::PendingScrollHandled]);
        assert_eq!(state.pending_section, None);
    }

    #[test]
    fn navigating_elsewhere_drops_the_pending_scroll() {
        let state = apply(
            RouterState::from_fragment("privacy-policy"),
            vec![
                RouterAction::ScrollAfterMount(Section::Faq),
                RouterAction::FragmentChanged("terms-of-service".into()),
            ],
        );
        assert_eq!(state.page(), Page::Terms);
        assert_eq!(state.pending_section, None);
    }
}
