use std::fmt;
use std::rc::Rc;

use log::{info, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Every view the shell can show. The set is closed; anything arriving as a
/// string goes through [`Page::resolve_id`] and lands on `NotFound` when it
/// doesn't match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Services,
    Audit,
    Implementation,
    Fractional,
    Corporate,
    About,
    Resources,
    Contact,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::Services,
        Page::Audit,
        Page::Implementation,
        Page::Fractional,
        Page::Corporate,
        Page::About,
        Page::Resources,
        Page::Contact,
        Page::NotFound,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::Audit => "audit",
            Page::Implementation => "implementation",
            Page::Fractional => "fractional",
            Page::Corporate => "corporate",
            Page::About => "about",
            Page::Resources => "resources",
            Page::Contact => "contact",
            Page::NotFound => "not-found",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    pub fn resolve_id(id: &str) -> Page {
        Page::from_id(id).unwrap_or_else(|| {
            warn!("Unknown page id {:?}, falling back to not-found", id);
            Page::NotFound
        })
    }

    /// Text used for the page in the header menus.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::Audit => "brand experience audit",
            Page::Implementation => "full implementation",
            Page::Fractional => "fractional consulting",
            Page::Corporate => "workshops & training",
            Page::About => "about",
            Page::Resources => "resources",
            Page::Contact => "contact",
            Page::NotFound => "not found",
        }
    }

    /// Page to open with when the site is entered through a link such as
    /// `/#audit`. The hash is read once; navigation never writes it back.
    pub fn from_entry_hash(hash: &str) -> Page {
        match hash.trim_start_matches('#') {
            "" => Page::Home,
            id => Page::resolve_id(id),
        }
    }

    /// The services hub and the four detail pages share the "services"
    /// highlight in the header.
    pub fn is_service_section(self) -> bool {
        matches!(
            self,
            Page::Services | Page::Audit | Page::Implementation | Page::Fractional | Page::Corporate
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub page: Page,
    pub menu_open: bool,
    pub dropdown_open: bool,
}

impl NavState {
    pub fn starting_at(page: Page) -> Self {
        NavState {
            page,
            ..NavState::default()
        }
    }

    /// Initial state for the browser, honouring an entry hash if present.
    pub fn from_location() -> Self {
        let hash = web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default();
        NavState::starting_at(Page::from_entry_hash(&hash))
    }
}

pub enum NavAction {
    Navigate(Page),
    ToggleMenu,
    CloseMenu,
    SetDropdown(bool),
    ToggleDropdown,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Navigate(page) => NavState {
                page,
                menu_open: false,
                dropdown_open: false,
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..(*self).clone()
            },
            NavAction::CloseMenu => {
                if !self.menu_open {
                    return self;
                }
                NavState {
                    menu_open: false,
                    ..(*self).clone()
                }
            }
            NavAction::ToggleDropdown => NavState {
                dropdown_open: !self.dropdown_open,
                ..(*self).clone()
            },
            NavAction::SetDropdown(open) => {
                if self.dropdown_open == open {
                    return self;
                }
                NavState {
                    dropdown_open: open,
                    ..(*self).clone()
                }
            }
        };
        Rc::new(next)
    }
}

pub type NavContext = UseReducerHandle<NavState>;

/// Where "scroll to top" requests go.
pub trait Viewport {
    fn scroll_to_top(&self);
}

pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// The only transition of the shell: swap the page, close menus, go to top.
pub fn navigate_to(dispatch: impl Fn(NavAction), viewport: &dyn Viewport, page: Page) {
    info!("Navigating to {}", page);
    dispatch(NavAction::Navigate(page));
    viewport.scroll_to_top();
}

#[hook]
pub fn use_navigator() -> Callback<Page> {
    let nav = use_context::<NavContext>();
    Callback::from(move |page: Page| match &nav {
        Some(nav) => navigate_to(|action| nav.dispatch(action), &WindowViewport, page),
        None => warn!("Navigation to {} requested outside of the shell", page),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeViewport {
        offset: Cell<f64>,
        scrolls: Cell<u32>,
    }

    impl FakeViewport {
        fn scrolled_to(offset: f64) -> Self {
            Self {
                offset: Cell::new(offset),
                scrolls: Cell::new(0),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_to_top(&self) {
            self.offset.set(0.0);
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    fn apply(state: &RefCell<Rc<NavState>>, action: NavAction) {
        let current = state.borrow().clone();
        *state.borrow_mut() = current.reduce(action);
    }

    #[test]
    fn starts_at_home_with_everything_closed() {
        let state = NavState::default();
        assert_eq!(state.page, Page::Home);
        assert!(!state.menu_open);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn every_page_round_trips_through_its_id() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn unknown_ids_resolve_to_not_found() {
        assert_eq!(Page::resolve_id("pricing"), Page::NotFound);
        assert_eq!(Page::resolve_id(""), Page::NotFound);
        assert_eq!(Page::resolve_id("Audit"), Page::NotFound);
        assert_eq!(Page::resolve_id("audit"), Page::Audit);
    }

    #[test]
    fn navigation_closes_menus_and_scrolls_to_top_for_every_page() {
        for page in Page::ALL {
            let state = RefCell::new(Rc::new(NavState {
                page: Page::Home,
                menu_open: true,
                dropdown_open: true,
            }));
            let viewport = FakeViewport::scrolled_to(1200.0);

            navigate_to(|action| apply(&state, action), &viewport, page);

            let state = state.borrow();
            assert_eq!(state.page, page);
            assert!(!state.menu_open);
            assert!(!state.dropdown_open);
            assert_eq!(viewport.offset.get(), 0.0);
            assert_eq!(viewport.scrolls.get(), 1);
        }
    }

    #[test]
    fn last_navigation_wins() {
        let state = RefCell::new(Rc::new(NavState::default()));
        let viewport = FakeViewport::scrolled_to(0.0);
        navigate_to(|a| apply(&state, a), &viewport, Page::About);
        navigate_to(|a| apply(&state, a), &viewport, Page::Contact);
        navigate_to(|a| apply(&state, a), &viewport, Page::Fractional);
        assert_eq!(state.borrow().page, Page::Fractional);
        assert_eq!(viewport.scrolls.get(), 3);
    }

    #[test]
    fn home_to_services_to_audit() {
        let state = RefCell::new(Rc::new(NavState::default()));
        let viewport = FakeViewport::scrolled_to(640.0);

        navigate_to(|a| apply(&state, a), &viewport, Page::Services);
        assert_eq!(state.borrow().page, Page::Services);
        assert_eq!(viewport.offset.get(), 0.0);

        viewport.offset.set(900.0);
        navigate_to(|a| apply(&state, a), &viewport, Page::Audit);
        assert_eq!(state.borrow().page, Page::Audit);
        assert_eq!(viewport.offset.get(), 0.0);
    }

    #[test]
    fn menu_toggle_and_dropdown_leave_page_alone() {
        let state = RefCell::new(Rc::new(NavState {
            page: Page::Resources,
            ..NavState::default()
        }));
        apply(&state, NavAction::ToggleMenu);
        assert!(state.borrow().menu_open);
        apply(&state, NavAction::SetDropdown(true));
        assert!(state.borrow().dropdown_open);
        apply(&state, NavAction::ToggleMenu);
        assert!(!state.borrow().menu_open);
        apply(&state, NavAction::CloseMenu);
        assert!(!state.borrow().menu_open);
        assert_eq!(state.borrow().page, Page::Resources);
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let before = Rc::new(NavState::default());
        let after = before.clone().reduce(NavAction::SetDropdown(false));
        assert!(Rc::ptr_eq(&before, &after));
        let after = before.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn entry_hash_picks_the_first_page() {
        assert_eq!(Page::from_entry_hash(""), Page::Home);
        assert_eq!(Page::from_entry_hash("#"), Page::Home);
        assert_eq!(Page::from_entry_hash("#fractional"), Page::Fractional);
        assert_eq!(Page::from_entry_hash("#pricing"), Page::NotFound);
        assert_eq!(NavState::starting_at(Page::Contact).page, Page::Contact);
        assert!(!NavState::starting_at(Page::Contact).menu_open);
    }

    #[test]
    fn services_button_toggles_the_dropdown() {
        let state = RefCell::new(Rc::new(NavState::default()));
        apply(&state, NavAction::ToggleDropdown);
        assert!(state.borrow().dropdown_open);
        apply(&state, NavAction::ToggleDropdown);
        assert!(!state.borrow().dropdown_open);
        assert_eq!(state.borrow().page, Page::Home);
    }

    #[test]
    fn every_page_has_a_menu_label() {
        for page in Page::ALL {
            assert!(!page.label().is_empty(), "{}", page);
        }
        assert_eq!(Page::Corporate.label(), "workshops & training");
    }

    #[test]
    fn service_section_covers_hub_and_details() {
        let section: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|page| page.is_service_section())
            .collect();
        assert_eq!(
            section,
            vec![
                Page::Services,
                Page::Audit,
                Page::Implementation,
                Page::Fractional,
                Page::Corporate
            ]
        );
    }
}
