use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD;

/// Input to the navigation reducer. DOM listeners translate browser events
/// into these so the transitions stay independent of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// Current vertical scroll offset of the page.
    Scrolled(f64),
    /// The mobile menu button was clicked.
    MenuToggled,
    /// A navigation link was activated.
    LinkSelected,
}

/// How the bar is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPresentation {
    /// Solid background with bottom border.
    Solid,
    /// Transparent over the hero.
    Clear,
}

impl NavPresentation {
    pub fn class(self) -> &'static str {
        match self {
            NavPresentation::Solid => "nav--solid",
            NavPresentation::Clear => "nav--clear",
        }
    }
}

pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    scrolled: bool,
    menu_open: bool,
}

impl NavigationState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns the state after `event`. Every combination of the two flags is
    /// reachable and valid.
    #[must_use]
    pub fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::Scrolled(offset) => Self {
                scrolled: past_threshold(offset),
                ..self
            },
            NavEvent::MenuToggled => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavEvent::LinkSelected => Self {
                menu_open: false,
                ..self
            },
        }
    }

    /// The bar is opaque while scrolled or while the mobile panel is open.
    pub fn is_opaque(&self) -> bool {
        self.scrolled || self.menu_open
    }

    pub fn presentation(&self) -> NavPresentation {
        if self.is_opaque() {
            NavPresentation::Solid
        } else {
            NavPresentation::Clear
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavEvent;

    fn reduce(self: Rc<Self>, action: NavEvent) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            // Same Rc keeps use_reducer from re-rendering on every scroll tick.
            return self;
        }
        debug!("navigation {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(events: &[NavEvent]) -> NavigationState {
        events
            .iter()
            .fold(NavigationState::default(), |state, event| state.apply(*event))
    }

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = NavigationState::default();
        assert!(!state.scrolled());
        assert!(!state.menu_open());
        assert_eq!(state.presentation(), NavPresentation::Clear);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!past_threshold(50.0));
        assert!(past_threshold(50.5));
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(-12.0));
    }

    #[test]
    fn mount_then_scroll_to_top() {
        let state = run(&[NavEvent::Scrolled(0.0)]);
        assert!(!state.scrolled());
    }

    #[test]
    fn scroll_down_then_back_up() {
        let state = run(&[NavEvent::Scrolled(51.0)]);
        assert!(state.scrolled());
        assert!(state.is_opaque());

        let state = state.apply(NavEvent::Scrolled(10.0));
        assert!(!state.scrolled());
        assert!(!state.is_opaque());
    }

    #[test]
    fn selecting_contact_closes_open_menu() {
        let state = run(&[NavEvent::MenuToggled]);
        assert!(state.menu_open());

        let state = state.apply(NavEvent::LinkSelected);
        assert!(!state.menu_open());
    }

    #[test]
    fn open_menu_is_opaque_at_top_of_page() {
        let state = run(&[NavEvent::Scrolled(0.0), NavEvent::MenuToggled]);
        assert!(!state.scrolled());
        assert!(state.menu_open());
        assert_eq!(state.presentation(), NavPresentation::Solid);
    }

    #[test]
    fn selecting_link_with_closed_menu_is_noop() {
        let state = run(&[NavEvent::Scrolled(300.0)]);
        assert_eq!(state.apply(NavEvent::LinkSelected), state);
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let state = run(&[
            NavEvent::MenuToggled,
            NavEvent::Scrolled(400.0),
            NavEvent::Scrolled(0.0),
        ]);
        assert!(state.menu_open());
        assert!(!state.scrolled());
    }

    #[test]
    fn nan_offset_counts_as_top() {
        let state = run(&[NavEvent::Scrolled(120.0), NavEvent::Scrolled(f64::NAN)]);
        assert!(!state.scrolled());
    }

    #[test]
    fn reducer_reuses_rc_when_nothing_changes() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavEvent::Scrolled(3.0));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(NavEvent::Scrolled(90.0));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.scrolled());
    }

    #[test]
    fn presentation_classes() {
        assert_eq!(NavPresentation::Solid.class(), "nav--solid");
        assert_eq!(NavPresentation::Clear.class(), "nav--clear");
    }

    fn any_event() -> impl Strategy<Value = NavEvent> {
        prop_oneof![
            (-1_000.0f64..10_000.0).prop_map(NavEvent::Scrolled),
            Just(NavEvent::MenuToggled),
            Just(NavEvent::LinkSelected),
        ]
    }

    proptest! {
        #[test]
        fn scrolled_tracks_last_offset(
            start in proptest::collection::vec(any_event(), 0..16),
            offset in -1_000.0f64..10_000.0,
        ) {
            let state = run(&start).apply(NavEvent::Scrolled(offset));
            prop_assert_eq!(state.scrolled(), offset > 50.0);
        }

        #[test]
        fn double_toggle_restores_menu(events in proptest::collection::vec(any_event(), 0..16)) {
            let state = run(&events);
            let twice = state.apply(NavEvent::MenuToggled).apply(NavEvent::MenuToggled);
            prop_assert_eq!(twice, state);
        }

        #[test]
        fn link_selection_always_closes(events in proptest::collection::vec(any_event(), 0..16)) {
            let state = run(&events).apply(NavEvent::LinkSelected);
            prop_assert!(!state.menu_open());
        }

        #[test]
        fn opaque_iff_scrolled_or_open(events in proptest::collection::vec(any_event(), 0..32)) {
            let state = run(&events);
            prop_assert_eq!(state.is_opaque(), state.scrolled() || state.menu_open());
            prop_assert_eq!(
                state.presentation() == NavPresentation::Solid,
                state.scrolled() || state.menu_open()
            );
        }
    }
}
