use crate::config::NAV_SCROLLED_THRESHOLD;
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub menu: MenuState,
    pub scrolled: bool,
}

impl NavState {
    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLLED_THRESHOLD
}

/// At most one pending animation frame at a time. Scroll events that arrive
/// while a frame is pending are folded into it.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns true when the caller has to request a new frame.
    pub fn schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn frame_ran(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Source of truth for the navbar. Every method returns the new state only
/// when it differs from the old one, so callers write the DOM on change only.
#[derive(Debug, Default)]
pub struct NavController {
    state: NavState,
    throttle: FrameThrottle,
}

impl NavController {
    pub fn on_scroll_event(&mut self) -> bool {
        self.throttle.schedule()
    }

    pub fn on_frame(&mut self, offset: f64) -> Option<NavState> {
        self.throttle.frame_ran();
        let scrolled = is_scrolled(offset);
        if scrolled == self.state.scrolled {
            return None;
        }
        self.state.scrolled = scrolled;
        Some(self.state)
    }

    pub fn toggle_menu(&mut self) -> NavState {
        self.state.menu = match self.state.menu {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.state
    }

    pub fn close_menu(&mut self) -> Option<NavState> {
        if self.state.menu == MenuState::Closed {
            return None;
        }
        self.state.menu = MenuState::Closed;
        Some(self.state)
    }
}

/// The element id a same-page link points at, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// What a nav link click should do, given which sections the current page has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction<'a> {
    /// Section is on this page; scroll to it in place.
    Scroll(&'a str),
    /// Section lives on the home page; route there first.
    HomeSection(&'a str),
    /// Not an anchor. Let the browser follow it.
    Follow,
}

pub fn resolve_link(href: &str, on_page: impl Fn(&str) -> bool) -> LinkAction<'_> {
    match anchor_target(href) {
        Some(id) if on_page(id) => LinkAction::Scroll(id),
        Some(id) => LinkAction::HomeSection(id),
        None => LinkAction::Follow,
    }
}

/// Holds the page scroll lock exactly while the menu is open.
pub fn sync_menu_lock(menu: MenuState, guard: &mut Option<ScrollLockGuard>, lock: &ScrollLock) {
    match menu {
        MenuState::Open => {
            if guard.is_none() {
                *guard = Some(lock.acquire("nav-menu"));
            }
        }
        MenuState::Closed => {
            guard.take();
        }
    }
}

/// Scroll position that puts the target's top just under the fixed navbar.
pub fn anchor_scroll_top(target_offset_top: f64, nav_height: f64) -> f64 {
    (target_offset_top - nav_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::LockSurface;

    #[test]
    fn scrolled_only_past_threshold() {
        for offset in [0.0, 1.0, 49.0, 49.9, 50.0] {
            assert!(!is_scrolled(offset), "offset {}", offset);
        }
        for offset in [50.1, 51.0, 400.0, 10_000.0] {
            assert!(is_scrolled(offset), "offset {}", offset);
        }
    }

    #[test]
    fn burst_of_scroll_events_requests_one_frame() {
        let mut nav = NavController::default();
        let requested = (0..25).filter(|_| nav.on_scroll_event()).count();
        assert_eq!(requested, 1);

        nav.on_frame(120.0);
        assert!(nav.on_scroll_event());
        assert!(!nav.on_scroll_event());
    }

    #[test]
    fn frame_reports_threshold_crossings_only() {
        let mut nav = NavController::default();
        assert_eq!(nav.on_frame(10.0), None);
        let next = nav.on_frame(80.0).unwrap();
        assert!(next.scrolled);
        assert_eq!(nav.on_frame(300.0), None);
        assert_eq!(nav.on_frame(50.0).map(|s| s.scrolled), Some(false));
    }

    #[test]
    fn frame_clears_the_pending_latch() {
        let mut nav = NavController::default();
        assert!(nav.on_scroll_event());
        assert!(nav.throttle.is_pending());
        nav.on_frame(0.0);
        assert!(!nav.throttle.is_pending());
    }

    #[test]
    fn toggle_flips_menu() {
        let mut nav = NavController::default();
        assert!(nav.toggle_menu().is_menu_open());
        assert!(!nav.toggle_menu().is_menu_open());
    }

    #[test]
    fn closing_closed_menu_is_a_no_op() {
        let mut nav = NavController::default();
        assert_eq!(nav.close_menu(), None);
        nav.toggle_menu();
        assert_eq!(nav.close_menu().map(|s| s.menu), Some(MenuState::Closed));
        assert_eq!(nav.close_menu(), None);
    }

    #[test]
    fn menu_and_scroll_are_independent() {
        let mut nav = NavController::default();
        nav.toggle_menu();
        let next = nav.on_frame(200.0).unwrap();
        assert!(next.is_menu_open());
        assert!(next.scrolled);
    }

    #[test]
    fn anchors_need_an_id() {
        assert_eq!(anchor_target("#portfolio"), Some("portfolio"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/contact"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn links_scroll_in_place_only_when_section_is_present() {
        let home = |id: &str| ["home", "portfolio", "contact"].contains(&id);
        let contact_page = |id: &str| id == "contact";

        assert_eq!(resolve_link("#portfolio", home), LinkAction::Scroll("portfolio"));
        assert_eq!(resolve_link("#portfolio", contact_page), LinkAction::HomeSection("portfolio"));
        assert_eq!(resolve_link("#contact", contact_page), LinkAction::Scroll("contact"));
        assert_eq!(resolve_link("#home", |_| false), LinkAction::HomeSection("home"));
        assert_eq!(resolve_link("#", home), LinkAction::Follow);
        assert_eq!(resolve_link("/contact", home), LinkAction::Follow);
    }

    struct NoSurface;

    impl LockSurface for NoSurface {
        fn set_locked(&self, _locked: bool) {}
    }

    #[test]
    fn open_menu_holds_scroll_lock_until_closed() {
        let lock = ScrollLock::new(NoSurface);
        let mut guard = None;
        let mut nav = NavController::default();

        sync_menu_lock(nav.toggle_menu().menu, &mut guard, &lock);
        assert!(lock.is_locked());

        // Re-syncing an open menu does not take a second hold
        sync_menu_lock(MenuState::Open, &mut guard, &lock);
        let next = nav.close_menu().unwrap();
        sync_menu_lock(next.menu, &mut guard, &lock);
        assert!(!lock.is_locked());
        assert!(guard.is_none());
    }

    #[test]
    fn closing_menu_keeps_lock_held_by_gate() {
        let lock = ScrollLock::new(NoSurface);
        let gate = lock.acquire("age-gate");
        let mut guard = None;
        let mut nav = NavController::default();

        sync_menu_lock(nav.toggle_menu().menu, &mut guard, &lock);
        sync_menu_lock(nav.toggle_menu().menu, &mut guard, &lock);
        assert!(lock.is_locked());

        drop(gate);
        assert!(!lock.is_locked());
    }

    #[test]
    fn anchor_scroll_compensates_for_navbar() {
        assert_eq!(anchor_scroll_top(900.0, 72.0), 828.0);
        assert_eq!(anchor_scroll_top(40.0, 72.0), 0.0);
    }
}
