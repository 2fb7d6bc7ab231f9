//! Navbar visibility and mobile drawer state, derived from raw scroll and
//! click events. Nothing in here touches the DOM; the hooks module feeds it.

/// Offsets below this many pixels always show the navbar.
pub const TOP_THRESHOLD: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub navbar_visible: bool,
    pub last_scroll_offset: f64,
}

/// Navbar is shown on any upward scroll or near the top of the page.
pub fn navbar_visible(previous_offset: f64, current_offset: f64) -> bool {
    previous_offset > current_offset || current_offset < TOP_THRESHOLD
}

/// An open drawer closes when the click landed outside the nav.
pub fn on_document_click(target_is_inside_nav: bool, menu_open: bool) -> bool {
    if menu_open && !target_is_inside_nav {
        false
    } else {
        menu_open
    }
}

pub fn toggle_menu(menu_open: bool) -> bool {
    !menu_open
}

pub const fn close_menu() -> bool {
    false
}

/// Clamps `window.scrollY` to a non-negative offset. Overscroll bounce can
/// report negative offsets on some browsers. Sub-pixel values are kept as is.
pub fn scroll_offset_from(scroll_y: f64) -> f64 {
    if scroll_y > 0.0 {
        scroll_y
    } else {
        0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportInteractionTracker {
    last_scroll_offset: f64,
    navbar_visible: bool,
    menu_open: bool,
}

impl Default for ViewportInteractionTracker {
    fn default() -> Self {
        Self {
            last_scroll_offset: 0.0,
            navbar_visible: true,
            menu_open: false,
        }
    }
}

impl ViewportInteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navbar_visible(&self) -> bool {
        self.navbar_visible
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn last_scroll_offset(&self) -> f64 {
        self.last_scroll_offset
    }

    pub fn on_scroll(&mut self, current_offset: f64) -> ScrollUpdate {
        self.navbar_visible = navbar_visible(self.last_scroll_offset, current_offset);
        self.last_scroll_offset = current_offset;
        ScrollUpdate {
            navbar_visible: self.navbar_visible,
            last_scroll_offset: self.last_scroll_offset,
        }
    }

    pub fn on_document_click(&mut self, target_is_inside_nav: bool) -> bool {
        self.menu_open = on_document_click(target_is_inside_nav, self.menu_open);
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = toggle_menu(self.menu_open);
        self.menu_open
    }

    pub fn close_menu(&mut self) -> bool {
        self.menu_open = close_menu();
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visibility_for(offsets: &[f64]) -> Vec<bool> {
        let mut tracker = ViewportInteractionTracker::new();
        offsets
            .iter()
            .map(|offset| tracker.on_scroll(*offset).navbar_visible)
            .collect()
    }

    #[test]
    fn starts_visible_and_closed() {
        let tracker = ViewportInteractionTracker::default();
        assert!(tracker.navbar_visible());
        assert!(!tracker.menu_open());
        assert_eq!(tracker.last_scroll_offset(), 0.0);
    }

    #[test]
    fn scroll_down_then_up_sequence() {
        assert_eq!(
            visibility_for(&[0.0, 50.0, 120.0, 80.0]),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn near_top_is_always_visible() {
        let mut tracker = ViewportInteractionTracker::new();
        tracker.on_scroll(500.0);
        tracker.on_scroll(900.0);
        assert!(!tracker.navbar_visible());

        for offset in [9.0, 0.0, 3.0, 9.0] {
            assert!(tracker.on_scroll(offset).navbar_visible, "offset {offset}");
        }
    }

    #[test]
    fn fractional_offset_below_threshold_is_visible() {
        let mut tracker = ViewportInteractionTracker::new();
        tracker.on_scroll(400.0);
        tracker.on_scroll(600.0);
        assert!(!tracker.navbar_visible());

        // Still scrolling down, but not yet a full 10px from the top.
        let mut tracker = ViewportInteractionTracker::new();
        assert!(tracker.on_scroll(scroll_offset_from(9.6)).navbar_visible);
        assert!(tracker.on_scroll(scroll_offset_from(9.99)).navbar_visible);
        assert!(!tracker.on_scroll(scroll_offset_from(10.0)).navbar_visible);
    }

    #[test]
    fn sub_pixel_upward_scroll_reveals() {
        let mut tracker = ViewportInteractionTracker::new();
        tracker.on_scroll(scroll_offset_from(50.0));
        assert!(!tracker.on_scroll(scroll_offset_from(100.4)).navbar_visible);

        let update = tracker.on_scroll(scroll_offset_from(100.2));
        assert!(update.navbar_visible);
        assert_eq!(update.last_scroll_offset, 100.2);
    }

    #[test]
    fn upward_scroll_reveals() {
        for (prev, curr) in [(11.0, 10.0), (1000.0, 999.0), (30.0, 0.0), (f64::MAX, 12.0)] {
            assert!(navbar_visible(prev, curr), "{prev} -> {curr}");
        }
    }

    #[test]
    fn downward_or_still_past_threshold_hides() {
        for (prev, curr) in [(0.0, 10.0), (10.0, 10.0), (200.0, 200.0), (40.0, 4000.0)] {
            assert!(!navbar_visible(prev, curr), "{prev} -> {curr}");
        }
    }

    #[test]
    fn on_scroll_records_offset() {
        let mut tracker = ViewportInteractionTracker::new();
        let update = tracker.on_scroll(42.5);
        assert_eq!(
            update,
            ScrollUpdate {
                navbar_visible: false,
                last_scroll_offset: 42.5
            }
        );
        assert_eq!(tracker.last_scroll_offset(), 42.5);
    }

    #[test]
    fn repeated_scroll_events_at_same_offset_are_stable() {
        let mut tracker = ViewportInteractionTracker::new();
        tracker.on_scroll(300.0);
        let first = tracker.on_scroll(300.0);
        let second = tracker.on_scroll(300.0);
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        for open in [true, false] {
            assert_eq!(toggle_menu(toggle_menu(open)), open);
        }

        let mut tracker = ViewportInteractionTracker::new();
        assert!(tracker.toggle_menu());
        assert!(!tracker.toggle_menu());
    }

    #[test]
    fn close_is_idempotent() {
        let mut tracker = ViewportInteractionTracker::new();
        assert!(!tracker.close_menu());
        assert!(!tracker.close_menu());

        tracker.toggle_menu();
        assert!(!tracker.close_menu());
        assert!(!close_menu());
    }

    #[test]
    fn document_clicks() {
        assert!(!on_document_click(true, false));
        assert!(!on_document_click(false, false));
        assert!(on_document_click(true, true));
        assert!(!on_document_click(false, true));

        let mut tracker = ViewportInteractionTracker::new();
        tracker.toggle_menu();
        assert!(tracker.on_document_click(true));
        assert!(!tracker.on_document_click(false));
    }

    #[test]
    fn scroll_offsets_are_clamped_not_rounded() {
        assert_eq!(scroll_offset_from(-35.0), 0.0);
        assert_eq!(scroll_offset_from(-0.5), 0.0);
        assert_eq!(scroll_offset_from(f64::NAN), 0.0);
        assert_eq!(scroll_offset_from(9.6), 9.6);
        assert_eq!(scroll_offset_from(100.2), 100.2);
        assert_eq!(scroll_offset_from(1e12), 1e12);
    }
}
