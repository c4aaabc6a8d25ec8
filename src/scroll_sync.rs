//! Scroll position to active section bookkeeping.
//!
//! Everything here works on plain geometry so it can be driven without a
//! browser. Reading the geometry out of the live document lives in `dom`.

use std::rc::Rc;

use yew::Reducible;

use crate::config;
use crate::content;

/// A named, vertically addressable region of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    /// Top edge relative to the document origin, in pixels.
    pub offset: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset,
            height,
        }
    }

    fn spans(&self, y: f64) -> bool {
        self.offset <= y && y < self.offset + self.height
    }
}

/// Document y coordinate used to decide which section is in view.
pub fn probe_position(scroll_top: f64, viewport_height: f64) -> f64 {
    scroll_top + viewport_height / config::ACTIVE_PROBE_DIVISOR
}

/// Returns the id of the section under the probe line, or `None` when the
/// probe falls outside every section.
///
/// Overlapping matches resolve to the last one in document order, so on a
/// shared boundary the lower section wins.
pub fn compute_active_section(
    sections: &[Section],
    scroll_top: f64,
    viewport_height: f64,
) -> Option<&str> {
    let probe = probe_position(scroll_top, viewport_height);
    let mut active = None;
    for section in sections {
        if section.spans(probe) {
            active = Some(section.id.as_str());
        }
    }
    active
}

/// Scroll offset that brings `id` just below the navigation bar.
pub fn scroll_target(sections: &[Section], id: &str) -> Option<f64> {
    sections
        .iter()
        .find(|section| section.id == id)
        .map(|section| section.offset - config::NAV_BAR_OFFSET)
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub active_section: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: content::SECTION_IDS[0].to_string(),
        }
    }
}

impl NavigationState {
    /// Moves the active section to whatever the new scroll position lands on.
    /// Returns `true` if it changed. A position outside every section keeps
    /// the previous value.
    pub fn apply_scroll(&mut self, sections: &[Section], scroll_top: f64, viewport_height: f64) -> bool {
        match compute_active_section(sections, scroll_top, viewport_height) {
            Some(id) if id != self.active_section => {
                self.active_section = id.to_string();
                true
            }
            _ => false,
        }
    }
}

pub enum NavAction {
    Scrolled {
        sections: Vec<Section>,
        scroll_top: f64,
        viewport_height: f64,
    },
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Scrolled {
                sections,
                scroll_top,
                viewport_height,
            } => {
                let mut next = (*self).clone();
                if next.apply_scroll(&sections, scroll_top, viewport_height) {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 900.0;

    fn page() -> Vec<Section> {
        content::SECTION_IDS
            .iter()
            .enumerate()
            .map(|(i, id)| Section::new(*id, i as f64 * 800.0, 800.0))
            .collect()
    }

    fn state(active: &str) -> NavigationState {
        NavigationState {
            active_section: active.to_string(),
        }
    }

    #[test]
    fn probe_sits_a_third_down_the_viewport() {
        assert_eq!(probe_position(1700.0, VIEWPORT), 2000.0);
    }

    #[test]
    fn picks_services_for_the_reference_layout() {
        assert_eq!(compute_active_section(&page(), 1700.0, VIEWPORT), Some("services"));
    }

    #[test]
    fn every_position_inside_a_section_selects_it() {
        let sections = page();
        for section in &sections {
            for probe in [section.offset, section.offset + 1.0, section.offset + section.height - 0.5] {
                let scroll_top = probe - VIEWPORT / 3.0;
                assert_eq!(
                    compute_active_section(&sections, scroll_top, VIEWPORT),
                    Some(section.id.as_str()),
                    "probe at {}",
                    probe
                );
            }
        }
    }

    #[test]
    fn shared_boundary_goes_to_the_later_section() {
        // about ends exactly where services starts
        let scroll_top = 1600.0 - VIEWPORT / 3.0;
        assert_eq!(compute_active_section(&page(), scroll_top, VIEWPORT), Some("services"));
    }

    #[test]
    fn overlapping_sections_resolve_to_last_match() {
        let sections = vec![
            Section::new("hero", 0.0, 1000.0),
            Section::new("about", 500.0, 1000.0),
            Section::new("services", 600.0, 0.0),
        ];
        assert_eq!(compute_active_section(&sections, 400.0, VIEWPORT), Some("about"));
    }

    #[test]
    fn zero_height_section_never_matches() {
        let sections = vec![Section::new("hero", 0.0, 0.0)];
        assert_eq!(compute_active_section(&sections, 0.0, 0.0), None);
    }

    #[test]
    fn nothing_matches_past_the_last_section() {
        assert_eq!(compute_active_section(&page(), 4000.0, VIEWPORT), None);
    }

    #[test]
    fn nothing_matches_above_the_first_section() {
        let sections = vec![Section::new("hero", 500.0, 800.0)];
        assert_eq!(compute_active_section(&sections, 0.0, VIEWPORT), None);
    }

    #[test]
    fn out_of_range_scroll_keeps_previous_section() {
        let mut nav = state("products");
        assert!(!nav.apply_scroll(&page(), 10_000.0, VIEWPORT));
        assert_eq!(nav.active_section, "products");

        assert!(!nav.apply_scroll(&[], 0.0, VIEWPORT));
        assert_eq!(nav.active_section, "products");
    }

    #[test]
    fn apply_scroll_reports_changes_only() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.active_section, "hero");
        assert!(!nav.apply_scroll(&page(), 0.0, VIEWPORT));
        assert!(nav.apply_scroll(&page(), 1700.0, VIEWPORT));
        assert_eq!(nav.active_section, "services");
        assert!(!nav.apply_scroll(&page(), 1750.0, VIEWPORT));
    }

    #[test]
    fn reduce_keeps_the_same_state_when_nothing_changes() {
        let before = Rc::new(state("about"));
        let after = before.clone().reduce(NavAction::Scrolled {
            sections: page(),
            scroll_top: 700.0,
            viewport_height: VIEWPORT,
        });
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn reduce_moves_to_the_scrolled_section() {
        let after = Rc::new(NavigationState::default()).reduce(NavAction::Scrolled {
            sections: page(),
            scroll_top: 3000.0,
            viewport_height: VIEWPORT,
        });
        assert_eq!(after.active_section, "contact");
    }

    #[test]
    fn scroll_target_leaves_room_for_the_nav_bar() {
        assert_eq!(scroll_target(&page(), "contact"), Some(3120.0));
        assert_eq!(scroll_target(&page(), "hero"), Some(-80.0));
    }

    #[test]
    fn unknown_section_has_no_target_and_leaves_state_alone() {
        let nav = state("about");
        assert_eq!(scroll_target(&page(), "nonexistent"), None);
        assert_eq!(nav.active_section, "about");
    }
}
