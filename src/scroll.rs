//! Derives navigation state from raw scroll samples.
//!
//! The tracker never touches the DOM itself. Section positions are read through
//! [`SectionGeometry`], which the browser implements with
//! `getBoundingClientRect` and tests implement with plain closures.

use crate::registry::{Section, SectionRegistry};

/// Pixels scrolled before the navigation chrome switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 20.0;
/// A section is in view once its top edge is at most this far below the
/// viewport top.
pub const ACTIVE_OFFSET: f64 = 150.0;

/// Source of section top offsets relative to the viewport top.
///
/// Returns `None` when the section's anchor is not in the document yet.
pub trait SectionGeometry {
    fn top_offset(&self, id: &str) -> Option<f64>;
}

impl<F> SectionGeometry for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn top_offset(&self, id: &str) -> Option<f64> {
        self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    pub threshold: f64,
    pub active_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: SCROLL_THRESHOLD,
            active_offset: ACTIVE_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub is_past_threshold: bool,
    pub active_section_id: &'static str,
}

impl ScrollState {
    pub fn initial(registry: &SectionRegistry) -> Self {
        Self {
            scroll_y: 0.0,
            is_past_threshold: false,
            active_section_id: registry.first().id,
        }
    }
}

pub fn is_past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Bottom-most section whose top edge is within `active_offset` of the
/// viewport top. Sections without an anchor are skipped.
pub fn active_section<'r>(
    registry: &'r SectionRegistry,
    geometry: &impl SectionGeometry,
    active_offset: f64,
) -> Option<&'r Section> {
    registry.iter_rev().find(|section| {
        geometry
            .top_offset(section.id)
            .is_some_and(|top| top <= active_offset)
    })
}

pub struct ScrollTracker<'r> {
    registry: &'r SectionRegistry,
    config: TrackerConfig,
    state: ScrollState,
}

impl<'r> ScrollTracker<'r> {
    pub fn new(registry: &'r SectionRegistry) -> Self {
        Self::with_config(registry, TrackerConfig::default())
    }

    pub fn with_config(registry: &'r SectionRegistry, config: TrackerConfig) -> Self {
        Self {
            registry,
            config,
            state: ScrollState::initial(registry),
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Recomputes the state for one scroll sample. Returns true when anything
    /// a consumer renders from has changed.
    pub fn sample(&mut self, scroll_y: f64, geometry: &impl SectionGeometry) -> bool {
        let active = active_section(self.registry, geometry, self.config.active_offset)
            .unwrap_or_else(|| self.registry.first());
        let next = ScrollState {
            scroll_y,
            is_past_threshold: is_past_threshold(scroll_y, self.config.threshold),
            active_section_id: active.id,
        };
        let changed = next.is_past_threshold != self.state.is_past_threshold
            || next.active_section_id != self.state.active_section_id;
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::registry::{Section, REGISTRY};

    fn geometry(offsets: &[(&'static str, f64)]) -> impl Fn(&str) -> Option<f64> {
        let map = offsets.iter().copied().collect::<HashMap<_, _>>();
        move |id: &str| map.get(id).copied()
    }

    fn small_registry() -> SectionRegistry {
        SectionRegistry::new([
            Section::new("hero", "Home", 0),
            Section::new("about", "About", 1),
            Section::new("skills", "Skills", 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_past_threshold(0.0, SCROLL_THRESHOLD));
        assert!(!is_past_threshold(20.0, SCROLL_THRESHOLD));
        assert!(is_past_threshold(20.5, SCROLL_THRESHOLD));
        assert!(is_past_threshold(21.0, SCROLL_THRESHOLD));

        let registry = small_registry();
        let mut tracker = ScrollTracker::new(&registry);
        let geo = geometry(&[("hero", 0.0)]);
        tracker.sample(20.0, &geo);
        assert!(!tracker.state().is_past_threshold);
        assert!(tracker.sample(21.0, &geo));
        assert!(tracker.state().is_past_threshold);
    }

    #[test]
    fn test_bottom_most_passing_section_wins() {
        let registry = small_registry();
        let geo = geometry(&[("hero", -800.0), ("about", 140.0), ("skills", 900.0)]);
        let active = active_section(&registry, &geo, ACTIVE_OFFSET).unwrap();
        assert_eq!(active.id, "about");

        // exactly on the offset still counts
        let geo = geometry(&[("hero", -800.0), ("about", -200.0), ("skills", 150.0)]);
        let active = active_section(&registry, &geo, ACTIVE_OFFSET).unwrap();
        assert_eq!(active.id, "skills");
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let registry = small_registry();
        // skills would win but has no anchor yet
        let geo = geometry(&[("hero", -900.0), ("about", -100.0)]);
        let mut tracker = ScrollTracker::new(&registry);
        tracker.sample(900.0, &geo);
        assert_eq!(tracker.state().active_section_id, "about");
    }

    #[test]
    fn test_no_match_falls_back_to_first() {
        let registry = small_registry();
        let mut tracker = ScrollTracker::new(&registry);
        tracker.sample(300.0, &geometry(&[("hero", -300.0), ("about", 100.0)]));
        assert_eq!(tracker.state().active_section_id, "about");

        let changed = tracker.sample(0.0, &geometry(&[("about", 400.0), ("skills", 1200.0)]));
        assert!(changed);
        assert_eq!(tracker.state().active_section_id, "hero");
    }

    #[test]
    fn test_repeated_samples_are_idempotent() {
        let registry = small_registry();
        let mut tracker = ScrollTracker::new(&registry);
        let geo = geometry(&[("hero", -100.0), ("about", 50.0), ("skills", 700.0)]);
        assert!(tracker.sample(100.0, &geo));
        let first = tracker.state().clone();
        assert!(!tracker.sample(100.0, &geo));
        assert_eq!(tracker.state(), &first);
        // scroll_y still follows the latest sample
        assert!(!tracker.sample(110.0, &geo));
        assert_eq!(tracker.state().scroll_y, 110.0);
    }

    #[test]
    fn test_scroll_down_to_projects_and_back() {
        let mut tracker = ScrollTracker::new(&REGISTRY);
        let top = geometry(&[
            ("hero", 0.0),
            ("about", 900.0),
            ("skills", 1800.0),
            ("certifications", 2700.0),
            ("projects", 3600.0),
            ("contact", 4500.0),
        ]);
        tracker.sample(0.0, &top);
        assert_eq!(tracker.state().active_section_id, "hero");
        assert!(!tracker.state().is_past_threshold);

        let scrolled = geometry(&[
            ("hero", -500.0),
            ("about", -400.0),
            ("skills", -300.0),
            ("certifications", -200.0),
            ("projects", 100.0),
            ("contact", 1000.0),
        ]);
        assert!(tracker.sample(500.0, &scrolled));
        assert_eq!(tracker.state().active_section_id, "projects");
        assert!(tracker.state().is_past_threshold);

        assert!(tracker.sample(0.0, &top));
        assert_eq!(tracker.state().active_section_id, "hero");
        assert!(!tracker.state().is_past_threshold);
    }

    #[test]
    fn test_custom_config() {
        let registry = small_registry();
        let config = TrackerConfig {
            threshold: 100.0,
            active_offset: 0.0,
        };
        let mut tracker = ScrollTracker::with_config(&registry, config);
        tracker.sample(50.0, &geometry(&[("hero", -50.0), ("about", 10.0)]));
        assert!(!tracker.state().is_past_threshold);
        assert_eq!(tracker.state().active_section_id, "hero");
    }
}
