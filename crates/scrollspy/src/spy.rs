//! The scroll-spy observer.

use crate::DEFAULT_LOOKAHEAD_PX;
use log::debug;
use page_model::SectionId;
use viewport_host::LayoutProvider;

/// Owns the one piece of UI state the nav bar depends on: the currently
/// active section. Never unset; initialized to the first declared section
/// and mutated only by [`ScrollSpy::observe`].
#[derive(Debug)]
pub struct ScrollSpy {
    active: SectionId,
    lookahead: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::with_lookahead(DEFAULT_LOOKAHEAD_PX)
    }

    pub fn with_lookahead(lookahead: f64) -> Self {
        Self {
            active: SectionId::About,
            lookahead,
        }
    }

    /// The section currently considered in view.
    pub const fn active(&self) -> SectionId {
        self.active
    }

    /// Recompute the active section from live geometry.
    ///
    /// The probe position is the current scroll offset plus the lookahead.
    /// Sections are scanned in declared order and the scan stops at the
    /// first whose range `[top, top + height)` contains the probe, so
    /// overlapping ranges resolve to the earlier-declared section. Sections
    /// without geometry are skipped silently. If nothing matches the active
    /// section is left unchanged rather than reset.
    ///
    /// Returns the (possibly unchanged) active section.
    pub fn observe(&mut self, layout: &impl LayoutProvider) -> SectionId {
        let probe = layout.scroll_offset() + self.lookahead;
        for section in SectionId::ALL {
            let Some(rect) = layout.section_rect(section) else {
                continue;
            };
            if rect.contains(probe) {
                if section != self.active {
                    debug!("active section {} -> {section}", self.active);
                    self.active = section;
                }
                break;
            }
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollSpy;
    use page_model::{SectionId, SectionRect};
    use std::cell::Cell;
    use viewport_host::LayoutProvider;

    /// Fixed geometry standing in for a real layout engine.
    struct FixedLayout {
        rects: Vec<(SectionId, SectionRect)>,
        scroll: Cell<f64>,
    }

    impl FixedLayout {
        /// about=[0,800), projects=[800,1600), skills=[1600,2200),
        /// contact=[2200,2800)
        fn portfolio() -> Self {
            Self {
                rects: vec![
                    (SectionId::About, SectionRect::new(0.0, 800.0)),
                    (SectionId::Projects, SectionRect::new(800.0, 800.0)),
                    (SectionId::Skills, SectionRect::new(1600.0, 600.0)),
                    (SectionId::Contact, SectionRect::new(2200.0, 600.0)),
                ],
                scroll: Cell::new(0.0),
            }
        }
    }

    impl LayoutProvider for FixedLayout {
        fn section_rect(&self, section: SectionId) -> Option<SectionRect> {
            self.rects
                .iter()
                .find(|&&(candidate, _)| candidate == section)
                .map(|&(_, rect)| rect)
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll.get()
        }
    }

    #[test]
    fn probe_inside_a_section_activates_it() {
        let layout = FixedLayout::portfolio();
        let mut spy = ScrollSpy::new();

        // scrollOffset=750 -> probe=850 -> projects
        layout.scroll.set(750.0);
        assert_eq!(spy.observe(&layout), SectionId::Projects);

        // scrollOffset=0 -> probe=100 -> about
        layout.scroll.set(0.0);
        assert_eq!(spy.observe(&layout), SectionId::About);

        layout.scroll.set(2150.0);
        assert_eq!(spy.observe(&layout), SectionId::Contact);
    }

    #[test]
    fn lookahead_activates_a_section_before_its_top_edge() {
        let layout = FixedLayout::portfolio();
        let mut spy = ScrollSpy::new();
        // 60px before the skills top edge, the 100px lookahead already
        // pushes the probe past it.
        layout.scroll.set(1540.0);
        assert_eq!(spy.observe(&layout), SectionId::Skills);
    }

    #[test]
    fn overlapping_ranges_resolve_to_the_earlier_section() {
        let layout = FixedLayout {
            rects: vec![
                (SectionId::About, SectionRect::new(0.0, 800.0)),
                // Projects overlaps the tail of about.
                (SectionId::Projects, SectionRect::new(600.0, 800.0)),
            ],
            scroll: Cell::new(600.0),
        };
        let mut spy = ScrollSpy::new();
        // probe=700 is inside both ranges; declared order wins.
        assert_eq!(spy.observe(&layout), SectionId::About);
    }

    #[test]
    fn no_match_leaves_the_active_section_sticky() {
        let layout = FixedLayout::portfolio();
        let mut spy = ScrollSpy::new();
        layout.scroll.set(2150.0);
        assert_eq!(spy.observe(&layout), SectionId::Contact);

        // Scrolled past the end of the last section: probe=3000 matches
        // nothing, the previous value is retained.
        layout.scroll.set(2900.0);
        assert_eq!(spy.observe(&layout), SectionId::Contact);
    }

    #[test]
    fn missing_sections_are_skipped_without_error() {
        let mut layout = FixedLayout::portfolio();
        layout.rects.retain(|&(section, _)| section != SectionId::Projects);
        let mut spy = ScrollSpy::new();
        layout.scroll.set(750.0);
        // probe=850 falls in the (now unrendered) projects range; nothing
        // matches and the initial section stays active.
        assert_eq!(spy.observe(&layout), SectionId::About);
        // Later sections are still reachable.
        layout.scroll.set(1700.0);
        assert_eq!(spy.observe(&layout), SectionId::Skills);
    }

    #[test]
    fn observation_is_idempotent_at_a_fixed_offset() {
        let layout = FixedLayout::portfolio();
        let mut spy = ScrollSpy::new();
        layout.scroll.set(750.0);
        let first = spy.observe(&layout);
        let second = spy.observe(&layout);
        assert_eq!(first, second);
        assert_eq!(spy.active(), SectionId::Projects);
    }

    #[test]
    fn initial_active_section_is_the_first_declared() {
        let spy = ScrollSpy::new();
        assert_eq!(spy.active(), SectionId::About);
    }
}
