//! Headless viewport for tests and the demo binary.

use crate::bus::ScrollEventBus;
use crate::{LayoutProvider, ScrollCommands};
use log::debug;
use page_model::{SectionId, SectionRect};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct SimState {
    rects: Vec<(SectionId, SectionRect)>,
    scroll: f64,
}

/// A simulated viewport: fixed section geometry, a scroll offset, and a
/// smooth-scroll model that interpolates to the target in a configurable
/// number of steps, emitting one scroll event per step.
///
/// Clones share the same underlying state, so a clone can be moved into a
/// scroll listener while the original keeps driving the session.
#[derive(Clone)]
pub struct SimViewport {
    state: Rc<RefCell<SimState>>,
    events: ScrollEventBus,
    steps: u32,
}

impl SimViewport {
    /// Create a viewport whose smooth scrolls complete in `steps` events.
    /// A step count of zero is clamped to one so every smooth scroll emits
    /// at least one event.
    pub fn new(steps: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState::default())),
            events: ScrollEventBus::new(),
            steps: steps.max(1),
        }
    }

    /// Stack sections top to bottom from the given heights, in order.
    pub fn layout(&self, heights: &[(SectionId, f64)]) {
        let mut state = self.state.borrow_mut();
        state.rects.clear();
        let mut top = 0.0;
        for &(section, height) in heights {
            state.rects.push((section, SectionRect::new(top, height)));
            top += height;
        }
    }

    /// Remove a section from the layout, as if it had not rendered yet.
    pub fn remove_section(&self, section: SectionId) {
        self.state
            .borrow_mut()
            .rects
            .retain(|&(candidate, _)| candidate != section);
    }

    /// The event stream a host would expose for scroll-position changes.
    pub fn events(&self) -> &ScrollEventBus {
        &self.events
    }

    /// Jump the scroll offset instantly and notify listeners.
    pub fn set_scroll(&self, offset: f64) {
        self.state.borrow_mut().scroll = offset;
        self.events.dispatch(offset);
    }
}

impl LayoutProvider for SimViewport {
    fn section_rect(&self, section: SectionId) -> Option<SectionRect> {
        self.state
            .borrow()
            .rects
            .iter()
            .find(|&&(candidate, _)| candidate == section)
            .map(|&(_, rect)| rect)
    }

    fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll
    }
}

impl ScrollCommands for SimViewport {
    /// Interpolate from the current offset to `target` in `steps` equal
    /// increments, dispatching a scroll event at each one. The final step
    /// lands exactly on the target.
    fn request_smooth_scroll(&mut self, target: f64) {
        let start = self.scroll_offset();
        debug!("smooth scroll {start} -> {target} in {} steps", self.steps);
        for step in 1..=self.steps {
            let fraction = f64::from(step) / f64::from(self.steps);
            let offset = if step == self.steps {
                target
            } else {
                start + (target - start) * fraction
            };
            self.set_scroll(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SimViewport;
    use crate::{LayoutProvider as _, ScrollCommands as _};
    use page_model::SectionId;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn laid_out() -> SimViewport {
        let viewport = SimViewport::new(4);
        viewport.layout(&[
            (SectionId::About, 800.0),
            (SectionId::Projects, 800.0),
            (SectionId::Skills, 600.0),
            (SectionId::Contact, 600.0),
        ]);
        viewport
    }

    #[test]
    fn layout_stacks_sections_top_to_bottom() {
        let viewport = laid_out();
        let skills = viewport.section_rect(SectionId::Skills);
        assert!(skills.is_some_and(|rect| rect.top == 1600.0 && rect.height == 600.0));
        let contact = viewport.section_rect(SectionId::Contact);
        assert!(contact.is_some_and(|rect| rect.top == 2200.0));
    }

    #[test]
    fn removed_section_has_no_geometry() {
        let viewport = laid_out();
        viewport.remove_section(SectionId::Skills);
        assert!(viewport.section_rect(SectionId::Skills).is_none());
        assert!(viewport.section_rect(SectionId::Contact).is_some());
    }

    #[test]
    fn smooth_scroll_lands_exactly_on_target() {
        let mut viewport = laid_out();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = Rc::clone(&seen);
            viewport
                .events()
                .subscribe(move |offset| seen.borrow_mut().push(offset))
        };
        viewport.request_smooth_scroll(1520.0);
        assert_eq!(viewport.scroll_offset(), 1520.0);
        let offsets = seen.borrow();
        assert_eq!(offsets.len(), 4);
        assert_eq!(offsets.last().copied(), Some(1520.0));
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        drop(subscription);
    }

    #[test]
    fn zero_step_count_still_emits_one_event() {
        let mut viewport = SimViewport::new(0);
        let hits = Rc::new(RefCell::new(0_u32));
        let subscription = {
            let hits = Rc::clone(&hits);
            viewport.events().subscribe(move |_| *hits.borrow_mut() += 1)
        };
        viewport.request_smooth_scroll(100.0);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(viewport.scroll_offset(), 100.0);
        drop(subscription);
    }
}
