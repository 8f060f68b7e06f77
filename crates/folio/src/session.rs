//! Scripted scroll session on the headless viewport.

use log::info;
use page_model::SectionId;
use scrollspy::{FolioConfig, ScrollSpy, scroll_to_section};
use std::cell::RefCell;
use std::rc::Rc;
use viewport_host::SimViewport;

/// Section heights used by the demo layout, in declared order.
const SECTION_HEIGHTS: [(SectionId, f64); 4] = [
    (SectionId::About, 800.0),
    (SectionId::Projects, 800.0),
    (SectionId::Skills, 600.0),
    (SectionId::Contact, 600.0),
];

/// Scroll offsets the scripted user visits before clicking a nav link.
const SCRIPT: [f64; 6] = [0.0, 250.0, 750.0, 1200.0, 1900.0, 2400.0];

/// Drive a simulated reading of the page: scroll through the script, then
/// activate the Skills nav link. Returns the active section the spy ended
/// on.
pub fn run_demo(config: &FolioConfig) -> SectionId {
    let viewport = SimViewport::new(config.scroll_steps);
    viewport.layout(&SECTION_HEIGHTS);

    let spy = Rc::new(RefCell::new(ScrollSpy::with_lookahead(config.lookahead_px)));
    let subscription = {
        let spy = Rc::clone(&spy);
        let layout = viewport.clone();
        viewport.events().subscribe(move |_| {
            spy.borrow_mut().observe(&layout);
        })
    };

    for offset in SCRIPT {
        viewport.set_scroll(offset);
        info!("scrolled to {offset}, active section: {}", spy.borrow().active());
    }

    // Nav-link click: the observer picks the new section up from the
    // animation's scroll events, not from the click itself.
    let mut scroller = viewport.clone();
    scroll_to_section(
        SectionId::Skills,
        &viewport,
        &mut scroller,
        config.nav_height_px,
    );
    let final_active = spy.borrow().active();
    info!("session finished on section {final_active}");

    drop(subscription);
    final_active
}
