//! The smooth navigator invoked by nav-link activation.

use log::{debug, trace};
use page_model::SectionId;
use viewport_host::{LayoutProvider, ScrollCommands};

/// Request an animated scroll that puts `section`'s top just below the
/// fixed nav bar.
///
/// The destination is `top - nav_height` in document-absolute terms. If
/// the section has no geometry yet the call is a no-op. The active section
/// is not touched here; the observer picks it up from the scroll events
/// the animation produces, so callers must not assume an immediate state
/// change.
pub fn scroll_to_section(
    section: SectionId,
    layout: &impl LayoutProvider,
    scroller: &mut impl ScrollCommands,
    nav_height: f64,
) {
    let Some(rect) = layout.section_rect(section) else {
        trace!("scroll_to_section({section}): no geometry yet, ignoring");
        return;
    };
    let target = rect.top - nav_height;
    debug!("navigating to {section} at offset {target}");
    scroller.request_smooth_scroll(target);
}
