//! Platform seams between the scroll-spy core and whatever hosts the page.
//!
//! This crate provides:
//! - `LayoutProvider`: live geometry queries against the layout engine
//! - `ScrollCommands`: the one command the core issues to the compositor
//! - `ScrollEventBus`: scroll-event delivery with scoped subscriptions
//! - `SimViewport`: a headless host implementing all of the above
//!
//! The core never talks to a real rendering surface directly; it only sees
//! these traits, so tests can supply fixed geometries.

use page_model::{SectionId, SectionRect};

pub mod bus;
pub mod sim;

pub use bus::{ScrollEventBus, ScrollSubscription};
pub use sim::SimViewport;

/// Live geometry queries, answered by the layout engine at observation time.
///
/// Geometry must be re-read on every call; implementations must not cache
/// across layout changes.
pub trait LayoutProvider {
    /// The rendered extent of a section, or `None` if the element cannot be
    /// located (e.g. not yet rendered). A miss is not an error.
    fn section_rect(&self, section: SectionId) -> Option<SectionRect>;

    /// The viewport's current vertical scroll offset.
    fn scroll_offset(&self) -> f64;
}

/// Commands the core may issue to the host's compositor.
pub trait ScrollCommands {
    /// Request an animated scroll of the viewport to an absolute vertical
    /// offset. Only the destination is part of the contract; duration and
    /// easing belong to the host, and completion is not observable.
    fn request_smooth_scroll(&mut self, target: f64);
}
