//! Scroll-spy navigation core.
//!
//! Two behaviors live here:
//! - [`ScrollSpy`]: keeps the active section synchronized with what the
//!   user is actually looking at, recomputed on every scroll event
//! - [`scroll_to_section`]: moves the viewport so a section's top sits just
//!   below the fixed nav bar, via the host's animated scroll
//!
//! Both run synchronously on the UI thread; there is no debouncing, and
//! under rapid scrolling the observer may run many times per second.

pub mod config;
pub mod navigator;
pub mod spy;

pub use config::FolioConfig;
pub use navigator::scroll_to_section;
pub use spy::ScrollSpy;

/// Pixels added to the scroll offset before matching, so a section counts
/// as active slightly before its top edge reaches the very top of the
/// viewport. Compensates for the fixed nav bar's visual overlap.
pub const DEFAULT_LOOKAHEAD_PX: f64 = 100.0;

/// Height of the fixed nav bar, subtracted from scroll targets so content
/// starts beneath it instead of hidden behind it.
pub const DEFAULT_NAV_HEIGHT_PX: f64 = 80.0;
