//! Configuration settings for the scroll-spy core.
//!
//! This module defines runtime configuration for the nav bar height, the
//! detection lookahead, and the simulated smooth-scroll step count.
//! Configuration can be loaded from environment variables or constructed
//! programmatically.

use crate::{DEFAULT_LOOKAHEAD_PX, DEFAULT_NAV_HEIGHT_PX};
use std::env;

/// Runtime configuration for the scroll-spy core and its headless host.
#[derive(Clone, Debug)]
pub struct FolioConfig {
    /// Height of the fixed nav bar in pixels, subtracted from scroll targets
    pub nav_height_px: f64,
    /// Detection bias in pixels added to the scroll offset before matching
    pub lookahead_px: f64,
    /// Number of events a simulated smooth scroll emits before landing
    pub scroll_steps: u32,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_HEIGHT_PX, DEFAULT_LOOKAHEAD_PX, 8)
    }
}

impl FolioConfig {
    /// Construct a `FolioConfig` with explicit values.
    ///
    /// Negative pixel values are clamped to zero and a zero step count is
    /// clamped to one, so a misconfigured environment can only degrade the
    /// experience, never break the invariants.
    #[must_use]
    pub fn new(nav_height_px: f64, lookahead_px: f64, scroll_steps: u32) -> Self {
        Self {
            nav_height_px: nav_height_px.max(0.0),
            lookahead_px: lookahead_px.max(0.0),
            scroll_steps: scroll_steps.max(1),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `FOLIO_NAV_HEIGHT`: nav bar height in pixels (default: 80)
    /// - `FOLIO_LOOKAHEAD`: detection lookahead in pixels (default: 100)
    /// - `FOLIO_SCROLL_STEPS`: smooth-scroll step count (default: 8)
    #[must_use]
    pub fn from_env() -> Self {
        let nav_height_px = env::var("FOLIO_NAV_HEIGHT")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(DEFAULT_NAV_HEIGHT_PX);
        let lookahead_px = env::var("FOLIO_LOOKAHEAD")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(DEFAULT_LOOKAHEAD_PX);
        let scroll_steps = env::var("FOLIO_SCROLL_STEPS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(8);
        Self::new(nav_height_px, lookahead_px, scroll_steps)
    }
}
