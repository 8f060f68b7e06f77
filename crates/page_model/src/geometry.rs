//! Section geometry as reported by a layout engine.

/// Vertical extent of a rendered section, in CSS pixels, relative to the
/// top of the document.
///
/// Geometry is derived, never stored: callers re-read it from the layout
/// provider on every observation because layout can change (content or
/// viewport resize) between observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Rendered height of the section.
    pub height: f64,
}

impl SectionRect {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// One past the section's bottom edge.
    pub fn end(self) -> f64 {
        self.top + self.height
    }

    /// Whether `probe` falls inside the half-open range `[top, top + height)`.
    pub fn contains(self, probe: f64) -> bool {
        probe >= self.top && probe < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::SectionRect;

    #[test]
    fn contains_is_half_open() {
        let rect = SectionRect::new(800.0, 800.0);
        assert!(rect.contains(800.0));
        assert!(rect.contains(1599.0));
        assert!(!rect.contains(1600.0));
        assert!(!rect.contains(799.0));
    }

    #[test]
    fn zero_height_contains_nothing() {
        let rect = SectionRect::new(100.0, 0.0);
        assert!(!rect.contains(100.0));
    }
}
