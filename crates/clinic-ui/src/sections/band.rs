//! Vertical spans and the visibility band

use serde::Serialize;

/// Default band start as a fraction of the viewport height
pub const DEFAULT_BAND_START: f32 = 0.45;
/// Default band end as a fraction of the viewport height
pub const DEFAULT_BAND_END: f32 = 0.55;

/// A vertical extent in scroll-container content coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[inline]
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Check if two spans overlap
    #[inline]
    pub fn intersects(&self, other: &Span) -> bool {
        self.top < other.bottom() && self.bottom() > other.top
    }
}

/// Slice of the viewport in which a section counts as visible
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityBand {
    start: f32,
    end: f32,
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self {
            start: DEFAULT_BAND_START,
            end: DEFAULT_BAND_END,
        }
    }
}

impl VisibilityBand {
    /// Create a band from two viewport fractions (order-insensitive, clamped to 0..=1)
    pub fn new(start: f32, end: f32) -> Self {
        let start = start.clamp(0.0, 1.0);
        let end = end.clamp(0.0, 1.0);
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Band in content coordinates for the given scroll position
    pub fn pixel_span(&self, scroll_top: f32, viewport_height: f32) -> Span {
        Span::new(
            scroll_top + viewport_height * self.start,
            viewport_height * (self.end - self.start),
        )
    }

    /// `rootMargin` for an `IntersectionObserver` watching this band
    pub fn root_margin(&self) -> String {
        let top = (self.start * 100.0).round();
        let bottom = ((1.0 - self.end) * 100.0).round();
        format!("-{top}% 0px -{bottom}% 0px")
    }
}
