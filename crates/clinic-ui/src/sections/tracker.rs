//! Current section from intersection reports and scroll position

use serde::Serialize;

use super::band::{Span, VisibilityBand};

/// Scroll positions above this always select the first section
pub const TOP_SNAP_TOLERANCE_PX: f32 = 8.0;

/// A smooth-scroll request produced by [`SectionTracker::scroll_target`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollTarget {
    pub index: usize,
    pub top: f32,
}

/// Tracks which labelled region of the page is in view
///
/// Sections are densely indexed in registration order. Intersection reports
/// carry only the sections whose state changed, so the tracker keeps which
/// sections are in the band. The current section is the lowest of those;
/// with none intersecting it keeps its last value.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    spans: Vec<Span>,
    intersecting: Vec<bool>,
    current: usize,
    band: VisibilityBand,
}

impl SectionTracker {
    /// Create a tracker with the default 45%-55% band
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with a custom band
    pub fn with_band(band: VisibilityBand) -> Self {
        Self {
            band,
            ..Self::default()
        }
    }

    /// Visibility band in use
    #[inline]
    pub fn band(&self) -> VisibilityBand {
        self.band
    }

    /// Current section index
    #[inline]
    pub fn current_section(&self) -> usize {
        self.current
    }

    /// Number of registered sections
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if no sections are registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Check if `index` is the current section
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Registered span of a section
    pub fn span(&self, index: usize) -> Option<Span> {
        self.spans.get(index).copied()
    }

    /// Register the next section, returning its index
    pub fn register(&mut self, span: Span) -> usize {
        self.spans.push(span);
        self.intersecting.push(false);
        self.spans.len() - 1
    }

    /// Replace a section's span after a re-measure
    pub fn update_span(&mut self, index: usize, span: Span) -> bool {
        match self.spans.get_mut(index) {
            Some(slot) => {
                *slot = span;
                true
            }
            None => false,
        }
    }

    /// Check if a section is inside the band as of the last report
    pub fn is_intersecting(&self, index: usize) -> bool {
        self.intersecting.get(index).copied().unwrap_or(false)
    }

    /// Apply an intersection report of `(index, is_intersecting)` pairs
    ///
    /// Sections missing from the report keep their previous state. Returns
    /// true if the current section changed.
    pub fn on_intersection(&mut self, changes: &[(usize, bool)], scroll_top: f32) -> bool {
        for &(index, intersecting) in changes {
            if let Some(slot) = self.intersecting.get_mut(index) {
                *slot = intersecting;
            }
        }
        let visible = self.intersecting.iter().position(|&inside| inside);
        self.settle(visible, scroll_top)
    }

    /// Recompute the current section from registered spans
    ///
    /// Used on scroll and resize, where no intersection report arrives.
    pub fn measure(&mut self, scroll_top: f32, viewport_height: f32) -> bool {
        let band = self.band.pixel_span(scroll_top, viewport_height);
        let visible = self.spans.iter().position(|span| span.intersects(&band));
        self.settle(visible, scroll_top)
    }

    /// Apply only the top-of-page correction
    pub fn on_scroll(&mut self, scroll_top: f32) -> bool {
        self.settle(None, scroll_top)
    }

    /// Where to scroll to bring a section into view
    ///
    /// The index is clamped. The current section is left alone; it follows
    /// once the scroll lands and the band reports.
    pub fn scroll_target(&self, index: i64) -> Option<ScrollTarget> {
        let last = self.spans.len().checked_sub(1)? as i64;
        let index = index.clamp(0, last) as usize;
        Some(ScrollTarget {
            index,
            top: self.spans[index].top,
        })
    }

    fn settle(&mut self, visible: Option<usize>, scroll_top: f32) -> bool {
        let next = if scroll_top < TOP_SNAP_TOLERANCE_PX {
            0
        } else {
            visible.unwrap_or(self.current)
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionTracker {
        let mut tracker = SectionTracker::new();
        for i in 0..7 {
            tracker.register(Span::new(i as f32 * 1000.0, 1000.0));
        }
        tracker
    }

    #[test]
    fn test_register_is_dense() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.register(Span::new(0.0, 10.0)), 0);
        assert_eq!(tracker.register(Span::new(10.0, 10.0)), 1);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_minimum_intersecting_index_wins() {
        let mut tracker = page();
        assert!(tracker.on_intersection(&[(4, true), (3, true), (2, false)], 3000.0));
        assert_eq!(tracker.current_section(), 3);
    }

    #[test]
    fn test_section_still_in_band_beats_later_arrival() {
        let mut tracker = page();
        tracker.on_intersection(&[(3, true)], 3000.0);
        assert!(!tracker.on_intersection(&[(4, true)], 3560.0));
        assert_eq!(tracker.current_section(), 3);

        assert!(tracker.on_intersection(&[(3, false)], 3700.0));
        assert_eq!(tracker.current_section(), 4);
        assert!(!tracker.is_intersecting(3));
        assert!(tracker.is_intersecting(4));
    }

    #[test]
    fn test_no_intersection_keeps_current() {
        let mut tracker = page();
        tracker.on_intersection(&[(2, true)], 2000.0);
        assert!(!tracker.on_intersection(&[(2, false)], 2400.0));
        assert_eq!(tracker.current_section(), 2);
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut tracker = page();
        tracker.on_intersection(&[(42, true)], 500.0);
        assert_eq!(tracker.current_section(), 0);
    }

    #[test]
    fn test_top_of_page_snaps_to_first() {
        let mut tracker = page();
        tracker.on_intersection(&[(1, true)], 1200.0);
        assert!(tracker.on_scroll(0.0));
        assert_eq!(tracker.current_section(), 0);

        tracker.on_intersection(&[(1, true)], 5.0);
        assert_eq!(tracker.current_section(), 0);
    }

    #[test]
    fn test_measure_uses_band() {
        let mut tracker = page();
        // band is 2360..2440 for an 800px viewport
        tracker.measure(2000.0, 800.0);
        assert_eq!(tracker.current_section(), 2);
    }

    #[test]
    fn test_measure_between_sections_keeps_current() {
        let mut tracker = SectionTracker::new();
        tracker.register(Span::new(0.0, 100.0));
        tracker.register(Span::new(2000.0, 100.0));
        tracker.measure(1000.0, 800.0);
        assert_eq!(tracker.current_section(), 0);

        tracker.measure(1600.0, 800.0);
        assert_eq!(tracker.current_section(), 1);
        tracker.measure(1200.0, 800.0);
        assert_eq!(tracker.current_section(), 1);
    }

    #[test]
    fn test_scroll_target_clamps_and_keeps_current() {
        let tracker = page();
        let target = tracker.scroll_target(99).unwrap();
        assert_eq!(target.index, 6);
        assert!((target.top - 6000.0).abs() < 0.001);
        assert_eq!(tracker.scroll_target(-1).map(|t| t.index), Some(0));
        assert_eq!(tracker.current_section(), 0);
    }

    #[test]
    fn test_scroll_target_without_sections() {
        assert_eq!(SectionTracker::new().scroll_target(0), None);
    }

    #[test]
    fn test_update_span() {
        let mut tracker = page();
        assert!(tracker.update_span(1, Span::new(900.0, 50.0)));
        assert!(!tracker.update_span(9, Span::new(0.0, 1.0)));
        assert_eq!(tracker.span(1), Some(Span::new(900.0, 50.0)));
    }
}
