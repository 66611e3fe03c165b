//! Section tracking module
//!
//! Decides which page section is in view from intersection reports against
//! a band in the middle of the viewport, and produces scroll requests for
//! the navigation bar.

mod band;
mod nav;
mod tracker;

pub use band::{Span, VisibilityBand, DEFAULT_BAND_END, DEFAULT_BAND_START};
pub use nav::{item_by_label, NavItem, NAVIGATION_ITEMS};
pub use tracker::{ScrollTarget, SectionTracker, TOP_SNAP_TOLERANCE_PX};
