//! Interactive state for the clinic site
//!
//! This crate provides the behaviour behind the page's interactive parts:
//! - Gallery navigation (wraparound stepping, clamped jumps, autoplay)
//! - Swipe and wheel gestures translated to next/previous commands
//! - Scroll-driven tracking of the section in view
//! - Contact form validation, error dismissal and submit status
//!
//! ## Architecture
//!
//! - [`slider`]: Slide index, autoplay schedule, keyboard map, card layout
//! - [`gesture`]: Drag state, wheel debounce and the gesture translator
//! - [`carousel`]: The gallery component composing the two above
//! - [`sections`]: Visibility band, section tracker, navigation items
//! - [`contact`]: Patient and hospital form state
//!
//! ## Example
//!
//! ```rust
//! use clinic_ui::{Carousel, CarouselConfig};
//!
//! let mut gallery = Carousel::new(7, CarouselConfig::default()).unwrap();
//! gallery.mount(0.0);
//!
//! let t0 = 1_000.0;
//! gallery.handle_pointer_down(400.0, t0);
//! gallery.handle_pointer_move(300.0);
//! gallery.handle_pointer_up(t0 + 150.0);
//! assert_eq!(gallery.current_index(), 1);
//!
//! assert_eq!(gallery.handle_key("End"), Some(6));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state is plain Rust, testable without a browser
//! 2. **Injected Time**: Timers are expressed against a `now_ms` clock
//! 3. **Owned Handles**: Browser listeners and timers are released on drop

pub mod carousel;
pub mod contact;
pub mod gesture;
pub mod sections;
pub mod slider;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use carousel::{Carousel, CarouselConfig, CarouselView};
pub use contact::{ContactForm, FormView, SubmitError, SubmitStatus};
pub use gesture::{Direction, DragState, GestureResult, GestureSink, GestureTranslator, WheelGate};
pub use sections::{NavItem, ScrollTarget, SectionTracker, Span, VisibilityBand, NAVIGATION_ITEMS};
pub use slider::{AutoplaySchedule, CardPose, SlideCommand, SlideNavigator, SliderError};
