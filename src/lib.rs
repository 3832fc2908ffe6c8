//! Rotating content carousel for the testimonials section of a construction
//! company site, plus the portfolio category filter and project modal state.
//!
//! [`carousel::RotationController`] owns the current index and the single
//! autoplay timer. Hosts drive it from their frame loop with
//! [`carousel::RotationController::elapse`] and forward user navigation as
//! [`carousel::Intent`]s.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod headless;
pub mod items;
pub mod portfolio;
pub mod presenter;
pub mod state;
pub mod testimonial;
pub mod timer;
#[cfg(feature = "window")]
pub mod window;

pub use carousel::{CarouselOptions, Intent, RotationController};
pub use error::CarouselError;
pub use items::ItemSequence;
