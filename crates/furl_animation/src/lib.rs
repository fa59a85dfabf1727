//! Furl Animation System
//!
//! Easing curves and timed transitions for header state changes.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible cubic-bezier curves and polynomial presets
//! - **Tweens**: fixed-duration transitions between two values
//! - **Interruptible**: retargeting a running tween starts from its current value

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
