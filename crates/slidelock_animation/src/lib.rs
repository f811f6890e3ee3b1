//! Slidelock Animation
//!
//! Time-driven animations for the slide control. Nothing here owns a clock:
//! the host calls `tick(dt_ms)` from its frame or timer driver and reads the
//! current value back.
//!
//! # Features
//!
//! - **Easing**: linear and cubic ease curves
//! - **Interpolation**: `Interpolate` for scalars
//! - **Value Animator**: one-shot or infinitely repeating `from → to` sweeps

pub mod easing;
pub mod values;

pub use easing::Easing;
pub use values::{AnimationStatus, Interpolate, RepeatMode, ValueAnimator};
