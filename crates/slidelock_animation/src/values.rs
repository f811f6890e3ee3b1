//! Animatable value types
//!
//! Provides the interpolation trait and [`ValueAnimator`], a time-driven
//! sweep between two values.

use tracing::trace;

use crate::easing::Easing;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

// ============================================================================
// Value Animator
// ============================================================================

/// How an animator behaves when it reaches the end of its duration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Stop on the final value
    #[default]
    Once,
    /// Wrap back to the start and keep going until stopped
    Infinite,
}

/// Result of advancing an animator by one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Not playing; the tick had no effect
    Idle,
    /// Value changed and the animator is still playing
    Running,
    /// Value reached its end on this tick and the animator stopped
    Finished,
}

/// A time-driven sweep from one value to another
///
/// The animator is constructed once and reused: `start` rewinds it, `stop`
/// freezes it, and starting again supersedes whatever run was in flight.
/// A one-shot run always lands exactly on `to` when it finishes.
#[derive(Clone, Debug)]
pub struct ValueAnimator<T: Interpolate> {
    from: T,
    to: T,
    /// Duration in milliseconds
    duration_ms: u32,
    easing: Easing,
    repeat: RepeatMode,
    /// Elapsed time in the current cycle, in milliseconds
    elapsed_ms: f32,
    playing: bool,
}

impl<T: Interpolate> ValueAnimator<T> {
    /// Create a stopped, linear, one-shot animator
    pub fn new(from: T, to: T, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::Linear,
            repeat: RepeatMode::Once,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Set the easing curve (builder pattern)
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the repeat mode (builder pattern)
    pub fn repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    /// Replace the endpoints without touching playback state
    pub fn set_range(&mut self, from: T, to: T) {
        self.from = from;
        self.to = to;
    }

    /// Rewind to the start and begin playing
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
        trace!(duration_ms = self.duration_ms, "animator started");
    }

    /// Stop playback, keeping the current value
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Linear progress through the current cycle (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        let fraction = self.fraction();
        if fraction >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.apply(fraction))
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) -> AnimationStatus {
        if !self.playing {
            return AnimationStatus::Idle;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let duration = self.duration_ms as f32;

        if self.elapsed_ms < duration {
            return AnimationStatus::Running;
        }

        match self.repeat {
            RepeatMode::Infinite if self.duration_ms > 0 => {
                self.elapsed_ms %= duration;
                AnimationStatus::Running
            }
            _ => {
                self.elapsed_ms = duration;
                self.playing = false;
                trace!("animator finished");
                AnimationStatus::Finished
            }
        }
    }
}
