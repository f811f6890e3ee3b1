//! Hint text shine sweep
//!
//! A `[text, shine, text]` gradient one control-width wide slides across the
//! hint from `-width` to `2 * width`, linearly and forever. It runs
//! independently of the gesture state.

use slidelock_animation::{AnimationStatus, Easing, RepeatMode, ValueAnimator};
use slidelock_core::{Color, GradientStop, LinearGradient, Point};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ShineEffect {
    animator: ValueAnimator<f32>,
    text_color: Color,
    shine_color: Color,
    width: f32,
}

impl ShineEffect {
    pub fn new(duration_ms: u32, text_color: Color, shine_color: Color) -> Self {
        Self {
            animator: ValueAnimator::new(0.0, 0.0, duration_ms)
                .easing(Easing::Linear)
                .repeat(RepeatMode::Infinite),
            text_color,
            shine_color,
            width: 0.0,
        }
    }

    /// Re-span the sweep for a new control width, keeping playback state
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.animator.set_range(-width, width * 2.0);
    }

    /// Start sweeping if not already running
    pub fn ensure_started(&mut self) {
        if !self.animator.is_playing() {
            debug!(width = self.width, "shine started");
            self.animator.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_playing()
    }

    /// Advance the sweep; true if the gradient moved
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        matches!(
            self.animator.tick(dt_ms),
            AnimationStatus::Running | AnimationStatus::Finished
        )
    }

    /// Current gradient translation
    pub fn translate(&self) -> f32 {
        self.animator.value()
    }

    /// Gradient spanning `[-width + translate, translate]`
    pub fn gradient(&self) -> LinearGradient {
        let translate = self.translate();
        LinearGradient::new(
            Point::new(-self.width + translate, 0.0),
            Point::new(translate, 0.0),
            [
                GradientStop::new(0.0, self.text_color),
                GradientStop::new(0.5, self.shine_color),
                GradientStop::new(1.0, self.text_color),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_range() {
        let mut shine = ShineEffect::new(3000, Color::GRAY, Color::WHITE);
        shine.set_width(300.0);
        assert!(!shine.is_running());

        shine.ensure_started();
        assert_eq!(shine.translate(), -300.0);

        assert!(shine.tick(1500.0));
        assert!((shine.translate() - 150.0).abs() < 1e-3);

        let gradient = shine.gradient();
        assert!((gradient.start.x - (-150.0)).abs() < 1e-3);
        assert!((gradient.end.x - 150.0).abs() < 1e-3);
        assert_eq!(gradient.stops[1].color, Color::WHITE);
    }

    #[test]
    fn test_sweep_loops_forever() {
        let mut shine = ShineEffect::new(1000, Color::GRAY, Color::WHITE);
        shine.set_width(100.0);
        shine.ensure_started();
        for _ in 0..10 {
            assert!(shine.tick(400.0));
        }
        assert!(shine.is_running());
    }

    #[test]
    fn test_idle_before_start() {
        let mut shine = ShineEffect::new(1000, Color::GRAY, Color::WHITE);
        assert!(!shine.tick(16.0));
    }
}
