//! Measurement against host constraints

use slidelock_core::Size;

/// Default control width
pub const DEFAULT_WIDTH: f32 = 300.0;
/// Default control height
pub const DEFAULT_HEIGHT: f32 = 60.0;

/// Host constraint on one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// Must be exactly this size
    Exactly(f32),
    /// May be at most this size
    AtMost(f32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Resolve the constraint against a preferred size
    pub fn resolve(self, preferred: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size.max(0.0),
            MeasureSpec::AtMost(size) => preferred.min(size.max(0.0)),
            MeasureSpec::Unspecified => preferred,
        }
    }
}

/// Desired control size for the given constraints
pub fn measure(width: MeasureSpec, height: MeasureSpec) -> Size {
    Size::new(width.resolve(DEFAULT_WIDTH), height.resolve(DEFAULT_HEIGHT))
}
