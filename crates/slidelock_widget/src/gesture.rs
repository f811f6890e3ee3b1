//! Per-drag gesture session

use slidelock_core::Point;

/// How the control answered a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerResponse {
    /// Not for this control; let it propagate
    Ignored,
    /// Handled by the control
    Consumed,
    /// Handled, and the gesture is now horizontal: ancestors must stop intercepting
    Claim,
    /// The gesture is vertical: hand it to the scrolling ancestor
    Release,
}

impl PointerResponse {
    pub fn is_handled(&self) -> bool {
        !matches!(self, PointerResponse::Ignored)
    }
}

/// Dominant direction of a gesture once it leaves the touch slop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// State of one pointer-down to pointer-up sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Where the pointer went down
    start: Point,
    /// Pointer x at the previous move, for incremental tracking
    last_x: f32,
    axis: Option<Axis>,
}

impl GestureSession {
    pub fn begin(x: f32, y: f32) -> Self {
        Self {
            start: Point::new(x, y),
            last_x: x,
            axis: None,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// Horizontal movement since the previous call, advancing the anchor
    pub fn advance(&mut self, x: f32) -> f32 {
        let delta = x - self.last_x;
        self.last_x = x;
        delta
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Decide the gesture direction once travel leaves the slop
    ///
    /// Returns the axis only on the move that decides it; later calls return
    /// None.
    pub fn resolve_axis(&mut self, x: f32, y: f32, slop: f32) -> Option<Axis> {
        if self.axis.is_some() {
            return None;
        }

        let dx = (x - self.start.x).abs();
        let dy = (y - self.start.y).abs();
        let axis = if dx > slop && dx > dy {
            Axis::Horizontal
        } else if dy > slop && dy > dx {
            Axis::Vertical
        } else {
            return None;
        };

        self.axis = Some(axis);
        Some(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_tracking() {
        let mut session = GestureSession::begin(10.0, 30.0);
        assert_eq!(session.advance(25.0), 15.0);
        assert_eq!(session.advance(20.0), -5.0);
        assert_eq!(session.start(), Point::new(10.0, 30.0));
    }

    #[test]
    fn test_axis_inside_slop_is_undecided() {
        let mut session = GestureSession::begin(0.0, 0.0);
        assert_eq!(session.resolve_axis(5.0, 3.0, 8.0), None);
        assert_eq!(session.axis(), None);
    }

    #[test]
    fn test_horizontal_claim_is_reported_once() {
        let mut session = GestureSession::begin(0.0, 0.0);
        assert_eq!(session.resolve_axis(12.0, 2.0, 8.0), Some(Axis::Horizontal));
        assert_eq!(session.resolve_axis(40.0, 50.0, 8.0), None);
        assert_eq!(session.axis(), Some(Axis::Horizontal));
    }

    #[test]
    fn test_vertical_release() {
        let mut session = GestureSession::begin(0.0, 0.0);
        assert_eq!(session.resolve_axis(3.0, -20.0, 8.0), Some(Axis::Vertical));
    }
}
