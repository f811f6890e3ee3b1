//! Gesture state machine

use slidelock_core::StateTransitions;

/// Internal events driving the slide state machine (not host input)
pub mod slide_events {
    /// Thumb released at the right border
    pub const COMMIT: u32 = 10000;
    /// Thumb released short of the right border
    pub const ROLLBACK: u32 = 10001;
    /// Spring-back animation finished
    pub const SETTLED: u32 = 10002;
    /// Host forced the thumb back to rest
    pub const RESET: u32 = 10003;

    /// Human-readable name for logging
    pub fn name(event: u32) -> &'static str {
        match event {
            COMMIT => "COMMIT",
            ROLLBACK => "ROLLBACK",
            SETTLED => "SETTLED",
            RESET => "RESET",
            other => slidelock_core::event_types::name(other),
        }
    }
}

/// Slide control state
///
/// ```text
/// Idle ─────down────▶ Dragging ──commit──▶ Committed
/// Springing ─down───▶ Dragging ◀──down──── Committed
/// Dragging ─rollback▶ Springing ──settled─▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlideState {
    /// Thumb at rest
    #[default]
    Idle,
    /// Pointer is dragging the thumb
    Dragging,
    /// Released at the right border; thumb stays at the end
    Committed,
    /// Animating back to the left border
    Springing,
}

impl SlideState {
    /// Whether an animation owned by the state machine is running
    pub fn is_active(&self) -> bool {
        matches!(self, SlideState::Springing)
    }
}

impl StateTransitions for SlideState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use slide_events::*;
        use slidelock_core::event_types::*;

        match (self, event) {
            // Idle -> Dragging: pointer went down on the thumb
            (SlideState::Idle, POINTER_DOWN) => Some(SlideState::Dragging),

            // Springing -> Dragging: grab the thumb mid-animation
            (SlideState::Springing, POINTER_DOWN) => Some(SlideState::Dragging),

            // Committed -> Dragging: drag the thumb back from the end
            (SlideState::Committed, POINTER_DOWN) => Some(SlideState::Dragging),

            // Dragging -> Committed / Springing: release outcome
            (SlideState::Dragging, COMMIT) => Some(SlideState::Committed),
            (SlideState::Dragging, ROLLBACK) => Some(SlideState::Springing),

            // Springing -> Idle: animation finished
            (SlideState::Springing, SETTLED) => Some(SlideState::Idle),

            // Any -> Idle: forced reset
            (SlideState::Dragging | SlideState::Committed | SlideState::Springing, RESET) => {
                Some(SlideState::Idle)
            }

            _ => None,
        }
    }
}
