//! State machine trait for interactive controls

use std::hash::Hash;

/// Trait for state types that handle event transitions
///
/// Implement this on a state enum to define how events cause transitions.
/// Events are plain `u32` ids: host input from [`crate::event_types`] and
/// any internal events the control defines.
///
/// # Example
///
/// ```rust
/// use slidelock_core::{event_types::*, StateTransitions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum Press {
///     #[default]
///     Up,
///     Down,
/// }
///
/// impl StateTransitions for Press {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Press::Up, POINTER_DOWN) => Some(Press::Down),
///             (Press::Down, POINTER_UP) => Some(Press::Up),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Press::Up.on_event(POINTER_DOWN), Some(Press::Down));
/// assert_eq!(Press::Up.on_event(POINTER_UP), None);
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}
