//! Pointer events delivered by the host

/// Event type identifier
pub type EventType = u32;

/// Common event types
///
/// Values below 10000 are reserved for host input. Interaction state machines
/// define their own internal events from 10000 upwards.
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_CANCEL: EventType = 4;

    /// Human-readable name for logging
    pub fn name(event_type: EventType) -> &'static str {
        match event_type {
            POINTER_DOWN => "POINTER_DOWN",
            POINTER_UP => "POINTER_UP",
            POINTER_MOVE => "POINTER_MOVE",
            POINTER_CANCEL => "POINTER_CANCEL",
            _ => "UNKNOWN",
        }
    }
}

/// Event-specific payload
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    /// Pointer position in the control's local coordinates
    Pointer { x: f32, y: f32 },
    /// Hosts may cancel a gesture without knowing where the pointer is
    None,
}

/// A UI event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

impl Event {
    /// Pointer event at a local position
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y },
        }
    }

    /// Event with no payload
    pub fn bare(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
        }
    }

    /// Pointer position, if this event carries one
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y } => Some((x, y)),
            EventData::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_event_position() {
        let event = Event::pointer(event_types::POINTER_MOVE, 12.0, 30.0);
        assert_eq!(event.position(), Some((12.0, 30.0)));
        assert_eq!(event_types::name(event.event_type), "POINTER_MOVE");
    }

    #[test]
    fn test_bare_event_has_no_position() {
        let event = Event::bare(event_types::POINTER_CANCEL);
        assert_eq!(event.position(), None);
        assert_eq!(event_types::name(99), "UNKNOWN");
    }
}
