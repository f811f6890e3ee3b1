//! Slidelock Widget
//!
//! A slide-to-unlock control: the user drags a thumb along a track, and
//! releasing it at the far end unlocks. Released anywhere short of the end,
//! the thumb springs back to the start.
//!
//! # Architecture
//!
//! 1. **FSM-Driven Interaction**: [`SlideState`] moves between idle,
//!    dragging, committed and springing on pointer and internal events.
//!
//! 2. **Pure Geometry**: every drawable region is recomputed from the control
//!    size, the config and the thumb's edges by [`SlideGeometry::compute`].
//!
//! 3. **Host-Driven Time**: the spring-back and the hint shine advance only
//!    when the host calls [`SlideUnlock::tick`].
//!
//! # Example
//!
//! ```rust
//! use slidelock_widget::prelude::*;
//! use slidelock_core::{event_types, Event, Size};
//!
//! let mut control = slide_unlock()
//!     .thumb_text(">")
//!     .on_result(|unlocked| println!("unlocked: {unlocked}"))
//!     .build()
//!     .unwrap();
//!
//! let size = control.measure(MeasureSpec::Unspecified, MeasureSpec::Exactly(48.0));
//! control.on_size_changed(size);
//!
//! control.handle_event(&Event::pointer(event_types::POINTER_DOWN, 20.0, 24.0));
//! control.handle_event(&Event::pointer(event_types::POINTER_MOVE, 120.0, 24.0));
//! control.handle_event(&Event::pointer(event_types::POINTER_UP, 120.0, 24.0));
//!
//! // Released short of the end: spring back over the next frames
//! while control.tick(16.0) {
//!     if !control.state().is_active() {
//!         break;
//!     }
//! }
//! assert_eq!(control.state(), SlideState::Idle);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod icon;
pub mod listener;
pub mod measure;
pub mod shine;
pub mod slide_unlock;
pub mod state;

pub use config::{IconSource, LabelStyle, Padding, SlideUnlockConfig, ThumbContent, ThumbShape};
pub use error::{Result, SlideUnlockError};
pub use geometry::{ContentGeometry, Outline, SlideGeometry, ThumbPosition, TrackBounds};
pub use gesture::{Axis, PointerResponse};
pub use icon::{fit_scale, ScaledIcon, ThumbIcon};
pub use listener::{CallbackListener, ListenerCapabilities, SlideUnlockListener};
pub use measure::{MeasureSpec, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use shine::ShineEffect;
pub use slide_unlock::{slide_unlock, SlideUnlock, SlideUnlockBuilder};
pub use state::{slide_events, SlideState};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{IconSource, Padding, SlideUnlockConfig, ThumbContent, ThumbShape};
    pub use crate::gesture::PointerResponse;
    pub use crate::listener::{CallbackListener, SlideUnlockListener};
    pub use crate::measure::MeasureSpec;
    pub use crate::slide_unlock::{slide_unlock, SlideUnlock, SlideUnlockBuilder};
    pub use crate::state::SlideState;
}
