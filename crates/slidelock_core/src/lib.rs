//! Slidelock Core
//!
//! Foundational primitives shared by the slidelock crates:
//!
//! - **Geometry**: points, sizes, rectangles, colors, gradients
//! - **Paths**: immutable vector paths for rounded rectangles and circles
//! - **Draw Context**: the rendering seam a host implements, plus a recording
//!   implementation for tests and headless hosts
//! - **Events**: pointer events delivered by the host
//! - **Text Measurement**: a trait the host implements to size labels
//! - **State Transitions**: the trait interaction state machines implement
//!
//! # Example
//!
//! ```rust
//! use slidelock_core::{Color, DrawContext, Path, Rect, RecordingContext};
//!
//! let mut ctx = RecordingContext::new();
//! let track = Path::rounded_rect(Rect::new(0.0, 0.0, 300.0, 60.0), 30.0);
//! ctx.fill_path(&track, Color::WHITE.into());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod draw;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod text;

pub use draw::{
    DrawCommand, DrawContext, FontWeight, ImageId, ImageOptions, Path, PathCommand,
    RecordingContext, TextStyle,
};
pub use events::{event_types, Event, EventData, EventType};
pub use fsm::StateTransitions;
pub use geometry::{Brush, Circle, Color, GradientStop, LinearGradient, Point, Rect, Size};
pub use text::{EstimatedTextMeasurer, TextMeasurer, TextMetrics};
