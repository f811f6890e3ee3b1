//! Drawing seam
//!
//! The control never talks to a GPU or a canvas directly. It describes what
//! it wants painted through [`DrawContext`], which the host implements on top
//! of whatever renderer it has. [`RecordingContext`] is the reference
//! implementation: it stores every call as a [`DrawCommand`] so tests and
//! headless tools can inspect a frame.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::{Brush, Color, Point, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Text Types
// ─────────────────────────────────────────────────────────────────────────────

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Text style for one draw call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub weight: FontWeight,
    /// Text color (ignored when a brush is supplied at draw time)
    pub color: Color,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: Color::BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Images
// ─────────────────────────────────────────────────────────────────────────────

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a bitmap owned by the caller of [`DrawContext::draw_image`]
///
/// Ids are process-unique. A new id is issued whenever the pixels behind a
/// handle change, so hosts can key upload caches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    pub fn next() -> Self {
        Self(NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Per-draw image options
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageOptions {
    /// Paint every visible pixel with this color, keeping the image's alpha
    pub tint: Option<Color>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

// Control point distance for a quarter circle drawn as one cubic
const KAPPA: f32 = 0.552_284_8;

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Circle as four quarter arcs, starting at 3 o'clock
    pub fn circle(center: Point, radius: f32) -> Self {
        let k = KAPPA;
        let r = radius.max(0.0);
        let (cx, cy) = (center.x, center.y);

        Self::new()
            .move_to(cx + r, cy)
            .cubic_to(cx + r, cy + r * k, cx + r * k, cy + r, cx, cy + r)
            .cubic_to(cx - r * k, cy + r, cx - r, cy + r * k, cx - r, cy)
            .cubic_to(cx - r, cy - r * k, cx - r * k, cy - r, cx, cy - r)
            .cubic_to(cx + r * k, cy - r, cx + r, cy - r * k, cx + r, cy)
            .close()
    }

    /// Rectangle with the same radius on every corner
    ///
    /// The radius is clamped to half the shorter side, so passing the rect's
    /// height yields a pill. A zero radius gives straight corners only.
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());
        let r = radius.clamp(0.0, (w.min(h) / 2.0).max(0.0));
        // Offset of each arc's control points from its corner
        let c = r * (1.0 - KAPPA);
        let (right, bottom) = (x + w, y + h);

        let mut path = Self::new().move_to(x + r, y).line_to(right - r, y);
        if r > 0.0 {
            path = path.cubic_to(right - c, y, right, y + c, right, y + r);
        }
        path = path.line_to(right, bottom - r);
        if r > 0.0 {
            path = path.cubic_to(right, bottom - c, right - c, bottom, right - r, bottom);
        }
        path = path.line_to(x + r, bottom);
        if r > 0.0 {
            path = path.cubic_to(x + c, bottom, x, bottom - c, x, bottom - r);
        }
        path = path.line_to(x, y + r);
        if r > 0.0 {
            path = path.cubic_to(x, y + c, x + c, y, x + r, y);
        }
        path.close()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Bounding box of every point and control point
    ///
    /// For circles and rounded rects the control points never leave the
    /// shape's box, so this is exact.
    pub fn bounds(&self) -> Rect {
        let points = self.commands.iter().flat_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![*p],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => vec![*control1, *control2, *end],
            PathCommand::Close => Vec::new(),
        });

        let mut extent: Option<(f32, f32, f32, f32)> = None;
        for p in points {
            let (l, t, r, b) = extent.unwrap_or((p.x, p.y, p.x, p.y));
            extent = Some((l.min(p.x), t.min(p.y), r.max(p.x), b.max(p.y)));
        }
        extent.map_or(Rect::ZERO, |(l, t, r, b)| Rect::from_ltrb(l, t, r, b))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// The rendering surface a host hands to the control for one frame
///
/// Coordinates are in the control's local space: the origin is the control's
/// top-left corner and the y axis points down.
pub trait DrawContext {
    /// Fill a path with a color or gradient
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Draw a single line of text
    ///
    /// `origin.x` is the left edge of the text and `origin.y` its baseline.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle, brush: Brush);

    /// Draw a bitmap scaled into `dest`
    fn draw_image(&mut self, image: ImageId, dest: Rect, options: &ImageOptions);
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// One recorded [`DrawContext`] call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillPath {
        path: Path,
        brush: Brush,
    },
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
        brush: Brush,
    },
    Image {
        image: ImageId,
        dest: Rect,
        options: ImageOptions,
    },
}

/// A draw context that keeps every call, in order
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl DrawContext for RecordingContext {
    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle, brush: Brush) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: *style,
            brush,
        });
    }

    fn draw_image(&mut self, image: ImageId, dest: Rect, options: &ImageOptions) {
        self.commands.push(DrawCommand::Image {
            image,
            dest,
            options: *options,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_clamps_radius_to_pill() {
        let rect = Rect::new(0.0, 0.0, 300.0, 60.0);
        let pill = Path::rounded_rect(rect, 1000.0);
        let exact = Path::rounded_rect(rect, 30.0);
        assert_eq!(pill, exact);
        assert_eq!(pill.bounds(), rect);
    }

    #[test]
    fn test_rounded_rect_zero_radius_has_no_curves() {
        let path = Path::rounded_rect(Rect::new(10.0, 10.0, 50.0, 20.0), 0.0);
        assert!(path
            .commands()
            .iter()
            .all(|c| !matches!(c, PathCommand::CubicTo { .. })));
        assert_eq!(path.bounds(), Rect::new(10.0, 10.0, 50.0, 20.0));
    }

    #[test]
    fn test_circle_bounds() {
        let path = Path::circle(Point::new(30.0, 30.0), 30.0);
        let bounds = path.bounds();
        assert!((bounds.x() - 0.0).abs() < 1e-4);
        assert!((bounds.width() - 60.0).abs() < 1e-4);
        assert!((bounds.height() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_path_has_zero_bounds() {
        assert_eq!(Path::new().bounds(), Rect::ZERO);
    }

    #[test]
    fn test_recording_context_keeps_call_order() {
        let mut ctx = RecordingContext::new();
        let track = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 20.0), 10.0);
        ctx.fill_path(&track, Color::WHITE.into());
        ctx.draw_text(
            "hi",
            Point::new(1.0, 15.0),
            &TextStyle::new(12.0),
            Color::BLACK.into(),
        );
        let image = ImageId::next();
        ctx.draw_image(
            image,
            Rect::new(0.0, 0.0, 20.0, 20.0),
            &ImageOptions::default(),
        );

        assert_eq!(ctx.commands().len(), 3);
        assert!(matches!(&ctx.commands()[0], DrawCommand::FillPath { path, .. } if *path == track));
        assert!(matches!(&ctx.commands()[1], DrawCommand::Text { text, .. } if text == "hi"));
        assert!(matches!(ctx.commands()[2], DrawCommand::Image { image: id, .. } if id == image));
    }

    #[test]
    fn test_image_ids_are_unique() {
        let a = ImageId::next();
        let b = ImageId::next();
        assert_ne!(a, b);
    }
}
