//! Drawable geometry
//!
//! Everything the control paints is derived here from plain numbers: the
//! control size, the config, and the thumb's current edges. Nothing is
//! mutated in place. [`SlideGeometry::compute`] is a pure function, so
//! calling it twice with the same inputs yields identical output.

use slidelock_core::{Circle, FontWeight, Path, Point, Rect, Size, TextMeasurer};

use crate::config::{SlideUnlockConfig, ThumbShape};

/// Extra width a thumb needs before it is drawn stretched
const STRETCH_EPSILON: f32 = 1e-3;

/// Upper bound on 5% shrink steps when fitting the thumb label
const MAX_FIT_STEPS: usize = 32;

/// Track limits resolved for one control size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackBounds {
    /// Control size
    pub size: Size,
    /// Leftmost thumb edge (`padding.left`)
    pub left_border: f32,
    /// Rightmost thumb edge (`width - padding.right`)
    pub right_border: f32,
    /// Resting thumb width
    pub thumb_width: f32,
    /// Thumb top edge (`padding.top`)
    pub thumb_top: f32,
    /// Thumb bottom edge (`height - padding.bottom`)
    pub thumb_bottom: f32,
    /// Left padding, for the track-follows-thumb edge
    pub padding_left: f32,
}

impl TrackBounds {
    pub fn compute(size: Size, config: &SlideUnlockConfig) -> Self {
        let padding = config.padding;
        let thumb_top = padding.top;
        let thumb_bottom = (size.height - padding.bottom).max(thumb_top);
        let thumb_width = match config.thumb_shape {
            ThumbShape::Circle => thumb_bottom - thumb_top,
            ThumbShape::Square => config.thumb_width.max(0.0),
        };

        Self {
            size,
            left_border: padding.left,
            right_border: size.width - padding.right,
            thumb_width,
            thumb_top,
            thumb_bottom,
            padding_left: padding.left,
        }
    }

    /// Largest allowed left edge; equals `left_border` when the thumb does not fit
    pub fn max_left(&self) -> f32 {
        (self.right_border - self.thumb_width).max(self.left_border)
    }

    /// True when the thumb is wider than the space between the borders
    pub fn is_degenerate(&self) -> bool {
        self.right_border - self.left_border < self.thumb_width
    }

    pub fn clamp_left(&self, left_x: f32) -> f32 {
        left_x.clamp(self.left_border, self.max_left())
    }

    /// Clamp a stretched right edge to `[left_x + thumb_width, right_border]`
    pub fn clamp_right(&self, left_x: f32, right_x: f32) -> f32 {
        let min = left_x + self.thumb_width;
        right_x.min(self.right_border).max(min)
    }

    /// Thumb at rest against the left border
    pub fn rest(&self) -> ThumbPosition {
        ThumbPosition::at(self.left_border, self.thumb_width)
    }

    /// Right edge of the resting thumb
    pub fn start_right(&self) -> f32 {
        self.left_border + self.thumb_width
    }

    /// Fraction of the available travel covered by the thumb's right edge
    pub fn progress(&self, position: ThumbPosition) -> f32 {
        let distance = self.right_border - self.start_right();
        if distance <= 0.0 {
            return 1.0;
        }
        ((position.right_x - self.start_right()) / distance).clamp(0.0, 1.0)
    }

    /// Whether the thumb has reached the right border
    ///
    /// Both edges come out of the clamps exactly: a rigid thumb stops at
    /// `left_x == max_left()`, a stretched one at `right_x == right_border`.
    /// A degenerate track never commits, since its resting thumb already
    /// covers the border.
    pub fn is_committed(&self, position: ThumbPosition) -> bool {
        !self.is_degenerate()
            && (position.right_x >= self.right_border || position.left_x >= self.max_left())
    }
}

/// Horizontal extent of the thumb
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThumbPosition {
    pub left_x: f32,
    pub right_x: f32,
}

impl ThumbPosition {
    pub fn at(left_x: f32, width: f32) -> Self {
        Self {
            left_x,
            right_x: left_x + width,
        }
    }
}

/// A fillable outline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outline {
    RoundedRect { rect: Rect, radius: f32 },
    Circle(Circle),
}

impl Outline {
    pub fn to_path(&self) -> Path {
        match self {
            Outline::RoundedRect { rect, radius } => Path::rounded_rect(*rect, *radius),
            Outline::Circle(circle) => Path::circle(circle.center, circle.radius),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Outline::RoundedRect { rect, .. } => *rect,
            Outline::Circle(circle) => circle.bounds(),
        }
    }
}

/// Measured hint text, cached per layout
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HintLayout {
    pub width: f32,
    pub baseline: f32,
}

impl HintLayout {
    pub fn measure(
        measurer: &dyn TextMeasurer,
        config: &SlideUnlockConfig,
        height: f32,
    ) -> Self {
        let metrics = measurer.measure(
            &config.hint_text,
            config.hint_text_size,
            config.hint_text_style.font_weight(),
        );
        Self {
            width: metrics.width,
            baseline: (height + metrics.centering_height()) * 0.5,
        }
    }
}

/// Fitted thumb label, cached per layout
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelLayout {
    pub font_size: f32,
    pub width: f32,
    pub baseline: f32,
}

impl LabelLayout {
    /// Fit `text` into `interior`, then place its baseline for a control of `height`
    pub fn fit(
        measurer: &dyn TextMeasurer,
        text: &str,
        weight: FontWeight,
        interior: Size,
        height: f32,
    ) -> Self {
        let font_size = fit_font_size(measurer, text, weight, interior);
        let metrics = measurer.measure(text, font_size, weight);
        Self {
            font_size,
            width: metrics.width,
            baseline: (height + metrics.centering_height()) * 0.5,
        }
    }
}

/// Largest font size (starting from the interior height) whose width fits
///
/// One proportional step, then 5% steps for measurers that are not linear
/// in font size.
pub fn fit_font_size(
    measurer: &dyn TextMeasurer,
    text: &str,
    weight: FontWeight,
    interior: Size,
) -> f32 {
    if interior.is_empty() {
        return 0.0;
    }

    let mut size = interior.height;
    let mut width = measurer.measure(text, size, weight).width;
    if width > interior.width && width > 0.0 {
        size *= interior.width / width;
        width = measurer.measure(text, size, weight).width;
    }

    let mut steps = 0;
    while width > interior.width && steps < MAX_FIT_STEPS {
        size *= 0.95;
        width = measurer.measure(text, size, weight).width;
        steps += 1;
    }
    size
}

/// Placement of the thumb content
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentGeometry {
    /// Destination rect for the scaled icon
    Icon(Rect),
    /// Left edge and baseline of the thumb label
    Text(Point),
    None,
}

/// Every drawable region of the control for one thumb position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideGeometry {
    pub track: Outline,
    pub thumb: Outline,
    /// Axis-aligned thumb rectangle, also the hit region
    pub thumb_rect: Rect,
    pub content: ContentGeometry,
    /// Left edge and baseline of the hint text
    pub hint_origin: Point,
    pub hint_visible: bool,
}

impl Default for SlideGeometry {
    fn default() -> Self {
        Self {
            track: Outline::RoundedRect {
                rect: Rect::ZERO,
                radius: 0.0,
            },
            thumb: Outline::RoundedRect {
                rect: Rect::ZERO,
                radius: 0.0,
            },
            thumb_rect: Rect::ZERO,
            content: ContentGeometry::None,
            hint_origin: Point::ZERO,
            hint_visible: true,
        }
    }
}

/// Inputs to [`SlideGeometry::compute`] that come from layout caches
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentMetrics {
    /// Scaled icon size, for icon content
    pub icon: Option<Size>,
    /// Fitted label, for text content
    pub label: Option<LabelLayout>,
    pub hint: HintLayout,
}

impl SlideGeometry {
    pub fn compute(
        bounds: &TrackBounds,
        position: ThumbPosition,
        config: &SlideUnlockConfig,
        metrics: &ContentMetrics,
    ) -> Self {
        let Size { width, height } = bounds.size;
        let track_radius = config.track_corner_radius.unwrap_or(height);

        let track_left = if config.track_follows_thumb {
            position.left_x - bounds.padding_left
        } else {
            0.0
        };
        let track_rect = Rect::from_ltrb(track_left, 0.0, width, height);
        let track = Outline::RoundedRect {
            rect: track_rect,
            radius: track_radius,
        };

        let thumb_rect = Rect::from_ltrb(
            position.left_x,
            bounds.thumb_top,
            position.right_x,
            bounds.thumb_bottom,
        );
        let stretched = position.right_x > position.left_x + bounds.thumb_width + STRETCH_EPSILON;
        let thumb = match config.thumb_shape {
            ThumbShape::Circle if !stretched => {
                let radius = bounds.thumb_width / 2.0;
                Outline::Circle(Circle::new(
                    Point::new(position.left_x + radius, bounds.thumb_top + radius),
                    radius,
                ))
            }
            // A stretched circle becomes a pill matching the track
            ThumbShape::Circle => Outline::RoundedRect {
                rect: thumb_rect,
                radius: track_radius,
            },
            ThumbShape::Square => Outline::RoundedRect {
                rect: thumb_rect,
                radius: config.thumb_corner_radius.unwrap_or(height),
            },
        };

        let content = match (metrics.icon, metrics.label) {
            (Some(icon), _) => {
                let center = Point::new(
                    position.right_x - bounds.thumb_width / 2.0,
                    thumb_rect.center().y,
                );
                ContentGeometry::Icon(Rect::from_center(center, icon))
            }
            (None, Some(label)) => ContentGeometry::Text(Point::new(
                thumb_rect.center().x - label.width / 2.0,
                label.baseline,
            )),
            (None, None) => ContentGeometry::None,
        };

        Self {
            track,
            thumb,
            thumb_rect,
            content,
            hint_origin: Point::new(
                track_rect.center().x - metrics.hint.width / 2.0,
                metrics.hint.baseline,
            ),
            hint_visible: position.left_x <= bounds.left_border,
        }
    }
}

/// Interior of the resting thumb, inside `thumb_padding`
pub fn thumb_interior(bounds: &TrackBounds, config: &SlideUnlockConfig) -> Size {
    let inset = config.thumb_padding * 2.0;
    Size::new(
        (bounds.thumb_width - inset).max(0.0),
        (bounds.thumb_bottom - bounds.thumb_top - inset).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Padding;
    use slidelock_core::EstimatedTextMeasurer;

    fn square() -> SlideUnlockConfig {
        SlideUnlockConfig::new()
            .thumb_shape(ThumbShape::Square)
            .thumb_width(60.0)
            .thumb_text(">")
    }

    #[test]
    fn test_bounds_with_padding() {
        let config = SlideUnlockConfig::new().padding(Padding::new(5.0, 4.0, 10.0, 6.0));
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &config);
        assert_eq!(bounds.left_border, 5.0);
        assert_eq!(bounds.right_border, 290.0);
        assert_eq!(bounds.thumb_top, 4.0);
        assert_eq!(bounds.thumb_bottom, 54.0);
        // Circle diameter is the padded height
        assert_eq!(bounds.thumb_width, 50.0);
        assert_eq!(bounds.max_left(), 240.0);
    }

    #[test]
    fn test_clamping() {
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &square());
        assert_eq!(bounds.clamp_left(-50.0), 0.0);
        assert_eq!(bounds.clamp_left(500.0), 240.0);
        assert_eq!(bounds.clamp_right(0.0, 10.0), 60.0);
        assert_eq!(bounds.clamp_right(0.0, 400.0), 300.0);
    }

    #[test]
    fn test_degenerate_track_pins_thumb() {
        let config = square().thumb_width(400.0);
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &config);
        assert!(bounds.is_degenerate());
        assert_eq!(bounds.clamp_left(120.0), 0.0);
        assert_eq!(bounds.progress(bounds.rest()), 1.0);
        // Covering the border at rest does not count as reaching it
        assert!(!bounds.is_committed(bounds.rest()));
    }

    #[test]
    fn test_progress_and_commit() {
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &square());
        assert_eq!(bounds.progress(bounds.rest()), 0.0);
        assert_eq!(bounds.progress(ThumbPosition::at(120.0, 60.0)), 0.5);
        assert!(bounds.is_committed(ThumbPosition::at(240.0, 60.0)));
        assert!(!bounds.is_committed(ThumbPosition::at(239.0, 60.0)));
    }

    #[test]
    fn test_commit_has_no_tolerance() {
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &square());
        let short = ThumbPosition::at(bounds.clamp_left(239.9995), 60.0);
        assert!(short.right_x < bounds.right_border);
        assert!(!bounds.is_committed(short));
        assert!(bounds.is_committed(ThumbPosition::at(bounds.clamp_left(1e6), 60.0)));

        // A stretched thumb commits through its right edge alone
        let stretched = ThumbPosition {
            left_x: 0.0,
            right_x: bounds.clamp_right(0.0, 1e6),
        };
        assert!(bounds.is_committed(stretched));
        let short = ThumbPosition {
            left_x: 0.0,
            right_x: bounds.clamp_right(0.0, 299.9995),
        };
        assert!(!bounds.is_committed(short));
    }

    #[test]
    fn test_geometry_is_idempotent() {
        let config = square().track_follows_thumb(true);
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &config);
        let metrics = ContentMetrics::default();
        let position = ThumbPosition::at(87.5, 60.0);
        let a = SlideGeometry::compute(&bounds, position, &config, &metrics);
        let b = SlideGeometry::compute(&bounds, position, &config, &metrics);
        assert_eq!(a, b);
        assert_eq!(a.thumb.to_path(), b.thumb.to_path());
    }

    #[test]
    fn test_track_follows_thumb() {
        let config = square()
            .track_follows_thumb(true)
            .padding(Padding::new(4.0, 0.0, 0.0, 0.0));
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &config);
        let geometry = SlideGeometry::compute(
            &bounds,
            ThumbPosition::at(100.0, 60.0),
            &config,
            &ContentMetrics::default(),
        );
        assert_eq!(geometry.track.bounds().left(), 96.0);
        assert_eq!(geometry.track.bounds().right(), 300.0);
        assert!(!geometry.hint_visible);
    }

    #[test]
    fn test_stretched_circle_becomes_pill() {
        let config = SlideUnlockConfig::new().thumb_text(">").flexible_thumb(true);
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &config);
        let metrics = ContentMetrics::default();
        let rest = SlideGeometry::compute(&bounds, bounds.rest(), &config, &metrics);
        assert!(matches!(rest.thumb, Outline::Circle(_)));

        let stretched = ThumbPosition {
            left_x: 0.0,
            right_x: 150.0,
        };
        let geometry = SlideGeometry::compute(&bounds, stretched, &config, &metrics);
        match geometry.thumb {
            Outline::RoundedRect { rect, radius } => {
                assert_eq!(rect.width(), 150.0);
                assert_eq!(radius, 60.0);
            }
            other => panic!("expected pill, got {other:?}"),
        }
    }

    #[test]
    fn test_icon_is_centered_on_right_anchored_thumb_center() {
        let config = square();
        let bounds = TrackBounds::compute(Size::new(300.0, 60.0), &config);
        let metrics = ContentMetrics {
            icon: Some(Size::new(50.0, 25.0)),
            ..Default::default()
        };
        let position = ThumbPosition::at(40.0, 60.0);
        let geometry = SlideGeometry::compute(&bounds, position, &config, &metrics);
        assert_eq!(
            geometry.content,
            ContentGeometry::Icon(Rect::new(45.0, 17.5, 50.0, 25.0))
        );
    }

    #[test]
    fn test_label_shrinks_to_fit() {
        let measurer = EstimatedTextMeasurer;
        let interior = Size::new(40.0, 40.0);
        let label = LabelLayout::fit(&measurer, "UNLOCK", FontWeight::Regular, interior, 60.0);
        assert!(label.font_size < 40.0);
        assert!(label.width <= interior.width + 1e-3);

        let short = LabelLayout::fit(&measurer, "›", FontWeight::Regular, interior, 60.0);
        assert_eq!(short.font_size, 40.0);
    }

    #[test]
    fn test_empty_interior_fits_nothing() {
        let size = fit_font_size(
            &EstimatedTextMeasurer,
            "abc",
            FontWeight::Regular,
            Size::new(0.0, 20.0),
        );
        assert_eq!(size, 0.0);
    }
}
