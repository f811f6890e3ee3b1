//! Slide-to-unlock control
//!
//! [`SlideUnlock`] owns the whole interaction: it turns pointer events into a
//! clamped thumb position, decides commit or rollback on release, drives the
//! spring-back and shine animations from host ticks, and paints itself into a
//! [`DrawContext`].
//!
//! The host is responsible for:
//! - calling [`SlideUnlock::on_size_changed`] before the first draw and after
//!   every resize
//! - forwarding pointer events in local coordinates
//! - calling [`SlideUnlock::tick`] every frame while it returns `true`
//!
//! # Example
//!
//! ```rust
//! use slidelock_core::{event_types, Event, RecordingContext, Size};
//! use slidelock_widget::{slide_unlock, SlideState};
//!
//! let mut control = slide_unlock()
//!     .thumb_text("›")
//!     .hint_text("Slide to unlock")
//!     .on_success(|| println!("unlocked"))
//!     .build()
//!     .unwrap();
//! control.on_size_changed(Size::new(300.0, 60.0));
//!
//! control.handle_event(&Event::pointer(event_types::POINTER_DOWN, 30.0, 30.0));
//! control.handle_event(&Event::pointer(event_types::POINTER_MOVE, 400.0, 30.0));
//! control.handle_event(&Event::pointer(event_types::POINTER_UP, 400.0, 30.0));
//! assert_eq!(control.state(), SlideState::Committed);
//!
//! let mut ctx = RecordingContext::new();
//! control.draw(&mut ctx).unwrap();
//! ```

use slidelock_animation::{AnimationStatus, ValueAnimator};
use slidelock_core::{
    event_types, Brush, Color, DrawContext, EstimatedTextMeasurer, Event, ImageOptions, Point,
    Size, StateTransitions, TextMeasurer, TextStyle,
};
use tracing::{debug, trace, warn};

use crate::config::{
    IconSource, LabelStyle, Padding, SlideUnlockConfig, ThumbContent, ThumbShape,
};
use crate::error::{Result, SlideUnlockError};
use crate::geometry::{
    thumb_interior, ContentGeometry, ContentMetrics, HintLayout, LabelLayout, SlideGeometry,
    ThumbPosition, TrackBounds,
};
use crate::gesture::{Axis, GestureSession, PointerResponse};
use crate::icon::ThumbIcon;
use crate::listener::{CallbackListener, SlideUnlockListener};
use crate::measure::{self, MeasureSpec};
use crate::shine::ShineEffect;
use crate::state::{slide_events, SlideState};

/// The slide-to-unlock control
pub struct SlideUnlock {
    config: SlideUnlockConfig,
    state: SlideState,
    /// Set by the first `on_size_changed`
    laid_out: bool,
    bounds: TrackBounds,
    position: ThumbPosition,
    geometry: SlideGeometry,
    metrics: ContentMetrics,
    session: Option<GestureSession>,
    /// Distance the spring-back covers, captured on release
    sliding_distance: f32,
    /// Interpolation factor 1 → 0 for the spring-back
    spring: ValueAnimator<f32>,
    shine: Option<ShineEffect>,
    icon: Option<ThumbIcon>,
    listener: Option<Box<dyn SlideUnlockListener>>,
    measurer: Box<dyn TextMeasurer>,
}

impl SlideUnlock {
    /// Create a control, failing if the config cannot render
    pub fn new(config: SlideUnlockConfig) -> Result<Self> {
        Self::with_text_measurer(config, Box::new(EstimatedTextMeasurer))
    }

    /// Create a control that sizes its labels with the host's font stack
    pub fn with_text_measurer(
        config: SlideUnlockConfig,
        measurer: Box<dyn TextMeasurer>,
    ) -> Result<Self> {
        config.validate()?;

        let icon = match (config.thumb_content, &config.icon) {
            (ThumbContent::Icon, Some(source)) => Some(ThumbIcon::load(source)?),
            (ThumbContent::Icon, None) => return Err(SlideUnlockError::MissingIcon),
            (ThumbContent::Text, _) => None,
        };

        let spring = ValueAnimator::new(1.0, 0.0, config.resilience_duration_ms)
            .easing(config.spring_easing);

        let shine = config.shine_effect.then(|| {
            ShineEffect::new(
                config.shine_duration_ms,
                config.hint_text_color,
                config.hint_shine_color,
            )
        });

        Ok(Self {
            config,
            state: SlideState::Idle,
            laid_out: false,
            bounds: TrackBounds::default(),
            position: ThumbPosition::default(),
            geometry: SlideGeometry::default(),
            metrics: ContentMetrics::default(),
            session: None,
            sliding_distance: 0.0,
            spring,
            shine,
            icon,
            listener: None,
            measurer,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &SlideUnlockConfig {
        &self.config
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Geometry for the current thumb position
    pub fn geometry(&self) -> &SlideGeometry {
        &self.geometry
    }

    /// Track limits for the current size
    pub fn bounds(&self) -> &TrackBounds {
        &self.bounds
    }

    /// Current thumb travel in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.bounds.progress(self.position)
    }

    /// Left edge of the thumb
    pub fn thumb_left(&self) -> f32 {
        self.position.left_x
    }

    /// Right edge of the thumb
    pub fn thumb_right(&self) -> f32 {
        self.position.right_x
    }

    /// Whether `tick` has work to do
    pub fn is_animating(&self) -> bool {
        self.spring.is_playing() || self.shine.as_ref().is_some_and(|s| s.is_running())
    }

    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Scaled icon, for hosts that upload bitmaps by [`slidelock_core::ImageId`]
    pub fn icon(&self) -> Option<&ThumbIcon> {
        self.icon.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Listener
    // ─────────────────────────────────────────────────────────────────────────

    /// Register the listener, replacing any previous one
    pub fn set_listener(&mut self, listener: Box<dyn SlideUnlockListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    fn notify_progress(&mut self) {
        let progress = self.progress();
        if let Some(listener) = self.listener.as_mut() {
            if listener.capabilities().progress {
                listener.on_unlock_progress(progress);
            }
        }
    }

    fn notify_success(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_unlock_success();
        }
    }

    fn notify_failure(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            if listener.capabilities().failure {
                listener.on_unlock_failure();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    /// Desired size for the host's constraints (default 300 × 60)
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        measure::measure(width, height)
    }

    /// Re-initialize all geometry for a new size
    ///
    /// The thumb returns to the left border and any running spring-back is
    /// dropped. Icon scaling and label fitting happen here, once per size.
    pub fn on_size_changed(&mut self, size: Size) {
        self.bounds = TrackBounds::compute(size, &self.config);
        if self.bounds.is_degenerate() {
            warn!(
                width = size.width,
                thumb_width = self.bounds.thumb_width,
                "thumb does not fit the track; it will not move"
            );
        }

        self.spring.stop();
        self.sliding_distance = 0.0;
        self.session = None;
        self.transition(slide_events::RESET);
        self.position = self.bounds.rest();

        let interior = thumb_interior(&self.bounds, &self.config);
        let icon = self.icon.as_mut().map(|icon| {
            icon.invalidate();
            icon.prepare(interior).size()
        });
        let label = match self.config.thumb_content {
            ThumbContent::Text => Some(LabelLayout::fit(
                &*self.measurer,
                &self.config.thumb_text,
                self.config.thumb_text_style.font_weight(),
                interior,
                size.height,
            )),
            ThumbContent::Icon => None,
        };
        let hint = HintLayout::measure(&*self.measurer, &self.config, size.height);
        self.metrics = ContentMetrics { icon, label, hint };

        if let Some(shine) = self.shine.as_mut() {
            shine.set_width(size.width);
        }

        self.laid_out = true;
        self.recompute();
        debug!(
            width = size.width,
            height = size.height,
            thumb_width = self.bounds.thumb_width,
            "size changed"
        );
    }

    fn recompute(&mut self) {
        self.geometry =
            SlideGeometry::compute(&self.bounds, self.position, &self.config, &self.metrics);
    }

    fn transition(&mut self, event: u32) -> bool {
        match self.state.on_event(event) {
            Some(next) => {
                debug!(
                    from = ?self.state,
                    to = ?next,
                    event = slide_events::name(event),
                    "slide transition"
                );
                self.state = next;
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle a pointer event in local coordinates
    ///
    /// Release and cancel end the gesture whether or not they carry a
    /// position. Press and move without one are ignored.
    pub fn handle_event(&mut self, event: &Event) -> PointerResponse {
        if !self.laid_out {
            return PointerResponse::Ignored;
        }

        match (event.event_type, event.position()) {
            (event_types::POINTER_UP | event_types::POINTER_CANCEL, _) => self.pointer_up(),
            (event_types::POINTER_DOWN, Some((x, y))) => self.pointer_down(x, y),
            (event_types::POINTER_MOVE, Some((x, y))) => self.pointer_move(x, y),
            _ => PointerResponse::Ignored,
        }
    }

    fn pointer_down(&mut self, x: f32, y: f32) -> PointerResponse {
        if self.session.is_some() {
            // Single pointer model: ignore additional pointers
            return PointerResponse::Ignored;
        }
        if !self.geometry.thumb_rect.contains(Point::new(x, y)) {
            return PointerResponse::Ignored;
        }
        if !self.transition(event_types::POINTER_DOWN) {
            return PointerResponse::Ignored;
        }

        if self.spring.is_playing() {
            debug!(left_x = self.position.left_x, "spring-back interrupted");
            self.spring.stop();
        }
        self.sliding_distance = 0.0;
        self.session = Some(GestureSession::begin(x, y));
        PointerResponse::Consumed
    }

    fn pointer_move(&mut self, x: f32, y: f32) -> PointerResponse {
        let Some(mut session) = self.session else {
            return PointerResponse::Ignored;
        };

        let mut response = PointerResponse::Consumed;
        if self.config.direction_lock {
            match session.resolve_axis(x, y, self.config.touch_slop) {
                Some(Axis::Horizontal) => response = PointerResponse::Claim,
                Some(Axis::Vertical) => {
                    debug!("vertical gesture released to ancestor");
                    self.session = Some(session);
                    self.pointer_up();
                    return PointerResponse::Release;
                }
                None => {}
            }
        }

        let delta = session.advance(x);
        self.session = Some(session);
        self.apply_drag(delta);
        response
    }

    fn apply_drag(&mut self, delta: f32) {
        if self.config.flexible_thumb {
            let right = self.position.right_x + delta;
            self.position.right_x = self.bounds.clamp_right(self.position.left_x, right);
        } else {
            let left = self.bounds.clamp_left(self.position.left_x + delta);
            self.position = ThumbPosition::at(left, self.bounds.thumb_width);
        }
        self.recompute();
        trace!(
            left_x = self.position.left_x,
            right_x = self.position.right_x,
            "thumb moved"
        );
        self.notify_progress();
    }

    fn pointer_up(&mut self) -> PointerResponse {
        if self.session.take().is_none() {
            return PointerResponse::Ignored;
        }

        if self.bounds.is_committed(self.position) {
            self.transition(slide_events::COMMIT);
            self.notify_success();
        } else {
            self.sliding_distance = if self.config.flexible_thumb {
                self.position.right_x - self.position.left_x - self.bounds.thumb_width
            } else {
                self.position.left_x - self.bounds.left_border
            };
            self.transition(slide_events::ROLLBACK);
            self.spring.start();
            self.notify_failure();
        }
        PointerResponse::Consumed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance animations by `dt_ms`; returns true if a redraw is needed
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let mut redraw = false;

        match self.spring.tick(dt_ms) {
            AnimationStatus::Idle => {}
            AnimationStatus::Running => {
                self.apply_spring(self.spring.value());
                redraw = true;
            }
            AnimationStatus::Finished => {
                self.apply_spring(0.0);
                self.sliding_distance = 0.0;
                self.transition(slide_events::SETTLED);
                redraw = true;
            }
        }

        if let Some(shine) = self.shine.as_mut() {
            redraw |= shine.tick(dt_ms);
        }

        redraw
    }

    fn apply_spring(&mut self, t: f32) {
        let left = self.bounds.left_border;
        let width = self.bounds.thumb_width;
        self.position = if self.config.flexible_thumb {
            ThumbPosition {
                left_x: left,
                right_x: left + width + self.sliding_distance * t,
            }
        } else {
            ThumbPosition::at(left + self.sliding_distance * t, width)
        };
        self.recompute();
        trace!(t, left_x = self.position.left_x, "spring-back tick");
        self.notify_progress();
    }

    /// Put the thumb back at the left border immediately
    pub fn reset(&mut self) {
        self.spring.stop();
        self.sliding_distance = 0.0;
        self.session = None;
        self.transition(slide_events::RESET);

        let rest = self.bounds.rest();
        if self.position != rest {
            self.position = rest;
            self.recompute();
            self.notify_progress();
        }
        debug!("reset");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    /// Paint the control: track, hint text, thumb background, thumb content
    pub fn draw(&mut self, ctx: &mut dyn DrawContext) -> Result<()> {
        if !self.laid_out {
            warn!("draw requested before layout");
            return Err(SlideUnlockError::NotLaidOut);
        }

        // The sweep runs from the first paint on, hint shown or not
        if let Some(shine) = self.shine.as_mut() {
            shine.ensure_started();
        }

        let geometry = self.geometry;

        ctx.fill_path(&geometry.track.to_path(), self.config.track_color.into());

        if geometry.hint_visible && !self.config.hint_text.is_empty() {
            let style = TextStyle::new(self.config.hint_text_size)
                .with_weight(self.config.hint_text_style.font_weight())
                .with_color(self.config.hint_text_color);
            let brush = match self.shine.as_ref() {
                Some(shine) => Brush::Linear(shine.gradient()),
                None => Brush::Solid(self.config.hint_text_color),
            };
            ctx.draw_text(&self.config.hint_text, geometry.hint_origin, &style, brush);
        }

        ctx.fill_path(&geometry.thumb.to_path(), self.config.thumb_color.into());

        match geometry.content {
            ContentGeometry::Icon(dest) => {
                let scaled = self
                    .icon
                    .as_ref()
                    .and_then(|icon| icon.scaled())
                    .ok_or(SlideUnlockError::NotLaidOut)?;
                let options = ImageOptions {
                    tint: self.config.thumb_tint,
                };
                ctx.draw_image(scaled.id(), dest, &options);
            }
            ContentGeometry::Text(origin) => {
                let color = self.config.thumb_tint.unwrap_or(Color::WHITE);
                let font_size = self.metrics.label.map(|l| l.font_size).unwrap_or(0.0);
                let style = TextStyle::new(font_size)
                    .with_weight(self.config.thumb_text_style.font_weight())
                    .with_color(color);
                ctx.draw_text(&self.config.thumb_text, origin, &style, color.into());
            }
            ContentGeometry::None => {}
        }

        Ok(())
    }
}

impl std::fmt::Debug for SlideUnlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideUnlock")
            .field("state", &self.state)
            .field("position", &self.position)
            .field("bounds", &self.bounds)
            .field("sliding_distance", &self.sliding_distance)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Create a slide control
pub fn slide_unlock() -> SlideUnlockBuilder {
    SlideUnlockBuilder {
        config: SlideUnlockConfig::default(),
        listener: None,
        measurer: None,
    }
}

/// Builder for creating slide controls
pub struct SlideUnlockBuilder {
    config: SlideUnlockConfig,
    listener: Option<CallbackListener>,
    measurer: Option<Box<dyn TextMeasurer>>,
}

impl SlideUnlockBuilder {
    /// Start from an existing config
    pub fn config(mut self, config: SlideUnlockConfig) -> Self {
        self.config = config;
        self
    }

    pub fn track_color(mut self, color: impl Into<Color>) -> Self {
        self.config.track_color = color.into();
        self
    }

    pub fn thumb_color(mut self, color: impl Into<Color>) -> Self {
        self.config.thumb_color = color.into();
        self
    }

    pub fn thumb_shape(mut self, shape: ThumbShape) -> Self {
        self.config.thumb_shape = shape;
        self
    }

    pub fn thumb_width(mut self, width: f32) -> Self {
        self.config.thumb_width = width;
        self
    }

    pub fn thumb_padding(mut self, padding: f32) -> Self {
        self.config.thumb_padding = padding;
        self
    }

    pub fn thumb_tint(mut self, color: impl Into<Color>) -> Self {
        self.config.thumb_tint = Some(color.into());
        self
    }

    /// Use an icon as thumb content
    pub fn icon(mut self, source: IconSource) -> Self {
        self.config = self.config.icon(source);
        self
    }

    /// Use a text label as thumb content
    pub fn thumb_text(mut self, text: impl Into<String>) -> Self {
        self.config = self.config.thumb_text(text);
        self
    }

    pub fn thumb_text_style(mut self, style: LabelStyle) -> Self {
        self.config.thumb_text_style = style;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.config.padding = padding;
        self
    }

    pub fn hint_text(mut self, text: impl Into<String>) -> Self {
        self.config.hint_text = text.into();
        self
    }

    pub fn shine_effect(mut self, enabled: bool) -> Self {
        self.config.shine_effect = enabled;
        self
    }

    pub fn resilience_duration_ms(mut self, duration_ms: u32) -> Self {
        self.config.resilience_duration_ms = duration_ms;
        self
    }

    pub fn track_follows_thumb(mut self, enabled: bool) -> Self {
        self.config.track_follows_thumb = enabled;
        self
    }

    pub fn flexible_thumb(mut self, enabled: bool) -> Self {
        self.config.flexible_thumb = enabled;
        self
    }

    pub fn direction_lock(mut self, enabled: bool) -> Self {
        self.config.direction_lock = enabled;
        self
    }

    /// Measure labels with the host's font stack
    pub fn text_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = Some(measurer);
        self
    }

    /// Set the success callback
    pub fn on_success<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.listener = Some(self.listener.unwrap_or_default().on_success(callback));
        self
    }

    /// Set the failure callback
    pub fn on_failure<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.listener = Some(self.listener.unwrap_or_default().on_failure(callback));
        self
    }

    /// Set the combined success/failure callback
    pub fn on_result<F: FnMut(bool) + Send + 'static>(mut self, callback: F) -> Self {
        self.listener = Some(self.listener.unwrap_or_default().on_result(callback));
        self
    }

    /// Set the progress callback
    pub fn on_progress<F: FnMut(f32) + Send + 'static>(mut self, callback: F) -> Self {
        self.listener = Some(self.listener.unwrap_or_default().on_progress(callback));
        self
    }

    /// Build the control
    pub fn build(self) -> Result<SlideUnlock> {
        let measurer = self
            .measurer
            .unwrap_or_else(|| Box::new(EstimatedTextMeasurer));
        let mut control = SlideUnlock::with_text_measurer(self.config, measurer)?;
        if let Some(listener) = self.listener {
            control.set_listener(Box::new(listener));
        }
        Ok(control)
    }
}
