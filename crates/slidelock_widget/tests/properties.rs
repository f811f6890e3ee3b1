//! Behavioral tests for the slide control through its public API

use std::sync::{Arc, Mutex};

use image::RgbaImage;
use proptest::prelude::*;
use slidelock_core::{event_types, DrawCommand, Event, RecordingContext, Size};
use slidelock_widget::{
    slide_unlock, ContentGeometry, IconSource, PointerResponse, SlideState, SlideUnlock,
    SlideUnlockConfig, SlideUnlockError, SlideUnlockListener, ThumbShape,
};

const SIZE: Size = Size {
    width: 300.0,
    height: 60.0,
};

#[derive(Default)]
struct Recorded {
    successes: usize,
    failures: usize,
    progress: Vec<f32>,
}

struct RecordingListener(Arc<Mutex<Recorded>>);

impl SlideUnlockListener for RecordingListener {
    fn on_unlock_success(&mut self) {
        self.0.lock().unwrap().successes += 1;
    }

    fn on_unlock_failure(&mut self) {
        self.0.lock().unwrap().failures += 1;
    }

    fn on_unlock_progress(&mut self, progress: f32) {
        self.0.lock().unwrap().progress.push(progress);
    }
}

fn square_control() -> (SlideUnlock, Arc<Mutex<Recorded>>) {
    let mut control = slide_unlock()
        .thumb_shape(ThumbShape::Square)
        .thumb_width(60.0)
        .thumb_text(">")
        .hint_text("Slide to unlock")
        .build()
        .unwrap();
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    control.set_listener(Box::new(RecordingListener(recorded.clone())));
    control.on_size_changed(SIZE);
    (control, recorded)
}

fn down(control: &mut SlideUnlock, x: f32) -> PointerResponse {
    control.handle_event(&Event::pointer(event_types::POINTER_DOWN, x, 30.0))
}

fn move_to(control: &mut SlideUnlock, x: f32) -> PointerResponse {
    control.handle_event(&Event::pointer(event_types::POINTER_MOVE, x, 30.0))
}

fn up(control: &mut SlideUnlock, x: f32) -> PointerResponse {
    control.handle_event(&Event::pointer(event_types::POINTER_UP, x, 30.0))
}

#[test]
fn release_at_the_end_unlocks_once() {
    let (mut control, recorded) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 270.0);
    assert_eq!(control.thumb_left(), 240.0);
    up(&mut control, 270.0);

    assert_eq!(control.state(), SlideState::Committed);
    assert!(!control.tick(16.0));
    assert_eq!(control.thumb_left(), 240.0);

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.successes, 1);
    assert_eq!(recorded.failures, 0);
    assert_eq!(recorded.progress.last(), Some(&1.0));
}

#[test]
fn release_one_pixel_short_springs_back() {
    let (mut control, recorded) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 269.0);
    assert_eq!(control.thumb_left(), 239.0);
    up(&mut control, 269.0);

    assert_eq!(control.state(), SlideState::Springing);
    assert_eq!(recorded.lock().unwrap().failures, 1);
    assert_eq!(recorded.lock().unwrap().successes, 0);
}

#[test]
fn spring_back_lands_exactly_on_the_left_border() {
    let (mut control, recorded) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 167.3);
    up(&mut control, 167.3);

    let mut frames = 0;
    while control.tick(16.0) && control.state() == SlideState::Springing {
        frames += 1;
        assert!(frames < 100, "spring-back never finished");
    }

    assert_eq!(control.state(), SlideState::Idle);
    assert_eq!(control.thumb_left(), 0.0);
    assert_eq!(control.progress(), 0.0);

    // Progress during the spring-back only decreases
    let recorded = recorded.lock().unwrap();
    let peak = recorded
        .progress
        .iter()
        .position(|p| *p == recorded.progress.iter().cloned().fold(0.0, f32::max))
        .unwrap();
    for pair in recorded.progress[peak..].windows(2) {
        assert!(pair[1] <= pair[0] + 1e-6);
    }
    assert_eq!(recorded.progress.last(), Some(&0.0));
}

#[test]
fn reset_is_deterministic() {
    let (mut control, _) = square_control();
    let initial = *control.geometry();

    down(&mut control, 30.0);
    move_to(&mut control, 130.0);
    up(&mut control, 130.0);
    control.tick(100.0);
    control.reset();

    assert_eq!(control.state(), SlideState::Idle);
    assert!(!control.is_animating());
    assert_eq!(*control.geometry(), initial);

    control.reset();
    assert_eq!(*control.geometry(), initial);
}

#[test]
fn reset_after_commit_allows_a_new_gesture() {
    let (mut control, recorded) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 400.0);
    up(&mut control, 400.0);
    control.reset();

    assert_eq!(down(&mut control, 30.0), PointerResponse::Consumed);
    move_to(&mut control, 400.0);
    up(&mut control, 400.0);
    assert_eq!(recorded.lock().unwrap().successes, 2);
}

#[test]
fn icon_is_scaled_to_fit_the_thumb() {
    let config = SlideUnlockConfig::new()
        .icon(IconSource::Bitmap(RgbaImage::new(200, 100)))
        .padding(slidelock_widget::Padding::uniform(5.0));
    let mut control = SlideUnlock::new(config).unwrap();
    control.on_size_changed(SIZE);

    // Circle thumb of diameter 50 with no inner padding
    let scaled = control.icon().and_then(|icon| icon.scaled()).unwrap();
    assert_eq!(scaled.scale(), 0.25);
    assert_eq!(scaled.size(), Size::new(50.0, 25.0));

    match control.geometry().content {
        ContentGeometry::Icon(dest) => {
            assert_eq!(dest.size(), Size::new(50.0, 25.0));
            assert_eq!(dest.center().x, 30.0);
            assert_eq!(dest.center().y, 30.0);
        }
        other => panic!("expected icon content, got {other:?}"),
    }
}

#[test]
fn draw_layers_track_hint_thumb_content() {
    let (mut control, _) = square_control();
    let mut ctx = RecordingContext::new();
    control.draw(&mut ctx).unwrap();

    let kinds: Vec<&str> = ctx
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::FillPath { .. } => "path",
            DrawCommand::Text { .. } => "text",
            DrawCommand::Image { .. } => "image",
        })
        .collect();
    assert_eq!(kinds, ["path", "text", "path", "text"]);
}

#[test]
fn draw_before_layout_is_an_error() {
    let mut control = slide_unlock().thumb_text(">").build().unwrap();
    let mut ctx = RecordingContext::new();
    assert!(matches!(
        control.draw(&mut ctx),
        Err(SlideUnlockError::NotLaidOut)
    ));
}

#[test]
fn icon_content_without_icon_is_rejected() {
    assert!(matches!(
        slide_unlock().build(),
        Err(SlideUnlockError::MissingIcon)
    ));
}

#[test]
fn undecodable_icon_bytes_are_rejected() {
    let result = slide_unlock()
        .icon(IconSource::Bytes(vec![0, 1, 2, 3]))
        .build();
    assert!(matches!(result, Err(SlideUnlockError::IconDecode(_))));
}

#[test]
fn second_pointer_is_ignored_while_dragging() {
    let (mut control, _) = square_control();
    assert_eq!(down(&mut control, 30.0), PointerResponse::Consumed);
    move_to(&mut control, 80.0);
    assert_eq!(down(&mut control, 60.0), PointerResponse::Ignored);
    assert_eq!(control.thumb_left(), 50.0);
}

#[test]
fn pointer_cancel_ends_the_gesture_like_release() {
    let (mut control, recorded) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 400.0);
    let cancel = Event::pointer(event_types::POINTER_CANCEL, 400.0, 30.0);
    assert_eq!(control.handle_event(&cancel), PointerResponse::Consumed);
    // Cancel at the end still counts as reaching the border
    assert_eq!(control.state(), SlideState::Committed);
    assert_eq!(recorded.lock().unwrap().successes, 1);
}

#[test]
fn cancel_without_a_position_still_ends_the_drag() {
    let (mut control, recorded) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 130.0);

    let cancel = Event::bare(event_types::POINTER_CANCEL);
    assert_eq!(control.handle_event(&cancel), PointerResponse::Consumed);
    assert_eq!(control.state(), SlideState::Springing);
    assert_eq!(recorded.lock().unwrap().failures, 1);

    while control.tick(16.0) && control.state() == SlideState::Springing {}
    assert_eq!(down(&mut control, 30.0), PointerResponse::Consumed);
}

#[test]
fn release_a_fraction_of_a_pixel_short_springs_back() {
    let (mut control, recorded) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 269.9995);
    up(&mut control, 269.9995);

    assert_eq!(control.state(), SlideState::Springing);
    assert_eq!(recorded.lock().unwrap().successes, 0);
    assert_eq!(recorded.lock().unwrap().failures, 1);
}

#[test]
fn resize_returns_the_thumb_to_rest() {
    let (mut control, _) = square_control();
    down(&mut control, 30.0);
    move_to(&mut control, 130.0);
    control.on_size_changed(Size::new(400.0, 60.0));

    assert_eq!(control.state(), SlideState::Idle);
    assert_eq!(control.thumb_left(), 0.0);
    assert_eq!(control.bounds().max_left(), 340.0);
    assert_eq!(move_to(&mut control, 200.0), PointerResponse::Ignored);
}

proptest! {
    #[test]
    fn thumb_stays_within_its_borders(moves in prop::collection::vec(-500.0f32..800.0, 1..40)) {
        let (mut control, _) = square_control();
        down(&mut control, 30.0);
        for x in moves {
            move_to(&mut control, x);
            let bounds = *control.bounds();
            prop_assert!(control.thumb_left() >= bounds.left_border);
            prop_assert!(control.thumb_right() <= bounds.right_border + 1e-3);
            let progress = control.progress();
            prop_assert!((0.0..=1.0).contains(&progress));
        }
    }

    #[test]
    fn forward_drags_never_lose_progress(steps in prop::collection::vec(0.0f32..40.0, 1..30)) {
        let (mut control, recorded) = square_control();
        down(&mut control, 30.0);
        let mut x = 30.0;
        for step in &steps {
            x += step;
            move_to(&mut control, x);
        }

        let recorded = recorded.lock().unwrap();
        prop_assert_eq!(recorded.progress.len(), steps.len());
        for pair in recorded.progress.windows(2) {
            prop_assert!(pair[1] >= pair[0], "progress went back: {:?}", pair);
        }
        prop_assert!(recorded.progress.iter().all(|p| (0.0..=1.0).contains(p)));
    }
}
