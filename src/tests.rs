use crate::app::navigation::{frame_step, MAX_FRAME_STEP};
use crate::app::FlagshipApp;
use crate::carousel::{Carousel, CarouselEvent};
use crate::errors::CarouselError;
use crate::events::EventCatalog;
use crate::settings::Settings;
use std::path::PathBuf;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const FRAME_DT: f32 = 0.016;
/// `stable_dt` reported for the first frame after the window sat idle.
const IDLE_DT: f32 = 60.0;

fn bundled_app() -> FlagshipApp {
    FlagshipApp::with_catalog(Settings::default(), EventCatalog::bundled().unwrap(), None).unwrap()
}

fn run_app_frames(app: &mut FlagshipApp, frames: usize) -> Vec<CarouselEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        events.extend(app.update_carousel(FRAME_DT));
        app.apply_pending_navigation();
    }
    events
}

fn run_for(carousel: &mut Carousel, total: Duration) -> Vec<CarouselEvent> {
    let mut events = Vec::new();
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        events.extend(carousel.tick(FRAME));
        elapsed += FRAME;
    }
    events
}

#[test]
fn test_bundled_catalog_loops_through_every_event() {
    let catalog = EventCatalog::bundled().unwrap();
    let mut carousel = Carousel::new(catalog.len(), Settings::default().timing()).unwrap();

    let mut seen = Vec::new();
    for _ in 0..catalog.len() {
        seen.push(carousel.active_index());
        run_for(&mut carousel, Duration::from_millis(5_500));
    }

    let expected: Vec<usize> = (0..catalog.len()).collect();
    assert_eq!(seen, expected);
    // one more lap brings us back to the first event through the wrap
    assert_eq!(carousel.active_index(), 0);
    assert_eq!(carousel.current_slot(), catalog.len());
}

#[test]
fn test_wrap_is_reported_once_per_lap() {
    let mut carousel = Carousel::new(3, Settings::default().timing()).unwrap();
    let events = run_for(&mut carousel, Duration::from_secs(17));

    let wraps: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, CarouselEvent::Wrapped { .. }))
        .collect();
    assert_eq!(wraps, vec![&CarouselEvent::Wrapped { from: 6, to: 3 }]);
}

#[test]
fn test_settings_timing_drives_carousel() {
    let settings = Settings {
        auto_advance_secs: 1.0,
        transition_secs: 0.1,
        ..Settings::default()
    };
    let mut carousel = Carousel::new(2, settings.timing()).unwrap();

    let events = run_for(&mut carousel, Duration::from_millis(1_200));
    assert!(events.contains(&CarouselEvent::AutoAdvanced));
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn test_catalog_load_errors() {
    let err = EventCatalog::load(&PathBuf::from("/nonexistent/events.json")).unwrap_err();
    assert!(matches!(err, CarouselError::FileNotFound { .. }));
    assert!(err.user_message().contains("bundled events"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, r#"{"not": "a list"}"#).unwrap();
    let err = EventCatalog::load(&path).unwrap_err();
    assert_eq!(err.error_code(), "EVENT_DATA_ERROR");
    assert!(!err.is_recoverable());
}

#[test]
fn test_catalog_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(
        &path,
        r#"[{"id": 7, "name": "Quiz", "category": "Literary", "about": "Buzzers ready.", "img": "quiz.png"}]"#,
    )
    .unwrap();

    let catalog = EventCatalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.base_dir(), Some(dir.path()));
    let event = catalog.get(0).unwrap();
    assert_eq!(catalog.image_path(event), Some(dir.path().join("quiz.png")));
}

#[test]
fn test_error_messages() {
    let error = CarouselError::IndexOutOfRange { index: 9, len: 5 };
    assert_eq!(error.error_code(), "INDEX_OUT_OF_RANGE");
    assert_eq!(error.to_string(), "Event index 9 is out of range (0..5)");

    let error = CarouselError::EmptyCatalog;
    assert!(!error.is_recoverable());
    assert!(error.user_message().contains("at least one event"));
}

#[test]
fn test_frame_step_is_clamped() {
    assert_eq!(frame_step(IDLE_DT), MAX_FRAME_STEP);
    assert_eq!(frame_step(0.0), Duration::ZERO);
    assert_eq!(frame_step(-0.5), Duration::ZERO);
    assert_eq!(frame_step(f32::NAN), Duration::ZERO);

    let step = frame_step(FRAME_DT);
    assert!(step > Duration::ZERO && step < MAX_FRAME_STEP);
}

#[test]
fn test_resume_after_idle_restarts_auto_advance_delay() {
    let mut app = bundled_app();
    app.toggle_pause();
    assert!(app.update_carousel(IDLE_DT).is_empty());

    // The resume key arrives in the frame after the idle gap
    app.toggle_pause();
    let events = app.update_carousel(IDLE_DT);

    assert!(events.is_empty());
    assert_eq!(app.carousel.active_index(), 0);
    let progress = app.carousel.auto_progress().unwrap();
    assert!(progress < 0.05, "timer should restart on resume, got {}", progress);
}

#[test]
fn test_navigation_after_idle_still_slides() {
    let mut app = bundled_app();
    let len = app.catalog.len();
    app.set_pointer_over_carousel(true);
    assert!(app.update_carousel(IDLE_DT).is_empty());

    app.pending_navigate_next = true;
    app.apply_pending_navigation();
    let events = app.update_carousel(IDLE_DT);

    assert!(events.is_empty());
    assert!(app.carousel.is_transitioning());
    let offset = app.carousel.offset();
    assert!(offset > len as f32 && offset < (len + 1) as f32);

    let events = run_app_frames(&mut app, 40);
    assert_eq!(events, vec![CarouselEvent::Arrived { slot: len + 1 }]);
    assert_eq!(app.carousel.active_index(), 1);
}

#[test]
fn test_pending_actions_are_consumed_once() {
    let mut app = bundled_app();
    app.pending_navigate_prev = true;
    app.pending_navigate_next = true;
    app.apply_pending_navigation();

    assert!(!app.pending_navigate_prev);
    assert!(!app.pending_navigate_next);
    assert!(app.carousel.is_transitioning());

    // Previous won; next was dropped while the slide ran
    run_app_frames(&mut app, 40);
    assert_eq!(app.carousel.active_index(), app.catalog.len() - 1);
}

#[test]
fn test_hover_ignored_when_pause_on_hover_is_off() {
    let mut app = bundled_app();
    app.set_pointer_over_carousel(true);
    assert!(app.carousel.is_hovered());
    assert_eq!(app.carousel.auto_progress(), None);

    app.settings.pause_on_hover = false;
    app.apply_settings();
    assert!(!app.carousel.is_hovered());

    app.set_pointer_over_carousel(true);
    assert!(!app.carousel.is_hovered());

    let events = run_app_frames(&mut app, 325);
    assert!(events.contains(&CarouselEvent::AutoAdvanced));
}

#[test]
fn test_only_events_with_artwork_request_images() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = EventCatalog::from_json(
        r#"[
            {"id": 1, "name": "Quiz", "category": "Literary", "about": "Buzzers.", "img": "/images/quiz.png"},
            {"id": 2, "name": "Jam", "category": "Cultural", "about": "Loud."}
        ]"#,
        Some(dir.path().to_path_buf()),
    )
    .unwrap();
    let mut app = FlagshipApp::with_catalog(Settings::default(), catalog, None).unwrap();

    app.request_all_images();
    assert!(app.image_requests.contains(&0));
    assert!(!app.image_requests.contains(&1));
}
