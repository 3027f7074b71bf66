//! Integration tests for the full transition lifecycle through the public API.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use paneslide::motion::MotionConfig;
use paneslide::panel::{PanelFrame, Side};
use paneslide::registry::VariantRegistry;
use paneslide::tween::{LayerId, Property};
use paneslide::{EngineState, GesturePhase, TransitionError};

const MS_16: Duration = Duration::from_millis(16);
const MS_300: Duration = Duration::from_millis(300);
const SEC_1: Duration = Duration::from_secs(1);

const PANEL: LayerId = LayerId(10);
const CONTENT: LayerId = LayerId(11);
const BACKDROP: LayerId = LayerId(12);

fn frame(side: Side) -> PanelFrame {
    PanelFrame {
        width: 250.0,
        side,
        panel: PANEL,
        content: CONTENT,
        backdrop: BACKDROP,
    }
}

fn done_log() -> Rc<RefCell<Vec<bool>>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn push_done(log: &Rc<RefCell<Vec<bool>>>) -> impl FnOnce(bool) + 'static {
    let log = Rc::clone(log);
    move |open| log.borrow_mut().push(open)
}

#[test]
fn toggle_open_then_closed_at_frame_rate() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("push", &frame(Side::Trailing), MotionConfig::default())
        .unwrap();
    let log = done_log();

    panel.play(true, true, push_done(&log)).unwrap();
    // Drive at ~60fps until settled.
    for _ in 0..40 {
        panel.tick(MS_16).unwrap();
    }
    assert_eq!(*log.borrow(), vec![true]);
    let motion = panel.motion().unwrap();
    assert_eq!(motion.state(), EngineState::Idle);
    assert_eq!(motion.value_of(PANEL, Property::OffsetX), Some(0.0));
    assert_eq!(motion.value_of(CONTENT, Property::OffsetX), Some(-250.0));

    panel.play(false, true, push_done(&log)).unwrap();
    for _ in 0..40 {
        panel.tick(MS_16).unwrap();
    }
    assert_eq!(*log.borrow(), vec![true, false]);
    let motion = panel.motion().unwrap();
    assert_eq!(motion.value_of(PANEL, Property::OffsetX), Some(250.0));
    assert_eq!(motion.value_of(CONTENT, Property::OffsetX), Some(0.0));
}

#[test]
fn initial_setup_without_animation() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("overlay", &frame(Side::Leading), MotionConfig::default())
        .unwrap();
    let log = done_log();

    // Restore a remembered-open panel instantly at startup.
    panel.play(true, false, push_done(&log)).unwrap();
    assert_eq!(*log.borrow(), vec![true]);
    let motion = panel.motion().unwrap();
    assert_eq!(motion.value_of(PANEL, Property::OffsetX), Some(0.0));
    let opacity = motion.value_of(BACKDROP, Property::Opacity).unwrap();
    assert!((opacity - 0.35).abs() < 1e-6, "got {opacity}");
}

#[test]
fn full_drag_open_gesture() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("reveal", &frame(Side::Leading), MotionConfig::default())
        .unwrap();
    let log = done_log();

    panel.scrub_start(false).unwrap();
    // Finger wanders, including backward.
    for fraction in [0.1, 0.3, 0.2, 0.5, 0.75] {
        panel.scrub_step(fraction).unwrap();
    }
    let motion = panel.motion().unwrap();
    assert_eq!(
        motion.value_of(CONTENT, Property::OffsetX),
        Some(250.0 * 0.75)
    );
    assert_eq!(motion.state(), EngineState::Seeking);

    panel.scrub_end(true, 0.75, 2.0, push_done(&log)).unwrap();
    for _ in 0..40 {
        panel.tick(MS_16).unwrap();
    }
    assert_eq!(*log.borrow(), vec![true]);
    assert_eq!(panel.gesture_phase(), GesturePhase::Idle);
    assert_eq!(
        panel.motion().unwrap().value_of(CONTENT, Property::OffsetX),
        Some(250.0)
    );
}

#[test]
fn drag_to_close_an_open_panel() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("push", &frame(Side::Leading), MotionConfig::default())
        .unwrap();
    panel.play(true, false, |_| {}).unwrap();

    let log = done_log();
    panel.scrub_start(true).unwrap();
    panel.scrub_step(0.6).unwrap();
    panel.scrub_end(true, 0.6, 0.0, push_done(&log)).unwrap();
    for _ in 0..40 {
        panel.tick(MS_16).unwrap();
    }
    assert_eq!(*log.borrow(), vec![false]);
    assert_eq!(
        panel.motion().unwrap().value_of(PANEL, Property::OffsetX),
        Some(-250.0)
    );
}

#[test]
fn half_hearted_close_snaps_back_open() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("push", &frame(Side::Trailing), MotionConfig::default())
        .unwrap();
    panel.play(true, false, |_| {}).unwrap();

    let log = done_log();
    panel.scrub_start(true).unwrap();
    panel.scrub_step(0.2).unwrap();
    panel.scrub_end(false, 0.2, 0.1, push_done(&log)).unwrap();
    for _ in 0..40 {
        panel.tick(MS_16).unwrap();
    }
    assert_eq!(*log.borrow(), vec![true]);
    assert_eq!(
        panel.motion().unwrap().value_of(PANEL, Property::OffsetX),
        Some(0.0)
    );
}

#[test]
fn fast_flick_settles_sooner_than_slow_release() {
    let config = MotionConfig {
        duration: SEC_1,
        ..Default::default()
    };
    let registry = VariantRegistry::with_builtins();

    let settle_ticks = |velocity: f32| -> u32 {
        let mut panel = registry
            .create("push", &frame(Side::Leading), config)
            .unwrap();
        let log = done_log();
        panel.scrub_start(false).unwrap();
        panel.scrub_step(0.5).unwrap();
        panel.scrub_end(true, 0.5, velocity, push_done(&log)).unwrap();
        let mut ticks = 0;
        while log.borrow().is_empty() {
            panel.tick(MS_16).unwrap();
            ticks += 1;
            assert!(ticks < 200, "settle never completed");
        }
        ticks
    };

    let slow = settle_ticks(0.0);
    let fast = settle_ticks(8.0);
    assert!(
        fast < slow,
        "flick should settle in fewer frames ({fast} vs {slow})"
    );
}

#[test]
fn interrupted_play_fires_both_callbacks_once() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("overlay", &frame(Side::Trailing), MotionConfig::default())
        .unwrap();
    let log = done_log();

    panel.play(true, true, push_done(&log)).unwrap();
    panel.tick(Duration::from_millis(100)).unwrap();
    panel.play(false, true, push_done(&log)).unwrap();
    panel.tick(SEC_1).unwrap();

    assert_eq!(*log.borrow(), vec![true, false]);
}

#[test]
fn grab_interrupts_timed_playback() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("push", &frame(Side::Leading), MotionConfig::default())
        .unwrap();
    let log = done_log();

    panel.play(true, true, push_done(&log)).unwrap();
    panel.tick(Duration::from_millis(100)).unwrap();

    // User catches the panel mid-open and drags it back shut.
    panel.scrub_start(false).unwrap();
    assert_eq!(*log.borrow(), vec![true], "prior play fired as superseded");
    panel.scrub_step(0.1).unwrap();
    panel.scrub_end(false, 0.1, 0.0, push_done(&log)).unwrap();
    panel.tick(MS_300).unwrap();

    assert_eq!(*log.borrow(), vec![true, false]);
    assert_eq!(
        panel.motion().unwrap().value_of(PANEL, Property::OffsetX),
        Some(-250.0)
    );
}

#[test]
fn destroyed_panel_rejects_the_whole_api() {
    let registry = VariantRegistry::with_builtins();
    let mut panel = registry
        .create("reveal", &frame(Side::Leading), MotionConfig::default())
        .unwrap();
    panel.destroy();
    panel.destroy(); // idempotent

    assert_eq!(panel.play(true, true, |_| {}), Err(TransitionError::Destroyed));
    assert_eq!(panel.scrub_start(false), Err(TransitionError::Destroyed));
    assert_eq!(panel.tick(MS_16), Err(TransitionError::Destroyed));
    assert!(panel.motion().is_none());
}
