use std::time::Duration;

use linechart_rs::api::{ChartEngine, ChartEngineConfig};
use linechart_rs::core::{Padding, Viewport};
use linechart_rs::interaction::{FlingConfig, GestureState, TouchEvent};
use linechart_rs::render::NullRenderer;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn zoomed_engine(config: ChartEngineConfig) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.on_size_changed(400, 400, Padding::default());
    engine
        .set_current_viewport(Viewport::new(1.0, 2.5, 2.5, 1.0))
        .expect("zoom in");
    engine
}

/// Drags 100 px to the left in 40 ms and releases.
fn swipe_left(engine: &mut ChartEngine<NullRenderer>) -> bool {
    engine.on_touch_event(&TouchEvent::down(ms(0), 200.0, 200.0));
    engine.on_touch_event(&TouchEvent::move_to(ms(10), 190.0, 200.0));
    engine.on_touch_event(&TouchEvent::move_to(ms(20), 150.0, 200.0));
    engine.on_touch_event(&TouchEvent::move_to(ms(30), 100.0, 200.0));
    engine.on_touch_event(&TouchEvent::up(ms(40), 100.0, 200.0))
}

#[test]
fn fast_release_starts_fling_and_requests_redraw() {
    let mut engine = zoomed_engine(ChartEngineConfig::default());

    assert!(swipe_left(&mut engine));
    assert_eq!(engine.gesture_state(), GestureState::Flinging);
}

#[test]
fn fling_keeps_moving_with_decaying_steps() {
    let mut engine = zoomed_engine(ChartEngineConfig::default());
    swipe_left(&mut engine);

    let start = engine.current_viewport().left;
    assert!(engine.on_compute_scroll(ms(56)));
    let first = engine.current_viewport().left;
    assert!(engine.on_compute_scroll(ms(72)));
    let second = engine.current_viewport().left;

    assert!(first > start);
    assert!(second > first);
    assert!(second - first < first - start);
}

#[test]
fn fling_stops_at_edge_without_overshoot() {
    let mut engine = zoomed_engine(ChartEngineConfig::default());
    swipe_left(&mut engine);
    let width = engine.current_viewport().width();

    let mut now = 40;
    for _ in 0..600 {
        if engine.gesture_state() != GestureState::Flinging {
            break;
        }
        now += 16;
        engine.on_compute_scroll(ms(now));
        let max = engine.maximum_viewport();
        assert!(max.contains_viewport(engine.current_viewport()));
    }

    assert_eq!(engine.gesture_state(), GestureState::Idle);
    let current = engine.current_viewport();
    assert!((current.right - 4.0).abs() <= 1e-9);
    assert!((current.width() - width).abs() <= 1e-9);
    assert!(!engine.on_compute_scroll(ms(now + 16)));
}

#[test]
fn slow_release_does_not_fling() {
    let mut engine = zoomed_engine(ChartEngineConfig::default());

    engine.on_touch_event(&TouchEvent::down(ms(0), 200.0, 200.0));
    engine.on_touch_event(&TouchEvent::move_to(ms(50), 188.0, 200.0));
    engine.on_touch_event(&TouchEvent::move_to(ms(100), 186.0, 200.0));
    assert!(!engine.on_touch_event(&TouchEvent::up(ms(140), 186.0, 200.0)));
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn touch_down_interrupts_fling() {
    let mut engine = zoomed_engine(ChartEngineConfig::default());
    swipe_left(&mut engine);
    engine.on_compute_scroll(ms(56));
    let stopped_at = engine.current_viewport();

    engine.on_touch_event(&TouchEvent::down(ms(60), 200.0, 200.0));
    assert_eq!(engine.gesture_state(), GestureState::Panning);
    assert!(!engine.on_compute_scroll(ms(76)));
    assert_eq!(engine.current_viewport(), stopped_at);
}

#[test]
fn stronger_decay_ends_fling_sooner() {
    let gentle = ChartEngineConfig::default();
    let harsh = ChartEngineConfig::default().with_fling_config(FlingConfig {
        decay_per_second: 1e-6,
        ..FlingConfig::default()
    });

    let frames_until_idle = |config: ChartEngineConfig| {
        let mut engine = zoomed_engine(config);
        engine
            .set_current_viewport(Viewport::new(1.0, 4.0, 1.5, 1.0))
            .expect("narrow viewport");
        swipe_left(&mut engine);
        let mut frames = 0;
        let mut now = 40;
        while engine.gesture_state() == GestureState::Flinging && frames < 1_000 {
            now += 16;
            engine.on_compute_scroll(ms(now));
            frames += 1;
        }
        frames
    };

    assert!(frames_until_idle(harsh) < frames_until_idle(gentle));
}

#[test]
fn cancel_stops_fling() {
    let mut engine = zoomed_engine(ChartEngineConfig::default());
    swipe_left(&mut engine);

    engine.on_touch_event(&TouchEvent::cancel(ms(45)));
    assert_eq!(engine.gesture_state(), GestureState::Idle);
    assert!(!engine.on_compute_scroll(ms(61)));
}
