use std::time::Duration;

use linechart_rs::api::{ChartEngine, ChartEngineConfig};
use linechart_rs::core::{Line, LineChartData, Padding, ScreenPoint, Viewport};
use linechart_rs::interaction::{GestureState, TouchAction, TouchEvent, TouchPointer, ZoomType};
use linechart_rs::render::NullRenderer;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn engine_with(config: ChartEngineConfig) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.on_size_changed(400, 400, Padding::default());
    engine
}

fn pinch(engine: &mut ChartEngine<NullRenderer>, from: (f64, f64), to: (f64, f64)) -> bool {
    let y = 200.0;
    engine.on_touch_event(&TouchEvent::down(ms(0), from.0, y));
    engine.on_touch_event(&TouchEvent::new(
        TouchAction::PointerDown { id: 1 },
        &[TouchPointer::new(0, from.0, y), TouchPointer::new(1, from.1, y)],
        ms(10),
    ));
    engine.on_touch_event(&TouchEvent::new(
        TouchAction::Move,
        &[TouchPointer::new(0, to.0, y), TouchPointer::new(1, to.1, y)],
        ms(30),
    ))
}

#[test]
fn move_below_slop_does_not_pan() {
    let mut engine = engine_with(ChartEngineConfig::default());
    engine
        .set_current_viewport(Viewport::new(2.0, 3.0, 3.0, 2.0))
        .expect("zoom in");
    let before = engine.current_viewport();

    assert!(!engine.on_touch_event(&TouchEvent::down(ms(0), 200.0, 200.0)));
    assert_eq!(engine.gesture_state(), GestureState::Panning);
    assert!(!engine.on_touch_event(&TouchEvent::move_to(ms(10), 204.0, 203.0)));
    assert_eq!(engine.current_viewport(), before);
}

#[test]
fn pan_translates_viewport_in_data_units() {
    let mut engine = engine_with(ChartEngineConfig::default());
    engine
        .set_current_viewport(Viewport::new(2.0, 3.0, 3.0, 2.0))
        .expect("zoom in");

    engine.on_touch_event(&TouchEvent::down(ms(0), 200.0, 200.0));
    assert!(engine.on_touch_event(&TouchEvent::move_to(ms(10), 160.0, 240.0)));

    // 400 px spans one data unit, so 40 px is 0.1 on each axis.
    let current = engine.current_viewport();
    assert!((current.left - 2.1).abs() <= 1e-9);
    assert!((current.right - 3.1).abs() <= 1e-9);
    assert!((current.top - 3.1).abs() <= 1e-9);
    assert!((current.bottom - 2.1).abs() <= 1e-9);
}

#[test]
fn pan_past_right_edge_clamps_and_preserves_width() {
    let mut engine = engine_with(ChartEngineConfig::default());
    engine
        .set_current_viewport(Viewport::new(2.5, 3.0, 3.5, 2.0))
        .expect("zoom in");

    engine.on_touch_event(&TouchEvent::down(ms(0), 395.0, 200.0));
    engine.on_touch_event(&TouchEvent::move_to(ms(10), 300.0, 200.0));
    engine.on_touch_event(&TouchEvent::move_to(ms(20), 5.0, 200.0));

    let max = engine.maximum_viewport();
    let current = engine.current_viewport();
    assert_eq!(current.right, max.right);
    assert!((current.width() - 1.0).abs() <= 1e-9);
    assert!((current.left - 3.0).abs() <= 1e-9);
    assert_eq!(current.top, 3.0);
    assert_eq!(current.bottom, 2.0);
}

#[test]
fn pan_on_unzoomed_chart_changes_nothing() {
    let mut engine = engine_with(ChartEngineConfig::default());
    let before = engine.current_viewport();

    engine.on_touch_event(&TouchEvent::down(ms(0), 200.0, 200.0));
    assert!(!engine.on_touch_event(&TouchEvent::move_to(ms(10), 100.0, 100.0)));
    assert_eq!(engine.current_viewport(), before);
}

#[test]
fn pinch_zooms_around_focal_point() {
    let mut engine = engine_with(ChartEngineConfig::default());

    assert!(pinch(&mut engine, (150.0, 250.0), (100.0, 300.0)));
    assert_eq!(engine.gesture_state(), GestureState::Zooming);

    let current = engine.current_viewport();
    assert!((current.left - 1.75).abs() <= 1e-9);
    assert!((current.right - 3.25).abs() <= 1e-9);
    assert!((current.bottom - 1.75).abs() <= 1e-9);
    assert!((current.top - 3.25).abs() <= 1e-9);
    assert!((engine.zoom_level() - 2.0).abs() <= 1e-9);
}

#[test]
fn pinch_is_bounded_by_max_zoom() {
    let mut engine = engine_with(ChartEngineConfig::default().with_zoom_bounds(1.0, 4.0));

    pinch(&mut engine, (190.0, 210.0), (0.0, 400.0));
    assert!((engine.zoom_level() - 4.0).abs() <= 1e-9);

    let max = engine.maximum_viewport();
    assert!(max.contains_viewport(engine.current_viewport()));
}

#[test]
fn pinch_out_beyond_max_viewport_stays_at_full_extent() {
    let mut engine = engine_with(ChartEngineConfig::default());

    pinch(&mut engine, (0.0, 400.0), (190.0, 210.0));
    assert_eq!(engine.current_viewport(), engine.maximum_viewport());
    assert!((engine.zoom_level() - 1.0).abs() <= 1e-12);
}

#[test]
fn pinch_below_min_viewport_span_is_rejected() {
    let config = ChartEngineConfig::default()
        .with_zoom_bounds(1.0, 20.0)
        .with_min_viewport_span(2.0);
    let mut engine = engine_with(config);
    let before = engine.current_viewport();

    // Doubling the zoom would leave a 1.5 unit span on each axis.
    assert!(!pinch(&mut engine, (150.0, 250.0), (100.0, 300.0)));
    assert_eq!(engine.current_viewport(), before);
    assert_eq!(engine.gesture_state(), GestureState::Zooming);
}

#[test]
fn pinch_works_on_nearly_flat_data() {
    let mut engine = engine_with(ChartEngineConfig::default());
    engine
        .set_dataset(Some(LineChartData::new(vec![Line::from_xy(&[
            (0.0, 5.0),
            (10.0, 5.0 + 1e-9),
        ])])))
        .expect("valid dataset");

    let max = engine.maximum_viewport();
    assert!(max.height() >= 1.0 - 1e-9);
    assert!(
        !engine
            .set_current_viewport(max)
            .expect("full extent is a valid viewport")
    );

    assert!(pinch(&mut engine, (150.0, 250.0), (100.0, 300.0)));
    assert!((engine.current_viewport().width() - 5.0).abs() <= 1e-9);
    assert!(max.contains_viewport(engine.current_viewport()));
}

#[test]
fn horizontal_zoom_type_leaves_vertical_bounds() {
    let config = ChartEngineConfig::default().with_zoom_type(ZoomType::Horizontal);
    let mut engine = engine_with(config);

    pinch(&mut engine, (150.0, 250.0), (100.0, 300.0));
    let current = engine.current_viewport();
    assert!((current.width() - 1.5).abs() <= 1e-9);
    assert_eq!(current.bottom, 1.0);
    assert_eq!(current.top, 4.0);
}

#[test]
fn zoom_disabled_ignores_second_pointer() {
    let mut engine = engine_with(ChartEngineConfig::default().with_zoom_enabled(false));
    let before = engine.current_viewport();

    assert!(!pinch(&mut engine, (150.0, 250.0), (100.0, 300.0)));
    assert_eq!(engine.gesture_state(), GestureState::Panning);
    assert_eq!(engine.current_viewport(), before);
}

#[test]
fn lifting_one_pinch_finger_continues_as_pan() {
    let mut engine = engine_with(ChartEngineConfig::default());
    pinch(&mut engine, (150.0, 250.0), (100.0, 300.0));

    engine.on_touch_event(&TouchEvent::new(
        TouchAction::PointerUp { id: 1 },
        &[TouchPointer::new(0, 100.0, 200.0), TouchPointer::new(1, 300.0, 200.0)],
        ms(40),
    ));
    assert_eq!(engine.gesture_state(), GestureState::Panning);

    let before = engine.current_viewport();
    assert!(engine.on_touch_event(&TouchEvent::move_to(ms(50), 60.0, 200.0)));
    let after = engine.current_viewport();
    // 40 px at 1.5 data units per 400 px.
    assert!((after.left - before.left - 0.15).abs() <= 1e-9);
}

#[test]
fn cancel_discards_gesture_without_side_effects() {
    let mut engine = engine_with(ChartEngineConfig::default());
    pinch(&mut engine, (150.0, 250.0), (100.0, 300.0));
    let zoomed = engine.current_viewport();

    assert!(!engine.on_touch_event(&TouchEvent::cancel(ms(40))));
    assert_eq!(engine.gesture_state(), GestureState::Idle);
    assert_eq!(engine.current_viewport(), zoomed);
    assert!(engine.selected_value().is_none());

    // A move after cancel is ignored until the next down.
    assert!(!engine.on_touch_event(&TouchEvent::move_to(ms(50), 10.0, 10.0)));
    assert_eq!(engine.current_viewport(), zoomed);
}

#[test]
fn programmatic_zoom_shares_pinch_bounds() {
    let mut engine = engine_with(ChartEngineConfig::default().with_zoom_bounds(1.0, 3.0));
    let focus = ScreenPoint::new(200.0, 200.0);

    assert!(engine.zoom_by(2.0, focus).expect("zoom in"));
    assert!((engine.zoom_level() - 2.0).abs() <= 1e-9);
    assert!(engine.zoom_by(10.0, focus).expect("zoom clamps"));
    assert!((engine.zoom_level() - 3.0).abs() <= 1e-9);

    assert!(engine.zoom_by(0.0, focus).is_err());
    assert!(engine.reset_viewport());
    assert_eq!(engine.current_viewport(), engine.maximum_viewport());
}

#[test]
fn scroll_disabled_blocks_pan() {
    let mut engine = engine_with(ChartEngineConfig::default().with_scroll_enabled(false));
    engine
        .set_current_viewport(Viewport::new(2.0, 3.0, 3.0, 2.0))
        .expect("zoom in");
    let before = engine.current_viewport();

    engine.on_touch_event(&TouchEvent::down(ms(0), 200.0, 200.0));
    assert!(!engine.on_touch_event(&TouchEvent::move_to(ms(10), 100.0, 200.0)));
    assert_eq!(engine.current_viewport(), before);
}
