use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use linechart_rs::ChartError;
use linechart_rs::api::{ChartEngine, ChartEngineConfig, InvalidationLevel, ValueSelectListener};
use linechart_rs::core::{DataPoint, Line, LineChartData, LinePoint, Padding, Viewport};
use linechart_rs::interaction::TouchEvent;
use linechart_rs::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine.on_size_changed(400, 400, Padding::default());
    engine
}

#[derive(Clone, Default)]
struct DeselectCounter {
    count: Rc<Cell<usize>>,
}

impl ValueSelectListener for DeselectCounter {
    fn on_value_selected(&mut self, _line: usize, _point: usize, _value: DataPoint) {}

    fn on_value_deselected(&mut self) {
        self.count.set(self.count.get() + 1);
    }
}

#[test]
fn new_engine_shows_placeholder() {
    let engine = engine();
    assert_eq!(engine.data(), &LineChartData::placeholder());
    assert_eq!(engine.current_viewport(), Viewport::new(1.0, 4.0, 4.0, 1.0));
}

#[test]
fn absent_or_empty_dataset_installs_placeholder() {
    let mut engine = engine();
    engine
        .set_dataset(Some(LineChartData::new(vec![Line::from_xy(&[(0.0, 0.0), (9.0, 9.0)])])))
        .expect("valid dataset");

    engine.set_dataset(None).expect("placeholder");
    assert_eq!(engine.data(), &LineChartData::placeholder());

    engine
        .set_dataset(Some(LineChartData::new(vec![Line::default()])))
        .expect("placeholder");
    assert_eq!(engine.data(), &LineChartData::placeholder());
    assert_eq!(engine.maximum_viewport(), Viewport::new(1.0, 4.0, 4.0, 1.0));
}

#[test]
fn replacing_dataset_recomputes_both_viewports() {
    let mut engine = engine();
    engine
        .set_current_viewport(Viewport::new(2.0, 3.0, 3.0, 2.0))
        .expect("zoom in");

    let data = LineChartData::new(vec![
        Line::from_xy(&[(-10.0, 0.0), (0.0, 50.0)]).with_name("a"),
        Line::from_xy(&[(5.0, -20.0)]).with_name("b"),
    ]);
    engine.set_dataset(Some(data)).expect("valid dataset");

    let expected = Viewport::new(-10.0, 50.0, 5.0, -20.0);
    assert_eq!(engine.maximum_viewport(), expected);
    assert_eq!(engine.current_viewport(), expected);
    assert_eq!(engine.renderer().last_point_count, 3);
}

#[test]
fn single_point_dataset_gets_non_degenerate_extent() {
    let mut engine = engine();
    engine
        .set_dataset(Some(LineChartData::new(vec![Line::from_xy(&[(2.0, 2.0)])])))
        .expect("valid dataset");

    let max = engine.maximum_viewport();
    assert!(max.is_valid());
    assert!(max.contains_point(DataPoint::new(2.0, 2.0)));
    assert!(engine.draw(&mut ()).expect("draw"));
}

#[test]
fn invalid_dataset_is_rejected_atomically() {
    let mut engine = engine();
    let before = engine.data().clone();
    let init_count = engine.renderer().init_count;

    let err = engine
        .set_dataset(Some(LineChartData::new(vec![Line::new(vec![
            LinePoint::new(0.0, 0.0),
            LinePoint::new(f64::NAN, 1.0),
        ])])))
        .expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(engine.data(), &before);
    assert_eq!(engine.renderer().init_count, init_count);
}

#[test]
fn replacing_dataset_clears_selection() {
    let mut engine = engine();
    let counter = DeselectCounter::default();
    engine.set_value_select_listener(counter.clone());

    engine.on_touch_event(&TouchEvent::down(Duration::ZERO, 400.0, 0.0));
    engine.on_touch_event(&TouchEvent::up(Duration::from_millis(30), 400.0, 0.0));
    assert!(engine.selected_value().is_some());

    engine
        .set_dataset(Some(LineChartData::new(vec![Line::from_xy(&[(0.0, 0.0), (1.0, 1.0)])])))
        .expect("valid dataset");
    assert!(engine.selected_value().is_none());
    assert!(engine.selected_point().is_none());
    assert_eq!(counter.count.get(), 1);
}

#[test]
fn dataset_swap_mid_gesture_stays_in_bounds() {
    let mut engine = engine();
    engine.on_touch_event(&TouchEvent::down(Duration::ZERO, 400.0, 0.0));

    engine
        .set_dataset(Some(LineChartData::new(vec![Line::from_xy(&[(0.0, 0.0)])])))
        .expect("valid dataset");
    // The tap lands after the swap and is hit-tested against the new data.
    engine.on_touch_event(&TouchEvent::up(Duration::from_millis(30), 400.0, 0.0));
    assert!(engine.selected_value().is_none());
}

#[test]
fn replacing_dataset_cancels_running_animation() {
    let mut engine = engine();
    engine.start_data_animation(Duration::ZERO);
    assert!(engine.is_animating());

    engine.set_dataset(None).expect("placeholder");
    assert!(!engine.is_animating());
    assert!(!engine.on_animation_frame(Duration::from_millis(100)));
}

#[test]
fn replacing_dataset_requests_full_redraw() {
    let mut engine = engine();
    engine.take_pending_invalidation();

    engine.set_dataset(None).expect("placeholder");
    assert_eq!(
        engine.pending_invalidation().level(),
        InvalidationLevel::Full
    );
}
