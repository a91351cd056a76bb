use crate::core::DataPoint;

/// Receives tap selection results.
///
/// Closures taking `(line_index, point_index, value)` implement this trait
/// and ignore deselection.
pub trait ValueSelectListener {
    fn on_value_selected(&mut self, line_index: usize, point_index: usize, value: DataPoint);

    fn on_value_deselected(&mut self) {}
}

impl<F> ValueSelectListener for F
where
    F: FnMut(usize, usize, DataPoint),
{
    fn on_value_selected(&mut self, line_index: usize, point_index: usize, value: DataPoint) {
        self(line_index, point_index, value);
    }
}

/// Host hook invoked whenever the engine wants a new frame.
///
/// Calls are fire-and-forget and may arrive several times per frame; the
/// host is expected to coalesce them.
pub trait RedrawHost {
    fn request_redraw(&mut self);
}
