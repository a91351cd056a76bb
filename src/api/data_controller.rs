use tracing::debug;

use crate::core::LineChartData;
use crate::error::ChartResult;
use crate::render::ChartRenderer;

use super::{ChartEngine, InvalidationTopic};

impl<R: ChartRenderer> ChartEngine<R> {
    #[must_use]
    pub fn data(&self) -> &LineChartData {
        &self.data
    }

    /// Replaces the whole dataset.
    ///
    /// `None` or a dataset without points installs the placeholder. Invalid
    /// data is rejected before anything changes. On success a running data
    /// animation is cancelled, both viewports are refit (max first), the
    /// renderer re-derives its sizing, and the selection is cleared.
    pub fn set_dataset(&mut self, data: Option<LineChartData>) -> ChartResult<()> {
        let data = match data {
            Some(data) if !data.is_empty() => {
                data.validate()?;
                data
            }
            _ => {
                debug!("no points supplied, using placeholder dataset");
                LineChartData::placeholder()
            }
        };

        self.cancel_data_animation();
        self.data = data;

        let content_area = self.calculator.recalculate_content_area();
        let max = self.calculator.init_max_viewport(&self.data);
        self.calculator.init_current_viewport();
        self.renderer.init_data_attributes(content_area, &self.data);
        if self.selection.take().is_some()
            && let Some(listener) = self.value_listener.as_mut()
        {
            listener.on_value_deselected();
        }

        debug!(
            lines = self.data.lines().len(),
            points = self.data.point_count(),
            max_left = max.left,
            max_right = max.right,
            max_bottom = max.bottom,
            max_top = max.top,
            "dataset replaced"
        );
        self.request_redraw(InvalidationTopic::Data);
        Ok(())
    }
}
