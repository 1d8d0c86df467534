//! The chart aggregate and per-frame draw orchestration.
//!
//! `Chart` owns the series list, the interactive viewport, manual axis
//! overrides, and the label caches. All mutation and drawing happen on the
//! host's render thread; gesture events arrive as explicit `apply_pan` /
//! `apply_zoom` calls with already-decoded deltas.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::bounds;
use crate::config::{ChartOptions, LegendAlign};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::labels::LabelGenerator;
use crate::mapper::SeriesMapper;
use crate::render::{Color, FillStyle, LineStyle, Surface, TextAlign, TextStyle};
use crate::series::Series;
use crate::view::Viewport;

const GRID_COLOR: Color = Color::DARK_GRAY;
const LEGEND_BACKGROUND: Color = Color::from_rgba8(100, 100, 100, 180);
const LEGEND_SWATCH_SIZE: f32 = 15.0;
const BACKGROUND_FILL: Color = Color::from_rgba8(20, 40, 60, 255);
const BACKGROUND_STROKE_WIDTH: f32 = 4.0;

/// Chart operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Series removal addressed an index outside the list.
    #[error("no series at index {0}")]
    NoSeriesAtIndex(usize),
    /// Scrolling was requested on a chart without scrolling enabled.
    #[error("chart is not scrollable")]
    NotScrollable,
}

/// An interactive 2D line chart.
#[derive(Debug, Clone)]
pub struct Chart {
    series: Vec<Series>,
    viewport: Viewport,
    manual_min_y: Option<f64>,
    manual_max_y: Option<f64>,
    options: ChartOptions,
    title: String,
    scrollable: bool,
    scalable: bool,
    horizontal_labels: Option<Vec<String>>,
    vertical_labels: Option<Vec<String>>,
    horizontal_generator: LabelGenerator,
    vertical_generator: LabelGenerator,
    // Width of the plot area at the last draw, needed to convert pan
    // deltas from pixels into data units.
    graph_width: f32,
}

impl Chart {
    /// Create a chart with default configuration.
    pub fn new() -> Self {
        Self::with_options(ChartOptions::default())
    }

    /// Create a chart from configuration.
    pub fn with_options(options: ChartOptions) -> Self {
        Self {
            series: Vec::new(),
            viewport: Viewport::default(),
            manual_min_y: options.min_y,
            manual_max_y: options.max_y,
            horizontal_generator: LabelGenerator::adaptive(options.horizontal_label_spacing),
            vertical_generator: LabelGenerator::adaptive(options.vertical_label_spacing),
            options,
            title: String::new(),
            scrollable: false,
            scalable: false,
            horizontal_labels: None,
            vertical_labels: None,
            graph_width: 0.0,
        }
    }

    /// Access the configuration.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Access all series in insertion order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the chart title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the chart title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether pan gestures move the viewport.
    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// Whether zoom gestures rescale the viewport.
    pub fn is_scalable(&self) -> bool {
        self.scalable
    }

    /// Whether the legend is drawn.
    pub fn is_show_legend(&self) -> bool {
        self.options.show_legend
    }

    /// Legend placement.
    pub fn legend_align(&self) -> LegendAlign {
        self.options.legend_align
    }

    /// Legend box width.
    pub fn legend_width(&self) -> f32 {
        self.options.legend_width
    }

    /// Toggle the legend.
    pub fn set_show_legend(&mut self, show: bool) {
        self.options.show_legend = show;
    }

    /// Replace the legend placement.
    pub fn set_legend_align(&mut self, align: LegendAlign) {
        self.options.legend_align = align;
    }

    /// Replace the legend box width.
    pub fn set_legend_width(&mut self, width: f32) {
        self.options.legend_width = width;
    }

    /// Enable or disable pan gestures.
    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    /// Enable or disable zoom gestures. Enabling forces scrolling on,
    /// since a zoomed window is useless if it cannot be moved.
    pub fn set_scalable(&mut self, scalable: bool) {
        self.scalable = scalable;
        if scalable {
            self.scrollable = true;
        }
    }

    /// Add a series. Flushes the label caches, since the new data may
    /// alter the axis bounds.
    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
        self.invalidate_labels();
    }

    /// Remove and return the series at `index`.
    ///
    /// Fails without mutating anything when the index is out of range.
    pub fn remove_series(&mut self, index: usize) -> Result<Series, ChartError> {
        if index >= self.series.len() {
            return Err(ChartError::NoSeriesAtIndex(index));
        }
        let removed = self.series.remove(index);
        self.invalidate_labels();
        Ok(removed)
    }

    /// Place the viewport window. A size of 0 deactivates it.
    pub fn set_viewport(&mut self, start: f64, size: f64) {
        self.viewport.set(start, size);
        self.invalidate_labels();
    }

    /// Jump the viewport to the end of the data domain.
    pub fn scroll_to_end(&mut self) -> Result<(), ChartError> {
        if !self.scrollable {
            return Err(ChartError::NotScrollable);
        }
        let domain = bounds::x_bounds(&self.series, self.viewport, true);
        self.viewport.scroll_to_end(domain.max);
        debug!(start = self.viewport.start(), "scrolled viewport to end");
        self.redraw_all();
        Ok(())
    }

    /// Apply a horizontal pan delta in pixels, as delivered by the host's
    /// gesture source. Ignored unless the chart is scrollable. Returns
    /// whether the viewport moved.
    pub fn apply_pan(&mut self, delta_px: f32) -> bool {
        if !self.scrollable {
            return false;
        }
        let domain = bounds::x_bounds(&self.series, self.viewport, true);
        let px_per_unit = self.graph_width as f64 / self.viewport.size();
        let moved = self.viewport.pan(delta_px as f64, px_per_unit, domain);
        if moved {
            debug!(start = self.viewport.start(), "panned viewport");
            self.invalidate_labels();
        }
        moved
    }

    /// Apply a zoom scale factor, as delivered by the host's gesture
    /// source. Ignored unless the chart is scalable. Returns whether the
    /// viewport changed.
    pub fn apply_zoom(&mut self, factor: f64) -> bool {
        if !self.scalable {
            return false;
        }
        let domain = bounds::x_bounds(&self.series, self.viewport, true);
        let changed = self.viewport.zoom(factor, domain);
        if changed {
            debug!(
                start = self.viewport.start(),
                size = self.viewport.size(),
                "zoomed viewport"
            );
            self.invalidate_labels();
        }
        changed
    }

    /// Set manual Y axis bounds, disabling the data scan.
    pub fn set_manual_y_bounds(&mut self, max: f64, min: f64) {
        self.manual_min_y = Some(min);
        self.manual_max_y = Some(max);
        self.vertical_labels = None;
    }

    /// Drop back to scanned Y bounds when called with `false`. Enabling
    /// happens implicitly through [`Chart::set_manual_y_bounds`].
    pub fn set_manual_y_axis(&mut self, manual: bool) {
        if !manual {
            self.manual_min_y = None;
            self.manual_max_y = None;
            self.vertical_labels = None;
        }
    }

    /// Set fixed horizontal labels (left to right); `None` restores
    /// generated labels.
    pub fn set_horizontal_labels(&mut self, labels: Option<Vec<String>>) {
        self.horizontal_labels = labels;
    }

    /// Set fixed vertical labels (bottom to top); `None` restores
    /// generated labels.
    pub fn set_vertical_labels(&mut self, labels: Option<Vec<String>>) {
        self.vertical_labels = labels;
    }

    /// Replace the horizontal label generation strategy.
    pub fn set_horizontal_label_generator(&mut self, generator: LabelGenerator) {
        self.horizontal_generator = generator;
        self.horizontal_labels = None;
    }

    /// Replace the vertical label generation strategy.
    pub fn set_vertical_label_generator(&mut self, generator: LabelGenerator) {
        self.vertical_generator = generator;
        self.vertical_labels = None;
    }

    /// Flush all caches so the next draw recomputes everything.
    pub fn redraw_all(&mut self) {
        self.invalidate_labels();
    }

    fn invalidate_labels(&mut self) {
        self.horizontal_labels = None;
        self.vertical_labels = None;
    }

    /// Render one frame onto the surface.
    ///
    /// Recomputes bounds, lazily regenerates stale labels, then issues
    /// the gridline, label, title, series, and legend draw calls.
    pub fn draw(&mut self, surface: &mut dyn Surface, width: f32, height: f32) {
        let width = width - 1.0;
        let graph_height = height - 2.0 * self.options.lower_border;
        let graph_width = width - self.options.left_border;
        self.graph_width = graph_width;

        let x = bounds::x_bounds(&self.series, self.viewport, false);
        let y = bounds::y_bounds(
            &self.series,
            self.viewport,
            self.manual_min_y,
            self.manual_max_y,
        );
        trace!(
            min_x = x.min,
            max_x = x.max,
            min_y = y.min,
            max_y = y.max,
            "drawing frame"
        );

        if self.horizontal_labels.is_none() {
            self.horizontal_labels =
                Some(self.horizontal_generator.generate(graph_width, x.min, x.max));
        }
        if self.vertical_labels.is_none() {
            self.vertical_labels =
                Some(self.vertical_generator.generate(graph_height, y.min, y.max));
        }
        let hor_labels: &[String] = self.horizontal_labels.as_deref().unwrap_or_default();
        let ver_labels: &[String] = self.vertical_labels.as_deref().unwrap_or_default();

        let border = self.options.lower_border;
        let left = self.options.left_border;
        let grid_style = LineStyle {
            color: GRID_COLOR,
            width: 1.0,
        };

        // Vertical axis labels, bottom row = range minimum.
        let ver_rows = ver_labels.len().saturating_sub(1).max(1) as f32;
        let vertical_text = TextStyle {
            color: self.options.vertical_label_color,
            size: self.options.vertical_label_text_size,
            align: TextAlign::Left,
        };
        for (index, label) in ver_labels.iter().enumerate() {
            let row = (ver_labels.len() - 1 - index) as f32;
            let y_px = (graph_height / ver_rows) * row + border;
            surface.draw_text(label, ScreenPoint::new(0.0, y_px), &vertical_text);
        }

        // Horizontal gridlines, one per vertical label.
        for index in 0..ver_labels.len() {
            let y_px = (graph_height / ver_rows) * index as f32 + border;
            surface.draw_line(
                ScreenPoint::new(left, y_px),
                ScreenPoint::new(width, y_px),
                &grid_style,
            );
        }

        // Vertical gridlines and horizontal labels. The first label sits
        // flush left, the last flush right, the rest centered.
        let hor_rows = hor_labels.len().saturating_sub(1).max(1) as f32;
        for (index, label) in hor_labels.iter().enumerate() {
            let x_px = (graph_width / hor_rows) * index as f32 + left;
            surface.draw_line(
                ScreenPoint::new(x_px, height - border),
                ScreenPoint::new(x_px, border),
                &grid_style,
            );
            let align = if index == 0 {
                TextAlign::Left
            } else if index == hor_labels.len() - 1 {
                TextAlign::Right
            } else {
                TextAlign::Center
            };
            let style = TextStyle {
                color: self.options.horizontal_label_color,
                align,
                ..TextStyle::default()
            };
            surface.draw_text(label, ScreenPoint::new(x_px, height - 4.0), &style);
        }

        if !self.title.is_empty() {
            let style = TextStyle {
                color: self.options.title_color,
                align: TextAlign::Center,
                ..TextStyle::default()
            };
            surface.draw_text(
                &self.title,
                ScreenPoint::new(graph_width / 2.0 + left, border - 4.0),
                &style,
            );
        }

        if y.min == y.max {
            warn!(min_y = y.min, "degenerate Y bounds, series drawing suppressed");
            return;
        }

        let mapper = SeriesMapper::new(graph_width, graph_height, border, left, x, y);
        for series in &self.series {
            let slice = series.window(self.viewport);
            if self.options.draw_background && !self.options.draw_filled {
                let background = LineStyle {
                    color: BACKGROUND_FILL,
                    width: BACKGROUND_STROKE_WIDTH,
                };
                for segment in mapper.background_segments(slice) {
                    surface.draw_line(segment.start, segment.end, &background);
                }
            }
            if self.options.draw_filled {
                let fill = FillStyle::new(series.style().color);
                surface.draw_path(&mapper.area_path(slice), &fill);
            } else {
                for segment in mapper.segments(slice) {
                    surface.draw_line(segment.start, segment.end, series.style());
                }
            }
        }

        if self.options.show_legend {
            self.draw_legend(surface, width, height);
        }
    }

    fn draw_legend(&self, surface: &mut dyn Surface, width: f32, height: f32) {
        let row = LEGEND_SWATCH_SIZE + 5.0;
        let legend_height = row * self.series.len() as f32 + 5.0;
        let left = width - self.options.legend_width - 10.0;
        let top = match self.options.legend_align {
            LegendAlign::Top => 10.0,
            LegendAlign::Middle => height / 2.0 - legend_height / 2.0,
            LegendAlign::Bottom => {
                height - self.options.lower_border - legend_height - 10.0
            }
        };
        surface.draw_rounded_rect(
            ScreenRect::from_origin_size(left, top, self.options.legend_width, legend_height),
            8.0,
            8.0,
            &FillStyle::new(LEGEND_BACKGROUND),
        );

        let text = TextStyle {
            color: Color::WHITE,
            ..TextStyle::default()
        };
        for (index, series) in self.series.iter().enumerate() {
            let swatch_top = top + 5.0 + index as f32 * row;
            surface.draw_rect(
                ScreenRect::from_origin_size(
                    left + 5.0,
                    swatch_top,
                    LEGEND_SWATCH_SIZE,
                    LEGEND_SWATCH_SIZE,
                ),
                &FillStyle::new(series.style().color),
            );
            if let Some(description) = series.description() {
                surface.draw_text(
                    description,
                    ScreenPoint::new(
                        left + 5.0 + LEGEND_SWATCH_SIZE + 5.0,
                        top + LEGEND_SWATCH_SIZE + index as f32 * row,
                    ),
                    &text,
                );
            }
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}
