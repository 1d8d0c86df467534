//! Chart configuration.
//!
//! `ChartOptions` is plain data: every field has a default, and hosts may
//! deserialize it from whatever configuration format they persist. Absent
//! fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Vertical placement of the legend box along the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendAlign {
    /// Pin to the top edge.
    Top,
    /// Center vertically.
    #[default]
    Middle,
    /// Pin above the lower border.
    Bottom,
}

/// Flat chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Manual lower Y bound; `None` scans the data.
    pub min_y: Option<f64>,
    /// Manual upper Y bound; `None` scans the data.
    pub max_y: Option<f64>,
    /// Reserved pixel margin below (and above) the plot area.
    pub lower_border: f32,
    /// Reserved pixel margin left of the plot area for axis labels.
    pub left_border: f32,
    /// Pixel spacing per label on the vertical axis.
    pub vertical_label_spacing: f32,
    /// Pixel spacing per label on the horizontal axis.
    pub horizontal_label_spacing: f32,
    /// Color of the vertical axis labels.
    pub vertical_label_color: Color,
    /// Color of the horizontal axis labels.
    pub horizontal_label_color: Color,
    /// Color of the chart title.
    pub title_color: Color,
    /// Font size of the vertical axis labels, in pixels.
    pub vertical_label_text_size: f32,
    /// Whether to draw the legend.
    pub show_legend: bool,
    /// Legend box width in pixels.
    pub legend_width: f32,
    /// Legend placement.
    pub legend_align: LegendAlign,
    /// Fill the area under each series instead of stroking lines.
    pub draw_filled: bool,
    /// Draw the vertical-connector background under plain lines.
    pub draw_background: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            min_y: None,
            max_y: None,
            lower_border: 20.0,
            left_border: 50.0,
            vertical_label_spacing: 80.0,
            horizontal_label_spacing: 100.0,
            vertical_label_color: Color::WHITE,
            horizontal_label_color: Color::WHITE,
            title_color: Color::WHITE,
            vertical_label_text_size: 15.0,
            show_legend: false,
            legend_width: 120.0,
            legend_align: LegendAlign::default(),
            draw_filled: false,
            draw_background: false,
        }
    }
}

impl ChartOptions {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set manual Y bounds.
    pub fn with_y_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_y = Some(min);
        self.max_y = Some(max);
        self
    }

    /// Set the lower and left border sizes.
    pub fn with_borders(mut self, lower: f32, left: f32) -> Self {
        self.lower_border = lower;
        self.left_border = left;
        self
    }

    /// Set the per-label pixel spacing of both axes.
    pub fn with_label_spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_label_spacing = horizontal;
        self.vertical_label_spacing = vertical;
        self
    }

    /// Enable the legend with the given width and placement.
    pub fn with_legend(mut self, width: f32, align: LegendAlign) -> Self {
        self.show_legend = true;
        self.legend_width = width;
        self.legend_align = align;
        self
    }

    /// Toggle the filled-area style.
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.draw_filled = filled;
        self
    }

    /// Toggle the background verticals under plain lines.
    pub fn with_background(mut self, background: bool) -> Self {
        self.draw_background = background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let options = ChartOptions::default();
        assert_eq!(options.lower_border, 20.0);
        assert_eq!(options.left_border, 50.0);
        assert_eq!(options.vertical_label_spacing, 80.0);
        assert_eq!(options.horizontal_label_spacing, 100.0);
        assert_eq!(options.legend_width, 120.0);
        assert_eq!(options.legend_align, LegendAlign::Middle);
        assert!(!options.show_legend);
        assert!(options.min_y.is_none());
    }

    #[test]
    fn absent_fields_deserialize_to_defaults() {
        let options: ChartOptions =
            serde_json::from_str(r#"{"min_y": -1.5, "show_legend": true}"#).unwrap();
        assert_eq!(options.min_y, Some(-1.5));
        assert!(options.show_legend);
        assert_eq!(options.left_border, 50.0);
        assert_eq!(options.legend_align, LegendAlign::Middle);
    }
}
