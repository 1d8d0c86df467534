//! Data series storage and viewport windowing.

use crate::geom::Point;
use crate::render::LineStyle;
use crate::view::Viewport;

/// One plotted dataset with its own style and optional legend entry.
///
/// Points must be non-empty and sorted ascending by X. The sort order is a
/// caller precondition: the bounds and windowing logic rely on it and do
/// not defend against violations.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<Point>,
    style: LineStyle,
    description: Option<String>,
}

impl Series {
    /// Create a series from sorted points with default styling.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            style: LineStyle::default(),
            description: None,
        }
    }

    /// Set the stroke style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the legend description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Access the data points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Access the stroke style.
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Access the legend description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The slice of points visible under the viewport.
    ///
    /// Includes every point inside the window plus one point past each
    /// edge where available, so segments entering or leaving the window
    /// keep their slope instead of clipping abruptly. An inactive
    /// viewport yields all points.
    pub fn window(&self, viewport: Viewport) -> &[Point] {
        if !viewport.is_active() {
            return &self.points;
        }
        let start = viewport.start();
        let end = start + viewport.size();
        let mut lo = 0;
        let mut hi = self.points.len();
        for (index, point) in self.points.iter().enumerate() {
            if point.x >= start {
                if point.x > end {
                    hi = index + 1;
                    break;
                }
            } else {
                lo = index;
            }
        }
        &self.points[lo..hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::new(vec![
            Point::new(1.0, 2.0),
            Point::new(2.0, 1.5),
            Point::new(2.5, 3.0),
            Point::new(3.0, 2.5),
            Point::new(4.0, 1.0),
            Point::new(5.0, 3.0),
        ])
    }

    #[test]
    fn inactive_viewport_yields_all_points() {
        let series = sample();
        assert_eq!(series.window(Viewport::default()).len(), 6);
    }

    #[test]
    fn window_keeps_one_point_past_each_edge() {
        let series = sample();
        let slice = series.window(Viewport::new(2.2, 1.3));
        // Predecessor at x=2, in-range 2.5 and 3, successor at x=4.
        let xs: Vec<f64> = slice.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 2.5, 3.0, 4.0]);
    }

    #[test]
    fn window_past_all_data_keeps_last_point() {
        let series = sample();
        let slice = series.window(Viewport::new(10.0, 2.0));
        let xs: Vec<f64> = slice.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![5.0]);
    }

    #[test]
    fn window_aligned_with_data_start_has_no_predecessor() {
        let series = sample();
        let slice = series.window(Viewport::new(1.0, 1.5));
        let xs: Vec<f64> = slice.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 2.5, 3.0]);
    }
}
