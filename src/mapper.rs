//! Data-to-pixel geometry for a single series.
//!
//! The mapper is rebuilt per draw from the plot dimensions and the derived
//! axis bounds, then turns a windowed point slice into line segments, a
//! fillable area polygon, or the background vertical approximation.

use crate::geom::{Point, ScreenPoint};
use crate::render::{LineSegment, Polygon};
use crate::view::Range;

/// Horizontal sampling interval of the background verticals, in pixels.
const BACKGROUND_SAMPLE_PX: f32 = 3.0;

/// Maps data points into pixel space under fixed bounds and dimensions.
#[derive(Debug, Clone, Copy)]
pub struct SeriesMapper {
    graph_width: f32,
    graph_height: f32,
    border: f32,
    left_offset: f32,
    min_x: f64,
    min_y: f64,
    diff_x: f64,
    diff_y: f64,
}

impl SeriesMapper {
    /// Create a mapper for the given plot geometry and axis bounds.
    pub fn new(
        graph_width: f32,
        graph_height: f32,
        border: f32,
        left_offset: f32,
        x: Range,
        y: Range,
    ) -> Self {
        Self {
            graph_width,
            graph_height,
            border,
            left_offset,
            min_x: x.min,
            min_y: y.min,
            diff_x: x.span(),
            diff_y: y.span(),
        }
    }

    /// Pixel X for a data X value.
    pub fn pixel_x(&self, x: f64) -> f32 {
        (self.graph_width as f64 * ratio(x, self.min_x, self.diff_x)) as f32 + self.left_offset
    }

    /// Pixel Y for a data Y value. Pixel space grows downward, so the
    /// range minimum lands on the baseline and the maximum on the top
    /// border.
    pub fn pixel_y(&self, y: f64) -> f32 {
        let scaled = (self.graph_height as f64 * ratio(y, self.min_y, self.diff_y)) as f32;
        self.border - scaled + self.graph_height
    }

    /// Map a data point into screen space.
    pub fn map_point(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.pixel_x(point.x), self.pixel_y(point.y))
    }

    /// The bottom edge of the plot area.
    pub fn baseline(&self) -> f32 {
        self.graph_height + self.border
    }

    /// One segment per consecutive point pair, in order.
    pub fn segments(&self, points: &[Point]) -> Vec<LineSegment> {
        points
            .windows(2)
            .map(|pair| LineSegment::new(self.map_point(pair[0]), self.map_point(pair[1])))
            .collect()
    }

    /// The closed polygon under the curve for the filled style.
    ///
    /// Runs along the mapped points, drops to the baseline at the last X,
    /// crosses to the baseline at the first X, and closes back up.
    pub fn area_path(&self, points: &[Point]) -> Polygon {
        let mut vertices: Vec<ScreenPoint> =
            points.iter().map(|point| self.map_point(*point)).collect();
        if let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last().copied()) {
            let baseline = self.baseline();
            vertices.push(ScreenPoint::new(last.x, baseline));
            vertices.push(ScreenPoint::new(first.x, baseline));
        }
        Polygon::new(vertices)
    }

    /// Vertical connector segments approximating an area fill for the
    /// plain line style.
    ///
    /// Samples every ~3 px between consecutive mapped points and drops a
    /// vertical from the interpolated line down to the baseline. Samples
    /// within a pixel of the left axis origin are skipped.
    pub fn background_segments(&self, points: &[Point]) -> Vec<LineSegment> {
        let baseline = self.baseline();
        let mut out = Vec::new();
        let mut last: Option<ScreenPoint> = None;
        for point in points {
            let mapped = self.map_point(*point);
            if let Some(previous) = last {
                let samples = ((mapped.x - previous.x) / BACKGROUND_SAMPLE_PX) as usize + 1;
                for index in 0..samples {
                    let t = if samples > 1 {
                        index as f32 / (samples - 1) as f32
                    } else {
                        0.0
                    };
                    let x = previous.x + (mapped.x - previous.x) * t;
                    let y = previous.y + (mapped.y - previous.y) * t;
                    if x - self.left_offset > 1.0 {
                        out.push(LineSegment::new(
                            ScreenPoint::new(x, baseline),
                            ScreenPoint::new(x, y),
                        ));
                    }
                }
            }
            last = Some(mapped);
        }
        out
    }
}

/// Normalized position of `value` inside `min..min+diff`.
///
/// A zero `diff` pins the coordinate to 0 instead of dividing, so
/// single-point and constant-value series yield finite geometry.
fn ratio(value: f64, min: f64, diff: f64) -> f64 {
    if diff == 0.0 {
        0.0
    } else {
        (value - min) / diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(1.0, 2.0),
            Point::new(2.0, 1.5),
            Point::new(2.5, 3.0),
            Point::new(3.0, 2.5),
            Point::new(4.0, 1.0),
            Point::new(5.0, 3.0),
        ]
    }

    fn sample_mapper() -> SeriesMapper {
        SeriesMapper::new(
            300.0,
            200.0,
            20.0,
            50.0,
            Range::new(1.0, 5.0),
            Range::new(1.0, 3.0),
        )
    }

    #[test]
    fn first_point_lands_on_the_left_offset() {
        let mapper = sample_mapper();
        assert_eq!(mapper.pixel_x(1.0), 50.0);
        assert_eq!(mapper.pixel_x(5.0), 350.0);
    }

    #[test]
    fn minimum_y_lands_on_the_baseline() {
        let mapper = sample_mapper();
        assert_eq!(mapper.pixel_y(1.0), 220.0);
        assert_eq!(mapper.pixel_y(3.0), 20.0);
    }

    #[test]
    fn one_segment_per_consecutive_pair() {
        let mapper = sample_mapper();
        let segments = mapper.segments(&sample_points());
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].start, ScreenPoint::new(50.0, 120.0));
        assert_eq!(segments[0].end, mapper.map_point(Point::new(2.0, 1.5)));
    }

    #[test]
    fn area_path_closes_along_the_baseline() {
        let mapper = sample_mapper();
        let points = sample_points();
        let path = mapper.area_path(&points);
        let vertices = path.vertices();
        assert_eq!(vertices.len(), points.len() + 2);
        assert_eq!(
            vertices[points.len()],
            ScreenPoint::new(mapper.pixel_x(5.0), mapper.baseline())
        );
        assert_eq!(
            vertices[points.len() + 1],
            ScreenPoint::new(mapper.pixel_x(1.0), mapper.baseline())
        );
    }

    #[test]
    fn background_samples_skip_the_axis_origin() {
        let mapper = sample_mapper();
        let segments = mapper.background_segments(&sample_points());
        assert!(!segments.is_empty());
        for segment in &segments {
            assert!(segment.start.x - 50.0 > 1.0);
            assert_eq!(segment.start.y, mapper.baseline());
        }
    }

    #[test]
    fn zero_spans_stay_finite() {
        let mapper = SeriesMapper::new(
            300.0,
            200.0,
            20.0,
            50.0,
            Range::new(2.0, 2.0),
            Range::new(7.0, 7.0),
        );
        let mapped = mapper.map_point(Point::new(2.0, 7.0));
        assert_eq!(mapped, ScreenPoint::new(50.0, 220.0));
    }
}
