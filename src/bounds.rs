//! Axis bounds derivation from series data, viewport, and overrides.

use crate::series::Series;
use crate::view::{Range, Viewport};

/// Derive the X axis bounds.
///
/// An active viewport wins unless explicitly ignored (domain queries pass
/// `ignore_viewport` to reach the full data range). The scan relies on the
/// sorted-by-X precondition: only each series' first and last point are
/// inspected. No series yields `(0, 0)`.
pub fn x_bounds(series: &[Series], viewport: Viewport, ignore_viewport: bool) -> Range {
    if viewport.is_active() && !ignore_viewport {
        return Range::new(viewport.start(), viewport.start() + viewport.size());
    }
    let mut bounds: Option<Range> = None;
    for series in series {
        let (Some(first), Some(last)) = (series.points().first(), series.points().last())
        else {
            continue;
        };
        match &mut bounds {
            None => bounds = Some(Range::new(first.x, last.x)),
            Some(range) => {
                range.min = range.min.min(first.x);
                range.max = range.max.max(last.x);
            }
        }
    }
    bounds.unwrap_or(Range::new(0.0, 0.0))
}

/// Derive the Y axis bounds.
///
/// Each bound is independently manual-or-scanned: overrides are taken
/// verbatim, without validation. The scan covers every point of every
/// series inside the viewport window — including the edge-continuity
/// points, which the drawn slice also carries. With nothing in view the
/// sentinel `(+inf, -inf)` comes back, signalling "no data" to the
/// renderer.
pub fn y_bounds(
    series: &[Series],
    viewport: Viewport,
    manual_min: Option<f64>,
    manual_max: Option<f64>,
) -> Range {
    if let (Some(min), Some(max)) = (manual_min, manual_max) {
        return Range::new(min, max);
    }
    let mut bounds = Range::new(f64::INFINITY, f64::NEG_INFINITY);
    for series in series {
        for point in series.window(viewport) {
            bounds.expand_to_include(point.y);
        }
    }
    if let Some(min) = manual_min {
        bounds.min = min;
    }
    if let Some(max) = manual_max {
        bounds.max = max;
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn sample() -> Vec<Series> {
        vec![Series::new(vec![
            Point::new(1.0, 2.0),
            Point::new(2.0, 1.5),
            Point::new(2.5, 3.0),
            Point::new(3.0, 2.5),
            Point::new(4.0, 1.0),
            Point::new(5.0, 3.0),
        ])]
    }

    #[test]
    fn full_scan_matches_data_extremes() {
        let series = sample();
        let viewport = Viewport::default();
        let x = x_bounds(&series, viewport, false);
        let y = y_bounds(&series, viewport, None, None);
        assert_eq!((x.min, x.max), (1.0, 5.0));
        assert_eq!((y.min, y.max), (1.0, 3.0));
    }

    #[test]
    fn active_viewport_wins_for_x_unless_ignored() {
        let series = sample();
        let viewport = Viewport::new(2.0, 1.5);
        let windowed = x_bounds(&series, viewport, false);
        assert_eq!((windowed.min, windowed.max), (2.0, 3.5));
        let full = x_bounds(&series, viewport, true);
        assert_eq!((full.min, full.max), (1.0, 5.0));
    }

    #[test]
    fn y_scan_covers_the_windowed_slice_only() {
        let series = sample();
        // Window (2.4..2.9) draws the slice [2.0, 2.5, 3.0]: the edge
        // points participate in the scan, the points outside do not.
        let y = y_bounds(&series, Viewport::new(2.4, 0.5), None, None);
        assert_eq!((y.min, y.max), (1.5, 3.0));
    }

    #[test]
    fn manual_override_is_verbatim_even_inverted() {
        let series = sample();
        let y = y_bounds(&series, Viewport::default(), Some(9.0), Some(-9.0));
        assert_eq!(y, Range::new(9.0, -9.0));
    }

    #[test]
    fn partial_override_keeps_the_scanned_side() {
        let series = sample();
        let y = y_bounds(&series, Viewport::default(), None, Some(10.0));
        assert_eq!((y.min, y.max), (1.0, 10.0));
    }

    #[test]
    fn no_series_defaults() {
        let x = x_bounds(&[], Viewport::default(), false);
        assert_eq!((x.min, x.max), (0.0, 0.0));
        let y = y_bounds(&[], Viewport::default(), None, None);
        assert_eq!(y.min, f64::INFINITY);
        assert_eq!(y.max, f64::NEG_INFINITY);
    }

    #[test]
    fn multiple_series_union_their_extremes() {
        let mut series = sample();
        series.push(Series::new(vec![
            Point::new(0.5, 4.0),
            Point::new(6.0, 0.5),
        ]));
        let x = x_bounds(&series, Viewport::default(), false);
        let y = y_bounds(&series, Viewport::default(), None, None);
        assert_eq!((x.min, x.max), (0.5, 6.0));
        assert_eq!((y.min, y.max), (0.5, 4.0));
    }
}
