use crate::core::models::point::{Point2D, midpoint, squared_distance};
use nalgebra::DMatrix;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Default upper bound on the number of level intervals.
pub const DEFAULT_MAX_LEVELS: usize = 7;

/// Round-number iso-levels strictly inside `(min, max)`, at most `max_levels` of them,
/// together with the step between consecutive levels.
///
/// The extremes are left out because a level equal to a sample extreme only touches the grid.
///
/// Returns no levels for a flat or non-finite range.
pub fn nice_levels(min: f64, max: f64, max_levels: usize) -> (Vec<f64>, f64) {
    if !min.is_finite() || !max.is_finite() || max <= min || max_levels == 0 {
        return (Vec::new(), 0.0);
    }
    let raw = (max - min) / max_levels as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = NICE_STEPS
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).floor() as i64 + 1;
    let last = (max / step).ceil() as i64 - 1;
    let levels = (first..=last).map(|k| k as f64 * step).collect();
    (levels, step)
}

/// Number of decimals needed to print multiples of `step` without losing digits.
pub fn label_precision(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step.abs();
    while decimals < 10 && scaled > 0.0 && (scaled - scaled.round()).abs() > 1e-9 * scaled {
        decimals += 1;
        scaled *= 10.0;
    }
    decimals
}

pub fn format_level(value: f64, decimals: usize) -> String {
    // Avoid printing "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

fn crossing(pa: Point2D, va: f64, pb: Point2D, vb: f64, level: f64) -> Option<Point2D> {
    if (va >= level) == (vb >= level) {
        return None;
    }
    let t = (level - va) / (vb - va);
    Some(pa + (pb - pa) * t)
}

// A sample exactly on the level makes both crossings land on that corner.
fn push_segment(segments: &mut Vec<[Point2D; 2]>, a: Point2D, b: Point2D) {
    if a != b {
        segments.push([a, b]);
    }
}

/// Iso-line segments of `values` at `level` by marching squares.
///
/// `values[(r, c)]` is the sample at `(xs[c], ys[r])`. Cells with a non-finite corner are
/// skipped. Saddle cells are split according to the mean of their four corners.
pub fn iso_segments(xs: &[f64], ys: &[f64], values: &DMatrix<f64>, level: f64) -> Vec<[Point2D; 2]> {
    let mut segments = Vec::new();
    if values.nrows() < 2 || values.ncols() < 2 {
        return segments;
    }
    debug_assert_eq!(xs.len(), values.ncols());
    debug_assert_eq!(ys.len(), values.nrows());

    for r in 0..values.nrows() - 1 {
        for c in 0..values.ncols() - 1 {
            let v00 = values[(r, c)];
            let v10 = values[(r, c + 1)];
            let v11 = values[(r + 1, c + 1)];
            let v01 = values[(r + 1, c)];
            if ![v00, v10, v11, v01].iter().all(|v| v.is_finite()) {
                continue;
            }

            let p00 = Point2D::new(xs[c], ys[r]);
            let p10 = Point2D::new(xs[c + 1], ys[r]);
            let p11 = Point2D::new(xs[c + 1], ys[r + 1]);
            let p01 = Point2D::new(xs[c], ys[r + 1]);

            // Edges in order: bottom, right, top, left.
            let bottom = crossing(p00, v00, p10, v10, level);
            let right = crossing(p10, v10, p11, v11, level);
            let top = crossing(p01, v01, p11, v11, level);
            let left = crossing(p00, v00, p01, v01, level);

            match (bottom, right, top, left) {
                (Some(b), Some(r_), Some(t), Some(l)) => {
                    let center_above = (v00 + v10 + v11 + v01) / 4.0 >= level;
                    let diagonal_00_11_above = v00 >= level;
                    // Connect around the corners that end up isolated.
                    if center_above == diagonal_00_11_above {
                        push_segment(&mut segments, b, r_);
                        push_segment(&mut segments, t, l);
                    } else {
                        push_segment(&mut segments, b, l);
                        push_segment(&mut segments, r_, t);
                    }
                }
                other => {
                    let found: Vec<Point2D> = [other.0, other.1, other.2, other.3]
                        .into_iter()
                        .flatten()
                        .collect();
                    if let [a, b] = found[..] {
                        push_segment(&mut segments, a, b);
                    }
                }
            }
        }
    }
    segments
}

/// Midpoint of the longest segment.
pub fn label_anchor(segments: &[[Point2D; 2]]) -> Option<Point2D> {
    segments
        .iter()
        .max_by(|a, b| {
            squared_distance(&a[0], &a[1])
                .partial_cmp(&squared_distance(&b[0], &b[1]))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|s| midpoint(&s[0], &s[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_levels_pick_round_steps() {
        let (levels, step) = nice_levels(0.0, 10.0, 7);
        assert_eq!(step, 2.0);
        assert_eq!(levels, vec![2.0, 4.0, 6.0, 8.0]);

        let (levels, step) = nice_levels(0.13, 0.87, 7);
        assert!((step - 0.2).abs() < 1e-12);
        assert_eq!(levels.len(), 4);
        assert!((levels[0] - 0.2).abs() < 1e-12);
        assert!((levels[3] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn nice_levels_empty_for_flat_or_invalid_range() {
        assert!(nice_levels(3.0, 3.0, 7).0.is_empty());
        assert!(nice_levels(f64::NAN, 3.0, 7).0.is_empty());
        assert!(nice_levels(0.0, 1.0, 0).0.is_empty());
    }

    #[test]
    fn label_precision_follows_step() {
        assert_eq!(label_precision(2.0), 0);
        assert_eq!(label_precision(2.5), 1);
        assert_eq!(label_precision(0.25), 2);
        assert_eq!(format_level(0.5, 2), "0.50");
        assert_eq!(format_level(-0.0, 0), "0");
    }

    #[test]
    fn single_corner_above_yields_one_segment() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let values = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 0.0, 1.0]);
        let segments = iso_segments(&xs, &ys, &values, 0.5);
        assert_eq!(segments.len(), 1);
        let [a, b] = segments[0];
        // Crossings on the right edge (x = 1) and top edge (y = 1), each halfway.
        assert_eq!(a, Point2D::new(1.0, 0.5));
        assert_eq!(b, Point2D::new(0.5, 1.0));
    }

    #[test]
    fn saddle_cell_yields_two_segments() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        // v00 and v11 above, v10 and v01 below.
        let values = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let segments = iso_segments(&xs, &ys, &values, 0.5);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn vertical_gradient_produces_horizontal_line() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 2.0];
        let values = DMatrix::from_row_slice(2, 3, &[0.0, 0.0, 0.0, 4.0, 4.0, 4.0]);
        let segments = iso_segments(&xs, &ys, &values, 1.0);
        assert_eq!(segments.len(), 2);
        for [a, b] in segments {
            assert_eq!(a.y, 0.5);
            assert_eq!(b.y, 0.5);
        }
    }

    #[test]
    fn level_through_a_corner_sample_adds_no_point_segment() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let values = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 0.0, 1.0]);
        assert!(iso_segments(&xs, &ys, &values, 1.0).is_empty());
    }

    #[test]
    fn non_finite_cells_are_skipped() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let values = DMatrix::from_row_slice(2, 2, &[f64::NAN, 0.0, 0.0, 1.0]);
        assert!(iso_segments(&xs, &ys, &values, 0.5).is_empty());
    }

    #[test]
    fn label_anchor_uses_longest_segment() {
        let segments = [
            [Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)],
            [Point2D::new(0.0, 2.0), Point2D::new(4.0, 2.0)],
        ];
        assert_eq!(label_anchor(&segments), Some(Point2D::new(2.0, 2.0)));
        assert_eq!(label_anchor(&[]), None);
    }
}
