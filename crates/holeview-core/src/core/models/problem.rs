use super::bounds::BoundingBox;
use super::error::GeometryError;
use super::figure::{Edge, FigureTopology};
use super::point::Point2D;
use super::polygon::Polygon;

/// Scale of the `epsilon` field: the stretch tolerance is expressed in millionths.
pub const EPSILON_SCALE: f64 = 1_000_000.0;

/// One instance of the fitting problem. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    hole: Polygon,
    figure: FigureTopology,
    figure_vertices: Vec<Point2D>,
    epsilon: f64,
}

impl Problem {
    pub fn new(
        hole: Vec<Point2D>,
        edges: Vec<Edge>,
        figure_vertices: Vec<Point2D>,
        epsilon: f64,
    ) -> Result<Self, GeometryError> {
        let hole = Polygon::new(hole)?;
        let figure = FigureTopology::new(edges, figure_vertices.len())?;
        Ok(Self {
            hole,
            figure,
            figure_vertices,
            epsilon,
        })
    }

    pub fn hole(&self) -> &Polygon {
        &self.hole
    }

    pub fn figure(&self) -> &FigureTopology {
        &self.figure
    }

    /// Original figure vertex positions, index-aligned with [`Problem::figure`].
    pub fn figure_vertices(&self) -> &[Point2D] {
        &self.figure_vertices
    }

    /// Raw epsilon as declared in the description (millionths).
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Allowed deviation of the squared-length ratio of an edge from 1.
    pub fn stretch_tolerance(&self) -> f64 {
        self.epsilon / EPSILON_SCALE
    }

    /// Bounding box over the hole vertices and the original figure vertices.
    pub fn get_range(&self) -> BoundingBox {
        let mut bounds = self.hole.bounds();
        for v in &self.figure_vertices {
            bounds.include(v);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_hole() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ]
    }

    #[test]
    fn get_range_covers_hole_and_figure() {
        let problem = Problem::new(
            square_hole(),
            vec![Edge::new(0, 1)],
            vec![Point2D::new(5.0, 5.0), Point2D::new(20.0, 5.0)],
            0.0,
        )
        .unwrap();
        let range = problem.get_range();
        assert_eq!(range.x_range, [0.0, 20.0]);
        assert_eq!(range.y_range, [0.0, 10.0]);
    }

    #[test]
    fn get_range_includes_figure_below_hole() {
        let problem = Problem::new(
            square_hole(),
            vec![],
            vec![Point2D::new(-4.0, -2.0)],
            0.0,
        )
        .unwrap();
        let range = problem.get_range();
        assert_eq!(range.x_range, [-4.0, 10.0]);
        assert_eq!(range.y_range, [-2.0, 10.0]);
    }

    #[test]
    fn new_rejects_edges_beyond_figure_vertices() {
        let result = Problem::new(
            square_hole(),
            vec![Edge::new(0, 2)],
            vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)],
            0.0,
        );
        assert_eq!(
            result,
            Err(GeometryError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn new_rejects_degenerate_hole() {
        let result = Problem::new(
            vec![Point2D::new(0.0, 0.0)],
            vec![],
            vec![Point2D::new(0.0, 0.0)],
            0.0,
        );
        assert_eq!(result, Err(GeometryError::DegeneratePolygon { found: 1 }));
    }

    #[test]
    fn stretch_tolerance_scales_epsilon() {
        let problem = Problem::new(square_hole(), vec![], vec![], 150_000.0).unwrap();
        assert_eq!(problem.epsilon(), 150_000.0);
        assert!((problem.stretch_tolerance() - 0.15).abs() < 1e-12);
    }
}
