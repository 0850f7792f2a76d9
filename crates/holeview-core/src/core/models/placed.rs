use super::error::GeometryError;
use super::figure::{Edge, FigureTopology};
use super::point::{Point2D, squared_distance};
use super::polygon::Polygon;
use super::pose::Pose;
use super::problem::Problem;

/// A figure topology paired with a vertex table of matching length.
///
/// The only way to obtain one is through a validating constructor, so every edge of the
/// topology is guaranteed to resolve to two points of the table. This is how an original
/// figure and any candidate pose are drawn by the same routine.
#[derive(Debug, Clone, Copy)]
pub struct PlacedFigure<'a> {
    topology: &'a FigureTopology,
    vertices: &'a [Point2D],
}

impl<'a> PlacedFigure<'a> {
    pub fn new(
        topology: &'a FigureTopology,
        vertices: &'a [Point2D],
    ) -> Result<Self, GeometryError> {
        if vertices.is_empty() {
            return Err(GeometryError::EmptyGeometry("figure"));
        }
        if vertices.len() != topology.vertex_count() {
            return Err(GeometryError::VertexCountMismatch {
                expected: topology.vertex_count(),
                found: vertices.len(),
            });
        }
        // Topology indices are bounded by vertex_count, which now equals the table length.
        Ok(Self { topology, vertices })
    }

    /// The problem's figure at its original position.
    pub fn original(problem: &'a Problem) -> Result<Self, GeometryError> {
        Self::new(problem.figure(), problem.figure_vertices())
    }

    /// The problem's figure at the positions given by `pose`.
    pub fn from_pose(problem: &'a Problem, pose: &'a Pose) -> Result<Self, GeometryError> {
        Self::new(problem.figure(), pose.vertices())
    }

    pub fn topology(&self) -> &'a FigureTopology {
        self.topology
    }

    pub fn vertices(&self) -> &'a [Point2D] {
        self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<Point2D, GeometryError> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    pub fn endpoints(&self, edge: &Edge) -> (Point2D, Point2D) {
        (self.vertices[edge.a], self.vertices[edge.b])
    }

    pub fn edge_endpoints(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.topology.edges().iter().map(|e| self.endpoints(e))
    }

    /// Indices of the edges whose squared length, relative to the same edge over
    /// `reference`, deviates from 1 by more than `tolerance`.
    pub fn stretch_violations(
        &self,
        reference: &[Point2D],
        tolerance: f64,
    ) -> Result<Vec<usize>, GeometryError> {
        if reference.len() != self.vertices.len() {
            return Err(GeometryError::VertexCountMismatch {
                expected: self.vertices.len(),
                found: reference.len(),
            });
        }
        let violations = self
            .topology
            .edges()
            .iter()
            .enumerate()
            .filter(|(_, edge)| {
                let before = squared_distance(&reference[edge.a], &reference[edge.b]);
                let after = squared_distance(&self.vertices[edge.a], &self.vertices[edge.b]);
                if before == 0.0 {
                    after != 0.0
                } else {
                    (after / before - 1.0).abs() > tolerance
                }
            })
            .map(|(i, _)| i)
            .collect();
        Ok(violations)
    }

    /// Sum over hole vertices of the squared distance to the nearest figure vertex.
    pub fn dislike(&self, hole: &Polygon) -> f64 {
        hole.vertices()
            .iter()
            .map(|h| {
                self.vertices
                    .iter()
                    .map(|v| squared_distance(h, v))
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_problem() -> Problem {
        Problem::new(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(4.0, 4.0),
                Point2D::new(0.0, 4.0),
            ],
            vec![Edge::new(0, 1), Edge::new(1, 2)],
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(2.0, 0.0),
                Point2D::new(2.0, 2.0),
            ],
            100_000.0,
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_empty_vertex_table() {
        let topology = FigureTopology::new(vec![], 0).unwrap();
        let result = PlacedFigure::new(&topology, &[]);
        assert!(matches!(result, Err(GeometryError::EmptyGeometry(_))));
    }

    #[test]
    fn from_pose_rejects_length_mismatch() {
        let problem = unit_problem();
        let pose = Pose::new(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        let result = PlacedFigure::from_pose(&problem, &pose);
        assert!(matches!(
            result,
            Err(GeometryError::VertexCountMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn edge_endpoints_resolve_through_vertex_table() {
        let problem = unit_problem();
        let placed = PlacedFigure::original(&problem).unwrap();
        let ends: Vec<_> = placed.edge_endpoints().collect();
        assert_eq!(
            ends,
            vec![
                (Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0)),
                (Point2D::new(2.0, 0.0), Point2D::new(2.0, 2.0)),
            ]
        );
    }

    #[test]
    fn vertex_lookup_reports_out_of_range() {
        let problem = unit_problem();
        let placed = PlacedFigure::original(&problem).unwrap();
        assert_eq!(placed.vertex(1).unwrap(), Point2D::new(2.0, 0.0));
        assert_eq!(
            placed.vertex(5),
            Err(GeometryError::IndexOutOfRange { index: 5, len: 3 })
        );
    }

    #[test]
    fn stretch_violations_flags_only_stretched_edges() {
        let problem = unit_problem();
        // Edge 0 keeps length 2; edge 1 grows from 2 to 3 (ratio 9/4).
        let pose = Pose::new(vec![
            Point2D::new(1.0, 1.0),
            Point2D::new(3.0, 1.0),
            Point2D::new(3.0, 4.0),
        ]);
        let placed = PlacedFigure::from_pose(&problem, &pose).unwrap();
        let violations = placed
            .stretch_violations(problem.figure_vertices(), problem.stretch_tolerance())
            .unwrap();
        assert_eq!(violations, vec![1]);
    }

    #[test]
    fn stretch_violations_requires_matching_reference() {
        let problem = unit_problem();
        let placed = PlacedFigure::original(&problem).unwrap();
        let result = placed.stretch_violations(&[Point2D::new(0.0, 0.0)], 0.1);
        assert!(result.is_err());
    }

    #[test]
    fn dislike_sums_squared_nearest_distances() {
        let problem = unit_problem();
        let pose = Pose::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
        ]);
        let placed = PlacedFigure::from_pose(&problem, &pose).unwrap();
        // Only the hole corner (0, 4) is uncovered; its nearest pose vertex is 4 away.
        assert_eq!(placed.dislike(problem.hole()), 16.0);
    }
}
