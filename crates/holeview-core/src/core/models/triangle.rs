use super::point::Point2D;

/// A triangle from a triangulation dump. Vertices keep the order they were read in so that
/// drawing is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corners in file order: `(x0, y0)`, `(x1, y1)`, `(x2, y2)`.
    pub vertices: [Point2D; 3],
}

impl Triangle {
    pub fn new(v0: Point2D, v1: Point2D, v2: Point2D) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}
