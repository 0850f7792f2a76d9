use super::point::Point2D;

/// A candidate placement of a figure. The vertex table is kept verbatim; pairing it with a
/// topology is done through [`super::placed::PlacedFigure`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    vertices: Vec<Point2D>,
}

impl Pose {
    pub fn new(vertices: Vec<Point2D>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
