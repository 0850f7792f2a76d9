use super::bounds::BoundingBox;
use super::error::GeometryError;
use super::point::Point2D;

/// An implicitly closed polygon: the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: Vec<Point2D>) -> Result<Self, GeometryError> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(GeometryError::DegeneratePolygon {
                found: vertices.len(),
            });
        }
        Ok(Self { vertices })
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

    /// Vertices in order with the first one repeated at the end.
    pub fn closed_ring(&self) -> impl Iterator<Item = &Point2D> + '_ {
        self.vertices.iter().chain(self.vertices.first())
    }

    pub fn bounds(&self) -> BoundingBox {
        // Non-empty by construction.
        let first = self.vertices[0];
        let mut bounds = BoundingBox {
            x_range: [first.x, first.x],
            y_range: [first.y, first.y],
        };
        for p in &self.vertices[1..] {
            bounds.include(p);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
        ]
    }

    #[test]
    fn new_rejects_fewer_than_three_vertices() {
        let result = Polygon::new(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        assert_eq!(result, Err(GeometryError::DegeneratePolygon { found: 2 }));
        assert!(Polygon::new(vec![]).is_err());
    }

    #[test]
    fn closed_ring_repeats_first_vertex() {
        let polygon = Polygon::new(triangle()).unwrap();
        let ring: Vec<_> = polygon.closed_ring().copied().collect();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
    }

    #[test]
    fn bounds_matches_vertex_extent() {
        let polygon = Polygon::new(triangle()).unwrap();
        let bb = polygon.bounds();
        assert_eq!(bb.x_range, [0.0, 1.0]);
        assert_eq!(bb.y_range, [0.0, 1.0]);
    }
}
