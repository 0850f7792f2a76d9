use nalgebra::Point2;

/// A 2D position in problem coordinates.
pub type Point2D = Point2<f64>;

pub fn squared_distance(a: &Point2D, b: &Point2D) -> f64 {
    (a - b).norm_squared()
}

pub fn midpoint(a: &Point2D, b: &Point2D) -> Point2D {
    nalgebra::center(a, b)
}
