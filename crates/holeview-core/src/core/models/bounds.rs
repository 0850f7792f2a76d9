use super::point::Point2D;

/// Axis-aligned bounding box stored as `[min, max]` pairs per axis.
///
/// No padding is ever added; a box around a single point has zero width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// `[min_x, max_x]`.
    pub x_range: [f64; 2],
    /// `[min_y, max_y]`.
    pub y_range: [f64; 2],
}

impl BoundingBox {
    /// Returns `None` for an empty point set.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            x_range: [first.x, first.x],
            y_range: [first.y, first.y],
        };
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grows the box, if needed, so that it contains `p`.
    pub fn include(&mut self, p: &Point2D) {
        self.x_range[0] = self.x_range[0].min(p.x);
        self.x_range[1] = self.x_range[1].max(p.x);
        self.y_range[0] = self.y_range[0].min(p.y);
        self.y_range[1] = self.y_range[1].max(p.y);
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x_range: [
                self.x_range[0].min(other.x_range[0]),
                self.x_range[1].max(other.x_range[1]),
            ],
            y_range: [
                self.y_range[0].min(other.y_range[0]),
                self.y_range[1].max(other.y_range[1]),
            ],
        }
    }

    pub fn width(&self) -> f64 {
        self.x_range[1] - self.x_range[0]
    }

    pub fn height(&self) -> f64 {
        self.y_range[1] - self.y_range[0]
    }

    /// The lower-left corner.
    pub fn min(&self) -> Point2D {
        Point2D::new(self.x_range[0], self.y_range[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_covers_all_points_without_padding() {
        let pts = [
            Point2D::new(1.0, 5.0),
            Point2D::new(-2.0, 3.0),
            Point2D::new(4.0, -1.0),
        ];
        let bb = BoundingBox::from_points(&pts).unwrap();
        assert_eq!(bb.x_range, [-2.0, 4.0]);
        assert_eq!(bb.y_range, [-1.0, 5.0]);
        assert_eq!(bb.width(), 6.0);
        assert_eq!(bb.height(), 6.0);
    }

    #[test]
    fn from_points_returns_none_for_empty_input() {
        let pts: [Point2D; 0] = [];
        assert!(BoundingBox::from_points(&pts).is_none());
    }

    #[test]
    fn union_spans_both_boxes() {
        let a = BoundingBox {
            x_range: [0.0, 1.0],
            y_range: [0.0, 1.0],
        };
        let b = BoundingBox {
            x_range: [5.0, 6.0],
            y_range: [-3.0, 0.5],
        };
        let u = a.union(&b);
        assert_eq!(u.x_range, [0.0, 6.0]);
        assert_eq!(u.y_range, [-3.0, 1.0]);
    }
}
