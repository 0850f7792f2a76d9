use super::style::Style;
use crate::core::models::bounds::BoundingBox;
use crate::core::models::point::Point2D;
use crate::core::utils::color::Color;
use nalgebra::DMatrix;

/// An open or closed chain of line segments through `points`, in order.
///
/// A closed outline repeats its first point at the end rather than relying on the surface to
/// close it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point2D>,
    pub style: Style,
}

impl Polyline {
    /// Whether the last point coincides with the first.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }
}

/// A single straight line, one per figure edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
    pub style: Style,
}

/// A filled dot highlighting one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub at: Point2D,
    /// Radius in output pixels, independent of the scene scale.
    pub radius: f64,
    pub style: Style,
}

/// One iso-line of a [`ContourSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevel {
    pub value: f64,
    /// `value` printed with just enough decimals to tell neighbouring levels apart.
    pub label: String,
    pub color: Color,
    pub segments: Vec<[Point2D; 2]>,
    /// Where the label is placed; `None` when the level never crosses the grid.
    pub label_anchor: Option<Point2D>,
}

/// Everything a contour plot needs: sample axes, the sampled values (rows along `ys`,
/// columns along `xs`), and the labelled iso-levels with their line segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourSpec {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub values: DMatrix<f64>,
    pub levels: Vec<ContourLevel>,
    pub width: f64,
    pub label_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline(Polyline),
    Segment(Segment),
    Marker(Marker),
    Contour(ContourSpec),
}

/// An ordered collection of primitives; later primitives are drawn on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: Option<String>,
    pub bounds: BoundingBox,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            title: None,
            bounds,
            primitives: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn extend_polylines(&mut self, polylines: impl IntoIterator<Item = Polyline>) {
        self.primitives
            .extend(polylines.into_iter().map(Primitive::Polyline));
    }

    pub fn extend_segments(&mut self, segments: impl IntoIterator<Item = Segment>) {
        self.primitives
            .extend(segments.into_iter().map(Primitive::Segment));
    }
}
