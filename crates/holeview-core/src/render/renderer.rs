use super::contour::{self, format_level, label_anchor, label_precision, nice_levels};
use super::primitives::{ContourLevel, ContourSpec, Marker, Polyline, Segment};
use super::style::{FigureRole, Theme};
use crate::core::models::error::GeometryError;
use crate::core::models::figure::FigureTopology;
use crate::core::models::grid::ScalarGrid;
use crate::core::models::placed::PlacedFigure;
use crate::core::models::point::Point2D;
use crate::core::models::problem::Problem;
use crate::core::models::triangle::Triangle;
use crate::core::utils::sampling::linspace;

/// Maps data models to drawable primitives using a fixed [`Theme`].
///
/// Holds no mutable state: rendering the same input twice yields identical primitives.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Closed polyline through the hole vertices, first vertex repeated at the end.
    pub fn render_hole_outline(&self, problem: &Problem) -> Polyline {
        Polyline {
            points: problem.hole().closed_ring().copied().collect(),
            style: self.theme.hole,
        }
    }

    /// One segment per edge of `topology`, endpoints resolved from `vertices`.
    ///
    /// Passing the problem's original vertices or a pose's vertices is how "before" and
    /// "after" are drawn with the same routine.
    pub fn render_figure_edges(
        &self,
        topology: &FigureTopology,
        vertices: &[Point2D],
        role: FigureRole,
    ) -> Result<Vec<Segment>, GeometryError> {
        let placed = PlacedFigure::new(topology, vertices)?;
        Ok(self.render_placed_figure(&placed, role))
    }

    pub fn render_placed_figure(&self, placed: &PlacedFigure<'_>, role: FigureRole) -> Vec<Segment> {
        let style = self.theme.figure(role);
        placed
            .edge_endpoints()
            .map(|(start, end)| Segment { start, end, style })
            .collect()
    }

    /// Segments for the given edge indices, drawn in the stretched-edge style.
    pub fn render_edge_highlights(&self, placed: &PlacedFigure<'_>, edge_indices: &[usize]) -> Vec<Segment> {
        let edges = placed.topology().edges();
        edge_indices
            .iter()
            .filter_map(|&i| edges.get(i))
            .map(|e| {
                let (start, end) = placed.endpoints(e);
                Segment {
                    start,
                    end,
                    style: self.theme.stretched_edge,
                }
            })
            .collect()
    }

    /// Each triangle as its own 4-point closed polyline.
    pub fn render_triangles(&self, triangles: &[Triangle]) -> Vec<Polyline> {
        triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.vertices;
                Polyline {
                    points: vec![a, b, c, a],
                    style: self.theme.triangle,
                }
            })
            .collect()
    }

    /// Spreads the grid over `x_range` × `y_range` and extracts labelled iso-lines.
    ///
    /// Columns are sampled along x and rows along y, endpoints inclusive.
    pub fn render_contour(
        &self,
        grid: &ScalarGrid,
        x_range: [f64; 2],
        y_range: [f64; 2],
        max_levels: usize,
    ) -> Result<ContourSpec, GeometryError> {
        if grid.is_empty() {
            return Err(GeometryError::EmptyGeometry("scalar grid"));
        }
        let xs = linspace(x_range[0], x_range[1], grid.cols());
        let ys = linspace(y_range[0], y_range[1], grid.rows());

        let (values, step) = match grid.finite_range() {
            Some((lo, hi)) => nice_levels(lo, hi, max_levels),
            None => (Vec::new(), 0.0),
        };
        let decimals = label_precision(step);

        let levels = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let segments = contour::iso_segments(&xs, &ys, grid.values(), value);
                ContourLevel {
                    value,
                    label: format_level(value, decimals),
                    color: self.theme.contour_color(i),
                    label_anchor: label_anchor(&segments),
                    segments,
                }
            })
            .collect();

        Ok(ContourSpec {
            xs,
            ys,
            values: grid.values().clone(),
            levels,
            width: self.theme.contour_width,
            label_size: self.theme.label_size,
        })
    }

    pub fn render_marker(&self, at: Point2D) -> Marker {
        Marker {
            at,
            radius: self.theme.marker_radius,
            style: self.theme.marker,
        }
    }
}
