use super::error::WorkflowError;
use crate::core::io::problem::ProblemFile;
use crate::core::io::table::ScalarGridFile;
use crate::core::io::traits::GeometryFile;
use crate::core::models::grid::ScalarGrid;
use crate::core::models::placed::PlacedFigure;
use crate::core::models::problem::Problem;
use crate::render::contour::DEFAULT_MAX_LEVELS;
use crate::render::primitives::{Primitive, Scene};
use crate::render::renderer::Renderer;
use std::path::Path;
use tracing::{debug, info, instrument};

pub const DEFAULT_TARGET_VERTEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourOptions {
    /// Figure vertex marked on top of the contour.
    pub target_vertex: usize,
    pub max_levels: usize,
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            target_vertex: DEFAULT_TARGET_VERTEX,
            max_levels: DEFAULT_MAX_LEVELS,
        }
    }
}

/// Contour of the penalty map spread over the problem's range, the hole outline, and a
/// marker on the target figure vertex, in that drawing order.
pub fn build_scene(
    problem: &Problem,
    grid: &ScalarGrid,
    renderer: &Renderer,
    options: ContourOptions,
) -> Result<Scene, WorkflowError> {
    let range = problem.get_range();
    let original = PlacedFigure::original(problem)?;
    let target = original.vertex(options.target_vertex)?;

    let contour = renderer.render_contour(grid, range.x_range, range.y_range, options.max_levels)?;
    debug!(
        "Contour has {} levels over a {}x{} grid.",
        contour.levels.len(),
        grid.rows(),
        grid.cols()
    );

    let mut scene = Scene::new(range).with_title(format!("penalty map, vertex {}", options.target_vertex));
    scene.push(Primitive::Contour(contour));
    scene.push(Primitive::Polyline(renderer.render_hole_outline(problem)));
    scene.push(Primitive::Marker(renderer.render_marker(target)));
    Ok(scene)
}

#[instrument(skip(renderer), name = "penalty_workflow")]
pub fn run(
    problem_path: &Path,
    grid_path: &Path,
    renderer: &Renderer,
    options: ContourOptions,
) -> Result<Scene, WorkflowError> {
    let problem = ProblemFile::read_from_path(problem_path).map_err(WorkflowError::load(problem_path))?;
    let grid = ScalarGridFile::read_from_path(grid_path).map_err(WorkflowError::load(grid_path))?;
    info!("Loaded {}x{} penalty map.", grid.rows(), grid.cols());
    build_scene(&problem, &grid, renderer, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::error::GeometryError;
    use crate::core::models::figure::Edge;
    use crate::core::models::point::Point2D;
    use nalgebra::DMatrix;

    fn problem() -> Problem {
        Problem::new(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(10.0, 10.0),
                Point2D::new(0.0, 10.0),
            ],
            vec![Edge::new(0, 1)],
            vec![Point2D::new(2.0, 3.0), Point2D::new(7.0, 5.0)],
            0.0,
        )
        .unwrap()
    }

    fn ramp() -> ScalarGrid {
        ScalarGrid::from_matrix(DMatrix::from_fn(3, 3, |r, c| (r + c) as f64))
    }

    #[test]
    fn draws_contour_then_hole_then_marker() {
        let renderer = Renderer::default();
        let scene = build_scene(&problem(), &ramp(), &renderer, ContourOptions::default()).unwrap();

        assert_eq!(scene.primitives.len(), 3);
        let Primitive::Contour(spec) = &scene.primitives[0] else {
            panic!("contour must be drawn first");
        };
        assert_eq!(spec.xs, vec![0.0, 5.0, 10.0]);
        assert_eq!(spec.ys, vec![0.0, 5.0, 10.0]);
        assert!(!spec.levels.is_empty());
        assert!(matches!(scene.primitives[1], Primitive::Polyline(_)));
        let Primitive::Marker(marker) = &scene.primitives[2] else {
            panic!("marker must be drawn last");
        };
        assert_eq!(marker.at, Point2D::new(7.0, 5.0));
        assert_eq!(marker.style, renderer.theme().marker);
    }

    #[test]
    fn missing_target_vertex_is_an_error() {
        let options = ContourOptions {
            target_vertex: 5,
            ..ContourOptions::default()
        };
        let err = build_scene(&problem(), &ramp(), &Renderer::default(), options).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Geometry(GeometryError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let empty = ScalarGrid::from_matrix(DMatrix::zeros(0, 0));
        let err = build_scene(&problem(), &empty, &Renderer::default(), ContourOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Geometry(GeometryError::EmptyGeometry(_))
        ));
    }

    #[test]
    fn building_twice_gives_identical_scenes() {
        let renderer = Renderer::default();
        let a = build_scene(&problem(), &ramp(), &renderer, ContourOptions::default()).unwrap();
        let b = build_scene(&problem(), &ramp(), &renderer, ContourOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
