use super::error::WorkflowError;
use crate::core::io::problem::ProblemFile;
use crate::core::io::traits::GeometryFile;
use crate::core::io::triangles::TriangleDumpFile;
use crate::core::models::bounds::BoundingBox;
use crate::core::models::problem::Problem;
use crate::core::models::triangle::Triangle;
use crate::render::primitives::{Primitive, Scene};
use crate::render::renderer::Renderer;
use std::path::Path;
use tracing::{info, instrument};

/// Hole outline with every triangle of a triangulation dump drawn on top.
pub fn build_scene(problem: &Problem, triangles: &[Triangle], renderer: &Renderer) -> Scene {
    let bounds = triangles
        .iter()
        .fold(problem.get_range(), |acc: BoundingBox, tri| {
            BoundingBox::from_points(&tri.vertices).map_or(acc, |b| acc.union(&b))
        });

    let mut scene = Scene::new(bounds).with_title(format!("{} triangles", triangles.len()));
    scene.push(Primitive::Polyline(renderer.render_hole_outline(problem)));
    scene.extend_polylines(renderer.render_triangles(triangles));
    scene
}

#[instrument(skip(renderer), name = "triangulation_workflow")]
pub fn run(
    problem_path: &Path,
    dump_path: &Path,
    renderer: &Renderer,
) -> Result<Scene, WorkflowError> {
    let problem = ProblemFile::read_from_path(problem_path).map_err(WorkflowError::load(problem_path))?;
    let triangles = TriangleDumpFile::read_from_path(dump_path).map_err(WorkflowError::load(dump_path))?;
    info!("Loaded {} triangles.", triangles.len());
    Ok(build_scene(&problem, &triangles, renderer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::point::Point2D;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn scene_has_hole_then_one_ring_per_triangle() {
        let dir = tempdir().unwrap();
        let problem_path = dir.path().join("1.json");
        let dump_path = dir.path().join("hole_1.txt");
        fs::write(
            &problem_path,
            r#"{"hole": [[0, 0], [4, 0], [4, 3], [0, 3]], "figure": {"edges": [], "vertices": []}}"#,
        )
        .unwrap();
        fs::write(&dump_path, "0 0 4 0 0 3\n4 0 4 3 0 3\n").unwrap();

        let renderer = Renderer::default();
        let scene = run(&problem_path, &dump_path, &renderer).unwrap();

        assert_eq!(scene.primitives.len(), 3);
        match &scene.primitives[0] {
            Primitive::Polyline(p) => {
                assert_eq!(p.points.len(), 5);
                assert_eq!(p.style, renderer.theme().hole);
            }
            other => panic!("expected hole polyline, got {other:?}"),
        }
        assert_eq!(scene.bounds.x_range, [0.0, 4.0]);
        assert_eq!(scene.bounds.y_range, [0.0, 3.0]);
    }

    #[test]
    fn bounds_grow_to_cover_triangles_outside_hole() {
        let problem = Problem::new(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(1.0, 1.0),
            ],
            vec![],
            vec![],
            0.0,
        )
        .unwrap();
        let tri = Triangle::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(9.0, 0.0),
            Point2D::new(0.0, -2.0),
        );
        let scene = build_scene(&problem, &[tri], &Renderer::default());
        assert_eq!(scene.bounds.x_range, [0.0, 9.0]);
        assert_eq!(scene.bounds.y_range, [-2.0, 1.0]);
    }

    #[test]
    fn run_reports_which_file_failed() {
        let dir = tempdir().unwrap();
        let problem_path = dir.path().join("1.json");
        fs::write(
            &problem_path,
            r#"{"hole": [[0, 0], [4, 0], [4, 3]], "figure": {"edges": [], "vertices": []}}"#,
        )
        .unwrap();
        let missing = dir.path().join("hole_1.txt");

        let err = run(&problem_path, &missing, &Renderer::default()).unwrap_err();
        match err {
            WorkflowError::Load { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
