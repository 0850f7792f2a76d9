use super::error::WorkflowError;
use crate::core::io::pose::PoseFile;
use crate::core::io::problem::ProblemFile;
use crate::core::io::traits::GeometryFile;
use crate::core::models::bounds::BoundingBox;
use crate::core::models::placed::PlacedFigure;
use crate::core::models::pose::Pose;
use crate::core::models::problem::Problem;
use crate::render::primitives::{Primitive, Scene};
use crate::render::renderer::Renderer;
use crate::render::style::FigureRole;
use std::path::Path;
use tracing::{info, instrument};

/// Score of a pose against its problem, shown in the before/after title.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSummary {
    pub dislike: f64,
    pub stretched_edges: Vec<usize>,
    pub total_edges: usize,
}

impl PoseSummary {
    pub fn evaluate(problem: &Problem, pose: &Pose) -> Result<Self, WorkflowError> {
        let placed = PlacedFigure::from_pose(problem, pose)?;
        Ok(Self {
            dislike: placed.dislike(problem.hole()),
            stretched_edges: placed
                .stretch_violations(problem.figure_vertices(), problem.stretch_tolerance())?,
            total_edges: problem.figure().edges().len(),
        })
    }

    pub fn title(&self) -> String {
        format!(
            "dislike: {:.0}, stretched edges: {}/{}",
            self.dislike,
            self.stretched_edges.len(),
            self.total_edges
        )
    }
}

/// Hole, the figure as given by the problem, and the figure as placed by `pose`, with any
/// stretched edges highlighted on top.
pub fn build_scene(problem: &Problem, pose: &Pose, renderer: &Renderer) -> Result<Scene, WorkflowError> {
    let original = PlacedFigure::original(problem)?;
    let posed = PlacedFigure::from_pose(problem, pose)?;
    let summary = PoseSummary::evaluate(problem, pose)?;

    let range = problem.get_range();
    let bounds = BoundingBox::from_points(pose.vertices()).map_or(range, |b| range.union(&b));

    let mut scene = Scene::new(bounds).with_title(summary.title());
    scene.push(Primitive::Polyline(renderer.render_hole_outline(problem)));
    scene.extend_segments(renderer.render_placed_figure(&original, FigureRole::Original));
    scene.extend_segments(renderer.render_placed_figure(&posed, FigureRole::Posed));
    scene.extend_segments(renderer.render_edge_highlights(&posed, &summary.stretched_edges));
    Ok(scene)
}

#[instrument(skip(renderer), name = "pose_workflow")]
pub fn run(problem_path: &Path, pose_path: &Path, renderer: &Renderer) -> Result<Scene, WorkflowError> {
    let problem = ProblemFile::read_from_path(problem_path).map_err(WorkflowError::load(problem_path))?;
    let pose = PoseFile::read_from_path(pose_path).map_err(WorkflowError::load(pose_path))?;
    let scene = build_scene(&problem, &pose, renderer)?;
    info!("{}", scene.title.as_deref().unwrap_or_default());
    Ok(scene)
}
