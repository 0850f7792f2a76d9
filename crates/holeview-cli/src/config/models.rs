use holeview::render::style::Theme;
use holeview::render::svg::SvgCanvas;
use holeview::workflows::penalty::ContourOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Triangles,
    Contour,
    Pose,
}

impl RenderKind {
    pub fn name(self) -> &'static str {
        match self {
            RenderKind::Triangles => "triangles",
            RenderKind::Contour => "contour",
            RenderKind::Pose => "pose",
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub problem_template: String,
    pub triangles_template: String,
    pub penalty_map_template: String,
    pub pose_template: String,
    pub triangles_output: String,
    pub contour_output: String,
    pub pose_output: String,
    pub canvas: SvgCanvas,
    pub theme: Theme,
    pub contour: ContourOptions,
}

impl AppConfig {
    pub fn input_template(&self, kind: RenderKind) -> &str {
        match kind {
            RenderKind::Triangles => &self.triangles_template,
            RenderKind::Contour => &self.penalty_map_template,
            RenderKind::Pose => &self.pose_template,
        }
    }

    pub fn output_template(&self, kind: RenderKind) -> &str {
        match kind {
            RenderKind::Triangles => &self.triangles_output,
            RenderKind::Contour => &self.contour_output,
            RenderKind::Pose => &self.pose_output,
        }
    }
}

/// Values given directly on the command line, which win over everything else.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub problem: Option<String>,
    pub kind: Option<RenderKind>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub target_vertex: Option<usize>,
    pub max_levels: Option<usize>,
}
