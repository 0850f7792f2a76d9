use holeview::render::contour::DEFAULT_MAX_LEVELS;
use holeview::workflows::penalty::DEFAULT_TARGET_VERTEX;

pub struct DefaultsConfig {
    pub problem: &'static str,
    pub triangles: &'static str,
    pub penalty_map: &'static str,
    pub pose: &'static str,
    pub triangles_output: &'static str,
    pub contour_output: &'static str,
    pub pose_output: &'static str,
    pub width: u32,
    pub height: u32,
    pub target_vertex: usize,
    pub max_levels: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            problem: "data/in/{id}.json",
            triangles: "data/debug/hole_{id}.txt",
            penalty_map: "data/debug/penalty_map_{id}.txt",
            pose: "{id}.json",
            triangles_output: "img_{id}.svg",
            contour_output: "penalty_contour_{id}.svg",
            pose_output: "pose_{id}.svg",
            width: 800,
            height: 800,
            target_vertex: DEFAULT_TARGET_VERTEX,
            max_levels: DEFAULT_MAX_LEVELS,
        }
    }
}
