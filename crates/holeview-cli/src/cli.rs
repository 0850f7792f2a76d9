use crate::config::models::{CliOverrides, RenderKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "holeview contributors",
    version,
    about = "holeview - Render problem holes, figures, poses, triangulation dumps and penalty maps as SVG images.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the hole outline with a triangulation dump on top.
    Triangles(RenderArgs),
    /// Draw labelled contours of a penalty map, the hole, and a marker on one figure vertex.
    Contour(ContourArgs),
    /// Draw the hole, the original figure and a candidate pose.
    Pose(RenderArgs),
    /// Print vertex and edge counts, epsilon and bounding box of each problem.
    Inspect(InstanceArgs),
}

/// Which instances to process and where their problem files live.
#[derive(Args, Debug, Clone)]
pub struct InstanceArgs {
    /// Instance ids: a range (1-78), a comma-separated list (3,5,9) or any literal name.
    #[arg(long, required = true, value_name = "IDS")]
    pub ids: String,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Problem file template; `{id}` is replaced by each instance id.
    #[arg(long, value_name = "TEMPLATE")]
    pub problem: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S theme.hole-color=navy
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments shared by every rendering subcommand.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub instances: InstanceArgs,

    /// Input file template (triangulation dump, penalty map or pose, depending on the subcommand).
    #[arg(short, long, value_name = "TEMPLATE")]
    pub input: Option<String>,

    /// Output image template; `{id}` is replaced by each instance id.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub output: Option<String>,

    /// Override the canvas width in pixels.
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Override the canvas height in pixels.
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,
}

/// Arguments for the `contour` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ContourArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Figure vertex to mark on top of the contour.
    #[arg(long, value_name = "INDEX")]
    pub target_vertex: Option<usize>,

    /// Upper bound on the number of contour level intervals.
    #[arg(long, value_name = "INT")]
    pub max_levels: Option<usize>,
}

impl InstanceArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            problem: self.problem.clone(),
            ..CliOverrides::default()
        }
    }
}

impl RenderArgs {
    pub fn overrides(&self, kind: RenderKind) -> CliOverrides {
        CliOverrides {
            kind: Some(kind),
            input: self.input.clone(),
            output: self.output.clone(),
            width: self.width,
            height: self.height,
            ..self.instances.overrides()
        }
    }
}

impl ContourArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            target_vertex: self.target_vertex,
            max_levels: self.max_levels,
            ..self.render.overrides(RenderKind::Contour)
        }
    }
}
