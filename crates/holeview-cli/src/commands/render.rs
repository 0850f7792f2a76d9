use super::{finish, parse_ids};
use crate::cli::RenderArgs;
use crate::config::PartialRenderConfig;
use crate::config::models::{AppConfig, CliOverrides, RenderKind};
use crate::error::{CliError, Result};
use crate::utils::parser::{expand_template, require_placeholder};
use crate::utils::progress::CliProgressHandler;
use holeview::render::renderer::Renderer;
use holeview::render::svg::SvgWriter;
use holeview::workflows::{batch, penalty, pose, progress::ProgressReporter, triangulation};
use std::path::PathBuf;
use tracing::info;

pub fn run(kind: RenderKind, args: &RenderArgs, overrides: CliOverrides, quiet: bool) -> Result<()> {
    let ids = parse_ids(&args.instances.ids)?;
    info!("Rendering '{}' for {} instance(s).", kind.name(), ids.len());

    let config = PartialRenderConfig::load(args.instances.config.as_deref())?
        .merge_with_cli(&args.instances.set_values, &overrides)?;
    require_placeholder(config.output_template(kind), ids.len())
        .map_err(|e| CliError::Argument(e.to_string()))?;

    let renderer = Renderer::new(config.theme.clone());
    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = batch::run(&ids, &reporter, |id| {
        render_instance(kind, id, &config, &renderer).map(|path| {
            info!("Instance {} written to {}", id, path.display());
        })
    });

    if !quiet {
        println!(
            "Rendered {} of {} instance(s).",
            report.succeeded.len(),
            report.total()
        );
    }
    finish(&report)
}

fn render_instance(
    kind: RenderKind,
    id: &str,
    config: &AppConfig,
    renderer: &Renderer,
) -> Result<PathBuf> {
    let problem_path = expand_template(&config.problem_template, id);
    let input_path = expand_template(config.input_template(kind), id);

    let scene = match kind {
        RenderKind::Triangles => triangulation::run(&problem_path, &input_path, renderer)?,
        RenderKind::Contour => penalty::run(&problem_path, &input_path, renderer, config.contour)?,
        RenderKind::Pose => pose::run(&problem_path, &input_path, renderer)?,
    };

    let output_path = expand_template(config.output_template(kind), id);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    SvgWriter::write_scene_to_path(&scene, &config.canvas, &output_path)?;
    Ok(output_path)
}
