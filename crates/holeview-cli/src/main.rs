mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::models::RenderKind;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("holeview CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match &cli.command {
        Commands::Triangles(args) => {
            info!("Dispatching to 'triangles' command.");
            let overrides = args.overrides(RenderKind::Triangles);
            commands::render::run(RenderKind::Triangles, args, overrides, cli.quiet)
        }
        Commands::Contour(args) => {
            info!("Dispatching to 'contour' command.");
            commands::render::run(RenderKind::Contour, &args.render, args.overrides(), cli.quiet)
        }
        Commands::Pose(args) => {
            info!("Dispatching to 'pose' command.");
            let overrides = args.overrides(RenderKind::Pose);
            commands::render::run(RenderKind::Pose, args, overrides, cli.quiet)
        }
        Commands::Inspect(args) => {
            info!("Dispatching to 'inspect' command.");
            commands::inspect::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
