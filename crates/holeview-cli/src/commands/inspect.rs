use super::{finish, parse_ids};
use crate::cli::InstanceArgs;
use crate::config::PartialRenderConfig;
use crate::error::{CliError, Result};
use crate::utils::parser::expand_template;
use holeview::core::io::problem::ProblemFile;
use holeview::core::io::traits::GeometryFile;
use holeview::core::models::problem::Problem;
use holeview::workflows::{batch, progress::ProgressReporter};
use tracing::info;

pub fn run(args: &InstanceArgs) -> Result<()> {
    let ids = parse_ids(&args.ids)?;
    let config = PartialRenderConfig::load(args.config.as_deref())?
        .merge_with_cli(&args.set_values, &args.overrides())?;
    info!("Inspecting {} problem(s).", ids.len());

    let report = batch::run(&ids, &ProgressReporter::new(), |id| {
        let path = expand_template(&config.problem_template, id);
        let problem = ProblemFile::read_from_path(&path).map_err(CliError::file(&path))?;
        println!("{}", summarize(id, &problem));
        Ok::<(), CliError>(())
    });
    finish(&report)
}

fn summarize(id: &str, problem: &Problem) -> String {
    let range = problem.get_range();
    format!(
        "{}: hole {} vertices, figure {} vertices / {} edges, epsilon {}, x [{}, {}], y [{}, {}]",
        id,
        problem.hole().len(),
        problem.figure_vertices().len(),
        problem.figure().edges().len(),
        problem.epsilon(),
        range.x_range[0],
        range.x_range[1],
        range.y_range[0],
        range.y_range[1],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use holeview::core::models::figure::Edge;
    use holeview::core::models::point::Point2D;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn summary_lists_counts_and_range() {
        let problem = Problem::new(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(20.0, 0.0),
                Point2D::new(20.0, 10.0),
            ],
            vec![Edge::new(0, 1)],
            vec![Point2D::new(2.0, 3.0), Point2D::new(5.0, 7.0)],
            1250.0,
        )
        .unwrap();
        assert_eq!(
            summarize("4", &problem),
            "4: hole 3 vertices, figure 2 vertices / 1 edges, epsilon 1250, x [0, 20], y [0, 10]"
        );
    }

    #[test]
    fn unreadable_problem_fails_the_run() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1.json"), r#"{"hole": [[0, 0], [1, 0]]}"#).unwrap();
        let args = InstanceArgs {
            ids: "1".to_string(),
            config: None,
            problem: Some(dir.path().join("{id}.json").to_string_lossy().into_owned()),
            set_values: vec![],
        };
        assert!(matches!(
            run(&args),
            Err(CliError::BatchFailed { failed: 1, total: 1 })
        ));
    }
}
