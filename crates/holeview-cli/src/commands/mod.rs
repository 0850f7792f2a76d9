pub mod inspect;
pub mod render;

use crate::error::{CliError, Result};
use crate::utils::parser;
use holeview::workflows::batch::BatchReport;

fn parse_ids(spec: &str) -> Result<Vec<String>> {
    parser::parse_ids(spec).map_err(|e| CliError::Argument(e.to_string()))
}

fn failure_lines(report: &BatchReport) -> Vec<String> {
    report
        .failed
        .iter()
        .map(|f| format!("  ✗ {}: {}", f.id, f.reason))
        .collect()
}

fn finish(report: &BatchReport) -> Result<()> {
    for line in failure_lines(report) {
        eprintln!("{}", line);
    }
    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::BatchFailed {
            failed: report.failed.len(),
            total: report.total(),
        })
    }
}
