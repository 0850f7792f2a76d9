use super::progress::{Progress, ProgressReporter};
use std::fmt::Display;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs `job` once per id in order. A failing instance is logged and recorded, and the
/// batch moves on to the next id.
pub fn run<I, F, E>(ids: &[I], reporter: &ProgressReporter, mut job: F) -> BatchReport
where
    I: AsRef<str>,
    F: FnMut(&str) -> Result<(), E>,
    E: Display,
{
    let mut report = BatchReport::default();
    reporter.report(Progress::BatchStart {
        total: ids.len() as u64,
    });

    for id in ids {
        let id = id.as_ref();
        reporter.report(Progress::InstanceStart { id: id.to_string() });
        match job(id) {
            Ok(()) => {
                report.succeeded.push(id.to_string());
                reporter.report(Progress::InstanceDone);
            }
            Err(e) => {
                warn!(instance = id, "Skipping instance: {}", e);
                let failure = BatchFailure {
                    id: id.to_string(),
                    reason: e.to_string(),
                };
                reporter.report(Progress::InstanceFailed {
                    id: failure.id.clone(),
                    reason: failure.reason.clone(),
                });
                report.failed.push(failure);
            }
        }
    }

    reporter.report(Progress::BatchFinish);
    info!(
        "Batch finished: {} succeeded, {} failed.",
        report.succeeded.len(),
        report.failed.len()
    );
    report
}
