//! Solving problem files, one at a time or a whole directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::io::{read_problem_file, ReadError};
use crate::models::DispatchConfig;
use crate::solver::{solve, DispatchOutcome};

/// Advisory run time per problem file. Exceeding it is reported, not enforced.
pub const RUN_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Result of solving one problem file.
#[derive(Debug)]
pub struct FileReport {
    /// Problem file.
    pub path: PathBuf,
    /// Solved outcome, or the error that prevented reading the file.
    pub outcome: Result<DispatchOutcome, ReadError>,
    /// Time spent reading and solving.
    pub elapsed: Duration,
}

impl FileReport {
    /// Returns `true` if solving took longer than [`RUN_TIME_LIMIT`].
    pub fn exceeded_time_limit(&self) -> bool {
        self.elapsed > RUN_TIME_LIMIT
    }
}

/// Reads and solves one problem file, timing both steps.
pub fn solve_file(path: &Path, config: &DispatchConfig) -> FileReport {
    let start = Instant::now();
    let outcome = read_problem_file(path).map(|loads| solve(&loads, config));
    let elapsed = start.elapsed();

    let report = FileReport {
        path: path.to_path_buf(),
        outcome,
        elapsed,
    };
    match &report.outcome {
        Ok(outcome) => info!(
            path = %path.display(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            total_cost = outcome.total_cost(),
            "problem solved"
        ),
        Err(err) => warn!(path = %path.display(), error = %err, "problem skipped"),
    }
    if report.exceeded_time_limit() {
        warn!(path = %path.display(), ?elapsed, "run time limit exceeded");
    }
    report
}

/// Reports for every problem file of a directory, in file name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One report per regular file.
    pub files: Vec<FileReport>,
}

impl BatchReport {
    fn solved(&self) -> impl Iterator<Item = (&FileReport, &DispatchOutcome)> {
        self.files
            .iter()
            .filter_map(|f| f.outcome.as_ref().ok().map(|o| (f, o)))
    }

    /// Number of files solved successfully.
    pub fn num_solved(&self) -> usize {
        self.solved().count()
    }

    /// Number of files that could not be read.
    pub fn num_failed(&self) -> usize {
        self.files.len() - self.num_solved()
    }

    /// Mean total cost over solved files, `None` if none was solved.
    pub fn mean_cost(&self) -> Option<f64> {
        let n = self.num_solved();
        if n == 0 {
            return None;
        }
        Some(self.solved().map(|(_, o)| o.total_cost()).sum::<f64>() / n as f64)
    }

    /// Mean run time over solved files, `None` if none was solved.
    pub fn mean_elapsed(&self) -> Option<Duration> {
        let n = self.num_solved();
        if n == 0 {
            return None;
        }
        let total: Duration = self.solved().map(|(f, _)| f.elapsed).sum();
        Some(total / n as u32)
    }
}

/// Solves every regular file in `dir`.
///
/// Files are processed in file name order. A file that cannot be read is
/// recorded in its report and does not stop the batch; only failing to list
/// the directory itself is an error.
pub fn run_batch(dir: &Path, config: &DispatchConfig) -> Result<BatchReport, ReadError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let files = paths.iter().map(|path| solve_file(path, config)).collect();
    Ok(BatchReport { files })
}
