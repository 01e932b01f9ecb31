//! Solution writers.

use std::io::{self, Write};

use serde::Serialize;

use crate::batch::BatchReport;
use crate::solver::DispatchOutcome;

/// Writes one line per driver, `[id1,id2,...]`, in driver order, followed by
/// the total cost with two decimals.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::write_text_solution;
/// use u_dispatch::models::{DispatchConfig, Load, Point};
/// use u_dispatch::solver::solve;
///
/// let loads = vec![
///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
///     Load::new("B", Point::new(0.0, 0.0), Point::new(0.0, 50.0)),
/// ];
/// let outcome = solve(&loads, &DispatchConfig::default());
/// let mut out = Vec::new();
/// write_text_solution(&mut out, &outcome).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[B,A]\nTotal cost: 800.00\n");
/// ```
pub fn write_text_solution<W: Write>(
    writer: &mut W,
    outcome: &DispatchOutcome,
) -> io::Result<()> {
    for route in outcome.solution.routes() {
        writeln!(writer, "[{}]", route.load_ids().join(","))?;
    }
    writeln!(writer, "Total cost: {:.2}", outcome.total_cost())?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSolution<'a> {
    drivers: Vec<&'a [String]>,
    num_drivers: usize,
    drive_time: f64,
    total_cost: f64,
}

impl<'a> JsonSolution<'a> {
    fn new(outcome: &'a DispatchOutcome) -> Self {
        Self {
            drivers: outcome.solution.routes().iter().map(|r| r.load_ids()).collect(),
            num_drivers: outcome.cost.num_drivers,
            drive_time: outcome.cost.drive_time,
            total_cost: outcome.cost.total,
        }
    }
}

/// Writes the outcome as a JSON document:
/// `{"drivers": [[ids...], ...], "numDrivers": n, "driveTime": t, "totalCost": c}`.
pub fn write_json_solution<W: Write>(
    writer: &mut W,
    outcome: &DispatchOutcome,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonSolution::new(outcome))?;
    writeln!(writer)?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFile<'a> {
    path: String,
    elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<JsonSolution<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonBatch<'a> {
    files: Vec<JsonFile<'a>>,
    num_solved: usize,
    num_failed: usize,
    mean_cost: Option<f64>,
}

/// Writes a whole batch as one JSON document.
///
/// Each entry of `files` names its path and carries either a `solution`
/// (same shape as [`write_json_solution`]) or the `error` that kept the file
/// from being read. `meanCost` is `null` when no file was solved.
pub fn write_json_batch<W: Write>(writer: &mut W, batch: &BatchReport) -> io::Result<()> {
    let files = batch
        .files
        .iter()
        .map(|report| {
            let (solution, error) = match &report.outcome {
                Ok(outcome) => (Some(JsonSolution::new(outcome)), None),
                Err(err) => (None, Some(err.to_string())),
            };
            JsonFile {
                path: report.path.display().to_string(),
                elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
                solution,
                error,
            }
        })
        .collect();
    let doc = JsonBatch {
        files,
        num_solved: batch.num_solved(),
        num_failed: batch.num_failed(),
        mean_cost: batch.mean_cost(),
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::run_batch;
    use crate::models::{DispatchConfig, Load, Point};
    use crate::solver::solve;
    use std::fs;

    fn two_driver_outcome() -> DispatchOutcome {
        let loads = vec![
            Load::new("1", Point::new(0.0, 100.0), Point::new(0.0, 200.0)),
            Load::new("2", Point::new(100.0, 0.0), Point::new(200.0, 0.0)),
            Load::new("3", Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
        ];
        solve(&loads, &DispatchConfig::default())
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        write_text_solution(&mut out, &two_driver_outcome()).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        // Order: 3 (key 10), 1 and 2 (key 200). 20 + 400 fits; 2 does not.
        assert_eq!(text, "[3,1]\n[2]\nTotal cost: 1820.00\n");
    }

    #[test]
    fn test_text_output_empty() {
        let outcome = solve(&[], &DispatchConfig::default());
        let mut out = Vec::new();
        write_text_solution(&mut out, &outcome).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Total cost: 0.00\n");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_json_solution(&mut out, &two_driver_outcome()).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["drivers"], serde_json::json!([["3", "1"], ["2"]]));
        assert_eq!(value["numDrivers"], 2);
        assert_eq!(value["driveTime"], 820.0);
        assert_eq!(value["totalCost"], 1820.0);
    }

    #[test]
    fn test_json_batch_is_one_document() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("a.txt"), "header\nA (0,0) (0,100)\n").expect("write");
        fs::write(dir.path().join("b.txt"), "header\n1 (x,0) (0,0)\n").expect("write");
        fs::write(dir.path().join("c.txt"), "header\nB (0,0) (0,50)\n").expect("write");
        let batch = run_batch(dir.path(), &DispatchConfig::default()).expect("batch");

        let mut out = Vec::new();
        write_json_batch(&mut out, &batch).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

        let files = value["files"].as_array().expect("files array");
        assert_eq!(files.len(), 3);
        assert!(files[0]["path"].as_str().expect("path").ends_with("a.txt"));
        assert_eq!(files[0]["solution"]["drivers"], serde_json::json!([["A"]]));
        assert!(files[0].get("error").is_none());
        assert!(files[1]["path"].as_str().expect("path").ends_with("b.txt"));
        assert!(files[1]["error"].as_str().expect("error").contains("line 2"));
        assert!(files[1].get("solution").is_none());
        assert_eq!(files[2]["solution"]["totalCost"], 600.0);
        assert_eq!(value["numSolved"], 2);
        assert_eq!(value["numFailed"], 1);
        // (700 + 600) / 2
        assert_eq!(value["meanCost"], 650.0);
    }

    #[test]
    fn test_json_batch_nothing_solved() {
        let dir = tempfile::tempdir().expect("temp dir");
        let batch = run_batch(dir.path(), &DispatchConfig::default()).expect("batch");
        let mut out = Vec::new();
        write_json_batch(&mut out, &batch).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["files"], serde_json::json!([]));
        assert!(value["meanCost"].is_null());
    }
}
