//! Command line interface to the load dispatcher.
//!
//! ```text
//! u-dispatch problems/problem1.txt
//! u-dispatch problems/ --max-drive-time 600 --format json
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{arg, value_parser, ArgMatches, Command};
use tracing_subscriber::EnvFilter;
use u_dispatch::batch::{run_batch, solve_file, BatchReport, FileReport, RUN_TIME_LIMIT};
use u_dispatch::io::{write_json_batch, write_json_solution, write_text_solution};
use u_dispatch::models::DispatchConfig;

/// Log filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "u_dispatch=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn cli() -> Command {
    Command::new("u-dispatch")
        .about("Assigns pickup/dropoff loads to drivers under a drive-time budget")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            arg!(<PATH> "Problem file, or a directory of problem files")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--config <FILE> "JSON file with depot, maxDriveTime and fixedCostPerDriver")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"max-drive-time" <TIME> "Drive-time budget per driver")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"fixed-cost" <COST> "Fixed cost per driver used")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--format <FORMAT> "Solution output format")
                .required(false)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}

fn load_config(matches: &ArgMatches) -> Result<DispatchConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read config file '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("cannot parse config file '{}'", path.display()))?
        }
        None => DispatchConfig::default(),
    };
    if let Some(&max) = matches.get_one::<f64>("max-drive-time") {
        config = config.with_max_drive_time(max);
    }
    if let Some(&cost) = matches.get_one::<f64>("fixed-cost") {
        config = config.with_fixed_cost_per_driver(cost);
    }
    Ok(config)
}

fn print_report<W: Write>(out: &mut W, report: &FileReport, format: Format) -> Result<()> {
    let outcome = match &report.outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            writeln!(out, "{}", report.path.display())?;
            writeln!(out, "\terror reading input file: {err}")?;
            return Ok(());
        }
    };

    if format == Format::Json {
        write_json_solution(out, outcome)?;
        return Ok(());
    }

    writeln!(out, "{}", report.path.display())?;
    writeln!(out, "\trun time: {:?}", report.elapsed)?;
    if report.exceeded_time_limit() {
        writeln!(
            out,
            "\t\trun time limit of {}s exceeded",
            RUN_TIME_LIMIT.as_secs()
        )?;
    }
    write_text_solution(out, outcome)?;
    Ok(())
}

fn print_batch<W: Write>(out: &mut W, batch: &BatchReport, format: Format) -> Result<()> {
    if format == Format::Json {
        write_json_batch(out, batch)?;
        return Ok(());
    }

    for report in &batch.files {
        print_report(out, report, format)?;
    }
    if let (Some(cost), Some(elapsed)) = (batch.mean_cost(), batch.mean_elapsed()) {
        writeln!(out, "mean cost: {cost:.2}")?;
        writeln!(out, "mean run time: {:.2} ms", elapsed.as_secs_f64() * 1000.0)?;
    }
    Ok(())
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("PATH")
        .context("missing problem path")?;
    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => Format::Json,
        _ => Format::Text,
    };
    let config = load_config(matches)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let metadata = fs::metadata(path)
        .with_context(|| format!("cannot access input path '{}'", path.display()))?;

    if metadata.is_dir() {
        let batch = run_batch(path, &config)
            .with_context(|| format!("cannot read directory '{}'", path.display()))?;
        print_batch(&mut out, &batch, format)?;
    } else {
        let report = solve_file(path, &config);
        if let Err(err) = &report.outcome {
            bail!("cannot solve '{}': {err}", path.display());
        }
        print_report(&mut out, &report, format)?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_writer(io::stderr)
        .init();

    run(&cli().get_matches())
}
