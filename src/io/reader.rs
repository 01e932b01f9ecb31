//! Problem file reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::{ParsePointError, ReadError};
use crate::models::{Load, Point};

/// Parses a coordinate pair such as `(-50.1,80.0)`.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::parse_point;
/// use u_dispatch::models::Point;
///
/// assert_eq!(parse_point("(-50.5,80)").unwrap(), Point::new(-50.5, 80.0));
/// assert!(parse_point("(1.0;2.0)").is_err());
/// ```
pub fn parse_point(text: &str) -> Result<Point, ParsePointError> {
    let inner = text
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| ParsePointError::Malformed(text.to_string()))?;
    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| ParsePointError::Malformed(text.to_string()))?;
    Ok(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(text: &str) -> Result<f64, ParsePointError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ParsePointError::InvalidNumber(text.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParsePointError::InvalidNumber(text.to_string()))
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_point(s)
    }
}

/// Reads loads from a problem in the text format.
///
/// The first line is a header and is skipped. Blank lines are ignored. Every
/// other line must hold `<id> (<px>,<py>) (<dx>,<dy>)`; fields after the
/// dropoff are ignored.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::read_problem;
///
/// let text = "loadNumber pickup dropoff\n1 (0,0) (0,100)\n2 (0,0) (0,50)\n";
/// let loads = read_problem(text.as_bytes()).unwrap();
/// assert_eq!(loads.len(), 2);
/// assert_eq!(loads[1].id(), "2");
/// ```
pub fn read_problem<R: BufRead>(reader: R) -> Result<Vec<Load>, ReadError> {
    let mut loads = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx == 0 || line.trim().is_empty() {
            continue;
        }
        loads.push(parse_record(idx + 1, &line)?);
    }
    debug!(loads = loads.len(), "problem read");
    Ok(loads)
}

/// Reads loads from a problem file.
pub fn read_problem_file(path: impl AsRef<Path>) -> Result<Vec<Load>, ReadError> {
    let file = File::open(path.as_ref())?;
    read_problem(BufReader::new(file))
}

fn parse_record(line: usize, text: &str) -> Result<Load, ReadError> {
    let mut fields = text.split_whitespace();
    let mut next = |field: &'static str| {
        fields
            .next()
            .ok_or(ReadError::MissingField { line, field })
    };

    let id = next("load id")?;
    let pickup = next("pickup")?;
    let dropoff = next("dropoff")?;

    let pickup = parse_point(pickup).map_err(|err| ReadError::at_line(line, err))?;
    let dropoff = parse_point(dropoff).map_err(|err| ReadError::at_line(line, err))?;

    Ok(Load::new(id, pickup, dropoff))
}
