//! Solution checker: partition and drive-time budget.

use std::collections::{HashMap, HashSet};

use crate::constructive::trip_time;
use crate::models::{DispatchConfig, Load, Solution, Violation, ViolationType};

const DRIVE_TIME_TOLERANCE: f64 = 1e-6;

/// Checks a solution against the loads it was built from.
///
/// Reports loads that are missing, repeated or unknown, routes whose stored
/// drive time disagrees with their loads, and drivers over the drive-time
/// budget. An empty result means every load is carried exactly once and every
/// driver is within budget.
///
/// Over-budget drivers carrying a single load are reported with
/// `single_load: true`; the greedy engine produces them for loads whose trip
/// alone exceeds the budget.
///
/// # Examples
///
/// ```
/// use u_dispatch::evaluation::check_solution;
/// use u_dispatch::models::{DispatchConfig, Load, Point};
/// use u_dispatch::solver::solve;
///
/// let loads = vec![
///     Load::new("1", Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
///     Load::new("2", Point::new(5.0, 0.0), Point::new(50.0, 0.0)),
/// ];
/// let config = DispatchConfig::default();
/// let outcome = solve(&loads, &config);
/// assert!(check_solution(&loads, &outcome.solution, &config).is_empty());
/// ```
pub fn check_solution(
    loads: &[Load],
    solution: &Solution,
    config: &DispatchConfig,
) -> Vec<Violation> {
    let depot = config.depot();
    let max_drive_time = config.max_drive_time();
    let trips: HashMap<&str, f64> = loads
        .iter()
        .map(|load| (load.id(), trip_time(depot, load)))
        .collect();

    let mut violations = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for route in solution.routes() {
        let mut recomputed = 0.0;
        for id in route.load_ids() {
            match trips.get(id.as_str()) {
                Some(trip) => recomputed += trip,
                None => violations.push(Violation::new(ViolationType::UnknownLoad {
                    load_id: id.clone(),
                })),
            }
            if !seen.insert(id.as_str()) {
                violations.push(Violation::new(ViolationType::DuplicateLoad {
                    load_id: id.clone(),
                }));
            }
        }

        if (recomputed - route.drive_time()).abs() > DRIVE_TIME_TOLERANCE {
            violations.push(Violation::new(ViolationType::DriveTimeMismatch {
                driver: route.driver(),
                recorded: route.drive_time(),
                recomputed,
            }));
        }

        if route.drive_time() > max_drive_time {
            violations.push(Violation::new(ViolationType::DriveTimeExceeded {
                driver: route.driver(),
                drive_time: route.drive_time(),
                max_drive_time,
                single_load: route.len() == 1,
            }));
        }
    }

    for load in loads {
        if !seen.contains(load.id()) {
            violations.push(Violation::new(ViolationType::MissingLoad {
                load_id: load.id().to_string(),
            }));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DriverRoute, Point};

    fn trip_load(id: &str, trip: f64) -> Load {
        Load::new(id, Point::origin(), Point::new(trip / 2.0, 0.0))
    }

    fn solution_of(routes: Vec<(Vec<&str>, f64)>) -> Solution {
        let mut sol = Solution::new();
        for (i, (ids, time)) in routes.into_iter().enumerate() {
            let ids = ids.into_iter().map(String::from).collect();
            sol.push_route(DriverRoute::new(i, ids, time));
        }
        sol
    }

    #[test]
    fn test_valid_solution() {
        let loads = vec![trip_load("1", 300.0), trip_load("2", 400.0)];
        let sol = solution_of(vec![(vec!["1", "2"], 700.0)]);
        assert!(check_solution(&loads, &sol, &DispatchConfig::default()).is_empty());
    }

    #[test]
    fn test_empty_solution_for_empty_input() {
        assert!(check_solution(&[], &Solution::new(), &DispatchConfig::default()).is_empty());
    }

    #[test]
    fn test_missing_load() {
        let loads = vec![trip_load("1", 100.0), trip_load("2", 100.0)];
        let sol = solution_of(vec![(vec!["1"], 100.0)]);
        let violations = check_solution(&loads, &sol, &DispatchConfig::default());
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::MissingLoad {
                load_id: "2".into()
            })]
        );
    }

    #[test]
    fn test_duplicate_load() {
        let loads = vec![trip_load("1", 100.0)];
        let sol = solution_of(vec![(vec!["1"], 100.0), (vec!["1"], 100.0)]);
        let violations = check_solution(&loads, &sol, &DispatchConfig::default());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::DuplicateLoad { load_id } if load_id == "1"
        ));
    }

    #[test]
    fn test_unknown_load() {
        let loads = vec![trip_load("1", 100.0)];
        let sol = solution_of(vec![(vec!["1", "ghost"], 100.0)]);
        let violations = check_solution(&loads, &sol, &DispatchConfig::default());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::UnknownLoad { load_id } if load_id == "ghost"
        ));
    }

    #[test]
    fn test_drive_time_mismatch() {
        let loads = vec![trip_load("1", 100.0)];
        let sol = solution_of(vec![(vec!["1"], 90.0)]);
        let violations = check_solution(&loads, &sol, &DispatchConfig::default());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::DriveTimeMismatch { driver: 0, .. }
        ));
    }

    #[test]
    fn test_drive_time_exceeded_multi_load() {
        let loads = vec![trip_load("1", 400.0), trip_load("2", 400.0)];
        let sol = solution_of(vec![(vec!["1", "2"], 800.0)]);
        let violations = check_solution(&loads, &sol, &DispatchConfig::default());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::DriveTimeExceeded {
                driver: 0,
                single_load: false,
                ..
            }
        ));
    }

    #[test]
    fn test_drive_time_exceeded_single_load() {
        let loads = vec![trip_load("huge", 1000.0)];
        let sol = solution_of(vec![(vec!["huge"], 1000.0)]);
        let violations = check_solution(&loads, &sol, &DispatchConfig::default());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::DriveTimeExceeded {
                single_load: true,
                ..
            }
        ));
    }
}
