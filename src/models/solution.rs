//! Solution and violation types.

use super::DriverRoute;
use serde::Serialize;

/// A problem found when checking a solution against its loads.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// An input load is not carried by any driver.
    MissingLoad {
        /// Identifier of the missing load.
        load_id: String,
    },
    /// A load identifier appears more than once across all routes.
    DuplicateLoad {
        /// Identifier of the repeated load.
        load_id: String,
    },
    /// A route mentions a load that is not part of the input.
    UnknownLoad {
        /// Identifier found on a route.
        load_id: String,
    },
    /// A driver's accumulated drive time exceeds the budget.
    DriveTimeExceeded {
        /// Driver index.
        driver: usize,
        /// Accumulated drive time.
        drive_time: f64,
        /// Maximum drive time per driver.
        max_drive_time: f64,
        /// `true` when the driver carries a single load, i.e. the load's own
        /// trip does not fit in the budget.
        single_load: bool,
    },
    /// The drive time stored on a route does not match its loads.
    DriveTimeMismatch {
        /// Driver index.
        driver: usize,
        /// Drive time stored on the route.
        recorded: f64,
        /// Sum of the trip times of the route's loads.
        recomputed: f64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A partition of loads into driver routes.
///
/// Routes are stored in creation order: the route at position `i` belongs to
/// driver `i`, so enumeration is deterministic.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Solution;
///
/// let sol = Solution::new();
/// assert_eq!(sol.num_drivers(), 0);
/// assert_eq!(sol.total_drive_time(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Solution {
    routes: Vec<DriverRoute>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a finished route. Its driver index must equal the current
    /// number of routes.
    pub(crate) fn push_route(&mut self, route: DriverRoute) {
        debug_assert_eq!(route.driver(), self.routes.len());
        self.routes.push(route);
    }

    /// Routes in driver order.
    pub fn routes(&self) -> &[DriverRoute] {
        &self.routes
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.routes.len()
    }

    /// Total number of loads carried (across all routes).
    pub fn num_loads(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Sum of all drivers' accumulated drive time.
    pub fn total_drive_time(&self) -> f64 {
        self.routes.iter().map(|r| r.drive_time()).sum()
    }

    /// Iterates over `(driver index, load ids)` in driver order.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.routes.iter().map(|r| (r.driver(), r.load_ids()))
    }

    /// Returns the driver carrying the given load, if any.
    pub fn driver_of(&self, load_id: &str) -> Option<usize> {
        self.routes
            .iter()
            .find(|r| r.load_ids().iter().any(|id| id == load_id))
            .map(|r| r.driver())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_routes() -> Solution {
        let mut sol = Solution::new();
        sol.push_route(DriverRoute::new(0, vec!["1".into(), "2".into()], 300.0));
        sol.push_route(DriverRoute::new(1, vec!["3".into()], 650.0));
        sol
    }

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_drivers(), 0);
        assert_eq!(sol.num_loads(), 0);
        assert_eq!(sol.total_drive_time(), 0.0);
        assert_eq!(sol.assignments().count(), 0);
    }

    #[test]
    fn test_solution_with_routes() {
        let sol = two_routes();
        assert_eq!(sol.num_drivers(), 2);
        assert_eq!(sol.num_loads(), 3);
        assert!((sol.total_drive_time() - 950.0).abs() < 1e-10);
    }

    #[test]
    fn test_solution_assignments_in_driver_order() {
        let sol = two_routes();
        let drivers: Vec<usize> = sol.assignments().map(|(d, _)| d).collect();
        assert_eq!(drivers, vec![0, 1]);
    }

    #[test]
    fn test_solution_driver_of() {
        let sol = two_routes();
        assert_eq!(sol.driver_of("2"), Some(0));
        assert_eq!(sol.driver_of("3"), Some(1));
        assert_eq!(sol.driver_of("9"), None);
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::DriveTimeExceeded {
            driver: 0,
            drive_time: 800.0,
            max_drive_time: 720.0,
            single_load: true,
        });
        assert!(matches!(
            v.kind,
            ViolationType::DriveTimeExceeded {
                single_load: true,
                ..
            }
        ));
    }
}
