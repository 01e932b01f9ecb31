//! Driver routes.

use serde::Serialize;

/// The loads served by one driver, in the order they were accepted.
///
/// Every route starts and ends at the depot; each load is a separate
/// depot → pickup → dropoff → depot trip, so `drive_time` is the sum of the
/// trip times of its loads. Routes are produced by the assignment engine
/// and cannot be modified afterwards.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchConfig, Load, Point};
/// use u_dispatch::solver::solve;
///
/// let loads = vec![Load::new("1", Point::new(0.0, 10.0), Point::new(0.0, 20.0))];
/// let outcome = solve(&loads, &DispatchConfig::default());
/// let route = &outcome.solution.routes()[0];
/// assert_eq!(route.driver(), 0);
/// assert_eq!(route.load_ids(), ["1"]);
/// assert!((route.drive_time() - 40.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverRoute {
    driver: usize,
    load_ids: Vec<String>,
    drive_time: f64,
}

impl DriverRoute {
    pub(crate) fn new(driver: usize, load_ids: Vec<String>, drive_time: f64) -> Self {
        Self {
            driver,
            load_ids,
            drive_time,
        }
    }

    /// Driver index (position in the solution).
    pub fn driver(&self) -> usize {
        self.driver
    }

    /// Load identifiers in acceptance order.
    pub fn load_ids(&self) -> &[String] {
        &self.load_ids
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.load_ids.len()
    }

    /// Returns `true` if this route carries no loads.
    pub fn is_empty(&self) -> bool {
        self.load_ids.is_empty()
    }

    /// Accumulated drive time of this driver.
    pub fn drive_time(&self) -> f64 {
        self.drive_time
    }
}
