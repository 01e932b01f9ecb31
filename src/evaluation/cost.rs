//! Cost model.

use serde::Serialize;

use crate::models::{DispatchConfig, Solution};

/// The two terms of a solution's cost.
///
/// `total = fixed_cost + drive_time`, where `fixed_cost` is the per-driver
/// cost times the number of drivers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Number of drivers used.
    pub num_drivers: usize,
    /// Fixed cost of all drivers.
    pub fixed_cost: f64,
    /// Sum of accumulated drive times.
    pub drive_time: f64,
    /// Total cost.
    pub total: f64,
}

impl CostBreakdown {
    /// Scores a solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::evaluation::CostBreakdown;
    /// use u_dispatch::models::{DispatchConfig, Load, Point};
    /// use u_dispatch::solver::solve;
    ///
    /// let loads = vec![
    ///     Load::new("B", Point::new(0.0, 0.0), Point::new(0.0, 50.0)),
    ///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
    /// ];
    /// let config = DispatchConfig::default();
    /// let cost = CostBreakdown::of(&solve(&loads, &config).solution, &config);
    /// assert_eq!(cost.num_drivers, 1);
    /// assert!((cost.total - 800.0).abs() < 1e-10);
    /// ```
    pub fn of(solution: &Solution, config: &DispatchConfig) -> Self {
        let num_drivers = solution.num_drivers();
        let fixed_cost = config.fixed_cost_per_driver() * num_drivers as f64;
        let drive_time = solution.total_drive_time();
        Self {
            num_drivers,
            fixed_cost,
            drive_time,
            total: fixed_cost + drive_time,
        }
    }
}

/// Total cost of a solution: `fixed_cost_per_driver × drivers + Σ drive time`.
///
/// Depends only on the partition, not on the order of loads within a route.
pub fn total_cost(solution: &Solution, config: &DispatchConfig) -> f64 {
    CostBreakdown::of(solution, config).total
}
