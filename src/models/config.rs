//! Dispatch parameters: depot location, drive-time budget and driver cost.

use super::Point;
use serde::{Deserialize, Serialize};

/// Maximum drive time per driver (12 hours in minutes).
pub const DEFAULT_MAX_DRIVE_TIME: f64 = 720.0;

/// Fixed cost charged for every driver used.
pub const DEFAULT_FIXED_COST_PER_DRIVER: f64 = 500.0;

/// Parameters shared by every driver of a dispatch problem.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use u_dispatch::models::DispatchConfig;
///
/// let config: DispatchConfig = serde_json::from_str(r#"{"maxDriveTime": 600}"#).unwrap();
/// assert_eq!(config.max_drive_time(), 600.0);
/// assert_eq!(config.fixed_cost_per_driver(), 500.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatchConfig {
    depot: Point,
    max_drive_time: f64,
    fixed_cost_per_driver: f64,
}

impl DispatchConfig {
    /// Creates the default configuration: depot at the origin, a budget of
    /// 720 and a fixed cost of 500 per driver.
    pub fn new() -> Self {
        Self {
            depot: Point::origin(),
            max_drive_time: DEFAULT_MAX_DRIVE_TIME,
            fixed_cost_per_driver: DEFAULT_FIXED_COST_PER_DRIVER,
        }
    }

    /// Sets the depot every route starts and ends at.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the drive-time budget per driver.
    pub fn with_max_drive_time(mut self, max: f64) -> Self {
        self.max_drive_time = max;
        self
    }

    /// Sets the fixed cost of using a driver.
    pub fn with_fixed_cost_per_driver(mut self, cost: f64) -> Self {
        self.fixed_cost_per_driver = cost;
        self
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Drive-time budget per driver.
    pub fn max_drive_time(&self) -> f64 {
        self.max_drive_time
    }

    /// Fixed cost per driver used.
    pub fn fixed_cost_per_driver(&self) -> f64 {
        self.fixed_cost_per_driver
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
