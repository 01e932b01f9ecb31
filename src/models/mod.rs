//! Domain model types for load dispatch.
//!
//! Provides the core abstractions: points in the plane, pickup/dropoff loads,
//! driver routes as ordered sequences of accepted loads, the solution that
//! partitions loads across drivers, and the dispatch parameters shared by
//! every driver.

mod config;
mod load;
mod point;
mod route;
mod solution;

pub use config::{DispatchConfig, DEFAULT_FIXED_COST_PER_DRIVER, DEFAULT_MAX_DRIVE_TIME};
pub use load::Load;
pub use point::Point;
pub use route::DriverRoute;
pub use solution::{Solution, Violation, ViolationType};
