//! # u-dispatch
//!
//! Single-depot load dispatch: assigns point-to-point transport loads to
//! drivers under a per-driver drive-time budget, minimizing the number of
//! drivers plus the total time driven.
//!
//! Every driver leaves the depot, serves each of its loads as a separate
//! depot → pickup → dropoff → depot trip, and must stay within the budget.
//! Solutions are built with a greedy heuristic: loads are ordered by their
//! one-way distance from the depot and packed into drivers in that order.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, DriverRoute, Solution, DispatchConfig)
//! - [`distance`] — Euclidean distance
//! - [`ordering`] — Dispatch order of loads
//! - [`constructive`] — Greedy drive-time bin packing
//! - [`evaluation`] — Cost model and solution checks
//! - [`solver`] — Order, assign and score in one call
//! - [`io`] — Problem file reader and solution writers
//! - [`batch`] — Solving problem files and directories

pub mod batch;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod ordering;
pub mod solver;
