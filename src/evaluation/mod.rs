//! Solution scoring and verification.
//!
//! - [`total_cost`] / [`CostBreakdown`] — fixed driver cost plus driven time
//! - [`check_solution`] — partition and drive-time budget checks

mod cost;
mod evaluator;

pub use cost::{total_cost, CostBreakdown};
pub use evaluator::check_solution;
