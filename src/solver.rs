//! End-to-end dispatch: order, assign, score.

use serde::Serialize;
use tracing::{debug, info};

use crate::constructive::greedy_assign;
use crate::evaluation::CostBreakdown;
use crate::models::{DispatchConfig, Load, Solution};
use crate::ordering::sorted;

/// A solution together with its cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchOutcome {
    /// Driver routes.
    pub solution: Solution,
    /// Cost of `solution`.
    pub cost: CostBreakdown,
}

impl DispatchOutcome {
    /// Total cost of the solution.
    pub fn total_cost(&self) -> f64 {
        self.cost.total
    }
}

/// Solves a dispatch problem.
///
/// Sorts the loads with the depot-proximity ordering, packs them into
/// drivers greedily under the drive-time budget, and scores the result. The
/// input slice is left as is; the outcome does not depend on its order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchConfig, Load, Point};
/// use u_dispatch::solver::solve;
///
/// let loads = vec![
///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
///     Load::new("B", Point::new(0.0, 0.0), Point::new(0.0, 50.0)),
/// ];
/// let outcome = solve(&loads, &DispatchConfig::default());
/// assert_eq!(outcome.solution.routes()[0].load_ids(), ["B", "A"]);
/// assert!((outcome.total_cost() - 800.0).abs() < 1e-10);
/// ```
pub fn solve(loads: &[Load], config: &DispatchConfig) -> DispatchOutcome {
    debug!(loads = loads.len(), "ordering loads");
    let order = sorted(config.depot(), loads);
    let solution = greedy_assign(order, config);
    let cost = CostBreakdown::of(&solution, config);
    info!(
        loads = loads.len(),
        drivers = cost.num_drivers,
        drive_time = cost.drive_time,
        total_cost = cost.total,
        "dispatch solved"
    );
    DispatchOutcome { solution, cost }
}
