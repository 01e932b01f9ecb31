//! Depot-proximity ordering.
//!
//! # Algorithm
//!
//! Each load is keyed by `d(depot, pickup) + d(pickup, dropoff)`: the time
//! needed to reach it and complete it, without the empty return leg. Loads
//! close to the depot and short in extent come first. Equal keys are broken
//! by comparing identifiers, so the result does not depend on input order.
//!
//! The return leg is left out on purpose; the assignment engine charges the
//! full round trip against the budget. The two formulas must stay distinct.
//!
//! # Complexity
//!
//! O(n log n) where n = number of loads.

use std::cmp::Ordering;

use crate::distance::distance;
use crate::models::{Load, Point};

/// Sort key of a load: depot → pickup → dropoff, return leg excluded.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::ordering::ordering_key;
///
/// let load = Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 100.0));
/// assert_eq!(ordering_key(Point::origin(), &load), 100.0);
/// ```
pub fn ordering_key(depot: Point, load: &Load) -> f64 {
    distance(depot, load.pickup()) + distance(load.pickup(), load.dropoff())
}

/// Compares two loads by [`ordering_key`], then by identifier.
///
/// Keys are compared with [`f64::total_cmp`], so the order is total even for
/// inputs the parser would never produce.
pub fn compare_loads(depot: Point, a: &Load, b: &Load) -> Ordering {
    compare_keyed((ordering_key(depot, a), a), (ordering_key(depot, b), b))
}

fn compare_keyed((ka, a): (f64, &Load), (kb, b): (f64, &Load)) -> Ordering {
    ka.total_cmp(&kb).then_with(|| a.id().cmp(b.id()))
}

/// Sorts loads in place into dispatch order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::ordering::sort_loads;
///
/// let mut loads = vec![
///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
///     Load::new("B", Point::new(0.0, 0.0), Point::new(0.0, 50.0)),
/// ];
/// sort_loads(Point::origin(), &mut loads);
/// assert_eq!(loads[0].id(), "B");
/// assert_eq!(loads[1].id(), "A");
/// ```
pub fn sort_loads(depot: Point, loads: &mut [Load]) {
    // Keys are computed once per load instead of once per comparison.
    let mut keyed: Vec<(f64, Load)> = loads
        .iter()
        .map(|load| (ordering_key(depot, load), load.clone()))
        .collect();
    keyed.sort_by(|(ka, a), (kb, b)| compare_keyed((*ka, a), (*kb, b)));
    for (slot, (_, load)) in loads.iter_mut().zip(keyed) {
        *slot = load;
    }
}

/// Returns the loads in dispatch order without touching the input.
pub fn sorted(depot: Point, loads: &[Load]) -> Vec<&Load> {
    let mut keyed: Vec<(f64, &Load)> = loads
        .iter()
        .map(|load| (ordering_key(depot, load), load))
        .collect();
    keyed.sort_by(|&(ka, a), &(kb, b)| compare_keyed((ka, a), (kb, b)));
    keyed.into_iter().map(|(_, load)| load).collect()
}
