//! Ordering policy applied to loads before assignment.
//!
//! - [`ordering_key`] — one-way cost of reaching and completing a load
//! - [`compare_loads`] — total order: key ascending, then identifier
//! - [`sort_loads`] / [`sorted`] — apply the order to a load set

mod policy;

pub use policy::{compare_loads, ordering_key, sort_loads, sorted};
