//! Constructive heuristics for building dispatch solutions.
//!
//! - [`greedy_assign`] — sequential drive-time bin packing over ordered loads, O(n)
//! - [`GreedyAssigner`] — the same procedure as an explicit, steppable state machine

mod greedy;

pub use greedy::{greedy_assign, trip_time, GreedyAssigner, OpenDriver, Transition};
