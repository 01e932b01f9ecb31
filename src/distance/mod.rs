//! Distance between locations.
//!
//! Travel time equals Euclidean distance (unit speed), so the same function
//! serves both.

mod euclidean;

pub use euclidean::distance;
