//! Pickup-to-dropoff transport loads.

use super::Point;
use serde::{Deserialize, Serialize};

/// A transport task: drive to `pickup`, carry the load to `dropoff`.
///
/// Identifiers are expected to be unique within one problem instance. The
/// solver relies on that but does not enforce it; see
/// [`check_solution`](crate::evaluation::check_solution) for detection.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new("1", Point::new(0.0, 10.0), Point::new(0.0, 30.0));
/// assert_eq!(load.id(), "1");
/// assert!((load.length() - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: String,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a load.
    pub fn new(id: impl Into<String>, pickup: Point, dropoff: Point) -> Self {
        Self {
            id: id.into(),
            pickup,
            dropoff,
        }
    }

    /// Load identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Where the load is picked up.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the load is dropped off.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Loaded distance from pickup to dropoff.
    pub fn length(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }
}
