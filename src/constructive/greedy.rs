//! Greedy drive-time bin packing.
//!
//! # Algorithm
//!
//! Loads are consumed in dispatch order (see [`crate::ordering`]). Each load
//! costs its full round trip through the depot. The open driver keeps
//! accepting loads while its accumulated drive time stays within the budget;
//! the first load that does not fit closes the driver and opens the next one
//! with that load alone. Decisions are final: no load is ever moved.
//!
//! A load whose round trip alone exceeds the budget still gets a driver of
//! its own. That driver ends up over budget; nothing splits or rejects it.
//! When such a load comes first, the empty driver 0 is closed before it like
//! any other driver that cannot take the load, so the solution starts with
//! an empty route that is still charged the fixed cost.
//!
//! # Complexity
//!
//! O(n) where n = number of loads.

use tracing::{debug, warn};

use crate::distance::distance;
use crate::models::{DispatchConfig, DriverRoute, Load, Point, Solution};

/// Drive time charged for serving a load: depot → pickup → dropoff → depot.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::trip_time;
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 100.0));
/// assert_eq!(trip_time(Point::origin(), &load), 200.0);
/// ```
pub fn trip_time(depot: Point, load: &Load) -> f64 {
    distance(depot, load.pickup())
        + distance(load.pickup(), load.dropoff())
        + distance(load.dropoff(), depot)
}

/// The driver currently accepting loads.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenDriver {
    index: usize,
    load_ids: Vec<String>,
    drive_time: f64,
}

impl OpenDriver {
    /// Opens an empty driver with zero drive time.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            load_ids: Vec::new(),
            drive_time: 0.0,
        }
    }

    /// Driver index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Loads accepted so far.
    pub fn load_ids(&self) -> &[String] {
        &self.load_ids
    }

    /// Accumulated drive time.
    pub fn drive_time(&self) -> f64 {
        self.drive_time
    }

    /// Returns `true` if no load has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.load_ids.is_empty()
    }

    /// Returns `true` if a trip of `trip` more time stays within `max_drive_time`.
    pub fn fits(&self, trip: f64, max_drive_time: f64) -> bool {
        self.drive_time + trip <= max_drive_time
    }

    /// Appends a load and charges its trip time.
    pub fn accept(&mut self, load_id: &str, trip: f64) {
        self.load_ids.push(load_id.to_string());
        self.drive_time += trip;
    }

    /// Freezes this driver into a route.
    pub fn finish(self) -> DriverRoute {
        DriverRoute::new(self.index, self.load_ids, self.drive_time)
    }
}

/// Outcome of offering one load to a [`GreedyAssigner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The load was appended to the open driver.
    SameDriver {
        /// Driver index.
        driver: usize,
    },
    /// The open driver was closed and the load opened a new one.
    NewDriver {
        /// Index of the closed driver.
        closed: usize,
        /// Index of the driver now carrying the load.
        opened: usize,
    },
}

/// Step-by-step form of [`greedy_assign`].
///
/// Holds the finished routes and the open driver. Loads must be pushed in
/// dispatch order.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::{GreedyAssigner, Transition};
/// use u_dispatch::models::{DispatchConfig, Load, Point};
///
/// let config = DispatchConfig::default();
/// let mut assigner = GreedyAssigner::new(&config);
/// // Round trip of 400 each; two do not fit in 720.
/// let a = Load::new("a", Point::new(0.0, 100.0), Point::new(0.0, 200.0));
/// let b = Load::new("b", Point::new(0.0, -100.0), Point::new(0.0, -200.0));
/// assert_eq!(assigner.push(&a), Transition::SameDriver { driver: 0 });
/// assert_eq!(assigner.push(&b), Transition::NewDriver { closed: 0, opened: 1 });
/// let solution = assigner.finish();
/// assert_eq!(solution.num_drivers(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyAssigner {
    depot: Point,
    max_drive_time: f64,
    solution: Solution,
    open: OpenDriver,
}

impl GreedyAssigner {
    /// Creates an assigner with no finished routes and an empty driver 0.
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            depot: config.depot(),
            max_drive_time: config.max_drive_time(),
            solution: Solution::new(),
            open: OpenDriver::new(0),
        }
    }

    /// The driver currently accepting loads.
    pub fn open_driver(&self) -> &OpenDriver {
        &self.open
    }

    /// Routes closed so far.
    pub fn finished(&self) -> &Solution {
        &self.solution
    }

    /// Assigns one load.
    pub fn push(&mut self, load: &Load) -> Transition {
        let trip = trip_time(self.depot, load);
        if trip > self.max_drive_time {
            warn!(
                load = load.id(),
                trip,
                max_drive_time = self.max_drive_time,
                "load exceeds the drive-time budget on its own"
            );
        }

        if self.open.fits(trip, self.max_drive_time) {
            self.open.accept(load.id(), trip);
            return Transition::SameDriver {
                driver: self.open.index(),
            };
        }

        let closed = self.open.index();
        let opened = closed + 1;
        let route = std::mem::replace(&mut self.open, OpenDriver::new(opened)).finish();
        debug!(
            driver = closed,
            loads = route.len(),
            drive_time = route.drive_time(),
            "driver closed"
        );
        self.solution.push_route(route);
        self.open.accept(load.id(), trip);

        Transition::NewDriver { closed, opened }
    }

    /// Closes the open driver, if it carries anything, and returns the solution.
    pub fn finish(mut self) -> Solution {
        if !self.open.is_empty() {
            let route = self.open.finish();
            debug!(
                driver = route.driver(),
                loads = route.len(),
                drive_time = route.drive_time(),
                "driver closed"
            );
            self.solution.push_route(route);
        }
        self.solution
    }
}

/// Partitions loads into driver routes under the drive-time budget.
///
/// `loads` must already be in dispatch order; [`crate::solver::solve`] sorts
/// before calling this.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::greedy_assign;
/// use u_dispatch::models::{DispatchConfig, Load, Point};
///
/// let loads = vec![
///     Load::new("B", Point::new(0.0, 0.0), Point::new(0.0, 50.0)),
///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
/// ];
/// let solution = greedy_assign(&loads, &DispatchConfig::default());
/// assert_eq!(solution.num_drivers(), 1);
/// assert_eq!(solution.routes()[0].load_ids(), ["B", "A"]);
/// assert!((solution.total_drive_time() - 300.0).abs() < 1e-10);
/// ```
pub fn greedy_assign<'a, I>(loads: I, config: &DispatchConfig) -> Solution
where
    I: IntoIterator<Item = &'a Load>,
{
    let mut assigner = GreedyAssigner::new(config);
    for load in loads {
        assigner.push(load);
    }
    assigner.finish()
}
