//! Euclidean distance.

use crate::models::Point;

/// Returns the straight-line distance between `a` and `b`.
///
/// Symmetric, non-negative, and zero iff the points coincide.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::distance;
/// use u_dispatch::models::Point;
///
/// let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_axis_aligned() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(0.0, 50.0)), 50.0);
        assert_eq!(distance(Point::new(-2.0, 3.0), Point::new(8.0, 3.0)), 10.0);
    }

    #[test]
    fn test_distance_same_point() {
        let p = Point::new(3.5, -1.25);
        assert_eq!(distance(p, p), 0.0);
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric_non_negative(
            ax in -1e4f64..1e4, ay in -1e4f64..1e4,
            bx in -1e4f64..1e4, by in -1e4f64..1e4,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            let d = distance(a, b);
            prop_assert!(d >= 0.0);
            prop_assert_eq!(d, distance(b, a));
        }

        #[test]
        fn prop_triangle_inequality(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
            cx in -1e3f64..1e3, cy in -1e3f64..1e3,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            let c = Point::new(cx, cy);
            prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-9);
        }
    }
}
