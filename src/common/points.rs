//! Common operations on f64 points in D-dimensional space.

use parry2d_f64::na::Point;

/// Returns the distance between two points in D-dimensional space.
///
/// # Examples
///
/// ```
/// use thinwall::common::points::dist;
/// use thinwall::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 2.0);
/// assert_eq!(dist(&a, &b), 2.0);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// Returns the midpoint between two points in D-dimensional space.
///
/// # Examples
///
/// ```
/// use thinwall::common::points::mid_point;
/// use thinwall::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 4.0);
/// assert_eq!(mid_point(&a, &b), Point2::new(2.0, 3.0));
/// ```
pub fn mid_point<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> Point<f64, D> {
    b + (a - b) * 0.5
}

/// Removes consecutive points which are within `tol` of each other, treating the sequence as a
/// closed loop so that a last point repeating the first is also removed. Returns the kept points
/// along with the index of each one in the original slice.
///
/// # Arguments
///
/// * `points`: the closed sequence of points
/// * `tol`: points closer than this to the previously kept point are dropped
///
/// returns: (Vec<Point<f64, D>>, Vec<usize>)
pub fn dedup_closed<const D: usize>(
    points: &[Point<f64, D>],
    tol: f64,
) -> (Vec<Point<f64, D>>, Vec<usize>) {
    let mut kept: Vec<Point<f64, D>> = Vec::with_capacity(points.len());
    let mut index = Vec::with_capacity(points.len());

    for (i, p) in points.iter().enumerate() {
        if let Some(last) = kept.last() {
            if dist(last, p) <= tol {
                continue;
            }
        }
        kept.push(*p);
        index.push(i);
    }

    while kept.len() > 1 && dist(&kept[0], &kept[kept.len() - 1]) <= tol {
        kept.pop();
        index.pop();
    }

    (kept, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;

    #[test]
    fn dedup_removes_repeats_and_closure() {
        let points = vec![
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        let (kept, index) = dedup_closed(&points, 1e-9);
        assert_eq!(kept.len(), 3);
        assert_eq!(index, vec![0, 2, 3]);
    }

    #[test]
    fn dedup_keeps_distinct() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let (kept, index) = dedup_closed(&points, 1e-9);
        assert_eq!(kept, points);
        assert_eq!(index, vec![0, 1, 2]);
    }
}
