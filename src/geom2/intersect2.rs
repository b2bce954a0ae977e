//! Segment intersection tests used to validate offset contours.

use crate::geom2::{Point2, Segment2, cross2};
use parry2d_f64::bounding_volume::BoundingVolume;

fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    cross2(&(b - a), &(c - a))
}

/// Assuming `p` is collinear with the segment `a`-`b`, check whether it lies within the segment's
/// bounding box (and so on the segment).
fn within(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Returns true if the closed segments `a0`-`a1` and `b0`-`b1` share at least one point,
/// including touching end points and collinear overlap.
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within(b0, b1, a0))
        || (d2 == 0.0 && within(b0, b1, a1))
        || (d3 == 0.0 && within(a0, a1, b0))
        || (d4 == 0.0 && within(a0, a1, b1))
}

/// Searches a closed polygon for a pair of non-adjacent edges which intersect. Edge `i` runs
/// from point `i` to point `i + 1` (wrapping). Returns the first offending pair of edge indices
/// found, or `None` if the polygon is simple.
///
/// This is a direct O(n^2) search with bounding box rejection, which is adequate for airfoil
/// outlines of a few hundred points.
pub fn find_self_intersection(points: &[Point2]) -> Option<(usize, usize)> {
    let n = points.len();
    if n < 4 {
        return None;
    }

    let segments = (0..n)
        .map(|i| Segment2::new(points[i], points[(i + 1) % n]))
        .collect::<Vec<_>>();
    let boxes = segments.iter().map(|s| s.local_aabb()).collect::<Vec<_>>();

    for i in 0..n {
        for j in (i + 2)..n {
            // The first and last edges share point 0
            if i == 0 && j == n - 1 {
                continue;
            }

            if !boxes[i].intersects(&boxes[j]) {
                continue;
            }

            let (a, b) = (&segments[i], &segments[j]);
            if segments_intersect(&a.a, &a.b, &b.a, &b.b) {
                return Some((i, j));
            }
        }
    }

    None
}
