//! The contour offset engine: moves every edge of a closed outline a signed distance along its
//! normal and re-joins the moved edges into a new closed outline.
//!
//! Sign convention: a negative distance moves the contour inward (toward the region it encloses)
//! and a positive distance moves it outward. This holds for both windings, since the winding is
//! detected from the shoelace area before the normals are chosen.
//!
//! Corners are mitered: consecutive offset edges are extended or trimmed to their intersection.
//! For straight-sided sections this is the exact offset. Sharp convex corners offset outward will
//! grow long spikes; there is no miter limit.
//!
//! Where the offset distance exceeds the local size of the contour, an offset edge can end up
//! with its end points swapped (for instance, the upper and lower skins crossing inside a thin
//! trailing edge). Those edges are trimmed one at a time and their neighbors re-joined, and the
//! trimmed source edges are reported. If the trimming leaves fewer than three edges, or the final
//! contour is inverted or self-intersecting, the offset fails with a `DegenerateOffset` error.

use crate::common::points::dedup_closed;
use crate::common::{RELATIVE_TOL, Winding};
use crate::errors::{DegenerateKind, SectionError};
use crate::geom2::{Outline, Point2, Vector2, cross2, find_self_intersection, rot_cw};
use log::debug;

/// Below this magnitude the cross product of two unit edge directions is treated as parallel
const PARALLEL_TOL: f64 = 1.0e-12;

/// The result of an offset operation, along with the source edges that were trimmed because
/// they vanished at this offset distance.
#[derive(Debug, Clone)]
pub struct OffsetOutline {
    pub outline: Outline,
    pub distance: f64,

    /// Indices of the source outline edges which collapsed and were removed. Edge `i` is the
    /// edge starting at point `i` of the source outline.
    pub collapsed: Vec<usize>,
}

impl OffsetOutline {
    pub fn is_trimmed(&self) -> bool {
        !self.collapsed.is_empty()
    }
}

/// An infinite line parallel to one source edge, at the offset distance from it.
#[derive(Debug, Clone)]
struct OffsetLine {
    source: usize,
    base: Point2,
    dir: Vector2,
}

/// Offset a closed outline by a signed distance, negative being inward. See the module
/// documentation for the corner and degeneracy policies.
///
/// # Arguments
///
/// * `outline`: a simple closed outline in either winding
/// * `distance`: the signed offset distance, negative moves inward
///
/// returns: Result<Outline, SectionError>
///
/// # Examples
///
/// ```
/// use thinwall::{Outline, offset};
/// let square = Outline::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let inner = offset(&square, -0.1).unwrap();
/// assert!((inner.signed_area() - 0.64).abs() < 1e-12);
/// ```
pub fn offset(outline: &Outline, distance: f64) -> Result<Outline, SectionError> {
    offset_with_report(outline, distance).map(|r| r.outline)
}

/// Offset a closed outline by a signed distance, returning the offset outline together with the
/// list of source edges which were trimmed because they collapsed.
pub fn offset_with_report(
    outline: &Outline,
    distance: f64,
) -> Result<OffsetOutline, SectionError> {
    if !distance.is_finite() {
        return Err(SectionError::InvalidParameter {
            name: "offset distance",
            value: distance,
        });
    }

    if distance == 0.0 {
        return Ok(OffsetOutline {
            outline: outline.clone(),
            distance,
            collapsed: Vec::new(),
        });
    }

    let tol = outline.size() * RELATIVE_TOL;
    let (points, index) = dedup_closed(outline.points(), tol);
    let source = Outline::try_new(points)?;

    let signed_area = source.signed_area();
    let area_tol = outline.size().powi(2) * RELATIVE_TOL;
    if signed_area.abs() <= area_tol {
        return Err(SectionError::ZeroArea);
    }
    let winding = Winding::from_signed_area(signed_area);

    let mut lines = source
        .edges()
        .zip(index.iter())
        .map(|((a, b), i)| {
            let dir = (b - a).normalize();
            let outward = rot_cw(&dir) * winding.to_sign();
            OffsetLine {
                source: *i,
                base: a + outward * distance,
                dir,
            }
        })
        .collect::<Vec<_>>();

    let mut collapsed = Vec::new();
    let vertices = loop {
        let vertices = join_all(&lines, distance)?;
        let Some(k) = most_reversed(&lines, &vertices, tol) else {
            break vertices;
        };

        if lines.len() <= 3 {
            return Err(SectionError::DegenerateOffset {
                edge: lines[k].source,
                distance,
                kind: DegenerateKind::Collapsed,
            });
        }

        let removed = lines.remove(k);
        debug!(
            "offset {}: edge {} collapsed and was trimmed",
            distance, removed.source
        );
        collapsed.push(removed.source);
    };

    let result = Outline::try_new(vertices)?;
    let result_area = result.signed_area();
    if result_area * signed_area <= 0.0 || result_area.abs() <= area_tol {
        return Err(SectionError::DegenerateOffset {
            edge: lines[0].source,
            distance,
            kind: DegenerateKind::Inverted,
        });
    }

    if let Some((i, j)) = find_self_intersection(result.points()) {
        debug!(
            "offset {}: edges {} and {} intersect",
            distance, lines[i].source, lines[j].source
        );
        return Err(SectionError::DegenerateOffset {
            edge: lines[i].source,
            distance,
            kind: DegenerateKind::SelfIntersecting,
        });
    }

    Ok(OffsetOutline {
        outline: result,
        distance,
        collapsed,
    })
}

/// Computes the corner point at the start of every offset line, which is the intersection of the
/// line with the one before it.
fn join_all(lines: &[OffsetLine], distance: f64) -> Result<Vec<Point2>, SectionError> {
    let n = lines.len();
    (0..n)
        .map(|k| join(&lines[(k + n - 1) % n], &lines[k], distance))
        .collect()
}

fn join(prev: &OffsetLine, next: &OffsetLine, distance: f64) -> Result<Point2, SectionError> {
    let denom = cross2(&prev.dir, &next.dir);
    if denom.abs() < PARALLEL_TOL {
        // Collinear edges continue straight through the shared corner; antiparallel edges have
        // no corner at all
        return if prev.dir.dot(&next.dir) > 0.0 {
            Ok(next.base)
        } else {
            Err(SectionError::DegenerateOffset {
                edge: next.source,
                distance,
                kind: DegenerateKind::ParallelJoin,
            })
        };
    }

    let t = cross2(&(next.base - prev.base), &next.dir) / denom;
    Ok(prev.base + prev.dir * t)
}

/// Finds the offset edge whose joined length along its own direction is the most negative,
/// considering only those at or below `tol`. Returns `None` if every edge still runs forward.
fn most_reversed(lines: &[OffsetLine], vertices: &[Point2], tol: f64) -> Option<usize> {
    let n = lines.len();
    (0..n)
        .map(|k| (k, (vertices[(k + 1) % n] - vertices[k]).dot(&lines[k].dir)))
        .filter(|(_, len)| *len <= tol)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(k, _)| k)
}
