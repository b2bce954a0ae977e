//! The closed polygonal outline which every section calculation works on.

use crate::common::Winding;
use crate::errors::SectionError;
use crate::geom2::{Aabb2, Point2, Vector2};
use itertools::Itertools;
use serde::Serialize;

/// An ordered sequence of points describing a closed polygon. The last point is implicitly
/// connected back to the first, whether or not the two are equal. Airfoils are typically stored
/// in Selig order: trailing edge, upper surface, leading edge, lower surface, trailing edge.
///
/// An outline always has at least three points and only finite coordinates. Consecutive
/// duplicate points are allowed and simply form zero-length edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    points: Vec<Point2>,
}

impl Outline {
    /// Create an outline from a vector of points, checking the point count and that all of the
    /// coordinates are finite.
    ///
    /// # Arguments
    ///
    /// * `points`: the ordered points of the closed contour, in either winding direction
    ///
    /// returns: Result<Outline, SectionError>
    ///
    /// # Examples
    ///
    /// ```
    /// use thinwall::{Outline, Point2};
    /// let square = Outline::try_new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(1.0, 1.0),
    ///     Point2::new(0.0, 1.0),
    /// ]).unwrap();
    /// assert_eq!(square.signed_area(), 1.0);
    /// ```
    pub fn try_new(points: Vec<Point2>) -> Result<Self, SectionError> {
        if points.len() < 3 {
            return Err(SectionError::InsufficientPoints {
                count: points.len(),
            });
        }

        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(SectionError::NonFinitePoint { index });
        }

        Ok(Self { points })
    }

    /// Create an outline from a slice of (x, y) tuples.
    pub fn from_xy(xy: &[(f64, f64)]) -> Result<Self, SectionError> {
        Self::try_new(xy.iter().map(|(x, y)| Point2::new(*x, *y)).collect())
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over every edge of the closed contour as (start, end) pairs, including the
    /// closing edge from the last point back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        self.points.iter().circular_tuple_windows()
    }

    /// The shoelace area, positive for counter-clockwise outlines and negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            * 0.5
    }

    pub fn winding(&self) -> Winding {
        Winding::from_signed_area(self.signed_area())
    }

    pub fn aabb(&self) -> Aabb2 {
        let first = self.points[0];
        let (mins, maxs) = self
            .points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Aabb2::new(mins, maxs)
    }

    /// The length of the bounding box diagonal, used as the characteristic size of the outline
    /// when deciding geometric tolerances.
    pub fn size(&self) -> f64 {
        let aabb = self.aabb();
        (aabb.maxs - aabb.mins).norm()
    }

    /// Returns a copy scaled uniformly about the origin of the outline's frame. A factor which
    /// is not finite, or which pushes a coordinate out of range, fails with
    /// `SectionError::NonFinitePoint`.
    pub fn scaled(&self, factor: f64) -> Result<Self, SectionError> {
        self.scaled_xy(factor, factor)
    }

    /// Returns a copy scaled independently along each axis about the frame origin.
    pub fn scaled_xy(&self, sx: f64, sy: f64) -> Result<Self, SectionError> {
        Self::try_new(
            self.points
                .iter()
                .map(|p| Point2::new(p.x * sx, p.y * sy))
                .collect(),
        )
    }

    pub fn translated(&self, v: &Vector2) -> Result<Self, SectionError> {
        Self::try_new(self.points.iter().map(|p| p + v).collect())
    }

    /// Returns a copy traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}
