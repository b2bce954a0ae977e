//! This module contains the section property integrator, which computes the area, centroid and
//! second moments of area of a closed outline, and the thin-wall composition which estimates
//! the properties of a constant-thickness shell by differencing an outline with its inward
//! offset.

mod integrate;
mod thin_wall;

use crate::Point2;
use serde::{Deserialize, Serialize};

pub use integrate::{Accumulation, EdgeQuadrature, IntegrationOptions, integrate, integrate_with};
pub use thin_wall::{
    CentroidPolicy, ThinWallOptions, ThinWallSection, thin_wall_properties, thin_wall_section,
};

/// Area properties of a plane section. The second moments are taken about the axes of the frame
/// the section was computed in, *not* about the centroid, unless the record was produced by
/// `about_centroid`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// The enclosed area, never negative
    pub area: f64,

    pub centroid: Point2,

    /// Second moment of area about the x axis, the integral of y^2 dA
    pub ixx: f64,

    /// Second moment of area about the y axis, the integral of x^2 dA
    pub iyy: f64,

    /// Product of inertia, the integral of x y dA
    pub ixy: f64,
}

impl SectionProperties {
    /// Transfers the second moments to axes through the centroid, parallel to the frame axes,
    /// using the parallel axis theorem.
    ///
    /// # Examples
    ///
    /// ```
    /// use thinwall::{Outline, integrate};
    /// let square = Outline::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
    /// let c = integrate(&square).unwrap().about_centroid();
    /// assert!((c.ixx - 1.0 / 12.0).abs() < 1e-12);
    /// ```
    pub fn about_centroid(&self) -> Self {
        let c = self.centroid;
        Self {
            area: self.area,
            centroid: c,
            ixx: self.ixx - self.area * c.y * c.y,
            iyy: self.iyy - self.area * c.x * c.x,
            ixy: self.ixy - self.area * c.x * c.y,
        }
    }

    /// The polar moment of area about the frame origin, Ixx + Iyy. For a closed thin-walled
    /// section this is the estimate used in place of the torsion constant.
    pub fn polar(&self) -> f64 {
        self.ixx + self.iyy
    }

    pub fn radius_of_gyration_x(&self) -> f64 {
        (self.ixx / self.area).sqrt()
    }

    pub fn radius_of_gyration_y(&self) -> f64 {
        (self.iyy / self.area).sqrt()
    }
}
