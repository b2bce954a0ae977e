//! Orientation of a closed contour in the plane.

use serde::{Deserialize, Serialize};

/// The direction in which a closed contour is traversed. For a counter-clockwise contour the
/// enclosed region is on the left of every edge; for a clockwise contour it is on the right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    Cw,
    Ccw,
}

impl Winding {
    /// Returns +1.0 for counter-clockwise and -1.0 for clockwise, which is the sign of the
    /// shoelace area of a contour with this winding.
    pub fn to_sign(self) -> f64 {
        match self {
            Winding::Cw => -1.0,
            Winding::Ccw => 1.0,
        }
    }

    /// Classify a signed (shoelace) area. A zero area is reported as counter-clockwise; callers
    /// that care about empty contours must check the area magnitude themselves.
    pub fn from_signed_area(area: f64) -> Self {
        if area < 0.0 { Winding::Cw } else { Winding::Ccw }
    }
}
