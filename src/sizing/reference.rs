use serde::{Deserialize, Serialize};

/// An existing aircraft used as a point of comparison for the sweep. Only the weight and the
/// wing's planform area and span are needed; everything else is derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceVehicle {
    pub name: String,

    /// Gross weight in newtons
    pub weight: f64,

    /// Wing planform area in m^2
    pub area: f64,

    /// Wing span in m
    pub span: f64,
}

impl ReferenceVehicle {
    pub fn new(name: impl Into<String>, weight: f64, area: f64, span: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            area,
            span,
        }
    }

    /// Wing loading W/S in N/m^2
    pub fn wing_loading(&self) -> f64 {
        self.weight / self.area
    }

    /// Mean chord S/b
    pub fn chord(&self) -> f64 {
        self.area / self.span
    }

    /// Aspect ratio b^2/S
    pub fn aspect_ratio(&self) -> f64 {
        self.span * self.span / self.area
    }

    pub fn is_valid(&self) -> bool {
        [self.weight, self.area, self.span]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}
