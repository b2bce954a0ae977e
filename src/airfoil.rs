//! This module contains the sources of airfoil outlines for section analysis: a reader for Selig
//! format `.dat` files, a generator for NACA 4-digit sections, and the `Airfoil` structure which
//! pairs an outline with a name and provides the chord-relative operations used when sizing a
//! wing (scaling to a chord length and thinning a section).

pub mod naca;
pub mod selig;

use crate::errors::SectionError;
use crate::geom2::Outline;
use serde::Serialize;

pub use naca::Naca4Digit;
pub use selig::{parse_selig, read_selig};

/// A named airfoil outline. Outlines produced by this crate's readers and generators are in
/// Selig order with the leading edge at the origin and the chord along the x axis, so scaling
/// about the frame origin scales about the leading edge.
#[derive(Debug, Clone, Serialize)]
pub struct Airfoil {
    name: String,
    outline: Outline,
}

impl Airfoil {
    pub fn new(name: impl Into<String>, outline: Outline) -> Self {
        Self {
            name: name.into(),
            outline,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The extent of the outline along the x axis
    pub fn chord(&self) -> f64 {
        let b = self.outline.aabb();
        b.maxs.x - b.mins.x
    }

    /// The maximum thickness of the section measured perpendicular to the chord, taken as the
    /// extent of the outline along the y axis. On a cambered section this includes the camber,
    /// which is the dimension that sets the distance from the neutral axis to the skin.
    pub fn thickness(&self) -> f64 {
        let b = self.outline.aabb();
        b.maxs.y - b.mins.y
    }

    /// Returns a copy of the airfoil scaled uniformly about the frame origin, usually from a unit
    /// chord to a physical chord length. The chord must be positive and finite.
    pub fn scaled(&self, chord: f64) -> Result<Self, SectionError> {
        if !chord.is_finite() || chord <= 0.0 {
            return Err(SectionError::InvalidParameter {
                name: "chord",
                value: chord,
            });
        }

        Ok(Self {
            name: self.name.clone(),
            outline: self.outline.scaled(chord)?,
        })
    }

    /// Returns a thinner (or thicker) variant of the airfoil made by scaling the y coordinates
    /// by `factor`, keeping the chord. A factor of 0.67 produces the "67% thick" variant of a
    /// section.
    ///
    /// # Arguments
    ///
    /// * `factor`: the ratio of the new thickness to the current thickness, must be positive
    ///
    /// returns: Result<Airfoil, SectionError>
    pub fn thickness_scaled(&self, factor: f64) -> Result<Self, SectionError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(SectionError::InvalidParameter {
                name: "thickness scale",
                value: factor,
            });
        }

        Ok(Self {
            name: format!("{} ({:.0}% thick)", self.name, factor * 100.0),
            outline: self.outline.scaled_xy(1.0, factor)?,
        })
    }
}
