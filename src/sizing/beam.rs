//! Uniform cantilever beam formulas for the semispan.

use crate::errors::SectionError;
use serde::Serialize;
use std::f64::consts::PI;

/// Eigenvalue (beta_n L) of the first bending mode of a uniform cantilever
pub const FIRST_MODE_BETA_L: f64 = 0.597 * PI;

/// Eigenvalue (beta_n L) of the second bending mode of a uniform cantilever
pub const SECOND_MODE_BETA_L: f64 = 1.49 * PI;

/// A uniform cantilever of length `length`, bending stiffness `stiffness` (E I) and mass per
/// unit length `mass_per_length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CantileverBeam {
    pub length: f64,
    pub stiffness: f64,
    pub mass_per_length: f64,
}

impl CantileverBeam {
    pub fn new(length: f64, stiffness: f64, mass_per_length: f64) -> Result<Self, SectionError> {
        for (name, value) in [
            ("beam length", length),
            ("bending stiffness", stiffness),
            ("mass per length", mass_per_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SectionError::InvalidParameter { name, value });
            }
        }

        Ok(Self {
            length,
            stiffness,
            mass_per_length,
        })
    }

    /// Total mass of the beam
    pub fn mass(&self) -> f64 {
        self.mass_per_length * self.length
    }

    /// Natural frequency in Hz of the bending mode with eigenvalue `beta_l`,
    /// f = (beta L)^2 / (2 pi L^2) * sqrt(E I / mu)
    pub fn mode_frequency(&self, beta_l: f64) -> f64 {
        beta_l.powi(2) / (2.0 * PI * self.length.powi(2))
            * (self.stiffness / self.mass_per_length).sqrt()
    }

    pub fn first_mode(&self) -> f64 {
        self.mode_frequency(FIRST_MODE_BETA_L)
    }

    pub fn second_mode(&self) -> f64 {
        self.mode_frequency(SECOND_MODE_BETA_L)
    }

    /// The first mode estimate which lumps the whole beam mass at the tip of a massless beam,
    /// f = 1 / (2 pi) * sqrt(3 E I / (m L^3))
    pub fn point_mass_frequency(&self) -> f64 {
        (3.0 * self.stiffness / (self.mass() * self.length.powi(3))).sqrt() / (2.0 * PI)
    }

    /// The same beam with half of the bending stiffness, a rough allowance for root flexibility
    pub fn half_stiffness(&self) -> Self {
        Self {
            stiffness: self.stiffness * 0.5,
            ..*self
        }
    }
}

/// Root bending moment of a semispan `semispan` long carrying half of `weight` times the load
/// factor, with the center of pressure at `cp_fraction` of the semispan.
pub fn root_bending_moment(semispan: f64, cp_fraction: f64, load_factor: f64, weight: f64) -> f64 {
    semispan * cp_fraction * load_factor * weight * 0.5
}

/// Bending stress at a distance `half_depth` from the neutral axis, sigma = M c / I
pub fn bending_stress(moment: f64, half_depth: f64, ixx: f64) -> f64 {
    moment * half_depth / ixx
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_mode_matches_textbook_coefficient() {
        // omega_1 = 3.516 sqrt(E I / (mu L^4))
        let beam = CantileverBeam::new(1.5, 120.0, 0.3).unwrap();
        let expected = 3.516 / (2.0 * PI) * (120.0 / (0.3 * 1.5_f64.powi(4))).sqrt();
        assert_relative_eq!(beam.first_mode(), expected, max_relative = 1e-3);
    }

    #[test]
    fn second_mode_matches_textbook_coefficient() {
        // omega_2 = 22.03 sqrt(E I / (mu L^4))
        let beam = CantileverBeam::new(1.5, 120.0, 0.3).unwrap();
        let expected = 22.03 / (2.0 * PI) * (120.0 / (0.3 * 1.5_f64.powi(4))).sqrt();
        assert_relative_eq!(beam.second_mode(), expected, max_relative = 1e-2);
    }

    #[test]
    fn point_mass_hand_calculation() {
        // E I = 100, m = 2, L = 1: f = sqrt(150) / (2 pi)
        let beam = CantileverBeam::new(1.0, 100.0, 2.0).unwrap();
        assert_relative_eq!(beam.mass(), 2.0);
        assert_relative_eq!(beam.point_mass_frequency(), 1.949_242, epsilon = 1e-6);
    }

    #[test]
    fn half_stiffness_scales_by_root_two() {
        let beam = CantileverBeam::new(0.8, 50.0, 0.1).unwrap();
        assert_relative_eq!(
            beam.half_stiffness().first_mode(),
            beam.first_mode() / 2.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn root_moment_and_stress() {
        // 1.5 m semispan, cp at 40%, 9 g, 53.94 N
        let m = root_bending_moment(1.5, 0.4, 9.0, 53.94);
        assert_relative_eq!(m, 145.638, epsilon = 1e-9);
        assert_relative_eq!(bending_stress(m, 0.01, 2.0e-8), 7.2819e7, max_relative = 1e-9);
    }

    #[test]
    fn invalid_beam() {
        assert!(matches!(
            CantileverBeam::new(1.0, 0.0, 1.0),
            Err(SectionError::InvalidParameter {
                name: "bending stiffness",
                ..
            })
        ));
    }
}
