//! Generation of NACA 4-digit airfoil outlines.

use super::Airfoil;
use crate::errors::SectionError;
use crate::geom2::{Outline, Point2};
use std::f64::consts::PI;

/// A NACA 4-digit section of the form MPTT, where M is the maximum camber in percent of chord, P
/// is the location of the maximum camber in tenths of chord, and TT is the maximum thickness in
/// percent of chord. For example, a NACA 2412 has 2% camber at 40% of the chord and a maximum
/// thickness of 12% of the chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4Digit {
    m: f64,
    p: f64,
    t: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4-digit generator from fractional parameters.
    ///
    /// # Arguments
    ///
    /// * `max_camber`: the maximum camber as a fraction of chord, 0.02 on a NACA 2412
    /// * `max_camber_chord`: the location of the maximum camber as a fraction of chord, 0.4 on a
    ///   NACA 2412. Ignored when the section has no camber.
    /// * `t_max`: the maximum thickness as a fraction of chord, 0.12 on a NACA 2412
    ///
    /// returns: Result<Naca4Digit, SectionError>
    pub fn new(max_camber: f64, max_camber_chord: f64, t_max: f64) -> Result<Self, SectionError> {
        if !t_max.is_finite() || t_max <= 0.0 {
            return Err(SectionError::InvalidParameter {
                name: "max thickness",
                value: t_max,
            });
        }
        if !max_camber.is_finite() || max_camber < 0.0 {
            return Err(SectionError::InvalidParameter {
                name: "max camber",
                value: max_camber,
            });
        }
        if max_camber > 0.0 && !(max_camber_chord > 0.0 && max_camber_chord < 1.0) {
            return Err(SectionError::InvalidParameter {
                name: "max camber location",
                value: max_camber_chord,
            });
        }

        Ok(Self {
            m: max_camber,
            p: if max_camber > 0.0 { max_camber_chord } else { 0.0 },
            t: t_max,
        })
    }

    /// Create a generator from a four digit designation such as "2412" or "NACA 0012".
    pub fn from_code(code: &str) -> crate::Result<Self> {
        let digits = code
            .trim()
            .trim_start_matches("NACA")
            .trim_start_matches("naca")
            .trim();

        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("'{}' is not a NACA 4-digit designation", code).into());
        }

        let m = digits[0..1].parse::<f64>()? / 100.0;
        let p = digits[1..2].parse::<f64>()? / 10.0;
        let t = digits[2..4].parse::<f64>()? / 100.0;
        Ok(Self::new(m, p, t)?)
    }

    /// The four digit designation of the section
    pub fn designation(&self) -> String {
        format!(
            "{:.0}{:.0}{:02.0}",
            self.m * 100.0,
            self.p * 10.0,
            self.t * 100.0
        )
    }

    /// The height of the mean camber line at a fraction of the chord from 0.0 to 1.0
    pub fn camber_line(&self, x: f64) -> f64 {
        if self.m == 0.0 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2)) * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        }
    }

    /// The slope of the mean camber line at a fraction of the chord from 0.0 to 1.0
    pub fn camber_slope(&self, x: f64) -> f64 {
        if self.m == 0.0 {
            0.0
        } else if x < self.p {
            (2.0 * self.m / self.p.powi(2)) * (self.p - x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powi(2)) * (self.p - x)
        }
    }

    /// Half of the section thickness, measured perpendicular to the camber line, at a fraction of
    /// the chord. The standard polynomial leaves a small open trailing edge at x = 1.
    pub fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4))
    }

    /// The (upper, lower) surface points at a fraction of the chord
    fn surface_points(&self, x: f64) -> (Point2, Point2) {
        let yc = self.camber_line(x);
        let yt = self.half_thickness(x);
        let theta = self.camber_slope(x).atan();
        let (s, c) = theta.sin_cos();

        (
            Point2::new(x - yt * s, yc + yt * c),
            Point2::new(x + yt * s, yc - yt * c),
        )
    }

    /// Generates a unit chord outline in Selig order: from the upper trailing edge forward to the
    /// leading edge and back along the lower surface to the lower trailing edge, which is a
    /// counter-clockwise traversal. Stations are cosine spaced, so they cluster at both edges.
    /// The leading edge point is shared by both surfaces, giving `2 * points_per_surface - 1`
    /// points in total.
    ///
    /// # Arguments
    ///
    /// * `points_per_surface`: the number of stations along each surface, at least 2
    ///
    /// returns: Result<Outline, SectionError>
    pub fn outline(&self, points_per_surface: usize) -> Result<Outline, SectionError> {
        if points_per_surface < 2 {
            return Err(SectionError::InvalidParameter {
                name: "points per surface",
                value: points_per_surface as f64,
            });
        }

        let n = points_per_surface;
        let stations = (0..n)
            .map(|i| (1.0 - (PI * i as f64 / (n - 1) as f64).cos()) * 0.5)
            .map(|x| self.surface_points(x))
            .collect::<Vec<_>>();

        let upper = stations.iter().rev().map(|(u, _)| *u);
        let lower = stations.iter().skip(1).map(|(_, l)| *l);

        Outline::try_new(upper.chain(lower).collect())
    }

    /// Generates the unit chord outline as a named `Airfoil`
    pub fn airfoil(&self, points_per_surface: usize) -> Result<Airfoil, SectionError> {
        Ok(Airfoil::new(
            format!("NACA {}", self.designation()),
            self.outline(points_per_surface)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Winding;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn naca_0012_half_thickness(x: f64, e: f64) {
        let naca = Naca4Digit::from_code("0012").unwrap();
        assert_relative_eq!(naca.half_thickness(x), e, epsilon = 1e-3);
    }

    #[test_case(1.0000, 0.0013)]
    #[test_case(0.9000, 0.0208)]
    #[test_case(0.7000, 0.0518)]
    #[test_case(0.5000, 0.0724)]
    #[test_case(0.3000, 0.0788)]
    #[test_case(0.2000, 0.0726)]
    #[test_case(0.1000, 0.0563)]
    fn naca_2412_upper(x: f64, e: f64) {
        let naca = Naca4Digit::from_code("2412").unwrap();
        assert_relative_eq!(naca.half_thickness(x) + naca.camber_line(x), e, epsilon = 1e-3);
    }

    #[test_case("2412", 0.02, 0.4, 0.12)]
    #[test_case("NACA 4415", 0.04, 0.4, 0.15)]
    #[test_case("0009", 0.0, 0.0, 0.09)]
    fn parses_codes(code: &str, m: f64, p: f64, t: f64) {
        let naca = Naca4Digit::from_code(code).unwrap();
        assert_eq!(naca, Naca4Digit::new(m, p, t).unwrap());
    }

    #[test_case("241"; "too short")]
    #[test_case("24a2"; "not a digit")]
    #[test_case("2012"; "camber at the leading edge")]
    #[test_case(""; "empty")]
    fn rejects_codes(code: &str) {
        assert!(Naca4Digit::from_code(code).is_err());
    }

    #[test]
    fn designation_round_trips() {
        assert_eq!(Naca4Digit::from_code("4412").unwrap().designation(), "4412");
        assert_eq!(Naca4Digit::from_code("0006").unwrap().designation(), "0006");
    }

    #[test]
    fn outline_is_selig_ordered() {
        let n = 40;
        let o = Naca4Digit::from_code("4412").unwrap().outline(n).unwrap();
        assert_eq!(o.len(), 2 * n - 1);
        assert_eq!(o.winding(), Winding::Ccw);

        // Upper trailing edge first, leading edge in the middle, lower trailing edge last
        let p = o.points();
        assert_relative_eq!(p[0].x, 1.0, epsilon = 1e-3);
        assert_relative_eq!(p[n - 1], Point2::origin(), epsilon = 1e-12);
        assert_relative_eq!(p[2 * n - 2].x, 1.0, epsilon = 1e-3);
        assert!(p[0].y > p[2 * n - 2].y);
    }

    #[test]
    fn symmetric_section_area() {
        // The enclosed area of a 4-digit section is close to 0.685 t c^2
        let o = Naca4Digit::from_code("0012").unwrap().outline(200).unwrap();
        assert_relative_eq!(o.signed_area(), 0.685 * 0.12, max_relative = 5e-3);
    }

    #[test]
    fn too_few_points() {
        let naca = Naca4Digit::from_code("0012").unwrap();
        assert!(matches!(
            naca.outline(1),
            Err(SectionError::InvalidParameter { .. })
        ));
    }
}
