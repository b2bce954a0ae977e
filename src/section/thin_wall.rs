//! Thin-wall shell estimate: the properties of a constant-thickness skin found by subtracting
//! the section enclosed by the inner mold line (IML) from the section enclosed by the outer mold
//! line (OML).

use super::{IntegrationOptions, SectionProperties, integrate_with};
use crate::Point2;
use crate::errors::SectionError;
use crate::geom2::{Outline, offset_with_report};
use log::debug;
use serde::{Deserialize, Serialize};

/// How the centroid of the shell is estimated from the OML and IML sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CentroidPolicy {
    /// The average of the OML and IML centroids. This is an approximation which ignores that the
    /// two areas differ, kept so that earlier sizing estimates can be reproduced.
    #[default]
    AverageOmlIml,

    /// The true composite centroid, the difference of the first moments divided by the
    /// difference of the areas.
    Composite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThinWallOptions {
    #[serde(default)]
    pub integration: IntegrationOptions,

    #[serde(default)]
    pub centroid: CentroidPolicy,
}

/// The full breakdown of a thin-wall estimate, for diagnostics.
#[derive(Debug, Clone)]
pub struct ThinWallSection {
    /// The scaled outer outline
    pub oml_outline: Outline,

    /// The inward offset of the scaled outline by the wall thickness
    pub iml_outline: Outline,

    /// Source edges of the scaled outline which collapsed during the offset and were trimmed
    pub collapsed: Vec<usize>,

    pub oml: SectionProperties,
    pub iml: SectionProperties,

    /// The shell estimate. Second moments are about the frame origin shared by OML and IML.
    pub shell: SectionProperties,
}

/// Estimates the section properties of a constant-thickness shell with default options: the
/// outline is scaled by `scale` about its frame origin, offset inward by `thickness`, and the
/// properties of the inner section are subtracted from those of the outer section. The shell
/// centroid is the average of the two centroids and the moments stay about the frame origin.
///
/// # Arguments
///
/// * `outline`: the section outline, usually a unit-chord airfoil
/// * `scale`: the factor applied to the outline, usually the chord length
/// * `thickness`: the wall thickness, in the units of the scaled outline
///
/// returns: Result<SectionProperties, SectionError>
pub fn thin_wall_properties(
    outline: &Outline,
    scale: f64,
    thickness: f64,
) -> Result<SectionProperties, SectionError> {
    thin_wall_section(outline, scale, thickness, &ThinWallOptions::default()).map(|s| s.shell)
}

/// Estimates the section properties of a constant-thickness shell, returning the OML, IML and
/// shell records along with the outlines used.
pub fn thin_wall_section(
    outline: &Outline,
    scale: f64,
    thickness: f64,
    options: &ThinWallOptions,
) -> Result<ThinWallSection, SectionError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(SectionError::InvalidParameter {
            name: "scale",
            value: scale,
        });
    }
    if !thickness.is_finite() || thickness < 0.0 {
        return Err(SectionError::InvalidParameter {
            name: "thickness",
            value: thickness,
        });
    }

    let oml_outline = outline.scaled(scale)?;
    let inner = offset_with_report(&oml_outline, -thickness)?;
    if inner.is_trimmed() {
        debug!(
            "wall thickness {} trimmed {} collapsed edges from the inner outline",
            thickness,
            inner.collapsed.len()
        );
    }

    let oml = integrate_with(&oml_outline, &options.integration)?;
    let iml = integrate_with(&inner.outline, &options.integration)?;
    let shell = difference(&oml, &iml, options.centroid);

    Ok(ThinWallSection {
        oml_outline,
        iml_outline: inner.outline,
        collapsed: inner.collapsed,
        oml,
        iml,
        shell,
    })
}

fn difference(
    oml: &SectionProperties,
    iml: &SectionProperties,
    policy: CentroidPolicy,
) -> SectionProperties {
    let area = oml.area - iml.area;
    let centroid = match policy {
        CentroidPolicy::AverageOmlIml => {
            Point2::from((oml.centroid.coords + iml.centroid.coords) * 0.5)
        }
        CentroidPolicy::Composite if area > 0.0 => Point2::from(
            (oml.centroid.coords * oml.area - iml.centroid.coords * iml.area) / area,
        ),
        // A zero thickness wall has no area of its own, so fall back to the outline centroid
        CentroidPolicy::Composite => oml.centroid,
    };

    SectionProperties {
        area,
        centroid,
        ixx: oml.ixx - iml.ixx,
        iyy: oml.iyy - iml.iyy,
        ixy: oml.ixy - iml.ixy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca::Naca4Digit;
    use crate::integrate;
    use approx::assert_relative_eq;

    fn centered_square(side: f64) -> Outline {
        let h = side / 2.0;
        Outline::from_xy(&[(-h, -h), (h, -h), (h, h), (-h, h)]).unwrap()
    }

    #[test]
    fn square_tube_matches_closed_form() {
        // A 2 x 2 box with 0.1 walls, centered on the origin
        let shell = thin_wall_properties(&centered_square(1.0), 2.0, 0.1).unwrap();
        let (b_o, b_i) = (2.0_f64, 1.8_f64);
        assert_relative_eq!(shell.area, b_o * b_o - b_i * b_i, epsilon = 1e-12);
        assert_relative_eq!(shell.ixx, (b_o.powi(4) - b_i.powi(4)) / 12.0, epsilon = 1e-12);
        assert_relative_eq!(shell.iyy, (b_o.powi(4) - b_i.powi(4)) / 12.0, epsilon = 1e-12);
        assert_relative_eq!(shell.ixy, 0.0, epsilon = 1e-12);
        assert_relative_eq!(shell.centroid, Point2::origin(), epsilon = 1e-12);
    }

    #[test]
    fn zero_thickness_has_no_area() {
        let shell = thin_wall_properties(&centered_square(1.0), 1.0, 0.0).unwrap();
        assert_relative_eq!(shell.area, 0.0);
        assert_relative_eq!(shell.ixx, 0.0);
    }

    #[test]
    fn averaged_and_composite_centroids_differ_off_center() {
        // Unit square in the first quadrant: the OML and IML centroids coincide, so both
        // policies agree
        let s = Outline::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let avg = thin_wall_section(&s, 1.0, 0.1, &ThinWallOptions::default()).unwrap();
        let comp_opts = ThinWallOptions {
            centroid: CentroidPolicy::Composite,
            ..Default::default()
        };
        let comp = thin_wall_section(&s, 1.0, 0.1, &comp_opts).unwrap();
        assert_relative_eq!(avg.shell.centroid, comp.shell.centroid, epsilon = 1e-12);

        // On a cambered airfoil the two centroids differ, and so do the policies
        let af = Naca4Digit::from_code("4412").unwrap().outline(80).unwrap();
        let avg = thin_wall_section(&af, 1.0, 0.01, &ThinWallOptions::default()).unwrap();
        let comp = thin_wall_section(&af, 1.0, 0.01, &comp_opts).unwrap();
        let expected = Point2::from(
            (avg.oml.centroid.coords * avg.oml.area - avg.iml.centroid.coords * avg.iml.area)
                / avg.shell.area,
        );
        assert_relative_eq!(comp.shell.centroid, expected, epsilon = 1e-12);
        assert_relative_eq!(
            avg.shell.centroid,
            Point2::from((avg.oml.centroid.coords + avg.iml.centroid.coords) * 0.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn naca_4412_section_end_to_end() {
        // 7 inch chord and a single 0.012 inch ply, in meters
        let af = Naca4Digit::from_code("4412").unwrap().outline(60).unwrap();
        let scale = 0.1778;
        let thickness = 0.0003048;

        let solid = integrate(&af.scaled(scale).unwrap()).unwrap();
        let shell = thin_wall_properties(&af, scale, thickness).unwrap();

        assert!(shell.area > 0.0);
        assert!(shell.area < solid.area);
        assert!(shell.ixx >= 0.0);
        assert!(shell.ixx < solid.ixx);
        assert!(shell.iyy >= 0.0 && shell.iyy < solid.iyy);

        // The skin area is roughly perimeter times thickness
        let perimeter = af
            .scaled(scale)
            .unwrap()
            .edges()
            .map(|(a, b)| (b - a).norm())
            .sum::<f64>();
        assert_relative_eq!(shell.area, perimeter * thickness, max_relative = 0.05);
    }

    #[test]
    fn invalid_parameters() {
        let s = centered_square(1.0);
        assert!(matches!(
            thin_wall_properties(&s, 0.0, 0.1),
            Err(SectionError::InvalidParameter { name: "scale", .. })
        ));
        assert!(matches!(
            thin_wall_properties(&s, 1.0, -0.1),
            Err(SectionError::InvalidParameter {
                name: "thickness",
                ..
            })
        ));
    }

    #[test]
    fn wall_thicker_than_section_fails() {
        let e = thin_wall_properties(&centered_square(1.0), 1.0, 0.6).unwrap_err();
        assert!(matches!(e, SectionError::DegenerateOffset { .. }));
    }
}
