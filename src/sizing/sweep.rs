//! Evaluation of the wing loading sweep.

use super::{
    CantileverBeam, ReferenceVehicle, SEA_LEVEL_DENSITY, SectionConfig, StudyConfig,
    bending_stress, root_bending_moment,
};
use crate::common::DiscreteDomain;
use crate::errors::SectionError;
use crate::section::{SectionProperties, thin_wall_section};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

/// The wing geometry at every wing loading of the sweep, for the fixed vehicle weight and chord
#[derive(Debug, Clone, Serialize)]
pub struct WingSeries {
    /// Wing loading W/S, N/m^2
    pub wing_loading: DiscreteDomain,

    /// Wing area, m^2
    pub area: Vec<f64>,

    /// Equivalent stall speed, m/s
    pub stall_speed: Vec<f64>,

    /// Span, m
    pub span: Vec<f64>,

    pub aspect_ratio: Vec<f64>,
}

/// A reference vehicle's derived numbers, for placing it on the sweep's plots
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceMarker {
    pub name: String,
    pub wing_loading: f64,
    pub area: f64,
    pub span: f64,
    pub chord: f64,
    pub aspect_ratio: f64,

    /// Whether the vehicle's wing loading falls inside the swept range
    pub in_sweep: bool,
}

/// The structural estimates of one skin section across the sweep. Every vector is indexed like
/// the wing series.
#[derive(Debug, Clone, Serialize)]
pub struct SectionSeries {
    pub airfoil: String,

    /// Thin-wall shell properties of the scaled section, about the chord line origin
    pub shell: SectionProperties,

    /// The shell properties transferred to the shell centroid
    pub centroidal: SectionProperties,

    /// Centroidal polar moment of the shell, m^4, the torsion constant estimate
    pub polar_moment: f64,

    /// Centroidal radii of gyration about the x and y axes, m
    pub radius_of_gyration_x: f64,
    pub radius_of_gyration_y: f64,

    /// Number of outline edges trimmed from the inner skin line where the section is thinner than
    /// two walls
    pub trimmed_edges: usize,

    /// Section depth at the chord used for the skin stress, m
    pub depth: f64,

    /// Semispan mass, kg
    pub semispan_mass: Vec<f64>,

    /// First and second bending mode frequencies, Hz
    pub first_mode: Vec<f64>,
    pub second_mode: Vec<f64>,

    /// First mode with half of the bending stiffness, Hz
    pub first_mode_half_stiffness: Vec<f64>,

    /// First mode with the semispan mass lumped at the tip, Hz
    pub first_mode_point_mass: Vec<f64>,

    /// Root bending moment, N m
    pub root_moment: Vec<f64>,

    /// Root bending stress at the skin, Pa
    pub bending_stress: Vec<f64>,

    /// Ultimate strength over bending stress, minus one
    pub margin: Vec<f64>,
}

/// The outcome of one section: its series, or the reason it could not be evaluated
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SectionSeries>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    pub mass: f64,
    pub weight: f64,
    pub chord: f64,
    pub reference: String,
    pub wing: WingSeries,
    pub references: Vec<ReferenceMarker>,
    pub sections: Vec<SectionReport>,
}

/// Builds the wing loading domain around the reference vehicle and derives the wing geometry at
/// each point: S = W / (W/S), V = sqrt(2 W / (rho S CLmax)), b = S / c and AR = b / c.
pub fn wing_series(
    config: &StudyConfig,
    reference: &ReferenceVehicle,
) -> Result<WingSeries, SectionError> {
    let weight = config.vehicle.weight();
    let chord = config.vehicle.chord;
    let cl_max = config.vehicle.cl_max;

    let wing_loading = config
        .sweep
        .factors
        .scaled(reference.wing_loading())
        .linear_space(config.sweep.count)?;

    let area = wing_loading.map(|ws| weight / ws);
    let stall_speed = area
        .iter()
        .map(|s| (2.0 * weight / (SEA_LEVEL_DENSITY * s * cl_max)).sqrt())
        .collect();
    let span = area.iter().map(|s| s / chord).collect::<Vec<_>>();
    let aspect_ratio = span.iter().map(|b| b / chord).collect();

    Ok(WingSeries {
        wing_loading,
        area,
        stall_speed,
        span,
        aspect_ratio,
    })
}

/// Computes the thin-wall properties of one section at the vehicle chord and the beam estimates
/// at every span of the wing series.
pub fn evaluate_section(
    section: &SectionConfig,
    config: &StudyConfig,
    wing: &WingSeries,
) -> crate::Result<SectionSeries> {
    let chord = config.vehicle.chord;
    let weight = config.vehicle.weight();
    let material = &config.material;
    let load = &config.load_case;

    let airfoil = section.airfoil()?;
    let walls = thin_wall_section(
        airfoil.outline(),
        chord,
        section.wall_thickness,
        &section.options,
    )?;
    let shell = walls.shell;
    let centroidal = shell.about_centroid();
    if centroidal.ixx <= 0.0 {
        return Err(SectionError::InvalidParameter {
            name: "centroidal ixx",
            value: centroidal.ixx,
        }
        .into());
    }

    let depth = airfoil.scaled(chord)?.thickness();
    let stiffness = material.modulus * centroidal.ixx;
    debug!(
        "{}: shell area {:.4e} m^2, Ixx {:.4e} m^4, {} trimmed edges",
        section.description,
        shell.area,
        centroidal.ixx,
        walls.collapsed.len()
    );

    let n = wing.span.len();
    let mut series = SectionSeries {
        airfoil: airfoil.name().to_string(),
        shell,
        centroidal,
        polar_moment: centroidal.polar(),
        radius_of_gyration_x: centroidal.radius_of_gyration_x(),
        radius_of_gyration_y: centroidal.radius_of_gyration_y(),
        trimmed_edges: walls.collapsed.len(),
        depth,
        semispan_mass: Vec::with_capacity(n),
        first_mode: Vec::with_capacity(n),
        second_mode: Vec::with_capacity(n),
        first_mode_half_stiffness: Vec::with_capacity(n),
        first_mode_point_mass: Vec::with_capacity(n),
        root_moment: Vec::with_capacity(n),
        bending_stress: Vec::with_capacity(n),
        margin: Vec::with_capacity(n),
    };

    for b in wing.span.iter() {
        let semispan = b * 0.5;
        let mass = load.mass_scaling * semispan * shell.area * material.density;
        let beam = CantileverBeam::new(semispan, stiffness, mass / semispan)?;

        let moment = root_bending_moment(semispan, load.cp_span_fraction, load.load_factor, weight);
        let stress = bending_stress(moment, depth * 0.5, centroidal.ixx);

        series.semispan_mass.push(mass);
        series.first_mode.push(beam.first_mode());
        series.second_mode.push(beam.second_mode());
        series
            .first_mode_half_stiffness
            .push(beam.half_stiffness().first_mode());
        series.first_mode_point_mass.push(beam.point_mass_frequency());
        series.root_moment.push(moment);
        series.bending_stress.push(stress);
        series.margin.push(material.ultimate_strength / stress - 1.0);
    }

    Ok(series)
}

/// Runs the full study. Sections are evaluated in parallel; a section which fails is reported
/// with its error and does not stop the others.
pub fn run_study(config: &StudyConfig) -> crate::Result<StudyReport> {
    let reference = config.reference()?;
    let wing = wing_series(config, reference)?;
    info!(
        "sweeping W/S from {:.1} to {:.1} N/m^2 in {} steps around {}",
        wing.wing_loading.first().unwrap_or_default(),
        wing.wing_loading.last().unwrap_or_default(),
        wing.wing_loading.len(),
        reference.name
    );

    let swept = config.sweep.factors.scaled(reference.wing_loading());
    let references = config
        .reference_vehicles
        .iter()
        .map(|v| ReferenceMarker {
            name: v.name.clone(),
            wing_loading: v.wing_loading(),
            area: v.area,
            span: v.span,
            chord: v.chord(),
            aspect_ratio: v.aspect_ratio(),
            in_sweep: swept.contains(v.wing_loading()),
        })
        .collect();

    let sections = config
        .sections
        .par_iter()
        .map(|section| match evaluate_section(section, config, &wing) {
            Ok(series) => SectionReport {
                description: section.description.clone(),
                series: Some(series),
                error: None,
            },
            Err(e) => {
                warn!("section '{}' failed: {}", section.description, e);
                SectionReport {
                    description: section.description.clone(),
                    series: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect::<Vec<_>>();

    let failed = sections.iter().filter(|s| s.error.is_some()).count();
    info!(
        "evaluated {} sections, {} failed",
        sections.len(),
        failed
    );

    Ok(StudyReport {
        mass: config.vehicle.mass,
        weight: config.vehicle.weight(),
        chord: config.vehicle.chord,
        reference: reference.name.clone(),
        wing,
        references,
        sections,
    })
}
