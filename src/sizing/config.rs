//! Study configuration, loaded from JSON.

use super::{ReferenceVehicle, STANDARD_GRAVITY};
use crate::airfoil::{Airfoil, Naca4Digit, read_selig};
use crate::common::Interval;
use crate::errors::SectionError;
use crate::section::ThinWallOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Gross mass in kg
    pub mass: f64,

    /// Wing chord in m, held constant across the sweep
    pub chord: f64,

    /// Maximum lift coefficient, for the stall speed
    pub cl_max: f64,
}

impl VehicleConfig {
    /// Gross weight in newtons
    pub fn weight(&self) -> f64 {
        self.mass * STANDARD_GRAVITY
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Name of the reference vehicle whose wing loading the sweep is built around
    pub reference: String,

    /// The sweep runs from `lower` to `upper` times the reference wing loading
    pub factors: Interval,

    /// Number of wing loadings evaluated
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialConfig {
    /// Young's modulus in Pa
    pub modulus: f64,

    /// Ultimate tensile strength in Pa
    pub ultimate_strength: f64,

    /// Density in kg/m^3
    pub density: f64,
}

fn default_cp_fraction() -> f64 {
    0.4
}

fn default_mass_scaling() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// Limit load factor, in g
    pub load_factor: f64,

    /// Spanwise location of the center of pressure as a fraction of the semispan
    #[serde(default = "default_cp_fraction")]
    pub cp_span_fraction: f64,

    /// Multiplier on the skin mass, to account for spars, ribs and fittings
    #[serde(default = "default_mass_scaling")]
    pub mass_scaling: f64,
}

fn default_header_lines() -> usize {
    1
}

fn default_points_per_surface() -> usize {
    100
}

/// Where a section's airfoil outline comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AirfoilSource {
    /// A Selig format `.dat` file. Relative paths are resolved against the directory of the
    /// configuration file when it is loaded with `StudyConfig::load`.
    File {
        path: PathBuf,

        #[serde(default = "default_header_lines")]
        header_lines: usize,
    },

    /// A generated NACA 4-digit section
    Naca {
        code: String,

        #[serde(default = "default_points_per_surface")]
        points_per_surface: usize,
    },
}

impl AirfoilSource {
    /// Reads or generates the unit chord airfoil
    pub fn load(&self) -> crate::Result<Airfoil> {
        match self {
            AirfoilSource::File { path, header_lines } => read_selig(path, *header_lines),
            AirfoilSource::Naca {
                code,
                points_per_surface,
            } => Ok(Naca4Digit::from_code(code)?.airfoil(*points_per_surface)?),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub description: String,
    pub airfoil: AirfoilSource,

    /// Optional thickness ratio applied to the airfoil, 0.67 for a "67% thick" variant
    #[serde(default)]
    pub thickness_scale: Option<f64>,

    /// Skin thickness in m
    pub wall_thickness: f64,

    #[serde(default)]
    pub options: ThinWallOptions,
}

impl SectionConfig {
    /// Loads the airfoil and applies the thickness scale, if any. The result is still at unit
    /// chord.
    pub fn airfoil(&self) -> crate::Result<Airfoil> {
        let airfoil = self.airfoil.load()?;
        match self.thickness_scale {
            Some(f) => Ok(airfoil.thickness_scaled(f)?),
            None => Ok(airfoil),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    pub vehicle: VehicleConfig,
    pub sweep: SweepConfig,
    pub reference_vehicles: Vec<ReferenceVehicle>,
    pub material: MaterialConfig,
    pub load_case: LoadCase,
    pub sections: Vec<SectionConfig>,
}

fn positive(name: &'static str, value: f64) -> Result<(), SectionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SectionError::InvalidParameter { name, value })
    }
}

impl StudyConfig {
    /// Parses and validates a configuration from JSON text
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let config: StudyConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file, resolving relative airfoil paths against the directory the
    /// file is in.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&text)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for section in config.sections.iter_mut() {
            if let AirfoilSource::File { path, .. } = &mut section.airfoil {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }

        Ok(config)
    }

    /// Checks that every physical quantity is in range and that the sweep's reference vehicle
    /// exists.
    pub fn validate(&self) -> crate::Result<()> {
        positive("vehicle mass", self.vehicle.mass)?;
        positive("vehicle chord", self.vehicle.chord)?;
        positive("maximum lift coefficient", self.vehicle.cl_max)?;

        self.sweep.factors.validate()?;
        positive("sweep lower factor", self.sweep.factors.lower)?;
        if self.sweep.count < 2 {
            return Err(SectionError::InvalidParameter {
                name: "sweep count",
                value: self.sweep.count as f64,
            }
            .into());
        }

        positive("elastic modulus", self.material.modulus)?;
        positive("ultimate strength", self.material.ultimate_strength)?;
        positive("density", self.material.density)?;

        positive("load factor", self.load_case.load_factor)?;
        positive("center of pressure fraction", self.load_case.cp_span_fraction)?;
        positive("mass scaling", self.load_case.mass_scaling)?;

        if let Some(v) = self.reference_vehicles.iter().find(|v| !v.is_valid()) {
            return Err(
                format!("reference vehicle '{}' has a non-positive dimension", v.name).into(),
            );
        }
        self.reference()?;

        Ok(())
    }

    /// The reference vehicle named by the sweep
    pub fn reference(&self) -> crate::Result<&ReferenceVehicle> {
        self.reference_vehicles
            .iter()
            .find(|v| v.name == self.sweep.reference)
            .ok_or_else(|| {
                format!(
                    "sweep reference vehicle '{}' is not in the reference list",
                    self.sweep.reference
                )
                .into()
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::section::{Accumulation, CentroidPolicy, EdgeQuadrature};
    use approx::assert_relative_eq;

    pub(crate) const SAMPLE: &str = r#"{
        "vehicle": { "mass": 5.5, "chord": 0.125, "cl_max": 1.45 },
        "sweep": { "reference": "AeroScout", "factors": { "lower": 0.8, "upper": 2.3 }, "count": 12 },
        "reference_vehicles": [
            { "name": "AeroScout", "weight": 15.13, "area": 0.21677376, "span": 1.0668 },
            { "name": "Talon GT", "weight": 12.745, "area": 0.14, "span": 1.0 }
        ],
        "material": { "modulus": 2.316634e11, "ultimate_strength": 4.2058e9, "density": 1670.0 },
        "load_case": { "load_factor": 9.0, "mass_scaling": 2.0 },
        "sections": [
            {
                "description": "Single ply, NACA 4412",
                "airfoil": { "type": "naca", "code": "4412", "points_per_surface": 80 },
                "wall_thickness": 0.0003048
            },
            {
                "description": "Single ply, NACA 4412 67% thick",
                "airfoil": { "type": "naca", "code": "4412", "points_per_surface": 80 },
                "thickness_scale": 0.67,
                "wall_thickness": 0.0003048,
                "options": { "centroid": "Composite", "integration": { "quadrature": "Midpoint" } }
            }
        ]
    }"#;

    #[test]
    fn sample_parses_with_defaults() {
        let c = StudyConfig::from_json(SAMPLE).unwrap();
        assert_relative_eq!(c.vehicle.weight(), 5.5 * 9.807, epsilon = 1e-12);
        assert_relative_eq!(c.load_case.cp_span_fraction, 0.4);
        assert_eq!(c.reference().unwrap().name, "AeroScout");
        assert_eq!(c.sections.len(), 2);
        assert_eq!(c.sections[0].options, ThinWallOptions::default());
        assert_eq!(c.sections[1].options.centroid, CentroidPolicy::Composite);
        assert_eq!(
            c.sections[1].options.integration.quadrature,
            EdgeQuadrature::Midpoint
        );
        assert_eq!(
            c.sections[1].options.integration.accumulation,
            Accumulation::Signed
        );
    }

    #[test]
    fn section_airfoil_is_thinned() {
        let c = StudyConfig::from_json(SAMPLE).unwrap();
        let full = c.sections[0].airfoil().unwrap();
        let thin = c.sections[1].airfoil().unwrap();
        assert_relative_eq!(thin.thickness(), full.thickness() * 0.67, epsilon = 1e-12);
    }

    #[test]
    fn missing_reference_is_rejected() {
        let text = SAMPLE.replace(r#""reference": "AeroScout""#, r#""reference": "Cub""#);
        let e = StudyConfig::from_json(&text).unwrap_err();
        assert!(e.to_string().contains("Cub"));
    }

    #[test]
    fn non_physical_values_are_rejected() {
        let text = SAMPLE.replace(r#""mass": 5.5"#, r#""mass": -1.0"#);
        let e = StudyConfig::from_json(&text).unwrap_err();
        assert_eq!(
            e.downcast_ref::<SectionError>(),
            Some(&SectionError::InvalidParameter {
                name: "vehicle mass",
                value: -1.0
            })
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StudyConfig::from_json("{ \"vehicle\": 3 }").is_err());
    }

    #[test]
    fn relative_airfoil_paths_follow_the_config() {
        let dir = std::env::temp_dir().join("thinwall_config_paths_test");
        std::fs::create_dir_all(&dir).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["sections"][0]["airfoil"] =
            serde_json::json!({ "type": "file", "path": "clarky.dat" });
        let path = dir.join("study.json");
        std::fs::write(&path, value.to_string()).unwrap();

        let c = StudyConfig::load(&path).unwrap();
        match &c.sections[0].airfoil {
            AirfoilSource::File { path, header_lines } => {
                assert_eq!(path, &dir.join("clarky.dat"));
                assert_eq!(*header_lines, 1);
            }
            other => panic!("unexpected source {:?}", other),
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
