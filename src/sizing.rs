//! The wing sizing sweep: for a vehicle of fixed mass and chord, the wing loading is swept across
//! a range around a reference vehicle, and at every point the wing geometry, the first bending
//! modes of the semispan and the root bending stress are estimated for each candidate skin
//! section.
//!
//! The structural estimates treat the semispan as a uniform cantilever beam whose section is the
//! thin-wall shell of the airfoil. They are first-order sizing numbers, not a structural
//! analysis.

mod beam;
mod config;
mod reference;
mod sweep;

pub use beam::{
    CantileverBeam, FIRST_MODE_BETA_L, SECOND_MODE_BETA_L, bending_stress, root_bending_moment,
};
pub use config::{
    AirfoilSource, LoadCase, MaterialConfig, SectionConfig, StudyConfig, SweepConfig,
    VehicleConfig,
};
pub use reference::ReferenceVehicle;
pub use sweep::{
    ReferenceMarker, SectionReport, SectionSeries, StudyReport, WingSeries, evaluate_section,
    run_study, wing_series,
};

/// Sea level air density in kg/m^3, used for the equivalent stall speed
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Standard gravity in m/s^2
pub const STANDARD_GRAVITY: f64 = 9.807;
