//! Thin-wall section properties of airfoil outlines, and the wing sizing sweep built on them.
//!
//! The core of the crate is three operations on closed 2D outlines: `offset` moves a contour a
//! signed distance along its normals, `integrate` computes the area, centroid and second moments
//! of the enclosed section, and `thin_wall_properties` combines the two to estimate the
//! properties of a constant-thickness skin.

use std::error::Error;

pub mod airfoil;
pub mod common;
pub mod errors;
pub mod geom2;
pub mod section;
pub mod sizing;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub use errors::{DegenerateKind, SectionError};
pub use geom2::{
    Aabb2, OffsetOutline, Outline, Point2, Segment2, Vector2, offset, offset_with_report,
};
pub use section::{
    Accumulation, CentroidPolicy, EdgeQuadrature, IntegrationOptions, SectionProperties,
    ThinWallOptions, ThinWallSection, integrate, integrate_with, thin_wall_properties,
    thin_wall_section,
};
