mod discrete_domain;
mod interval;
pub mod points;
mod winding;

pub use discrete_domain::{DiscreteDomain, linear_space};
pub use interval::Interval;
pub use winding::Winding;

/// Tolerance used to decide that two coordinates describe the same point, relative to the
/// characteristic size of the geometry being processed.
pub const RELATIVE_TOL: f64 = 1.0e-12;
