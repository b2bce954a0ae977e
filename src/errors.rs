use std::error::Error;
use std::fmt::{Display, Formatter};

/// The ways in which an offset contour can fail to be a usable simple polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// Fewer than three offset edges survived collapse trimming
    Collapsed,

    /// Two neighboring offset edges are antiparallel and have no intersection to join at
    ParallelJoin,

    /// The joined offset polygon reversed its winding or encloses no area
    Inverted,

    /// Two non-adjacent edges of the offset polygon cross each other
    SelfIntersecting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionError {
    /// An outline needs at least three distinct points to enclose anything
    InsufficientPoints { count: usize },

    /// A point with a NaN or infinite coordinate was found at this index
    NonFinitePoint { index: usize },

    /// The requested offset could not produce a simple polygon. `edge` is the index (in the
    /// source outline) of the edge where the problem was detected.
    DegenerateOffset {
        edge: usize,
        distance: f64,
        kind: DegenerateKind,
    },

    /// The outline encloses no area, so the centroid is undefined
    ZeroArea,

    /// The integrated area or moments overflowed to a non-finite value
    NonFiniteProperties,

    /// A scale, thickness or sweep parameter outside of its physical range
    InvalidParameter { name: &'static str, value: f64 },

    /// A data line in an airfoil file was not exactly two floating point values. `line` is
    /// 1-based and counts header lines.
    MalformedAirfoilFile { line: usize, content: String },
}

impl Display for SectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionError::InsufficientPoints { count } => {
                write!(f, "outline has {} distinct points, at least 3 are required", count)
            }
            SectionError::NonFinitePoint { index } => {
                write!(f, "outline point {} has a non-finite coordinate", index)
            }
            SectionError::DegenerateOffset {
                edge,
                distance,
                kind,
            } => write!(
                f,
                "offset by {} is degenerate ({:?}) at source edge {}",
                distance, kind, edge
            ),
            SectionError::ZeroArea => write!(f, "outline encloses no area"),
            SectionError::NonFiniteProperties => {
                write!(f, "section properties are not finite, the outline is out of range")
            }
            SectionError::InvalidParameter { name, value } => {
                write!(f, "invalid value {} for parameter '{}'", value, name)
            }
            SectionError::MalformedAirfoilFile { line, content } => write!(
                f,
                "airfoil data line {} is not two numbers: '{}'",
                line, content
            ),
        }
    }
}

impl Error for SectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_file_message_names_line() {
        let e = SectionError::MalformedAirfoilFile {
            line: 7,
            content: "0.5 abc".to_string(),
        };
        let text = e.to_string();
        assert!(text.contains("line 7"));
        assert!(text.contains("0.5 abc"));
    }

    #[test]
    fn boxes_into_dyn_error() {
        let boxed: Box<dyn Error> = Box::new(SectionError::ZeroArea);
        assert_eq!(
            boxed.downcast_ref::<SectionError>(),
            Some(&SectionError::ZeroArea)
        );
    }
}
