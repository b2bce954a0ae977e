//! Reading of airfoil coordinates in the Selig `.dat` format: an optional set of header lines
//! (usually just the section name) followed by one "x y" pair per line, running from the
//! trailing edge over the upper surface to the leading edge and back along the lower surface.

use super::Airfoil;
use crate::errors::SectionError;
use crate::geom2::{Outline, Point2};
use std::path::Path;

/// Parses the text of a Selig format file into an outline. The first `header_lines` lines are
/// skipped and blank lines are ignored. Every other line must contain exactly two finite numbers.
///
/// # Arguments
///
/// * `text`: the full contents of the file
/// * `header_lines`: the number of lines to skip before the coordinates begin
///
/// returns: Result<Outline, SectionError>
///
/// # Examples
///
/// ```
/// use thinwall::airfoil::parse_selig;
/// let text = "triangle\n1.0 0.0\n0.0 0.0\n0.0 1.0\n";
/// let outline = parse_selig(text, 1).unwrap();
/// assert_eq!(outline.len(), 3);
/// ```
pub fn parse_selig(text: &str, header_lines: usize) -> Result<Outline, SectionError> {
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate().skip(header_lines) {
        if line.trim().is_empty() {
            continue;
        }

        let malformed = || SectionError::MalformedAirfoilFile {
            line: i + 1,
            content: line.trim().to_string(),
        };

        let values = line
            .split_whitespace()
            .map(|s| s.parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match values.as_slice() {
            [x, y] if x.is_finite() && y.is_finite() => points.push(Point2::new(*x, *y)),
            _ => return Err(malformed()),
        }
    }

    Outline::try_new(points)
}

/// Reads a Selig format `.dat` file from disk. The airfoil is named after the first header line
/// when there is one, otherwise after the file stem.
pub fn read_selig(path: &Path, header_lines: usize) -> crate::Result<Airfoil> {
    let text = std::fs::read_to_string(path)?;
    let outline = parse_selig(&text, header_lines)?;

    let name = text
        .lines()
        .take(header_lines)
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
        .or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_default();

    Ok(Airfoil::new(name, outline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    const CLARK_Y_COARSE: &str = "CLARK Y AIRFOIL (coarse)
 1.0000  0.0006
 0.7000  0.0700
 0.3000  0.1150
 0.1000  0.0800
 0.0000  0.0300

 0.1000 -0.0200
 0.3000 -0.0250
 0.7000 -0.0120
 1.0000 -0.0006
";

    #[test]
    fn parses_with_header_and_blank_lines() {
        let o = parse_selig(CLARK_Y_COARSE, 1).unwrap();
        assert_eq!(o.len(), 9);
        assert_eq!(o.points()[0], Point2::new(1.0, 0.0006));
        assert_eq!(o.points()[8], Point2::new(1.0, -0.0006));
        assert!(o.signed_area() > 0.0);
    }

    #[test_case("0.5 nan"; "nan")]
    #[test_case("0.5 inf"; "infinite")]
    #[test_case("-infinity 0.0"; "negative infinite")]
    fn non_finite_values_name_their_line(bad: &str) {
        let text = format!("square\n1.0 0.0\n{}\n0.0 1.0\n0.0 0.0\n", bad);
        assert_eq!(
            parse_selig(&text, 1).unwrap_err(),
            SectionError::MalformedAirfoilFile {
                line: 3,
                content: bad.to_string()
            }
        );
    }

    #[test]
    fn header_as_data_is_reported() {
        let e = parse_selig(CLARK_Y_COARSE, 0).unwrap_err();
        assert_eq!(
            e,
            SectionError::MalformedAirfoilFile {
                line: 1,
                content: "CLARK Y AIRFOIL (coarse)".to_string()
            }
        );
    }

    #[test]
    fn line_numbers_count_headers() {
        let text = "name\n1.0 0.0\n0.5 0.1 0.2\n0.0 0.0\n";
        let e = parse_selig(text, 1).unwrap_err();
        assert!(matches!(e, SectionError::MalformedAirfoilFile { line: 3, .. }));

        let text = "name\n\n1.0 0.0\n0.5 abc\n0.0 0.0\n";
        let e = parse_selig(text, 1).unwrap_err();
        assert!(matches!(e, SectionError::MalformedAirfoilFile { line: 4, .. }));
    }

    #[test]
    fn too_few_points() {
        let e = parse_selig("name\n1.0 0.0\n0.0 0.0\n", 1).unwrap_err();
        assert_eq!(e, SectionError::InsufficientPoints { count: 2 });
    }

    #[test]
    fn reads_file_and_names_airfoil() {
        let path = std::env::temp_dir().join("thinwall_selig_read_test.dat");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(CLARK_Y_COARSE.as_bytes()).unwrap();
        drop(f);

        let af = read_selig(&path, 1).unwrap();
        assert_eq!(af.name(), "CLARK Y AIRFOIL (coarse)");
        assert_eq!(af.outline().len(), 9);

        let af = read_selig(&path, 0);
        assert!(af.is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("thinwall_this_file_does_not_exist.dat");
        assert!(read_selig(&path, 1).is_err());
    }
}
