//! This module contains an abstraction for working with a discrete domain of scalar f64 values,
//! where the values are always ordered and only finite values are allowed. The sizing sweep uses
//! it for the range of wing loadings being studied.

use crate::errors::SectionError;
use serde::Serialize;

/// Generate a discrete domain of values which are linearly spaced between `start` and `end` and
/// which have a total count of `n`. The first value will be `start` and the last value will be
/// `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive, must not be less than `start`
/// * `n`: the total number of discrete, evenly spaced values in the domain, at least 2
///
/// returns: Result<DiscreteDomain, SectionError>
///
/// # Examples
///
/// ```
/// use thinwall::common::linear_space;
/// let domain = linear_space(0.0, 1.0, 3).unwrap();
/// assert_eq!(domain.values(), vec![0.0, 0.5, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, n: usize) -> Result<DiscreteDomain, SectionError> {
    if n < 2 {
        return Err(SectionError::InvalidParameter {
            name: "count",
            value: n as f64,
        });
    }

    let step = (end - start) / (n - 1) as f64;
    let mut values = (0..n).map(|i| start + i as f64 * step).collect::<Vec<_>>();

    // Pin the final value so it does not drift from `end` by accumulated rounding
    values[n - 1] = end;
    DiscreteDomain::try_from(values)
}

/// A discrete domain of scalar f64 values, in which all values are guaranteed to be finite and
/// in ascending order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DiscreteDomain {
    values: Vec<f64>,
}

impl DiscreteDomain {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Evaluate a function at every value of the domain, in order.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.values.iter().map(|x| f(*x)).collect()
    }
}

impl TryFrom<Vec<f64>> for DiscreteDomain {
    type Error = SectionError;

    fn try_from(values: Vec<f64>) -> Result<Self, SectionError> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(SectionError::InvalidParameter {
                name: "domain value",
                value: *bad,
            });
        }

        if let Some(w) = values.windows(2).find(|w| w[1] < w[0]) {
            return Err(SectionError::InvalidParameter {
                name: "descending domain value",
                value: w[1],
            });
        }

        Ok(Self { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_space_end_points() {
        let d = linear_space(10.0, 23.0, 50).unwrap();
        assert_eq!(d.len(), 50);
        assert_eq!(d.first(), Some(10.0));
        assert_eq!(d.last(), Some(23.0));
        assert_relative_eq!(d.values()[1] - d.values()[0], 13.0 / 49.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_space_needs_two_values() {
        assert!(linear_space(0.0, 1.0, 1).is_err());
    }

    #[test]
    fn descending_is_rejected() {
        assert!(linear_space(1.0, 0.0, 4).is_err());
        assert!(DiscreteDomain::try_from(vec![0.0, 2.0, 1.0]).is_err());
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(DiscreteDomain::try_from(vec![0.0, f64::NAN]).is_err());
    }

    #[test]
    fn map_preserves_order() {
        let d = linear_space(1.0, 3.0, 3).unwrap();
        assert_eq!(d.map(|x| x * x), vec![1.0, 4.0, 9.0]);
    }
}
