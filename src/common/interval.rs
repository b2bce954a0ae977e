// This module has an abstraction for a closed interval of scalar values, used to describe how
// far a sweep reaches below and above its reference value.
use super::{DiscreteDomain, linear_space};
use crate::errors::SectionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// The lower bound of the interval
    pub lower: f64,

    /// The upper bound of the interval
    pub upper: f64,
}

impl Interval {
    /// Create a new interval, checking that both bounds are finite and that `lower` <= `upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, SectionError> {
        let interval = Self { lower, upper };
        interval.validate()?;
        Ok(interval)
    }

    /// Checks the bounds of an interval which may have been deserialized without going through
    /// `new`.
    pub fn validate(&self) -> Result<(), SectionError> {
        if !self.lower.is_finite() {
            return Err(SectionError::InvalidParameter {
                name: "interval lower bound",
                value: self.lower,
            });
        }
        if !self.upper.is_finite() || self.upper < self.lower {
            return Err(SectionError::InvalidParameter {
                name: "interval upper bound",
                value: self.upper,
            });
        }
        Ok(())
    }

    /// Returns true if the given value is within the interval
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// Returns the size of the interval
    pub fn size(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the interval with both bounds multiplied by `factor`, which must be positive
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            lower: self.lower * factor,
            upper: self.upper * factor,
        }
    }

    /// Generates `n` evenly spaced values spanning the interval, bounds included
    pub fn linear_space(&self, n: usize) -> Result<DiscreteDomain, SectionError> {
        linear_space(self.lower, self.upper, n)
    }
}
