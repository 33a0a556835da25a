//! Optional range checks against the parameter ranges permitted by G.107
//!
//! The engine accepts any input and lets out-of-domain arithmetic produce
//! NaN or infinity. Callers that prefer an explicit diagnostic run
//! [`validate`] before computing.

use crate::error::{EmodelError, Result};
use crate::params::InputParameters;

/// Permitted range of one parameter, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Check one value against this range
    pub fn check(&self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(EmodelError::NonFinite { field: self.field });
        }
        if value < self.min || value > self.max {
            return Err(EmodelError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Permitted ranges, in the field order of [`InputParameters::fields`]
pub const PERMITTED_RANGES: [ParameterRange; 20] = [
    ParameterRange::new("SLR", 0.0, 18.0),
    ParameterRange::new("RLR", -5.0, 14.0),
    ParameterRange::new("STMR", 10.0, 20.0),
    ParameterRange::new("LSTR", 13.0, 23.0),
    ParameterRange::new("Ds", -3.0, 3.0),
    ParameterRange::new("TELR", 5.0, 65.0),
    ParameterRange::new("WEPL", 5.0, 110.0),
    ParameterRange::new("T", 0.0, 500.0),
    ParameterRange::new("Tr", 0.0, 1000.0),
    ParameterRange::new("Ta", 0.0, 500.0),
    ParameterRange::new("Qdu", 1.0, 14.0),
    ParameterRange::new("Ie", 0.0, 40.0),
    ParameterRange::new("Bpl", 1.0, 40.0),
    ParameterRange::new("Ppl", 0.0, 20.0),
    ParameterRange::new("BurstR", 1.0, 8.0),
    ParameterRange::new("Nc", -80.0, -40.0),
    ParameterRange::new("Nfor", -80.0, -40.0),
    ParameterRange::new("Ps", 35.0, 85.0),
    ParameterRange::new("Pr", 35.0, 85.0),
    ParameterRange::new("A", 0.0, 20.0),
];

/// Return the first parameter outside its permitted range, if any
pub fn validate(input: &InputParameters) -> Result<()> {
    for (range, (_, value)) in PERMITTED_RANGES.iter().zip(input.fields()) {
        range.check(value)?;
    }
    Ok(())
}

/// Collect every parameter outside its permitted range
pub fn validation_report(input: &InputParameters) -> Vec<EmodelError> {
    PERMITTED_RANGES
        .iter()
        .zip(input.fields())
        .filter_map(|(range, (_, value))| range.check(value).err())
        .collect()
}
