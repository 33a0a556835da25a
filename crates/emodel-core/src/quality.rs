//! Quality categories and MOS derived from the transmission rating

use serde::Serialize;

/// Quality score (R-factor, MOS and category)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityScore {
    /// R-factor (0-100, 0=worst, 100=best)
    pub r: f64,
    /// Estimated mean opinion score (1.0-4.5)
    pub mos: f64,
    /// Quality level category
    pub level: QualityLevel,
}

impl QualityScore {
    /// Build a score from an R value
    pub fn from_r(r: f64) -> Self {
        Self {
            r,
            mos: mos_from_r(r),
            level: QualityLevel::from_r_factor(r),
        }
    }
}

/// User satisfaction category of ITU-T G.109
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    /// R >= 90
    Best,
    /// 80 <= R < 90
    High,
    /// 70 <= R < 80
    Medium,
    /// 60 <= R < 70
    Low,
    /// R < 60
    Poor,
}

impl QualityLevel {
    /// Create a quality level from R-factor
    ///
    /// A NaN rating falls through to `Poor`.
    pub fn from_r_factor(r: f64) -> Self {
        if r >= 90.0 {
            Self::Best
        } else if r >= 80.0 {
            Self::High
        } else if r >= 70.0 {
            Self::Medium
        } else if r >= 60.0 {
            Self::Low
        } else {
            Self::Poor
        }
    }

    /// Get a description of the quality level
    pub fn description(&self) -> &'static str {
        match self {
            Self::Best => "Very satisfied",
            Self::High => "Satisfied",
            Self::Medium => "Some users dissatisfied",
            Self::Low => "Many users dissatisfied",
            Self::Poor => "Nearly all users dissatisfied",
        }
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Best => "best",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Poor => "poor",
        };
        f.write_str(name)
    }
}

/// Convert an R-factor to an estimated MOS (G.107 Annex B)
pub fn mos_from_r(r: f64) -> f64 {
    if r.is_nan() {
        f64::NAN
    } else if r < 0.0 {
        1.0
    } else if r > 100.0 {
        4.5
    } else {
        1.0 + 0.035 * r + r * (r - 60.0) * (100.0 - r) * 7.0e-6
    }
}
