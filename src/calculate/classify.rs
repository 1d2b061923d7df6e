//! Skill assessment scoring.

use crate::models::{SkillDimensions, SkillTier};

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean of the five dimensions, rounded to 2 decimals.
pub fn overall_score(dimensions: &SkillDimensions) -> f64 {
    let named = dimensions.named();
    let sum: f64 = named.iter().map(|(_, value)| value).sum();
    round2(sum / named.len() as f64)
}

/// Classify an overall score onto the skill ladder.
///
/// Callers must validate dimensions first; see [`SkillDimensions::validate`].
pub fn classify(overall_score: f64) -> SkillTier {
    SkillTier::from_score(overall_score)
}
