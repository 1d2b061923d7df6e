//! Skill assessment records fed from the external skywars evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{normalize_name, SkillTier};
use crate::calculate::{classify, overall_score};

/// Lowest accepted dimension score.
pub const MIN_DIMENSION_SCORE: f64 = 1.0;

/// Highest accepted dimension score.
pub const MAX_DIMENSION_SCORE: f64 = 100.0;

/// Assessment input that cannot be classified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{dimension} score {value} is outside 1..=100")]
    DimensionOutOfRange { dimension: &'static str, value: f64 },

    #[error("Username must not be empty")]
    EmptyUsername,
}

/// The five scored skill dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillDimensions {
    pub combat: f64,
    pub movement: f64,
    pub game_sense: f64,
    pub bridging: f64,
    pub consistency: f64,
}

impl SkillDimensions {
    pub fn new(combat: f64, movement: f64, game_sense: f64, bridging: f64, consistency: f64) -> Self {
        Self {
            combat,
            movement,
            game_sense,
            bridging,
            consistency,
        }
    }

    /// Same score in every dimension.
    pub fn uniform(score: f64) -> Self {
        Self::new(score, score, score, score, score)
    }

    /// Dimension names paired with their scores.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("combat", self.combat),
            ("movement", self.movement),
            ("game_sense", self.game_sense),
            ("bridging", self.bridging),
            ("consistency", self.consistency),
        ]
    }

    /// Check every dimension lies in `1..=100`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (dimension, value) in self.named() {
            if !(MIN_DIMENSION_SCORE..=MAX_DIMENSION_SCORE).contains(&value) {
                return Err(ValidationError::DimensionOutOfRange { dimension, value });
            }
        }
        Ok(())
    }
}

/// One player's skill assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAssessment {
    /// Platform username, matched case-insensitively against players
    pub username: String,

    pub dimensions: SkillDimensions,

    /// Mean of the five dimensions, rounded to 2 decimals
    pub overall_score: f64,

    /// Ladder bucket containing `overall_score`
    pub tier: SkillTier,

    pub updated_at: DateTime<Utc>,
}

impl SkillAssessment {
    /// Validate the dimensions and derive the score and tier.
    pub fn new(username: String, dimensions: SkillDimensions) -> Result<Self, ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        dimensions.validate()?;

        let overall_score = overall_score(&dimensions);
        Ok(Self {
            username: username.trim().to_string(),
            dimensions,
            overall_score,
            tier: classify(overall_score),
            updated_at: Utc::now(),
        })
    }

    /// Replace the dimensions, recomputing score and tier.
    pub fn set_dimensions(&mut self, dimensions: SkillDimensions) -> Result<(), ValidationError> {
        dimensions.validate()?;

        self.dimensions = dimensions;
        self.overall_score = overall_score(&dimensions);
        self.tier = classify(self.overall_score);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Normalized matching key.
    pub fn key(&self) -> String {
        normalize_name(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_score_and_tier() {
        let dims = SkillDimensions::new(80.0, 82.0, 78.0, 90.0, 70.0);
        let assessment = SkillAssessment::new("Steve".to_string(), dims).unwrap();

        assert_eq!(assessment.overall_score, 80.0);
        assert_eq!(assessment.tier, SkillTier::MT2);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let dims = SkillDimensions::new(80.0, 0.0, 78.0, 90.0, 70.0);
        let err = SkillAssessment::new("Steve".to_string(), dims).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DimensionOutOfRange {
                dimension: "movement",
                value: 0.0
            }
        );

        let dims = SkillDimensions::new(80.0, 80.0, 101.0, 90.0, 70.0);
        assert!(SkillAssessment::new("Steve".to_string(), dims).is_err());
    }

    #[test]
    fn test_new_rejects_nan() {
        let dims = SkillDimensions::new(f64::NAN, 80.0, 80.0, 80.0, 80.0);
        assert!(dims.validate().is_err());
    }

    #[test]
    fn test_new_rejects_empty_username() {
        let err = SkillAssessment::new("  ".to_string(), SkillDimensions::uniform(60.0));
        assert_eq!(err.unwrap_err(), ValidationError::EmptyUsername);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(SkillDimensions::uniform(1.0).validate().is_ok());
        assert!(SkillDimensions::uniform(100.0).validate().is_ok());
    }

    #[test]
    fn test_set_dimensions_reclassifies() {
        let mut assessment =
            SkillAssessment::new("Steve".to_string(), SkillDimensions::uniform(40.0)).unwrap();
        assert_eq!(assessment.tier, SkillTier::NoRank);

        assessment
            .set_dimensions(SkillDimensions::uniform(97.0))
            .unwrap();
        assert_eq!(assessment.overall_score, 97.0);
        assert_eq!(assessment.tier, SkillTier::HT1);
    }

    #[test]
    fn test_set_dimensions_rejects_and_keeps_old_values() {
        let mut assessment =
            SkillAssessment::new("Steve".to_string(), SkillDimensions::uniform(60.0)).unwrap();
        assert!(assessment
            .set_dimensions(SkillDimensions::uniform(150.0))
            .is_err());
        assert_eq!(assessment.overall_score, 60.0);
        assert_eq!(assessment.tier, SkillTier::HT4);
    }

    #[test]
    fn test_key_is_normalized() {
        let assessment =
            SkillAssessment::new(" SteveMC ".to_string(), SkillDimensions::uniform(60.0)).unwrap();
        assert_eq!(assessment.username, "SteveMC");
        assert_eq!(assessment.key(), "stevemc");
    }
}
