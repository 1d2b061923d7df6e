//! Skill assessment tier ladder.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tier;

/// Tier on the 13-step skill assessment ladder, ordered best first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum SkillTier {
    HT1,
    MT1,
    LT1,
    HT2,
    MT2,
    LT2,
    HT3,
    MT3,
    LT3,
    HT4,
    MT4,
    LT4,
    #[default]
    #[serde(rename = "No Rank", alias = "NoRank")]
    NoRank,
}

/// Inclusive lower bound of each ranked bucket, highest first.
const LADDER: [(f64, SkillTier); 12] = [
    (97.0, SkillTier::HT1),
    (93.0, SkillTier::MT1),
    (89.0, SkillTier::LT1),
    (84.0, SkillTier::HT2),
    (80.0, SkillTier::MT2),
    (76.0, SkillTier::LT2),
    (71.0, SkillTier::HT3),
    (67.0, SkillTier::MT3),
    (63.0, SkillTier::LT3),
    (58.0, SkillTier::HT4),
    (54.0, SkillTier::MT4),
    (50.0, SkillTier::LT4),
];

impl SkillTier {
    /// Find the ladder bucket containing `score`.
    ///
    /// Buckets are closed-open, so a score on a boundary lands in the higher
    /// bucket. Anything below 50 (or NaN) is `NoRank`.
    pub fn from_score(score: f64) -> Self {
        LADDER
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(SkillTier::NoRank)
    }

    /// Translate into the main tier vocabulary.
    ///
    /// The main vocabulary has no middle tiers, so `MTn` rounds down to `LTn`.
    pub fn to_tier(self) -> Tier {
        match self {
            SkillTier::HT1 => Tier::HT1,
            SkillTier::MT1 | SkillTier::LT1 => Tier::LT1,
            SkillTier::HT2 => Tier::HT2,
            SkillTier::MT2 | SkillTier::LT2 => Tier::LT2,
            SkillTier::HT3 => Tier::HT3,
            SkillTier::MT3 | SkillTier::LT3 => Tier::LT3,
            SkillTier::HT4 => Tier::HT4,
            SkillTier::MT4 | SkillTier::LT4 => Tier::LT4,
            SkillTier::NoRank => Tier::NotRanked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillTier::HT1 => "HT1",
            SkillTier::MT1 => "MT1",
            SkillTier::LT1 => "LT1",
            SkillTier::HT2 => "HT2",
            SkillTier::MT2 => "MT2",
            SkillTier::LT2 => "LT2",
            SkillTier::HT3 => "HT3",
            SkillTier::MT3 => "MT3",
            SkillTier::LT3 => "LT3",
            SkillTier::HT4 => "HT4",
            SkillTier::MT4 => "MT4",
            SkillTier::LT4 => "LT4",
            SkillTier::NoRank => "No Rank",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_floors() {
        assert_eq!(SkillTier::from_score(50.0), SkillTier::LT4);
        assert_eq!(SkillTier::from_score(54.0), SkillTier::MT4);
        assert_eq!(SkillTier::from_score(58.0), SkillTier::HT4);
        assert_eq!(SkillTier::from_score(63.0), SkillTier::LT3);
        assert_eq!(SkillTier::from_score(67.0), SkillTier::MT3);
        assert_eq!(SkillTier::from_score(71.0), SkillTier::HT3);
        assert_eq!(SkillTier::from_score(76.0), SkillTier::LT2);
        assert_eq!(SkillTier::from_score(80.0), SkillTier::MT2);
        assert_eq!(SkillTier::from_score(84.0), SkillTier::HT2);
        assert_eq!(SkillTier::from_score(89.0), SkillTier::LT1);
        assert_eq!(SkillTier::from_score(93.0), SkillTier::MT1);
        assert_eq!(SkillTier::from_score(97.0), SkillTier::HT1);
    }

    #[test]
    fn test_just_below_floors() {
        assert_eq!(SkillTier::from_score(49.99), SkillTier::NoRank);
        assert_eq!(SkillTier::from_score(57.99), SkillTier::MT4);
        assert_eq!(SkillTier::from_score(96.99), SkillTier::MT1);
    }

    #[test]
    fn test_nan_is_no_rank() {
        assert_eq!(SkillTier::from_score(f64::NAN), SkillTier::NoRank);
    }

    #[test]
    fn test_to_tier() {
        assert_eq!(SkillTier::HT1.to_tier(), Tier::HT1);
        assert_eq!(SkillTier::MT1.to_tier(), Tier::LT1);
        assert_eq!(SkillTier::LT2.to_tier(), Tier::LT2);
        assert_eq!(SkillTier::MT4.to_tier(), Tier::LT4);
        assert_eq!(SkillTier::NoRank.to_tier(), Tier::NotRanked);
    }

    #[test]
    fn test_translation_never_beats_a_better_tier() {
        let ranked = [
            SkillTier::HT1,
            SkillTier::MT1,
            SkillTier::LT1,
            SkillTier::HT2,
            SkillTier::MT2,
            SkillTier::LT2,
            SkillTier::HT3,
            SkillTier::MT3,
            SkillTier::LT3,
            SkillTier::HT4,
            SkillTier::MT4,
            SkillTier::LT4,
            SkillTier::NoRank,
        ];
        for pair in ranked.windows(2) {
            assert!(pair[0].to_tier().points() >= pair[1].to_tier().points());
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&SkillTier::MT2).unwrap(), "\"MT2\"");
        assert_eq!(
            serde_json::to_string(&SkillTier::NoRank).unwrap(),
            "\"No Rank\""
        );
    }
}
