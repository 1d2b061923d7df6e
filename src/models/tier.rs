//! Main tier vocabulary and its point table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points awarded per tier, indexed by [`Tier::index`].
const TIER_POINTS: [u32; 12] = [65, 50, 30, 20, 10, 6, 4, 3, 2, 1, 0, 0];

/// Returned when a label is not part of the tier vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tier label: {0:?}")]
pub struct UnknownTier(pub String);

/// A tier placement in one game mode, ordered best first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Tier {
    HT1,
    LT1,
    HT2,
    LT2,
    HT3,
    LT3,
    HT4,
    LT4,
    HT5,
    LT5,
    Retired,
    #[default]
    #[serde(rename = "Not Ranked", alias = "NotRanked")]
    NotRanked,
}

impl Tier {
    /// Every tier, best first.
    pub const ALL: [Tier; 12] = [
        Tier::HT1,
        Tier::LT1,
        Tier::HT2,
        Tier::LT2,
        Tier::HT3,
        Tier::LT3,
        Tier::HT4,
        Tier::LT4,
        Tier::HT5,
        Tier::LT5,
        Tier::Retired,
        Tier::NotRanked,
    ];

    /// Position of this tier in [`Tier::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Point value of this tier.
    pub fn points(self) -> u32 {
        TIER_POINTS[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::HT1 => "HT1",
            Tier::LT1 => "LT1",
            Tier::HT2 => "HT2",
            Tier::LT2 => "LT2",
            Tier::HT3 => "HT3",
            Tier::LT3 => "LT3",
            Tier::HT4 => "HT4",
            Tier::LT4 => "LT4",
            Tier::HT5 => "HT5",
            Tier::LT5 => "LT5",
            Tier::Retired => "Retired",
            Tier::NotRanked => "Not Ranked",
        }
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();

        match key.as_str() {
            "RETIRED" => Ok(Tier::Retired),
            "NOTRANKED" | "N/A" | "NONE" => Ok(Tier::NotRanked),
            _ => Tier::ALL
                .iter()
                .find(|t| t.as_str() == key)
                .copied()
                .ok_or_else(|| UnknownTier(s.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
