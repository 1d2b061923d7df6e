//! Player regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown region: {0:?}")]
pub struct UnknownRegion(pub String);

/// Server region a player is based in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    #[default]
    NA,
    EU,
    AS,
    SA,
    OCE,
    ME,
    AF,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::NA,
        Region::EU,
        Region::AS,
        Region::SA,
        Region::OCE,
        Region::ME,
        Region::AF,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::NA => "NA",
            Region::EU => "EU",
            Region::AS => "AS",
            Region::SA => "SA",
            Region::OCE => "OCE",
            Region::ME => "ME",
            Region::AF => "AF",
        }
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        let key = match key.as_str() {
            "ASIA" => "AS",
            "AU" | "OCEANIA" => "OCE",
            other => other,
        };
        Region::ALL
            .iter()
            .find(|r| r.as_str() == key)
            .copied()
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
