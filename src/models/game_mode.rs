//! Game modes tracked on the leaderboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown game mode: {0:?}")]
pub struct UnknownGameMode(pub String);

/// A Bedrock PvP game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Crystal,
    Sword,
    Axe,
    Mace,
    Smp,
    Uhc,
    Nethpot,
    Bedwars,
    /// Fed by the skill assessment roster.
    Skywars,
}

impl GameMode {
    pub const ALL: [GameMode; 9] = [
        GameMode::Crystal,
        GameMode::Sword,
        GameMode::Axe,
        GameMode::Mace,
        GameMode::Smp,
        GameMode::Uhc,
        GameMode::Nethpot,
        GameMode::Bedwars,
        GameMode::Skywars,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Crystal => "crystal",
            GameMode::Sword => "sword",
            GameMode::Axe => "axe",
            GameMode::Mace => "mace",
            GameMode::Smp => "smp",
            GameMode::Uhc => "uhc",
            GameMode::Nethpot => "nethpot",
            GameMode::Bedwars => "bedwars",
            GameMode::Skywars => "skywars",
        }
    }
}

impl FromStr for GameMode {
    type Err = UnknownGameMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        GameMode::ALL
            .iter()
            .find(|m| m.as_str() == key)
            .copied()
            .ok_or_else(|| UnknownGameMode(s.to_string()))
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
