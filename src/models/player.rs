//! Player and tier assignment models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GameMode, PlayerId, Region, Tier};

/// Normalize a username for case-insensitive matching.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown device: {0:?}")]
pub struct UnknownDevice(pub String);

/// Device class a player competes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    #[default]
    Pc,
    Console,
}

impl FromStr for Device {
    type Err = UnknownDevice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "mcpe" => Ok(Device::Mobile),
            "pc" | "desktop" | "keyboard" => Ok(Device::Pc),
            "console" | "controller" => Ok(Device::Console),
            _ => Err(UnknownDevice(s.to_string())),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Mobile => write!(f, "mobile"),
            Device::Pc => write!(f, "pc"),
            Device::Console => write!(f, "console"),
        }
    }
}

/// A player's tier in one game mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierAssignment {
    pub mode: GameMode,
    pub tier: Tier,

    /// Raw score recorded for this mode
    #[serde(default)]
    pub score: f64,
}

impl TierAssignment {
    pub fn new(mode: GameMode, tier: Tier, score: f64) -> Self {
        Self { mode, tier, score }
    }

    pub fn points(&self) -> u32 {
        self.tier.points()
    }
}

/// A ranked player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Deterministic identifier derived from the normalized name
    pub id: PlayerId,

    /// In-game name
    pub name: String,

    /// Secondary platform username, also matched by skill assessments
    #[serde(default)]
    pub platform_username: Option<String>,

    /// External unique id (e.g. an Xbox XUID)
    #[serde(default)]
    pub external_id: Option<String>,

    #[serde(default)]
    pub region: Region,

    #[serde(default)]
    pub device: Device,

    /// Banned players are kept but never ranked
    #[serde(default)]
    pub banned: bool,

    /// True when the player only exists because of a skill assessment
    #[serde(default)]
    pub synthetic: bool,

    /// Sum of tier points across all assignments
    #[serde(default)]
    pub global_points: u32,

    /// 1-based position in the overall ranking
    #[serde(default)]
    pub overall_rank: Option<u32>,

    #[serde(default)]
    pub assignments: Vec<TierAssignment>,

    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player with no assignments.
    pub fn new(name: String) -> Self {
        let id = PlayerId::for_player(&name);

        Self {
            id,
            name,
            platform_username: None,
            external_id: None,
            region: Region::default(),
            device: Device::default(),
            banned: false,
            synthetic: false,
            global_points: 0,
            overall_rank: None,
            assignments: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Create a placeholder player standing in for an unmatched assessment.
    pub fn synthetic(username: String, region: Region, device: Device) -> Self {
        let id = PlayerId::for_assessment(&username);

        Self {
            id,
            synthetic: true,
            region,
            device,
            ..Self::new(username)
        }
    }

    /// Builder method to set the platform username.
    pub fn with_platform_username(mut self, username: String) -> Self {
        self.platform_username = Some(username);
        self
    }

    /// Builder method to add a tier assignment.
    pub fn with_assignment(mut self, mode: GameMode, tier: Tier, score: f64) -> Self {
        self.set_assignment(TierAssignment::new(mode, tier, score));
        self
    }

    /// Returns true if `key` (already normalized) matches the in-game name or
    /// the platform username.
    pub fn matches(&self, key: &str) -> bool {
        normalize_name(&self.name) == key
            || self
                .platform_username
                .as_deref()
                .is_some_and(|u| normalize_name(u) == key)
    }

    /// Assignment for a mode, if any.
    pub fn assignment(&self, mode: GameMode) -> Option<&TierAssignment> {
        self.assignments.iter().find(|a| a.mode == mode)
    }

    /// Insert an assignment, replacing any existing one for the same mode.
    pub fn set_assignment(&mut self, assignment: TierAssignment) {
        self.assignments.retain(|a| a.mode != assignment.mode);
        self.assignments.push(assignment);
        self.updated_at = Utc::now();
    }

    /// Remove the assignment for a mode. Returns true if one was present.
    pub fn remove_assignment(&mut self, mode: GameMode) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.mode != mode);
        let removed = self.assignments.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  SteveMC "), "stevemc");
    }

    #[test]
    fn test_player_id_deterministic() {
        let a = Player::new("Steve".to_string());
        let b = Player::new(" steve".to_string());
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_synthetic_id_differs_from_real() {
        let real = Player::new("Steve".to_string());
        let fake = Player::synthetic("Steve".to_string(), Region::EU, Device::Mobile);
        assert_ne!(real.id, fake.id);
        assert!(fake.synthetic);
        assert_eq!(fake.region, Region::EU);
        assert_eq!(fake.device, Device::Mobile);
    }

    #[test]
    fn test_matches_name_and_platform_username() {
        let player =
            Player::new("Steve".to_string()).with_platform_username("SteveXbox".to_string());
        assert!(player.matches("steve"));
        assert!(player.matches("stevexbox"));
        assert!(!player.matches("alex"));
    }

    #[test]
    fn test_set_assignment_replaces_same_mode() {
        let mut player = Player::new("Steve".to_string())
            .with_assignment(GameMode::Sword, Tier::HT3, 10.0)
            .with_assignment(GameMode::Crystal, Tier::LT2, 0.0);
        player.set_assignment(TierAssignment::new(GameMode::Sword, Tier::HT1, 99.0));

        assert_eq!(player.assignments.len(), 2);
        assert_eq!(player.assignment(GameMode::Sword).unwrap().tier, Tier::HT1);
    }

    #[test]
    fn test_remove_assignment() {
        let mut player =
            Player::new("Steve".to_string()).with_assignment(GameMode::Sword, Tier::HT3, 0.0);
        assert!(player.remove_assignment(GameMode::Sword));
        assert!(!player.remove_assignment(GameMode::Sword));
        assert!(player.assignments.is_empty());
    }

    #[test]
    fn test_device_parse() {
        assert_eq!("Mobile".parse::<Device>(), Ok(Device::Mobile));
        assert_eq!("controller".parse::<Device>(), Ok(Device::Console));
        assert!("fridge".parse::<Device>().is_err());
    }

    #[test]
    fn test_player_deserializes_with_defaults() {
        let json = r#"{"id":"abc","name":"Steve","updated_at":"2026-01-01T00:00:00Z"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.region, Region::NA);
        assert_eq!(player.device, Device::Pc);
        assert!(!player.banned);
        assert!(player.assignments.is_empty());
        assert_eq!(player.overall_rank, None);
    }
}
