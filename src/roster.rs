//! Roster store.
//!
//! Owns the player and skill assessment collections, applies admin edits and
//! keeps derived points and ranks current. Every edit that can change a total
//! reruns the full ranking pass.

use thiserror::Error;
use tracing::{debug, info};

use crate::calculate::{merge, rank_roster, MergeOptions};
use crate::models::{
    normalize_name, Device, GameMode, Player, PlayerId, Region, SkillAssessment, SkillDimensions,
    Tier, TierAssignment, ValidationError,
};
use crate::storage::{EntityType, JsonlReader, JsonlWriter, StorageConfig, StorageError};

/// Errors from roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid assessment: {0}")]
    Validation(#[from] ValidationError),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Player already exists: {0}")]
    PlayerExists(String),

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Score must be a finite number, got {0}")]
    InvalidScore(f64),
}

/// Profile fields an admin can edit. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub region: Option<Region>,
    pub device: Option<Device>,
    pub platform_username: Option<String>,
    pub external_id: Option<String>,
}

/// Players and skill assessments with their derived rankings.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    assessments: Vec<SkillAssessment>,
}

impl Roster {
    pub fn new(players: Vec<Player>, assessments: Vec<SkillAssessment>) -> Self {
        let mut roster = Self {
            players,
            assessments,
        };
        roster.rerank();
        roster
    }

    /// Load the roster from storage, recomputing points and ranks.
    pub fn load(config: &StorageConfig) -> Result<Self, RosterError> {
        let players = JsonlReader::<Player>::for_entity(config, EntityType::Player).read_all()?;
        let assessments =
            JsonlReader::<SkillAssessment>::for_entity(config, EntityType::SkillAssessment)
                .read_all()?;

        info!(
            "Loaded {} players and {} skill assessments",
            players.len(),
            assessments.len()
        );
        Ok(Self::new(players, assessments))
    }

    /// Persist players and assessments.
    pub fn save(&self, config: &StorageConfig) -> Result<(), RosterError> {
        JsonlWriter::<Player>::for_entity(config, EntityType::Player).write_all(&self.players)?;
        JsonlWriter::<SkillAssessment>::for_entity(config, EntityType::SkillAssessment)
            .write_all(&self.assessments)?;
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn assessments(&self) -> &[SkillAssessment] {
        &self.assessments
    }

    /// Find a player by in-game name or platform username, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.position(name).map(|i| &self.players[i])
    }

    /// Find an assessment by username, ignoring case.
    pub fn find_assessment(&self, username: &str) -> Option<&SkillAssessment> {
        let key = normalize_name(username);
        self.assessments.iter().find(|a| a.key() == key)
    }

    /// Explicitly add a player with no results.
    pub fn add_player(
        &mut self,
        name: &str,
        region: Region,
        device: Device,
    ) -> Result<&Player, RosterError> {
        let name = checked_name(name)?;
        if self.position(&name).is_some() {
            return Err(RosterError::PlayerExists(name));
        }

        let mut player = Player::new(name);
        player.region = region;
        player.device = device;
        let id = player.id.clone();
        info!("Added player {}", player.name);

        self.players.push(player);
        self.rerank();
        self.by_id(&id)
    }

    /// Record a tier result, creating the player on first submission.
    ///
    /// Replaces any existing assignment for the same mode.
    pub fn submit_result(
        &mut self,
        name: &str,
        mode: GameMode,
        tier: Tier,
        score: f64,
    ) -> Result<&Player, RosterError> {
        let name = checked_name(name)?;
        if !score.is_finite() {
            return Err(RosterError::InvalidScore(score));
        }
        let index = match self.position(&name) {
            Some(index) => index,
            None => {
                info!("Creating player {} on first submission", name);
                self.players.push(Player::new(name));
                self.players.len() - 1
            }
        };

        let player = &mut self.players[index];
        player.set_assignment(TierAssignment::new(mode, tier, score));
        let id = player.id.clone();
        info!("Set {} {} to {}", player.name, mode, tier);

        self.rerank();
        self.by_id(&id)
    }

    /// Remove a player's result for one mode. Returns true if one was removed.
    pub fn remove_result(&mut self, name: &str, mode: GameMode) -> Result<bool, RosterError> {
        let index = self.require(name)?;
        let removed = self.players[index].remove_assignment(mode);
        if removed {
            debug!("Removed {} result for {}", mode, self.players[index].name);
            self.rerank();
        }
        Ok(removed)
    }

    /// Apply a profile edit.
    pub fn update_profile(
        &mut self,
        name: &str,
        update: ProfileUpdate,
    ) -> Result<&Player, RosterError> {
        let index = self.require(name)?;

        if let Some(username) = update.platform_username.as_deref() {
            let other = self.position(username);
            if other.is_some_and(|i| i != index) {
                return Err(RosterError::PlayerExists(username.to_string()));
            }
        }

        let player = &mut self.players[index];
        if let Some(region) = update.region {
            player.region = region;
        }
        if let Some(device) = update.device {
            player.device = device;
        }
        if let Some(username) = update.platform_username {
            player.platform_username = Some(username.trim().to_string());
        }
        if let Some(external_id) = update.external_id {
            player.external_id = Some(external_id);
        }
        player.updated_at = chrono::Utc::now();
        debug!("Updated profile of {}", player.name);

        Ok(&self.players[index])
    }

    /// Ban or unban a player. Banned players drop out of the ranking.
    pub fn set_banned(&mut self, name: &str, banned: bool) -> Result<(), RosterError> {
        let index = self.require(name)?;
        let player = &mut self.players[index];
        if player.banned != banned {
            player.banned = banned;
            player.updated_at = chrono::Utc::now();
            info!(
                "{} {}",
                if banned { "Banned" } else { "Unbanned" },
                player.name
            );
            self.rerank();
        }
        Ok(())
    }

    /// Delete a player together with all of its assignments.
    pub fn delete_player(&mut self, name: &str) -> Result<Player, RosterError> {
        let index = self.require(name)?;
        let player = self.players.remove(index);
        info!(
            "Deleted {} ({} assignments)",
            player.name,
            player.assignments.len()
        );
        self.rerank();
        Ok(player)
    }

    /// Insert or update the assessment for `username`.
    pub fn upsert_assessment(
        &mut self,
        username: &str,
        dimensions: SkillDimensions,
    ) -> Result<&SkillAssessment, RosterError> {
        let key = normalize_name(username);
        match self.assessments.iter().position(|a| a.key() == key) {
            Some(index) => {
                self.assessments[index].set_dimensions(dimensions)?;
                debug!("Updated assessment for {}", username);
                Ok(&self.assessments[index])
            }
            None => {
                let assessment = SkillAssessment::new(username.to_string(), dimensions)?;
                debug!("Added assessment for {}", assessment.username);
                self.assessments.push(assessment);
                Ok(&self.assessments[self.assessments.len() - 1])
            }
        }
    }

    /// The public leaderboard: players merged with skill assessments.
    pub fn leaderboard(&self, options: &MergeOptions, include_assessments: bool) -> Vec<Player> {
        if include_assessments {
            merge(self.players.clone(), &self.assessments, options)
        } else {
            rank_roster(self.players.clone())
        }
    }

    fn rerank(&mut self) {
        self.players = rank_roster(std::mem::take(&mut self.players));
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.players.iter().position(|p| p.matches(&key))
    }

    fn require(&self, name: &str) -> Result<usize, RosterError> {
        self.position(name)
            .ok_or_else(|| RosterError::PlayerNotFound(name.to_string()))
    }

    fn by_id(&self, id: &PlayerId) -> Result<&Player, RosterError> {
        self.players
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| RosterError::PlayerNotFound(id.to_string()))
    }
}

fn checked_name(name: &str) -> Result<String, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }
    Ok(name.to_string())
}
