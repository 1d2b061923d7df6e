//! Per-mode leaderboards and roster analytics.

use serde::Serialize;

use crate::models::{GameMode, Player, PlayerId, Region, Tier};

/// One row of a game mode leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct ModeEntry {
    pub position: u32,
    pub player_id: PlayerId,
    pub name: String,
    pub region: Region,
    pub tier: Tier,
    pub score: f64,
    pub points: u32,
}

/// Rank the players holding a tier in `mode`.
///
/// Ordered by tier (best first), then by raw score descending. Banned players
/// and `Not Ranked` entries are left out; retired players sort last.
pub fn mode_leaderboard(players: &[Player], mode: GameMode) -> Vec<ModeEntry> {
    let mut rows: Vec<(&Player, Tier, f64)> = players
        .iter()
        .filter(|p| !p.banned)
        .filter_map(|p| p.assignment(mode).map(|a| (p, a.tier, a.score)))
        .filter(|(_, tier, _)| *tier != Tier::NotRanked)
        .collect();

    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| b.2.total_cmp(&a.2)));

    rows.into_iter()
        .enumerate()
        .map(|(i, (player, tier, score))| ModeEntry {
            position: i as u32 + 1,
            player_id: player.id.clone(),
            name: player.name.clone(),
            region: player.region,
            tier,
            score,
            points: tier.points(),
        })
        .collect()
}

/// Number of players holding a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub tier: Tier,
    pub count: u32,
}

/// How many non-banned players hold each tier in `mode`, best tier first.
/// Every tier is listed, including those with no players.
pub fn tier_distribution(players: &[Player], mode: GameMode) -> Vec<TierCount> {
    let mut counts = [0u32; Tier::ALL.len()];
    for assignment in players
        .iter()
        .filter(|p| !p.banned)
        .filter_map(|p| p.assignment(mode))
    {
        counts[assignment.tier.index()] += 1;
    }

    Tier::ALL
        .iter()
        .map(|tier| TierCount {
            tier: *tier,
            count: counts[tier.index()],
        })
        .collect()
}

/// Headline numbers for a ranked roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total_players: u32,
    pub ranked_players: u32,
    pub banned_players: u32,
    pub synthetic_players: u32,
    pub top_player: Option<String>,
    pub top_points: u32,
}

impl RosterSummary {
    /// Summarize a roster that has already been ranked.
    pub fn from_players(players: &[Player]) -> Self {
        let mut summary = Self {
            total_players: players.len() as u32,
            ..Default::default()
        };

        for player in players {
            if player.banned {
                summary.banned_players += 1;
            }
            if player.synthetic {
                summary.synthetic_players += 1;
            }
            if player.overall_rank.is_some() {
                summary.ranked_players += 1;
            }
            if player.overall_rank == Some(1) {
                summary.top_player = Some(player.name.clone());
                summary.top_points = player.global_points;
            }
        }

        summary
    }
}
