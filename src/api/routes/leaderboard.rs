use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, PageMeta, PageRequest};
use crate::calculate::{mode_leaderboard, ModeEntry};
use crate::models::{Device, GameMode, Player, PlayerId, Region, TierAssignment};

// ── Overall Leaderboard ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub id: PlayerId,
    pub name: String,
    pub region: Region,
    pub device: Device,
    pub global_points: u32,
    pub synthetic: bool,
    pub tiers: Vec<TierAssignment>,
}

impl LeaderboardRow {
    fn from_ranked(player: Player) -> Option<Self> {
        Some(Self {
            rank: player.overall_rank?,
            id: player.id,
            name: player.name,
            region: player.region,
            device: player.device,
            global_points: player.global_points,
            synthetic: player.synthetic,
            tiers: player.assignments,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub players: Vec<LeaderboardRow>,
    pub pagination: PageMeta,
}

/// Overall ranking. The region filter keeps global ranks intact.
pub async fn overall(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let region = params
        .region
        .as_deref()
        .map(str::parse::<Region>)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let ranking = &state.config.ranking;
    let roster = state.load_roster()?;
    let rows: Vec<LeaderboardRow> = roster
        .leaderboard(&ranking.merge_options(), ranking.include_assessments)
        .into_iter()
        .filter(|p| region.map_or(true, |r| p.region == r))
        .filter_map(LeaderboardRow::from_ranked)
        .collect();

    let page = PageRequest::new(params.page, params.page_size).slice(rows);

    Ok(Json(LeaderboardResponse {
        players: page.items,
        pagination: page.meta,
    }))
}

// ── Mode Leaderboard ────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ModeLeaderboardResponse {
    pub mode: GameMode,
    pub entries: Vec<ModeEntry>,
}

pub async fn by_mode(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Json<ModeLeaderboardResponse>, ApiError> {
    let mode = mode
        .parse::<GameMode>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let ranking = &state.config.ranking;
    let roster = state.load_roster()?;
    let players = roster.leaderboard(&ranking.merge_options(), ranking.include_assessments);

    Ok(Json(ModeLeaderboardResponse {
        mode,
        entries: mode_leaderboard(&players, mode),
    }))
}
