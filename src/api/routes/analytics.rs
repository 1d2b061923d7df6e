use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{tier_distribution, RosterSummary, TierCount};
use crate::models::GameMode;

#[derive(Debug, Deserialize)]
pub struct TiersParams {
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModeDistribution {
    pub mode: GameMode,
    pub tiers: Vec<TierCount>,
}

#[derive(Debug, Serialize)]
pub struct TiersResponse {
    pub summary: RosterSummary,
    pub modes: Vec<ModeDistribution>,
}

/// Tier distribution per mode, plus roster headline numbers.
pub async fn tiers(
    State(state): State<AppState>,
    Query(params): Query<TiersParams>,
) -> Result<Json<TiersResponse>, ApiError> {
    let modes: Vec<GameMode> = match params.mode.as_deref() {
        Some(mode) => vec![mode
            .parse::<GameMode>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?],
        None => GameMode::ALL.to_vec(),
    };

    let ranking = &state.config.ranking;
    let roster = state.load_roster()?;
    let players = roster.leaderboard(&ranking.merge_options(), ranking.include_assessments);

    Ok(Json(TiersResponse {
        summary: RosterSummary::from_players(&players),
        modes: modes
            .into_iter()
            .map(|mode| ModeDistribution {
                mode,
                tiers: tier_distribution(&players, mode),
            })
            .collect(),
    }))
}
