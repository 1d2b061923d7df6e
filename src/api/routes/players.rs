use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{normalize_name, Player, SkillAssessment};

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub player: Player,
    pub assessment: Option<SkillAssessment>,
}

/// Look up one player on the merged leaderboard, by in-game name or
/// platform username.
pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let ranking = &state.config.ranking;
    let roster = state.load_roster()?;

    let key = normalize_name(&name);
    let player = roster
        .leaderboard(&ranking.merge_options(), ranking.include_assessments)
        .into_iter()
        .find(|p| p.matches(&key))
        .ok_or_else(|| ApiError::NotFound(format!("player {}", name)))?;

    let assessment = std::iter::once(player.name.as_str())
        .chain(player.platform_username.as_deref())
        .find_map(|n| roster.find_assessment(n))
        .cloned();

    Ok(Json(PlayerResponse { player, assessment }))
}
