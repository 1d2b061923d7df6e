pub mod analytics;
pub mod leaderboard;
pub mod players;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Player, SkillAssessment};
use crate::storage::{EntityType, JsonlReader};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub players: usize,
    pub assessments: usize,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let players = JsonlReader::<Player>::for_entity(&state.storage, EntityType::Player)
        .count()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let assessments =
        JsonlReader::<SkillAssessment>::for_entity(&state.storage, EntityType::SkillAssessment)
            .count()
            .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        players,
        assessments,
    }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::config::AppConfig;
    use crate::models::{GameMode, SkillDimensions, Tier};
    use crate::roster::Roster;
    use crate::storage::StorageConfig;

    /// A data dir holding a small roster:
    /// Steve (sword HT1, crystal LT2), Alex (sword LT2, EU),
    /// Cheater (banned, sword HT1) and a Herobrine assessment scoring 98.
    pub fn seeded_state(dir: &std::path::Path) -> AppState {
        let mut roster = Roster::default();
        roster
            .submit_result("Steve", GameMode::Sword, Tier::HT1, 90.0)
            .unwrap();
        roster
            .submit_result("Steve", GameMode::Crystal, Tier::LT2, 70.0)
            .unwrap();
        roster
            .submit_result("Alex", GameMode::Sword, Tier::LT2, 60.0)
            .unwrap();
        roster
            .update_profile(
                "Alex",
                crate::roster::ProfileUpdate {
                    region: Some(crate::models::Region::EU),
                    ..Default::default()
                },
            )
            .unwrap();
        roster
            .submit_result("Cheater", GameMode::Sword, Tier::HT1, 99.0)
            .unwrap();
        roster.set_banned("Cheater", true).unwrap();
        roster
            .upsert_assessment("Herobrine", SkillDimensions::uniform(98.0))
            .unwrap();
        roster
            .save(&StorageConfig::new(dir.to_path_buf()))
            .unwrap();

        AppState::new(AppConfig {
            data_dir: dir.to_path_buf(),
            ..Default::default()
        })
    }

    pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(seeded_state(tmp.path()));

        let (status, json) = get_json(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["players"], 3);
        assert_eq!(json["assessments"], 1);
    }

    #[tokio::test]
    async fn test_health_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState::new(AppConfig {
            data_dir: tmp.path().to_path_buf(),
            ..Default::default()
        });

        let (status, json) = get_json(build_router(state), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["players"], 0);
    }
}
