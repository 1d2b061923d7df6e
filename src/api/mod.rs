//! Read-only HTTP API over the merged leaderboard.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::roster::RosterError;
use state::AppState;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origin);

    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/leaderboard", get(routes::leaderboard::overall))
        .route("/api/leaderboard/:mode", get(routes::leaderboard::by_mode))
        .route("/api/players/:name", get(routes::players::show))
        .route("/api/analytics/tiers", get(routes::analytics::tiers))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([Method::GET]),
        Err(e) => {
            warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
            CorsLayer::new()
        }
    }
}

/// Request failures, rendered as `{"error": {"code", "message"}}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::PlayerNotFound(name) => ApiError::NotFound(format!("player {}", name)),
            RosterError::Validation(e) => ApiError::BadRequest(e.to_string()),
            other => {
                error!("Roster error: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

const DEFAULT_PAGE_SIZE: u32 = 50;
const MAX_PAGE_SIZE: u32 = 100;

/// A requested page: 1-based index, size clamped to `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    fn skip(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }

    /// Cut this page out of the full result list.
    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total_items = items.len() as u32;
        let total_pages = total_items.div_ceil(self.page_size);
        let items = items
            .into_iter()
            .skip(self.skip())
            .take(self.page_size as usize)
            .collect();

        Page {
            items,
            meta: PageMeta {
                page: self.page,
                page_size: self.page_size,
                total_items,
                total_pages,
                has_next: self.page < total_pages,
                has_prev: self.page > 1,
            },
        }
    }
}

/// One page of results and where it sits in the whole.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}
