//! # Bedrock Tiers
//!
//! A Minecraft Bedrock PvP tier leaderboard.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (tiers, players, skill assessments)
//! - **calculate**: Tier scoring, ranking, classification and roster merging
//! - **roster**: Admin edits over the stored roster
//! - **storage**: Filesystem JSONL operations
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod roster;
pub mod storage;

pub use models::*;
