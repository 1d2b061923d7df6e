//! Scoring and ranking engine.
//!
//! Pure functions over the roster models:
//! - Tier point lookup and per-player aggregation
//! - Full-pass overall ranking with a banned pre-filter
//! - Skill assessment scoring and ladder classification
//! - Merging the assessment roster into the main roster
//! - Per-mode leaderboards and tier distribution

mod classify;
mod leaderboard;
mod merge;
mod points;
mod ranking;

pub use classify::*;
pub use leaderboard::*;
pub use merge::*;
pub use points::*;
pub use ranking::*;
