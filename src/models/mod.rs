//! Core data models for the tier leaderboard.

mod assessment;
mod game_mode;
mod ids;
mod player;
mod region;
mod skill_tier;
mod tier;

pub use assessment::*;
pub use game_mode::*;
pub use ids::*;
pub use player::*;
pub use region::*;
pub use skill_tier::*;
pub use tier::*;
