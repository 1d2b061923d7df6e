//! Overall ranking.

use tracing::debug;

use super::global_points;
use crate::models::Player;

/// Recompute global points for every player and assign overall ranks.
///
/// Players are sorted by descending points. The sort is stable, so players
/// with equal points keep their input order. Always a full pass: one changed
/// total can move every other player's rank.
pub fn rerank(players: &mut [Player]) {
    for player in players.iter_mut() {
        player.global_points = global_points(&player.assignments);
    }

    players.sort_by(|a, b| b.global_points.cmp(&a.global_points));

    for (position, player) in players.iter_mut().enumerate() {
        player.overall_rank = Some(position as u32 + 1);
    }
}

/// Split banned players out before ranking. Returns `(eligible, banned)`.
pub fn exclude_banned(players: Vec<Player>) -> (Vec<Player>, Vec<Player>) {
    players.into_iter().partition(|p| !p.banned)
}

/// Rank the eligible players; banned players follow them without a rank.
pub fn rank_roster(players: Vec<Player>) -> Vec<Player> {
    let (mut ranked, mut banned) = exclude_banned(players);
    rerank(&mut ranked);

    for player in banned.iter_mut() {
        player.global_points = global_points(&player.assignments);
        player.overall_rank = None;
    }

    debug!(
        "Ranked {} players ({} banned excluded)",
        ranked.len(),
        banned.len()
    );

    ranked.extend(banned);
    ranked
}
