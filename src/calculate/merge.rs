//! Merging the skill assessment roster into the main roster.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rank_roster;
use crate::models::{normalize_name, Device, GameMode, Player, Region, SkillAssessment, TierAssignment};

/// The mode assessment results are written into.
pub const ASSESSMENT_MODE: GameMode = GameMode::Skywars;

/// Defaults for players synthesized from unmatched assessments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeOptions {
    #[serde(default)]
    pub default_region: Region,

    #[serde(default)]
    pub default_device: Device,
}

/// Merge players and skill assessments into one ranked roster.
///
/// A player matches an assessment when its in-game name or platform username
/// equals the assessment username, ignoring case and surrounding whitespace.
/// Matched players get the assessment as their skywars assignment; unmatched
/// assessments become synthetic players. Synthetic players already present in
/// `players` are dropped first, so they are never counted twice.
pub fn merge(
    players: Vec<Player>,
    assessments: &[SkillAssessment],
    options: &MergeOptions,
) -> Vec<Player> {
    // Later records win, as with an upsert keyed by username.
    let mut index: HashMap<String, usize> = HashMap::with_capacity(assessments.len());
    for (i, assessment) in assessments.iter().enumerate() {
        if index.insert(assessment.key(), i).is_some() {
            warn!(
                "Duplicate skill assessment for {:?}, keeping the latest",
                assessment.username
            );
        }
    }

    let before = players.len();
    let mut merged: Vec<Player> = players.into_iter().filter(|p| !p.synthetic).collect();
    if merged.len() != before {
        debug!(
            "Dropped {} previously synthesized players",
            before - merged.len()
        );
    }

    let mut matched = vec![false; assessments.len()];
    for player in merged.iter_mut() {
        // In-game name first, then platform username. Every hit is consumed
        // so none of them can come back as a synthetic player.
        let mut hits: Vec<usize> = std::iter::once(player.name.as_str())
            .chain(player.platform_username.as_deref())
            .filter_map(|name| index.get(&normalize_name(name)).copied())
            .collect();
        hits.dedup();
        for &i in &hits {
            matched[i] = true;
        }
        if hits.len() > 1 {
            warn!(
                "{} matches {} skill assessments, using {:?}",
                player.name,
                hits.len(),
                assessments[hits[0]].username
            );
        }

        if let Some(&i) = hits.first() {
            let assessment = &assessments[i];
            player.set_assignment(assessment_assignment(assessment));
            debug!(
                "Attached {} assessment to {}",
                assessment.tier, player.name
            );
        }
    }

    let mut synthesized = 0;
    for (i, assessment) in assessments.iter().enumerate() {
        if index.get(&assessment.key()) != Some(&i) || matched[i] {
            continue;
        }

        let mut player = Player::synthetic(
            assessment.username.clone(),
            options.default_region,
            options.default_device,
        );
        player.set_assignment(assessment_assignment(assessment));
        merged.push(player);
        synthesized += 1;
    }

    debug!(
        "Merged {} assessments ({} synthesized players)",
        index.len(),
        synthesized
    );

    rank_roster(merged)
}

fn assessment_assignment(assessment: &SkillAssessment) -> TierAssignment {
    TierAssignment::new(
        ASSESSMENT_MODE,
        assessment.tier.to_tier(),
        assessment.overall_score,
    )
}
