//! Tier point lookup and aggregation.

use crate::models::{Tier, TierAssignment};

/// Points awarded for a tier.
pub fn points(tier: Tier) -> u32 {
    tier.points()
}

/// Points for a raw tier label. Unknown labels are worth 0.
pub fn points_for_label(label: &str) -> u32 {
    label.parse::<Tier>().map(Tier::points).unwrap_or(0)
}

/// Sum of tier points over a player's assignments.
///
/// Duplicate modes are summed as given; deduplication belongs to the store.
pub fn global_points(assignments: &[TierAssignment]) -> u32 {
    assignments.iter().map(TierAssignment::points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameMode;

    fn assignment(tier: Tier) -> TierAssignment {
        TierAssignment::new(GameMode::Sword, tier, 0.0)
    }

    #[test]
    fn test_points_is_stable() {
        for tier in Tier::ALL {
            assert_eq!(points(tier), points(tier));
        }
        assert_eq!(points(Tier::NotRanked), 0);
        assert_eq!(points(Tier::Retired), 0);
    }

    #[test]
    fn test_points_for_label() {
        assert_eq!(points_for_label("HT1"), 65);
        assert_eq!(points_for_label("lt5"), 1);
        assert_eq!(points_for_label("Not Ranked"), 0);
        assert_eq!(points_for_label("Retired"), 0);
    }

    #[test]
    fn test_points_for_unknown_label_is_zero() {
        assert_eq!(points_for_label(""), 0);
        assert_eq!(points_for_label("HT7"), 0);
        assert_eq!(points_for_label("MT2"), 0);
        assert_eq!(points_for_label("garbage"), 0);
    }

    #[test]
    fn test_global_points_empty() {
        assert_eq!(global_points(&[]), 0);
    }

    #[test]
    fn test_global_points_sum() {
        let assignments = vec![
            TierAssignment::new(GameMode::Sword, Tier::HT1, 0.0),
            TierAssignment::new(GameMode::Crystal, Tier::LT1, 0.0),
        ];
        assert_eq!(global_points(&assignments), 115);
    }

    #[test]
    fn test_global_points_order_insensitive() {
        let mut assignments: Vec<TierAssignment> = [
            Tier::HT1,
            Tier::LT3,
            Tier::Retired,
            Tier::HT5,
            Tier::LT2,
        ]
        .into_iter()
        .map(assignment)
        .collect();
        let expected = global_points(&assignments);
        assert_eq!(expected, 65 + 6 + 2 + 20);

        for _ in 0..assignments.len() {
            assignments.rotate_left(1);
            assert_eq!(global_points(&assignments), expected);
        }
        assignments.reverse();
        assert_eq!(global_points(&assignments), expected);
        assignments.swap(0, 3);
        assert_eq!(global_points(&assignments), expected);
    }

    #[test]
    fn test_global_points_keeps_duplicates() {
        let assignments = vec![assignment(Tier::HT3), assignment(Tier::HT3)];
        assert_eq!(global_points(&assignments), 20);
    }
}
