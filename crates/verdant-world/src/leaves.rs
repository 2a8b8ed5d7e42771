//! Leaf population: capacity per stage, sprouting, and removal.
//!
//! A leaf sprouts on a day that ends with a positive multiple of
//! [`LEAF_SPAWN_INTERVAL`] growth points, provided the current stage still
//! has room. Its position is bucketed by its index against thirds of the
//! stage's capacity and never recomputed afterwards.

use tracing::debug;
use verdant_types::{GrowthStage, Leaf, LeafId, LeafPosition, PlantState};

/// Growth-point interval at which a new leaf may sprout.
pub const LEAF_SPAWN_INTERVAL: u32 = 15;

/// Maximum number of leaves the plant can carry at a stage.
pub const fn leaf_cap(stage: GrowthStage) -> usize {
    match stage {
        GrowthStage::Seed => 0,
        GrowthStage::Sprout => 2,
        GrowthStage::Young => 5,
        GrowthStage::Mature => 8,
        GrowthStage::Flowering => 12,
    }
}

/// The id the next leaf will receive: highest live id plus one, or 1.
pub fn next_leaf_id(leaves: &[Leaf]) -> LeafId {
    leaves
        .iter()
        .map(|leaf| leaf.id)
        .max()
        .map_or(LeafId::FIRST, LeafId::next)
}

/// Position bucket for a leaf at `index` (0-based) given the stage's `cap`.
///
/// Below one third of the cap is the bottom, below two thirds the middle,
/// anything higher the top.
pub const fn position_for(index: usize, cap: usize) -> LeafPosition {
    let scaled = index.saturating_mul(3);
    if scaled < cap {
        LeafPosition::Bottom
    } else if scaled < cap.saturating_mul(2) {
        LeafPosition::Middle
    } else {
        LeafPosition::Top
    }
}

/// Sprout a new leaf if today's growth total and the stage allow it.
///
/// Returns the id of the new leaf.
pub fn try_sprout(state: &mut PlantState) -> Option<LeafId> {
    if state.growth_points == 0 || state.growth_points % LEAF_SPAWN_INTERVAL != 0 {
        return None;
    }
    let cap = leaf_cap(state.stage);
    let index = state.leaves.len();
    if index >= cap {
        return None;
    }

    let id = next_leaf_id(&state.leaves);
    let position = position_for(index, cap);
    state.leaves.push(Leaf::healthy(id, position));
    debug!(%id, ?position, stage = ?state.stage, "Leaf sprouted");
    Some(id)
}

/// Remove a leaf by id, returning it if it existed.
pub fn remove_leaf(state: &mut PlantState, id: LeafId) -> Option<Leaf> {
    let position = state.leaves.iter().position(|leaf| leaf.id == id)?;
    Some(state.leaves.remove(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(stage: GrowthStage, growth_points: u32, leaves: u32) -> PlantState {
        let mut state = PlantState {
            stage,
            growth_points,
            ..PlantState::default()
        };
        for id in 1..=leaves {
            state
                .leaves
                .push(Leaf::healthy(LeafId(id), LeafPosition::Bottom));
        }
        state
    }

    #[test]
    fn caps_grow_with_stage() {
        let caps: Vec<usize> = GrowthStage::ALL.into_iter().map(leaf_cap).collect();
        assert_eq!(caps, vec![0, 2, 5, 8, 12]);
    }

    #[test]
    fn first_leaf_is_one_then_max_plus_one() {
        assert_eq!(next_leaf_id(&[]), LeafId(1));
        let leaves = vec![
            Leaf::healthy(LeafId(2), LeafPosition::Bottom),
            Leaf::healthy(LeafId(5), LeafPosition::Middle),
        ];
        assert_eq!(next_leaf_id(&leaves), LeafId(6));
    }

    #[test]
    fn positions_split_cap_in_thirds() {
        // Flowering cap 12: indices 0-3 bottom, 4-7 middle, 8-11 top.
        assert_eq!(position_for(3, 12), LeafPosition::Bottom);
        assert_eq!(position_for(4, 12), LeafPosition::Middle);
        assert_eq!(position_for(7, 12), LeafPosition::Middle);
        assert_eq!(position_for(8, 12), LeafPosition::Top);
        // Sprout cap 2: index 0 bottom, index 1 middle.
        assert_eq!(position_for(0, 2), LeafPosition::Bottom);
        assert_eq!(position_for(1, 2), LeafPosition::Middle);
        // Young cap 5: 0-1 bottom, 2-3 middle, 4 top.
        assert_eq!(position_for(1, 5), LeafPosition::Bottom);
        assert_eq!(position_for(2, 5), LeafPosition::Middle);
        assert_eq!(position_for(3, 5), LeafPosition::Middle);
        assert_eq!(position_for(4, 5), LeafPosition::Top);
    }

    #[test]
    fn sprouts_on_multiple_of_fifteen() {
        let mut state = state_with(GrowthStage::Sprout, 30, 0);
        assert_eq!(try_sprout(&mut state), Some(LeafId(1)));
        assert_eq!(state.leaves.len(), 1);
    }

    #[test]
    fn no_sprout_off_interval_or_at_zero() {
        let mut state = state_with(GrowthStage::Young, 31, 0);
        assert_eq!(try_sprout(&mut state), None);
        state.growth_points = 0;
        assert_eq!(try_sprout(&mut state), None);
    }

    #[test]
    fn no_sprout_at_cap_or_as_seed() {
        let mut full = state_with(GrowthStage::Sprout, 45, 2);
        assert_eq!(try_sprout(&mut full), None);
        let mut seed = state_with(GrowthStage::Seed, 15, 0);
        assert_eq!(try_sprout(&mut seed), None);
    }

    #[test]
    fn remove_leaf_by_id() {
        let mut state = state_with(GrowthStage::Young, 0, 3);
        let removed = remove_leaf(&mut state, LeafId(2));
        assert_eq!(removed.map(|leaf| leaf.id), Some(LeafId(2)));
        assert_eq!(state.leaves.len(), 2);
        assert!(remove_leaf(&mut state, LeafId(2)).is_none());
    }
}
