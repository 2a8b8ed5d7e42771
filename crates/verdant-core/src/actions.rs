//! Player care actions.
//!
//! Each action mutates the plant immediately and charges its price. Actions
//! that have nothing to act on (no pest to treat, no such diseased leaf)
//! change nothing and cost nothing. Gating is the caller's concern; see
//! [`Garden`](crate::garden::Garden).

use serde::{Deserialize, Serialize};
use verdant_types::{LeafId, PlantState};
use verdant_world::{leaves, pests};

use crate::economy;

/// Water added per watering.
pub const WATER_AMOUNT: u32 = 15;

/// Nutrients added per feeding.
pub const NUTRIENT_AMOUNT: u32 = 25;

/// Degrees Celsius moved per temperature adjustment.
pub const TEMPERATURE_STEP: i32 = 2;

/// Health lost to pesticide side effects.
pub const PESTICIDE_HEALTH_LOSS: u32 = 5;

/// Growth points lost when a leaf is cut.
pub const LEAF_CUT_GROWTH_LOSS: u32 = 2;

/// A discrete player action on the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareAction {
    /// Water the soil.
    Water,
    /// Add nutrients to the soil.
    Feed,
    /// Raise or lower the temperature by one step.
    AdjustTemperature {
        /// `true` to warm, `false` to cool.
        increase: bool,
    },
    /// Spray pesticide.
    TreatPests,
    /// Cut off a diseased leaf.
    CutLeaf(LeafId),
}

/// Apply `action` to the plant. Returns `false` if it had nothing to act on.
pub fn apply(state: &mut PlantState, action: CareAction) -> bool {
    match action {
        CareAction::Water => state.raise_water(WATER_AMOUNT),
        CareAction::Feed => state.raise_nutrients(NUTRIENT_AMOUNT),
        CareAction::AdjustTemperature { increase } => {
            let step = if increase {
                TEMPERATURE_STEP
            } else {
                TEMPERATURE_STEP.saturating_neg()
            };
            state.temperature = state.temperature.saturating_add(step);
        }
        CareAction::TreatPests => {
            if !pests::eradicate(state) {
                return false;
            }
            state.harm(PESTICIDE_HEALTH_LOSS);
        }
        CareAction::CutLeaf(id) => {
            if !state.leaf(id).is_some_and(|leaf| leaf.is_diseased()) {
                return false;
            }
            leaves::remove_leaf(state, id);
            state.lose_growth(LEAF_CUT_GROWTH_LOSS);
        }
    }
    economy::charge(state, action);
    true
}
