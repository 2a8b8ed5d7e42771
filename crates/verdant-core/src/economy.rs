//! Coins: care action prices and stage-based daily income.
//!
//! The ledger never refuses an action for lack of funds. Prices are
//! deducted with a floor at zero and affordability is left to the caller.

use verdant_types::{GrowthStage, PlantState};

use crate::actions::CareAction;

/// Coins charged for watering.
pub const WATER_COST: u32 = 2;

/// Coins charged for a dose of nutrients.
pub const NUTRIENT_COST: u32 = 5;

/// Coins charged for a temperature adjustment.
pub const TEMPERATURE_COST: u32 = 3;

/// Coins charged for pesticide.
pub const PEST_TREATMENT_COST: u32 = 10;

/// Coins charged for cutting a diseased leaf.
pub const LEAF_CUT_COST: u32 = 5;

/// Price of a care action.
pub const fn price(action: CareAction) -> u32 {
    match action {
        CareAction::Water => WATER_COST,
        CareAction::Feed => NUTRIENT_COST,
        CareAction::AdjustTemperature { .. } => TEMPERATURE_COST,
        CareAction::TreatPests => PEST_TREATMENT_COST,
        CareAction::CutLeaf(_) => LEAF_CUT_COST,
    }
}

/// Coins earned at the end of each day at a stage.
pub const fn daily_income(stage: GrowthStage) -> u32 {
    match stage {
        GrowthStage::Seed => 0,
        GrowthStage::Sprout => 3,
        GrowthStage::Young => 6,
        GrowthStage::Mature => 10,
        GrowthStage::Flowering => 15,
    }
}

/// Charge the price of `action`, floored at zero.
pub const fn charge(state: &mut PlantState, action: CareAction) {
    state.spend(price(action));
}

/// Pay out today's income for the plant's current stage.
pub const fn collect_income(state: &mut PlantState) -> u32 {
    let income = daily_income(state.stage);
    state.earn(income);
    income
}
