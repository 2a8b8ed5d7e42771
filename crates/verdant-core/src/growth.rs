//! Daily growth and stage advancement.
//!
//! Growth only happens on a day the plant is healthy (> 50), watered (> 20),
//! and fed (> 15). The base amount keeps integer-floor semantics:
//!
//! ```text
//! base = water / 25 + nutrients / 30
//! ```
//!
//! It is then scaled by the weather, temperature, pest, and disease
//! multipliers (in that order) as an exact decimal and truncated toward
//! zero before being added to the plant's growth points.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::info;
use verdant_types::{GrowthStage, PlantState, Weather};

/// Health the plant must exceed to grow.
pub const MIN_HEALTH_FOR_GROWTH: u32 = 50;

/// Water the plant must exceed to grow.
pub const MIN_WATER_FOR_GROWTH: u32 = 20;

/// Nutrients the plant must exceed to grow.
pub const MIN_NUTRIENTS_FOR_GROWTH: u32 = 15;

/// Growth points needed to leave a stage. `None` for the final stage.
pub const fn growth_threshold(stage: GrowthStage) -> Option<u32> {
    match stage {
        GrowthStage::Seed => Some(10),
        GrowthStage::Sprout => Some(30),
        GrowthStage::Young => Some(60),
        GrowthStage::Mature => Some(100),
        GrowthStage::Flowering => None,
    }
}

/// `n / 10` as an exact decimal, usable in const context.
const fn tenths(n: u32) -> Decimal {
    Decimal::from_parts(n, 0, 0, false, 1)
}

/// Multiplier for sunshine and for an optimal temperature.
const BOOST: Decimal = tenths(12);

/// Multiplier for an infestation, a storm, and a fully diseased canopy.
const HALF: Decimal = tenths(5);

/// Growth multiplier for the day's weather.
pub const fn weather_multiplier(weather: Weather) -> Decimal {
    match weather {
        Weather::Sunny => BOOST,
        Weather::Cloudy => tenths(8),
        Weather::Rainy => Decimal::ONE,
        Weather::Stormy => HALF,
        Weather::Drought => tenths(3),
    }
}

/// Growth multiplier for the plant's temperature.
pub const fn temperature_multiplier(state: &PlantState) -> Decimal {
    if state.has_optimal_temperature() {
        BOOST
    } else {
        tenths(7)
    }
}

/// Growth multiplier for an active infestation.
pub const fn pest_multiplier(state: &PlantState) -> Decimal {
    if state.has_pest() {
        HALF
    } else {
        Decimal::ONE
    }
}

/// Growth multiplier for diseased foliage: `1 - 0.5 * diseased / total`.
///
/// A plant without leaves is unaffected.
pub fn disease_multiplier(state: &PlantState) -> Decimal {
    let total = state.leaves.len();
    if total == 0 {
        return Decimal::ONE;
    }
    let diseased = Decimal::from(state.diseased_leaf_count());
    let ratio = diseased
        .checked_div(Decimal::from(total))
        .unwrap_or(Decimal::ZERO);
    let penalty = ratio
        .checked_mul(HALF)
        .unwrap_or(Decimal::ZERO);
    Decimal::ONE.checked_sub(penalty).unwrap_or(Decimal::ONE)
}

/// Whether the plant's condition allows growth today.
pub const fn is_eligible(state: &PlantState) -> bool {
    state.health > MIN_HEALTH_FOR_GROWTH
        && state.water_level > MIN_WATER_FOR_GROWTH
        && state.nutrient_level > MIN_NUTRIENTS_FOR_GROWTH
}

/// Unscaled growth from soil levels, with integer floors.
pub const fn base_amount(state: &PlantState) -> u32 {
    (state.water_level / 25).saturating_add(state.nutrient_level / 30)
}

/// Growth points the plant would gain today.
pub fn daily_growth(state: &PlantState) -> u32 {
    if !is_eligible(state) {
        return 0;
    }
    [
        weather_multiplier(state.weather),
        temperature_multiplier(state),
        pest_multiplier(state),
        disease_multiplier(state),
    ]
    .into_iter()
    .try_fold(Decimal::from(base_amount(state)), Decimal::checked_mul)
    .and_then(|amount| amount.trunc().to_u32())
    .unwrap_or(0)
}

/// Outcome of the growth step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthReport {
    /// Growth points added today.
    pub gained: u32,
    /// The stage entered today, if the plant advanced.
    pub advanced_to: Option<GrowthStage>,
}

/// Add today's growth and advance at most one stage.
pub fn apply_growth(state: &mut PlantState) -> GrowthReport {
    let gained = daily_growth(state);
    state.growth_points = state.growth_points.saturating_add(gained);

    let advanced_to = match (growth_threshold(state.stage), state.stage.next()) {
        (Some(threshold), Some(next)) if state.growth_points >= threshold => {
            info!(from = ?state.stage, to = ?next, growth = state.growth_points, "Stage advanced");
            state.stage = next;
            Some(next)
        }
        _ => None,
    };

    GrowthReport {
        gained,
        advanced_to,
    }
}
