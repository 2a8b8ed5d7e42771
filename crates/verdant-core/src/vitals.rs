//! Daily health mechanics outside weather, pests, and disease.
//!
//! - Temperature stress: 2 health per degree outside the optimal band,
//!   capped at 10 per day.
//! - Regeneration: +5 health (capped at 100) when water > 40, nutrients
//!   > 30, the temperature is optimal, and no pest is present.

use verdant_types::PlantState;
use verdant_types::structs::{OPTIMAL_TEMPERATURE_MAX, OPTIMAL_TEMPERATURE_MIN};

/// Health lost per degree outside the optimal band.
pub const STRESS_PER_DEGREE: u32 = 2;

/// Maximum health lost to temperature stress in one day.
pub const MAX_TEMPERATURE_STRESS: u32 = 10;

/// Health restored on a day with good conditions.
pub const REGENERATION: u32 = 5;

/// Water the plant must exceed to regenerate.
pub const REGEN_MIN_WATER: u32 = 40;

/// Nutrients the plant must exceed to regenerate.
pub const REGEN_MIN_NUTRIENTS: u32 = 30;

/// Degrees the temperature sits outside the optimal band (0 inside it).
pub const fn degrees_outside_band(temperature: i32) -> u32 {
    if temperature < OPTIMAL_TEMPERATURE_MIN {
        OPTIMAL_TEMPERATURE_MIN.abs_diff(temperature)
    } else if temperature > OPTIMAL_TEMPERATURE_MAX {
        temperature.abs_diff(OPTIMAL_TEMPERATURE_MAX)
    } else {
        0
    }
}

/// Health the plant would lose today to temperature stress.
pub fn temperature_stress(temperature: i32) -> u32 {
    degrees_outside_band(temperature)
        .saturating_mul(STRESS_PER_DEGREE)
        .min(MAX_TEMPERATURE_STRESS)
}

/// Apply temperature stress. Returns the health lost.
pub fn apply_temperature_stress(state: &mut PlantState) -> u32 {
    let stress = temperature_stress(state.temperature);
    state.harm(stress);
    stress
}

/// Whether today's conditions let the plant heal.
pub const fn can_regenerate(state: &PlantState) -> bool {
    state.water_level > REGEN_MIN_WATER
        && state.nutrient_level > REGEN_MIN_NUTRIENTS
        && state.has_optimal_temperature()
        && !state.has_pest()
}

/// Heal the plant if conditions allow. Returns whether it healed.
pub fn apply_regeneration(state: &mut PlantState) -> bool {
    if !can_regenerate(state) {
        return false;
    }
    state.heal(REGENERATION);
    true
}
