//! Daily tick: the fixed-order pipeline that advances the plant one day.
//!
//! Each step observes every mutation made by the steps before it:
//!
//! 1. **Weather** -- sample tomorrow's weather from today's, apply its effects.
//! 2. **Pests** -- onset roll, or damage plus disease escalation.
//! 3. **Disease** -- per-leaf progression, leaf loss, contagion.
//! 4. **Soil** -- water and nutrient decay by weather.
//! 5. **Temperature** -- stress outside the optimal band.
//! 6. **Growth** -- growth points and stage advancement.
//! 7. **Income** -- coins for the current stage.
//! 8. **Regeneration** -- heal under good conditions.
//! 9. **Leaves** -- sprout a leaf on growth milestones.
//! 10. **Death check** -- zero health ends the game.
//! 11. **Calendar** -- increment the day counter.
//!
//! Random draws happen in this order: weather, pest onset, pest type,
//! escalation roll, onset target, per-leaf progression, contagion roll,
//! contagion target. Given the same state and draws, a day is fully
//! deterministic.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use verdant_types::{GrowthStage, LeafId, Pest, PlantState, Weather};
use verdant_world::environment::{self, WEATHER_TABLE};
use verdant_world::{Dice, disease, leaves, pests};

use crate::{economy, growth, vitals};

/// Something noteworthy that happened during a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayEvent {
    /// A pest infestation began.
    PestsArrived(Pest),
    /// A pest left a disease on a leaf.
    DiseaseOnset(LeafId),
    /// A leaf was consumed by disease and dropped off.
    LeafLost(LeafId),
    /// Disease spread to another leaf.
    Contagion(LeafId),
    /// The plant entered a new stage.
    StageAdvanced(GrowthStage),
    /// A new leaf sprouted.
    LeafSprouted(LeafId),
    /// Health reached zero.
    PlantDied,
}

/// Summary of a single day's execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The day number just completed (1 for the first day).
    pub day: u32,
    /// The weather during this day.
    pub weather: Weather,
    /// Growth points gained.
    pub growth_gained: u32,
    /// Coins earned.
    pub income: u32,
    /// Health at the end of the day.
    pub health: u32,
    /// Whether the plant died this day.
    pub died: bool,
    /// Noteworthy events, in pipeline order.
    pub events: Vec<DayEvent>,
}

/// Run one full day on `state`, drawing randomness from `dice`.
pub fn run_day(state: &mut PlantState, dice: &mut dyn Dice) -> DaySummary {
    let mut events = Vec::new();

    // 1. Weather
    let weather = WEATHER_TABLE.sample(state.weather, dice.percent());
    debug!(from = ?state.weather, to = ?weather, "Weather sampled");
    state.weather = weather;
    environment::apply_weather_effects(state);

    // 2. Pests
    let pest = pests::apply_daily(state, dice);
    events.extend(pest.arrived.map(DayEvent::PestsArrived));
    events.extend(pest.disease_onset.map(DayEvent::DiseaseOnset));

    // 3. Disease
    let sickness = disease::progress_daily(state, dice);
    events.extend(sickness.lost_leaf.map(DayEvent::LeafLost));
    events.extend(sickness.contagion.map(DayEvent::Contagion));

    // 4. Soil
    environment::apply_soil_decay(state);

    // 5. Temperature
    let stress = vitals::apply_temperature_stress(state);
    if stress > 0 {
        debug!(stress, temperature = state.temperature, "Temperature stress");
    }

    // 6. Growth
    let grown = growth::apply_growth(state);
    events.extend(grown.advanced_to.map(DayEvent::StageAdvanced));

    // 7. Income
    let income = economy::collect_income(state);

    // 8. Regeneration
    vitals::apply_regeneration(state);

    // 9. Leaves
    events.extend(leaves::try_sprout(state).map(DayEvent::LeafSprouted));

    // 10. Death check
    let died = state.health == 0;
    if died {
        events.push(DayEvent::PlantDied);
    }

    // 11. Calendar
    state.days_passed = state.days_passed.saturating_add(1);

    if died {
        info!(day = state.days_passed, ?weather, "Plant died");
    } else {
        info!(
            day = state.days_passed,
            ?weather,
            health = state.health,
            water = state.water_level,
            nutrients = state.nutrient_level,
            growth = state.growth_points,
            stage = ?state.stage,
            money = state.money,
            leaves = state.leaves.len(),
            "Day completed"
        );
    }

    DaySummary {
        day: state.days_passed,
        weather,
        growth_gained: grown.gained,
        income,
        health: state.health,
        died,
        events,
    }
}
