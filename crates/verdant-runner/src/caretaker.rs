//! Rule-based caretaker that tends the plant before each day.
//!
//! The core never refuses an action for lack of coins, so the caretaker
//! keeps its own running budget and skips anything it cannot pay for.
//! Rules are checked in priority order and each fires at most once a day:
//!
//! 1. Spray pesticide when infested.
//! 2. Cut the worst diseased leaf at or above the cut threshold.
//! 3. Water below the water threshold.
//! 4. Feed below the nutrient threshold.
//! 5. Nudge the temperature back toward the optimal band.

use tracing::debug;
use verdant_core::config::CaretakerConfig;
use verdant_core::{CareAction, Garden, economy};
use verdant_types::PlantState;
use verdant_types::structs::{OPTIMAL_TEMPERATURE_MAX, OPTIMAL_TEMPERATURE_MIN};

/// Deterministic autopilot driven by [`CaretakerConfig`] thresholds.
#[derive(Debug, Clone)]
pub struct Caretaker {
    config: CaretakerConfig,
}

impl Caretaker {
    /// Create a caretaker with the given thresholds.
    pub const fn new(config: CaretakerConfig) -> Self {
        Self { config }
    }

    /// Decide today's actions for `plant`, in the order they should run.
    pub fn plan(&self, plant: &PlantState) -> Vec<CareAction> {
        let mut budget = plant.money;
        let mut actions = Vec::new();
        let mut consider = |action: CareAction| {
            let cost = economy::price(action);
            if cost <= budget {
                budget = budget.saturating_sub(cost);
                actions.push(action);
            } else {
                debug!(?action, cost, budget, "Caretaker cannot afford action");
            }
        };

        if self.config.treat_pests && plant.has_pest() {
            consider(CareAction::TreatPests);
        }

        let worst = plant
            .leaves
            .iter()
            .filter(|leaf| {
                leaf.is_diseased() && leaf.disease_progress >= self.config.cut_at_progress
            })
            .max_by_key(|leaf| leaf.disease_progress);
        if let Some(leaf) = worst {
            consider(CareAction::CutLeaf(leaf.id));
        }

        if plant.water_level < self.config.water_below {
            consider(CareAction::Water);
        }

        if plant.nutrient_level < self.config.nutrients_below {
            consider(CareAction::Feed);
        }

        if plant.temperature < OPTIMAL_TEMPERATURE_MIN {
            consider(CareAction::AdjustTemperature { increase: true });
        } else if plant.temperature > OPTIMAL_TEMPERATURE_MAX {
            consider(CareAction::AdjustTemperature { increase: false });
        }

        actions
    }

    /// Plan and perform today's actions. Returns how many were applied.
    pub fn tend(&self, garden: &mut Garden) -> usize {
        self.plan(garden.plant())
            .into_iter()
            .filter(|action| garden.perform(*action))
            .count()
    }
}
