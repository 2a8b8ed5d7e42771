//! Core entity structs for the Verdant simulation.
//!
//! [`PlantState`] is the single mutable aggregate the engine owns. Every
//! percentage field is kept inside `[0, PERCENT_CAP]` by the mutation
//! helpers on this type, and money never drops below zero because it is
//! unsigned and only ever reduced with saturating subtraction.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Disease, GamePhase, GrowthStage, LeafPosition, Pest, Weather};
use crate::ids::LeafId;

/// Upper bound of every percentage field (water, nutrients, health, disease progress).
pub const PERCENT_CAP: u32 = 100;

/// Lowest temperature of the optimal band, in degrees Celsius.
pub const OPTIMAL_TEMPERATURE_MIN: i32 = 18;

/// Highest temperature of the optimal band, in degrees Celsius.
pub const OPTIMAL_TEMPERATURE_MAX: i32 = 28;

// ---------------------------------------------------------------------------
// Leaf
// ---------------------------------------------------------------------------

/// A single leaf on the plant.
///
/// `disease` is `None` exactly when the leaf is healthy, so a leaf can never
/// be flagged diseased without a disease type or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Leaf {
    /// Unique, monotonically assigned id.
    pub id: LeafId,
    /// The disease this leaf carries, if any.
    pub disease: Option<Disease>,
    /// How far the disease has progressed, `0..=100`.
    pub disease_progress: u32,
    /// Position on the stem, fixed at creation.
    pub position: LeafPosition,
}

impl Leaf {
    /// Create a healthy leaf.
    pub const fn healthy(id: LeafId, position: LeafPosition) -> Self {
        Self {
            id,
            disease: None,
            disease_progress: 0,
            position,
        }
    }

    /// Whether the leaf carries a disease.
    pub const fn is_diseased(&self) -> bool {
        self.disease.is_some()
    }

    /// Infect the leaf with `disease` at the given starting progress.
    pub fn infect(&mut self, disease: Disease, progress: u32) {
        self.disease = Some(disease);
        self.disease_progress = progress.min(PERCENT_CAP);
    }
}

// ---------------------------------------------------------------------------
// PlantState
// ---------------------------------------------------------------------------

/// The full mutable state of the simulated plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlantState {
    /// Soil water, `0..=100`.
    pub water_level: u32,
    /// Soil nutrients, `0..=100`.
    pub nutrient_level: u32,
    /// Plant health, `0..=100`. Zero at the end of a day kills the plant.
    pub health: u32,
    /// Air temperature in degrees Celsius. Unbounded.
    pub temperature: i32,
    /// Accumulated growth points.
    pub growth_points: u32,
    /// Number of completed days.
    pub days_passed: u32,
    /// Coins available for care actions.
    pub money: u32,
    /// Current growth stage.
    pub stage: GrowthStage,
    /// Today's weather.
    pub weather: Weather,
    /// The active infestation, if any.
    pub pest: Option<Pest>,
    /// Days the current infestation has been active. Zero without a pest.
    pub infestation_days: u32,
    /// Leaves in creation order (which is also id order).
    pub leaves: Vec<Leaf>,
}

impl Default for PlantState {
    fn default() -> Self {
        Self {
            water_level: 50,
            nutrient_level: 50,
            health: 100,
            temperature: 25,
            growth_points: 0,
            days_passed: 0,
            money: 100,
            stage: GrowthStage::Seed,
            weather: Weather::Sunny,
            pest: None,
            infestation_days: 0,
            leaves: Vec::new(),
        }
    }
}

impl PlantState {
    /// Whether a pest is currently infesting the plant.
    pub const fn has_pest(&self) -> bool {
        self.pest.is_some()
    }

    /// Remove the active pest and reset the infestation counter.
    pub const fn clear_pest(&mut self) {
        self.pest = None;
        self.infestation_days = 0;
    }

    /// Whether the temperature is inside the optimal band (inclusive).
    pub const fn has_optimal_temperature(&self) -> bool {
        self.temperature >= OPTIMAL_TEMPERATURE_MIN && self.temperature <= OPTIMAL_TEMPERATURE_MAX
    }

    /// Add water, capped at [`PERCENT_CAP`].
    pub fn raise_water(&mut self, amount: u32) {
        self.water_level = self.water_level.saturating_add(amount).min(PERCENT_CAP);
    }

    /// Remove water, floored at zero.
    pub const fn lower_water(&mut self, amount: u32) {
        self.water_level = self.water_level.saturating_sub(amount);
    }

    /// Add nutrients, capped at [`PERCENT_CAP`].
    pub fn raise_nutrients(&mut self, amount: u32) {
        self.nutrient_level = self.nutrient_level.saturating_add(amount).min(PERCENT_CAP);
    }

    /// Remove nutrients, floored at zero.
    pub const fn lower_nutrients(&mut self, amount: u32) {
        self.nutrient_level = self.nutrient_level.saturating_sub(amount);
    }

    /// Restore health, capped at [`PERCENT_CAP`].
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(PERCENT_CAP);
    }

    /// Damage health, floored at zero.
    pub const fn harm(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Add coins.
    pub const fn earn(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Remove coins, floored at zero. Never refuses.
    pub const fn spend(&mut self, amount: u32) {
        self.money = self.money.saturating_sub(amount);
    }

    /// Remove growth points, floored at zero.
    pub const fn lose_growth(&mut self, amount: u32) {
        self.growth_points = self.growth_points.saturating_sub(amount);
    }

    /// Look up a leaf by id.
    pub fn leaf(&self, id: LeafId) -> Option<&Leaf> {
        self.leaves.iter().find(|leaf| leaf.id == id)
    }

    /// Number of leaves currently carrying a disease.
    pub fn diseased_leaf_count(&self) -> usize {
        self.leaves.iter().filter(|leaf| leaf.is_diseased()).count()
    }
}

// ---------------------------------------------------------------------------
// PlantSnapshot
// ---------------------------------------------------------------------------

/// Read-only view of the engine published to observers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlantSnapshot {
    /// The plant as of the last completed action or day.
    pub plant: PlantState,
    /// The engine's gating state.
    pub phase: GamePhase,
}

impl PlantSnapshot {
    /// Whether the plant has died and the game awaits a reset.
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Whether a day is currently being simulated.
    pub fn is_processing(&self) -> bool {
        self.phase == GamePhase::Processing
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_fresh_game() {
        let state = PlantState::default();
        assert_eq!(state.water_level, 50);
        assert_eq!(state.nutrient_level, 50);
        assert_eq!(state.temperature, 25);
        assert_eq!(state.stage, GrowthStage::Seed);
        assert_eq!(state.growth_points, 0);
        assert_eq!(state.days_passed, 0);
        assert_eq!(state.health, 100);
        assert_eq!(state.weather, Weather::Sunny);
        assert_eq!(state.pest, None);
        assert_eq!(state.money, 100);
        assert!(state.leaves.is_empty());
    }

    #[test]
    fn percentage_helpers_clamp() {
        let mut state = PlantState::default();
        state.raise_water(80);
        assert_eq!(state.water_level, 100);
        state.lower_water(250);
        assert_eq!(state.water_level, 0);
        state.harm(150);
        assert_eq!(state.health, 0);
        state.heal(500);
        assert_eq!(state.health, 100);
        state.raise_nutrients(51);
        assert_eq!(state.nutrient_level, 100);
    }

    #[test]
    fn spend_floors_at_zero() {
        let mut state = PlantState {
            money: 3,
            ..PlantState::default()
        };
        state.spend(5);
        assert_eq!(state.money, 0);
    }

    #[test]
    fn optimal_band_is_inclusive() {
        let mut state = PlantState::default();
        for (temperature, expected) in [(17, false), (18, true), (28, true), (29, false)] {
            state.temperature = temperature;
            assert_eq!(state.has_optimal_temperature(), expected, "{temperature}");
        }
    }

    #[test]
    fn infect_caps_progress() {
        let mut leaf = Leaf::healthy(LeafId::FIRST, LeafPosition::Bottom);
        assert!(!leaf.is_diseased());
        leaf.infect(Disease::RootRot, 140);
        assert!(leaf.is_diseased());
        assert_eq!(leaf.disease_progress, 100);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = PlantSnapshot {
            plant: PlantState::default(),
            phase: GamePhase::Ended,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PlantSnapshot = serde_json::from_str(&json).unwrap();
        assert!(back.is_game_over());
        assert!(!back.is_processing());
    }
}
