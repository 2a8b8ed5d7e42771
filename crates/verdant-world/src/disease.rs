//! Leaf disease: onset, daily progression, leaf loss, and contagion.
//!
//! Diseases start on a single healthy leaf when an infestation escalates.
//! Once present, every diseased leaf worsens each day regardless of whether
//! the pest is still around:
//!
//! 1. Progress rises by a draw in `[5, 15)`, capped at 100.
//! 2. At 50 or more the plant loses `progress / 20` health and the day is
//!    flagged for a contagion roll.
//! 3. At 100 the plant loses a further 10 health and the leaf drops off.
//!    Only one leaf can drop per day; the scan stops there.
//!
//! A flagged day rolls once for contagion. On success a random healthy leaf
//! catches the disease of the first diseased leaf on the stem.

use tracing::{debug, info};
use verdant_types::{Disease, LeafId, PERCENT_CAP, Pest, PlantState};

use crate::dice::Dice;
use crate::leaves;

/// Progress a leaf starts at when a disease first appears.
pub const ONSET_PROGRESS: u32 = 10;

/// Progress a leaf starts at when it catches a disease from another leaf.
pub const CONTAGION_PROGRESS: u32 = 5;

/// Progress at which a disease starts costing health and can spread.
pub const SEVERE_PROGRESS: u32 = 50;

/// Divisor turning a severe leaf's progress into daily health loss.
pub const SEVERITY_DIVISOR: u32 = 20;

/// Percentage chance that a severe day spreads the disease.
pub const CONTAGION_CHANCE: u32 = 30;

/// Smallest daily progression step (inclusive).
pub const PROGRESS_STEP_MIN: u32 = 5;

/// Largest daily progression step (exclusive).
pub const PROGRESS_STEP_MAX: u32 = 15;

/// Extra health lost when a leaf is consumed by disease.
pub const LEAF_LOSS_PENALTY: u32 = 10;

/// The disease a pest leaves behind.
pub const fn disease_for(pest: Pest) -> Disease {
    match pest {
        Pest::Aphids => Disease::LeafSpot,
        Pest::Mites => Disease::PowderyMildew,
        Pest::Fungus => Disease::RootRot,
    }
}

/// What the disease step did on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseReport {
    /// Health lost to severe leaves and leaf loss.
    pub health_lost: u32,
    /// The leaf that dropped off, if one reached full progress.
    pub lost_leaf: Option<LeafId>,
    /// The leaf newly infected by contagion, if any.
    pub contagion: Option<LeafId>,
}

/// Ids of every leaf not carrying a disease, in stem order.
fn healthy_leaf_ids(state: &PlantState) -> Vec<LeafId> {
    state
        .leaves
        .iter()
        .filter(|leaf| !leaf.is_diseased())
        .map(|leaf| leaf.id)
        .collect()
}

/// Infect one randomly chosen healthy leaf with `disease` at `progress`.
fn infect_random_healthy(
    state: &mut PlantState,
    disease: Disease,
    progress: u32,
    dice: &mut dyn Dice,
) -> Option<LeafId> {
    let healthy = healthy_leaf_ids(state);
    if healthy.is_empty() {
        return None;
    }
    let target = *healthy.get(dice.index(healthy.len()))?;
    let leaf = state.leaves.iter_mut().find(|leaf| leaf.id == target)?;
    leaf.infect(disease, progress);
    Some(target)
}

/// Start a disease on a random healthy leaf, typed by the active pest.
///
/// Does nothing (and draws nothing) without an active pest or a healthy leaf.
pub fn onset(state: &mut PlantState, dice: &mut dyn Dice) -> Option<LeafId> {
    let disease = disease_for(state.pest?);
    let id = infect_random_healthy(state, disease, ONSET_PROGRESS, dice)?;
    info!(%id, ?disease, "Disease appeared on leaf");
    Some(id)
}

/// Advance every diseased leaf by one day, then roll for contagion.
pub fn progress_daily(state: &mut PlantState, dice: &mut dyn Dice) -> DiseaseReport {
    let mut report = DiseaseReport::default();
    let mut severe = false;

    for leaf in state.leaves.iter_mut().filter(|leaf| leaf.is_diseased()) {
        let step = dice.between(PROGRESS_STEP_MIN, PROGRESS_STEP_MAX);
        leaf.disease_progress = leaf.disease_progress.saturating_add(step).min(PERCENT_CAP);

        if leaf.disease_progress >= SEVERE_PROGRESS {
            let penalty = leaf.disease_progress.checked_div(SEVERITY_DIVISOR).unwrap_or(0);
            report.health_lost = report.health_lost.saturating_add(penalty);
            severe = true;
        }

        if leaf.disease_progress >= PERCENT_CAP {
            report.health_lost = report.health_lost.saturating_add(LEAF_LOSS_PENALTY);
            report.lost_leaf = Some(leaf.id);
            break;
        }
    }

    state.harm(report.health_lost);

    if let Some(id) = report.lost_leaf {
        leaves::remove_leaf(state, id);
        info!(%id, "Leaf lost to disease");
    }

    if severe {
        let roll = dice.percent();
        if roll < CONTAGION_CHANCE {
            report.contagion = spread(state, dice);
        } else {
            debug!(roll, "Contagion roll failed");
        }
    }

    report
}

/// Spread the first diseased leaf's disease to a random healthy leaf.
fn spread(state: &mut PlantState, dice: &mut dyn Dice) -> Option<LeafId> {
    let disease = state.leaves.iter().find_map(|leaf| leaf.disease)?;
    let id = infect_random_healthy(state, disease, CONTAGION_PROGRESS, dice)?;
    info!(%id, ?disease, "Disease spread to leaf");
    Some(id)
}

#[cfg(test)]
mod tests {
    use verdant_types::{Leaf, LeafPosition};

    use super::*;
    use crate::dice::ScriptedDice;

    fn plant_with_leaves(count: u32) -> PlantState {
        PlantState {
            leaves: (1..=count)
                .map(|id| Leaf::healthy(LeafId(id), LeafPosition::Bottom))
                .collect(),
            ..PlantState::default()
        }
    }

    fn diseased(state: &mut PlantState, id: u32, disease: Disease, progress: u32) {
        if let Some(leaf) = state.leaves.iter_mut().find(|leaf| leaf.id == LeafId(id)) {
            leaf.infect(disease, progress);
        }
    }

    #[test]
    fn pest_maps_to_disease() {
        assert_eq!(disease_for(Pest::Aphids), Disease::LeafSpot);
        assert_eq!(disease_for(Pest::Mites), Disease::PowderyMildew);
        assert_eq!(disease_for(Pest::Fungus), Disease::RootRot);
    }

    #[test]
    fn several_severe_leaves_share_one_contagion_roll() {
        let mut state = plant_with_leaves(3);
        diseased(&mut state, 1, Disease::LeafSpot, 50);
        diseased(&mut state, 2, Disease::LeafSpot, 60);
        // Steps +10 and +10, one failed contagion roll, then a spare value.
        let mut dice = ScriptedDice::new([10, 10, 99, 0]);
        let report = progress_daily(&mut state, &mut dice);

        // 60 / 20 + 70 / 20 = 3 + 3.
        assert_eq!(report.health_lost, 6);
        assert_eq!(state.health, 94);
        assert_eq!(report.contagion, None);
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn onset_requires_pest() {
        let mut state = plant_with_leaves(3);
        let mut dice = ScriptedDice::new([1]);
        assert_eq!(onset(&mut state, &mut dice), None);
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn onset_infects_chosen_healthy_leaf() {
        let mut state = plant_with_leaves(3);
        state.pest = Some(Pest::Mites);
        diseased(&mut state, 1, Disease::PowderyMildew, 20);
        // Healthy leaves are [2, 3]; index 1 picks leaf 3.
        let mut dice = ScriptedDice::new([1]);
        assert_eq!(onset(&mut state, &mut dice), Some(LeafId(3)));
        let leaf = state.leaf(LeafId(3));
        assert_eq!(leaf.and_then(|l| l.disease), Some(Disease::PowderyMildew));
        assert_eq!(leaf.map(|l| l.disease_progress), Some(ONSET_PROGRESS));
    }

    #[test]
    fn onset_without_healthy_leaves_is_noop() {
        let mut state = plant_with_leaves(1);
        state.pest = Some(Pest::Aphids);
        diseased(&mut state, 1, Disease::LeafSpot, 30);
        let mut dice = ScriptedDice::default();
        assert_eq!(onset(&mut state, &mut dice), None);
    }

    #[test]
    fn severe_leaf_costs_health_without_removal() {
        let mut state = plant_with_leaves(1);
        diseased(&mut state, 1, Disease::LeafSpot, 45);
        // Step +10, then contagion roll 99 fails.
        let mut dice = ScriptedDice::new([10, 99]);
        let report = progress_daily(&mut state, &mut dice);
        assert_eq!(state.leaf(LeafId(1)).map(|l| l.disease_progress), Some(55));
        assert_eq!(state.health, 98);
        assert_eq!(report.health_lost, 2);
        assert_eq!(report.lost_leaf, None);
        assert_eq!(report.contagion, None);
    }

    #[test]
    fn mild_leaf_draws_no_contagion_roll() {
        let mut state = plant_with_leaves(2);
        diseased(&mut state, 1, Disease::LeafSpot, 10);
        let mut dice = ScriptedDice::new([5, 0]);
        let report = progress_daily(&mut state, &mut dice);
        assert_eq!(report.health_lost, 0);
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn full_progress_drops_leaf_and_stops_scan() {
        let mut state = plant_with_leaves(3);
        diseased(&mut state, 1, Disease::RootRot, 95);
        diseased(&mut state, 2, Disease::RootRot, 40);
        // Leaf 1 +10 -> 100: 5 severity + 10 loss. Leaf 2 is not advanced.
        // Contagion roll 50 fails.
        let mut dice = ScriptedDice::new([10, 50]);
        let report = progress_daily(&mut state, &mut dice);
        assert_eq!(report.lost_leaf, Some(LeafId(1)));
        assert_eq!(report.health_lost, 15);
        assert_eq!(state.health, 85);
        assert!(state.leaf(LeafId(1)).is_none());
        assert_eq!(state.leaf(LeafId(2)).map(|l| l.disease_progress), Some(40));
    }

    #[test]
    fn contagion_uses_first_diseased_leaf_type() {
        let mut state = plant_with_leaves(4);
        diseased(&mut state, 1, Disease::LeafSpot, 10);
        diseased(&mut state, 2, Disease::RootRot, 60);
        // Steps: leaf 1 +5, leaf 2 +5 (severe). Roll 10 spreads, target index 0 -> leaf 3.
        let mut dice = ScriptedDice::new([5, 5, 10, 0]);
        let report = progress_daily(&mut state, &mut dice);
        assert_eq!(report.contagion, Some(LeafId(3)));
        let leaf = state.leaf(LeafId(3));
        assert_eq!(leaf.and_then(|l| l.disease), Some(Disease::LeafSpot));
        assert_eq!(leaf.map(|l| l.disease_progress), Some(CONTAGION_PROGRESS));
    }

    #[test]
    fn contagion_with_no_healthy_leaf_is_noop() {
        let mut state = plant_with_leaves(1);
        diseased(&mut state, 1, Disease::LeafSpot, 60);
        let mut dice = ScriptedDice::new([5, 0]);
        let report = progress_daily(&mut state, &mut dice);
        assert_eq!(report.contagion, None);
        assert_eq!(state.leaves.len(), 1);
    }
}
