//! Pest infestations: onset, daily damage, and escalation into disease.
//!
//! A clean plant rolls each day for a new infestation. An infested plant
//! instead takes damage by pest type (health in full, nutrients at half)
//! and counts the days. From the third day of an infestation onward, each
//! day also rolls for the pest to leave a disease on a healthy leaf.

use tracing::{debug, info};
use verdant_types::{LeafId, Pest, PlantState};

use crate::dice::Dice;
use crate::disease;

/// Percentage chance per day that a clean plant becomes infested.
pub const PEST_ONSET_CHANCE: u32 = 15;

/// Infestation length (in days) after which disease can break out.
pub const ESCALATION_AFTER_DAYS: u32 = 3;

/// Percentage chance per day that a long infestation starts a disease.
pub const DISEASE_ESCALATION_CHANCE: u32 = 40;

/// Health lost per day to an active pest. Nutrients lose half of this.
pub const fn daily_damage(pest: Pest) -> u32 {
    match pest {
        Pest::Aphids => 5,
        Pest::Mites => 8,
        Pest::Fungus => 12,
    }
}

/// What the pest step did on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PestReport {
    /// The pest that arrived today, if any.
    pub arrived: Option<Pest>,
    /// Health lost to an established pest.
    pub health_lost: u32,
    /// The leaf a disease broke out on, if the infestation escalated.
    pub disease_onset: Option<LeafId>,
}

/// Run the pest step for one day.
pub fn apply_daily(state: &mut PlantState, dice: &mut dyn Dice) -> PestReport {
    let Some(pest) = state.pest else {
        return roll_onset(state, dice);
    };

    let damage = daily_damage(pest);
    state.harm(damage);
    state.lower_nutrients(damage.checked_div(2).unwrap_or(0));
    state.infestation_days = state.infestation_days.saturating_add(1);
    debug!(?pest, damage, days = state.infestation_days, "Pest damage applied");

    let mut report = PestReport {
        arrived: None,
        health_lost: damage,
        disease_onset: None,
    };

    if state.infestation_days >= ESCALATION_AFTER_DAYS {
        let roll = dice.percent();
        if roll < DISEASE_ESCALATION_CHANCE {
            report.disease_onset = disease::onset(state, dice);
        }
    }

    report
}

/// Roll for a new infestation on a clean plant.
fn roll_onset(state: &mut PlantState, dice: &mut dyn Dice) -> PestReport {
    let roll = dice.percent();
    if roll >= PEST_ONSET_CHANCE {
        return PestReport::default();
    }

    let pest = Pest::ALL
        .get(dice.index(Pest::ALL.len()))
        .copied()
        .unwrap_or(Pest::Aphids);
    state.pest = Some(pest);
    state.infestation_days = 0;
    info!(?pest, "Pests arrived");

    PestReport {
        arrived: Some(pest),
        ..PestReport::default()
    }
}

/// Remove an active infestation. Returns `false` if there was none.
pub const fn eradicate(state: &mut PlantState) -> bool {
    if state.pest.is_none() {
        return false;
    }
    state.clear_pest();
    true
}
