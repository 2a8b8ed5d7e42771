//! Headless harness for the Verdant plant simulation.
//!
//! Loads `verdant-config.yaml` (defaults when absent), initializes
//! structured logging, then lets the caretaker autopilot tend a garden
//! day by day until the plant flowers, dies, or the configured day bound
//! is reached. The final snapshot is printed to stdout as JSON.
//!
//! # Startup Sequence
//!
//! 1. Load configuration
//! 2. Initialize structured logging (tracing)
//! 3. Create the garden and its day worker
//! 4. Run the caretaker loop
//! 5. Print the final snapshot

mod caretaker;
mod error;

use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use verdant_core::config::LoggingConfig;
use verdant_core::{Garden, GardenConfig};
use verdant_types::GrowthStage;

use crate::caretaker::Caretaker;
use crate::error::RunnerError;

/// Name of the optional configuration file in the working directory.
const CONFIG_FILE: &str = "verdant-config.yaml";

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    Flowered,
    Died,
    DayLimit,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or invalid, or if the
/// final report cannot be serialized.
#[tokio::main]
async fn main() -> Result<(), RunnerError> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("verdant-runner starting");
    info!(
        from_file,
        seed = ?config.garden.seed,
        max_days = config.simulation.max_days,
        "Configuration loaded"
    );

    // 3. Create the garden.
    let mut garden = Garden::new(&config.garden);
    let caretaker = Caretaker::new(config.caretaker.clone());

    // 4. Run the caretaker loop.
    for _ in 0..config.simulation.max_days {
        if garden.plant().stage == GrowthStage::Flowering {
            break;
        }
        let actions = caretaker.tend(&mut garden);
        let Some(summary) = garden.run_day().await else {
            warn!("Day did not complete, stopping run");
            break;
        };
        info!(
            day = summary.day,
            weather = ?summary.weather,
            health = summary.health,
            growth = summary.growth_gained,
            money = garden.plant().money,
            actions,
            events = summary.events.len(),
            "Day complete"
        );
        if summary.died {
            break;
        }
    }

    let outcome = outcome_of(&garden);
    let plant = garden.plant();
    info!(
        ?outcome,
        days = plant.days_passed,
        stage = ?plant.stage,
        health = plant.health,
        money = plant.money,
        "Run finished"
    );

    // 5. Print the final snapshot.
    println!("{}", serde_json::to_string_pretty(&garden.snapshot())?);
    Ok(())
}

/// Load configuration from [`CONFIG_FILE`], falling back to defaults.
///
/// The second value reports whether the file was found.
fn load_config() -> Result<(GardenConfig, bool), RunnerError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        Ok((GardenConfig::from_file(config_path)?, true))
    } else {
        Ok((GardenConfig::default(), false))
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn outcome_of(garden: &Garden) -> RunOutcome {
    if garden.snapshot().is_game_over() {
        RunOutcome::Died
    } else if garden.plant().stage == GrowthStage::Flowering {
        RunOutcome::Flowered
    } else {
        RunOutcome::DayLimit
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use verdant_core::config::GardenSettings;
    use verdant_types::PlantState;
    use verdant_world::ScriptedDice;

    use super::*;

    #[tokio::test]
    async fn outcome_reflects_final_state() {
        let garden = Garden::new(&GardenSettings { seed: Some(3) });
        assert_eq!(outcome_of(&garden), RunOutcome::DayLimit);

        let flowering = PlantState {
            stage: GrowthStage::Flowering,
            ..PlantState::default()
        };
        let garden = Garden::with_dice(flowering, ScriptedDice::default());
        assert_eq!(outcome_of(&garden), RunOutcome::Flowered);
    }

    #[tokio::test]
    async fn caretaker_never_overspends_during_a_seeded_run() {
        let mut garden = Garden::new(&GardenSettings { seed: Some(11) });
        let caretaker = Caretaker::new(GardenConfig::default().caretaker);
        for _ in 0..40 {
            let planned: u32 = caretaker
                .plan(garden.plant())
                .into_iter()
                .map(verdant_core::economy::price)
                .sum();
            assert!(planned <= garden.plant().money);
            caretaker.tend(&mut garden);
            let Some(summary) = garden.run_day().await else {
                break;
            };
            if summary.died {
                break;
            }
        }
        assert!(garden.plant().days_passed >= 1);
    }
}
