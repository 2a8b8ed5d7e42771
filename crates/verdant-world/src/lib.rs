//! Environment and leaf-level systems for the Verdant plant simulation.
//!
//! Everything in this crate operates on a borrowed [`PlantState`] and draws
//! randomness through the [`Dice`] seam, so the same state and the same
//! sequence of draws always produce the same outcome.
//!
//! # Modules
//!
//! - [`dice`] -- The [`Dice`] randomness seam with seeded and scripted sources.
//! - [`environment`] -- Markov-chain weather table, weather effects, and daily soil decay.
//! - [`pests`] -- Infestation onset, daily pest damage, and disease escalation.
//! - [`disease`] -- Disease onset, per-leaf progression, leaf loss, and contagion.
//! - [`leaves`] -- Leaf capacity per stage, sprouting, and removal.
//!
//! [`PlantState`]: verdant_types::PlantState

pub mod dice;
pub mod disease;
pub mod environment;
pub mod leaves;
pub mod pests;

// Re-export primary types at crate root.
pub use dice::{Dice, ScriptedDice, SeededDice};
pub use disease::DiseaseReport;
pub use environment::{WEATHER_TABLE, WeatherTable};
pub use pests::PestReport;
