//! Growth, economy, daily tick, and game state machine for Verdant.
//!
//! This crate turns the leaf-level systems of `verdant-world` into a
//! playable engine: the fixed-order daily pipeline, the care actions a
//! player can take, and the [`Garden`] that gates both.
//!
//! # Modules
//!
//! - [`actions`] -- [`CareAction`] and its immediate effects.
//! - [`config`] -- Configuration loading from `verdant-config.yaml`.
//! - [`economy`] -- Action prices and stage-based daily income.
//! - [`garden`] -- The [`Garden`] state machine and its background day worker.
//! - [`growth`] -- Growth eligibility, multipliers, and stage advancement.
//! - [`tick`] -- The daily pipeline and its [`DaySummary`].
//! - [`vitals`] -- Temperature stress and health regeneration.
//!
//! [`CareAction`]: actions::CareAction
//! [`Garden`]: garden::Garden
//! [`DaySummary`]: tick::DaySummary

pub mod actions;
pub mod config;
pub mod economy;
pub mod garden;
pub mod growth;
pub mod tick;
pub mod vitals;

pub use actions::CareAction;
pub use config::{ConfigError, GardenConfig};
pub use garden::Garden;
pub use tick::{DayEvent, DaySummary};
