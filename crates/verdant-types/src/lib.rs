//! Shared type definitions for the Verdant plant simulation.
//!
//! This crate is the single source of truth for the data the engine owns
//! and the presentation layer reads. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` so a UI can bind to the same shapes.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe leaf identifier
//! - [`enums`] -- Weather, pests, diseases, growth stages, leaf positions, game phase
//! - [`structs`] -- [`PlantState`], [`Leaf`], and the observer [`PlantSnapshot`]

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Disease, GamePhase, GrowthStage, LeafPosition, Pest, Weather};
pub use ids::LeafId;
pub use structs::{Leaf, PERCENT_CAP, PlantSnapshot, PlantState};

#[cfg(test)]
mod tests {
    //! Binding generation for the presentation layer.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::ids::LeafId::export_all();
        let _ = crate::enums::Weather::export_all();
        let _ = crate::enums::Pest::export_all();
        let _ = crate::enums::Disease::export_all();
        let _ = crate::enums::GrowthStage::export_all();
        let _ = crate::enums::LeafPosition::export_all();
        let _ = crate::enums::GamePhase::export_all();
        let _ = crate::structs::Leaf::export_all();
        let _ = crate::structs::PlantState::export_all();
        let _ = crate::structs::PlantSnapshot::export_all();
    }
}
