//! Enumeration types for the Verdant simulation.
//!
//! Declaration order is significant for [`Weather`] (it indexes the
//! transition table) and for [`GrowthStage`] (stages only move forward).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Daily weather over the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Weather {
    /// Best growth, heaviest water loss.
    Sunny,
    /// Dampened growth.
    Cloudy,
    /// Refills water.
    Rainy,
    /// Refills water but batters the plant.
    Stormy,
    /// Scorches the plant and dries the soil fast.
    Drought,
}

impl Weather {
    /// Every weather state in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Sunny,
        Self::Cloudy,
        Self::Rainy,
        Self::Stormy,
        Self::Drought,
    ];
}

// ---------------------------------------------------------------------------
// Pests & diseases
// ---------------------------------------------------------------------------

/// An insect or fungal infestation. Absence is `Option::None` on the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Pest {
    /// Sap-sucking insects; mild damage.
    Aphids,
    /// Spider mites; moderate damage.
    Mites,
    /// Soil fungus; heavy damage.
    Fungus,
}

impl Pest {
    /// Every pest that can arrive, in the order onset picks from.
    pub const ALL: [Self; 3] = [Self::Aphids, Self::Mites, Self::Fungus];
}

/// A leaf disease. A healthy leaf carries no disease at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Disease {
    /// Spotting spread by aphids.
    LeafSpot,
    /// White coating spread by mites.
    PowderyMildew,
    /// Rot carried up from fungal soil.
    RootRot,
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// Maturity of the plant. Only ever advances, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum GrowthStage {
    /// Freshly planted, no leaves.
    Seed,
    /// First shoots.
    Sprout,
    /// Leafing out.
    Young,
    /// Full foliage.
    Mature,
    /// Final stage.
    Flowering,
}

impl GrowthStage {
    /// Every stage in growth order.
    pub const ALL: [Self; 5] = [
        Self::Seed,
        Self::Sprout,
        Self::Young,
        Self::Mature,
        Self::Flowering,
    ];

    /// The stage that follows this one, or `None` at [`GrowthStage::Flowering`].
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Seed => Some(Self::Sprout),
            Self::Sprout => Some(Self::Young),
            Self::Young => Some(Self::Mature),
            Self::Mature => Some(Self::Flowering),
            Self::Flowering => None,
        }
    }
}

/// Where on the stem a leaf grew. Fixed when the leaf sprouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum LeafPosition {
    /// Lowest third of the stage's leaf capacity.
    Bottom,
    /// Middle third.
    Middle,
    /// Upper third.
    Top,
}

// ---------------------------------------------------------------------------
// Game phase
// ---------------------------------------------------------------------------

/// Gating state of the engine.
///
/// `Processing` serializes mutation while a day is simulated in the
/// background; `Ended` halts everything except a reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum GamePhase {
    /// Accepting actions and day advances.
    #[default]
    Idle,
    /// A day is being simulated; actions are rejected.
    Processing,
    /// The plant died; only a reset is accepted.
    Ended,
}
