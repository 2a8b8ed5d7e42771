//! The game state machine: gating, player actions, and the day worker.
//!
//! ```text
//!            advance_day            day completes (alive)
//!   Idle ─────────────────> Processing ─────────────────> Idle
//!    ^                          │
//!    │ reset_game               │ day completes (health 0)
//!    │                          v
//!    └─────────────────────── Ended
//! ```
//!
//! Player actions mutate the plant synchronously and are ignored unless the
//! garden is `Idle`. `advance_day` hands a copy of the plant to a background
//! worker task that owns the dice and runs the tick pipeline. The
//! foreground plant is not touched until the worker's result is collected
//! with [`Garden::finish_day`] or [`Garden::poll_day`], at which point the
//! whole day becomes visible at once and the gate clears.

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};
use verdant_types::{GamePhase, LeafId, PlantSnapshot, PlantState};
use verdant_world::{Dice, SeededDice};

use crate::actions::{self, CareAction};
use crate::config::GardenSettings;
use crate::tick::{self, DaySummary};

/// A day handed to the worker.
#[derive(Debug)]
struct DayJob {
    plant: PlantState,
    reply: oneshot::Sender<DayOutcome>,
}

/// The worker's answer for one day.
#[derive(Debug)]
struct DayOutcome {
    plant: PlantState,
    summary: DaySummary,
}

/// Spawn the background worker that simulates days with `dice`.
///
/// The worker lives until every sender is dropped.
fn spawn_worker(mut dice: Box<dyn Dice + Send>) -> mpsc::Sender<DayJob> {
    let (jobs, mut inbox) = mpsc::channel::<DayJob>(1);
    tokio::spawn(async move {
        while let Some(DayJob { mut plant, reply }) = inbox.recv().await {
            let summary = tick::run_day(&mut plant, dice.as_mut());
            if reply.send(DayOutcome { plant, summary }).is_err() {
                debug!("Garden dropped before the day was collected");
            }
        }
        debug!("Day worker stopped");
    });
    jobs
}

/// A single plant and everything that may act on it.
///
/// Must be created inside a Tokio runtime: construction spawns the day worker.
#[derive(Debug)]
pub struct Garden {
    plant: PlantState,
    phase: GamePhase,
    worker: mpsc::Sender<DayJob>,
    pending: Option<oneshot::Receiver<DayOutcome>>,
    updates: watch::Sender<PlantSnapshot>,
}

impl Garden {
    /// Create a fresh garden whose dice follow `settings.seed`.
    pub fn new(settings: &GardenSettings) -> Self {
        let dice = settings
            .seed
            .map_or_else(SeededDice::from_entropy, SeededDice::from_seed);
        Self::with_dice(PlantState::default(), dice)
    }

    /// Create a garden from an existing plant and an explicit dice source.
    pub fn with_dice(plant: PlantState, dice: impl Dice + Send + 'static) -> Self {
        let (updates, _) = watch::channel(PlantSnapshot {
            plant: plant.clone(),
            phase: GamePhase::Idle,
        });
        Self {
            plant,
            phase: GamePhase::Idle,
            worker: spawn_worker(Box::new(dice)),
            pending: None,
            updates,
        }
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// The plant as of the last completed action or day.
    pub const fn plant(&self) -> &PlantState {
        &self.plant
    }

    /// Current gating phase.
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Copy of the current observable state.
    pub fn snapshot(&self) -> PlantSnapshot {
        PlantSnapshot {
            plant: self.plant.clone(),
            phase: self.phase,
        }
    }

    /// Receive a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<PlantSnapshot> {
        self.updates.subscribe()
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }

    // -----------------------------------------------------------------------
    // Player actions
    // -----------------------------------------------------------------------

    /// Water the plant: +15 water, 2 coins.
    pub fn water_plant(&mut self) {
        self.perform(CareAction::Water);
    }

    /// Feed the plant: +25 nutrients, 5 coins.
    pub fn add_nutrients(&mut self) {
        self.perform(CareAction::Feed);
    }

    /// Warm or cool by 2 degrees for 3 coins.
    pub fn adjust_temperature(&mut self, increase: bool) {
        self.perform(CareAction::AdjustTemperature { increase });
    }

    /// Spray pesticide if infested: clears the pest, 5 health, 10 coins.
    pub fn treat_pests(&mut self) {
        self.perform(CareAction::TreatPests);
    }

    /// Cut a diseased leaf: 2 growth points, 5 coins. Healthy or unknown leaves are left alone.
    pub fn cut_diseased_leaf(&mut self, id: LeafId) {
        self.perform(CareAction::CutLeaf(id));
    }

    /// Apply a care action if the garden is idle.
    ///
    /// Returns whether the action changed the plant.
    pub fn perform(&mut self, action: CareAction) -> bool {
        if self.phase != GamePhase::Idle {
            debug!(?action, phase = ?self.phase, "Action ignored while gated");
            return false;
        }
        let applied = actions::apply(&mut self.plant, action);
        if applied {
            debug!(?action, money = self.plant.money, "Action applied");
            self.publish();
        } else {
            debug!(?action, "Action had nothing to act on");
        }
        applied
    }

    // -----------------------------------------------------------------------
    // Days
    // -----------------------------------------------------------------------

    /// Hand the next day to the worker. Ignored unless idle.
    pub fn advance_day(&mut self) {
        if self.phase != GamePhase::Idle {
            debug!(phase = ?self.phase, "Day advance ignored while gated");
            return;
        }

        let (reply, outcome) = oneshot::channel();
        let job = DayJob {
            plant: self.plant.clone(),
            reply,
        };
        if let Err(err) = self.worker.try_send(job) {
            warn!(error = %err, "Day worker unavailable, day not started");
            return;
        }

        self.pending = Some(outcome);
        self.phase = GamePhase::Processing;
        debug!(day = self.plant.days_passed, "Day dispatched");
        self.publish();
    }

    /// Collect the in-flight day if it has finished, without waiting.
    pub fn poll_day(&mut self) -> Option<DaySummary> {
        let receiver = self.pending.as_mut()?;
        match receiver.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                Some(self.complete(outcome))
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                self.abandon();
                None
            }
        }
    }

    /// Wait for the in-flight day and apply it.
    ///
    /// Returns `None` if no day was in flight. Dropping the future before it
    /// resolves leaves the day in flight, to be collected by a later call.
    pub async fn finish_day(&mut self) -> Option<DaySummary> {
        let receiver = self.pending.as_mut()?;
        let delivered = receiver.await;
        self.pending = None;
        if let Ok(outcome) = delivered {
            Some(self.complete(outcome))
        } else {
            self.abandon();
            None
        }
    }

    /// Advance one day and wait for it to complete.
    pub async fn run_day(&mut self) -> Option<DaySummary> {
        self.advance_day();
        self.finish_day().await
    }

    fn complete(&mut self, outcome: DayOutcome) -> DaySummary {
        let DayOutcome { plant, summary } = outcome;
        self.plant = plant;
        self.phase = if summary.died {
            GamePhase::Ended
        } else {
            GamePhase::Idle
        };
        if summary.died {
            info!(day = summary.day, "Game over");
        }
        self.publish();
        summary
    }

    fn abandon(&mut self) {
        warn!("Day worker stopped before finishing the day; state unchanged");
        self.phase = GamePhase::Idle;
        self.publish();
    }

    /// Restore a fresh plant. Ignored only while a day is processing.
    pub fn reset_game(&mut self) {
        if self.phase == GamePhase::Processing {
            debug!("Reset ignored while a day is processing");
            return;
        }
        self.plant = PlantState::default();
        self.phase = GamePhase::Idle;
        info!("Game reset");
        self.publish();
    }
}
