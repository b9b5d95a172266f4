//! Outcome resolution for a battery played into a slot.
//!
//! A draw from the slot's range is added to the acting side's water and
//! the total is clamped to `[0, water_limit]`. Negative draws lower water
//! and are good for the actor; the classification is reporting only.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, GameState, RandomSource, SlotType, TurnOwner};

/// How a resolved outcome reads from the actor's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// Water went down.
    Good,
    /// Water went up.
    Bad,
    Neutral,
}

impl OutcomeKind {
    /// Classify a raw draw.
    #[must_use]
    pub fn classify(delta: i32) -> Self {
        match delta.signum() {
            -1 => OutcomeKind::Good,
            1 => OutcomeKind::Bad,
            _ => OutcomeKind::Neutral,
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::Good => write!(f, "GOOD"),
            OutcomeKind::Bad => write!(f, "BAD"),
            OutcomeKind::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// One resolved action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub side: TurnOwner,
    pub slot: SlotType,
    /// Raw draw, before clamping.
    pub delta: i32,
    /// Side's water after the draw was applied and clamped.
    pub water_after: i32,
    pub kind: OutcomeKind,
}

/// Draw a raw outcome for `slot`.
pub fn roll_outcome<R: RandomSource>(rng: &mut R, config: &EngineConfig, slot: SlotType) -> i32 {
    rng.gen_range(config.slot_ranges.range_for(slot))
}

/// Add `delta` to `water` and clamp to `[0, limit]`.
#[must_use]
pub fn apply_delta(water: i32, delta: i32, limit: i32) -> i32 {
    water.saturating_add(delta).clamp(0, limit)
}

/// Resolve `side` playing into `slot`, mutating that side's water.
pub fn resolve_action<R: RandomSource>(
    state: &mut GameState,
    side: TurnOwner,
    slot: SlotType,
    config: &EngineConfig,
    rng: &mut R,
) -> ActionOutcome {
    let delta = roll_outcome(rng, config, slot);
    let water = state.water_mut(side);
    *water = apply_delta(*water, delta, config.water_limit);

    let outcome = ActionOutcome {
        side,
        slot,
        delta,
        water_after: *water,
        kind: OutcomeKind::classify(delta),
    };

    info!(
        "[{}] {} outcome ({:+}) on {} slot. New water: {}",
        side, outcome.kind, delta, slot, outcome.water_after
    );

    outcome
}
