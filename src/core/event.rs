//! Inbound click events and the outbound event history.
//!
//! ## Inbound
//!
//! The input layer resolves a click to one of three typed events. The
//! engine matches them exhaustively in `TurnEngine::dispatch`.
//!
//! ## Outbound
//!
//! Every accepted state change appends a `GameEvent` to the engine's
//! history. Rejected inputs append nothing.

use serde::{Deserialize, Serialize};

use super::types::{BatteryType, ItemId, SlotType};
use crate::rules::{ActionOutcome, GameResult};

/// A click resolved to the object it hit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickEvent {
    BatteryClicked(BatteryType),
    SlotClicked(SlotType),
    ItemClicked(ItemId),
}

/// Record of one accepted state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Engine reset to the starting configuration.
    NewGame,

    /// Player picked a battery and is now choosing a slot.
    BatterySelected(BatteryType),

    /// A battery left the player's inventory.
    BatteryConsumed(BatteryType),

    /// One side's action was resolved.
    ActionResolved(ActionOutcome),

    /// A new player turn began and a battery was granted.
    TurnStarted {
        turn_number: u32,
        granted: BatteryType,
    },

    /// An item click was acknowledged. Items have no effect yet.
    ItemAcknowledged(ItemId),

    /// The game reached a terminal state.
    GameOver(GameResult),
}
