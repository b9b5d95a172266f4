//! Reasons an input was ignored.
//!
//! A rejection is an idle response to a mistimed or invalid click, not a
//! failure. State is never modified when one is returned.

use thiserror::Error;

use crate::core::{BatteryType, GamePhase};

/// Why the engine ignored an input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("game is over")]
    GameOver,

    #[error("not the player's turn")]
    NotPlayerTurn,

    #[error("expected phase {expected}, currently {actual}")]
    WrongPhase { expected: GamePhase, actual: GamePhase },

    #[error("player has no {0} battery available")]
    BatteryNotOwned(BatteryType),

    #[error("no battery selected yet; choose a battery first")]
    NoBatterySelected,
}
