//! Game rules: outcome resolution, rejection reasons, and the turn engine.
//!
//! `TurnEngine` is the only type that mutates `GameState`. Callers feed it
//! clicks and read state, results, and the event history back.

pub mod outcome;
pub mod error;
pub mod engine;

pub use outcome::{apply_delta, resolve_action, roll_outcome, ActionOutcome, OutcomeKind};
pub use error::Rejection;
pub use engine::{GameResult, Transition, TurnEngine};
