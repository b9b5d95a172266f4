//! Core game types: vocabulary, state, configuration, RNG, events.
//!
//! Nothing here decides turn order. The rules live in `crate::rules`.

pub mod types;
pub mod rng;
pub mod config;
pub mod state;
pub mod event;

pub use types::{BatteryType, GamePhase, ItemId, SlotType, TurnOwner};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::{ConfigError, EngineConfig, SlotRanges};
pub use state::{BatteryInventory, GameState, StateSnapshot};
pub use event::{ClickEvent, GameEvent};
