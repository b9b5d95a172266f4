//! # water-level
//!
//! Turn engine for a two-player battery minigame. Each side has a water
//! level; reaching the limit (100 by default) loses.
//!
//! ## Turn Structure
//!
//! 1. The player picks a battery they own.
//! 2. The player commits it to a Low, Medium or High slot. A draw from the
//!    slot's range is added to the player's water.
//! 3. The enemy plays a uniformly random slot against its own water.
//! 4. The player is granted a fresh `Default` battery and the next turn
//!    begins.
//!
//! Win/lose is checked after every water change. Both sides reaching the
//! limit in one check is a draw.
//!
//! ## Design Principles
//!
//! 1. **Owned, not global**: callers construct a `TurnEngine` and pass it
//!    by reference to whatever dispatches input.
//!
//! 2. **Injectable randomness**: every draw goes through `RandomSource`.
//!    `GameRng` replays from a seed, `ScriptedRng` from a fixed list.
//!
//! 3. **Rejections are values**: mistimed clicks return a `Rejection` and
//!    change nothing.
//!
//! ## Modules
//!
//! - `core`: Vocabulary, state, configuration, RNG, events
//! - `rules`: Outcome resolution and the turn engine
//!
//! ```
//! use water_level::{BatteryType, ScriptedRng, SlotType, TurnEngine};
//!
//! // player draws +20 on High; enemy picks Low and draws -10
//! let mut engine = TurnEngine::new(ScriptedRng::new([20, 0, -10]));
//! engine.on_battery_clicked(BatteryType::Default).unwrap();
//! engine.on_slot_clicked(SlotType::High).unwrap();
//!
//! assert_eq!(engine.state().player_water, 20);
//! assert_eq!(engine.state().enemy_water, 0);
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BatteryType, SlotType, TurnOwner, GamePhase, ItemId,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    EngineConfig, SlotRanges, ConfigError,
    GameState, BatteryInventory, StateSnapshot,
    ClickEvent, GameEvent,
};

pub use crate::rules::{
    TurnEngine, Transition, GameResult, Rejection,
    ActionOutcome, OutcomeKind,
};
