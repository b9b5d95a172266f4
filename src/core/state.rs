//! Game state: water totals, inventories, turn and phase.
//!
//! ## GameState
//!
//! The single mutable aggregate of a game. Only `TurnEngine` mutates it;
//! callers read it through `TurnEngine::state`.
//!
//! ## BatteryInventory
//!
//! Multiset of batteries. Order carries no meaning.
//!
//! ## StateSnapshot
//!
//! Owned, serializable copy of the observable fields, logged after every
//! state change.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::types::{BatteryType, GamePhase, ItemId, TurnOwner};
use crate::rules::GameResult;

/// Multiset of batteries held by the player.
///
/// SmallVec keeps typical hands (under a dozen batteries) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryInventory {
    batteries: SmallVec<[BatteryType; 8]>,
}

impl BatteryInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one battery.
    pub fn add(&mut self, battery: BatteryType) {
        self.batteries.push(battery);
    }

    /// Remove one instance of `battery`. Returns false if none was held.
    pub fn remove_one(&mut self, battery: BatteryType) -> bool {
        match self.batteries.iter().position(|&b| b == battery) {
            Some(index) => {
                self.batteries.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, battery: BatteryType) -> bool {
        self.batteries.contains(&battery)
    }

    /// Number of held batteries of one type.
    #[must_use]
    pub fn count_of(&self, battery: BatteryType) -> usize {
        self.batteries.iter().filter(|&&b| b == battery).count()
    }

    /// Held count per battery type. Types with no batteries are absent.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<BatteryType, usize> {
        let mut counts = FxHashMap::default();
        for &battery in &self.batteries {
            *counts.entry(battery).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.batteries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batteries.is_empty()
    }

    pub fn clear(&mut self) {
        self.batteries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = BatteryType> + '_ {
        self.batteries.iter().copied()
    }
}

impl FromIterator<BatteryType> for BatteryInventory {
    fn from_iter<I: IntoIterator<Item = BatteryType>>(iter: I) -> Self {
        Self {
            batteries: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for BatteryInventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, battery) in self.batteries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{battery}")?;
        }
        Ok(())
    }
}

/// Complete game state.
///
/// Fields are public for reading. The engine hands out `&GameState` only,
/// so all writes go through the engine's entry points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player's water total, `0..=water_limit`.
    pub player_water: i32,

    /// Enemy's water total, `0..=water_limit`.
    pub enemy_water: i32,

    pub player_batteries: BatteryInventory,

    /// Held items. Logged, otherwise unused.
    pub player_items: Vector<ItemId>,

    pub current_turn: TurnOwner,

    pub current_phase: GamePhase,

    /// True exactly when `current_phase == GameOver`.
    pub game_ended: bool,

    /// Battery picked this turn. Only set during `ChoosingSlot`.
    pub selected_battery: Option<BatteryType>,

    /// Player turn counter, starts at 1.
    pub turn_number: u32,

    /// Final result once the game has ended.
    pub result: Option<GameResult>,
}

impl GameState {
    /// Canonical starting state with the given hand.
    #[must_use]
    pub fn new(starting_batteries: impl IntoIterator<Item = BatteryType>) -> Self {
        Self {
            player_water: 0,
            enemy_water: 0,
            player_batteries: starting_batteries.into_iter().collect(),
            player_items: Vector::new(),
            current_turn: TurnOwner::Player,
            current_phase: GamePhase::ChoosingBattery,
            game_ended: false,
            selected_battery: None,
            turn_number: 1,
            result: None,
        }
    }

    /// Water total of one side.
    #[must_use]
    pub fn water(&self, side: TurnOwner) -> i32 {
        match side {
            TurnOwner::Player => self.player_water,
            TurnOwner::Enemy => self.enemy_water,
        }
    }

    pub(crate) fn water_mut(&mut self, side: TurnOwner) -> &mut i32 {
        match side {
            TurnOwner::Player => &mut self.player_water,
            TurnOwner::Enemy => &mut self.enemy_water,
        }
    }

    /// Owned copy of the observable fields.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            player_water: self.player_water,
            enemy_water: self.enemy_water,
            batteries: self.player_batteries.iter().collect(),
            items: self.player_items.iter().cloned().collect(),
            turn: self.current_turn,
            phase: self.current_phase,
        }
    }
}

/// Observable state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub player_water: i32,
    pub enemy_water: i32,
    pub batteries: Vec<BatteryType>,
    pub items: Vec<ItemId>,
    pub turn: TurnOwner,
    pub phase: GamePhase,
}

impl std::fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let batteries: Vec<String> = self.batteries.iter().map(ToString::to_string).collect();
        let items = if self.items.is_empty() {
            "None".to_string()
        } else {
            self.items.iter().map(ItemId::as_str).collect::<Vec<_>>().join(", ")
        };
        write!(
            f,
            "STATE | PlayerWater: {} | EnemyWater: {} | Batteries: [{}] | Items: [{}] | Turn: {} | Phase: {}",
            self.player_water,
            self.enemy_water,
            batteries.join(", "),
            items,
            self.turn,
            self.phase,
        )
    }
}
