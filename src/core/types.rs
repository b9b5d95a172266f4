//! Game vocabulary: batteries, slots, turn owners, phases, items.
//!
//! These are plain tagged values. The engine never stores behavior on
//! them; slot ranges live in `EngineConfig` so games can retune them.

use serde::{Deserialize, Serialize};

/// A consumable battery a player commits to a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BatteryType {
    /// Plain battery. One is granted at the start of every player turn.
    Default,
    /// Chance battery. Starting hands carry two.
    Chance,
}

impl std::fmt::Display for BatteryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryType::Default => write!(f, "Default"),
            BatteryType::Chance => write!(f, "Chance"),
        }
    }
}

/// Risk tier a battery is played into.
///
/// Higher tiers widen both tails of the outcome range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotType {
    Low,
    Medium,
    High,
}

impl SlotType {
    /// All slots, in index order. Enemy picks draw an index into this.
    pub const ALL: [SlotType; 3] = [SlotType::Low, SlotType::Medium, SlotType::High];

    /// Slot for a 0-based index, or `None` past the end.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based index of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SlotType::Low => 0,
            SlotType::Medium => 1,
            SlotType::High => 2,
        }
    }
}

impl std::fmt::Display for SlotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotType::Low => write!(f, "Low"),
            SlotType::Medium => write!(f, "Medium"),
            SlotType::High => write!(f, "High"),
        }
    }
}

/// Which side is acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOwner {
    Player,
    Enemy,
}

impl TurnOwner {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TurnOwner::Player => TurnOwner::Enemy,
            TurnOwner::Enemy => TurnOwner::Player,
        }
    }
}

impl std::fmt::Display for TurnOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOwner::Player => write!(f, "Player"),
            TurnOwner::Enemy => write!(f, "Enemy"),
        }
    }
}

/// Sub-step within a turn. Decides which inputs are currently valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    ChoosingBattery,
    ChoosingSlot,
    /// Transient: only observable from inside slot resolution.
    EnemyTurn,
    /// Terminal.
    GameOver,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::ChoosingBattery => write!(f, "ChoosingBattery"),
            GamePhase::ChoosingSlot => write!(f, "ChoosingSlot"),
            GamePhase::EnemyTurn => write!(f, "EnemyTurn"),
            GamePhase::GameOver => write!(f, "GameOver"),
        }
    }
}

/// Opaque item identifier. Items are acknowledged but have no effect yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
