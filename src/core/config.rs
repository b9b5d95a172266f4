//! Engine configuration.
//!
//! Every tunable constant of the game lives here. `EngineConfig::default()`
//! is the canonical game: water limit 100, a starting hand of one
//! `Default` and two `Chance` batteries, one `Default` granted per turn,
//! and the Low/Medium/High outcome ranges below.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{BatteryType, SlotType};

/// Half-open outcome ranges per slot.
///
/// The defaults are slightly skewed toward negative outcomes. They are kept
/// exactly as tuned rather than symmetrised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRanges {
    pub low: Range<i32>,
    pub medium: Range<i32>,
    pub high: Range<i32>,
}

impl Default for SlotRanges {
    fn default() -> Self {
        Self {
            low: -10..6,
            medium: -20..11,
            high: -35..21,
        }
    }
}

impl SlotRanges {
    /// Outcome range for a slot.
    #[must_use]
    pub fn range_for(&self, slot: SlotType) -> Range<i32> {
        match slot {
            SlotType::Low => self.low.clone(),
            SlotType::Medium => self.medium.clone(),
            SlotType::High => self.high.clone(),
        }
    }
}

/// Configuration rejected by `EngineConfig::validate`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("water limit must be positive, got {0}")]
    NonPositiveWaterLimit(i32),

    #[error("outcome range for {slot} slot is empty: {start}..{end}")]
    EmptySlotRange { slot: SlotType, start: i32, end: i32 },
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Water total at which a side loses (inclusive).
    pub water_limit: i32,

    /// Batteries the player holds when a game starts.
    pub starting_batteries: Vec<BatteryType>,

    /// Battery granted at the start of every later player turn.
    pub turn_grant: BatteryType,

    /// Outcome range per slot.
    pub slot_ranges: SlotRanges,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            water_limit: 100,
            starting_batteries: vec![BatteryType::Default, BatteryType::Chance, BatteryType::Chance],
            turn_grant: BatteryType::Default,
            slot_ranges: SlotRanges::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom water limit.
    #[must_use]
    pub fn with_water_limit(mut self, limit: i32) -> Self {
        self.water_limit = limit;
        self
    }

    /// Create a new config with a custom starting hand.
    #[must_use]
    pub fn with_starting_batteries(mut self, batteries: impl IntoIterator<Item = BatteryType>) -> Self {
        self.starting_batteries = batteries.into_iter().collect();
        self
    }

    /// Create a new config with a custom per-turn grant.
    #[must_use]
    pub fn with_turn_grant(mut self, battery: BatteryType) -> Self {
        self.turn_grant = battery;
        self
    }

    /// Create a new config with a custom range for one slot.
    #[must_use]
    pub fn with_slot_range(mut self, slot: SlotType, range: Range<i32>) -> Self {
        match slot {
            SlotType::Low => self.slot_ranges.low = range,
            SlotType::Medium => self.slot_ranges.medium = range,
            SlotType::High => self.slot_ranges.high = range,
        }
        self
    }

    /// Check that every value is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.water_limit <= 0 {
            return Err(ConfigError::NonPositiveWaterLimit(self.water_limit));
        }
        for slot in SlotType::ALL {
            let range = self.slot_ranges.range_for(slot);
            if range.is_empty() {
                return Err(ConfigError::EmptySlotRange {
                    slot,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.water_limit, 100);
        assert_eq!(
            config.starting_batteries,
            vec![BatteryType::Default, BatteryType::Chance, BatteryType::Chance]
        );
        assert_eq!(config.turn_grant, BatteryType::Default);
        assert_eq!(config.slot_ranges.range_for(SlotType::Low), -10..6);
        assert_eq!(config.slot_ranges.range_for(SlotType::Medium), -20..11);
        assert_eq!(config.slot_ranges.range_for(SlotType::High), -35..21);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_water_limit(50)
            .with_starting_batteries([BatteryType::Chance])
            .with_turn_grant(BatteryType::Chance)
            .with_slot_range(SlotType::High, -5..5);

        assert_eq!(config.water_limit, 50);
        assert_eq!(config.starting_batteries, vec![BatteryType::Chance]);
        assert_eq!(config.turn_grant, BatteryType::Chance);
        assert_eq!(config.slot_ranges.high, -5..5);
        assert_eq!(config.slot_ranges.low, -10..6);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = EngineConfig::default().with_water_limit(0);
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveWaterLimit(0)));

        let config = EngineConfig::default().with_slot_range(SlotType::Medium, 3..3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptySlotRange {
                slot: SlotType::Medium,
                start: 3,
                end: 3,
            })
        );
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_water_limit(80);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
