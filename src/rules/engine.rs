//! Turn engine: the game's only state machine.
//!
//! ```text
//! ChoosingBattery --(battery click)--> ChoosingSlot
//! ChoosingSlot --(slot click)--> [player, enemy, check] --> ChoosingBattery | GameOver
//! GameOver -- terminal
//! ```
//!
//! Every other click/phase/turn combination is rejected and leaves the
//! state untouched.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::Rejection;
use super::outcome::{resolve_action, ActionOutcome};
use crate::core::{
    BatteryType, ClickEvent, ConfigError, EngineConfig, GameEvent, GamePhase, GameRng, GameState, ItemId,
    RandomSource, SlotType, TurnOwner,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One side stayed under the water limit.
    Winner(TurnOwner),
    /// Both sides reached the limit in the same check.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: TurnOwner) -> bool {
        matches!(self, GameResult::Winner(w) if *w == side)
    }

    /// Side that lost, or `None` on a draw.
    #[must_use]
    pub fn loser(&self) -> Option<TurnOwner> {
        match self {
            GameResult::Winner(w) => Some(w.opponent()),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(w) => write!(f, "{} lost", w.opponent()),
            GameResult::Draw => write!(f, "both lost, draw"),
        }
    }
}

/// What an accepted input did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Battery chosen, waiting for a slot.
    BatterySelected(BatteryType),

    /// A full round was resolved.
    ///
    /// `enemy` is `None` when the player's own action ended the game.
    TurnResolved {
        player: ActionOutcome,
        enemy: Option<ActionOutcome>,
        result: Option<GameResult>,
    },

    /// Item click seen. No state changed.
    ItemAcknowledged(ItemId),
}

/// Owns a game and applies clicks to it.
///
/// One engine per game session. The random source is injected so games
/// can be replayed from a seed or scripted in tests.
#[derive(Clone, Debug)]
pub struct TurnEngine<R = GameRng> {
    config: EngineConfig,
    state: GameState,
    rng: R,
    history: Vector<GameEvent>,
}

impl TurnEngine<GameRng> {
    /// Engine with the default rules and a ChaCha8 generator seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<R: RandomSource> TurnEngine<R> {
    /// Engine with the default rules.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::build(EngineConfig::default(), rng)
    }

    /// Engine with custom rules.
    pub fn with_config(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: EngineConfig, rng: R) -> Self {
        let mut engine = Self {
            state: GameState::new(config.starting_batteries.iter().copied()),
            config,
            rng,
            history: Vector::new(),
        };
        engine.new_game();
        engine
    }

    /// Reset to the starting configuration. The random source is kept.
    pub fn new_game(&mut self) {
        info!("New game started");

        self.state = GameState::new(self.config.starting_batteries.iter().copied());
        self.history = Vector::new();
        self.history.push_back(GameEvent::NewGame);

        self.log_state();
        info!("Player turn begins. Choose a battery.");
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Accepted state changes since the last `new_game`, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.history
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_ended
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    // === Entry points ===

    /// Route a click to the matching entry point.
    pub fn dispatch(&mut self, event: ClickEvent) -> Result<Transition, Rejection> {
        match event {
            ClickEvent::BatteryClicked(battery) => self.on_battery_clicked(battery),
            ClickEvent::SlotClicked(slot) => self.on_slot_clicked(slot),
            ClickEvent::ItemClicked(item) => self.on_item_clicked(item),
        }
    }

    /// Check whether `event` would be accepted right now.
    #[must_use]
    pub fn accepts(&self, event: &ClickEvent) -> bool {
        match event {
            ClickEvent::BatteryClicked(battery) => self.check_battery(*battery).is_ok(),
            ClickEvent::SlotClicked(_) => self.check_slot().is_ok(),
            ClickEvent::ItemClicked(_) => self.check_running().is_ok(),
        }
    }

    /// Player picks a battery. It stays in inventory until a slot is chosen.
    pub fn on_battery_clicked(&mut self, battery: BatteryType) -> Result<Transition, Rejection> {
        if let Err(rejection) = self.check_battery(battery) {
            debug!("Ignoring battery click ({battery}): {rejection}");
            return Err(rejection);
        }

        self.state.selected_battery = Some(battery);
        self.state.current_phase = GamePhase::ChoosingSlot;
        self.history.push_back(GameEvent::BatterySelected(battery));
        info!("Player selected battery: {battery}. Now choose a slot.");

        Ok(Transition::BatterySelected(battery))
    }

    /// Player commits the selected battery to `slot`.
    ///
    /// Resolves the player's action, then, unless that ended the game, one
    /// enemy action and the start of the next player turn.
    pub fn on_slot_clicked(&mut self, slot: SlotType) -> Result<Transition, Rejection> {
        let battery = match self.check_slot() {
            Ok(battery) => battery,
            Err(rejection) => {
                debug!("Ignoring slot click ({slot}): {rejection}");
                return Err(rejection);
            }
        };

        info!("Player selected slot: {slot} with battery: {battery}");

        // Held by invariant: a selection implies the battery is owned.
        if self.state.player_batteries.remove_one(battery) {
            self.history.push_back(GameEvent::BatteryConsumed(battery));
        }

        let player = self.resolve(TurnOwner::Player, slot);
        self.state.selected_battery = None;

        let mut result = self.check_win_lose();
        let mut enemy = None;

        if result.is_none() {
            enemy = Some(self.run_enemy_turn());
            result = self.check_win_lose();
            if result.is_none() {
                self.start_player_turn();
            }
        }

        Ok(Transition::TurnResolved { player, enemy, result })
    }

    /// Player clicks an item. Acknowledged only; items have no effect.
    pub fn on_item_clicked(&mut self, item: ItemId) -> Result<Transition, Rejection> {
        if let Err(rejection) = self.check_running() {
            debug!("Ignoring item click ({item}): {rejection}");
            return Err(rejection);
        }

        info!("Player clicked item: {item} (items not implemented yet)");
        self.history.push_back(GameEvent::ItemAcknowledged(item.clone()));

        Ok(Transition::ItemAcknowledged(item))
    }

    // === Validation ===

    fn check_running(&self) -> Result<(), Rejection> {
        if self.state.game_ended {
            return Err(Rejection::GameOver);
        }
        Ok(())
    }

    fn check_player_phase(&self, expected: GamePhase) -> Result<(), Rejection> {
        self.check_running()?;
        if self.state.current_turn != TurnOwner::Player {
            return Err(Rejection::NotPlayerTurn);
        }
        if self.state.current_phase != expected {
            return Err(Rejection::WrongPhase {
                expected,
                actual: self.state.current_phase,
            });
        }
        Ok(())
    }

    fn check_battery(&self, battery: BatteryType) -> Result<(), Rejection> {
        self.check_player_phase(GamePhase::ChoosingBattery)?;
        if !self.state.player_batteries.contains(battery) {
            return Err(Rejection::BatteryNotOwned(battery));
        }
        Ok(())
    }

    fn check_slot(&self) -> Result<BatteryType, Rejection> {
        self.check_player_phase(GamePhase::ChoosingSlot)?;
        self.state.selected_battery.ok_or(Rejection::NoBatterySelected)
    }

    // === Turn flow ===

    fn resolve(&mut self, side: TurnOwner, slot: SlotType) -> ActionOutcome {
        let outcome = resolve_action(&mut self.state, side, slot, &self.config, &mut self.rng);
        self.history.push_back(GameEvent::ActionResolved(outcome));
        self.log_state();
        outcome
    }

    fn run_enemy_turn(&mut self) -> ActionOutcome {
        self.state.current_turn = TurnOwner::Enemy;
        self.state.current_phase = GamePhase::EnemyTurn;
        info!("Enemy turn");

        let index = self.rng.gen_index(SlotType::ALL.len());
        let slot = SlotType::from_index(index).unwrap_or(SlotType::Low);
        self.resolve(TurnOwner::Enemy, slot)
    }

    fn start_player_turn(&mut self) {
        let granted = self.config.turn_grant;

        self.state.current_turn = TurnOwner::Player;
        self.state.current_phase = GamePhase::ChoosingBattery;
        self.state.turn_number += 1;
        self.state.player_batteries.add(granted);

        info!(
            "Player turn {} begins, granted {granted}. Choose a battery.",
            self.state.turn_number
        );
        self.history.push_back(GameEvent::TurnStarted {
            turn_number: self.state.turn_number,
            granted,
        });
        self.log_state();
    }

    /// Lock in a terminal result if either side reached the water limit.
    fn check_win_lose(&mut self) -> Option<GameResult> {
        let limit = self.config.water_limit;
        let player_out = self.state.player_water >= limit;
        let enemy_out = self.state.enemy_water >= limit;

        let result = match (player_out, enemy_out) {
            (true, true) => GameResult::Draw,
            (true, false) => GameResult::Winner(TurnOwner::Enemy),
            (false, true) => GameResult::Winner(TurnOwner::Player),
            (false, false) => return None,
        };

        self.state.game_ended = true;
        self.state.current_phase = GamePhase::GameOver;
        self.state.result = Some(result);
        self.history.push_back(GameEvent::GameOver(result));
        info!("Game over: {result}");

        Some(result)
    }

    fn log_state(&self) {
        info!("{}", self.state.snapshot());
        debug!("Battery counts: {:?}", self.state.player_batteries.counts());
    }
}
