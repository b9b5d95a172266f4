//! Turn flow tests.
//!
//! These drive the engine only through its public entry points with a
//! scripted random source, checking phase sequencing, inventory changes,
//! and termination.

use water_level::{
    BatteryType, ClickEvent, EngineConfig, GameEvent, GamePhase, GameResult, ItemId, Rejection, ScriptedRng,
    SlotType, Transition, TurnEngine, TurnOwner,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine_with(script: impl IntoIterator<Item = i32>) -> TurnEngine<ScriptedRng> {
    init_logging();
    TurnEngine::new(ScriptedRng::new(script))
}

/// Fresh game, Default on High for +20, enemy picks Low and draws -10.
#[test]
fn test_first_round_scenario() {
    let mut engine = engine_with([20, 0, -10]);

    engine.on_battery_clicked(BatteryType::Default).unwrap();
    assert_eq!(engine.state().current_phase, GamePhase::ChoosingSlot);

    engine.on_slot_clicked(SlotType::High).unwrap();

    let state = engine.state();
    assert_eq!(state.player_water, 20);
    assert_eq!(state.enemy_water, 0);
    assert_eq!(state.current_phase, GamePhase::ChoosingBattery);
    assert_eq!(state.current_turn, TurnOwner::Player);

    // Started with one Default, consumed it, was granted a new one.
    assert_eq!(state.player_batteries.count_of(BatteryType::Default), 1);
    assert_eq!(state.player_batteries.count_of(BatteryType::Chance), 2);
    assert!(engine.rng().is_exhausted());
}

/// Slot click with no battery selected changes nothing.
#[test]
fn test_slot_click_before_battery() {
    let mut engine = engine_with([20, 0, -10]);
    let before = engine.state().clone();

    let rejection = engine.on_slot_clicked(SlotType::Medium).unwrap_err();
    assert!(matches!(rejection, Rejection::WrongPhase { .. }));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.rng().remaining(), 3);
}

/// Player reaching the limit ends the game before the enemy acts.
#[test]
fn test_player_at_limit_loses_immediately() {
    let config = EngineConfig::default().with_water_limit(20);
    init_logging();
    let mut engine = TurnEngine::with_config(config, ScriptedRng::new([20, 2, -35])).unwrap();

    engine.on_battery_clicked(BatteryType::Chance).unwrap();
    let transition = engine.on_slot_clicked(SlotType::High).unwrap();

    match transition {
        Transition::TurnResolved { enemy, result, .. } => {
            assert_eq!(enemy, None);
            assert_eq!(result, Some(GameResult::Winner(TurnOwner::Enemy)));
        }
        other => panic!("unexpected transition {other:?}"),
    }
    assert_eq!(engine.state().player_water, 20);
    assert_eq!(engine.state().enemy_water, 0);
    assert_eq!(engine.state().current_phase, GamePhase::GameOver);
}

/// Enemy reaching the limit ends the game without a new player turn.
#[test]
fn test_enemy_at_limit_loses() {
    let config = EngineConfig::default().with_water_limit(15);
    init_logging();
    // player -5 on Low, enemy picks Medium (index 1) and draws +10, then again
    let mut engine =
        TurnEngine::with_config(config, ScriptedRng::new([-5, 1, 10, -5, 1, 10])).unwrap();

    engine.on_battery_clicked(BatteryType::Default).unwrap();
    engine.on_slot_clicked(SlotType::Low).unwrap();
    assert_eq!(engine.state().enemy_water, 10);
    assert_eq!(engine.state().turn_number, 2);

    engine.on_battery_clicked(BatteryType::Chance).unwrap();
    engine.on_slot_clicked(SlotType::Low).unwrap();

    let state = engine.state();
    assert_eq!(state.enemy_water, 15);
    assert!(state.game_ended);
    assert_eq!(state.result, Some(GameResult::Winner(TurnOwner::Player)));
    assert_eq!(state.turn_number, 2);
    // No grant after the final round: Default played, Chance played.
    assert_eq!(state.player_batteries.len(), 2);
}

/// Nothing is accepted once the game is over.
#[test]
fn test_game_over_is_final() {
    let config = EngineConfig::default().with_water_limit(5);
    init_logging();
    let mut engine = TurnEngine::with_config(config, ScriptedRng::new([5])).unwrap();

    engine.on_battery_clicked(BatteryType::Default).unwrap();
    engine.on_slot_clicked(SlotType::Low).unwrap();
    assert!(engine.is_over());

    let before = engine.state().clone();
    let events_before = engine.events().len();

    assert_eq!(engine.on_battery_clicked(BatteryType::Chance), Err(Rejection::GameOver));
    assert_eq!(engine.on_slot_clicked(SlotType::High), Err(Rejection::GameOver));
    assert_eq!(engine.on_item_clicked(ItemId::new("fuse")), Err(Rejection::GameOver));

    assert_eq!(engine.state(), &before);
    assert_eq!(engine.events().len(), events_before);
}

/// `new_game` after a finished game restores the starting configuration.
#[test]
fn test_new_game_resets() {
    let config = EngineConfig::default().with_water_limit(5);
    init_logging();
    let mut engine = TurnEngine::with_config(config, ScriptedRng::new([5])).unwrap();

    engine.on_battery_clicked(BatteryType::Default).unwrap();
    engine.on_slot_clicked(SlotType::Low).unwrap();
    assert!(engine.is_over());

    engine.new_game();

    let state = engine.state();
    assert_eq!(state.player_water, 0);
    assert_eq!(state.enemy_water, 0);
    assert_eq!(
        state.player_batteries.iter().collect::<Vec<_>>(),
        vec![BatteryType::Default, BatteryType::Chance, BatteryType::Chance]
    );
    assert_eq!(state.current_turn, TurnOwner::Player);
    assert_eq!(state.current_phase, GamePhase::ChoosingBattery);
    assert!(!state.game_ended);
    assert_eq!(state.result, None);
    assert_eq!(engine.events().iter().cloned().collect::<Vec<_>>(), vec![GameEvent::NewGame]);
}

/// Dispatch routes each click variant to its entry point.
#[test]
fn test_dispatch_routes_clicks() {
    let mut engine = engine_with([1, 2, 3]);

    assert_eq!(
        engine.dispatch(ClickEvent::ItemClicked(ItemId::new("tape"))),
        Ok(Transition::ItemAcknowledged(ItemId::new("tape")))
    );
    assert_eq!(
        engine.dispatch(ClickEvent::BatteryClicked(BatteryType::Chance)),
        Ok(Transition::BatterySelected(BatteryType::Chance))
    );

    let transition = engine.dispatch(ClickEvent::SlotClicked(SlotType::Medium)).unwrap();
    assert!(matches!(transition, Transition::TurnResolved { result: None, .. }));
    assert_eq!(engine.state().player_water, 1);
    // enemy picked High (index 2) and drew +3
    assert_eq!(engine.state().enemy_water, 3);
}

/// The event history records one round in order.
#[test]
fn test_event_history_order() {
    let mut engine = engine_with([20, 0, -10]);
    engine.on_battery_clicked(BatteryType::Default).unwrap();
    engine.on_slot_clicked(SlotType::High).unwrap();

    let kinds: Vec<&'static str> = engine
        .events()
        .iter()
        .map(|e| match e {
            GameEvent::NewGame => "new",
            GameEvent::BatterySelected(_) => "selected",
            GameEvent::BatteryConsumed(_) => "consumed",
            GameEvent::ActionResolved(o) if o.side == TurnOwner::Player => "player",
            GameEvent::ActionResolved(_) => "enemy",
            GameEvent::TurnStarted { .. } => "turn",
            GameEvent::ItemAcknowledged(_) => "item",
            GameEvent::GameOver(_) => "over",
        })
        .collect();

    assert_eq!(kinds, vec!["new", "selected", "consumed", "player", "enemy", "turn"]);
}

/// Each completed round grants exactly one battery.
#[test]
fn test_battery_economy_over_rounds() {
    let mut engine = engine_with([0, 0, 0, 0, 0, 0, 0, 0, 0]);

    for round in 0..3 {
        let held = engine.state().player_batteries.len();
        engine.on_battery_clicked(BatteryType::Default).unwrap();
        engine.on_slot_clicked(SlotType::Low).unwrap();

        assert_eq!(engine.state().player_batteries.len(), held, "round {round}");
        assert_eq!(engine.state().turn_number, round + 2);
    }
    assert_eq!(engine.state().player_batteries.count_of(BatteryType::Chance), 2);
}
