//! Tests for combat resolution: every exchange branch with fixed dice.

use warfront::{
    ArmyColor, DiceRoll, ExchangeResult, Territory, WorldMap, resolve_attack,
};

/// América (Red) faces Europa (Blue); the back three territories are
/// Green bystanders.
fn battle_map(origin_troops: u32, target_troops: u32) -> WorldMap {
    let target_owner = if target_troops == 0 {
        None
    } else {
        Some(ArmyColor::Blue)
    };
    WorldMap::new([
        Territory::new("América", Some(ArmyColor::Red), origin_troops),
        Territory::new("Europa", target_owner, target_troops),
        Territory::new("Ásia", Some(ArmyColor::Green), 10),
        Territory::new("África", Some(ArmyColor::Green), 10),
        Territory::new("Oceania", Some(ArmyColor::Green), 10),
    ])
}

fn dice(attacker: u8, defender: u8) -> DiceRoll {
    DiceRoll { attacker, defender }
}

#[test]
fn attacker_win_costs_the_defender_one_troop() {
    let mut map = battle_map(10, 5);

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(6, 1));

    assert_eq!(outcome.result, ExchangeResult::AttackerWinsSkirmish);
    assert_eq!(outcome.origin, "América");
    assert_eq!(outcome.target, "Europa");
    assert_eq!(map.territories()[1].troops(), 4);
    assert_eq!(map.territories()[1].owner(), Some(ArmyColor::Blue));
    // The attacker loses nothing in a won skirmish.
    assert_eq!(map.territories()[0].troops(), 10);
}

#[test]
fn conquering_the_last_defender_moves_one_troop_in() {
    // Territory 0: Red, 10 troops. Territory 1: Blue, 1 troop.
    let mut map = battle_map(10, 1);

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(6, 1));

    assert_eq!(outcome.result, ExchangeResult::TerritoryConquered);
    assert_eq!(map.territories()[1].owner(), Some(ArmyColor::Red));
    assert_eq!(map.territories()[1].troops(), 1);
    assert_eq!(map.territories()[0].troops(), 9);
}

#[test]
fn unclaimed_territory_can_be_conquered() {
    let mut map = battle_map(4, 0);

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(3, 2));

    assert_eq!(outcome.result, ExchangeResult::TerritoryConquered);
    assert_eq!(map.territories()[1].owner(), Some(ArmyColor::Red));
    assert_eq!(map.territories()[1].troops(), 1);
    assert_eq!(map.territories()[0].troops(), 3);
}

#[test]
fn defender_win_costs_the_attacker_one_troop() {
    let mut map = battle_map(10, 5);

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(2, 5));

    assert_eq!(outcome.result, ExchangeResult::DefenderWinsSkirmish);
    assert_eq!(map.territories()[0].troops(), 9);
    assert_eq!(map.territories()[0].owner(), Some(ArmyColor::Red));
    assert_eq!(map.territories()[1].troops(), 5);
}

#[test]
fn equal_dice_change_nothing() {
    let mut map = battle_map(10, 5);
    let before = map.clone();

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(4, 4));

    assert_eq!(outcome.result, ExchangeResult::Standoff);
    assert_eq!(map, before);
}

#[test]
fn lone_garrison_cannot_attack() {
    // One troop must always hold the origin, so a single-troop
    // territory aborts with no mutation even when the dice favor it.
    let mut map = battle_map(1, 5);
    let before = map.clone();

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(6, 1));

    assert_eq!(outcome.result, ExchangeResult::InsufficientTroops);
    assert_eq!(map, before);
}

#[test]
fn lone_garrison_guard_precedes_the_dice_comparison() {
    // Even a losing roll reports InsufficientTroops: the guard fires
    // before any branch is taken, which also means an origin can never
    // be routed below the two-troop floor.
    let mut map = battle_map(1, 5);
    let before = map.clone();

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(1, 6));

    assert_eq!(outcome.result, ExchangeResult::InsufficientTroops);
    assert_eq!(map, before);
}

#[test]
fn outcome_reports_the_dice_as_rolled() {
    let mut map = battle_map(10, 5);

    let outcome = resolve_attack(&mut map, 0, 1, ArmyColor::Red, dice(2, 5));

    assert_eq!(outcome.dice, dice(2, 5));
}
