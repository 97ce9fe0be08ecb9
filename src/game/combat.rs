//! Combat resolution: one dice exchange between two territories.

use super::map::WorldMap;
use super::types::{ArmyColor, DiceRoll};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a single attack exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeResult {
    /// The origin had fewer than two troops. One troop must always hold
    /// the origin, so no battle took place and nothing changed.
    InsufficientTroops,
    /// The attacker won the roll; the defender lost one troop.
    AttackerWinsSkirmish,
    /// The attacker won the roll against the last defender and took the
    /// territory, moving one troop in from the origin.
    TerritoryConquered,
    /// The defender won the roll; the attacker lost one troop.
    DefenderWinsSkirmish,
    /// The defender won the roll against the origin's last troop; the
    /// origin is now unclaimed.
    OriginRouted,
    /// Both dice came up equal. No losses on either side.
    Standoff,
}

/// Battle report for one exchange: who fought, what was rolled, and how
/// it ended. Everything the shell needs to narrate the battle; combat
/// code itself renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Name of the attacking territory.
    pub origin: String,
    /// Name of the defending territory.
    pub target: String,
    /// The dice rolled for this exchange.
    pub dice: DiceRoll,
    /// Which branch applied.
    pub result: ExchangeResult,
}

/// Resolves one attack exchange and applies its single mutation branch
/// to the map.
///
/// The dice are rolled by the caller before the troop guard, so an
/// aborted attack still reports what was rolled. Preconditions (both
/// indices in range, `origin != target`, origin owned by `attacker`)
/// are validated by [`GameSession::attack`](crate::GameSession::attack)
/// before any dice are drawn.
#[instrument(skip(map))]
pub fn resolve_attack(
    map: &mut WorldMap,
    origin: usize,
    target: usize,
    attacker: ArmyColor,
    dice: DiceRoll,
) -> AttackOutcome {
    let origin_name = map.territories[origin].name().to_string();
    let target_name = map.territories[target].name().to_string();

    let result = if map.territories[origin].troops() < 2 {
        ExchangeResult::InsufficientTroops
    } else if dice.attacker > dice.defender {
        if map.territories[target].troops() > 1 {
            map.territories[target].lose_troop();
            ExchangeResult::AttackerWinsSkirmish
        } else {
            // Last defender falls: one troop moves in from the origin.
            map.territories[origin].lose_troop();
            map.territories[target].capture(attacker);
            ExchangeResult::TerritoryConquered
        }
    } else if dice.defender > dice.attacker {
        if map.territories[origin].troops() > 1 {
            map.territories[origin].lose_troop();
            ExchangeResult::DefenderWinsSkirmish
        } else {
            map.territories[origin].rout();
            ExchangeResult::OriginRouted
        }
    } else {
        ExchangeResult::Standoff
    };

    debug!(
        origin = %origin_name,
        target = %target_name,
        attacker_die = dice.attacker,
        defender_die = dice.defender,
        ?result,
        "Exchange resolved"
    );

    AttackOutcome {
        origin: origin_name,
        target: target_name,
        dice,
        result,
    }
}
