//! Secret missions and their victory predicates.

use super::map::WorldMap;
use super::types::ArmyColor;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Territories the player must hold to win a conquest mission.
pub const CONQUEST_GOAL: usize = 3;

/// The player's secret objective, drawn once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Wipe the target army off the map.
    ///
    /// The draw may select the player's own color. That mission is
    /// unwinnable under normal play, since nothing forces the player
    /// to lose their own last territory; the behavior is kept as-is.
    EliminateArmy(ArmyColor),
    /// Hold at least this many territories.
    ConquerCount(usize),
}

impl Mission {
    /// Draws a mission: kind uniformly random between the two variants,
    /// elimination target uniformly random among the three colors.
    #[instrument(skip(rng))]
    pub fn draw(rng: &mut impl Rng) -> Self {
        let mission = match rng.gen_range(0..2) {
            0 => Mission::EliminateArmy(ArmyColor::random(rng)),
            _ => Mission::ConquerCount(CONQUEST_GOAL),
        };
        info!(%mission, "Mission drawn");
        mission
    }

    /// Whether the mission is satisfied on the given map for the given
    /// player. Pure predicate; repeated calls without an intervening
    /// attack always agree.
    pub fn is_satisfied(&self, map: &WorldMap, player: ArmyColor) -> bool {
        match *self {
            Mission::EliminateArmy(target) => !map.any_owned_by(target),
            Mission::ConquerCount(goal) => map.count_owned_by(player) >= goal,
        }
    }
}

impl std::fmt::Display for Mission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mission::EliminateArmy(target) => {
                write!(f, "Destroy the {target} army (seize every territory it holds)")
            }
            Mission::ConquerCount(goal) => {
                write!(f, "Conquer {goal} different territories")
            }
        }
    }
}
