//! Game core: map, missions, and combat resolution.

mod combat;
mod map;
mod mission;
mod types;

pub use combat::{AttackOutcome, ExchangeResult, resolve_attack};
pub use map::{TERRITORY_COUNT, TERRITORY_NAMES, WorldMap};
pub use mission::{CONQUEST_GOAL, Mission};
pub use types::{ArmyColor, DiceRoll, Territory};
