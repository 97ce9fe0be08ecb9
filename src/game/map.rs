//! The world map: a fixed set of five territories.

use super::types::{ArmyColor, Territory};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of territories on the map. Fixed for the life of a session.
pub const TERRITORY_COUNT: usize = 5;

/// The territory names, in map order.
pub const TERRITORY_NAMES: [&str; TERRITORY_COUNT] =
    ["América", "Europa", "Ásia", "África", "Oceania"];

/// Garrison bounds at map generation.
const STARTING_TROOPS: std::ops::RangeInclusive<u32> = 10..=15;

/// The world map. Owns the five territories; never grows or shrinks.
///
/// Ownership and troop counts change only through combat resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldMap {
    pub(super) territories: [Territory; TERRITORY_COUNT],
}

impl WorldMap {
    /// Builds a map from explicit territories. Useful for scripted
    /// scenarios; normal play uses [`WorldMap::generate`].
    pub fn new(territories: [Territory; TERRITORY_COUNT]) -> Self {
        Self { territories }
    }

    /// Generates the starting map: every territory gets a uniformly
    /// random owner among the three colors and a garrison drawn from
    /// the starting range.
    #[instrument(skip(rng))]
    pub fn generate(rng: &mut impl Rng) -> Self {
        let territories = TERRITORY_NAMES.map(|name| {
            let owner = ArmyColor::random(rng);
            let troops = rng.gen_range(STARTING_TROOPS);
            debug!(name, %owner, troops, "Territory generated");
            Territory::new(name, Some(owner), troops)
        });
        Self { territories }
    }

    /// The territory at `index`, or `None` when the index is outside
    /// the map.
    pub fn territory(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// All territories, in map order.
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// How many territories the given army holds.
    pub fn count_owned_by(&self, color: ArmyColor) -> usize {
        self.territories
            .iter()
            .filter(|t| t.owner() == Some(color))
            .count()
    }

    /// Whether the given army still holds any territory. An army is
    /// destroyed exactly when this returns `false`.
    pub fn any_owned_by(&self, color: ArmyColor) -> bool {
        self.territories.iter().any(|t| t.owner() == Some(color))
    }
}
