//! Core domain types for the conquest game.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the three playable army colors.
///
/// "Unclaimed" is deliberately not a color: territory ownership is
/// `Option<ArmyColor>`, so the neutral state can never collide with a
/// playable army.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ArmyColor {
    /// The red army.
    Red,
    /// The blue army.
    Blue,
    /// The green army.
    Green,
}

impl ArmyColor {
    /// All playable colors, in declaration order.
    pub const ALL: [ArmyColor; 3] = [ArmyColor::Red, ArmyColor::Blue, ArmyColor::Green];

    /// Draws a uniformly random color.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A territory on the world map: a name, an owning army (if any), and
/// the troops stationed there.
///
/// Invariant: `troops == 0` exactly when `owner` is `None`. Unclaimed
/// territories are reachable only through total defeat of their owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: String,
    owner: Option<ArmyColor>,
    troops: u32,
}

impl Territory {
    /// Creates a territory with an explicit garrison.
    pub fn new(name: impl Into<String>, owner: Option<ArmyColor>, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner,
            troops,
        }
    }

    /// The territory's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning army, or `None` for an unclaimed territory.
    pub fn owner(&self) -> Option<ArmyColor> {
        self.owner
    }

    /// Troops currently stationed here.
    pub fn troops(&self) -> u32 {
        self.troops
    }

    /// Removes one troop. Callers guard that at least two remain before
    /// a skirmish loss, or exactly one before a conquest move-in.
    pub(super) fn lose_troop(&mut self) {
        self.troops -= 1;
    }

    /// Hands the territory to the conquering army with a single troop
    /// moved in.
    pub(super) fn capture(&mut self, conqueror: ArmyColor) {
        self.owner = Some(conqueror);
        self.troops = 1;
    }

    /// The last troop is gone; the territory reverts to unclaimed.
    pub(super) fn rout(&mut self) {
        self.troops = 0;
        self.owner = None;
    }
}

/// The pair of dice rolled for one attack exchange, one die per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// The attacker's die, 1-6.
    pub attacker: u8,
    /// The defender's die, 1-6.
    pub defender: u8,
}

impl DiceRoll {
    /// Rolls both dice from the given generator.
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self {
            attacker: rng.gen_range(1..=6),
            defender: rng.gen_range(1..=6),
        }
    }
}
