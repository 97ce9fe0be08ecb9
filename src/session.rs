//! Session orchestration: one player, one map, one secret mission.

use crate::game::{
    ArmyColor, AttackOutcome, DiceRoll, Mission, TERRITORY_COUNT, WorldMap, resolve_attack,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Where the session stands. `Won` and `Quit` are terminal: once
/// reached, no further attack is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    /// The campaign is ongoing.
    Playing,
    /// The mission was verified complete.
    Won,
    /// The player abandoned the campaign.
    Quit,
}

/// Why an attack command was rejected. All recoverable; the shell
/// reports the reason and re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AttackError {
    /// The index does not name a territory on the map.
    #[display("territory {_0} does not exist")]
    OutOfRange(usize),

    /// The origin territory is not under the player's command.
    #[display("territory {_0} is not under your command")]
    NotYourTerritory(usize),

    /// Origin and target are the same territory.
    #[display("a territory cannot attack itself")]
    SelfAttack,

    /// The session already ended; no further mutation is permitted.
    #[display("the campaign is already over")]
    GameOver,
}

impl std::error::Error for AttackError {}

/// Read-only view of the whole session, for rendering.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    /// The world map.
    pub map: &'a WorldMap,
    /// The player's secret mission.
    pub mission: &'a Mission,
    /// The army the player commands.
    pub player: ArmyColor,
    /// Current session status.
    pub status: SessionStatus,
}

/// A single-player campaign. Owns the map, the mission, the player's
/// identity, and the session PRNG; the shell drives it one command at
/// a time.
#[derive(Debug)]
pub struct GameSession {
    map: WorldMap,
    mission: Mission,
    player: ArmyColor,
    status: SessionStatus,
    rng: SmallRng,
}

impl GameSession {
    /// Starts a new campaign: generates the map, draws the secret
    /// mission, and assigns the player a uniformly random color.
    ///
    /// With `seed` the whole campaign is reproducible; without it the
    /// PRNG is seeded from entropy. Either way the generator is seeded
    /// exactly once and owned by the session.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let map = WorldMap::generate(&mut rng);
        let mission = Mission::draw(&mut rng);
        let player = ArmyColor::random(&mut rng);

        info!(%player, %mission, "Campaign started");

        Self {
            map,
            mission,
            player,
            status: SessionStatus::Playing,
            rng,
        }
    }

    /// Starts a campaign from an explicit setup instead of a random
    /// one. Scripted scenarios and tests use this; dice still come from
    /// the seeded session PRNG.
    pub fn with_setup(map: WorldMap, mission: Mission, player: ArmyColor, seed: u64) -> Self {
        Self {
            map,
            mission,
            player,
            status: SessionStatus::Playing,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Executes one attack command from `origin` against `target`.
    ///
    /// Every validation runs before any dice are drawn: a rejected
    /// command leaves both the map and the PRNG untouched. On success
    /// the dice are rolled and the exchange is resolved against the
    /// map.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn attack(&mut self, origin: usize, target: usize) -> Result<AttackOutcome, AttackError> {
        if self.status != SessionStatus::Playing {
            warn!(status = ?self.status, "Attack on a finished session");
            return Err(AttackError::GameOver);
        }
        if origin >= TERRITORY_COUNT {
            return Err(AttackError::OutOfRange(origin));
        }
        if self.map.territories()[origin].owner() != Some(self.player) {
            return Err(AttackError::NotYourTerritory(origin));
        }
        if target >= TERRITORY_COUNT {
            return Err(AttackError::OutOfRange(target));
        }
        if origin == target {
            return Err(AttackError::SelfAttack);
        }

        let dice = DiceRoll::roll(&mut self.rng);
        let outcome = resolve_attack(&mut self.map, origin, target, self.player, dice);

        info!(
            origin = %outcome.origin,
            target = %outcome.target,
            result = ?outcome.result,
            "Attack resolved"
        );

        Ok(outcome)
    }

    /// Checks the secret mission against the current map. Returns
    /// whether it is satisfied and, when it is, moves the session to
    /// `Won`. Idempotent between attacks.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn check_victory(&mut self) -> bool {
        let satisfied = self.mission.is_satisfied(&self.map, self.player);
        if satisfied && self.status == SessionStatus::Playing {
            info!("Mission accomplished");
            self.status = SessionStatus::Won;
        }
        satisfied
    }

    /// Abandons the campaign. Terminal.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        if self.status == SessionStatus::Playing {
            info!("Campaign abandoned");
            self.status = SessionStatus::Quit;
        }
    }

    /// Read-only view of the full session state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            map: &self.map,
            mission: &self.mission,
            player: self.player,
            status: self.status,
        }
    }

    /// The world map.
    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    /// The player's secret mission.
    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    /// The army the player commands.
    pub fn player(&self) -> ArmyColor {
        self.player
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }
}
