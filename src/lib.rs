//! Warfront - turn-based territorial conquest for the terminal.
//!
//! One human commander, three army colors, five territories, one secret
//! mission. The game core is a pure library: the map, mission, and
//! combat code never touch the terminal, and every state change flows
//! through [`GameSession`] one command at a time. The ratatui shell in
//! [`tui`] is a thin collaborator that prompts, renders, and re-prompts.
//!
//! # Example
//!
//! ```
//! use warfront::{GameSession, SessionStatus};
//!
//! let mut session = GameSession::new(Some(42));
//! assert_eq!(session.status(), SessionStatus::Playing);
//!
//! // Bad commands are rejected, never fatal.
//! assert!(session.attack(9, 0).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod session;

// Shell modules (binary surface)
pub mod cli;
pub mod tui;

// Crate-level exports - game core
pub use game::{
    ArmyColor, AttackOutcome, CONQUEST_GOAL, DiceRoll, ExchangeResult, Mission, TERRITORY_COUNT,
    TERRITORY_NAMES, Territory, WorldMap, resolve_attack,
};

// Crate-level exports - session orchestration
pub use session::{AttackError, GameSession, SessionStatus, Snapshot};
