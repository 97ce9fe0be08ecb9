//! Application state for the shell: which screen is up and what the
//! player is being asked.

use crate::game::{AttackOutcome, TERRITORY_COUNT};
use crate::session::GameSession;
use crossterm::event::KeyCode;
use tracing::debug;

/// Which view the shell is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The action menu over the map.
    Command,
    /// Asking for the attacking territory.
    SelectOrigin,
    /// Asking for the territory to strike.
    SelectTarget {
        /// Index of the chosen origin.
        origin: usize,
    },
    /// Showing a battle report.
    Report(AttackOutcome),
    /// The mission is complete.
    Victory,
}

/// Shell state: the session plus the current screen and notice line.
pub struct App {
    session: GameSession,
    screen: Screen,
    notice: Option<String>,
}

impl App {
    /// Wraps a session for interactive play.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            screen: Screen::Command,
            notice: None,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The screen currently shown.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The current notice line, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Dispatches one key press. Returns `true` when the shell should
    /// exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        debug!(?code, screen = ?self.screen, "Key pressed");
        match self.screen.clone() {
            Screen::Command => return self.handle_command(code),
            Screen::SelectOrigin => self.handle_select_origin(code),
            Screen::SelectTarget { origin } => self.handle_select_target(origin, code),
            Screen::Report(_) => self.screen = Screen::Command,
            Screen::Victory => return true,
        }
        false
    }

    fn handle_command(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('1') => {
                self.notice = None;
                self.screen = Screen::SelectOrigin;
            }
            KeyCode::Char('2') => {
                if self.session.check_victory() {
                    self.screen = Screen::Victory;
                } else {
                    self.notice =
                        Some("Mission not yet complete. Keep conquering!".to_string());
                }
            }
            KeyCode::Char('0') | KeyCode::Char('q') => {
                self.session.quit();
                return true;
            }
            _ => {}
        }
        false
    }

    fn handle_select_origin(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.screen = Screen::Command,
            _ => {
                let Some(index) = digit(code) else { return };
                // Raw input range and ownership are checked here so the
                // player hears about a bad origin before being asked
                // for a target; the session re-validates regardless.
                if index >= TERRITORY_COUNT {
                    self.notice = Some(format!("Territory {index} does not exist"));
                } else if self.session.map().territories()[index].owner()
                    != Some(self.session.player())
                {
                    self.notice = Some(format!("Territory {index} is not under your command"));
                } else {
                    self.notice = None;
                    self.screen = Screen::SelectTarget { origin: index };
                }
            }
        }
    }

    fn handle_select_target(&mut self, origin: usize, code: KeyCode) {
        match code {
            KeyCode::Esc => self.screen = Screen::Command,
            _ => {
                let Some(target) = digit(code) else { return };
                match self.session.attack(origin, target) {
                    Ok(outcome) => {
                        self.notice = None;
                        self.screen = Screen::Report(outcome);
                    }
                    Err(err) => {
                        self.notice = Some(err.to_string());
                        self.screen = Screen::Command;
                    }
                }
            }
        }
    }
}

fn digit(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c) => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}
