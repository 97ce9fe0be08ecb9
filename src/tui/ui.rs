//! Stateless rendering for the conquest shell.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::game::{ArmyColor, AttackOutcome, ExchangeResult, Territory};
use crate::session::SessionStatus;

use super::app::{App, Screen};

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(8), // Map table
            Constraint::Length(3), // Mission
            Constraint::Min(9),    // Action panel
            Constraint::Length(1), // Notice line
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);
    draw_map(frame, chunks[1], app.session().map().territories());
    draw_mission(frame, chunks[2], app);
    draw_action_panel(frame, chunks[3], app);
    draw_notice(frame, chunks[4], app);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let player = app.session().player();
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "W A R F R O N T",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("You command the "),
            Span::styled(
                player.to_string(),
                Style::default()
                    .fg(army_color(player))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" army"),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_map(frame: &mut Frame, area: Rect, territories: &[Territory]) {
    let header = Row::new(["ID", "Territory", "Army", "Troops"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = territories.iter().enumerate().map(|(index, territory)| {
        let (army, style) = match territory.owner() {
            Some(color) => (color.to_string(), Style::default().fg(army_color(color))),
            None => ("Unclaimed".to_string(), Style::default().fg(Color::DarkGray)),
        };
        Row::new([
            Cell::from(index.to_string()),
            Cell::from(territory.name().to_string()),
            Cell::from(army).style(style),
            Cell::from(territory.troops().to_string()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().title("World Map").borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn draw_mission(frame: &mut Frame, area: Rect, app: &App) {
    let mission = Paragraph::new(app.session().mission().to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("Secret Mission").borders(Borders::ALL));
    frame.render_widget(mission, area);
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.screen() {
        Screen::Command => menu_lines(),
        Screen::SelectOrigin => vec![
            Line::from("Attack from which territory?"),
            Line::from(""),
            Line::from("Press 0-4 to choose, Esc to cancel."),
        ],
        Screen::SelectTarget { origin } => {
            let name = app
                .session()
                .map()
                .territory(*origin)
                .map(Territory::name)
                .unwrap_or("?");
            vec![
                Line::from(format!("Attacking from {name}.")),
                Line::from("Strike which territory?"),
                Line::from(""),
                Line::from("Press 0-4 to choose, Esc to cancel."),
            ]
        }
        Screen::Report(outcome) => report_lines(outcome),
        Screen::Victory => victory_lines(),
    };

    let title = match app.screen() {
        Screen::Report(_) => "Battle Report",
        Screen::Victory => "Victory",
        _ => "Actions",
    };

    let panel = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.notice() {
        Some(notice) => notice,
        None if app.session().status() == SessionStatus::Playing => "",
        None => "The campaign is over.",
    };
    let notice = Paragraph::new(text).style(Style::default().fg(Color::Magenta));
    frame.render_widget(notice, area);
}

fn menu_lines() -> Vec<Line<'static>> {
    vec![
        Line::from("1 - Launch an attack"),
        Line::from("2 - Check victory"),
        Line::from("0 - Quit the campaign"),
    ]
}

fn report_lines(outcome: &AttackOutcome) -> Vec<Line<'_>> {
    let verdict = match outcome.result {
        ExchangeResult::InsufficientTroops => format!(
            "Attack called off: at least 2 troops are needed, 1 must hold {}.",
            outcome.origin
        ),
        ExchangeResult::AttackerWinsSkirmish => {
            format!("Attacker wins the exchange! {} loses one troop.", outcome.target)
        }
        ExchangeResult::TerritoryConquered => format!(
            "{} has been conquered! One troop moves in from {}.",
            outcome.target, outcome.origin
        ),
        ExchangeResult::DefenderWinsSkirmish => {
            format!("Defender holds! {} loses one troop.", outcome.origin)
        }
        ExchangeResult::OriginRouted => format!(
            "{} lost its last troop and stands abandoned.",
            outcome.origin
        ),
        ExchangeResult::Standoff => "Standoff: both dice equal, no losses.".to_string(),
    };

    vec![
        Line::from(format!("{} attacks {}!", outcome.origin, outcome.target)),
        Line::from(""),
        Line::from(format!(
            "Attacker die: {}    Defender die: {}",
            outcome.dice.attacker, outcome.dice.defender
        )),
        Line::from(""),
        Line::from(verdict),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn victory_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "MISSION ACCOMPLISHED!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your secret objective is fulfilled."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to leave the battlefield.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn army_color(color: ArmyColor) -> Color {
    match color {
        ArmyColor::Red => Color::Red,
        ArmyColor::Blue => Color::Blue,
        ArmyColor::Green => Color::Green,
    }
}
