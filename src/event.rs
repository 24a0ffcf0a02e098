use crate::actions::Action;
use crate::app::{AppMode, AppState};
use crate::lights::LightId;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Wait up to `timeout` for input. Resizes are picked up by the next draw.
pub fn handle_events(app: &mut AppState, timeout: Duration) -> Result<Option<Action>> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                return Ok(handle_key_event(app, key));
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match &app.mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (Char('q'), KeyModifiers::NONE) | (Esc, _) => Some(Action::Quit),

        // Help
        (Char('?'), _) => Some(Action::ShowHelp),

        // Lights: r, g, b in either case
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            LightId::from_key(c).map(Action::ToggleLight)
        }

        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (Esc, _) | (Char('q'), _) | (Char('?'), _) => Some(Action::CloseHelp),
        _ => None,
    }
}
