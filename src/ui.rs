use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub mod canvas;
pub mod constants;
pub mod help;
pub mod stage;
pub mod status_line;


use help::HelpRenderer;
use stage::StageRenderer;
use status_line::StatusLineRenderer;

// Main render function
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let size = frame.area();

    // Create main layout chunks
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    // The paragraph wraps to the stage, not the whole terminal
    let stage = chunks[0];
    if (stage.width, stage.height) != (app.terminal_width, app.terminal_height) {
        if let Err(e) = app.resize(stage.width, stage.height) {
            tracing::warn!("relayout failed: {e}");
            app.set_message(format!("Layout failed: {}", e));
        }
    }

    match &app.mode {
        AppMode::Help => HelpRenderer::render(frame, stage),
        AppMode::Normal => StageRenderer::new(app).render(frame, stage),
    }

    StatusLineRenderer::render(frame, app, chunks[1]);
}
