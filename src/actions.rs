use crate::app::{AppMode, AppState};
use crate::lights::LightId;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Application control
    Quit,

    // Lights
    ToggleLight(LightId),

    // Help
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    match action {
        Action::Quit => {
            app.running = false;
        }
        Action::ToggleLight(id) => app.toggle_light(id),
        Action::ShowHelp => {
            app.clear_message();
            app.mode = AppMode::Help;
        }
        Action::CloseHelp => {
            app.mode = AppMode::Normal;
        }
    }
    Ok(())
}
