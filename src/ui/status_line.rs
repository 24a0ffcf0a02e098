use crate::app::{AppMode, AppState};
use crate::ui::constants::{APP_NAME, HELP_HINT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::get_content_and_style(app);

        let paragraph = Paragraph::new(content)
            .style(style)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    pub fn get_content_and_style(app: &AppState) -> (String, Style) {
        match &app.mode {
            AppMode::Normal => Self::render_normal_mode(app),
            AppMode::Help => Self::render_help_mode(),
        }
    }

    fn render_normal_mode(app: &AppState) -> (String, Style) {
        let content = if let Some(ref msg) = app.message {
            msg.clone()
        } else {
            let text = &app.scene.text;
            format!(
                "{} | {} words, {} lines | {} | ? help",
                APP_NAME,
                text.word_count(),
                text.line_count(),
                Self::light_summary(app)
            )
        };

        let style = if app.message.is_some() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::Black)
        };

        (content, style)
    }

    /// `R:on G:off B:on`
    fn light_summary(app: &AppState) -> String {
        app.scene
            .lights
            .iter()
            .map(|light| {
                format!(
                    "{}:{}",
                    light.id.key().to_ascii_uppercase(),
                    if light.visible { "on" } else { "off" }
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_help_mode() -> (String, Style) {
        let content = String::from(HELP_HINT);
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        (content, style)
    }
}
