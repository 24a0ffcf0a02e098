use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::lights::LightId;
use crate::scene::{FrameState, Scene, SceneSettings};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Help,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub scene: Scene,
    pub config: AppConfig,

    /// Seconds since the animation started
    pub time: f64,

    // Viewport state
    pub terminal_width: u16,
    pub terminal_height: u16,

    // Message for status line
    pub message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let scene = Scene::new(SceneSettings::from(&config), config.paragraph.clone())?;

        Ok(Self {
            running: true,
            mode: AppMode::Normal,
            scene,
            config,
            time: 0.0,
            terminal_width: 80,
            terminal_height: 24,
            message: None,
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.config.fps.max(1) as f64)
    }

    pub fn set_time(&mut self, elapsed: Duration) {
        self.time = elapsed.as_secs_f64();
    }

    pub fn frame(&self) -> FrameState {
        self.scene.frame(self.time)
    }

    /// Track the drawable area and re-wrap the paragraph when it changes.
    pub fn resize(&mut self, width: u16, height: u16) -> AppResult<()> {
        self.terminal_width = width;
        self.terminal_height = height;
        self.scene.relayout(width, height)?;
        Ok(())
    }

    /// Layout for a `width` by `height` stage as pretty JSON.
    pub fn layout_json(&mut self, width: u16, height: u16) -> AppResult<String> {
        self.resize(width, height)?;
        Ok(serde_json::to_string_pretty(&self.scene.text)?)
    }

    pub fn toggle_light(&mut self, id: LightId) {
        if let Some(visible) = self.scene.toggle_light(id) {
            self.set_message(format!(
                "{} spotlight: {}",
                id.name(),
                if visible { "ON" } else { "OFF" }
            ));
        }
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
