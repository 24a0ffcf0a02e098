use crate::app::AppState;
use crate::camera::Camera;
use crate::lights::Spotlight;
use crate::model::{Rgb, Vec3};
use crate::scene::FrameState;
use crate::ui::canvas::BufferCanvas;
use crate::ui::constants::{HELPER_DOT, HELPER_STEPS, LIGHT_MARKER, SPHERE_COLOR, SPHERE_DOT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn rgb_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.to_bytes();
    Color::Rgb(r, g, b)
}

// Draws the sphere, the lit paragraph and the light rig
pub struct StageRenderer<'a> {
    app: &'a AppState,
}

impl<'a> StageRenderer<'a> {
    pub fn new(app: &'a AppState) -> Self {
        Self { app }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let canvas = self.paint(area.width, area.height);
        let paragraph = Paragraph::new(canvas.to_lines());
        frame.render_widget(paragraph, area);
    }

    /// Paint back to front: sphere wall, lights behind the text, text,
    /// lights in front of it.
    pub fn paint(&self, cols: u16, rows: u16) -> BufferCanvas {
        let mut canvas = BufferCanvas::new(cols as usize, rows as usize);
        let scene = &self.app.scene;
        let camera = scene.camera();
        let frame = self.app.frame();

        self.draw_sphere(&mut canvas, camera, &frame, cols, rows);

        let rig: Vec<(&Spotlight, Vec3)> = scene
            .lights
            .iter()
            .zip(frame.light_positions.iter().copied())
            .filter(|(light, _)| light.visible)
            .collect();

        for (light, pos) in rig.iter().filter(|(_, pos)| pos.z < 0.0) {
            Self::draw_light(&mut canvas, camera, light, *pos, cols, rows);
        }

        for (word, lit) in scene.shaded_words(&frame) {
            let anchor = Vec3::new(word.x, word.y, 0.0);
            if let Some((col, row)) = camera.project(anchor, cols, rows) {
                let style = Style::default()
                    .fg(rgb_color(lit))
                    .add_modifier(Modifier::BOLD);
                canvas.draw_styled_text_at(col, row, &word.text, style);
            }
        }

        for (light, pos) in rig.iter().filter(|(_, pos)| pos.z >= 0.0) {
            Self::draw_light(&mut canvas, camera, light, *pos, cols, rows);
        }

        canvas
    }

    fn draw_sphere(
        &self,
        canvas: &mut BufferCanvas,
        camera: &Camera,
        frame: &FrameState,
        cols: u16,
        rows: u16,
    ) {
        let sphere = &self.app.scene.settings.sphere;
        let style = Style::default().fg(SPHERE_COLOR);

        for point in sphere.vertices(frame.sphere_rotation) {
            if !sphere.shows_inside(point, camera.distance) {
                continue;
            }
            if let Some((col, row)) = camera.project(point, cols, rows) {
                canvas.plot(col, row, SPHERE_DOT, style);
            }
        }
    }

    // Marker at the light, dots along its aim toward the target
    fn draw_light(
        canvas: &mut BufferCanvas,
        camera: &Camera,
        light: &Spotlight,
        pos: Vec3,
        cols: u16,
        rows: u16,
    ) {
        let style = Style::default().fg(rgb_color(light.color));

        for step in 1..=HELPER_STEPS {
            let t = step as f64 / (HELPER_STEPS + 1) as f64;
            if let Some((col, row)) = camera.project(pos.lerp(light.target, t), cols, rows) {
                canvas.plot(col, row, HELPER_DOT, style);
            }
        }

        if let Some((col, row)) = camera.project(pos, cols, rows) {
            canvas.plot(col, row, LIGHT_MARKER, style.add_modifier(Modifier::BOLD));
        }
    }
}
