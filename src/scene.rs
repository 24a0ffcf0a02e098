//! Scene state owned by the render loop.
//!
//! Everything that moves is a function of elapsed time; the scene only holds
//! what the viewer changes (light toggles, viewport).

use crate::camera::Camera;
use crate::config::AppConfig;
use crate::layout::{LayoutParams, TextBlock};
use crate::lights::{default_rig, orbit_position, LightId, OrbitParams, Spotlight};
use crate::metrics::MonospaceMetrics;
use crate::model::{PlacedWord, Rgb, Vec3};
use crate::palette::Palette;
use crate::shading::shade;
use crate::wrap::LayoutError;
use std::f64::consts::PI;
use tracing::{debug, info};

pub const SPHERE_SEGMENTS: usize = 32;

/// Back-faced sphere enclosing the scene, spinning about the z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    /// Radians per second.
    pub spin: f64,
    pub width_segments: usize,
    pub height_segments: usize,
}

impl Sphere {
    pub fn new(radius: f64, spin: f64) -> Self {
        Self {
            radius,
            spin,
            width_segments: SPHERE_SEGMENTS,
            height_segments: SPHERE_SEGMENTS,
        }
    }

    pub fn rotation(&self, time: f64) -> f64 {
        time * self.spin
    }

    /// Grid vertices (poles on the y axis) rotated by `rotation` about z.
    /// The seam column is not repeated.
    pub fn vertices(&self, rotation: f64) -> Vec<Vec3> {
        let (sin_r, cos_r) = rotation.sin_cos();
        let mut points = Vec::with_capacity((self.height_segments + 1) * self.width_segments);

        for iy in 0..=self.height_segments {
            let v = iy as f64 / self.height_segments as f64;
            for ix in 0..self.width_segments {
                let u = ix as f64 / self.width_segments as f64;
                let x = -self.radius * (u * 2.0 * PI).cos() * (v * PI).sin();
                let y = self.radius * (v * PI).cos();
                let z = self.radius * (u * 2.0 * PI).sin() * (v * PI).sin();
                points.push(Vec3::new(x * cos_r - y * sin_r, x * sin_r + y * cos_r, z));
            }
        }

        points
    }

    /// Whether the inside of the sphere at `point` faces a camera at
    /// `(0, 0, distance)`. Only those faces are drawn.
    pub fn shows_inside(&self, point: Vec3, camera_distance: f64) -> bool {
        point.z * camera_distance < self.radius * self.radius
    }
}

/// Everything the scene needs from configuration.
#[derive(Debug, Clone)]
pub struct SceneSettings {
    pub font_size: f64,
    pub glyph_advance: f64,
    pub space_ratio: f64,
    pub line_height_ratio: f64,
    pub text_width_ratio: f64,
    pub camera: Camera,
    pub sphere: Sphere,
    pub orbit: OrbitParams,
    pub ambient: f64,
    pub palette: Palette,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for SceneSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            font_size: config.font_size,
            glyph_advance: config.glyph_advance,
            space_ratio: config.space_ratio,
            line_height_ratio: config.line_height_ratio,
            text_width_ratio: config.text_width_ratio,
            camera: Camera {
                fov_degrees: config.camera_fov,
                distance: config.camera_distance,
                cell_aspect: config.cell_aspect,
            },
            sphere: Sphere::new(config.sphere_radius, config.sphere_spin),
            orbit: OrbitParams {
                radius: config.orbit_radius,
                speed: config.orbit_speed,
            },
            ambient: config.ambient,
            palette: Palette::new(&config.red_words, &config.blue_words, &config.green_words),
        }
    }
}

/// Transforms for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub time: f64,
    pub sphere_rotation: f64,
    /// Indexed like the light rig.
    pub light_positions: Vec<Vec3>,
}

pub struct Scene {
    pub settings: SceneSettings,
    pub paragraph: String,
    pub text: TextBlock,
    pub lights: Vec<Spotlight>,
    pub viewport: (u16, u16),
}

impl Scene {
    pub fn new(settings: SceneSettings, paragraph: impl Into<String>) -> Result<Self, LayoutError> {
        Self::with_viewport(settings, paragraph, 80, 24)
    }

    pub fn with_viewport(
        settings: SceneSettings,
        paragraph: impl Into<String>,
        cols: u16,
        rows: u16,
    ) -> Result<Self, LayoutError> {
        let paragraph = paragraph.into();
        let text = build_text(&settings, &paragraph, cols, rows)?;
        info!(
            words = text.word_count(),
            lines = text.line_count(),
            "scene assembled"
        );

        Ok(Self {
            settings,
            paragraph,
            text,
            lights: default_rig(),
            viewport: (cols, rows),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.settings.camera
    }

    /// Width a line may fill for the given viewport.
    pub fn target_width(&self, cols: u16, rows: u16) -> f64 {
        target_width(&self.settings, cols, rows)
    }

    /// Re-run the layout for a new viewport. Returns false when the viewport
    /// is unchanged and nothing was recomputed.
    pub fn relayout(&mut self, cols: u16, rows: u16) -> Result<bool, LayoutError> {
        if self.viewport == (cols, rows) {
            return Ok(false);
        }
        self.text = build_text(&self.settings, &self.paragraph, cols, rows)?;
        self.viewport = (cols, rows);
        debug!(
            cols,
            rows,
            width = self.text.max_line_width(),
            lines = ?self.text.line_texts(),
            "relayout"
        );
        Ok(true)
    }

    pub fn frame(&self, time: f64) -> FrameState {
        FrameState {
            time,
            sphere_rotation: self.settings.sphere.rotation(time),
            light_positions: (0..self.lights.len())
                .map(|index| orbit_position(time, index, &self.settings.orbit))
                .collect(),
        }
    }

    pub fn light(&self, id: LightId) -> Option<&Spotlight> {
        self.lights.iter().find(|l| l.id == id)
    }

    /// Flip a light and its helper. Returns the new visibility.
    pub fn toggle_light(&mut self, id: LightId) -> Option<bool> {
        let light = self.lights.iter_mut().find(|l| l.id == id)?;
        let visible = light.toggle();
        info!("{} spotlight: {}", id.name(), if visible { "ON" } else { "OFF" });
        Some(visible)
    }

    /// Each placed word with its lit colour, sampled at the word's centre.
    pub fn shaded_words(&self, frame: &FrameState) -> Vec<(&PlacedWord, Rgb)> {
        let lights: Vec<(&Spotlight, Vec3)> = self
            .lights
            .iter()
            .zip(frame.light_positions.iter().copied())
            .collect();

        self.text
            .words
            .iter()
            .map(|word| {
                let centre = Vec3::new(word.x + word.width / 2.0, word.y, 0.0);
                let lit = shade(word.color.rgb(), centre, &lights, self.settings.ambient);
                (word, lit)
            })
            .collect()
    }
}

fn target_width(settings: &SceneSettings, cols: u16, rows: u16) -> f64 {
    let (width, _) = settings.camera.text_plane_extent(cols, rows);
    width * settings.text_width_ratio
}

/// Glyphs are drawn one per terminal cell, so words are measured in cells
/// of the current viewport and gaps and leading snap to whole cells.
fn build_text(
    settings: &SceneSettings,
    paragraph: &str,
    cols: u16,
    rows: u16,
) -> Result<TextBlock, LayoutError> {
    let grid = settings.camera.cell_grid(cols, rows);
    let metrics = MonospaceMetrics::from_column_width(grid.column_width, settings.glyph_advance);
    let params = LayoutParams {
        font_size: metrics.font_size * settings.font_size,
        target_width: target_width(settings, cols, rows),
        space_ratio: settings.space_ratio,
        line_height_ratio: settings.line_height_ratio,
        grid: Some(grid),
    };
    TextBlock::build(paragraph, &metrics, &settings.palette, &params)
}
