use crate::lights::Spotlight;
use crate::model::{Rgb, Vec3};

/// Text faces the camera; both sides are lit.
const TEXT_NORMAL: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Smallest squared distance used for falloff, keeps a light sitting on the
/// surface from blowing up.
const MIN_DISTANCE_SQ: f64 = 1e-4;

fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x >= edge0 { 1.0 } else { 0.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fraction of the cone's intensity reaching direction `cos_theta` off axis,
/// fading across the penumbra.
pub fn cone_factor(light: &Spotlight, cos_theta: f64) -> f64 {
    let outer = light.angle.cos();
    let inner = (light.angle * (1.0 - light.penumbra)).cos();
    smoothstep(outer, inner, cos_theta)
}

/// Irradiance from one light at `point` on the text plane, clamped to `0..=1`.
pub fn irradiance(light: &Spotlight, light_pos: Vec3, point: Vec3) -> f64 {
    let to_light = light_pos.sub(point);
    let distance_sq = to_light.dot(to_light);
    if distance_sq.sqrt() > light.range {
        return 0.0;
    }

    let lambert = to_light.normalized().dot(TEXT_NORMAL).abs();
    let axis = light.target.sub(light_pos).normalized();
    let cos_theta = axis.dot(point.sub(light_pos).normalized());
    let falloff = light.intensity / distance_sq.max(MIN_DISTANCE_SQ);

    (falloff * lambert * cone_factor(light, cos_theta)).clamp(0.0, 1.0)
}

/// Colour of a surface with `base` colour at `point`, lit by the visible
/// lights at `positions` plus a white ambient term.
pub fn shade(base: Rgb, point: Vec3, lights: &[(&Spotlight, Vec3)], ambient: f64) -> Rgb {
    let incoming = lights
        .iter()
        .filter(|(light, _)| light.visible)
        .fold(Rgb::BLACK, |acc, (light, pos)| {
            acc.add(light.color.scale(irradiance(light, *pos, point)))
        });

    base.modulate(incoming).add(base.scale(ambient)).clamped()
}
