use crate::model::{Rgb, Vec3};
use std::f64::consts::PI;

pub const DEFAULT_ORBIT_RADIUS: f64 = 5.0;
pub const DEFAULT_ORBIT_SPEED: f64 = 0.5;

pub const SPOT_INTENSITY: f64 = 900.0;
pub const SPOT_ANGLE: f64 = PI / 2.5;
pub const SPOT_PENUMBRA: f64 = 0.7;
pub const SPOT_RANGE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightId {
    Red,
    Green,
    Blue,
}

impl LightId {
    pub const ALL: [LightId; 3] = [LightId::Red, LightId::Green, LightId::Blue];

    pub fn index(self) -> usize {
        match self {
            LightId::Red => 0,
            LightId::Green => 1,
            LightId::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LightId::Red => "Red",
            LightId::Green => "Green",
            LightId::Blue => "Blue",
        }
    }

    pub fn hex(self) -> u32 {
        match self {
            LightId::Red => 0xff0000,
            LightId::Green => 0x00ff00,
            LightId::Blue => 0x0000ff,
        }
    }

    /// Toggle key, matched case-insensitively.
    pub fn key(self) -> char {
        match self {
            LightId::Red => 'r',
            LightId::Green => 'g',
            LightId::Blue => 'b',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    pub radius: f64,
    /// Radians per second.
    pub speed: f64,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_ORBIT_RADIUS,
            speed: DEFAULT_ORBIT_SPEED,
        }
    }
}

/// Where light `index` is `time` seconds into the animation.
///
/// The red light circles the x axis, green circles it mirrored in y, and
/// every further light circles the y axis. All of them share one angle, so
/// red and green meet on the z axis twice per revolution.
pub fn orbit_position(time: f64, index: usize, params: &OrbitParams) -> Vec3 {
    let angle = time * params.speed;
    let (sin, cos) = angle.sin_cos();
    let r = params.radius;

    match index {
        0 => Vec3::new(0.0, cos * r, sin * r),
        1 => Vec3::new(0.0, cos * -r, sin * r),
        _ => Vec3::new(cos * r, 0.0, sin * r),
    }
}

/// A coloured spotlight aimed at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Spotlight {
    pub id: LightId,
    pub color: Rgb,
    pub intensity: f64,
    /// Half-angle of the cone in radians.
    pub angle: f64,
    pub penumbra: f64,
    pub range: f64,
    pub target: Vec3,
    /// Also governs the helper marker.
    pub visible: bool,
}

impl Spotlight {
    pub fn new(id: LightId) -> Self {
        Self {
            id,
            color: Rgb::from_hex(id.hex()),
            intensity: SPOT_INTENSITY,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
            range: SPOT_RANGE,
            target: Vec3::ZERO,
            visible: true,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

/// The red, green and blue rig.
pub fn default_rig() -> Vec<Spotlight> {
    LightId::ALL.into_iter().map(Spotlight::new).collect()
}
