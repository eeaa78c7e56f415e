//! Colors for scene elements (linear RGBA, 0-1)

pub const BALL: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const VELOCITY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const ACCELERATION: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
pub const LABEL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const BACKGROUND: [f32; 4] = [0.08, 0.08, 0.1, 1.0];

/// Convert to 8-bit channels
pub fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}
