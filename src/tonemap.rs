use crate::algebra::Vec3;

/// Keeps the zero vector finite when normalizing.
const NORM_EPS: f32 = 1e-12;

/// Encode a direction as RGB: each component of `normalize(v)` goes from
/// [-1, 1] to [0, 255], clamped and truncated.
pub fn direction_to_rgb(v: Vec3) -> [u8; 3] {
    let c = v
        .scale(1.0 / (v.norm() + NORM_EPS))
        .map(|x| ((x * 0.5 + 0.5) * 255.0).clamp(0.0, 255.0));
    [c.0 as u8, c.1 as u8, c.2 as u8]
}
