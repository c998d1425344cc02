use crate::{algebra::Vec3, sphere::Sphere};
use serde::Serialize;

pub const OUTPUT_NAME: &str = "debug_reflection_sphere_rotated.png";

/// Everything the renderer needs. Built once, read-only afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    /// Camera sits at (0, 0, cam_z) looking down -Z.
    pub cam_z: f32,
    pub sphere: Sphere,
    /// Rotation of the reflection vector about +Y.
    pub angle_deg: f32,
    /// Vertical FOV. Reported only; primary rays are built straight from NDC.
    pub fov_deg: f32,
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            cam_z: 2.0,
            sphere: Sphere::new(Vec3::ZERO, 1.0),
            angle_deg: 60.0,
            fov_deg: 45.0,
            output: OUTPUT_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn camera_pos(&self) -> Vec3 { Vec3(0.0, 0.0, self.cam_z) }

    pub fn aspect(&self) -> f32 { self.width as f32 / self.height as f32 }
}
