//! src/sphere.rs
//! -------------
//! The single sphere the debug view is built around.

use crate::algebra::Vec3;
use serde::Serialize;

/// Hits closer than this are treated as behind the ray origin.
pub const T_MIN: f32 = 1e-4;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Sphere {
    pub center : Vec3,
    pub radius : f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Intersect a ray (ro + t·rd) with a *unit length* `rd`.
    /// Returns the nearer root past `T_MIN`, falling back to the far root
    /// when the origin is inside or on the surface.
    pub fn hit(&self, ro: Vec3, rd: Vec3) -> Option<f32> {
        // Analytic quadratic, a == 1
        let oc   = ro.sub(self.center);
        let b    = 2.0 * rd.dot(oc);
        let c    = oc.dot(oc) - self.radius * self.radius;
        let disc = b*b - 4.0*c;
        if disc < 0.0 { return None; }

        let sq = disc.sqrt();
        let t0 = (-b - sq) * 0.5;
        let t1 = (-b + sq) * 0.5;
        let t  = if t0 > T_MIN { t0 } else { t1 };
        (t > T_MIN).then_some(t)
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        p.sub(self.center).normalize()
    }
}
