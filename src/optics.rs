use crate::algebra::Vec3;

/// Mirror the incident direction `i` about the unit normal `n`.
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 { i.sub(n.scale(2.0*i.dot(n))) }

/// Fixed rotation about +Y, trig evaluated once per frame.
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    cos: f32,
    sin: f32,
}

impl RotationY {
    pub fn from_degrees(deg: f32) -> Self {
        let rad = deg.to_radians();
        Self { cos: rad.cos(), sin: rad.sin() }
    }

    pub fn apply(&self, v: Vec3) -> Vec3 {
        Vec3(
            self.cos * v.0 + self.sin * v.2,
            v.1,
            -self.sin * v.0 + self.cos * v.2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reflect_head_on() {
        let r = reflect(Vec3(0.0, 0.0, -1.0), Vec3(0.0, 0.0, 1.0));
        assert_eq!(r, Vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_reflect_grazing_keeps_tangent() {
        let i = Vec3(1.0, -1.0, 0.0).normalize();
        let r = reflect(i, Vec3(0.0, 1.0, 0.0));
        assert_relative_eq!(r.0, i.0, epsilon = 1e-6);
        assert_relative_eq!(r.1, -i.1, epsilon = 1e-6);
        assert_relative_eq!(r.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        let v = Vec3(0.3, -0.4, 0.5);
        assert_eq!(RotationY::from_degrees(0.0).apply(v), v);
    }

    #[test]
    fn test_rotation_sixty_degrees() {
        let r = RotationY::from_degrees(60.0).apply(Vec3(0.0, 0.0, 1.0));
        assert_relative_eq!(r.0, 3f32.sqrt() / 2.0, epsilon = 1e-6);
        assert_relative_eq!(r.1, 0.0);
        assert_relative_eq!(r.2, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_preserves_y_and_length() {
        let v = Vec3(0.2, 0.7, -0.1);
        let r = RotationY::from_degrees(137.0).apply(v);
        assert_eq!(r.1, v.1);
        assert_relative_eq!(r.norm(), v.norm(), epsilon = 1e-6);
    }
}
