//! Tolerance helpers for float geometry.

use glam::Vec3;

/// Default absolute tolerance for layout comparisons.
pub const EPSILON: f32 = 1e-4;

/// Absolute-or-relative closeness, scaled by the larger magnitude.
pub fn near(a: f32, b: f32, eps: f32) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= eps * scale
}

/// Component-wise [`near`].
pub fn vec3_near(a: Vec3, b: Vec3, eps: f32) -> bool {
    near(a.x, b.x, eps) && near(a.y, b.y, eps) && near(a.z, b.z, eps)
}

/// Panic with both values unless they are within [`EPSILON`].
#[track_caller]
pub fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        vec3_near(actual, expected, EPSILON),
        "expected {expected:?}, got {actual:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_scales_with_magnitude() {
        assert!(near(1000.0, 1000.05, EPSILON));
        assert!(!near(1.0, 1.01, EPSILON));
        assert!(vec3_near(Vec3::ONE, Vec3::splat(1.00001), EPSILON));
    }
}
