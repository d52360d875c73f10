//! Slot picking - Detect which layout sub-volume a pointer ray hits

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::components::LayoutTree;
use crate::layout::LayoutResult;

/// Result of picking a layout slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotHit {
    /// Index of the item whose sub-volume was hit
    pub index: usize,
    /// Distance from ray origin to the entry point
    pub distance: f32,
    /// World position of the entry point
    pub position: Vec3,
}

/// Axis-aligned bounding box in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    /// Minimum corner of the box
    pub min: Vec3,
    /// Maximum corner of the box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from center position and size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half_size = size * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive point containment
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test if a ray intersects this AABB
    /// Returns distance to intersection point if hit
    pub fn ray_intersection(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
        let inv_dir = Vec3::ONE / ray_dir;

        let t1 = (self.min - ray_origin) * inv_dir;
        let t2 = (self.max - ray_origin) * inv_dir;

        let tmin = t1.min(t2).max_element();
        let tmax = t1.max(t2).min_element();

        // Entire box is behind the ray
        if tmax < 0.0 {
            return None;
        }

        if tmin > tmax {
            return None;
        }

        // Origin inside the box: report the exit distance
        let distance = if tmin < 0.0 { tmax } else { tmin };

        Some(distance)
    }
}

/// Convert screen coordinates to a 3D ray in world space
pub fn screen_to_ray(
    screen_pos: (f32, f32),
    screen_size: (u32, u32),
    view_matrix: &Mat4,
    projection_matrix: &Mat4,
) -> (Vec3, Vec3) {
    // Convert screen coordinates to normalized device coordinates (-1 to 1)
    let x = (2.0 * screen_pos.0) / screen_size.0 as f32 - 1.0;
    let y = 1.0 - (2.0 * screen_pos.1) / screen_size.1 as f32; // Flip Y

    let ray_clip = Vec3::new(x, y, -1.0);

    let inv_proj = projection_matrix.inverse();
    let ray_eye = inv_proj.project_point3(ray_clip);
    let ray_eye = Vec3::new(ray_eye.x, ray_eye.y, -1.0);

    let inv_view = view_matrix.inverse();
    let ray_world = inv_view.transform_vector3(ray_eye).normalize();
    let ray_origin = inv_view.transform_point3(Vec3::ZERO);

    (ray_origin, ray_world)
}

/// World-space bounds of each sub-volume.
///
/// Honors the container's translation and scale; rotation is ignored, so the
/// bounds are only exact for unrotated containers. Slots with a negative
/// extent have no volume to pick and yield `None`.
pub fn slot_bounds(tree: &LayoutTree, results: &[LayoutResult]) -> Vec<Option<Aabb>> {
    let root = tree.root;
    results
        .iter()
        .map(|r| {
            if r.sub_volume_size.cmplt(Vec3::ZERO).any() {
                return None;
            }
            let center = root.position + root.scale * r.sub_volume_center;
            let size = r.sub_volume_size * root.scale.abs();
            Some(Aabb::from_center_size(center, size))
        })
        .collect()
}

/// Nearest sub-volume hit by the ray, if any.
pub fn pick_slot(
    tree: &LayoutTree,
    results: &[LayoutResult],
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<SlotHit> {
    slot_bounds(tree, results)
        .into_iter()
        .zip(results)
        .filter_map(|(bounds, r)| {
            let distance = bounds?.ray_intersection(ray_origin, ray_dir)?;
            Some(SlotHit {
                index: r.index,
                distance,
                position: ray_origin + ray_dir * distance,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
