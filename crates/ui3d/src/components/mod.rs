//! Scene-side consumers of layout results.
//!
//! This module turns plain layout numbers into the pieces a renderer needs: a
//! nested transform hierarchy per item and optional debug boxes.

pub mod debug;
pub mod node;

pub use debug::{
    debug_boxes, item_debug_view, wireframe_vertices, DebugBox, DebugBoxKind, DebugFill,
    DebugLayers, DebugLineVertex,
};
pub use node::{LayoutNode, LayoutTree};

use glam::{Mat4, Quat, Vec3};
use serde::Serialize;

/// Transform in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Local-to-parent matrix (scale, then rotation, then translation).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}
