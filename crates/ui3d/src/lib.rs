//! 3D box layout for roomscene
//!
//! This crate arranges child volumes inside a parent volume and hands the
//! results to whatever draws the scene. The layout math is pure; the scene
//! side only consumes plain numbers.
//!
//! # Features
//!
//! - **Layout**: Split a volume along one axis with gap, padding, alignment and offsets
//! - **Transform Hierarchy**: Container -> slot -> item transforms for each result
//! - **Debug View**: Container, sub-volume and usable-volume boxes with line vertices
//! - **Picking**: Ray tests against the sub-volumes of a placed container
//!
//! # Example
//!
//! ```rust
//! use glam::Vec3;
//! use roomscene_ui3d::{layout, DebugLayers, LayoutInput, LayoutTree, Transform3D};
//! use roomscene_ui3d::layout::Axis;
//!
//! let input = LayoutInput::new(Vec3::new(10.0, 4.0, 10.0), Axis::X, 3).with_gap(0.5);
//! let results = layout::layout(&input);
//!
//! let tree = LayoutTree::build(Transform3D::new(Vec3::new(0.0, 2.0, 0.0)), &results);
//! let boxes = roomscene_ui3d::debug_boxes(input.size, &results, DebugLayers::all());
//! assert_eq!(tree.len(), 3);
//! assert_eq!(boxes.len(), 7);
//! ```

pub mod components;
pub mod interaction;
pub mod layout;

// Re-export commonly used types
pub use components::{
    debug_boxes, item_debug_view, wireframe_vertices, DebugBox, DebugBoxKind, DebugFill,
    DebugLayers, DebugLineVertex, LayoutNode, LayoutTree, Transform3D,
};
pub use interaction::{pick_slot, screen_to_ray, slot_bounds, Aabb, SlotHit};
pub use layout::{LayoutDescriptor, LayoutError, LayoutInput, LayoutResult};

use anyhow::Result;

/// Version of the UI3D crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the layout system
pub fn init() -> Result<()> {
    tracing::info!("Initializing roomscene-ui3d v{}", VERSION);
    Ok(())
}
