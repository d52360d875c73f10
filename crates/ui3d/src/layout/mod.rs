//! 3D Box Layout
//!
//! Arranges any number of child volumes along one axis of a parent volume,
//! with per-item padding, alignment and manual offset. The engine is pure: it
//! turns a [`LayoutInput`] into index-aligned [`LayoutResult`]s and knows
//! nothing about rendering.
//!
//! ```
//! use glam::Vec3;
//! use roomscene_ui3d::layout::{layout, Axis, LayoutInput};
//!
//! let results = layout(&LayoutInput::new(Vec3::splat(10.0), Axis::X, 2));
//! assert_eq!(results[0].sub_volume_center, Vec3::new(-2.5, 0.0, 0.0));
//! assert_eq!(results[1].sub_volume_center, Vec3::new(2.5, 0.0, 0.0));
//! ```

mod descriptor;
mod engine;
mod error;
mod input;
mod resolve;
mod types;

pub use descriptor::{item_count, LayoutDescriptor, PaddingSpec, MAX_ITEM_COUNT};
pub use engine::{
    alignment_offset, final_offset, item_center, layout, sub_volume_center, sub_volume_extent,
    sub_volume_size, usable_size, LayoutResult,
};
pub use error::LayoutError;
pub use input::{LayoutInput, DEFAULT_PARENT_SIZE};
pub use resolve::{
    resolve, resolve_alignment, resolve_offset, resolve_padding, DEFAULT_ALIGNMENT,
    DEFAULT_OFFSET, DEFAULT_PADDING,
};
pub use types::{
    Alignment, Alignment3, AlignmentParseError, Axis, AxisAlignment, AxisOffset, Padding,
};
