//! Box layout engine.
//!
//! Splits a parent volume into `count` equal sub-volumes along one axis and
//! places an item inside each one. All positions are relative to the parent's
//! center. Nothing is clamped: oversized gaps or padding produce zero or
//! negative extents, which callers may want to visualize.

use glam::Vec3;
use serde::Serialize;
use tracing::debug;

use super::input::LayoutInput;
use super::types::{Alignment, Alignment3, Axis};

/// Placement computed for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutResult {
    /// Position of the item in the caller's list.
    pub index: usize,
    /// Sub-volume extents (width, height, depth).
    pub sub_volume_size: Vec3,
    /// Sub-volume center relative to the parent center.
    pub sub_volume_center: Vec3,
    /// Sub-volume shrunk by padding on both sides.
    pub usable_size: Vec3,
    /// Item origin relative to the sub-volume center.
    pub final_offset: Vec3,
    /// Alignment the item resolved to.
    pub alignment: Alignment3,
    /// Padding the item resolved to.
    pub padding: Vec3,
}

impl LayoutResult {
    /// Item origin relative to the parent center.
    pub fn item_position(&self) -> Vec3 {
        self.sub_volume_center + self.final_offset
    }
}

/// Extent of each sub-volume along the split axis.
///
/// A single item (or none) takes the whole parent extent.
pub fn sub_volume_extent(parent_extent: f32, gap: f32, count: usize) -> f32 {
    if count <= 1 {
        return parent_extent;
    }
    (parent_extent - gap * (count - 1) as f32) / count as f32
}

/// Sub-volume size on all axes. Axes other than `axis` keep the parent size.
pub fn sub_volume_size(parent: Vec3, axis: Axis, gap: f32, count: usize) -> Vec3 {
    let extent = sub_volume_extent(axis.component(parent), gap, count);
    axis.with_component(parent, extent)
}

/// Center of sub-volume `index` along the split axis.
pub fn item_center(index: usize, parent_extent: f32, item_extent: f32, gap: f32) -> f32 {
    -parent_extent / 2.0 + item_extent / 2.0 + index as f32 * (item_extent + gap)
}

/// Center of sub-volume `index`; zero on the axes that are not split.
pub fn sub_volume_center(index: usize, parent: Vec3, item: Vec3, axis: Axis, gap: f32) -> Vec3 {
    let center = item_center(
        index,
        axis.component(parent),
        axis.component(item),
        gap,
    );
    axis.with_component(Vec3::ZERO, center)
}

/// Usable extents after removing `padding` from both sides of each axis.
pub fn usable_size(item: Vec3, padding: Vec3) -> Vec3 {
    item - padding * 2.0
}

/// Displacement from the usable region's center to where an aligned origin sits.
///
/// The engine does not know item sizes, so `Start`/`End` put the item's origin
/// on the usable edge rather than its bounding box.
pub fn alignment_offset(alignment: Alignment, usable_extent: f32) -> f32 {
    match alignment {
        Alignment::Start => -usable_extent / 2.0,
        Alignment::Center => 0.0,
        Alignment::End => usable_extent / 2.0,
    }
}

/// Alignment offset plus manual offset, per axis.
pub fn final_offset(alignment: Alignment3, usable: Vec3, manual: Vec3) -> Vec3 {
    Vec3::new(
        alignment_offset(alignment.x, usable.x) + manual.x,
        alignment_offset(alignment.y, usable.y) + manual.y,
        alignment_offset(alignment.z, usable.z) + manual.z,
    )
}

/// Lay out every item of `input`, in input order.
pub fn layout(input: &LayoutInput) -> Vec<LayoutResult> {
    if input.count == 0 {
        return Vec::new();
    }

    let item_size = sub_volume_size(input.size, input.axis, input.gap, input.count);
    debug!(
        axis = %input.axis,
        count = input.count,
        gap = input.gap,
        extent = input.axis.component(item_size),
        "computing box layout"
    );

    (0..input.count)
        .map(|index| {
            let alignment = input.item_alignment(index);
            let padding = input.item_padding(index);
            let manual = input.item_offset(index);

            let center = sub_volume_center(index, input.size, item_size, input.axis, input.gap);
            let usable = usable_size(item_size, padding);

            LayoutResult {
                index,
                sub_volume_size: item_size,
                sub_volume_center: center,
                usable_size: usable,
                final_offset: final_offset(alignment, usable, manual),
                alignment,
                padding,
            }
        })
        .collect()
}
