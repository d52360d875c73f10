//! Typed input for a single layout pass.

use glam::Vec3;

use super::resolve::{resolve_alignment, resolve_offset, resolve_padding};
use super::types::{Alignment3, Axis, AxisAlignment, AxisOffset, Padding};

/// Parent size used when none is given (matches the descriptor defaults).
pub const DEFAULT_PARENT_SIZE: Vec3 = Vec3::splat(10.0);

/// Everything the engine needs to place `count` items inside a parent volume.
///
/// Override vectors are index-aligned with the items. They may be shorter than
/// `count`; missing entries fall back to the shared defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutInput {
    /// Parent volume (width, height, depth).
    pub size: Vec3,
    /// Split axis.
    pub axis: Axis,
    /// Space between neighbouring sub-volumes along the split axis.
    pub gap: f32,
    /// Number of items to place.
    pub count: usize,
    /// Shared padding for every item.
    pub padding: Option<Padding>,
    /// Per-item padding overrides.
    pub item_paddings: Vec<Option<Padding>>,
    /// Shared per-axis alignment defaults.
    pub align: AxisAlignment,
    /// Per-item alignment overrides.
    pub item_aligns: Vec<AxisAlignment>,
    /// Per-item manual offsets.
    pub item_offsets: Vec<AxisOffset>,
}

impl Default for LayoutInput {
    fn default() -> Self {
        Self {
            size: DEFAULT_PARENT_SIZE,
            axis: Axis::X,
            gap: 0.0,
            count: 0,
            padding: None,
            item_paddings: Vec::new(),
            align: AxisAlignment::NONE,
            item_aligns: Vec::new(),
            item_offsets: Vec::new(),
        }
    }
}

impl LayoutInput {
    /// Layout of `count` items split along `axis` of a `size` volume.
    pub fn new(size: Vec3, axis: Axis, count: usize) -> Self {
        Self {
            size,
            axis,
            count,
            ..Default::default()
        }
    }

    /// Builder: Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Builder: Set shared padding
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Builder: Set shared alignment defaults
    pub fn with_align(mut self, align: impl Into<AxisAlignment>) -> Self {
        self.align = align.into();
        self
    }

    /// Builder: Override padding for one item
    pub fn with_item_padding(mut self, index: usize, padding: impl Into<Padding>) -> Self {
        if self.item_paddings.len() <= index {
            self.item_paddings.resize(index + 1, None);
        }
        self.item_paddings[index] = Some(padding.into());
        self
    }

    /// Builder: Override alignment for one item
    pub fn with_item_align(mut self, index: usize, align: impl Into<AxisAlignment>) -> Self {
        if self.item_aligns.len() <= index {
            self.item_aligns.resize(index + 1, AxisAlignment::NONE);
        }
        self.item_aligns[index] = align.into();
        self
    }

    /// Builder: Set manual offset for one item
    pub fn with_item_offset(mut self, index: usize, offset: impl Into<AxisOffset>) -> Self {
        if self.item_offsets.len() <= index {
            self.item_offsets.resize(index + 1, AxisOffset::default());
        }
        self.item_offsets[index] = offset.into();
        self
    }

    /// Resolved alignment for item `index`.
    pub fn item_alignment(&self, index: usize) -> Alignment3 {
        resolve_alignment(self.item_aligns.get(index), &self.align)
    }

    /// Resolved per-axis padding for item `index`.
    pub fn item_padding(&self, index: usize) -> Vec3 {
        let item = self.item_paddings.get(index).copied().flatten();
        resolve_padding(item, self.padding)
    }

    /// Resolved manual offset for item `index`.
    pub fn item_offset(&self, index: usize) -> Vec3 {
        resolve_offset(self.item_offsets.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Alignment;

    #[test]
    fn builders_grow_override_vectors() {
        let input = LayoutInput::new(Vec3::splat(10.0), Axis::X, 3)
            .with_item_padding(2, 1.0)
            .with_item_offset(1, Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(input.item_paddings.len(), 3);
        assert_eq!(input.item_padding(0), Vec3::ZERO);
        assert_eq!(input.item_padding(2), Vec3::ONE);
        assert_eq!(input.item_offset(1), Vec3::Y);
        assert_eq!(input.item_offset(5), Vec3::ZERO);
    }

    #[test]
    fn shared_alignment_applies_to_items_without_override() {
        let input = LayoutInput::new(Vec3::splat(10.0), Axis::Y, 2)
            .with_align(AxisAlignment {
                z: Some(Alignment::End),
                ..AxisAlignment::NONE
            })
            .with_item_align(1, Alignment3::splat(Alignment::Start));

        assert_eq!(
            input.item_alignment(0),
            Alignment3::new(Alignment::Center, Alignment::Center, Alignment::End)
        );
        assert_eq!(input.item_alignment(1), Alignment3::splat(Alignment::Start));
    }
}
