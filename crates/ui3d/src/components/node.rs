//! Transform hierarchy built from layout results.
//!
//! Each item is nested two levels under the container:
//! container transform -> slot (sub-volume center) -> item (final offset).

use glam::{Mat4, Vec3};
use serde::Serialize;

use super::Transform3D;
use crate::layout::LayoutResult;

/// Transforms for one laid-out item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutNode {
    /// Index of the item in the caller's list.
    pub index: usize,
    /// Sub-volume center, relative to the container.
    pub slot: Transform3D,
    /// Final offset, relative to the slot.
    pub item: Transform3D,
}

impl LayoutNode {
    pub fn from_result(result: &LayoutResult) -> Self {
        Self {
            index: result.index,
            slot: Transform3D::new(result.sub_volume_center),
            item: Transform3D::new(result.final_offset),
        }
    }

    /// Item-to-container matrix.
    pub fn local_matrix(&self) -> Mat4 {
        self.slot.to_matrix() * self.item.to_matrix()
    }
}

/// A container transform and the nodes of every item placed in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTree {
    pub root: Transform3D,
    pub nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    /// Build the hierarchy for `results` under `root`.
    pub fn build(root: Transform3D, results: &[LayoutResult]) -> Self {
        Self {
            root,
            nodes: results.iter().map(LayoutNode::from_result).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Container matrix; debug boxes and slots are expressed in this frame.
    pub fn root_matrix(&self) -> Mat4 {
        self.root.to_matrix()
    }

    /// World matrix of the slot (sub-volume) for item `index`.
    pub fn slot_matrix(&self, index: usize) -> Option<Mat4> {
        self.nodes
            .get(index)
            .map(|node| self.root_matrix() * node.slot.to_matrix())
    }

    /// World matrix of item `index`: root, then slot, then offset.
    pub fn world_matrix(&self, index: usize) -> Option<Mat4> {
        self.nodes
            .get(index)
            .map(|node| self.root_matrix() * node.local_matrix())
    }

    /// World-space origin of item `index`.
    pub fn world_position(&self, index: usize) -> Option<Vec3> {
        self.world_matrix(index)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout, Alignment, Alignment3, Axis, LayoutInput};
    use glam::Quat;

    fn near(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn world_position_adds_root_slot_and_offset() {
        let input = LayoutInput::new(Vec3::splat(10.0), Axis::X, 2)
            .with_align(Alignment3::new(Alignment::End, Alignment::Start, Alignment::Center));
        let results = layout(&input);
        let tree = LayoutTree::build(Transform3D::new(Vec3::new(0.0, 2.0, 0.0)), &results);

        assert_eq!(tree.len(), 2);
        // slot x = -2.5, end on 5 wide => +2.5; start on 10 tall => -5
        assert!(near(tree.world_position(0).unwrap(), Vec3::new(0.0, -3.0, 0.0)));
        assert!(near(tree.world_position(1).unwrap(), Vec3::new(5.0, -3.0, 0.0)));
        assert!(tree.world_position(2).is_none());
    }

    #[test]
    fn root_rotation_carries_children() {
        let results = layout(&LayoutInput::new(Vec3::splat(4.0), Axis::X, 2));
        let root = Transform3D::default()
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let tree = LayoutTree::build(root, &results);

        // Slot 1 sits at +1 on x; a quarter turn about y maps +x to -z.
        assert!(near(tree.world_position(1).unwrap(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn empty_results_build_empty_tree() {
        let tree = LayoutTree::build(Transform3D::default(), &[]);
        assert!(tree.is_empty());
        assert!(tree.slot_matrix(0).is_none());
    }
}
