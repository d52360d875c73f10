//! Debug boxes for layout visualization.
//!
//! A pure view over [`LayoutResult`]s: the parent volume, each raw sub-volume
//! and each usable (padded) sub-volume. Boxes are expressed in the container's
//! local frame and carry no state of their own.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::Serialize;

use crate::layout::LayoutResult;

/// Translucent red fill for the parent volume.
pub const CONTAINER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.05];
/// Red outline for raw sub-volumes.
pub const SUB_VOLUME_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Green outline for usable sub-volumes.
pub const USABLE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// Which debug box kinds to emit.
    pub struct DebugLayers: u8 {
        const CONTAINER = 0b0000_0001;
        const SUB_VOLUME = 0b0000_0010;
        const USABLE = 0b0000_0100;
    }
}

impl Default for DebugLayers {
    fn default() -> Self {
        DebugLayers::all()
    }
}

/// Which extent a debug box outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DebugBoxKind {
    Container,
    SubVolume,
    Usable,
}

impl DebugBoxKind {
    pub const fn layer(self) -> DebugLayers {
        match self {
            Self::Container => DebugLayers::CONTAINER,
            Self::SubVolume => DebugLayers::SUB_VOLUME,
            Self::Usable => DebugLayers::USABLE,
        }
    }
}

/// How a debug box is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "style")]
pub enum DebugFill {
    /// Filled volume with the color's alpha as opacity.
    Translucent,
    /// Edges only.
    Wireframe,
}

/// One axis-aligned debug box in container-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugBox {
    pub kind: DebugBoxKind,
    /// Item the box belongs to; `None` for the container.
    pub item: Option<usize>,
    pub center: Vec3,
    pub size: Vec3,
    pub color: [f32; 4],
    pub fill: DebugFill,
}

/// Vertex data for debug line rendering
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DebugLineVertex {
    /// Vertex position in world space
    pub position: [f32; 3],
    /// Vertex color
    pub color: [f32; 4],
}

// Corner pairs forming the 12 box edges; corner bit 0 = +x, bit 1 = +y, bit 2 = +z.
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

impl DebugBox {
    /// The parent volume, centered on the container origin.
    pub fn container(size: Vec3) -> Self {
        Self {
            kind: DebugBoxKind::Container,
            item: None,
            center: Vec3::ZERO,
            size,
            color: CONTAINER_COLOR,
            fill: DebugFill::Translucent,
        }
    }

    /// The raw sub-volume of `result`.
    pub fn sub_volume(result: &LayoutResult) -> Self {
        Self {
            kind: DebugBoxKind::SubVolume,
            item: Some(result.index),
            center: result.sub_volume_center,
            size: result.sub_volume_size,
            color: SUB_VOLUME_COLOR,
            fill: DebugFill::Wireframe,
        }
    }

    /// The padded sub-volume of `result`. Shares the sub-volume's center.
    pub fn usable(result: &LayoutResult) -> Self {
        Self {
            kind: DebugBoxKind::Usable,
            item: Some(result.index),
            center: result.sub_volume_center,
            size: result.usable_size,
            color: USABLE_COLOR,
            fill: DebugFill::Wireframe,
        }
    }

    /// Eight corners, offset by `origin`.
    pub fn corners(&self, origin: Vec3) -> [Vec3; 8] {
        let half = self.size * 0.5;
        let center = origin + self.center;
        std::array::from_fn(|i| {
            let sign = Vec3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            );
            center + half * sign
        })
    }

    /// Line-list vertices (two per edge) for the 12 edges, offset by `origin`.
    pub fn edge_vertices(&self, origin: Vec3) -> Vec<DebugLineVertex> {
        let corners = self.corners(origin);
        EDGES
            .iter()
            .flat_map(|&(a, b)| [corners[a], corners[b]])
            .map(|p| DebugLineVertex {
                position: p.to_array(),
                color: self.color,
            })
            .collect()
    }
}

/// The three nested boxes for one item: parent, sub-volume, usable volume.
pub fn item_debug_view(parent_size: Vec3, result: &LayoutResult) -> [DebugBox; 3] {
    [
        DebugBox::container(parent_size),
        DebugBox::sub_volume(result),
        DebugBox::usable(result),
    ]
}

/// Debug boxes for a whole container, filtered by `layers`.
///
/// The container box appears once, followed by each item's boxes in order.
pub fn debug_boxes(
    parent_size: Vec3,
    results: &[LayoutResult],
    layers: DebugLayers,
) -> Vec<DebugBox> {
    std::iter::once(DebugBox::container(parent_size))
        .chain(
            results
                .iter()
                .flat_map(|r| [DebugBox::sub_volume(r), DebugBox::usable(r)]),
        )
        .filter(|b| layers.contains(b.kind.layer()))
        .collect()
}

/// Wireframe vertices for every wireframe box, offset by `origin`.
pub fn wireframe_vertices(boxes: &[DebugBox], origin: Vec3) -> Vec<DebugLineVertex> {
    boxes
        .iter()
        .filter(|b| b.fill == DebugFill::Wireframe)
        .flat_map(|b| b.edge_vertices(origin))
        .collect()
}
