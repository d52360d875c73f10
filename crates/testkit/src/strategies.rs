//! Proptest strategies for layout inputs.

use glam::Vec3;
use proptest::prelude::*;
use roomscene_ui3d::layout::{Alignment, Alignment3, Axis, AxisOffset, LayoutInput, Padding};

/// Any split axis.
pub fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

/// Any alignment.
pub fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Start),
        Just(Alignment::Center),
        Just(Alignment::End)
    ]
}

/// A fully specified per-axis alignment.
pub fn alignment3() -> impl Strategy<Value = Alignment3> {
    (alignment(), alignment(), alignment()).prop_map(|(x, y, z)| Alignment3::new(x, y, z))
}

/// Positive parent extents in a realistic scene range.
pub fn parent_size() -> impl Strategy<Value = Vec3> {
    (0.5f32..100.0, 0.5f32..100.0, 0.5f32..100.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// Small offsets and paddings.
pub fn small_vec3() -> impl Strategy<Value = Vec3> {
    (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// Either padding form.
pub fn padding() -> impl Strategy<Value = Padding> {
    prop_oneof![
        (0.0f32..2.0).prop_map(Padding::Uniform),
        small_vec3().prop_map(|v| Padding::PerAxis(v.abs())),
    ]
}

/// A layout with 1..=`max_count` items and a random set of per-item overrides.
pub fn layout_input(max_count: usize) -> impl Strategy<Value = LayoutInput> {
    (
        parent_size(),
        axis(),
        0.0f32..2.0,
        1..=max_count,
        proptest::option::of(padding()),
        proptest::collection::vec(proptest::option::of(padding()), 0..=max_count),
        proptest::collection::vec(alignment3(), 0..=max_count),
        proptest::collection::vec(small_vec3(), 0..=max_count),
    )
        .prop_map(
            |(size, axis, gap, count, padding, item_paddings, aligns, offsets)| LayoutInput {
                size,
                axis,
                gap,
                count,
                padding,
                item_paddings,
                item_aligns: aligns.into_iter().map(Into::into).collect(),
                item_offsets: offsets.into_iter().map(AxisOffset::from).collect(),
                ..LayoutInput::default()
            },
        )
}
