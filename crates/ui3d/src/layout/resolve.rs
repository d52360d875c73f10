//! Default cascading for per-item layout fields.
//!
//! Every field resolves through the same three tiers, in order:
//! per-item override, shared default, hard-coded default.

use glam::Vec3;

use super::types::{Alignment, Alignment3, Axis, AxisAlignment, AxisOffset, Padding};

/// Hard-coded alignment when neither the item nor the container sets one.
pub const DEFAULT_ALIGNMENT: Alignment = Alignment::Center;

/// Hard-coded padding when neither the item nor the container sets one.
pub const DEFAULT_PADDING: Padding = Padding::ZERO;

/// Hard-coded manual offset component.
pub const DEFAULT_OFFSET: f32 = 0.0;

/// Pick the first present tier.
pub fn resolve<T: Copy>(item: Option<T>, shared: Option<T>, fallback: T) -> T {
    item.or(shared).unwrap_or(fallback)
}

/// Resolve an item's alignment axis by axis.
pub fn resolve_alignment(item: Option<&AxisAlignment>, shared: &AxisAlignment) -> Alignment3 {
    let pick = |axis: Axis| {
        resolve(
            item.and_then(|a| a.get(axis)),
            shared.get(axis),
            DEFAULT_ALIGNMENT,
        )
    };
    Alignment3::new(pick(Axis::X), pick(Axis::Y), pick(Axis::Z))
}

/// Resolve an item's padding into per-axis insets.
pub fn resolve_padding(item: Option<Padding>, shared: Option<Padding>) -> Vec3 {
    resolve(item, shared, DEFAULT_PADDING).to_vec3()
}

/// Resolve an item's manual offset. There is no shared tier for offsets.
pub fn resolve_offset(item: Option<&AxisOffset>) -> Vec3 {
    let pick = |axis: Axis| resolve(item.and_then(|o| o.get(axis)), None, DEFAULT_OFFSET);
    Vec3::new(pick(Axis::X), pick(Axis::Y), pick(Axis::Z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_apply_in_order() {
        assert_eq!(resolve(Some(1), Some(2), 3), 1);
        assert_eq!(resolve(None, Some(2), 3), 2);
        assert_eq!(resolve::<i32>(None, None, 3), 3);
    }

    #[test]
    fn alignment_resolves_each_axis_independently() {
        let item = AxisAlignment {
            x: Some(Alignment::Start),
            ..AxisAlignment::NONE
        };
        let shared = AxisAlignment {
            y: Some(Alignment::End),
            ..AxisAlignment::NONE
        };

        let resolved = resolve_alignment(Some(&item), &shared);
        assert_eq!(
            resolved,
            Alignment3::new(Alignment::Start, Alignment::End, Alignment::Center)
        );

        // No item entry: shared then hard-coded.
        let resolved = resolve_alignment(None, &shared);
        assert_eq!(
            resolved,
            Alignment3::new(Alignment::Center, Alignment::End, Alignment::Center)
        );
    }

    #[test]
    fn padding_prefers_item_override() {
        let shared = Some(Padding::Uniform(1.0));
        assert_eq!(
            resolve_padding(Some(Padding::from([0.5, 0.0, 2.0])), shared),
            Vec3::new(0.5, 0.0, 2.0)
        );
        assert_eq!(resolve_padding(None, shared), Vec3::ONE);
        assert_eq!(resolve_padding(None, None), Vec3::ZERO);
    }

    #[test]
    fn missing_offset_components_are_zero() {
        let partial = AxisOffset {
            y: Some(0.25),
            ..Default::default()
        };
        assert_eq!(resolve_offset(Some(&partial)), Vec3::new(0.0, 0.25, 0.0));
        assert_eq!(resolve_offset(None), Vec3::ZERO);
    }
}
