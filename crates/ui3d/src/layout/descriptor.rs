//! Untyped, serde-facing layout parameters.
//!
//! Configs describe layouts with plain strings and numbers. A descriptor is
//! validated into a [`LayoutInput`] before the engine sees it; this is the only
//! place a [`LayoutError`] can be produced.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::LayoutError;
use super::input::LayoutInput;
use super::types::{Alignment, Axis, AxisAlignment, AxisOffset, Padding};

/// Padding as written in a config: a number or a list of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingSpec {
    /// Same inset on all axes.
    Uniform(f32),
    /// `[px, py, pz]`; any other length resolves to zero padding.
    Components(Vec<f32>),
}

impl Default for PaddingSpec {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl PaddingSpec {
    /// Typed padding. Component lists that are not exactly three long become zero.
    pub fn resolve(&self) -> Padding {
        match self {
            Self::Uniform(p) => Padding::Uniform(*p),
            Self::Components(c) => match c.as_slice() {
                [x, y, z] => Padding::PerAxis(Vec3::new(*x, *y, *z)),
                other => {
                    warn!(
                        len = other.len(),
                        "padding list must have 3 components; using zero padding"
                    );
                    Padding::ZERO
                }
            },
        }
    }
}

/// Layout parameters in their config form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDescriptor {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Split axis name: `x`, `y` or `z`.
    pub direction: String,
    pub gap: f32,
    /// Number of items. Negative counts and counts above [`MAX_ITEM_COUNT`] are rejected.
    pub count: i64,
    /// Shared padding.
    pub item_padding: PaddingSpec,
    /// Per-item padding overrides; `null` entries use the shared padding.
    pub item_paddings: Vec<Option<PaddingSpec>>,
    pub item_align_x: Alignment,
    pub item_align_y: Alignment,
    pub item_align_z: Alignment,
    /// Per-item alignment overrides.
    pub item_aligns: Vec<AxisAlignment>,
    /// Per-item manual offsets.
    pub item_offsets: Vec<AxisOffset>,
}

impl Default for LayoutDescriptor {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            depth: 10.0,
            direction: Axis::X.as_str().to_string(),
            gap: 0.0,
            count: 0,
            item_padding: PaddingSpec::default(),
            item_paddings: Vec::new(),
            item_align_x: Alignment::Center,
            item_align_y: Alignment::Center,
            item_align_z: Alignment::Center,
            item_aligns: Vec::new(),
            item_offsets: Vec::new(),
        }
    }
}

/// Largest item count a descriptor may ask for. Each item allocates a result,
/// a tree node and up to two debug boxes.
pub const MAX_ITEM_COUNT: usize = 1 << 20;

/// Validate a raw item count.
pub fn item_count(raw: i64) -> Result<usize, LayoutError> {
    let count = usize::try_from(raw).map_err(|_| LayoutError::NegativeCount(raw))?;
    if count > MAX_ITEM_COUNT {
        return Err(LayoutError::CountTooLarge {
            count: raw,
            max: MAX_ITEM_COUNT,
        });
    }
    Ok(count)
}

impl LayoutDescriptor {
    /// Validate into a typed [`LayoutInput`].
    pub fn to_input(&self) -> Result<LayoutInput, LayoutError> {
        let axis: Axis = self.direction.parse()?;
        let count = item_count(self.count)?;

        warn_if_truncated("item_paddings", self.item_paddings.len(), count);
        warn_if_truncated("item_aligns", self.item_aligns.len(), count);
        warn_if_truncated("item_offsets", self.item_offsets.len(), count);

        Ok(LayoutInput {
            size: Vec3::new(self.width, self.height, self.depth),
            axis,
            gap: self.gap,
            count,
            padding: Some(self.item_padding.resolve()),
            item_paddings: self
                .item_paddings
                .iter()
                .take(count)
                .map(|p| p.as_ref().map(PaddingSpec::resolve))
                .collect(),
            align: AxisAlignment::new(self.item_align_x, self.item_align_y, self.item_align_z),
            item_aligns: self.item_aligns.iter().take(count).copied().collect(),
            item_offsets: self.item_offsets.iter().take(count).copied().collect(),
        })
    }
}

impl TryFrom<&LayoutDescriptor> for LayoutInput {
    type Error = LayoutError;

    fn try_from(descriptor: &LayoutDescriptor) -> Result<Self, Self::Error> {
        descriptor.to_input()
    }
}

fn warn_if_truncated(field: &str, len: usize, count: usize) {
    if len > count {
        warn!(field, len, count, "ignoring layout overrides past the item count");
    }
}
