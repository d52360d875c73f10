//! Data model for box layouts: axes, alignments, padding and per-item overrides.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::error::LayoutError;

/// Direction along which a parent volume is subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Split along width.
    #[default]
    X,
    /// Split along height.
    Y,
    /// Split along depth.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3` (x = 0, y = 1, z = 2).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Read this axis' component of `v`.
    pub fn component(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Copy of `v` with this axis' component replaced by `value`.
    pub fn with_component(self, mut v: Vec3, value: f32) -> Vec3 {
        v[self.index()] = value;
        v
    }

    /// Canonical lowercase name used in configs and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            other => Err(LayoutError::InvalidAxis(other.to_string())),
        }
    }
}

/// Placement of an item's origin within its usable volume along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Towards the negative edge.
    Start,
    /// On the usable volume's center (zero offset).
    #[default]
    Center,
    /// Towards the positive edge.
    End,
}

impl Alignment {
    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Alignment`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown alignment '{0}' (expected start, center or end)")]
pub struct AlignmentParseError(pub String);

impl FromStr for Alignment {
    type Err = AlignmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => Err(AlignmentParseError(other.to_string())),
        }
    }
}

/// A fully resolved alignment for all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment3 {
    pub x: Alignment,
    pub y: Alignment,
    pub z: Alignment,
}

impl Alignment3 {
    /// Every axis centered.
    pub const CENTER: Self = Self::splat(Alignment::Center);

    pub const fn new(x: Alignment, y: Alignment, z: Alignment) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(alignment: Alignment) -> Self {
        Self::new(alignment, alignment, alignment)
    }

    /// Alignment on `axis`.
    pub const fn get(self, axis: Axis) -> Alignment {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Partial per-axis alignment. Unset axes fall through to the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisAlignment {
    pub x: Option<Alignment>,
    pub y: Option<Alignment>,
    pub z: Option<Alignment>,
}

impl AxisAlignment {
    pub const NONE: Self = Self {
        x: None,
        y: None,
        z: None,
    };

    pub const fn new(x: Alignment, y: Alignment, z: Alignment) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Override on `axis`, if any.
    pub const fn get(self, axis: Axis) -> Option<Alignment> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl From<Alignment3> for AxisAlignment {
    fn from(a: Alignment3) -> Self {
        Self::new(a.x, a.y, a.z)
    }
}

/// Partial per-axis manual offset. Unset axes contribute zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOffset {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl AxisOffset {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Override on `axis`, if any.
    pub const fn get(self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl From<Vec3> for AxisOffset {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Inset applied on both sides of a sub-volume, per axis.
///
/// Padding is symmetric: `usable = size - 2 * padding` on every axis. Values are
/// never clamped, so usable extents may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    /// Same inset on all three axes.
    Uniform(f32),
    /// Explicit `(px, py, pz)`.
    PerAxis(Vec3),
}

impl Padding {
    pub const ZERO: Self = Self::Uniform(0.0);

    /// Per-axis inset as a vector.
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Self::Uniform(p) => Vec3::splat(p),
            Self::PerAxis(v) => v,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for Padding {
    fn from(p: f32) -> Self {
        Self::Uniform(p)
    }
}

impl From<[f32; 3]> for Padding {
    fn from(p: [f32; 3]) -> Self {
        Self::PerAxis(Vec3::from(p))
    }
}
