use thiserror::Error;

/// Errors raised while turning untyped layout parameters into a [`LayoutInput`].
///
/// Degenerate geometry (zero or negative extents from large gaps or padding) is
/// not an error; it passes through the arithmetic unchanged.
///
/// [`LayoutInput`]: super::LayoutInput
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Split axis outside `{x, y, z}`.
    #[error("invalid layout axis '{0}' (expected x, y or z)")]
    InvalidAxis(String),
    /// Item count below zero.
    #[error("invalid item count {0} (must be zero or more)")]
    NegativeCount(i64),
    /// Item count above [`MAX_ITEM_COUNT`](super::MAX_ITEM_COUNT).
    #[error("item count {count} exceeds the limit of {max}")]
    CountTooLarge { count: i64, max: usize },
}

impl LayoutError {
    /// Whether this error belongs to the invalid-input class.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidAxis(_) | Self::NegativeCount(_) | Self::CountTooLarge { .. }
        )
    }
}
