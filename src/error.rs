use thiserror::Error;

/// Errors returned when building a [`crate::RangeHint`].
///
/// The sort itself never fails.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// `min` compared greater than `max`.
    #[error("invalid range bounds: min is greater than max")]
    InvertedBounds,
}
