//! Error types for the video grid core.
//!
//! The reducer itself never fails: unsupported event kinds cannot be expressed
//! and recoverable inconsistencies are absorbed and logged. Only configuration
//! is validated up front.

use thiserror::Error;

/// Invalid [`crate::GridConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Zoom table needs a lower sentinel, at least one level, and an upper
    /// bound.
    #[error("zoom table needs at least 3 levels, got {len}")]
    ZoomTableTooShort {
        /// Number of levels supplied
        len: usize,
    },

    /// First zoom level is the empty-grid sentinel and must be zero.
    #[error("zoom table must start at 0, got {first}")]
    ZoomTableStart {
        /// First level supplied
        first: usize,
    },

    /// Zoom levels must be strictly ascending.
    #[error("zoom table not strictly ascending at index {index}: {previous} then {level}")]
    ZoomTableNotAscending {
        /// Index of the offending level
        index: usize,
        /// Level before the offending one
        previous: usize,
        /// Offending level
        level: usize,
    },

    /// Featured view must show at least one speaker.
    #[error("featured tile limit must be at least 1")]
    ZeroFeaturedTileLimit,
}
