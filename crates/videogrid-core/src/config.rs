//! Grid tuning knobs.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, pagination::DEFAULT_ZOOM_LEVELS};

/// Configuration for [`crate::VideoGrid`].
///
/// Defaults reproduce the stock meeting layout: zoom table
/// `[0, 1, 2, 4, 8, 16, 25]`, low quality from 8 visible tiles, up to 4
/// featured speakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Ascending tiles-per-page table. First and last entries are sentinels.
    pub zoom_levels: Vec<usize>,
    /// Visible tile count at which every visible source drops to low quality.
    pub low_quality_threshold: usize,
    /// Maximum number of active speakers shown in featured view.
    pub featured_tile_limit: usize,
    /// Relative priority attached to every visible source.
    pub preference_priority: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            zoom_levels: DEFAULT_ZOOM_LEVELS.to_vec(),
            low_quality_threshold: 8,
            featured_tile_limit: 4,
            preference_priority: 1,
        }
    }
}

impl GridConfig {
    /// Check the zoom table and limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let len = self.zoom_levels.len();
        if len < 3 {
            return Err(ConfigError::ZoomTableTooShort { len });
        }
        if let Some(&first) = self.zoom_levels.first()
            && first != 0
        {
            return Err(ConfigError::ZoomTableStart { first });
        }
        for (offset, pair) in self.zoom_levels.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ConfigError::ZoomTableNotAscending {
                    index: offset + 1,
                    previous: pair[0],
                    level: pair[1],
                });
            }
        }
        if self.featured_tile_limit == 0 {
            return Err(ConfigError::ZeroFeaturedTileLimit);
        }
        Ok(())
    }
}
