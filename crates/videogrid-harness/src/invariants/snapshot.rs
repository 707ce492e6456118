//! Observable grid snapshots for invariant checking.
//!
//! Snapshots capture the observable state of a grid at a point in time.
//! Invariants operate on snapshots rather than live state so checks stay
//! independent of the state machine's internals.

use videogrid_core::{AttendeeId, VideoGrid, ViewMode};

/// Snapshot of one grid.
#[derive(Debug, Clone, Default)]
pub struct GridSnapshot {
    /// Known attendees in stored order with their `video_enabled` flag.
    pub attendees: Vec<(AttendeeId, bool)>,
    /// Available video sources.
    pub available: Vec<AttendeeId>,
    /// Visible window.
    pub visible: Vec<AttendeeId>,
    /// Layout mode.
    pub view_mode: ViewMode,
    /// 1-based page.
    pub current_page: usize,
    /// Tiles per page.
    pub zoomed_level: usize,
    /// Index into `zoom_levels`.
    pub zoomed_level_index: usize,
    /// Manual zoom in effect.
    pub is_zoomed: bool,
    /// Zoom table in use.
    pub zoom_levels: Vec<usize>,
    /// Featured view cap.
    pub featured_tile_limit: usize,
}

impl GridSnapshot {
    /// Capture a grid.
    pub fn from_grid(grid: &VideoGrid) -> Self {
        let state = grid.state();
        let pagination = state.pagination();

        Self {
            attendees: state
                .attendees()
                .values()
                .map(|record| (record.attendee_id.clone(), record.video_enabled))
                .collect(),
            available: state.available_video_sources().to_vec(),
            visible: grid.visible_window().to_vec(),
            view_mode: state.view_mode(),
            current_page: pagination.current_page(),
            zoomed_level: pagination.zoomed_level(),
            zoomed_level_index: pagination.zoomed_level_index(),
            is_zoomed: pagination.is_zoomed(),
            zoom_levels: grid.config().zoom_levels.clone(),
            featured_tile_limit: grid.config().featured_tile_limit,
        }
    }
}
