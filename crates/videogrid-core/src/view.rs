//! Render model.
//!
//! [`GridView`] is the read-only projection handed to rendering: which tiles
//! to draw, the page and zoom numbers, and which controls are usable.

use std::fmt;

use crate::{AttendeeId, GridConfig, GridState, LocalTileState, ViewMode};

/// One tile to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// Attendee shown in the tile.
    pub attendee_id: AttendeeId,
    /// Display name. Empty if not yet known.
    pub display_name: String,
    /// Downlink policy paused this tile; draw a placeholder.
    pub paused: bool,
}

/// Everything rendering needs from one grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Tiles in display order.
    pub tiles: Vec<TileView>,
    /// Current layout mode.
    pub view_mode: ViewMode,
    /// 1-based gallery page.
    pub current_page: usize,
    /// Tiles per gallery page.
    pub zoomed_level: usize,
    /// Local camera and share tiles.
    pub local: LocalTileState,
    /// Zoom-in control is usable.
    pub can_zoom_in: bool,
    /// Zoom-out control is usable.
    pub can_zoom_out: bool,
    /// Previous-page control is usable.
    pub can_prev_page: bool,
    /// Next-page control is usable.
    pub can_next_page: bool,
}

impl GridView {
    /// Project a snapshot.
    ///
    /// Page and zoom controls are only offered in gallery view.
    pub fn new(state: &GridState, config: &GridConfig) -> Self {
        let tiles = state
            .visible_window(config)
            .iter()
            .map(|attendee_id| {
                let record = state.attendee(attendee_id.as_str());
                TileView {
                    attendee_id: attendee_id.clone(),
                    display_name: record.map(|r| r.display_name.clone()).unwrap_or_default(),
                    paused: record.is_some_and(|r| r.bandwidth_constrained),
                }
            })
            .collect();

        let pagination = state.pagination();
        let sources = state.available_video_sources().len();
        let gallery = state.view_mode() == ViewMode::GalleryView;

        Self {
            tiles,
            view_mode: state.view_mode(),
            current_page: pagination.current_page(),
            zoomed_level: pagination.zoomed_level(),
            local: state.local_tiles(),
            can_zoom_in: gallery && pagination.can_zoom_in(),
            can_zoom_out: gallery && pagination.can_zoom_out(&config.zoom_levels, sources),
            can_prev_page: gallery && pagination.can_prev_page(),
            can_next_page: gallery && pagination.can_next_page(sources),
        }
    }

    /// Attendees in display order.
    pub fn attendee_ids(&self) -> Vec<&str> {
        self.tiles.iter().map(|tile| tile.attendee_id.as_str()).collect()
    }
}

/// One-line summary, e.g. `gallery page=1 level=4 tiles=[a, b(paused)]`.
impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.view_mode {
            ViewMode::GalleryView => "gallery",
            ViewMode::FeaturedView => "featured",
        };
        write!(f, "{mode} page={} level={} tiles=[", self.current_page, self.zoomed_level)?;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tile.attendee_id.as_str())?;
            if tile.paused {
                f.write_str("(paused)")?;
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridEvent, VideoGrid, VideoSource};

    fn grid_with(ids: &[&str]) -> VideoGrid {
        let mut grid = VideoGrid::default();
        let sources = ids.iter().copied().map(VideoSource::new).collect();
        let _ = grid.handle(GridEvent::UpdateVideoSources { sources });
        grid
    }

    #[test]
    fn empty_grid_offers_no_controls() {
        let view = VideoGrid::default().view();

        assert!(view.tiles.is_empty());
        assert!(!view.can_zoom_in);
        assert!(!view.can_zoom_out);
        assert!(!view.can_prev_page);
        assert!(!view.can_next_page);
    }

    #[test]
    fn affordances_follow_pagination_guards() {
        let mut grid = grid_with(&["a", "b", "c"]);
        let view = grid.view();
        assert!(view.can_zoom_in);
        assert!(!view.can_zoom_out);
        assert!(!view.can_next_page);

        let _ = grid.zoom_in();
        let view = grid.view();
        assert!(view.can_zoom_out);
        assert!(view.can_next_page);
        assert!(!view.can_prev_page);
    }

    #[test]
    fn featured_view_hides_page_controls() {
        let mut grid = grid_with(&["a", "b", "c"]);
        let _ = grid.zoom_in();
        let _ = grid.handle(GridEvent::UpdateViewMode { mode: ViewMode::FeaturedView });

        let view = grid.view();
        assert!(!view.can_zoom_in);
        assert!(!view.can_zoom_out);
        assert!(!view.can_prev_page);
        assert!(!view.can_next_page);
    }

    #[test]
    fn paused_tiles_are_marked() {
        let mut grid = grid_with(&["a", "b"]);
        let _ = grid.handle(GridEvent::PauseVideoTile { attendee_id: "b".into() });

        insta::assert_snapshot!(grid.view(), @"gallery page=1 level=2 tiles=[a, b(paused)]");
    }
}
