//! Gallery view pagination and zoom.
//!
//! Zoom levels come from a fixed ascending table of grid sizes. Index 0 and
//! the last index bound the automatic scan; manual zoom only moves between
//! indices `1..=len-2`.

use std::ops::Range;

/// Default grid sizes (tiles per page), ascending.
pub const DEFAULT_ZOOM_LEVELS: [usize; 7] = [0, 1, 2, 4, 8, 16, 25];

/// Current page and zoom level of the gallery grid.
///
/// `zoomed_level` always equals the table entry at `zoomed_level_index`.
/// Once `is_zoomed` is set by a manual zoom, automatic zoom is suspended until
/// the grid becomes empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    zoomed_level: usize,
    zoomed_level_index: usize,
    is_zoomed: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self { current_page: 1, zoomed_level: 0, zoomed_level_index: 0, is_zoomed: false }
    }
}

impl PaginationState {
    /// 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Tiles per page.
    pub fn zoomed_level(&self) -> usize {
        self.zoomed_level
    }

    /// Index of [`Self::zoomed_level`] in the zoom table.
    pub fn zoomed_level_index(&self) -> usize {
        self.zoomed_level_index
    }

    /// User changed zoom manually since the grid was last empty.
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    /// Select the tightest level that fits `sources` tiles, or the loosest
    /// level if none does.
    ///
    /// Scans indices `1..len-1`; an exact fit wins over the next larger level.
    pub fn auto_zoom(&mut self, levels: &[usize], sources: usize) {
        let last = levels.len().saturating_sub(1);
        let index = levels
            .get(1..last)
            .and_then(|candidates| candidates.iter().position(|&level| level >= sources))
            .map_or(last, |position| position + 1);
        self.set_zoom(levels, index);
    }

    /// Zooming in is possible (fewer tiles per page).
    pub fn can_zoom_in(&self) -> bool {
        self.zoomed_level_index > 1
    }

    /// Zooming out is possible (more tiles per page).
    pub fn can_zoom_out(&self, levels: &[usize], sources: usize) -> bool {
        self.zoomed_level < sources && self.zoomed_level_index < levels.len().saturating_sub(2)
    }

    /// A previous page exists.
    pub fn can_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Sources exist beyond the current window.
    pub fn can_next_page(&self, sources: usize) -> bool {
        self.zoomed_level * self.current_page < sources
    }

    /// Step one level in. Returns `false` if already fully zoomed in.
    pub fn zoom_in(&mut self, levels: &[usize]) -> bool {
        if !self.can_zoom_in() {
            return false;
        }
        self.set_zoom(levels, self.zoomed_level_index - 1);
        self.is_zoomed = true;
        true
    }

    /// Step one level out and return to the first page. Returns `false` if
    /// everything already fits or the table is exhausted.
    pub fn zoom_out(&mut self, levels: &[usize], sources: usize) -> bool {
        if !self.can_zoom_out(levels, sources) {
            return false;
        }
        self.set_zoom(levels, self.zoomed_level_index + 1);
        self.current_page = 1;
        self.is_zoomed = true;
        true
    }

    /// Go back one page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev_page() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Advance one page. Returns `false` if no sources lie beyond the window.
    pub fn next_page(&mut self, sources: usize) -> bool {
        if !self.can_next_page(sources) {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Pull the page back to the last non-empty page after sources shrink.
    pub fn clamp_page(&mut self, sources: usize) {
        if self.zoomed_level == 0 {
            self.current_page = 1;
            return;
        }
        let last_page = sources.div_ceil(self.zoomed_level).max(1);
        self.current_page = self.current_page.min(last_page);
    }

    /// Half-open window `[(page-1)*level, page*level)` clipped to `sources`.
    pub fn window(&self, sources: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.zoomed_level).min(sources);
        let end = (self.current_page * self.zoomed_level).min(sources);
        start..end
    }

    fn set_zoom(&mut self, levels: &[usize], index: usize) {
        self.zoomed_level_index = index;
        self.zoomed_level = levels.get(index).copied().unwrap_or_default();
    }
}
