//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use videogrid_core::{AttendeeId, ViewMode};

use super::{GridSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// Zoom level must equal the table entry at the zoom index.
pub struct ZoomTableConsistency;

impl Invariant for ZoomTableConsistency {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ZoomTableConsistency
    }

    fn check(&self, state: &GridSnapshot) -> InvariantResult {
        let expected = state.zoom_levels.get(state.zoomed_level_index).copied();
        if expected != Some(state.zoomed_level) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "zoomed_level {} but table[{}] is {:?}",
                    state.zoomed_level, state.zoomed_level_index, expected
                ),
            });
        }
        Ok(())
    }
}

/// After a manual zoom the index stays within `1..=len-2`.
///
/// The outer entries are scan sentinels and never selectable by hand.
pub struct ManualZoomBounds;

impl Invariant for ManualZoomBounds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ManualZoomBounds
    }

    fn check(&self, state: &GridSnapshot) -> InvariantResult {
        let upper = state.zoom_levels.len().saturating_sub(2);
        if state.is_zoomed && !(1..=upper).contains(&state.zoomed_level_index) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "manually zoomed to index {} outside 1..={upper}",
                    state.zoomed_level_index
                ),
            });
        }
        Ok(())
    }
}

/// Available sources are exactly the video-enabled attendees, in stored
/// attendee order.
///
/// Guarantees tile order tracks the roster rather than network arrival order,
/// and that every source refers to a known attendee.
pub struct SourcesFollowRosterOrder;

impl Invariant for SourcesFollowRosterOrder {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SourcesFollowRosterOrder
    }

    fn check(&self, state: &GridSnapshot) -> InvariantResult {
        let expected: Vec<&AttendeeId> =
            state.attendees.iter().filter(|(_, video)| *video).map(|(id, _)| id).collect();
        let actual: Vec<&AttendeeId> = state.available.iter().collect();

        if expected != actual {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("available sources {actual:?}, expected {expected:?}"),
            });
        }
        Ok(())
    }
}

/// An empty grid has page 1, zoom index 0 and no manual zoom.
pub struct EmptyGridReset;

impl Invariant for EmptyGridReset {
    fn kind(&self) -> InvariantKind {
        InvariantKind::EmptyGridReset
    }

    fn check(&self, state: &GridSnapshot) -> InvariantResult {
        let reset = state.current_page == 1
            && state.zoomed_level == 0
            && state.zoomed_level_index == 0
            && !state.is_zoomed;

        if state.available.is_empty() && !reset {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "empty grid with page {} level {} index {} zoomed {}",
                    state.current_page,
                    state.zoomed_level,
                    state.zoomed_level_index,
                    state.is_zoomed
                ),
            });
        }
        Ok(())
    }
}

/// The current page is 1-based and starts inside the source list.
pub struct PageWithinBounds;

impl Invariant for PageWithinBounds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::PageWithinBounds
    }

    fn check(&self, state: &GridSnapshot) -> InvariantResult {
        let sources = state.available.len();
        let start = state.current_page.saturating_sub(1) * state.zoomed_level;
        let out_of_range = state.current_page == 0 || (sources > 0 && start >= sources);

        if out_of_range {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "page {} at level {} starts past {sources} sources",
                    state.current_page, state.zoomed_level
                ),
            });
        }
        Ok(())
    }
}

/// The visible window fits one gallery page or the featured limit.
pub struct VisibleWindowBounded;

impl Invariant for VisibleWindowBounded {
    fn kind(&self) -> InvariantKind {
        InvariantKind::VisibleWindowBounded
    }

    fn check(&self, state: &GridSnapshot) -> InvariantResult {
        let limit = match state.view_mode {
            ViewMode::GalleryView => state.zoomed_level,
            ViewMode::FeaturedView => state.featured_tile_limit,
        };

        if state.visible.len() > limit {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("{} visible tiles exceed limit {limit}", state.visible.len()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> GridSnapshot {
        GridSnapshot {
            zoom_levels: vec![0, 1, 2, 4, 8, 16, 25],
            current_page: 1,
            featured_tile_limit: 4,
            ..GridSnapshot::default()
        }
    }

    #[test]
    fn detects_level_index_mismatch() {
        let state = GridSnapshot { zoomed_level: 4, zoomed_level_index: 2, ..snapshot() };

        assert!(ZoomTableConsistency.check(&state).is_err());
    }

    #[test]
    fn detects_manual_zoom_on_sentinel() {
        let state =
            GridSnapshot { zoomed_level: 25, zoomed_level_index: 6, is_zoomed: true, ..snapshot() };

        assert!(ManualZoomBounds.check(&state).is_err());
    }

    #[test]
    fn detects_arrival_order_sources() {
        let state = GridSnapshot {
            attendees: vec![("a".into(), true), ("b".into(), false), ("c".into(), true)],
            available: vec!["c".into(), "a".into()],
            ..snapshot()
        };

        let violation = SourcesFollowRosterOrder.check(&state).err();
        assert_eq!(violation.map(|v| v.invariant), Some(InvariantKind::SourcesFollowRosterOrder));
    }

    #[test]
    fn detects_stale_zoom_on_empty_grid() {
        let state = GridSnapshot { zoomed_level: 4, zoomed_level_index: 3, ..snapshot() };

        assert!(EmptyGridReset.check(&state).is_err());
    }

    #[test]
    fn detects_page_past_end() {
        let state = GridSnapshot {
            attendees: vec![("a".into(), true)],
            available: vec!["a".into()],
            current_page: 2,
            zoomed_level: 1,
            zoomed_level_index: 1,
            ..snapshot()
        };

        assert!(PageWithinBounds.check(&state).is_err());
    }

    #[test]
    fn detects_oversized_featured_window() {
        let speakers: Vec<AttendeeId> =
            ["a", "b", "c", "d", "e"].into_iter().map(Into::into).collect();
        let state =
            GridSnapshot { view_mode: ViewMode::FeaturedView, visible: speakers, ..snapshot() };

        assert!(VisibleWindowBounded.check(&state).is_err());
    }
}
