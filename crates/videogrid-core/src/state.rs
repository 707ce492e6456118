//! Observable grid state.
//!
//! [`GridState`] is the single snapshot the reducer transforms. It is replaced
//! on every transition, never shared mutably with readers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{AttendeeId, AttendeeRecord, GridConfig, PaginationState};

/// Grid layout mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Paginated window over every available source.
    #[default]
    GalleryView,
    /// Active speakers only, unpaginated.
    FeaturedView,
}

/// Presence of the local participant's own tiles.
///
/// Consumed by rendering only; never affects bandwidth preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalTileState {
    /// Local camera tile is present.
    pub video_enabled: bool,
    /// Local content-share tile is present.
    pub sharing: bool,
}

/// Complete grid snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    /// Known attendees in roster order.
    pub(crate) attendees: IndexMap<AttendeeId, AttendeeRecord>,
    /// Attendees with video, in roster order.
    pub(crate) available_video_sources: Vec<AttendeeId>,
    /// Active speakers, most relevant first.
    pub(crate) active_speakers: Vec<AttendeeId>,
    pub(crate) pagination: PaginationState,
    pub(crate) view_mode: ViewMode,
    pub(crate) local: LocalTileState,
    /// Remote attendee currently sharing content.
    pub(crate) content_share: Option<AttendeeId>,
}

impl GridState {
    /// Known attendees in roster order.
    pub fn attendees(&self) -> &IndexMap<AttendeeId, AttendeeRecord> {
        &self.attendees
    }

    /// Record for one attendee. `None` if unknown.
    pub fn attendee(&self, attendee_id: &str) -> Option<&AttendeeRecord> {
        self.attendees.get(attendee_id)
    }

    /// Attendees publishing video, in roster order.
    pub fn available_video_sources(&self) -> &[AttendeeId] {
        &self.available_video_sources
    }

    /// Active speakers, most relevant first.
    pub fn active_speakers(&self) -> &[AttendeeId] {
        &self.active_speakers
    }

    /// Page and zoom state.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Current layout mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Local tile presence.
    pub fn local_tiles(&self) -> LocalTileState {
        self.local
    }

    /// Remote attendee sharing content. `None` if no one is sharing.
    pub fn content_share(&self) -> Option<&AttendeeId> {
        self.content_share.as_ref()
    }

    /// Attendees selected for rendering under the current view mode.
    ///
    /// Gallery view pages through available sources; featured view shows the
    /// leading active speakers and ignores pagination.
    pub fn visible_window(&self, config: &GridConfig) -> &[AttendeeId] {
        match self.view_mode {
            ViewMode::GalleryView => {
                let window = self.pagination.window(self.available_video_sources.len());
                &self.available_video_sources[window]
            },
            ViewMode::FeaturedView => {
                let count = config.featured_tile_limit.min(self.active_speakers.len());
                &self.active_speakers[..count]
            },
        }
    }
}
