//! Grid input events.
//!
//! This module defines [`GridEvent`], the closed set of inputs that drive the
//! grid reducer, and [`CallEvent`], the wider set a [`crate::Driver`] delivers
//! to the [`crate::Runtime`].
//!
//! Events originate from:
//! - Call collaborators (roster, media sources, active speakers, local media)
//! - The downlink bandwidth policy (pause / unpause)
//! - The user (zoom and page commands)

use serde::{Deserialize, Serialize};

use crate::{AttendeeId, Roster, TileEvent, VideoSource, ViewMode};

/// Events processed by the grid reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEvent {
    /// Call session ended or restarted. Returns to the initial state.
    ResetGridState,

    /// Switch between gallery and featured view.
    UpdateViewMode {
        /// New view mode.
        mode: ViewMode,
    },

    /// Full roster replacement.
    UpdateRoster {
        /// Attendees in roster order.
        roster: Roster,
    },

    /// Full list of remote video sources.
    UpdateVideoSources {
        /// Sources in arrival order.
        sources: Vec<VideoSource>,
    },

    /// Current active speakers, most relevant first.
    UpdateActiveSpeakers {
        /// Speaking attendees.
        attendee_ids: Vec<AttendeeId>,
    },

    /// Local camera and content-share tiles.
    UpdateLocalTileState {
        /// Local camera tile is present.
        video_enabled: bool,
        /// Local content-share tile is present.
        sharing: bool,
    },

    /// Remote content share started or stopped.
    UpdateContentShare {
        /// Attendee sharing content. `None` when no one is sharing.
        sharing_attendee_id: Option<AttendeeId>,
    },

    /// Downlink policy paused an attendee's tile.
    PauseVideoTile {
        /// Throttled attendee.
        attendee_id: AttendeeId,
    },

    /// Downlink policy restored an attendee's tile.
    UnpauseVideoTile {
        /// Restored attendee.
        attendee_id: AttendeeId,
    },

    /// Show fewer tiles per page.
    ZoomIn,

    /// Show more tiles per page.
    ZoomOut,

    /// Previous gallery page.
    PrevPage,

    /// Next gallery page.
    NextPage,
}

/// Events delivered to the runtime by a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    /// Event for the grid reducer.
    Grid(GridEvent),

    /// Tile-level notification for the downlink bridge.
    Tile(TileEvent),

    /// Stop the runtime.
    Quit,
}

impl From<GridEvent> for CallEvent {
    fn from(event: GridEvent) -> Self {
        Self::Grid(event)
    }
}

impl From<TileEvent> for CallEvent {
    fn from(event: TileEvent) -> Self {
        Self::Tile(event)
    }
}
