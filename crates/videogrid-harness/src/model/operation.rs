//! Operations for model-based testing.
//!
//! Operations represent all possible inputs to the grid. They are generated
//! randomly by proptest or the fuzzer and applied to both the model and real
//! implementation.

use arbitrary::Arbitrary;
use videogrid_core::{AttendeeId, GridEvent, Roster, RosterAttendee, VideoSource, ViewMode};

/// Attendee identifier (uses u8 to keep test space manageable).
pub type ModelAttendeeId = u8;

/// Number of distinct attendees operations can refer to.
///
/// Larger than the loosest zoom level so overflow pages get exercised.
pub const ATTENDEE_POOL: u8 = 30;

/// Map a model attendee to the real attendee ID.
pub fn attendee_id(id: ModelAttendeeId) -> AttendeeId {
    AttendeeId::new(format!("attendee-{:02}", id % ATTENDEE_POOL))
}

/// One roster entry.
#[derive(Debug, Clone, Copy, Arbitrary)]
pub struct RosterEntry {
    /// Attendee.
    pub attendee: ModelAttendeeId,
    /// Roster service has resolved the display name.
    pub named: bool,
}

impl RosterEntry {
    /// Display name delivered with this entry, if resolved.
    pub fn name(&self) -> Option<String> {
        self.named.then(|| format!("Attendee {}", self.attendee % ATTENDEE_POOL))
    }
}

/// Operations that can be applied to the grid.
///
/// Operations are designed to be small and composable so proptest can
/// explore interesting combinations.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Replace the roster.
    UpdateRoster {
        /// Entries in roster order. Duplicates collapse onto the first slot.
        entries: Vec<RosterEntry>,
    },

    /// Replace the set of remote video sources.
    UpdateVideoSources {
        /// Publishing attendees in arrival order.
        attendees: Vec<ModelAttendeeId>,
    },

    /// Replace the active speaker list.
    UpdateActiveSpeakers {
        /// Speakers, most relevant first.
        attendees: Vec<ModelAttendeeId>,
    },

    /// Switch between gallery and featured view.
    SetViewMode {
        /// Featured view when set.
        featured: bool,
    },

    /// Local tile presence changed.
    UpdateLocalTiles {
        /// Local camera tile present.
        video_enabled: bool,
        /// Local content-share tile present.
        sharing: bool,
    },

    /// Remote content share started or ended.
    ContentShare {
        /// Sharing attendee, `None` when the share ended.
        attendee: Option<ModelAttendeeId>,
    },

    /// Downlink policy paused a tile.
    Pause {
        /// Attendee whose tile was paused.
        attendee: ModelAttendeeId,
    },

    /// Downlink policy resumed a tile.
    Unpause {
        /// Attendee whose tile was resumed.
        attendee: ModelAttendeeId,
    },

    /// Zoom control: fewer tiles per page.
    ZoomIn,

    /// Zoom control: more tiles per page.
    ZoomOut,

    /// Page control: previous page.
    PrevPage,

    /// Page control: next page.
    NextPage,

    /// Clear everything.
    Reset,
}

impl Operation {
    /// Real event carrying this operation.
    pub fn to_event(&self) -> GridEvent {
        match self {
            Self::UpdateRoster { entries } => {
                let roster: Roster = entries
                    .iter()
                    .map(|entry| {
                        let name = entry.name();
                        (attendee_id(entry.attendee), RosterAttendee { name, external_user_id: None })
                    })
                    .collect();
                GridEvent::UpdateRoster { roster }
            },
            Self::UpdateVideoSources { attendees } => GridEvent::UpdateVideoSources {
                sources: attendees.iter().map(|&id| VideoSource::new(attendee_id(id))).collect(),
            },
            Self::UpdateActiveSpeakers { attendees } => GridEvent::UpdateActiveSpeakers {
                attendee_ids: attendees.iter().map(|&id| attendee_id(id)).collect(),
            },
            Self::SetViewMode { featured } => GridEvent::UpdateViewMode {
                mode: if *featured { ViewMode::FeaturedView } else { ViewMode::GalleryView },
            },
            Self::UpdateLocalTiles { video_enabled, sharing } => {
                GridEvent::UpdateLocalTileState { video_enabled: *video_enabled, sharing: *sharing }
            },
            Self::ContentShare { attendee } => {
                GridEvent::UpdateContentShare { sharing_attendee_id: attendee.map(attendee_id) }
            },
            Self::Pause { attendee } => {
                GridEvent::PauseVideoTile { attendee_id: attendee_id(*attendee) }
            },
            Self::Unpause { attendee } => {
                GridEvent::UnpauseVideoTile { attendee_id: attendee_id(*attendee) }
            },
            Self::ZoomIn => GridEvent::ZoomIn,
            Self::ZoomOut => GridEvent::ZoomOut,
            Self::PrevPage => GridEvent::PrevPage,
            Self::NextPage => GridEvent::NextPage,
            Self::Reset => GridEvent::ResetGridState,
        }
    }
}
