//! Attendee identity and per-attendee tile status.
//!
//! The attendee ID is the join key between roster updates and video source
//! updates. Whichever arrives first creates the [`AttendeeRecord`].

use std::{borrow::Borrow, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque attendee identifier, stable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendeeId(String);

impl AttendeeId {
    /// Create an attendee ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AttendeeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttendeeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AttendeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Roster entry as delivered by the roster collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterAttendee {
    /// Display name. `None` until the roster service resolves it.
    #[serde(default)]
    pub name: Option<String>,
    /// Application-assigned user ID.
    #[serde(default)]
    pub external_user_id: Option<String>,
}

impl RosterAttendee {
    /// Roster entry with a resolved display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), external_user_id: None }
    }
}

/// Call roster keyed by attendee, in roster order.
///
/// Iteration order is significant: it defines the order of tiles in the grid.
pub type Roster = IndexMap<AttendeeId, RosterAttendee>;

/// Remote video source reported by the media collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    /// Attendee publishing the source.
    pub attendee_id: AttendeeId,
    /// Application-assigned user ID of the publisher.
    #[serde(default)]
    pub external_user_id: Option<String>,
}

impl VideoSource {
    /// Video source published by the given attendee.
    pub fn new(attendee_id: impl Into<AttendeeId>) -> Self {
        Self { attendee_id: attendee_id.into(), external_user_id: None }
    }
}

/// Grid-side status of one attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRecord {
    /// Join key across roster and source updates.
    pub attendee_id: AttendeeId,
    /// Display name. Empty until the roster provides one.
    pub display_name: String,
    /// Attendee currently publishes video. Recomputed on every source update.
    pub video_enabled: bool,
    /// Downlink policy has paused this attendee's tile.
    pub bandwidth_constrained: bool,
}

impl AttendeeRecord {
    /// Record for an attendee first seen in the roster.
    pub fn new(attendee_id: AttendeeId, display_name: String) -> Self {
        Self { attendee_id, display_name, video_enabled: false, bandwidth_constrained: false }
    }

    /// Minimal record for an attendee first seen through a video source.
    ///
    /// Content-share pseudo-attendees only ever arrive this way.
    pub(crate) fn placeholder(attendee_id: AttendeeId) -> Self {
        Self::new(attendee_id, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_lookup_by_str() {
        let mut roster = Roster::new();
        roster.insert("a".into(), RosterAttendee::named("Alice"));

        assert_eq!(roster.get("a").and_then(|a| a.name.as_deref()), Some("Alice"));
    }

    #[test]
    fn placeholder_has_no_name_and_no_video() {
        let record = AttendeeRecord::placeholder("share#content".into());

        assert!(record.display_name.is_empty());
        assert!(!record.video_enabled);
        assert!(!record.bandwidth_constrained);
    }
}
