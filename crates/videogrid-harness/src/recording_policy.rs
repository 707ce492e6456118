//! Downlink policy that records every preference set it receives.

use videogrid_core::{DownlinkPolicy, VideoPreferences};

/// Recording downlink policy for deterministic testing.
///
/// Stands in for the media SDK's bandwidth policy so tests can assert on
/// exactly what the grid submitted and in which order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPolicy {
    submissions: Vec<VideoPreferences>,
}

impl RecordingPolicy {
    /// Create an empty policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submitted preference set, oldest first.
    pub fn submissions(&self) -> &[VideoPreferences] {
        &self.submissions
    }

    /// Most recent submission.
    pub fn last(&self) -> Option<&VideoPreferences> {
        self.submissions.last()
    }

    /// Take all submissions, leaving the policy empty.
    pub fn take(&mut self) -> Vec<VideoPreferences> {
        std::mem::take(&mut self.submissions)
    }
}

impl DownlinkPolicy for RecordingPolicy {
    fn choose_remote_video_sources(&mut self, preferences: &VideoPreferences) {
        tracing::trace!(count = preferences.len(), "recorded video preferences");
        self.submissions.push(preferences.clone());
    }
}
