//! Downlink policy that logs preference submissions.

use videogrid_core::{DownlinkPolicy, VideoPreferences};

/// Logs each preference set in place of a media SDK policy.
#[derive(Debug, Default)]
pub struct LoggingPolicy {
    submissions: usize,
    last: Option<VideoPreferences>,
}

impl LoggingPolicy {
    /// Create a policy with no submissions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of preference sets received.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Take the most recent preference set.
    pub fn take_last(&mut self) -> Option<VideoPreferences> {
        self.last.take()
    }
}

impl DownlinkPolicy for LoggingPolicy {
    fn choose_remote_video_sources(&mut self, preferences: &VideoPreferences) {
        self.submissions += 1;
        let sources: Vec<String> = preferences
            .iter()
            .map(|p| format!("{}:{:?}", p.attendee_id, p.target_size))
            .collect();
        tracing::info!(
            submission = self.submissions,
            "choose remote video sources [{}]",
            sources.join(", ")
        );
        self.last = Some(preferences.clone());
    }
}
