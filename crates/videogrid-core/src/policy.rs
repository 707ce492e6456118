//! Downlink bandwidth policy seam.

use crate::VideoPreferences;

/// External policy that throttles and restores remote video streams.
///
/// The grid only supplies hints: which sources are visible and at which
/// quality tier. The policy is injected into [`crate::Runtime`] rather than
/// reached through global state.
pub trait DownlinkPolicy {
    /// Replace the current preference set.
    fn choose_remote_video_sources(&mut self, preferences: &VideoPreferences);
}

impl<P: DownlinkPolicy + ?Sized> DownlinkPolicy for &mut P {
    fn choose_remote_video_sources(&mut self, preferences: &VideoPreferences) {
        (**self).choose_remote_video_sources(preferences);
    }
}
