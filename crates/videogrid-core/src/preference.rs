//! Downlink bandwidth preferences.
//!
//! The grid does not shape bandwidth itself. It tells the downlink policy
//! which remote sources are currently visible and at what quality tier they
//! are worth receiving. Each recomputation replaces the previous set.

use serde::{Deserialize, Serialize};

use crate::{AttendeeId, GridConfig};

/// Requested receive quality for a remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetDisplaySize {
    /// Small tiles; many sources on screen.
    Low,
    /// Large tiles; few sources on screen.
    High,
}

/// One entry of a preference set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPreference {
    /// Source publisher.
    pub attendee_id: AttendeeId,
    /// Relative priority. Lower values are more important.
    pub priority: u32,
    /// Requested quality tier.
    pub target_size: TargetDisplaySize,
}

/// Ordered, full-replacement preference set for the downlink policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPreferences(Vec<VideoPreference>);

impl VideoPreferences {
    /// Preferences for the visible window.
    ///
    /// All visible sources share one quality tier: high below the configured
    /// threshold, low at or above it.
    pub fn for_visible(visible: &[AttendeeId], config: &GridConfig) -> Self {
        let target_size = if visible.len() < config.low_quality_threshold {
            TargetDisplaySize::High
        } else {
            TargetDisplaySize::Low
        };

        visible
            .iter()
            .map(|attendee_id| VideoPreference {
                attendee_id: attendee_id.clone(),
                priority: config.preference_priority,
                target_size,
            })
            .collect()
    }

    /// Number of preferred sources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No source is preferred.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in preference order.
    pub fn iter(&self) -> std::slice::Iter<'_, VideoPreference> {
        self.0.iter()
    }

    /// Preferred attendees in order.
    pub fn attendee_ids(&self) -> Vec<&AttendeeId> {
        self.0.iter().map(|p| &p.attendee_id).collect()
    }
}

impl FromIterator<VideoPreference> for VideoPreferences {
    fn from_iter<T: IntoIterator<Item = VideoPreference>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VideoPreferences {
    type Item = &'a VideoPreference;
    type IntoIter = std::slice::Iter<'a, VideoPreference>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(count: usize) -> Vec<AttendeeId> {
        (0..count).map(|i| AttendeeId::new(format!("attendee-{i}"))).collect()
    }

    #[test]
    fn seven_visible_sources_get_high_quality() {
        let prefs = VideoPreferences::for_visible(&ids(7), &GridConfig::default());

        assert_eq!(prefs.len(), 7);
        assert!(prefs.iter().all(|p| p.target_size == TargetDisplaySize::High));
    }

    #[test]
    fn eight_visible_sources_get_low_quality() {
        let prefs = VideoPreferences::for_visible(&ids(8), &GridConfig::default());

        assert_eq!(prefs.len(), 8);
        assert!(prefs.iter().all(|p| p.target_size == TargetDisplaySize::Low));
    }

    #[test]
    fn preserves_visible_order_and_priority() {
        let visible = ids(3);
        let prefs = VideoPreferences::for_visible(&visible, &GridConfig::default());

        assert_eq!(prefs.attendee_ids(), visible.iter().collect::<Vec<_>>());
        assert!(prefs.iter().all(|p| p.priority == 1));
    }

    #[test]
    fn empty_window_yields_empty_set() {
        assert!(VideoPreferences::for_visible(&[], &GridConfig::default()).is_empty());
    }
}
