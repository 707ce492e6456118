//! Grid side-effects.
//!
//! This module defines [`GridAction`], the instructions produced by the grid
//! state machine for the runtime to execute.

use crate::VideoPreferences;

/// Actions produced by the grid state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// Re-render the grid from the current state.
    Render,

    /// Replace the downlink policy's preference set.
    ChooseRemoteVideoSources(VideoPreferences),
}
