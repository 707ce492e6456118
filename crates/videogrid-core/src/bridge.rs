//! Downlink-policy-to-grid translation layer.
//!
//! The downlink bandwidth policy reports pauses per video tile, while the grid
//! tracks attendees. [`DownlinkBridge`] keeps the tile bindings announced by
//! the media layer and converts tile notifications into
//! [`GridEvent::PauseVideoTile`] / [`GridEvent::UnpauseVideoTile`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AttendeeId, GridEvent};

/// Video tile identifier assigned by the media layer.
pub type TileId = u32;

/// Tile lifecycle and downlink notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TileEvent {
    /// A tile now renders the given attendee.
    #[serde(rename = "tile_bound")]
    Bound {
        /// Tile identifier.
        tile_id: TileId,
        /// Attendee rendered by the tile.
        attendee_id: AttendeeId,
    },

    /// A tile was removed.
    #[serde(rename = "tile_unbound")]
    Unbound {
        /// Tile identifier.
        tile_id: TileId,
    },

    /// Downlink policy is about to pause the tile.
    #[serde(rename = "tile_will_be_paused")]
    WillBePaused {
        /// Tile identifier.
        tile_id: TileId,
    },

    /// Downlink policy is about to resume the tile.
    #[serde(rename = "tile_will_be_unpaused")]
    WillBeUnpaused {
        /// Tile identifier.
        tile_id: TileId,
    },
}

/// Bridge between tile-level downlink notifications and the grid.
#[derive(Debug, Clone, Default)]
pub struct DownlinkBridge {
    tiles: HashMap<TileId, AttendeeId>,
}

impl DownlinkBridge {
    /// Create a bridge with no bound tiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a tile event and return the grid event it implies, if any.
    ///
    /// Notifications for tiles without a bound attendee are dropped.
    pub fn handle(&mut self, event: TileEvent) -> Option<GridEvent> {
        match event {
            TileEvent::Bound { tile_id, attendee_id } => {
                self.tiles.insert(tile_id, attendee_id);
                None
            },
            TileEvent::Unbound { tile_id } => {
                self.tiles.remove(&tile_id);
                None
            },
            TileEvent::WillBePaused { tile_id } => self
                .bound_attendee(tile_id)
                .map(|attendee_id| GridEvent::PauseVideoTile { attendee_id }),
            TileEvent::WillBeUnpaused { tile_id } => self
                .bound_attendee(tile_id)
                .map(|attendee_id| GridEvent::UnpauseVideoTile { attendee_id }),
        }
    }

    /// Attendee bound to a tile. `None` if the tile is unknown.
    pub fn attendee_for(&self, tile_id: TileId) -> Option<&AttendeeId> {
        self.tiles.get(&tile_id)
    }

    /// Forget every binding (call session ended).
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    fn bound_attendee(&self, tile_id: TileId) -> Option<AttendeeId> {
        let attendee_id = self.tiles.get(&tile_id).cloned();
        if attendee_id.is_none() {
            tracing::debug!(tile_id, "downlink notification for unbound tile");
        }
        attendee_id
    }
}
