//! Event script decoding.
//!
//! A script is JSON lines, one event per line, tagged by `type`:
//!
//! ```text
//! {"type":"update_roster","roster":{"a":{"name":"Ann"},"b":{"name":"Ben"}}}
//! {"type":"update_video_sources","sources":[{"attendee_id":"b"},{"attendee_id":"a"}]}
//! {"type":"tile_bound","tile_id":1,"attendee_id":"a"}
//! {"type":"tile_will_be_paused","tile_id":1}
//! {"type":"zoom_in"}
//! {"type":"quit"}
//! ```
//!
//! Blank lines are skipped. Tags starting with `tile_` are downlink tile
//! notifications, `quit` ends the replay, everything else is a grid event.

use serde_json::Value;
use videogrid_core::{CallEvent, GridEvent, TileEvent};

use crate::ReplayError;

const QUIT_TAG: &str = "quit";
const TILE_TAG_PREFIX: &str = "tile_";

/// Decode one script line. `line` is 1-based and only used for errors.
pub fn parse_event(line: usize, text: &str) -> Result<CallEvent, ReplayError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| ReplayError::Syntax { line, source })?;
    let tag = value.get("type").and_then(Value::as_str).unwrap_or_default();

    let event = if tag == QUIT_TAG {
        Ok(CallEvent::Quit)
    } else if tag.starts_with(TILE_TAG_PREFIX) {
        serde_json::from_value::<TileEvent>(value).map(CallEvent::Tile)
    } else {
        serde_json::from_value::<GridEvent>(value).map(CallEvent::Grid)
    };

    event.map_err(|source| ReplayError::UnknownEvent { line, source })
}
