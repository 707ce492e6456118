//! Video grid event replay.
//!
//! Feeds a recorded JSON-lines call script through the
//! [`videogrid_core::Runtime`] and logs every rendered view and every
//! preference set handed to the downlink policy. Used to reproduce layout
//! and bandwidth decisions from captured call sessions.
//!
//! # Components
//!
//! - [`JsonLinesDriver`]: [`videogrid_core::Driver`] over a script reader
//! - [`LoggingPolicy`]: [`videogrid_core::DownlinkPolicy`] that logs submissions
//! - [`parse_event`]: single-line script decoder

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod error;
mod policy;
mod script;

use std::io::{BufRead, Read};

pub use driver::JsonLinesDriver;
pub use error::ReplayError;
pub use policy::LoggingPolicy;
pub use script::parse_event;
use videogrid_core::{GridConfig, GridView, Runtime, VideoGrid, VideoPreferences};

/// Outcome of a completed replay.
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    /// Events delivered to the runtime.
    pub events: usize,
    /// Views rendered, including the initial one.
    pub renders: usize,
    /// Preference sets submitted to the downlink policy.
    pub submissions: usize,
    /// Last rendered view.
    pub final_view: Option<GridView>,
    /// Last submitted preference set.
    pub final_preferences: Option<VideoPreferences>,
}

/// Load a grid configuration from JSON. Missing fields keep their defaults.
pub fn load_config<R: Read>(reader: R) -> Result<GridConfig, ReplayError> {
    serde_json::from_reader(reader).map_err(ReplayError::ConfigFormat)
}

/// Replay a script against a fresh grid.
///
/// Stops at the end of the script or at the first `quit` event.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the script cannot be
/// read, or a line does not decode to a supported event. Events before the
/// failing line have already been applied and logged.
pub fn replay<R: BufRead>(script: R, config: GridConfig) -> Result<ReplaySummary, ReplayError> {
    let grid = VideoGrid::new(config)?;
    let mut runtime = Runtime::new(JsonLinesDriver::new(script), LoggingPolicy::new(), grid);

    runtime.run()?;

    let (mut driver, mut policy) = runtime.into_parts();
    Ok(ReplaySummary {
        events: driver.events(),
        renders: driver.renders(),
        submissions: policy.submissions(),
        final_view: driver.take_last_view(),
        final_preferences: policy.take_last(),
    })
}
