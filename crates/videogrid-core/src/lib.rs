//! Video grid state machine
//!
//! Decides which remote video tiles a multi-party call displays, in what
//! order, how many per page, at which zoom level, and which remote sources
//! deserve high or low resolution downlink bandwidth.
//!
//! # Architecture
//!
//! The grid is a pure state machine. Collaborators feed it [`GridEvent`]s
//! (roster, video sources, active speakers, local media, downlink pause
//! notifications, user commands) and it returns [`GridAction`]s for the caller
//! to execute: re-render, or hand a fresh [`VideoPreferences`] set to the
//! downlink bandwidth policy. No I/O happens here.
//!
//! # Components
//!
//! - [`GridState`]: Immutable-per-transition snapshot with the reducer
//!   ([`GridState::apply`])
//! - [`VideoGrid`]: Owning wrapper that swaps snapshots and exposes controls
//! - [`DownlinkBridge`]: Resolves tile-level pause notifications to attendees
//! - [`Driver`] / [`DownlinkPolicy`]: I/O seams implemented by frontends
//! - [`Runtime`]: Synchronous event loop wiring the pieces together

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod attendee;
mod bridge;
mod config;
mod driver;
mod error;
mod event;
mod grid;
mod pagination;
mod policy;
mod preference;
mod runtime;
mod state;
mod view;

pub use action::GridAction;
pub use attendee::{AttendeeId, AttendeeRecord, Roster, RosterAttendee, VideoSource};
pub use bridge::{DownlinkBridge, TileEvent, TileId};
pub use config::GridConfig;
pub use driver::Driver;
pub use error::ConfigError;
pub use event::{CallEvent, GridEvent};
pub use grid::{Transition, VideoGrid};
pub use pagination::{DEFAULT_ZOOM_LEVELS, PaginationState};
pub use policy::DownlinkPolicy;
pub use preference::{TargetDisplaySize, VideoPreference, VideoPreferences};
pub use runtime::Runtime;
pub use state::{GridState, LocalTileState, ViewMode};
pub use view::{GridView, TileView};
