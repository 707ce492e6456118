//! Deterministic simulation harness for video grid testing.
//!
//! Scripted implementations of the [`videogrid_core::Driver`] and
//! [`videogrid_core::DownlinkPolicy`] traits for reproducible runtime tests.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation of the grid rules.
//! Operations are applied to both the model and the real state machine, and
//! their observable states are compared.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the grid
//! invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod model;
pub mod recording_policy;
pub mod script_driver;

pub use invariants::{
    EmptyGridReset, GridSnapshot, Invariant, InvariantKind, InvariantRegistry, InvariantResult,
    ManualZoomBounds, PageWithinBounds, SourcesFollowRosterOrder, Violation, VisibleWindowBounded,
    ZoomTableConsistency,
};
pub use model::{
    ATTENDEE_POOL, ModelAttendeeId, ModelGrid, ModelReaction, ObservableState, Operation,
    RosterEntry, attendee_id,
};
pub use recording_policy::RecordingPolicy;
pub use script_driver::{ScriptDriver, ScriptDriverError};
