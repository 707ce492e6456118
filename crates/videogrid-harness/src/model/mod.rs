//! Reference model for model-based testing.
//!
//! [`ModelGrid`] re-states the grid rules in the plainest possible form. Tests
//! apply the same [`Operation`] sequence to the model and to
//! [`videogrid_core::VideoGrid`], then compare their [`ObservableState`].

mod grid;
mod operation;

pub use grid::{ModelGrid, ModelReaction, ObservableState};
pub use operation::{ATTENDEE_POOL, ModelAttendeeId, Operation, RosterEntry, attendee_id};
