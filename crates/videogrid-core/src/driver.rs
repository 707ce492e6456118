//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the grid runtime from specific event
//! sources and renderers. Each frontend implements the trait, while the
//! generic [`crate::Runtime`] handles all orchestration.

use crate::{CallEvent, GridView};

/// Abstracts event delivery and rendering for the grid runtime.
///
/// # Implementations
///
/// - **Replay**: Reads a recorded event script and logs every view
/// - **Simulation**: Scripted events for deterministic tests
/// - **Application**: Call SDK observers and a real UI
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Next event to process.
    ///
    /// Returns `None` once the event source is exhausted.
    fn poll_event(&mut self) -> Result<Option<CallEvent>, Self::Error>;

    /// Render the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, view: &GridView) -> Result<(), Self::Error>;

    /// Release resources after the loop ends.
    fn stop(&mut self);
}
