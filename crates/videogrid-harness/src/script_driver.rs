//! Scripted driver implementing the Driver trait.
//!
//! `ScriptDriver` provides the same interface as the replay driver but reads
//! events from an in-memory queue. It implements [`Driver`] so the same
//! [`videogrid_core::Runtime`] orchestration code runs in both replay and
//! simulation.

use std::collections::VecDeque;

use videogrid_core::{CallEvent, Driver, GridView};

/// Error type for the script driver.
#[derive(Debug, Clone)]
pub struct ScriptDriverError(pub String);

impl std::fmt::Display for ScriptDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScriptDriverError: {}", self.0)
    }
}

impl std::error::Error for ScriptDriverError {}

/// Scripted driver for deterministic testing.
///
/// Events are queued up front or injected between runs. Every rendered view is
/// captured for later assertions.
#[derive(Default)]
pub struct ScriptDriver {
    events: VecDeque<CallEvent>,
    renders: Vec<GridView>,
    fail_render_after: Option<usize>,
    stopped: bool,
}

impl ScriptDriver {
    /// Create a driver with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver that delivers the given events in order.
    pub fn with_events<I, E>(events: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<CallEvent>,
    {
        Self { events: events.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Fail every render once `renders` views have been captured.
    #[must_use]
    pub fn fail_render_after(mut self, renders: usize) -> Self {
        self.fail_render_after = Some(renders);
        self
    }

    /// Queue an event for processing.
    pub fn inject_event(&mut self, event: impl Into<CallEvent>) {
        self.events.push_back(event.into());
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.events.is_empty()
    }

    /// Every captured view, oldest first.
    pub fn renders(&self) -> &[GridView] {
        &self.renders
    }

    /// Most recent captured view.
    pub fn last_render(&self) -> Option<&GridView> {
        self.renders.last()
    }

    /// Whether [`Driver::stop`] has been called.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Driver for ScriptDriver {
    type Error = ScriptDriverError;

    fn poll_event(&mut self) -> Result<Option<CallEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }

    fn render(&mut self, view: &GridView) -> Result<(), Self::Error> {
        if self.fail_render_after.is_some_and(|limit| self.renders.len() >= limit) {
            return Err(ScriptDriverError(format!("render {} refused", self.renders.len() + 1)));
        }
        tracing::trace!(%view, "captured render");
        self.renders.push(view.clone());
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
