//! Driver that reads events from a JSON-lines script.

use std::io::{BufRead, Lines};

use videogrid_core::{CallEvent, Driver, GridView};

use crate::{ReplayError, script::parse_event};

/// Replay driver.
///
/// Implements [`Driver`] over any buffered reader. Every rendered view is
/// logged at info level and the last one is kept for the replay summary.
pub struct JsonLinesDriver<R> {
    lines: Lines<R>,
    line: usize,
    events: usize,
    renders: usize,
    last_view: Option<GridView>,
}

impl<R: BufRead> JsonLinesDriver<R> {
    /// Create a driver reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), line: 0, events: 0, renders: 0, last_view: None }
    }

    /// Events delivered so far.
    pub fn events(&self) -> usize {
        self.events
    }

    /// Views rendered so far.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Take the most recent view.
    pub fn take_last_view(&mut self) -> Option<GridView> {
        self.last_view.take()
    }
}

impl<R: BufRead> Driver for JsonLinesDriver<R> {
    type Error = ReplayError;

    fn poll_event(&mut self) -> Result<Option<CallEvent>, Self::Error> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;

            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let event = parse_event(self.line, text)?;
            tracing::debug!(line = self.line, ?event, "replaying event");
            self.events += 1;
            return Ok(Some(event));
        }
        Ok(None)
    }

    fn render(&mut self, view: &GridView) -> Result<(), Self::Error> {
        self.renders += 1;
        tracing::info!(render = self.renders, line = self.line, "{view}");
        self.last_view = Some(view.clone());
        Ok(())
    }

    fn stop(&mut self) {
        tracing::info!(events = self.events, renders = self.renders, "replay finished");
    }
}

#[cfg(test)]
mod tests {
    use videogrid_core::GridEvent;

    use super::*;

    #[test]
    fn skips_blank_lines_and_counts_script_lines() {
        let script = "\n{\"type\":\"zoom_in\"}\n\n{\"type\":\"bogus\"}\n";
        let mut driver = JsonLinesDriver::new(script.as_bytes());

        assert_eq!(driver.poll_event().ok().flatten(), Some(CallEvent::Grid(GridEvent::ZoomIn)));
        assert!(matches!(driver.poll_event(), Err(ReplayError::UnknownEvent { line: 4, .. })));
        assert_eq!(driver.events(), 1);
    }

    #[test]
    fn exhausted_script_yields_none() {
        let mut driver = JsonLinesDriver::new(&b""[..]);

        assert!(matches!(driver.poll_event(), Ok(None)));
    }
}
