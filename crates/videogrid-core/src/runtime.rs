//! Generic runtime for grid orchestration.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`VideoGrid`]: grid state machine
//! - [`DownlinkBridge`]: tile-to-attendee resolution
//! - [`Driver`]: event source and renderer
//! - [`DownlinkPolicy`]: receiver of bandwidth preferences
//!
//! Events are applied strictly one at a time; each transition and its actions
//! complete before the next event is polled.

use crate::{CallEvent, DownlinkBridge, DownlinkPolicy, Driver, GridAction, GridEvent, VideoGrid};

/// Generic runtime that orchestrates grid, bridge, driver and policy.
///
/// # Type Parameters
///
/// - `D`: Platform-specific event source and renderer
/// - `P`: Downlink bandwidth policy
pub struct Runtime<D, P>
where
    D: Driver,
    P: DownlinkPolicy,
{
    driver: D,
    policy: P,
    grid: VideoGrid,
    bridge: DownlinkBridge,
}

impl<D, P> Runtime<D, P>
where
    D: Driver,
    P: DownlinkPolicy,
{
    /// Create a new runtime around an initialized grid.
    pub fn new(driver: D, policy: P, grid: VideoGrid) -> Self {
        Self { driver, policy, grid, bridge: DownlinkBridge::new() }
    }

    /// Run the event loop until the driver is exhausted or a quit event
    /// arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to deliver an event or render.
    pub fn run(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.grid.view())?;

        while let Some(event) = self.driver.poll_event()? {
            if self.process_event(event)? {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process a single event.
    ///
    /// Returns `true` if the runtime should stop.
    pub fn process_event(&mut self, event: CallEvent) -> Result<bool, D::Error> {
        match event {
            CallEvent::Quit => return Ok(true),
            CallEvent::Grid(event) => {
                if matches!(event, GridEvent::ResetGridState) {
                    self.bridge.clear();
                }
                self.dispatch(event)?;
            },
            CallEvent::Tile(event) => {
                if let Some(event) = self.bridge.handle(event) {
                    self.dispatch(event)?;
                }
            },
        }
        Ok(false)
    }

    fn dispatch(&mut self, event: GridEvent) -> Result<(), D::Error> {
        let actions = self.grid.handle(event);
        self.process_actions(actions)
    }

    fn process_actions(&mut self, actions: Vec<GridAction>) -> Result<(), D::Error> {
        for action in actions {
            match action {
                GridAction::Render => self.driver.render(&self.grid.view())?,
                GridAction::ChooseRemoteVideoSources(preferences) => {
                    self.policy.choose_remote_video_sources(&preferences);
                },
            }
        }
        Ok(())
    }

    /// Get a reference to the grid
    pub fn grid(&self) -> &VideoGrid {
        &self.grid
    }

    /// Get a reference to the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a reference to the policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Get a reference to the bridge
    pub fn bridge(&self) -> &DownlinkBridge {
        &self.bridge
    }

    /// Consume the runtime and return driver and policy.
    pub fn into_parts(self) -> (D, P) {
        (self.driver, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, convert::Infallible};

    use super::*;
    use crate::{GridView, TileEvent, VideoPreferences, VideoSource};

    #[derive(Default)]
    struct QueueDriver {
        events: VecDeque<CallEvent>,
        renders: Vec<GridView>,
        stopped: bool,
    }

    impl Driver for QueueDriver {
        type Error = Infallible;

        fn poll_event(&mut self) -> Result<Option<CallEvent>, Self::Error> {
            Ok(self.events.pop_front())
        }

        fn render(&mut self, view: &GridView) -> Result<(), Self::Error> {
            self.renders.push(view.clone());
            Ok(())
        }

        fn stop(&mut self) {
            self.stopped = true;
        }
    }

    #[derive(Default)]
    struct LastPolicy(Option<VideoPreferences>);

    impl DownlinkPolicy for LastPolicy {
        fn choose_remote_video_sources(&mut self, preferences: &VideoPreferences) {
            self.0 = Some(preferences.clone());
        }
    }

    fn runtime(events: Vec<CallEvent>) -> Runtime<QueueDriver, LastPolicy> {
        let driver = QueueDriver { events: events.into(), ..QueueDriver::default() };
        Runtime::new(driver, LastPolicy::default(), VideoGrid::default())
    }

    #[test]
    fn run_forwards_preferences_and_renders() {
        let sources = vec![VideoSource::new("a"), VideoSource::new("b")];
        let mut runtime = runtime(vec![GridEvent::UpdateVideoSources { sources }.into()]);

        let Ok(()) = runtime.run();

        assert!(runtime.driver().stopped);
        assert_eq!(runtime.driver().renders.len(), 2);
        let chosen = runtime.policy().0.as_ref().map(VideoPreferences::len);
        assert_eq!(chosen, Some(2));
    }

    #[test]
    fn quit_stops_before_remaining_events() {
        let mut runtime = runtime(vec![
            CallEvent::Quit,
            GridEvent::UpdateVideoSources { sources: vec![VideoSource::new("a")] }.into(),
        ]);

        let Ok(()) = runtime.run();

        assert!(runtime.grid().state().available_video_sources().is_empty());
        assert_eq!(runtime.driver().events.len(), 1);
    }

    #[test]
    fn tile_pause_reaches_grid() {
        let mut runtime = runtime(vec![
            GridEvent::UpdateVideoSources { sources: vec![VideoSource::new("a")] }.into(),
            TileEvent::Bound { tile_id: 3, attendee_id: "a".into() }.into(),
            TileEvent::WillBePaused { tile_id: 3 }.into(),
        ]);

        let Ok(()) = runtime.run();

        let paused = runtime.driver().renders.last().map(|view| view.tiles[0].paused);
        assert_eq!(paused, Some(true));
    }

    #[test]
    fn reset_clears_tile_bindings() {
        let mut runtime = runtime(vec![
            TileEvent::Bound { tile_id: 3, attendee_id: "a".into() }.into(),
            GridEvent::ResetGridState.into(),
        ]);

        let Ok(()) = runtime.run();

        assert!(runtime.bridge().attendee_for(3).is_none());
    }
}
