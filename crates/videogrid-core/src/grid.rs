//! Grid state machine.
//!
//! [`GridState::apply`] is the reducer: old snapshot plus event gives a new
//! snapshot and the actions the caller must execute. The reducer works on a
//! private copy of the snapshot, so a reader holding the previous state never
//! observes a half-applied transition.
//!
//! [`VideoGrid`] owns the current snapshot and configuration and exposes the
//! user-command surface (zoom and page controls).

use crate::{
    AttendeeId, AttendeeRecord, ConfigError, GridAction, GridConfig, GridEvent, GridState,
    GridView, PaginationState, Roster, VideoPreferences, VideoSource, ViewMode,
};

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Snapshot after the event.
    pub state: GridState,
    /// Actions for the runtime, in execution order.
    pub actions: Vec<GridAction>,
}

impl GridState {
    /// Apply an event and return the next snapshot.
    ///
    /// Total: every event yields a state. Commands whose guard fails leave the
    /// state unchanged and produce no actions.
    pub fn apply(&self, config: &GridConfig, event: GridEvent) -> Transition {
        let mut next = self.clone();
        let actions = next.reduce(config, event);
        Transition { state: next, actions }
    }

    /// Preferences for the current visible window.
    pub fn preferences(&self, config: &GridConfig) -> VideoPreferences {
        VideoPreferences::for_visible(self.visible_window(config), config)
    }

    fn reduce(&mut self, config: &GridConfig, event: GridEvent) -> Vec<GridAction> {
        match event {
            GridEvent::ResetGridState => {
                *self = Self::default();
                vec![GridAction::Render]
            },
            GridEvent::UpdateViewMode { mode } => {
                self.view_mode = mode;
                self.choose_sources(config)
            },
            GridEvent::UpdateRoster { roster } => self.update_roster(config, roster),
            GridEvent::UpdateVideoSources { sources } => self.update_video_sources(config, sources),
            GridEvent::UpdateActiveSpeakers { attendee_ids } => {
                self.active_speakers = attendee_ids;
                self.choose_sources(config)
            },
            GridEvent::UpdateLocalTileState { video_enabled, sharing } => {
                self.local.video_enabled = video_enabled;
                self.local.sharing = sharing;
                vec![GridAction::Render]
            },
            GridEvent::UpdateContentShare { sharing_attendee_id } => {
                let started = sharing_attendee_id.is_some();
                self.content_share = sharing_attendee_id;
                if started && self.view_mode == ViewMode::GalleryView {
                    self.view_mode = ViewMode::FeaturedView;
                    return self.choose_sources(config);
                }
                vec![GridAction::Render]
            },
            GridEvent::PauseVideoTile { attendee_id } => {
                self.set_bandwidth_constrained(&attendee_id, true)
            },
            GridEvent::UnpauseVideoTile { attendee_id } => {
                self.set_bandwidth_constrained(&attendee_id, false)
            },
            GridEvent::ZoomIn => {
                if self.pagination.zoom_in(&config.zoom_levels) {
                    self.choose_sources(config)
                } else {
                    tracing::debug!(
                        index = self.pagination.zoomed_level_index(),
                        "cannot zoom in"
                    );
                    vec![]
                }
            },
            GridEvent::ZoomOut => {
                let sources = self.available_video_sources.len();
                if self.pagination.zoom_out(&config.zoom_levels, sources) {
                    self.choose_sources(config)
                } else {
                    tracing::debug!(
                        level = self.pagination.zoomed_level(),
                        sources,
                        "cannot zoom out"
                    );
                    vec![]
                }
            },
            GridEvent::PrevPage => {
                if self.pagination.prev_page() {
                    self.choose_sources(config)
                } else {
                    tracing::debug!("cannot go to previous page");
                    vec![]
                }
            },
            GridEvent::NextPage => {
                let sources = self.available_video_sources.len();
                if self.pagination.next_page(sources) {
                    self.choose_sources(config)
                } else {
                    tracing::debug!(
                        page = self.pagination.current_page(),
                        "cannot go to next page"
                    );
                    vec![]
                }
            },
        }
    }

    /// Replace the attendee mapping with the roster, keeping per-attendee
    /// flags for attendees that remain.
    fn update_roster(&mut self, config: &GridConfig, roster: Roster) -> Vec<GridAction> {
        let mut previous = std::mem::take(&mut self.attendees);

        self.attendees = roster
            .into_iter()
            .map(|(attendee_id, entry)| {
                let name = entry.name.unwrap_or_default();
                let record = match previous.swap_remove(&attendee_id) {
                    Some(mut record) => {
                        if !name.is_empty() {
                            record.display_name = name;
                        }
                        record
                    },
                    None => AttendeeRecord::new(attendee_id.clone(), name),
                };
                (attendee_id, record)
            })
            .collect();

        if self.rebuild_available_sources() {
            self.sources_changed(config)
        } else {
            vec![GridAction::Render]
        }
    }

    fn update_video_sources(
        &mut self,
        config: &GridConfig,
        sources: Vec<VideoSource>,
    ) -> Vec<GridAction> {
        for record in self.attendees.values_mut() {
            record.video_enabled = false;
        }

        for source in sources {
            let attendee_id = source.attendee_id;
            self.attendees
                .entry(attendee_id.clone())
                .or_insert_with(|| {
                    tracing::debug!(%attendee_id, "video source from attendee not in roster");
                    AttendeeRecord::placeholder(attendee_id)
                })
                .video_enabled = true;
        }

        self.rebuild_available_sources();
        self.sources_changed(config)
    }

    /// Recollect video-enabled attendees in roster order. Returns `true` if
    /// the list changed.
    fn rebuild_available_sources(&mut self) -> bool {
        let rebuilt: Vec<AttendeeId> = self
            .attendees
            .values()
            .filter(|record| record.video_enabled)
            .map(|record| record.attendee_id.clone())
            .collect();

        let changed = rebuilt != self.available_video_sources;
        self.available_video_sources = rebuilt;
        changed
    }

    fn sources_changed(&mut self, config: &GridConfig) -> Vec<GridAction> {
        let sources = self.available_video_sources.len();
        if sources == 0 {
            self.pagination = PaginationState::default();
            return vec![GridAction::Render];
        }

        if !self.pagination.is_zoomed() {
            self.pagination.auto_zoom(&config.zoom_levels, sources);
        }
        self.pagination.clamp_page(sources);
        self.choose_sources(config)
    }

    fn set_bandwidth_constrained(
        &mut self,
        attendee_id: &AttendeeId,
        constrained: bool,
    ) -> Vec<GridAction> {
        if let Some(record) = self.attendees.get_mut(attendee_id) {
            record.bandwidth_constrained = constrained;
            vec![GridAction::Render]
        } else {
            tracing::warn!(
                %attendee_id,
                constrained,
                "downlink policy referenced unknown attendee"
            );
            vec![]
        }
    }

    fn choose_sources(&self, config: &GridConfig) -> Vec<GridAction> {
        vec![GridAction::ChooseRemoteVideoSources(self.preferences(config)), GridAction::Render]
    }
}

/// Video grid state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone, Default)]
pub struct VideoGrid {
    config: GridConfig,
    state: GridState,
}

impl VideoGrid {
    /// Create a grid in the initial state.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, state: GridState::default() })
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: GridEvent) -> Vec<GridAction> {
        let Transition { state, actions } = self.state.apply(&self.config, event);
        self.state = state;
        actions
    }

    /// Show fewer tiles per page.
    pub fn zoom_in(&mut self) -> Vec<GridAction> {
        self.handle(GridEvent::ZoomIn)
    }

    /// Show more tiles per page.
    pub fn zoom_out(&mut self) -> Vec<GridAction> {
        self.handle(GridEvent::ZoomOut)
    }

    /// Go to the previous gallery page.
    pub fn prev_page(&mut self) -> Vec<GridAction> {
        self.handle(GridEvent::PrevPage)
    }

    /// Go to the next gallery page.
    pub fn next_page(&mut self) -> Vec<GridAction> {
        self.handle(GridEvent::NextPage)
    }

    /// Current snapshot.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Attendees selected for rendering.
    pub fn visible_window(&self) -> &[AttendeeId] {
        self.state.visible_window(&self.config)
    }

    /// Preferences for the current visible window.
    pub fn preferences(&self) -> VideoPreferences {
        self.state.preferences(&self.config)
    }

    /// Render model for the current snapshot.
    pub fn view(&self) -> GridView {
        GridView::new(&self.state, &self.config)
    }
}
