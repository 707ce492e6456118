//! Model grid - the reference implementation.
//!
//! Keeps attendees in a plain vector and recomputes everything with linear
//! scans. Zoom selection walks the table one step at a time. The model is the
//! oracle the real state machine is verified against.

use videogrid_core::{DEFAULT_ZOOM_LEVELS, GridAction, TargetDisplaySize, VideoGrid, ViewMode};

use super::operation::{ModelAttendeeId, Operation, RosterEntry, attendee_id};

/// Visible tile count at which preferences switch to low quality.
const LOW_QUALITY_THRESHOLD: usize = 8;

/// Featured view tile cap.
const FEATURED_TILE_LIMIT: usize = 4;

/// How the grid reacted to one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelReaction {
    /// Rejected: no actions.
    Ignored,
    /// Render only.
    Render,
    /// New preferences, then render.
    ChooseSources,
}

impl ModelReaction {
    /// Classify the real state machine's action list.
    pub fn of(actions: &[GridAction]) -> Option<Self> {
        match actions {
            [] => Some(Self::Ignored),
            [GridAction::Render] => Some(Self::Render),
            [GridAction::ChooseRemoteVideoSources(_), GridAction::Render] => {
                Some(Self::ChooseSources)
            },
            _ => None,
        }
    }
}

/// Observable state for oracle comparison.
///
/// This is the subset of grid state that can be compared against the real
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Attendee IDs with display names, in stored order.
    pub names: Vec<(String, String)>,
    /// Attendees with paused tiles, in stored order.
    pub constrained: Vec<String>,
    /// Available video sources.
    pub available: Vec<String>,
    /// 1-based page.
    pub current_page: usize,
    /// Tiles per page.
    pub zoomed_level: usize,
    /// Zoom table index.
    pub zoomed_level_index: usize,
    /// Manual zoom in effect.
    pub is_zoomed: bool,
    /// Featured view active.
    pub featured: bool,
    /// Sharing attendee.
    pub content_share: Option<String>,
    /// Local camera and content tiles.
    pub local: (bool, bool),
    /// Preferences for the visible window.
    pub preferences: Vec<(String, TargetDisplaySize)>,
}

impl ObservableState {
    /// Extract observable state from the real state machine.
    pub fn from_grid(grid: &VideoGrid) -> Self {
        let state = grid.state();
        let pagination = state.pagination();
        let attendees = state.attendees().values();
        let local = state.local_tiles();

        Self {
            names: attendees
                .clone()
                .map(|r| (r.attendee_id.to_string(), r.display_name.clone()))
                .collect(),
            constrained: attendees
                .filter(|r| r.bandwidth_constrained)
                .map(|r| r.attendee_id.to_string())
                .collect(),
            available: state.available_video_sources().iter().map(ToString::to_string).collect(),
            current_page: pagination.current_page(),
            zoomed_level: pagination.zoomed_level(),
            zoomed_level_index: pagination.zoomed_level_index(),
            is_zoomed: pagination.is_zoomed(),
            featured: state.view_mode() == ViewMode::FeaturedView,
            content_share: state.content_share().map(ToString::to_string),
            local: (local.video_enabled, local.sharing),
            preferences: grid
                .preferences()
                .iter()
                .map(|p| (p.attendee_id.to_string(), p.target_size))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
struct ModelAttendee {
    id: String,
    name: String,
    video: bool,
    constrained: bool,
}

/// Reference grid using the default configuration.
#[derive(Debug, Clone)]
pub struct ModelGrid {
    attendees: Vec<ModelAttendee>,
    available: Vec<String>,
    speakers: Vec<String>,
    page: usize,
    level_index: usize,
    zoomed: bool,
    featured: bool,
    content_share: Option<String>,
    local: (bool, bool),
}

impl Default for ModelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelGrid {
    /// Create a model in the initial state.
    pub fn new() -> Self {
        Self {
            attendees: Vec::new(),
            available: Vec::new(),
            speakers: Vec::new(),
            page: 1,
            level_index: 0,
            zoomed: false,
            featured: false,
            content_share: None,
            local: (false, false),
        }
    }

    /// Apply an operation.
    pub fn apply(&mut self, op: &Operation) -> ModelReaction {
        match op {
            Operation::UpdateRoster { entries } => self.apply_roster(entries),
            Operation::UpdateVideoSources { attendees } => self.apply_sources(attendees),
            Operation::UpdateActiveSpeakers { attendees } => {
                self.speakers = attendees.iter().map(|&id| name_of(id)).collect();
                ModelReaction::ChooseSources
            },
            Operation::SetViewMode { featured } => {
                self.featured = *featured;
                ModelReaction::ChooseSources
            },
            Operation::UpdateLocalTiles { video_enabled, sharing } => {
                self.local = (*video_enabled, *sharing);
                ModelReaction::Render
            },
            Operation::ContentShare { attendee } => {
                self.content_share = attendee.map(name_of);
                if self.content_share.is_some() && !self.featured {
                    self.featured = true;
                    ModelReaction::ChooseSources
                } else {
                    ModelReaction::Render
                }
            },
            Operation::Pause { attendee } => self.apply_constrained(*attendee, true),
            Operation::Unpause { attendee } => self.apply_constrained(*attendee, false),
            Operation::ZoomIn => {
                if self.level_index <= 1 {
                    return ModelReaction::Ignored;
                }
                self.level_index -= 1;
                self.zoomed = true;
                ModelReaction::ChooseSources
            },
            Operation::ZoomOut => {
                let at_loosest = self.level_index + 2 >= DEFAULT_ZOOM_LEVELS.len();
                if self.level() >= self.available.len() || at_loosest {
                    return ModelReaction::Ignored;
                }
                self.level_index += 1;
                self.page = 1;
                self.zoomed = true;
                ModelReaction::ChooseSources
            },
            Operation::PrevPage => {
                if self.page == 1 {
                    return ModelReaction::Ignored;
                }
                self.page -= 1;
                ModelReaction::ChooseSources
            },
            Operation::NextPage => {
                if self.level() * self.page >= self.available.len() {
                    return ModelReaction::Ignored;
                }
                self.page += 1;
                ModelReaction::ChooseSources
            },
            Operation::Reset => {
                *self = Self::new();
                ModelReaction::Render
            },
        }
    }

    /// Observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let visible = self.visible();
        let size = if visible.len() < LOW_QUALITY_THRESHOLD {
            TargetDisplaySize::High
        } else {
            TargetDisplaySize::Low
        };

        ObservableState {
            names: self.attendees.iter().map(|a| (a.id.clone(), a.name.clone())).collect(),
            constrained: self
                .attendees
                .iter()
                .filter(|a| a.constrained)
                .map(|a| a.id.clone())
                .collect(),
            available: self.available.clone(),
            current_page: self.page,
            zoomed_level: self.level(),
            zoomed_level_index: self.level_index,
            is_zoomed: self.zoomed,
            featured: self.featured,
            content_share: self.content_share.clone(),
            local: self.local,
            preferences: visible.into_iter().map(|id| (id, size)).collect(),
        }
    }

    fn level(&self) -> usize {
        DEFAULT_ZOOM_LEVELS[self.level_index]
    }

    fn visible(&self) -> Vec<String> {
        if self.featured {
            return self.speakers.iter().take(FEATURED_TILE_LIMIT).cloned().collect();
        }
        self.available
            .iter()
            .skip((self.page - 1) * self.level())
            .take(self.level())
            .cloned()
            .collect()
    }

    fn apply_roster(&mut self, entries: &[RosterEntry]) -> ModelReaction {
        let mut roster: Vec<(String, String)> = Vec::new();
        for entry in entries {
            let id = name_of(entry.attendee);
            let name = entry.name().unwrap_or_default();
            match roster.iter_mut().find(|(existing, _)| *existing == id) {
                Some(slot) => slot.1 = name,
                None => roster.push((id, name)),
            }
        }

        let previous = std::mem::take(&mut self.attendees);
        for (id, name) in roster {
            let attendee = match previous.iter().find(|a| a.id == id) {
                Some(known) => {
                    let mut known = known.clone();
                    if !name.is_empty() {
                        known.name = name;
                    }
                    known
                },
                None => ModelAttendee { id, name, video: false, constrained: false },
            };
            self.attendees.push(attendee);
        }

        if self.rebuild() { self.sources_changed() } else { ModelReaction::Render }
    }

    fn apply_sources(&mut self, sources: &[ModelAttendeeId]) -> ModelReaction {
        for attendee in &mut self.attendees {
            attendee.video = false;
        }
        for &source in sources {
            let id = name_of(source);
            match self.attendees.iter_mut().find(|a| a.id == id) {
                Some(attendee) => attendee.video = true,
                None => self.attendees.push(ModelAttendee {
                    id,
                    name: String::new(),
                    video: true,
                    constrained: false,
                }),
            }
        }

        self.rebuild();
        self.sources_changed()
    }

    fn apply_constrained(&mut self, attendee: ModelAttendeeId, constrained: bool) -> ModelReaction {
        let id = name_of(attendee);
        match self.attendees.iter_mut().find(|a| a.id == id) {
            Some(attendee) => {
                attendee.constrained = constrained;
                ModelReaction::Render
            },
            None => ModelReaction::Ignored,
        }
    }

    fn rebuild(&mut self) -> bool {
        let rebuilt: Vec<String> =
            self.attendees.iter().filter(|a| a.video).map(|a| a.id.clone()).collect();
        let changed = rebuilt != self.available;
        self.available = rebuilt;
        changed
    }

    fn sources_changed(&mut self) -> ModelReaction {
        let count = self.available.len();
        if count == 0 {
            self.page = 1;
            self.level_index = 0;
            self.zoomed = false;
            return ModelReaction::Render;
        }

        if !self.zoomed {
            let last = DEFAULT_ZOOM_LEVELS.len() - 1;
            self.level_index = 1;
            while self.level_index < last && DEFAULT_ZOOM_LEVELS[self.level_index] < count {
                self.level_index += 1;
            }
        }

        while self.page > 1 && (self.page - 1) * self.level() >= count {
            self.page -= 1;
        }
        ModelReaction::ChooseSources
    }
}

fn name_of(id: ModelAttendeeId) -> String {
    attendee_id(id).to_string()
}
