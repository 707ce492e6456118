//! Model-based property tests.
//!
//! These tests generate random operation sequences and verify that the real
//! state machine behaves identically to the reference model.
//!
//! # Architecture
//!
//! ```text
//! proptest generates: Vec<Operation>
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!       ModelGrid      VideoGrid       Compare
//!      (reference)      (real)        Reactions
//! ```

use proptest::prelude::*;
use videogrid_core::VideoGrid;
use videogrid_harness::{
    ATTENDEE_POOL, ModelAttendeeId, ModelGrid, ModelReaction, ObservableState, Operation,
    RosterEntry,
};

/// Strategy for attendees drawn from the shared pool.
fn attendee_strategy() -> impl Strategy<Value = ModelAttendeeId> {
    0..ATTENDEE_POOL
}

fn attendees_strategy() -> impl Strategy<Value = Vec<ModelAttendeeId>> {
    prop::collection::vec(attendee_strategy(), 0..=usize::from(ATTENDEE_POOL))
}

fn roster_strategy() -> impl Strategy<Value = Vec<RosterEntry>> {
    prop::collection::vec(
        (attendee_strategy(), any::<bool>())
            .prop_map(|(attendee, named)| RosterEntry { attendee, named }),
        0..=usize::from(ATTENDEE_POOL),
    )
}

/// Strategy for generating operations.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        // Weight towards source churn and controls
        3 => roster_strategy().prop_map(|entries| Operation::UpdateRoster { entries }),
        4 => attendees_strategy().prop_map(|attendees| Operation::UpdateVideoSources { attendees }),
        2 => attendees_strategy()
            .prop_map(|attendees| Operation::UpdateActiveSpeakers { attendees }),
        1 => any::<bool>().prop_map(|featured| Operation::SetViewMode { featured }),
        1 => (any::<bool>(), any::<bool>()).prop_map(|(video_enabled, sharing)| {
            Operation::UpdateLocalTiles { video_enabled, sharing }
        }),
        1 => proptest::option::of(attendee_strategy())
            .prop_map(|attendee| Operation::ContentShare { attendee }),
        1 => attendee_strategy().prop_map(|attendee| Operation::Pause { attendee }),
        1 => attendee_strategy().prop_map(|attendee| Operation::Unpause { attendee }),
        3 => Just(Operation::ZoomIn),
        3 => Just(Operation::ZoomOut),
        3 => Just(Operation::PrevPage),
        3 => Just(Operation::NextPage),
        1 => Just(Operation::Reset),
    ]
}

proptest! {
    /// Verify that reactions and observable state match between model and
    /// real implementation after every operation.
    #[test]
    fn prop_model_matches_real(ops in prop::collection::vec(operation_strategy(), 0..60)) {
        let mut model = ModelGrid::new();
        let mut real = VideoGrid::default();

        for (i, op) in ops.iter().enumerate() {
            let model_reaction = model.apply(op);
            let real_reaction = ModelReaction::of(&real.handle(op.to_event()));

            prop_assert_eq!(
                Some(model_reaction),
                real_reaction,
                "Reaction divergence at operation {}: {:?}",
                i, op
            );
            prop_assert_eq!(
                model.observable_state(),
                ObservableState::from_grid(&real),
                "State divergence at operation {}: {:?}",
                i, op
            );
        }
    }

    /// Reset always returns both implementations to the initial state.
    #[test]
    fn prop_reset_restores_initial_state(
        ops in prop::collection::vec(operation_strategy(), 0..40)
    ) {
        let mut real = VideoGrid::default();
        for op in &ops {
            let _ = real.handle(op.to_event());
        }

        let _ = real.handle(Operation::Reset.to_event());

        prop_assert_eq!(
            ObservableState::from_grid(&real),
            ModelGrid::new().observable_state()
        );
    }
}

#[test]
fn model_and_real_agree_on_paged_walkthrough() {
    let ops = [
        Operation::UpdateRoster {
            entries: (0..12).map(|attendee| RosterEntry { attendee, named: true }).collect(),
        },
        Operation::UpdateVideoSources { attendees: (0..12).rev().collect() },
        Operation::ZoomIn,
        Operation::NextPage,
        Operation::UpdateVideoSources { attendees: vec![0, 1, 2] },
        Operation::ZoomOut,
    ];

    let mut model = ModelGrid::new();
    let mut real = VideoGrid::default();
    for op in &ops {
        assert_eq!(Some(model.apply(op)), ModelReaction::of(&real.handle(op.to_event())));
    }

    let state = ObservableState::from_grid(&real);
    assert_eq!(state, model.observable_state());
    assert_eq!(state.available, ["attendee-00", "attendee-01", "attendee-02"]);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.zoomed_level, 8);
    assert!(state.is_zoomed);
}
