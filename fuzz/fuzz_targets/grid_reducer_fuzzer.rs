//! Fuzz target for the grid reducer
//!
//! Drives arbitrary operation sequences into the real state machine and the
//! reference model side by side.
//!
//! # Invariants
//!
//! - Every grid invariant holds after every operation
//! - Reducer reaction matches the model (ignored / render / new preferences)
//! - Observable state matches the model after every operation
//! - A rejected command never changes state

#![no_main]

use libfuzzer_sys::fuzz_target;
use videogrid_core::VideoGrid;
use videogrid_harness::{
    GridSnapshot, InvariantRegistry, ModelGrid, ModelReaction, ObservableState, Operation,
};

fuzz_target!(|ops: Vec<Operation>| {
    let registry = InvariantRegistry::standard();
    let mut model = ModelGrid::new();
    let mut grid = VideoGrid::default();

    for (i, op) in ops.iter().enumerate() {
        let before = grid.state().clone();
        let actions = grid.handle(op.to_event());
        let reaction = ModelReaction::of(&actions);

        assert_eq!(reaction, Some(model.apply(op)), "reaction divergence at {i}: {op:?}");
        if reaction == Some(ModelReaction::Ignored) {
            assert_eq!(grid.state(), &before, "rejected operation {i} changed state: {op:?}");
        }

        registry.assert_all(&GridSnapshot::from_grid(&grid), &format!("after operation {i}"));
        assert_eq!(
            ObservableState::from_grid(&grid),
            model.observable_state(),
            "state divergence at {i}: {op:?}"
        );
    }
});
