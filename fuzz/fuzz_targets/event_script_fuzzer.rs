//! Fuzz target for event script decoding
//!
//! Feeds arbitrary bytes to the replay pipeline as a JSON-lines script.
//!
//! # Invariants
//!
//! - Decoding never panics, whatever the input
//! - A script either replays or fails with a typed error
//! - A successful replay renders at least the initial view

#![no_main]

use libfuzzer_sys::fuzz_target;
use videogrid_core::GridConfig;
use videogrid_replay::replay;

fuzz_target!(|data: &[u8]| {
    if let Ok(summary) = replay(data, GridConfig::default()) {
        assert!(summary.renders >= 1);
        assert!(summary.submissions <= summary.renders);
    }
});
