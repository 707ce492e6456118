//! Invariant checking for deterministic grid testing.
//!
//! Invariants are properties that must always hold during system execution.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible event sequences.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from a
//! [`videogrid_core::VideoGrid`] into a [`GridSnapshot`], then runs registered
//! [`Invariant`] checks against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = GridSnapshot::from_grid(&grid);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    EmptyGridReset, ManualZoomBounds, PageWithinBounds, SourcesFollowRosterOrder,
    VisibleWindowBounded, ZoomTableConsistency,
};
pub use snapshot::GridSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies a registered invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// Zoom level equals the table entry at the zoom index.
    ZoomTableConsistency,
    /// Manual zoom keeps the index inside the selectable range.
    ManualZoomBounds,
    /// Available sources are the video-enabled attendees in roster order.
    SourcesFollowRosterOrder,
    /// An empty grid has default pagination.
    EmptyGridReset,
    /// The current page starts inside the source list.
    PageWithinBounds,
    /// The visible window never exceeds one page or the featured limit.
    VisibleWindowBounded,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Violated invariant.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against grid state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant identity for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the current state.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &GridSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against grid state.
/// Use [`InvariantRegistry::standard()`] for every grid invariant.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with all grid invariants.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(ZoomTableConsistency);
        registry.add(ManualZoomBounds);
        registry.add(SourcesFollowRosterOrder);
        registry.add(EmptyGridReset);
        registry.add(PageWithinBounds);
        registry.add(VisibleWindowBounded);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &GridSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking on first violation.
    ///
    /// Use this in tests where you want immediate failure with context.
    #[allow(clippy::panic, reason = "Test helper reports violations by panicking")]
    pub fn assert_all(&self, state: &GridSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
