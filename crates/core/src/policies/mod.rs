//! Page Replacement Policies.
//!
//! Implements the algorithms that decide which resident page to evict on a fault.
//!
//! # Policies
//!
//! - `Optimal`: Evicts the page whose next use lies farthest in the future (needs the full trace).
//! - `Clock`: Global second chance over one pool of frames, with an optional periodic
//!   reference-bit clearing interrupt.
//! - `SegmentedClock`: Two independent second-chance pools for instruction and data pages.
//!
//! Every run builds its state from scratch and drops it when the fault count is returned, so
//! simulators hold configuration only and can be shared freely.

/// Second-chance (clock) replacement over a single pool of frames.
pub mod clock;

/// Observation hooks for didactic, step-by-step output.
pub mod observer;

/// Optimal replacement with full lookahead.
pub mod optimal;

/// Second-chance replacement with separate instruction and data pools.
pub mod segmented;

pub use clock::ClockSimulator;
pub use observer::{
    InterruptEvent, NoopObserver, ResidentSnapshot, StepObserver, TraceRecord, TraceRecorder,
};
pub use optimal::OptimalSimulator;
pub use segmented::{SegmentedClockSimulator, SegmentedFaults};

use crate::common::{AccessTrace, FaultCount, SimError};
use crate::config::PolicyKind;

/// Trait for page replacement simulators.
///
/// Implementations replay a whole trace against their frame budget and return the number of
/// page faults. Either the full count is returned or the run is rejected before any access is
/// processed.
pub trait ReplacementSimulator: Send + Sync {
    /// Identifies the policy.
    fn kind(&self) -> PolicyKind;

    /// Checks that the frame budget can serve `trace`, without running it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCapacity`] when a non-empty trace meets a zero budget.
    fn validate(&self, trace: &AccessTrace) -> Result<(), SimError>;

    /// Replays `trace`, reporting every step to `observer`.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] if the frame budget can never admit a page the trace needs.
    fn run_observed(
        &self,
        trace: &AccessTrace,
        observer: &mut dyn StepObserver,
    ) -> Result<FaultCount, SimError>;

    /// Replays `trace` without observation.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] if the frame budget can never admit a page the trace needs.
    fn run(&self, trace: &AccessTrace) -> Result<FaultCount, SimError> {
        self.run_observed(trace, &mut NoopObserver)
    }
}

/// Rejects a zero-frame pool when there is anything to serve.
pub(crate) const fn check_capacity(capacity: usize, trace: &AccessTrace) -> Result<(), SimError> {
    if capacity == 0 && !trace.is_empty() {
        return Err(SimError::InvalidCapacity { capacity });
    }
    Ok(())
}
