//! Common utilities and types shared by every policy.
//!
//! This module provides:
//! 1. **Page identifiers:** The opaque `PageId` and the derived instruction/data `Segment`.
//! 2. **Traces:** The immutable, ordered `AccessTrace` consumed by all simulators.
//! 3. **Error Handling:** Simulation, loading, and configuration error types.

/// Error types for simulation, trace loading, and configuration.
pub mod error;

/// Page identifiers and segment discrimination.
pub mod page;

/// Ordered access traces.
pub mod trace;

pub use error::{ConfigError, LoadError, SimError};
pub use page::{PageId, Segment};
pub use trace::AccessTrace;

/// Number of page faults observed by a policy over a run.
pub type FaultCount = u64;
