//! Page replacement simulator library.
//!
//! This crate replays a trace of page accesses against a fixed number of page frames and
//! counts page faults. It provides:
//! 1. **Common:** Page identifiers, segment discrimination, access traces, and error types.
//! 2. **Policies:** Optimal (full lookahead), global second chance (clock) with an optional
//!    reference-bit clearing interrupt, and segmented second chance.
//! 3. **Simulation:** Trace loading, the driver that pairs Optimal with a practical policy,
//!    and step-by-step observation for didactic output.
//! 4. **Configuration and statistics:** Memory-size parsing, JSON configuration, and the
//!    comparison report.
//!
//! The simulation engine performs no I/O; only [`sim::loader`] and [`config::SimConfig::from_file`]
//! touch the filesystem.

/// Common types (page identifiers, traces, errors).
pub mod common;
/// Simulator configuration (defaults, memory sizes, policy selection).
pub mod config;
/// Replacement policies (Optimal, clock, segmented clock) and the observer contract.
pub mod policies;
/// Trace loading and the simulation driver.
pub mod sim;
/// Comparison report between Optimal and the practical policy.
pub mod stats;

/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Simulation driver; runs Optimal alongside the selected practical policy.
pub use crate::sim::Simulation;
/// Result of a comparison run.
pub use crate::stats::SimulationReport;
