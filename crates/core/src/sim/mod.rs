//! Simulation driver and trace loading.
//!
//! Provides the loader that turns trace files into an [`AccessTrace`](crate::common::AccessTrace)
//! and the driver that replays a trace under Optimal and the selected practical policy.

/// Trace file parsing and loading.
pub mod loader;
/// Optimal versus practical comparison driver.
pub mod simulator;

pub use loader::{load_trace, parse_trace};
pub use simulator::Simulation;
