//! Simulator: pairs Optimal with one practical policy over the same trace.
//!
//! Both policies get a fresh, exclusive state for every run. Both are validated before either
//! one processes an access, so a rejected configuration never produces a partial trace.

use std::fmt;

use tracing::{info, warn};

use crate::common::{AccessTrace, SimError};
use crate::config::{PolicyKind, SimConfig};
use crate::policies::{
    ClockSimulator, NoopObserver, OptimalSimulator, ReplacementSimulator,
    SegmentedClockSimulator, StepObserver,
};
use crate::stats::SimulationReport;

/// Top-level simulator: Optimal plus the selected practical policy.
pub struct Simulation {
    capacity: usize,
    optimal: OptimalSimulator,
    practical: Box<dyn ReplacementSimulator>,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("capacity", &self.capacity)
            .field("policy", &self.practical.kind())
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Creates a simulation for `policy` with `capacity` page frames.
    ///
    /// `interrupt_period` applies to the global clock policy only; it is ignored (with a
    /// warning) for the others.
    pub fn new(policy: PolicyKind, capacity: usize, interrupt_period: usize) -> Self {
        if interrupt_period > 0 && policy != PolicyKind::GlobalClock {
            warn!(
                %policy,
                interrupt_period, "reference-bit interrupt is only modelled by the global clock"
            );
        }

        let practical: Box<dyn ReplacementSimulator> = match policy {
            PolicyKind::Optimal => Box::new(OptimalSimulator::new(capacity)),
            PolicyKind::GlobalClock => {
                Box::new(ClockSimulator::new(capacity).with_interrupt_period(interrupt_period))
            }
            PolicyKind::SegmentedClock => Box::new(SegmentedClockSimulator::new(capacity)),
        };

        Self {
            capacity,
            optimal: OptimalSimulator::new(capacity),
            practical,
        }
    }

    /// Creates a simulation from a configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.policy, config.capacity(), config.interrupt_period)
    }

    /// Practical policy compared against Optimal.
    pub fn policy(&self) -> PolicyKind {
        self.practical.kind()
    }

    /// Number of page frames.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Runs both policies over `trace`.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] if either policy rejects the capacity for this trace.
    pub fn run(&self, trace: &AccessTrace) -> Result<SimulationReport, SimError> {
        self.run_observed(trace, &mut NoopObserver, &mut NoopObserver)
    }

    /// Runs both policies over `trace`, Optimal first, reporting each to its own observer.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] if either policy rejects the capacity for this trace. Neither
    /// observer is notified in that case.
    pub fn run_observed(
        &self,
        trace: &AccessTrace,
        optimal_observer: &mut dyn StepObserver,
        practical_observer: &mut dyn StepObserver,
    ) -> Result<SimulationReport, SimError> {
        self.optimal.validate(trace)?;
        self.practical.validate(trace)?;

        let optimal_faults = self.optimal.run_observed(trace, optimal_observer)?;
        let practical_faults = self.practical.run_observed(trace, practical_observer)?;

        let report = SimulationReport::new(
            self.policy(),
            self.capacity,
            trace,
            optimal_faults,
            practical_faults,
        );
        info!(
            policy = %report.policy,
            optimal = report.optimal_faults,
            practical = report.practical_faults,
            efficiency = report.efficiency_percent(),
            "comparison complete"
        );
        Ok(report)
    }
}
