//! Simulation statistics and reporting.
//!
//! This module summarizes a comparison run. It provides:
//! 1. **Fault counts:** Optimal versus the selected practical policy.
//! 2. **Efficiency:** How close the practical policy gets to Optimal, as a percentage.
//! 3. **Trace metrics:** Trace length, distinct pages, and a single-level page-table estimate.
//!
//! The report is plain data: `Display` renders the summary text and `Serialize` supports
//! machine-readable output, but nothing here writes anywhere.

use std::fmt;

use serde::Serialize;

use crate::common::{AccessTrace, FaultCount};
use crate::config::{PAGE_TABLE_ENTRY_BYTES, PolicyKind};

/// Computes `100 * optimal / practical`, defined as 100 when `practical` is zero.
///
/// ```
/// use pagesim_core::stats::efficiency_percent;
///
/// assert_eq!(efficiency_percent(5, 10), 50.0);
/// assert_eq!(efficiency_percent(0, 0), 100.0);
/// ```
pub fn efficiency_percent(optimal: FaultCount, practical: FaultCount) -> f64 {
    if practical == 0 {
        100.0
    } else {
        100.0 * optimal as f64 / practical as f64
    }
}

/// Result of running Optimal and a practical policy over the same trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Practical policy compared against Optimal.
    pub policy: PolicyKind,
    /// Number of page frames.
    pub capacity: usize,
    /// Number of accesses in the trace.
    pub accesses: usize,
    /// Number of distinct pages in the trace.
    pub distinct_pages: usize,
    /// Faults under Optimal.
    pub optimal_faults: FaultCount,
    /// Faults under the practical policy.
    pub practical_faults: FaultCount,
}

impl SimulationReport {
    /// Builds a report for `trace` from both fault counts.
    pub fn new(
        policy: PolicyKind,
        capacity: usize,
        trace: &AccessTrace,
        optimal_faults: FaultCount,
        practical_faults: FaultCount,
    ) -> Self {
        Self {
            policy,
            capacity,
            accesses: trace.len(),
            distinct_pages: trace.distinct_count(),
            optimal_faults,
            practical_faults,
        }
    }

    /// Practical performance relative to Optimal, in percent.
    pub fn efficiency_percent(&self) -> f64 {
        efficiency_percent(self.optimal_faults, self.practical_faults)
    }

    /// Size in bytes of a single-level page table with one entry per distinct page.
    pub const fn page_table_estimate_bytes(&self) -> u64 {
        self.distinct_pages as u64 * PAGE_TABLE_ENTRY_BYTES
    }
}

/// Machine-readable form of a report, including derived values.
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    #[serde(flatten)]
    report: &'a SimulationReport,
    efficiency_percent: f64,
    page_table_estimate_bytes: u64,
}

impl SimulationReport {
    /// Returns a serializable view that also carries the derived metrics.
    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            report: self,
            efficiency_percent: self.efficiency_percent(),
            page_table_estimate_bytes: self.page_table_estimate_bytes(),
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "With the Optimal algorithm {} page faults occur.",
            self.optimal_faults
        )?;
        write!(
            f,
            "With the {} algorithm {} page faults occur, reaching {:.2}% of Optimal's performance.",
            self.policy,
            self.practical_faults,
            self.efficiency_percent()
        )
    }
}
