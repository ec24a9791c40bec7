//! Step Observation.
//!
//! Simulators report each processed access to a `StepObserver`. Observation is purely
//! passive: an observer cannot change resident state, and a run produces the same fault count
//! whether or not it is observed.
//!
//! Building a resident snapshot costs `O(capacity)` per access, so simulators only build one
//! when [`StepObserver::is_enabled`] returns `true`.

use serde::Serialize;

use crate::common::PageId;

/// Resident pages after an access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidentSnapshot {
    /// One pool of frames.
    ///
    /// Optimal lists pages sorted by identifier; the clock policy lists them in load order.
    Unified(Vec<PageId>),
    /// Separate instruction and data pools, each in load order.
    Segmented {
        /// Resident instruction pages.
        instruction: Vec<PageId>,
        /// Resident data pages.
        data: Vec<PageId>,
    },
}

impl ResidentSnapshot {
    /// Total number of resident pages.
    pub fn len(&self) -> usize {
        match self {
            Self::Unified(pages) => pages.len(),
            Self::Segmented { instruction, data } => instruction.len() + data.len(),
        }
    }

    /// Returns `true` if no page is resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `page` is resident in any pool.
    pub fn contains(&self, page: &PageId) -> bool {
        match self {
            Self::Unified(pages) => pages.contains(page),
            Self::Segmented { instruction, data } => {
                instruction.contains(page) || data.contains(page)
            }
        }
    }
}

/// One processed access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// 1-based position of the access in the trace.
    pub step: usize,
    /// Accessed page.
    pub page: PageId,
    /// Whether the access faulted.
    pub fault: bool,
    /// Fault count after this access.
    pub faults: u64,
    /// Resident pages after the access.
    pub resident: ResidentSnapshot,
}

/// A periodic clearing of all reference bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterruptEvent {
    /// 1-based position of the access that the clear precedes.
    pub step: usize,
    /// Number of reference bits that were set when cleared.
    pub referenced: usize,
}

/// Receives per-access notifications from a simulator.
pub trait StepObserver {
    /// Whether the observer wants notifications. Simulators skip snapshot construction when
    /// this returns `false`.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Called after every access.
    fn on_step(&mut self, record: &TraceRecord);

    /// Called when the reference-bit clearing interrupt fires, before the access it precedes.
    fn on_interrupt(&mut self, _event: &InterruptEvent) {}
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn is_enabled(&self) -> bool {
        false
    }

    fn on_step(&mut self, _record: &TraceRecord) {}
}

/// Observer that keeps every record and interrupt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceRecorder {
    /// Records in trace order.
    pub records: Vec<TraceRecord>,
    /// Interrupts in trace order.
    pub interrupts: Vec<InterruptEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for TraceRecorder {
    fn on_step(&mut self, record: &TraceRecord) {
        self.records.push(record.clone());
    }

    fn on_interrupt(&mut self, event: &InterruptEvent) {
        self.interrupts.push(*event);
    }
}
