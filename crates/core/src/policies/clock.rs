//! Second-Chance (Clock) Replacement Policy.
//!
//! Resident pages sit in a FIFO scan order, each with a reference bit that is set whenever the
//! page is touched. To find a victim the scan pops the front page: a clear bit means it is
//! evicted; a set bit is cleared and the page is re-queued at the back, giving it a second
//! chance. The scan always terminates because every page it passes loses its bit.
//!
//! An optional interrupt clears every reference bit before each access whose 1-based position
//! is a multiple of the interrupt period, modelling a periodic OS aging pass.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - hit: O(1)
//!   - fault with a full pool: O(C) worst case where C is the capacity
//!   - interrupt: O(C)
//! - **Space Complexity:** O(C)

use std::collections::{HashMap, VecDeque};

use tracing::{debug, info, trace};

use super::observer::{InterruptEvent, ResidentSnapshot, StepObserver, TraceRecord};
use super::{ReplacementSimulator, check_capacity};
use crate::common::{AccessTrace, FaultCount, PageId, SimError};
use crate::config::PolicyKind;

/// Per-page state of a resident page.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Set on every touch, cleared by the scan and by interrupts.
    referenced: bool,
    /// Load sequence number, used to list pages in load order.
    loaded: u64,
}

/// One pool of frames managed by second chance.
///
/// The resident map and the scan order always hold the same set of pages. A pool lives for a
/// single run and borrows page identifiers from the trace it replays.
#[derive(Debug)]
pub(crate) struct ClockPool<'t> {
    capacity: usize,
    resident: HashMap<&'t PageId, Frame>,
    scan: VecDeque<&'t PageId>,
    loads: u64,
    faults: FaultCount,
}

impl<'t> ClockPool<'t> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            resident: HashMap::with_capacity(capacity),
            scan: VecDeque::with_capacity(capacity),
            loads: 0,
            faults: 0,
        }
    }

    pub(crate) const fn faults(&self) -> FaultCount {
        self.faults
    }

    /// Touches `page`, loading it on a miss. Returns `true` if the access faulted.
    pub(crate) fn access(&mut self, page: &'t PageId) -> bool {
        if let Some(frame) = self.resident.get_mut(page) {
            frame.referenced = true;
            return false;
        }

        self.faults += 1;
        while self.resident.len() >= self.capacity {
            let Some(candidate) = self.scan.pop_front() else {
                break;
            };
            match self.resident.get_mut(candidate) {
                Some(frame) if frame.referenced => {
                    frame.referenced = false;
                    self.scan.push_back(candidate);
                }
                _ => {
                    let _ = self.resident.remove(candidate);
                    debug!(victim = %candidate, incoming = %page, "second chance eviction");
                }
            }
        }

        let _ = self.resident.insert(
            page,
            Frame {
                referenced: true,
                loaded: self.loads,
            },
        );
        self.loads += 1;
        self.scan.push_back(page);
        true
    }

    /// Clears every reference bit, returning how many were set.
    pub(crate) fn clear_reference_bits(&mut self) -> usize {
        let mut referenced = 0;
        for frame in self.resident.values_mut() {
            if frame.referenced {
                referenced += 1;
                frame.referenced = false;
            }
        }
        referenced
    }

    /// Resident pages in load order.
    pub(crate) fn snapshot(&self) -> Vec<PageId> {
        let mut frames: Vec<(&PageId, u64)> = self
            .resident
            .iter()
            .map(|(&page, frame)| (page, frame.loaded))
            .collect();
        frames.sort_unstable_by_key(|&(_, loaded)| loaded);
        frames.into_iter().map(|(page, _)| page.clone()).collect()
    }
}

/// Global second-chance simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSimulator {
    capacity: usize,
    interrupt_period: usize,
}

impl ClockSimulator {
    /// Creates a clock simulator with `capacity` page frames and no interrupt.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            interrupt_period: 0,
        }
    }

    /// Enables the reference-bit clearing interrupt every `period` accesses (0 disables it).
    #[must_use]
    pub const fn with_interrupt_period(mut self, period: usize) -> Self {
        self.interrupt_period = period;
        self
    }

    /// Number of page frames.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Interrupt period in accesses (0 when disabled).
    pub const fn interrupt_period(&self) -> usize {
        self.interrupt_period
    }

    /// Whether the interrupt fires before the access at 0-based `index`.
    const fn interrupt_due(&self, index: usize) -> bool {
        self.interrupt_period > 0 && (index + 1) % self.interrupt_period == 0
    }
}

impl ReplacementSimulator for ClockSimulator {
    fn kind(&self) -> PolicyKind {
        PolicyKind::GlobalClock
    }

    fn validate(&self, trace: &AccessTrace) -> Result<(), SimError> {
        check_capacity(self.capacity, trace)
    }

    fn run_observed(
        &self,
        trace: &AccessTrace,
        observer: &mut dyn StepObserver,
    ) -> Result<FaultCount, SimError> {
        self.validate(trace)?;

        let mut pool = ClockPool::new(self.capacity);
        for (index, page) in trace.iter().enumerate() {
            if self.interrupt_due(index) {
                let referenced = pool.clear_reference_bits();
                debug!(step = index + 1, referenced, "interrupt cleared reference bits");
                if observer.is_enabled() {
                    observer.on_interrupt(&InterruptEvent {
                        step: index + 1,
                        referenced,
                    });
                }
            }

            let fault = pool.access(page);
            trace!(step = index + 1, page = %page, fault, "clock access");

            if observer.is_enabled() {
                observer.on_step(&TraceRecord {
                    step: index + 1,
                    page: page.clone(),
                    fault,
                    faults: pool.faults(),
                    resident: ResidentSnapshot::Unified(pool.snapshot()),
                });
            }
        }

        info!(
            capacity = self.capacity,
            interrupt_period = self.interrupt_period,
            accesses = trace.len(),
            faults = pool.faults(),
            "global second chance run complete"
        );
        Ok(pool.faults())
    }
}
