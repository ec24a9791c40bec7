//! Segmented (Local) Second-Chance Replacement Policy.
//!
//! The frame budget is split between an instruction pool (`capacity / 2`) and a data pool
//! (the remainder). Each access is routed by its page's segment to one pool, and each pool
//! runs second chance over its own pages only. A full instruction pool never evicts a data
//! page and vice versa. The reference-bit clearing interrupt is not modelled here.

use serde::Serialize;
use tracing::{info, trace};

use super::clock::ClockPool;
use super::observer::{ResidentSnapshot, StepObserver, TraceRecord};
use super::{ReplacementSimulator, check_capacity};
use crate::common::{AccessTrace, FaultCount, Segment, SimError};
use crate::config::PolicyKind;

/// Fault counts of each pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SegmentedFaults {
    /// Faults in the instruction pool.
    pub instruction: FaultCount,
    /// Faults in the data pool.
    pub data: FaultCount,
}

impl SegmentedFaults {
    /// Sum of both pools.
    pub const fn total(&self) -> FaultCount {
        self.instruction + self.data
    }
}

/// Segmented second-chance simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentedClockSimulator {
    capacity: usize,
}

impl SegmentedClockSimulator {
    /// Creates a segmented simulator with `capacity` page frames in total.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Total number of page frames.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frames reserved for instruction pages.
    pub const fn instruction_capacity(&self) -> usize {
        self.capacity / 2
    }

    /// Frames reserved for data pages.
    pub const fn data_capacity(&self) -> usize {
        self.capacity - self.instruction_capacity()
    }

    /// Frames reserved for `segment`.
    pub const fn segment_capacity(&self, segment: Segment) -> usize {
        match segment {
            Segment::Instruction => self.instruction_capacity(),
            Segment::Data => self.data_capacity(),
        }
    }

    /// Replays `trace` and returns the fault count of each pool.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCapacity`] for a zero budget, or
    /// [`SimError::SegmentWithoutFrames`] if a segment the trace touches got no frames.
    pub fn run_segments(
        &self,
        trace: &AccessTrace,
        observer: &mut dyn StepObserver,
    ) -> Result<SegmentedFaults, SimError> {
        self.check_segments(trace)?;

        let mut instruction = ClockPool::new(self.instruction_capacity());
        let mut data = ClockPool::new(self.data_capacity());

        for (index, page) in trace.iter().enumerate() {
            let segment = page.segment();
            let fault = match segment {
                Segment::Instruction => instruction.access(page),
                Segment::Data => data.access(page),
            };
            trace!(step = index + 1, page = %page, %segment, fault, "segmented access");

            if observer.is_enabled() {
                observer.on_step(&TraceRecord {
                    step: index + 1,
                    page: page.clone(),
                    fault,
                    faults: instruction.faults() + data.faults(),
                    resident: ResidentSnapshot::Segmented {
                        instruction: instruction.snapshot(),
                        data: data.snapshot(),
                    },
                });
            }
        }

        let faults = SegmentedFaults {
            instruction: instruction.faults(),
            data: data.faults(),
        };
        info!(
            capacity = self.capacity,
            instruction_capacity = self.instruction_capacity(),
            data_capacity = self.data_capacity(),
            instruction_faults = faults.instruction,
            data_faults = faults.data,
            "segmented second chance run complete"
        );
        Ok(faults)
    }

    fn check_segments(&self, trace: &AccessTrace) -> Result<(), SimError> {
        check_capacity(self.capacity, trace)?;
        for segment in [Segment::Instruction, Segment::Data] {
            if self.segment_capacity(segment) == 0 && trace.touches(segment) {
                return Err(SimError::SegmentWithoutFrames {
                    segment,
                    capacity: self.capacity,
                });
            }
        }
        Ok(())
    }
}

impl ReplacementSimulator for SegmentedClockSimulator {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SegmentedClock
    }

    fn validate(&self, trace: &AccessTrace) -> Result<(), SimError> {
        self.check_segments(trace)
    }

    fn run_observed(
        &self,
        trace: &AccessTrace,
        observer: &mut dyn StepObserver,
    ) -> Result<FaultCount, SimError> {
        self.run_segments(trace, observer).map(|faults| faults.total())
    }
}
