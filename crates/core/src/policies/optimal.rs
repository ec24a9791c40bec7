//! Optimal (Belady) Replacement Policy.
//!
//! This policy evicts the resident page whose next use lies farthest in the future. It needs
//! the complete trace up front and serves as the lower bound every practical policy is
//! compared against.
//!
//! A lookahead index maps each page to the queue of trace positions where it occurs. The
//! queue is consumed as the trace is walked, so its front is always the page's next use.
//! Pages with an empty queue are never used again and are the preferred victims.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - index construction: O(N) where N is the trace length
//!   - per fault with a full pool: O(C) where C is the capacity
//! - **Space Complexity:** O(N + C)

use std::cmp::Reverse;
use std::collections::{HashMap, VecDeque};

use tracing::{debug, info, trace};

use super::observer::{ResidentSnapshot, StepObserver, TraceRecord};
use super::{ReplacementSimulator, check_capacity};
use crate::common::{AccessTrace, FaultCount, PageId, SimError};
use crate::config::PolicyKind;

/// Position of a page's next use.
///
/// `Never` orders after every `At`, so the farthest use is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NextUse {
    At(usize),
    Never,
}

type Lookahead<'t> = HashMap<&'t PageId, VecDeque<usize>>;

/// Optimal replacement simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalSimulator {
    capacity: usize,
}

impl OptimalSimulator {
    /// Creates an Optimal simulator with `capacity` page frames.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Number of page frames.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Records every position at which each page occurs, in trace order.
fn build_lookahead(trace: &AccessTrace) -> Lookahead<'_> {
    let mut lookahead: Lookahead<'_> = HashMap::new();
    for (index, page) in trace.iter().enumerate() {
        lookahead.entry(page).or_default().push_back(index);
    }
    lookahead
}

fn next_use(lookahead: &Lookahead<'_>, page: &PageId) -> NextUse {
    lookahead
        .get(page)
        .and_then(VecDeque::front)
        .map_or(NextUse::Never, |&index| NextUse::At(index))
}

/// Picks the resident page used farthest in the future.
///
/// Pages never used again tie on `NextUse::Never`; the one loaded earliest wins the tie.
fn choose_victim<'t>(
    resident: &HashMap<&'t PageId, u64>,
    lookahead: &Lookahead<'t>,
) -> Option<&'t PageId> {
    resident
        .iter()
        .max_by_key(|&(page, &loaded)| (next_use(lookahead, page), Reverse(loaded)))
        .map(|(page, _)| *page)
}

impl ReplacementSimulator for OptimalSimulator {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
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

        let mut lookahead = build_lookahead(trace);
        // Resident page -> load sequence number.
        let mut resident: HashMap<&PageId, u64> = HashMap::with_capacity(self.capacity);
        let mut loads: u64 = 0;
        let mut faults: FaultCount = 0;

        for (index, page) in trace.iter().enumerate() {
            // The current occurrence is a use now, not a future one.
            if let Some(queue) = lookahead.get_mut(page) {
                let _ = queue.pop_front();
            }

            let fault = !resident.contains_key(page);
            if fault {
                faults += 1;
                if resident.len() >= self.capacity
                    && let Some(victim) = choose_victim(&resident, &lookahead)
                {
                    debug!(
                        step = index + 1,
                        victim = %victim,
                        next_use = ?next_use(&lookahead, victim),
                        "optimal eviction"
                    );
                    let _ = resident.remove(victim);
                }
                let _ = resident.insert(page, loads);
                loads += 1;
            }
            trace!(step = index + 1, page = %page, fault, "optimal access");

            if observer.is_enabled() {
                let mut frames: Vec<PageId> = resident.keys().map(|&p| p.clone()).collect();
                frames.sort_unstable();
                observer.on_step(&TraceRecord {
                    step: index + 1,
                    page: page.clone(),
                    fault,
                    faults,
                    resident: ResidentSnapshot::Unified(frames),
                });
            }
        }

        info!(
            capacity = self.capacity,
            accesses = trace.len(),
            faults,
            "optimal run complete"
        );
        Ok(faults)
    }
}
