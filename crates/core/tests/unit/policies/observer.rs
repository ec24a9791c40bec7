//! # Observer Tests
//!
//! Verifies when simulators notify their observers: once per access, interrupts before the
//! access they precede, nothing when the observer is disabled, and nothing for a rejected run.

use mockall::Sequence;
use pagesim_core::common::PageId;
use pagesim_core::policies::{
    ClockSimulator, InterruptEvent, OptimalSimulator, ReplacementSimulator, ResidentSnapshot,
    SegmentedClockSimulator, StepObserver, TraceRecord, TraceRecorder,
};
use pretty_assertions::assert_eq;

use crate::common::mocks::MockObserver;
use crate::common::{pages, trace};

fn enabled_observer() -> MockObserver {
    let mut observer = MockObserver::new();
    let _ = observer.expect_is_enabled().return_const(true);
    observer
}

#[test]
fn every_policy_reports_each_access_once() {
    let t = trace(&["I1", "D1", "I1", "D2"]);
    let simulators: [Box<dyn ReplacementSimulator>; 3] = [
        Box::new(OptimalSimulator::new(2)),
        Box::new(ClockSimulator::new(2)),
        Box::new(SegmentedClockSimulator::new(2)),
    ];

    for sim in simulators {
        let mut observer = enabled_observer();
        let _ = observer.expect_on_step().times(4).return_const(());
        let _ = observer.expect_on_interrupt().never();
        let _ = sim.run_observed(&t, &mut observer).unwrap();
    }
}

#[test]
fn interrupt_is_reported_between_steps() {
    let t = trace(&["A", "B", "C"]);
    let mut seq = Sequence::new();
    let mut observer = enabled_observer();

    let _ = observer
        .expect_on_step()
        .withf(|record: &TraceRecord| record.step == 1)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = observer
        .expect_on_interrupt()
        .withf(|event: &InterruptEvent| event.step == 2 && event.referenced == 1)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = observer
        .expect_on_step()
        .withf(|record: &TraceRecord| record.step == 2)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = observer
        .expect_on_step()
        .withf(|record: &TraceRecord| record.step == 3)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let sim = ClockSimulator::new(2).with_interrupt_period(2);
    assert_eq!(sim.run_observed(&t, &mut observer).unwrap(), 3);
}

#[test]
fn disabled_observer_is_never_notified() {
    let t = trace(&["A", "B", "C", "A", "B"]);
    let mut observer = MockObserver::new();
    let _ = observer.expect_is_enabled().return_const(false);
    let _ = observer.expect_on_step().never();
    let _ = observer.expect_on_interrupt().never();

    let sim = ClockSimulator::new(2).with_interrupt_period(1);
    let observed = sim.run_observed(&t, &mut observer).unwrap();
    assert_eq!(observed, sim.run(&t).unwrap());
}

#[test]
fn rejected_run_notifies_nothing() {
    let mut observer = enabled_observer();
    let _ = observer.expect_on_step().never();
    let _ = observer.expect_on_interrupt().never();

    let result = SegmentedClockSimulator::new(1).run_observed(&trace(&["D1", "I1"]), &mut observer);
    assert!(result.is_err());
}

#[test]
fn observation_does_not_change_fault_counts() {
    let t = trace(&["A", "B", "C", "A", "B", "D", "A", "B", "C"]);
    let sim = ClockSimulator::new(3).with_interrupt_period(4);
    let mut recorder = TraceRecorder::new();
    assert_eq!(sim.run_observed(&t, &mut recorder).unwrap(), sim.run(&t).unwrap());
    assert_eq!(recorder.records.last().map(|r| r.faults), Some(sim.run(&t).unwrap()));
}

#[test]
fn snapshot_helpers() {
    let unified = ResidentSnapshot::Unified(pages(&["A", "B"]));
    assert_eq!(unified.len(), 2);
    assert!(!unified.is_empty());
    assert!(unified.contains(&PageId::from("B")));
    assert!(!unified.contains(&PageId::from("C")));

    let segmented = ResidentSnapshot::Segmented {
        instruction: pages(&["I1"]),
        data: pages(&["D1", "D2"]),
    };
    assert_eq!(segmented.len(), 3);
    assert!(segmented.contains(&PageId::from("I1")));
    assert!(segmented.contains(&PageId::from("D2")));

    let empty = ResidentSnapshot::Segmented {
        instruction: Vec::new(),
        data: Vec::new(),
    };
    assert!(empty.is_empty());
}

#[test]
fn records_serialize_for_machine_output() {
    let record = TraceRecord {
        step: 3,
        page: PageId::from("I1"),
        fault: true,
        faults: 2,
        resident: ResidentSnapshot::Segmented {
            instruction: pages(&["I1"]),
            data: pages(&["D1"]),
        },
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "step": 3,
            "page": "I1",
            "fault": true,
            "faults": 2,
            "resident": { "segmented": { "instruction": ["I1"], "data": ["D1"] } }
        })
    );
}

/// A hand-written observer relying on the trait's default methods.
#[test]
fn default_methods_accept_interrupts() {
    struct Counter(usize);

    impl StepObserver for Counter {
        fn on_step(&mut self, _record: &TraceRecord) {
            self.0 += 1;
        }
    }

    let mut counter = Counter(0);
    assert!(counter.is_enabled());
    let _ = ClockSimulator::new(1)
        .with_interrupt_period(1)
        .run_observed(&trace(&["A", "B"]), &mut counter)
        .unwrap();
    assert_eq!(counter.0, 2);
}
