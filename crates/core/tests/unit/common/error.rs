//! # Error Tests
//!
//! Verifies error messages carry the values needed to diagnose a rejected run.

use std::path::PathBuf;

use pagesim_core::common::{ConfigError, LoadError, Segment, SimError};

#[test]
fn invalid_capacity_message() {
    let err = SimError::InvalidCapacity { capacity: 0 };
    assert_eq!(
        err.to_string(),
        "invalid capacity 0: at least one page frame is required"
    );
}

#[test]
fn segment_without_frames_names_segment() {
    let err = SimError::SegmentWithoutFrames {
        segment: Segment::Instruction,
        capacity: 1,
    };
    let message = err.to_string();
    assert!(message.starts_with("instruction segment has no frames"));
    assert!(message.contains("total capacity 1"));
}

#[test]
fn load_error_names_file() {
    let err = LoadError::Empty {
        path: PathBuf::from("trace.csv"),
    };
    assert_eq!(err.to_string(), "trace file 'trace.csv' contains no page accesses");
}

#[test]
fn memory_size_error_echoes_input() {
    let err = ConfigError::InvalidMemorySize("8XB".to_owned());
    assert!(err.to_string().contains("'8XB'"));
}
