//! # Configuration Tests
//!
//! Verifies memory-size parsing, frame conversion, JSON configuration loading, and defaults.

use std::io::Write;

use pagesim_core::common::ConfigError;
use pagesim_core::config::{MemorySize, PAGE_SIZE, PolicyKind, SimConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

#[rstest]
#[case("8MB", 8 << 20)]
#[case("16KB", 16 << 10)]
#[case("1GB", 1 << 30)]
#[case("4kb", 4 << 10)]
#[case("2Mb", 2 << 20)]
#[case(" 64KB ", 64 << 10)]
#[case("0KB", 0)]
#[case("1536B", 1536)]
#[case("512b", 512)]
fn memory_size_parses(#[case] input: &str, #[case] bytes: u64) {
    let size: MemorySize = input.parse().unwrap();
    assert_eq!(size.bytes(), bytes);
}

#[rstest]
#[case("")]
#[case("8")]
#[case("MB")]
#[case("8TB")]
#[case("-8MB")]
#[case("8.5MB")]
#[case("eightMB")]
#[case("99999999999999999999GB")]
fn memory_size_rejects(#[case] input: &str) {
    let err = input.parse::<MemorySize>().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMemorySize(ref s) if s == input));
}

#[rstest]
#[case("8MB", 4096, 2048)]
#[case("16KB", 4096, 4)]
#[case("10KB", 4096, 2)]
#[case("1MB", 1024, 1024)]
#[case("1KB", 4096, 0)]
fn frames_round_down(#[case] memory: &str, #[case] page_size: u64, #[case] frames: usize) {
    let size: MemorySize = memory.parse().unwrap();
    assert_eq!(size.frames(page_size), frames);
}

#[test]
fn frames_with_zero_page_size() {
    assert_eq!(MemorySize::from_bytes(4096).frames(0), 0);
}

#[rstest]
#[case(8 << 20, "8MB")]
#[case(1 << 30, "1GB")]
#[case(1536 << 10, "1536KB")]
#[case(2048 << 20, "2GB")]
#[case(1536, "1536B")]
#[case(0, "0B")]
fn memory_size_display(#[case] bytes: u64, #[case] expected: &str) {
    assert_eq!(MemorySize::from_bytes(bytes).to_string(), expected);
}

#[test]
fn defaults() {
    let config = SimConfig::default();
    assert_eq!(config.policy, PolicyKind::GlobalClock);
    assert_eq!(config.memory, MemorySize::from_bytes(8 << 20));
    assert_eq!(config.page_size, PAGE_SIZE);
    assert_eq!(config.interrupt_period, 0);
    assert!(!config.didactic);
    assert_eq!(config.capacity(), 2048);
}

#[test]
fn empty_json_uses_defaults() {
    assert_eq!(SimConfig::from_json_str("{}").unwrap(), SimConfig::default());
}

#[rstest]
#[case("Optimal", PolicyKind::Optimal)]
#[case("GlobalClock", PolicyKind::GlobalClock)]
#[case("Global", PolicyKind::GlobalClock)]
#[case("Clock", PolicyKind::GlobalClock)]
#[case("SegmentedClock", PolicyKind::SegmentedClock)]
#[case("Local", PolicyKind::SegmentedClock)]
#[case("Segmented", PolicyKind::SegmentedClock)]
fn policy_names_and_aliases(#[case] name: &str, #[case] expected: PolicyKind) {
    let json = format!(r#"{{ "policy": "{name}" }}"#);
    assert_eq!(SimConfig::from_json_str(&json).unwrap().policy, expected);
}

#[test]
fn full_json_document() {
    let config = SimConfig::from_json_str(
        r#"{
            "policy": "Local",
            "memory": "64kb",
            "page_size": 1024,
            "interrupt_period": 50,
            "didactic": true
        }"#,
    )
    .unwrap();

    assert_eq!(config.policy, PolicyKind::SegmentedClock);
    assert_eq!(config.memory.bytes(), 64 << 10);
    assert_eq!(config.capacity(), 64);
    assert_eq!(config.interrupt_period, 50);
    assert!(config.didactic);
}

#[test]
fn serialized_config_reads_back() {
    let config = SimConfig {
        policy: PolicyKind::SegmentedClock,
        memory: MemorySize::from_bytes(1 << 20),
        page_size: 2048,
        interrupt_period: 10,
        didactic: true,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""memory":"1MB""#));
    assert_eq!(SimConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn byte_sizes_survive_serialization() {
    let config = SimConfig {
        memory: MemorySize::from_bytes(1536),
        page_size: 512,
        ..SimConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let restored = SimConfig::from_json_str(&json).unwrap();

    assert_eq!(restored.memory.bytes(), 1536);
    assert_eq!(restored.capacity(), 3);
}

#[test]
fn zero_page_size_is_rejected() {
    let err = SimConfig::from_json_str(r#"{ "page_size": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroPageSize));
}

#[test]
fn bad_memory_size_in_json() {
    let err = SimConfig::from_json_str(r#"{ "memory": "lots" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().contains("invalid memory size"));
}

#[test]
fn unknown_policy_in_json() {
    let err = SimConfig::from_json_str(r#"{ "policy": "Lru" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_file_reads_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "memory": "16KB", "policy": "Segmented" }"#)
        .unwrap();
    file.flush().unwrap();

    let config = SimConfig::from_file(file.path()).unwrap();
    assert_eq!(config.capacity(), 4);
    assert_eq!(config.policy, PolicyKind::SegmentedClock);
}

#[test]
fn from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn policy_display_names() {
    assert_eq!(PolicyKind::Optimal.to_string(), "Optimal");
    assert_eq!(PolicyKind::GlobalClock.to_string(), "Second Chance (global)");
    assert_eq!(PolicyKind::SegmentedClock.to_string(), "Second Chance (local)");
}
