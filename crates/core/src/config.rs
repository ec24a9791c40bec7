//! Configuration system for the page replacement simulator.
//!
//! This module defines the configuration structures and enums used to parameterize a run. It
//! provides:
//! 1. **Defaults:** Baseline constants (page size, memory size, policy).
//! 2. **Memory sizes:** Parsing of strings such as `"8MB"` and conversion to page frames.
//! 3. **Structures:** `SimConfig`, deserializable from JSON, with defaults for every field.
//!
//! Configuration is supplied by the CLI flags, a JSON file, or `SimConfig::default()`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use super::MemorySize;

    /// Size of a page frame in bytes (4 KiB).
    pub const PAGE_SIZE: u64 = 4096;

    /// Physical memory available to the simulated process (8 MiB, 2048 frames).
    pub const MEMORY: MemorySize = MemorySize::from_bytes(8 * 1024 * 1024);

    /// Interrupt period in accesses; 0 disables the reference-bit clearing interrupt.
    pub const INTERRUPT_PERIOD: usize = 0;
}

pub use defaults::PAGE_SIZE;

/// Bytes per page-table entry used for the single-level page-table estimate.
pub const PAGE_TABLE_ENTRY_BYTES: u64 = 8;

/// Replacement policy selection.
///
/// Optimal always runs for comparison; this selects the practical policy it is compared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PolicyKind {
    /// Optimal replacement with full lookahead.
    Optimal,
    /// Global second chance over all frames.
    #[default]
    #[serde(alias = "Global", alias = "Clock")]
    GlobalClock,
    /// Second chance with separate instruction and data pools.
    #[serde(alias = "Local", alias = "Segmented")]
    SegmentedClock,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimal => write!(f, "Optimal"),
            Self::GlobalClock => write!(f, "Second Chance (global)"),
            Self::SegmentedClock => write!(f, "Second Chance (local)"),
        }
    }
}

/// Amount of physical memory, in bytes.
///
/// Parsed from a decimal count followed by a case-insensitive `KB`, `MB` or `GB` unit, or `B`
/// for a raw byte count.
///
/// ```
/// use pagesim_core::config::MemorySize;
///
/// let size: MemorySize = "8MB".parse().unwrap();
/// assert_eq!(size.bytes(), 8 * 1024 * 1024);
/// assert_eq!(size.frames(4096), 2048);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemorySize(u64);

impl MemorySize {
    // `B` comes last so the longer suffixes match first.
    const UNITS: [(&'static str, u64); 4] = [
        ("KB", 1 << 10),
        ("MB", 1 << 20),
        ("GB", 1 << 30),
        ("B", 1),
    ];

    /// Wraps a raw byte count.
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Size in bytes.
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Number of whole page frames of `page_size` bytes that fit.
    ///
    /// Returns 0 for a zero page size.
    pub fn frames(self, page_size: u64) -> usize {
        self.0
            .checked_div(page_size)
            .map_or(0, |frames| usize::try_from(frames).unwrap_or(usize::MAX))
    }
}

impl FromStr for MemorySize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let invalid = || ConfigError::InvalidMemorySize(s.to_owned());

        let (count, multiplier) = Self::UNITS
            .iter()
            .find_map(|&(unit, multiplier)| {
                upper.strip_suffix(unit).map(|count| (count, multiplier))
            })
            .ok_or_else(invalid)?;

        let count = count.trim();
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let count: u64 = count.parse().map_err(|_| invalid())?;
        count
            .checked_mul(multiplier)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for MemorySize {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MemorySize> for String {
    fn from(size: MemorySize) -> Self {
        size.to_string()
    }
}

impl fmt::Display for MemorySize {
    /// Formats with the largest unit that divides the size exactly, falling back to bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (unit, multiplier) = Self::UNITS
            .iter()
            .filter(|&&(_, multiplier)| self.0 >= multiplier && self.0 % multiplier == 0)
            .max_by_key(|&&(_, multiplier)| multiplier)
            .copied()
            .unwrap_or(("B", 1));
        write!(f, "{}{unit}", self.0 / multiplier)
    }
}

/// Root configuration structure for a comparison run.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{PolicyKind, SimConfig};
///
/// let config = SimConfig::default();
/// assert_eq!(config.policy, PolicyKind::GlobalClock);
/// assert_eq!(config.capacity(), 2048);
///
/// let config = SimConfig::from_json_str(
///     r#"{ "policy": "SegmentedClock", "memory": "16KB", "interrupt_period": 0 }"#,
/// )
/// .unwrap();
/// assert_eq!(config.policy, PolicyKind::SegmentedClock);
/// assert_eq!(config.capacity(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Practical policy compared against Optimal.
    #[serde(default)]
    pub policy: PolicyKind,

    /// Physical memory available for resident pages.
    #[serde(default = "SimConfig::default_memory")]
    pub memory: MemorySize,

    /// Page frame size in bytes.
    #[serde(default = "SimConfig::default_page_size")]
    pub page_size: u64,

    /// Accesses between reference-bit clearing interrupts (global clock only; 0 disables).
    #[serde(default = "SimConfig::default_interrupt_period")]
    pub interrupt_period: usize,

    /// Emit a step-by-step trace of memory contents.
    #[serde(default)]
    pub didactic: bool,
}

impl SimConfig {
    const fn default_memory() -> MemorySize {
        defaults::MEMORY
    }

    const fn default_page_size() -> u64 {
        defaults::PAGE_SIZE
    }

    const fn default_interrupt_period() -> usize {
        defaults::INTERRUPT_PERIOD
    }

    /// Number of page frames available to the simulators.
    pub fn capacity(&self) -> usize {
        self.memory.frames(self.page_size)
    }

    /// Checks values that deserialization alone cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] if the page size is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and any [`SimConfig::validate`]
    /// error.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`SimConfig::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            memory: defaults::MEMORY,
            page_size: defaults::PAGE_SIZE,
            interrupt_period: defaults::INTERRUPT_PERIOD,
            didactic: false,
        }
    }
}
