//! Error definitions.
//!
//! This module defines the failures the simulator can report. It provides:
//! 1. **Simulation errors:** Configurations that can never admit a page, rejected before a run
//!    mutates any state.
//! 2. **Load errors:** Unreadable or empty trace files.
//! 3. **Configuration errors:** Malformed memory sizes and configuration files.
//!
//! An empty trace is not an error: every policy reports zero faults for it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::page::Segment;

/// Errors raised at the entry of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The frame pool cannot hold a single page but the trace has accesses to serve.
    #[error("invalid capacity {capacity}: at least one page frame is required")]
    InvalidCapacity {
        /// Requested number of page frames.
        capacity: usize,
    },

    /// A segment of the segmented policy received zero frames but the trace touches it.
    ///
    /// With `capacity / 2` frames reserved for instructions, a total capacity of one leaves
    /// the instruction segment empty.
    #[error("{segment} segment has no frames (total capacity {capacity}) but the trace accesses it")]
    SegmentWithoutFrames {
        /// The starved segment.
        segment: Segment,
        /// Total capacity before the split.
        capacity: usize,
    },
}

/// Errors raised while reading an access trace.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The trace file could not be read.
    #[error("could not read trace file '{}': {source}", path.display())]
    Io {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The trace file contains no page identifiers.
    #[error("trace file '{}' contains no page accesses", path.display())]
    Empty {
        /// Path of the trace file.
        path: PathBuf,
    },
}

/// Errors raised while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A memory size string did not match `<digits><B|KB|MB|GB>`.
    #[error("invalid memory size '{0}' (expected e.g. 8MB, 16KB, 1GB)")]
    InvalidMemorySize(String),

    /// The page size is zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The configuration file could not be read.
    #[error("could not read configuration file '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration document is not valid JSON for [`crate::config::SimConfig`].
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
