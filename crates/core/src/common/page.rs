//! Page identifiers.
//!
//! A page is identified by an opaque string. The segmented policy reads the first character
//! as a discriminator: `'I'` marks an instruction page, anything else (including an empty
//! identifier) a data page. The discriminator is always derived from the identifier and never
//! stored alongside it.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator character for instruction pages.
pub const INSTRUCTION_TAG: char = 'I';

/// Memory segment a page belongs to under segmented replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Instruction (text) pages, tagged with a leading `'I'`.
    Instruction,
    /// Every other page.
    Data,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instruction => write!(f, "instruction"),
            Self::Data => write!(f, "data"),
        }
    }
}

/// Opaque page identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Creates a page identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the segment selected by the first character.
    ///
    /// An empty identifier has no discriminator and falls back to [`Segment::Data`].
    #[inline]
    pub fn segment(&self) -> Segment {
        if self.0.starts_with(INSTRUCTION_TAG) {
            Segment::Instruction
        } else {
            Segment::Data
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward so width/alignment flags apply to the identifier text.
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
