//! Access Traces.
//!
//! An `AccessTrace` is the immutable, ordered sequence of page accesses shared by every
//! simulator. Simulators only ever borrow it, so one trace can be replayed under several
//! policies without copying.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::page::{PageId, Segment};

/// Ordered sequence of page accesses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessTrace {
    pages: Vec<PageId>,
}

impl AccessTrace {
    /// Creates a trace from an ordered list of page identifiers.
    pub const fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Number of accesses in the trace.
    #[inline]
    pub const fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the trace has no accesses.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterates the accesses in trace order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Returns the accesses as a slice.
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Returns the distinct pages of the trace in sorted order.
    pub fn distinct_pages(&self) -> BTreeSet<&PageId> {
        self.pages.iter().collect()
    }

    /// Number of distinct pages touched by the trace.
    pub fn distinct_count(&self) -> usize {
        self.distinct_pages().len()
    }

    /// Counts how many times each page is accessed, sorted by page.
    pub fn access_counts(&self) -> BTreeMap<&PageId, u64> {
        let mut counts = BTreeMap::new();
        for page in &self.pages {
            *counts.entry(page).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the subsequence of accesses that fall in `segment`, preserving order.
    pub fn segment(&self, segment: Segment) -> Self {
        self.pages
            .iter()
            .filter(|page| page.segment() == segment)
            .cloned()
            .collect()
    }

    /// Returns `true` if any access falls in `segment`.
    pub fn touches(&self, segment: Segment) -> bool {
        self.pages.iter().any(|page| page.segment() == segment)
    }
}

impl Index<usize> for AccessTrace {
    type Output = PageId;

    fn index(&self, index: usize) -> &PageId {
        &self.pages[index]
    }
}

impl<P: Into<PageId>> FromIterator<P> for AccessTrace {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self {
            pages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AccessTrace {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl From<Vec<PageId>> for AccessTrace {
    fn from(pages: Vec<PageId>) -> Self {
        Self { pages }
    }
}
