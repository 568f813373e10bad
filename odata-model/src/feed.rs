//! Collection resource.

use serde::Serialize;
use url::Url;

use crate::{Entry, Link};

/// A collection of entries, possibly one page of a larger result.
///
/// Entries are kept in document order. The continuation link can be set
/// once; a feed without one is the final page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feed {
    base: Option<Url>,
    count: Option<u64>,
    entries: Vec<Entry>,
    next: Option<Link>,
}

impl Feed {
    pub fn new(base: Option<Url>) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }

    /// Base location the feed's relative links resolve against
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Total number of entries, present only when an inline count was requested
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    pub fn set_count(&mut self, count: u64) {
        self.count = Some(count);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Link to the next page, if the service declared one
    pub fn next(&self) -> Option<&Link> {
        self.next.as_ref()
    }

    /// Record the continuation link.
    ///
    /// Returns `false` and leaves the feed untouched if a link was already set.
    pub fn set_next(&mut self, next: impl Into<Link>) -> bool {
        if self.next.is_some() {
            return false;
        }
        self.next = Some(next.into());
        true
    }

    pub fn is_last_page(&self) -> bool {
        self.next.is_none()
    }
}
