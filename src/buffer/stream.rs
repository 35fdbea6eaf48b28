//! Stream buffer: Ring buffer holding the most recent emitted entries.
//!
//! This provides bounded storage for the live stream, with O(1) amortized
//! append and head eviction once capacity is reached. Consumers read via
//! [`StreamBuffer::snapshot`], which clones the contents oldest-to-newest
//! and never exposes a mutable handle into engine-internal storage.

use std::collections::VecDeque;

use super::entry::LogEntry;

/// Default number of entries retained (matches the viewer's scrollback).
pub const DEFAULT_CAPACITY: usize = 500;

/// Bounded ordered sequence of emitted entries.
///
/// Insertion appends to the tail; when the count would exceed capacity the
/// oldest entry is evicted from the head, preserving most-recent-N
/// semantics.
#[derive(Debug)]
pub struct StreamBuffer {
    /// Entries, oldest at the front.
    entries: VecDeque<LogEntry>,
    /// Maximum number of entries to retain.
    capacity: usize,
}

impl StreamBuffer {
    /// Create a new buffer with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "stream buffer capacity must be non-zero");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest if at capacity.
    pub fn append(&mut self, entry: LogEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recently appended entry, if any.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Iterate over entries oldest-to-newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Clone the contents oldest-to-newest.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for StreamBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::entry::Level;

    fn entry(id: u64) -> LogEntry {
        LogEntry::plain(id, Level::Info, format!("entry {id}"))
    }

    #[test]
    fn test_append_and_order() {
        let mut buf = StreamBuffer::new(10);
        for id in 0..5 {
            buf.append(entry(id));
        }
        assert_eq!(buf.len(), 5);
        let ids: Vec<u64> = buf.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_capacity_eviction() {
        let mut buf = StreamBuffer::new(3);
        for id in 0..7 {
            buf.append(entry(id));
        }
        assert_eq!(buf.len(), 3);
        let ids: Vec<u64> = buf.snapshot().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut buf = StreamBuffer::new(3);
        buf.append(entry(0));
        let snap = buf.snapshot();
        buf.append(entry(1));
        assert_eq!(snap.len(), 1);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_latest() {
        let mut buf = StreamBuffer::new(2);
        assert!(buf.latest().is_none());
        buf.append(entry(0));
        buf.append(entry(1));
        buf.append(entry(2));
        assert_eq!(buf.latest().map(|e| e.id), Some(2));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut buf = StreamBuffer::new(500);
        for id in 0..1200 {
            buf.append(entry(id));
            assert!(buf.len() <= 500);
        }
        assert_eq!(buf.snapshot().first().map(|e| e.id), Some(700));
    }
}
