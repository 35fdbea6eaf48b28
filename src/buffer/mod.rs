//! Buffer module: Core data structures for the emitted stream.
//!
//! This module contains:
//! - [`LogEntry`]: The immutable unit of emitted output
//! - [`Level`] / [`AgentId`] / [`EntryFlags`]: Entry classification types
//! - [`StreamBuffer`]: Bounded ring buffer with most-recent-N semantics

mod entry;
mod stream;

pub use entry::{AgentId, EntryFlags, Level, LogEntry};
pub use stream::{StreamBuffer, DEFAULT_CAPACITY};
