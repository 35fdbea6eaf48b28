//! # Backrooms Stream
//!
//! A stochastic log stream simulation engine for terminal-styled agent
//! viewers.
//!
//! The engine decides what synthetic event to emit next, when to emit it,
//! and keeps the emitted sequence bounded and non-repetitive, tunable by
//! an external chaos-intensity dial. Rendering, theming, statistics
//! widgets, and audio are downstream consumers of the entry stream.
//!
//! ## Core Concepts
//!
//! - **Weighted classification**: One uniform roll picks the category
//!   (ascii-art, glitch, system, error, agent chatter)
//! - **Message pools**: Agent messages never repeat until their pool is
//!   exhausted, then every pool refills
//! - **Three-band timing**: Burst, thinking-pause, and deep-thinking
//!   delays, compressed or stretched by the chaos level
//! - **Single timeline**: One worker thread, one armed wake-up, one
//!   emission per tick; stop is cooperative cancellation
//!
//! ## Example
//!
//! ```rust,no_run
//! use backrooms::StreamEngine;
//!
//! let engine = StreamEngine::new();
//! engine.on_emit(|entry, agent| {
//!     let speaker = agent.map_or("-", |a| a.as_str());
//!     println!("[{}] [{}] [{speaker}] {}", entry.timestamp, entry.level, entry.message);
//! }).unwrap();
//! engine.start().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod catalog;
pub mod gen;
pub mod sim;

// Re-exports for convenience
pub use actor::{Command, EngineError, StreamEngine};
pub use buffer::{AgentId, EntryFlags, Level, LogEntry, StreamBuffer, DEFAULT_CAPACITY};
pub use gen::{
    Category, ChaosLevel, ChaosLevelError, ChaosMapping, DelaySampler, EventClassifier, EventDraw,
    MessagePools,
};
pub use sim::{EmitObserver, EngineConfig, StreamCore, StreamState};
