//! Message types for the engine worker.
//!
//! These define the protocol between the [`crate::actor::StreamEngine`]
//! handle and its worker thread. Commands are processed between ticks, so
//! they never interrupt an emission in progress.

use crossbeam_channel::Sender;

use crate::buffer::LogEntry;
use crate::gen::ChaosLevel;
use crate::sim::EmitObserver;

/// Commands sent from the engine handle to the worker thread.
pub enum Command {
    /// Arm the first tick. Ignored if already running.
    Start,
    /// Cancel the pending tick. Ignored if already stopped.
    Stop,
    /// Change the chaos level, effective from the next sampled delay.
    SetChaos(ChaosLevel),
    /// Register a per-emission observer.
    Observe(EmitObserver),
    /// Request a snapshot of the stream history, delivered on the reply
    /// channel oldest-to-newest.
    Snapshot(Sender<Vec<LogEntry>>),
    /// Tear down the worker thread.
    Shutdown,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("Start"),
            Self::Stop => f.write_str("Stop"),
            Self::SetChaos(level) => f.debug_tuple("SetChaos").field(level).finish(),
            Self::Observe(_) => f.write_str("Observe(..)"),
            Self::Snapshot(_) => f.write_str("Snapshot(..)"),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}
