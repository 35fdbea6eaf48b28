//! Engine: Thread-backed driver for the simulation core.
//!
//! [`StreamEngine`] is the entry point for applications. It spawns one
//! worker thread that owns a [`StreamCore`] and supplies the waiting the
//! core itself never does: the worker blocks on its command channel with a
//! deadline, so a timeout *is* the scheduler wake-up and an arriving
//! command *is* cooperative cancellation. No locks are involved; all
//! mutable state stays on the worker thread.

use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};
use thiserror::Error;
use tracing::trace;

use super::messages::Command;
use crate::buffer::{AgentId, LogEntry};
use crate::gen::{ChaosLevel, ChaosLevelError};
use crate::sim::{EngineConfig, StreamCore};

/// Errors surfaced by the engine handle.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A chaos level outside `1..=5` was supplied.
    #[error(transparent)]
    ChaosLevel(#[from] ChaosLevelError),
    /// The worker thread is gone (the engine was shut down).
    #[error("engine worker disconnected")]
    Disconnected,
}

/// Handle to a running stream engine.
///
/// Dropping the handle shuts the worker down and joins it.
pub struct StreamEngine {
    /// Command channel into the worker.
    cmd_tx: Sender<Command>,
    /// Worker thread handle.
    handle: Option<JoinHandle<()>>,
}

impl StreamEngine {
    /// Spawn an engine with default configuration. The stream is created
    /// stopped; call [`Self::start`] to begin emitting.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the worker thread.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Spawn an engine with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the worker thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn with_config(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = unbounded();
        let handle = thread::Builder::new()
            .name("backrooms-stream".to_string())
            .spawn(move || run_loop(StreamCore::new(config), &cmd_rx))
            .expect("Failed to spawn stream worker thread");

        Self {
            cmd_tx,
            handle: Some(handle),
        }
    }

    /// Begin emitting. Idempotent if already running.
    pub fn start(&self) -> Result<(), EngineError> {
        self.send(Command::Start)
    }

    /// Stop emitting and cancel the pending tick. Idempotent if already
    /// stopped. Once this returns, the command is queued ahead of any
    /// pending wake-up, so no further observer notification occurs until
    /// the next [`Self::start`].
    pub fn stop(&self) -> Result<(), EngineError> {
        self.send(Command::Stop)
    }

    /// Set the chaos level (`1..=5`). Takes effect on the next scheduled
    /// delay; an already-armed wait is not recomputed.
    pub fn set_chaos_level(&self, level: u8) -> Result<(), EngineError> {
        let level = ChaosLevel::new(level)?;
        self.send(Command::SetChaos(level))
    }

    /// Register an observer invoked synchronously once per emitted entry,
    /// with the originating agent when the entry is agent chatter.
    pub fn on_emit<F>(&self, observer: F) -> Result<(), EngineError>
    where
        F: FnMut(&LogEntry, Option<AgentId>) + Send + 'static,
    {
        self.send(Command::Observe(Box::new(observer)))
    }

    /// Fetch the stream history oldest-to-newest.
    ///
    /// Served by the worker between ticks; the returned entries are
    /// detached clones, never a handle into engine-internal storage.
    pub fn snapshot(&self) -> Result<Vec<LogEntry>, EngineError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(Command::Snapshot(reply_tx))?;
        reply_rx.recv().map_err(|_| EngineError::Disconnected)
    }

    fn send(&self, command: Command) -> Result<(), EngineError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| EngineError::Disconnected)
    }
}

impl Default for StreamEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StreamEngine {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Worker loop: one armed deadline at most, one emission per wake-up.
///
/// While running, the loop waits on the command channel with the deadline
/// of the next tick. A timeout performs the tick and arms the next one; a
/// command is applied without touching the armed deadline (stop clears
/// it). While stopped, the loop blocks indefinitely on the channel.
fn run_loop(mut core: StreamCore, cmd_rx: &Receiver<Command>) {
    let mut deadline: Option<Instant> = None;

    loop {
        let command = match deadline {
            Some(at) => match cmd_rx.recv_deadline(at) {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            },
            None => match cmd_rx.recv() {
                Ok(command) => Some(command),
                Err(_) => break,
            },
        };

        match command {
            None => {
                // Wake-up fired: exactly one emission, then re-arm.
                deadline = core.tick().map(|delay| Instant::now() + delay);
            }
            Some(Command::Start) => {
                if let Some(delay) = core.start() {
                    deadline = Some(Instant::now() + delay);
                }
            }
            Some(Command::Stop) => {
                core.stop();
                deadline = None;
            }
            Some(Command::SetChaos(level)) => core.set_chaos_level(level),
            Some(Command::Observe(observer)) => core.add_observer(observer),
            Some(Command::Snapshot(reply)) => {
                trace!(len = core.buffer().len(), "snapshot requested");
                let _ = reply.send(core.snapshot());
            }
            Some(Command::Shutdown) => break,
        }
    }
}
