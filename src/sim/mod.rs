//! Simulation core: The single-timeline state machine behind the stream.
//!
//! [`StreamCore`] owns every piece of mutable engine state: the message
//! pools, the classifier, the delay sampler, the ring buffer, the sequence
//! counter, and the registered observers. It has no timers and spawns no
//! threads; one call to [`StreamCore::tick`] performs exactly one emission
//! and reports the delay to wait before the next one. The thread-backed
//! driver in [`crate::actor`] supplies the actual waiting.
//!
//! # State machine
//!
//! ```text
//!            start()                 tick()
//! STOPPED ──────────▶ SCHEDULED ──────────▶ EMITTING
//!    ▲                    ▲                    │
//!    │       stop()       └────────────────────┘
//!    └─────────────────────────  (next delay armed)
//! ```
//!
//! A `tick()` that arrives after `stop()` returns `None` and emits
//! nothing; that is the cooperative cancellation path.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::buffer::{AgentId, Level, LogEntry, StreamBuffer, DEFAULT_CAPACITY};
use crate::catalog;
use crate::gen::{ChaosLevel, ChaosMapping, DelaySampler, EventClassifier, EventDraw, MessagePools};

/// Gap between the fixed bootstrap emissions.
const BOOT_GAP: Duration = Duration::from_millis(100);

/// Observer invoked synchronously once per emitted entry.
///
/// The second argument is the originating agent, when the entry is agent
/// chatter, so statistics consumers can tally per-agent counts without
/// inspecting the buffer. Observers must treat the entry as read-only and
/// must not block for long; they run on the emission path.
pub type EmitObserver = Box<dyn FnMut(&LogEntry, Option<AgentId>) + Send>;

/// Lifecycle states of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Not running; no wake-up armed.
    Stopped,
    /// Running; exactly one future wake-up armed.
    Scheduled,
    /// Mid-emission (transient within [`StreamCore::tick`]).
    Emitting,
}

/// Configuration for a simulation instance.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Ring buffer capacity.
    pub capacity: usize,
    /// Direction in which the chaos level bends delays.
    pub chaos_mapping: ChaosMapping,
    /// Starting chaos level.
    pub chaos_level: ChaosLevel,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            chaos_mapping: ChaosMapping::default(),
            chaos_level: ChaosLevel::default(),
            seed: None,
        }
    }
}

/// The deterministic heart of the engine.
///
/// All state is private to the instance; independent cores never share
/// pools or buffers. The core can be driven manually (as the tests do) or
/// wrapped in the thread-backed [`crate::actor::StreamEngine`].
pub struct StreamCore {
    /// Random source for every stochastic decision.
    rng: StdRng,
    /// Per-agent working pools.
    pools: MessagePools,
    /// Inter-event delay distribution.
    sampler: DelaySampler,
    /// Bounded stream history.
    buffer: StreamBuffer,
    /// Current chaos level; applies from the next sampled delay.
    chaos: ChaosLevel,
    /// Registered per-emission observers.
    observers: Vec<EmitObserver>,
    /// Lifecycle state.
    state: StreamState,
    /// Next sequence number to assign.
    next_id: u64,
    /// Progress through the fixed bootstrap lines (runs once per instance).
    boot_cursor: usize,
}

impl StreamCore {
    /// Create a core from configuration.
    pub fn new(config: EngineConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            rng,
            pools: MessagePools::new(),
            sampler: DelaySampler::new(config.chaos_mapping),
            buffer: StreamBuffer::new(config.capacity),
            chaos: config.chaos_level,
            observers: Vec::new(),
            state: StreamState::Stopped,
            next_id: 0,
            boot_cursor: 0,
        }
    }

    /// Arm the first wake-up and return its delay.
    ///
    /// Idempotent: returns `None` if already running, leaving the armed
    /// wake-up untouched.
    pub fn start(&mut self) -> Option<Duration> {
        if self.state != StreamState::Stopped {
            return None;
        }
        self.state = StreamState::Scheduled;
        info!(chaos = %self.chaos, "stream started");
        Some(self.next_delay())
    }

    /// Stop the stream. Idempotent; a pending wake-up that fires after
    /// this call emits nothing.
    pub fn stop(&mut self) {
        if self.state != StreamState::Stopped {
            info!(emitted = self.next_id, "stream stopped");
        }
        self.state = StreamState::Stopped;
    }

    /// Whether the stream is currently running.
    pub fn is_running(&self) -> bool {
        self.state != StreamState::Stopped
    }

    /// The current lifecycle state.
    pub const fn state(&self) -> StreamState {
        self.state
    }

    /// Set the chaos level; takes effect on the next sampled delay.
    pub fn set_chaos_level(&mut self, level: ChaosLevel) {
        if level != self.chaos {
            debug!(from = %self.chaos, to = %level, "chaos level changed");
        }
        self.chaos = level;
    }

    /// The current chaos level.
    pub const fn chaos_level(&self) -> ChaosLevel {
        self.chaos
    }

    /// Register a per-emission observer.
    pub fn add_observer(&mut self, observer: EmitObserver) {
        self.observers.push(observer);
    }

    /// Read-only view of the stream history.
    pub const fn buffer(&self) -> &StreamBuffer {
        &self.buffer
    }

    /// Clone the stream history oldest-to-newest.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.buffer.snapshot()
    }

    /// Consume one wake-up: emit exactly one entry, then report the delay
    /// to the next one.
    ///
    /// Returns `None` if the core was stopped since the wake-up was armed,
    /// in which case nothing is emitted.
    pub fn tick(&mut self) -> Option<Duration> {
        if self.state == StreamState::Stopped {
            return None;
        }
        self.state = StreamState::Emitting;

        let entry = if self.boot_cursor < catalog::BOOT_SEQUENCE.len() {
            self.next_boot_entry()
        } else {
            self.next_random_entry()
        };
        let agent = entry.agent;

        debug!(
            id = entry.id,
            level = %entry.level,
            agent = agent.map(AgentId::as_str),
            "emit"
        );

        self.buffer.append(entry.clone());
        for observer in &mut self.observers {
            observer(&entry, agent);
        }

        self.state = StreamState::Scheduled;
        Some(self.next_delay())
    }

    /// The next fixed bootstrap entry, bypassing the classifier.
    fn next_boot_entry(&mut self) -> LogEntry {
        let (level, message) = catalog::BOOT_SEQUENCE[self.boot_cursor];
        self.boot_cursor += 1;
        LogEntry::plain(self.take_id(), level, message)
    }

    /// One random emission: classify, fetch payload, build the entry.
    fn next_random_entry(&mut self) -> LogEntry {
        let draw = EventClassifier::draw(&mut self.rng, &mut self.pools);
        let id = self.take_id();
        match draw {
            EventDraw::AsciiArt { message } => LogEntry::memory_dump(id, message),
            EventDraw::Glitch { text } => LogEntry::glitch(id, text),
            EventDraw::System { message } => LogEntry::plain(id, Level::System, message),
            EventDraw::Error { message } => LogEntry::plain(id, Level::Error, message),
            EventDraw::Agent { agent, message } => LogEntry::chatter(id, agent, message),
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Delay until the next emission. Bootstrap lines use a fixed gap;
    /// everything after is drawn from the three-band distribution.
    fn next_delay(&mut self) -> Duration {
        if self.boot_cursor < catalog::BOOT_SEQUENCE.len() {
            BOOT_GAP
        } else {
            self.sampler.sample(&mut self.rng, self.chaos)
        }
    }

}

impl std::fmt::Debug for StreamCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamCore")
            .field("state", &self.state)
            .field("chaos", &self.chaos)
            .field("next_id", &self.next_id)
            .field("boot_cursor", &self.boot_cursor)
            .field("buffer_len", &self.buffer.len())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
