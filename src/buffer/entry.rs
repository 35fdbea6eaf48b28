//! Log entry: The atomic unit of the simulated stream.
//!
//! Entries are immutable once constructed. The constructors are the only
//! way to set rendering hints, which keeps the glitch/ascii-art flags
//! mutually exclusive by construction.

use bitflags::bitflags;
use chrono::Utc;

/// Log severity levels, mirroring a conventional logging taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Informational output (agent chatter).
    Info,
    /// Error output (failures, glitch bursts).
    Error,
    /// System-level events (infrastructure noise, memory dumps).
    System,
    /// Debug output.
    Debug,
    /// Warnings.
    Warning,
}

impl Level {
    /// The canonical uppercase label for this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::System => "SYSTEM",
            Self::Debug => "DEBUG",
            Self::Warning => "WARNING",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four simulated agents competing in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentId {
    /// The chaos-driven design agent.
    Grok,
    /// The standards-and-accessibility agent.
    ChatGpt,
    /// The safety-and-security agent.
    Claude,
    /// The knowledge-synthesis agent.
    Perplexity,
}

impl AgentId {
    /// All agents, in catalog order.
    pub const ALL: [Self; 4] = [Self::Grok, Self::ChatGpt, Self::Claude, Self::Perplexity];

    /// The display name for this agent.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grok => "Grok",
            Self::ChatGpt => "ChatGPT",
            Self::Claude => "Claude",
            Self::Perplexity => "Perplexity",
        }
    }

    /// Index into per-agent tables (catalog order).
    pub const fn index(self) -> usize {
        match self {
            Self::Grok => 0,
            Self::ChatGpt => 1,
            Self::Claude => 2,
            Self::Perplexity => 3,
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Rendering hints for downstream viewers.
    ///
    /// `GLITCH` and `ASCII_ART` are never both set on one entry; the
    /// [`LogEntry`] constructors enforce this.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EntryFlags: u8 {
        /// The message is procedurally generated glitch text.
        const GLITCH = 1 << 0;
        /// The message is a multi-line ascii-art block.
        const ASCII_ART = 1 << 1;
    }
}

/// A single emitted log entry.
///
/// Entries carry a monotonically increasing `id` assigned at creation and
/// a wall-clock timestamp at second resolution. The `agent` field is set
/// if and only if the entry is agent chatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Sequence number, unique and strictly increasing per engine instance.
    pub id: u64,
    /// Capture time, formatted `YYYY-MM-DD HH:MM:SS` (UTC, no timezone suffix).
    pub timestamp: String,
    /// Severity level.
    pub level: Level,
    /// Originating agent, present only for agent chatter.
    pub agent: Option<AgentId>,
    /// The textual payload.
    pub message: String,
    /// Rendering hints.
    flags: EntryFlags,
}

impl LogEntry {
    /// Create an ordinary entry with no agent and no rendering hints.
    pub fn plain(id: u64, level: Level, message: impl Into<String>) -> Self {
        Self::build(id, level, None, message.into(), EntryFlags::empty())
    }

    /// Create an agent chatter entry (level INFO).
    pub fn chatter(id: u64, agent: AgentId, message: impl Into<String>) -> Self {
        Self::build(id, Level::Info, Some(agent), message.into(), EntryFlags::empty())
    }

    /// Create a glitch entry (level ERROR, `GLITCH` hint).
    pub fn glitch(id: u64, message: impl Into<String>) -> Self {
        Self::build(id, Level::Error, None, message.into(), EntryFlags::GLITCH)
    }

    /// Create a memory-dump entry (level SYSTEM, `ASCII_ART` hint).
    pub fn memory_dump(id: u64, message: impl Into<String>) -> Self {
        Self::build(id, Level::System, None, message.into(), EntryFlags::ASCII_ART)
    }

    fn build(id: u64, level: Level, agent: Option<AgentId>, message: String, flags: EntryFlags) -> Self {
        debug_assert!(!flags.contains(EntryFlags::GLITCH | EntryFlags::ASCII_ART));
        Self {
            id,
            timestamp: now_stamp(),
            level,
            agent,
            message,
            flags,
        }
    }

    /// Whether this entry is glitch text.
    pub const fn is_glitch(&self) -> bool {
        self.flags.contains(EntryFlags::GLITCH)
    }

    /// Whether this entry is an ascii-art block.
    pub const fn is_ascii(&self) -> bool {
        self.flags.contains(EntryFlags::ASCII_ART)
    }

    /// The raw rendering-hint flags.
    pub const fn flags(&self) -> EntryFlags {
        self.flags
    }
}

/// Current wall-clock time formatted for the stream.
fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
