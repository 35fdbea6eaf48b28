//! Actor model: Thread-backed driving of the simulation core.
//!
//! The engine runs one dedicated worker thread that owns all mutable
//! stream state. Applications hold a [`StreamEngine`] handle and talk to
//! the worker over a crossbeam channel:
//!
//! ```text
//! ┌──────────────┐      Command       ┌───────────────┐
//! │  Application │ ─────────────────▶ │ Worker Thread │
//! │   (handle)   │                    │  (StreamCore) │
//! │              │ ◀───────────────── │               │
//! └──────────────┘   Snapshot reply   └───────┬───────┘
//!                                             │ observer callbacks
//!                                             ▼
//!                                     ┌───────────────┐
//!                                     │ Stats / Views │
//!                                     └───────────────┘
//! ```
//!
//! The worker waits on the channel with the deadline of the next tick:
//! a timeout is the scheduler wake-up, an arriving command is handled
//! between emissions. This keeps every emission strictly serialized and
//! makes `stop()` cancellation cooperative.

mod engine;
mod messages;

pub use engine::{EngineError, StreamEngine};
pub use messages::Command;
