//! Generation module: The stochastic heart of the stream.
//!
//! This module contains:
//! - [`MessagePools`]: Per-agent working pools with refill-on-exhaustion
//! - [`EventClassifier`]: Weighted category selection and payload assembly
//! - [`DelaySampler`]: Three-band inter-event delay distribution
//! - [`ChaosLevel`] / [`ChaosMapping`]: The external intensity dial

mod classifier;
mod pools;
mod timing;

pub use classifier::{glitch_text, Category, EventClassifier, EventDraw};
pub use pools::MessagePools;
pub use timing::{ChaosLevel, ChaosLevelError, ChaosMapping, DelaySampler};
