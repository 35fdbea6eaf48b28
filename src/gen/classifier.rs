//! Event classifier: Weighted random selection of the next event.
//!
//! One uniform draw over `[0,1)` is partitioned into fixed cumulative
//! bands, evaluated in order (first match wins):
//!
//! | Upper bound | Category  | Share |
//! |-------------|-----------|-------|
//! | 0.02        | ascii-art |  2%   |
//! | 0.07        | glitch    |  5%   |
//! | 0.27        | system    | 20%   |
//! | 0.42        | error     | 15%   |
//! | 1.00        | agent     | 58%   |
//!
//! The weights are tuned constants: a stream dominated by agent chatter,
//! punctuated by rarer system noise, errors, and very rare spectacle
//! events.

use rand::Rng;

use crate::buffer::AgentId;
use crate::catalog;

use super::pools::MessagePools;

/// Cumulative upper bound of the ascii-art band.
const ASCII_BOUND: f64 = 0.02;
/// Cumulative upper bound of the glitch band.
const GLITCH_BOUND: f64 = 0.07;
/// Cumulative upper bound of the system band.
const SYSTEM_BOUND: f64 = 0.27;
/// Cumulative upper bound of the error band.
const ERROR_BOUND: f64 = 0.42;

/// Minimum glitch text length in glyphs.
const GLITCH_MIN_LEN: usize = 5;
/// Maximum glitch text length in glyphs (inclusive).
const GLITCH_MAX_LEN: usize = 24;

/// The classifier's outcome type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Rare multi-line art block ("memory dump").
    AsciiArt,
    /// Procedural glitch text.
    Glitch,
    /// Infrastructure noise.
    System,
    /// Failure noise.
    Error,
    /// Agent chatter.
    Agent,
}

/// A classified event with its payload, ready to become a [`crate::LogEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDraw {
    /// An art block wrapped as a memory dump (level SYSTEM, ascii hint).
    AsciiArt {
        /// The fully wrapped message.
        message: String,
    },
    /// Procedural glitch text (level ERROR, glitch hint).
    Glitch {
        /// The generated glyph string.
        text: String,
    },
    /// A system pool message (level SYSTEM).
    System {
        /// The selected message.
        message: &'static str,
    },
    /// An error pool message (level ERROR).
    Error {
        /// The selected message.
        message: &'static str,
    },
    /// Agent chatter (level INFO).
    Agent {
        /// The speaking agent.
        agent: AgentId,
        /// The message taken from the agent's pool.
        message: &'static str,
    },
}

impl EventDraw {
    /// The category of this draw.
    pub const fn category(&self) -> Category {
        match self {
            Self::AsciiArt { .. } => Category::AsciiArt,
            Self::Glitch { .. } => Category::Glitch,
            Self::System { .. } => Category::System,
            Self::Error { .. } => Category::Error,
            Self::Agent { .. } => Category::Agent,
        }
    }
}

/// Weighted random event selection.
#[derive(Debug, Default)]
pub struct EventClassifier;

impl EventClassifier {
    /// Map a uniform roll in `[0,1)` to a category, first match wins.
    pub fn classify(roll: f64) -> Category {
        debug_assert!((0.0..1.0).contains(&roll));
        if roll < ASCII_BOUND {
            Category::AsciiArt
        } else if roll < GLITCH_BOUND {
            Category::Glitch
        } else if roll < SYSTEM_BOUND {
            Category::System
        } else if roll < ERROR_BOUND {
            Category::Error
        } else {
            Category::Agent
        }
    }

    /// Draw the next event: one category roll plus its payload.
    ///
    /// Agent payloads consume from `pools`; all other payloads leave the
    /// pools untouched.
    pub fn draw<R: Rng>(rng: &mut R, pools: &mut MessagePools) -> EventDraw {
        let category = Self::classify(rng.gen::<f64>());
        Self::payload_for(category, rng, pools)
    }

    /// Build the payload for an already-decided category.
    ///
    /// Split out from [`Self::draw`] so tests can force a category without
    /// fighting the random source.
    pub fn payload_for<R: Rng>(
        category: Category,
        rng: &mut R,
        pools: &mut MessagePools,
    ) -> EventDraw {
        match category {
            Category::AsciiArt => {
                let art = catalog::ASCII_ART[rng.gen_range(0..catalog::ASCII_ART.len())];
                EventDraw::AsciiArt {
                    message: format!(
                        "{}\n{art}\n{}",
                        catalog::MEMORY_DUMP_HEADER,
                        catalog::MEMORY_DUMP_FOOTER
                    ),
                }
            }
            Category::Glitch => EventDraw::Glitch {
                text: glitch_text(rng),
            },
            Category::System => EventDraw::System {
                message: catalog::SYSTEM_MESSAGES[rng.gen_range(0..catalog::SYSTEM_MESSAGES.len())],
            },
            Category::Error => EventDraw::Error {
                message: catalog::ERROR_MESSAGES[rng.gen_range(0..catalog::ERROR_MESSAGES.len())],
            },
            Category::Agent => {
                let agent = AgentId::ALL[rng.gen_range(0..AgentId::ALL.len())];
                EventDraw::Agent {
                    agent,
                    message: pools.take(agent, rng),
                }
            }
        }
    }
}

/// Generate a glitch string of 5-24 glyphs from the fixed palette.
///
/// Each glyph is drawn independently; glitch text carries no repetition
/// constraint (only agent messages are deduplicated).
pub fn glitch_text<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(GLITCH_MIN_LEN..=GLITCH_MAX_LEN);
    (0..len)
        .map(|_| catalog::GLITCH_GLYPHS[rng.gen_range(0..catalog::GLITCH_GLYPHS.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_classify_band_edges() {
        assert_eq!(EventClassifier::classify(0.0), Category::AsciiArt);
        assert_eq!(EventClassifier::classify(0.019), Category::AsciiArt);
        assert_eq!(EventClassifier::classify(0.02), Category::Glitch);
        assert_eq!(EventClassifier::classify(0.069), Category::Glitch);
        assert_eq!(EventClassifier::classify(0.07), Category::System);
        assert_eq!(EventClassifier::classify(0.269), Category::System);
        assert_eq!(EventClassifier::classify(0.27), Category::Error);
        assert_eq!(EventClassifier::classify(0.419), Category::Error);
        assert_eq!(EventClassifier::classify(0.42), Category::Agent);
        assert_eq!(EventClassifier::classify(0.999), Category::Agent);
    }

    #[test]
    fn test_category_frequencies_within_tolerance() {
        let mut rng = StdRng::seed_from_u64(0xB4C1);
        let mut counts: HashMap<Category, usize> = HashMap::new();
        let samples = 10_000;

        for _ in 0..samples {
            let category = EventClassifier::classify(rng.gen::<f64>());
            *counts.entry(category).or_default() += 1;
        }

        let expected = [
            (Category::AsciiArt, 0.02),
            (Category::Glitch, 0.05),
            (Category::System, 0.20),
            (Category::Error, 0.15),
            (Category::Agent, 0.58),
        ];

        #[allow(clippy::cast_precision_loss)]
        for (category, share) in expected {
            let observed = counts.get(&category).copied().unwrap_or(0) as f64 / samples as f64;
            assert!(
                (observed - share).abs() < 0.02,
                "{category:?}: observed {observed:.3}, expected {share:.3}"
            );
        }
    }

    #[test]
    fn test_glitch_text_length_and_palette() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let text = glitch_text(&mut rng);
            let len = text.chars().count();
            assert!((GLITCH_MIN_LEN..=GLITCH_MAX_LEN).contains(&len));
            for glyph in text.chars() {
                assert!(crate::catalog::GLITCH_GLYPHS.contains(&glyph));
            }
        }
    }

    #[test]
    fn test_ascii_payload_wrapping() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pools = MessagePools::new();
        let draw = EventClassifier::payload_for(Category::AsciiArt, &mut rng, &mut pools);
        let EventDraw::AsciiArt { message } = draw else {
            panic!("expected ascii-art draw");
        };
        assert!(message.starts_with("=== MEMORY DUMP DETECTED ===\n"));
        assert!(message.ends_with("\n[PROCESS RESUMED]"));
    }

    #[test]
    fn test_agent_draw_consumes_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pools = MessagePools::new();
        let before: usize = AgentId::ALL.iter().map(|a| pools.remaining(*a)).sum();
        let draw = EventClassifier::payload_for(Category::Agent, &mut rng, &mut pools);
        let after: usize = AgentId::ALL.iter().map(|a| pools.remaining(*a)).sum();
        assert_eq!(after, before - 1);
        assert_eq!(draw.category(), Category::Agent);
    }

    #[test]
    fn test_forced_ascii_draws_never_deplete() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut pools = MessagePools::new();
        for _ in 0..1000 {
            let draw = EventClassifier::payload_for(Category::AsciiArt, &mut rng, &mut pools);
            assert_eq!(draw.category(), Category::AsciiArt);
        }
    }
}
