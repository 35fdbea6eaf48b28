//! Delay sampling: Variable inter-event gaps with chaos modulation.
//!
//! Each delay is drawn independently from a three-band distribution:
//!
//! - 70%: 100-400ms ("burst" cadence)
//! - 20%: 500-1500ms ("thinking pause")
//! - 10%: 2000-5000ms ("deep thinking")
//!
//! The chaos level (1-5) scales the sampled delay multiplicatively, which
//! preserves the band shape. The scaling direction is configurable via
//! [`ChaosMapping`]; the default compresses delays as chaos rises, so a
//! higher level means a faster stream.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;

/// Band roll cutoff for burst cadence.
const BURST_BOUND: f64 = 0.7;
/// Band roll cutoff for thinking pauses.
const PAUSE_BOUND: f64 = 0.9;

/// Error returned for a chaos level outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("chaos level {0} out of range 1..=5")]
pub struct ChaosLevelError(pub u8);

/// External intensity dial, valid range `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChaosLevel(u8);

impl ChaosLevel {
    /// The calmest level.
    pub const MIN: Self = Self(1);
    /// The most intense level.
    pub const MAX: Self = Self(5);

    /// Validate and wrap a raw level.
    pub const fn new(level: u8) -> Result<Self, ChaosLevelError> {
        if level >= 1 && level <= 5 {
            Ok(Self(level))
        } else {
            Err(ChaosLevelError(level))
        }
    }

    /// The raw level value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for ChaosLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl std::fmt::Display for ChaosLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Direction in which the chaos level bends the delay distribution.
///
/// The source material is ambiguous about the direction, so it is an
/// explicit configuration knob rather than a hard-coded guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChaosMapping {
    /// Higher chaos compresses delays (faster stream). Level 1 leaves the
    /// base distribution untouched; level 5 halves every delay.
    #[default]
    Compress,
    /// Higher chaos stretches delays proportionally (slower stream).
    Stretch,
}

impl ChaosMapping {
    /// The multiplicative factor applied to a sampled delay.
    pub fn factor(self, level: ChaosLevel) -> f64 {
        let intensity = 1.0 + f64::from(level.get() - 1) / 4.0;
        match self {
            Self::Compress => 1.0 / intensity,
            Self::Stretch => intensity,
        }
    }
}

/// Draws inter-event delays from the three-band distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaySampler {
    /// How the chaos level bends the distribution.
    mapping: ChaosMapping,
}

impl DelaySampler {
    /// Create a sampler with the given chaos mapping.
    pub const fn new(mapping: ChaosMapping) -> Self {
        Self { mapping }
    }

    /// The configured chaos mapping.
    pub const fn mapping(&self) -> ChaosMapping {
        self.mapping
    }

    /// Draw one delay, scaled for the given chaos level.
    ///
    /// The level only affects this draw; an already-armed wait is never
    /// recomputed.
    pub fn sample<R: Rng>(&self, rng: &mut R, level: ChaosLevel) -> Duration {
        Self::base_delay(rng).mul_f64(self.mapping.factor(level))
    }

    /// Draw one delay from the unscaled three-band distribution.
    fn base_delay<R: Rng>(rng: &mut R) -> Duration {
        let roll = rng.gen::<f64>();
        let millis = if roll < BURST_BOUND {
            rng.gen_range(100..400)
        } else if roll < PAUSE_BOUND {
            rng.gen_range(500..1500)
        } else {
            rng.gen_range(2000..5000)
        };
        Duration::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_chaos_level_validation() {
        assert!(ChaosLevel::new(0).is_err());
        assert!(ChaosLevel::new(6).is_err());
        for raw in 1..=5 {
            assert_eq!(ChaosLevel::new(raw).map(ChaosLevel::get), Ok(raw));
        }
    }

    #[test]
    fn test_compress_factor_curve() {
        let mapping = ChaosMapping::Compress;
        assert!((mapping.factor(ChaosLevel::MIN) - 1.0).abs() < f64::EPSILON);
        assert!((mapping.factor(ChaosLevel::MAX) - 0.5).abs() < f64::EPSILON);
        // Monotonically decreasing.
        for raw in 1..5 {
            let lo = mapping.factor(ChaosLevel::new(raw).unwrap());
            let hi = mapping.factor(ChaosLevel::new(raw + 1).unwrap());
            assert!(hi < lo);
        }
    }

    #[test]
    fn test_stretch_is_reciprocal() {
        for raw in 1..=5 {
            let level = ChaosLevel::new(raw).unwrap();
            let product = ChaosMapping::Compress.factor(level) * ChaosMapping::Stretch.factor(level);
            assert!((product - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_samples_fall_in_scaled_bands() {
        let sampler = DelaySampler::default();
        let mut rng = StdRng::seed_from_u64(11);

        for raw in 1..=5u8 {
            let level = ChaosLevel::new(raw).unwrap();
            let factor = sampler.mapping().factor(level);
            for _ in 0..500 {
                let delay = sampler.sample(&mut rng, level).as_secs_f64() * 1000.0;
                let bands = [(100.0, 400.0), (500.0, 1500.0), (2000.0, 5000.0)];
                let in_band = bands.iter().any(|(lo, hi)| {
                    delay >= lo * factor - 1.0 && delay < hi * factor + 1.0
                });
                assert!(in_band, "delay {delay}ms outside scaled bands at level {raw}");
            }
        }
    }

    #[test]
    fn test_band_distribution_shape() {
        let sampler = DelaySampler::default();
        let mut rng = StdRng::seed_from_u64(12);
        let mut burst = 0usize;

        let samples = 5000;
        for _ in 0..samples {
            let delay = sampler.sample(&mut rng, ChaosLevel::MIN);
            if delay < Duration::from_millis(400) {
                burst += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let share = burst as f64 / samples as f64;
        assert!((share - 0.7).abs() < 0.03, "burst share {share:.3}");
    }
}
