//! Message pools: Per-agent working sets that prevent immediate repetition.
//!
//! Each agent has a working pool seeded from the catalog. Selection removes
//! the chosen message permanently, so a string cannot recur until its pool
//! has been exhausted. Exhaustion refills every pool, not just the empty
//! one, matching the shared refill cycle of the stream.

use rand::Rng;

use crate::buffer::AgentId;
use crate::catalog;

/// Working pools of not-yet-used agent messages.
///
/// Owned exclusively by one engine instance; independent engines never
/// share pool state.
#[derive(Debug)]
pub struct MessagePools {
    /// One working pool per agent, indexed by [`AgentId::index`].
    pools: [Vec<&'static str>; 4],
}

impl MessagePools {
    /// Create pools with every agent at full catalog strength.
    pub fn new() -> Self {
        Self {
            pools: Self::fresh(),
        }
    }

    fn fresh() -> [Vec<&'static str>; 4] {
        AgentId::ALL.map(|agent| catalog::agent_messages(agent).to_vec())
    }

    /// Take a uniformly random message from `agent`'s pool, removing it.
    ///
    /// If the pool is empty, all four pools are refilled from the catalog
    /// first. This is self-healing: a pool can never stay empty across a
    /// call.
    pub fn take<R: Rng>(&mut self, agent: AgentId, rng: &mut R) -> &'static str {
        if self.pools[agent.index()].is_empty() {
            tracing::debug!(agent = %agent, "message pool exhausted, refilling all pools");
            self.refill_all();
        }

        let pool = &mut self.pools[agent.index()];
        debug_assert!(!pool.is_empty());
        let index = rng.gen_range(0..pool.len());
        pool.swap_remove(index)
    }

    /// Number of unused messages left for `agent`.
    pub fn remaining(&self, agent: AgentId) -> usize {
        self.pools[agent.index()].len()
    }

    /// Reset every pool to the full catalog-derived state.
    fn refill_all(&mut self) {
        self.pools = Self::fresh();
    }
}

impl Default for MessagePools {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_no_repetition_until_exhausted() {
        let mut pools = MessagePools::new();
        let mut rng = StdRng::seed_from_u64(42);

        let size = catalog::agent_messages(AgentId::Grok).len();
        let mut seen = HashSet::new();
        for _ in 0..size {
            let message = pools.take(AgentId::Grok, &mut rng);
            assert!(seen.insert(message), "message repeated before exhaustion");
        }
        assert_eq!(seen.len(), size);
        assert_eq!(pools.remaining(AgentId::Grok), 0);
    }

    #[test]
    fn test_exhaustion_refills_all_pools() {
        let mut pools = MessagePools::new();
        let mut rng = StdRng::seed_from_u64(7);

        // Partially drain another agent's pool.
        for _ in 0..3 {
            pools.take(AgentId::Claude, &mut rng);
        }
        assert_eq!(pools.remaining(AgentId::Claude), 7);

        // Fully drain Grok's pool, then take once more to trigger refill.
        for _ in 0..10 {
            pools.take(AgentId::Grok, &mut rng);
        }
        assert_eq!(pools.remaining(AgentId::Grok), 0);
        pools.take(AgentId::Grok, &mut rng);

        // Refill reset every pool, then the post-refill take consumed one.
        assert_eq!(pools.remaining(AgentId::Grok), 9);
        assert_eq!(pools.remaining(AgentId::Claude), 10);
        assert_eq!(pools.remaining(AgentId::ChatGpt), 10);
        assert_eq!(pools.remaining(AgentId::Perplexity), 10);
    }

    #[test]
    fn test_take_never_fails_over_many_cycles() {
        let mut pools = MessagePools::new();
        let mut rng = StdRng::seed_from_u64(99);

        for i in 0..1000 {
            let agent = AgentId::ALL[i % 4];
            let message = pools.take(agent, &mut rng);
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn test_messages_come_from_own_catalog() {
        let mut pools = MessagePools::new();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..25 {
            let message = pools.take(AgentId::Perplexity, &mut rng);
            assert!(catalog::agent_messages(AgentId::Perplexity).contains(&message));
        }
    }
}
