//! Fallback tip rotation.
//!
//! Picks the tier-3 session tip from the fixed catalog, steering away from
//! recently shown ids. Uses a PCG generator with an optional seed so
//! rotation is reproducible in tests while staying uniform in production.

use std::collections::HashSet;

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use crate::catalog::{self, TipRecord};
use crate::ledger::RecencyLedger;

/// Draws tips from the catalog, avoiding short-term repeats.
pub struct TipSelector {
    recency: RecencyLedger,
    rng: Mcg128Xsl64,
    capacity: usize,
    strict_window: usize,
}

impl TipSelector {
    /// Create a selector over an existing recency ledger.
    ///
    /// `capacity` bounds the ledger; `strict_window` is how many of the most
    /// recent tips stay excluded when the ledger has grown to cover the
    /// whole catalog. `seed` pins the rotation for reproducibility.
    pub fn new(
        recency: RecencyLedger,
        capacity: usize,
        strict_window: usize,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        Self {
            recency,
            rng: Mcg128Xsl64::seed_from_u64(seed),
            capacity,
            strict_window,
        }
    }

    /// Pick one tip uniformly from the catalog minus the recency list.
    ///
    /// If recency has grown to exclude every catalog id, only the
    /// `strict_window` most recent ids stay excluded, so repeats remain
    /// avoided short-term even after long-term exhaustion. The chosen id is
    /// appended to the recency ledger (oldest entry evicted at capacity).
    pub fn pick_random_tip(&mut self) -> TipRecord {
        let mut candidates: Vec<u32> = catalog::tip_ids()
            .filter(|id| !self.recency.contains(*id))
            .collect();

        if candidates.is_empty() {
            let excluded: HashSet<u32> =
                self.recency.most_recent(self.strict_window).into_iter().collect();
            candidates = catalog::tip_ids()
                .filter(|id| !excluded.contains(id))
                .collect();
        }

        // Unreachable while catalog_len() > strict_window; defensive default.
        let tip = if candidates.is_empty() {
            catalog::tip_by_index(0)
        } else {
            let idx = self.rng.gen_range(0..candidates.len());
            catalog::tip_by_id(candidates[idx]).unwrap_or_else(|| catalog::tip_by_index(0))
        };

        self.recency.push(tip.id, self.capacity);
        tip
    }

    /// The recency ledger, for persistence after a draw.
    pub fn recency(&self) -> &RecencyLedger {
        &self.recency
    }
}
