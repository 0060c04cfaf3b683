use crate::arena::HypothesisArena;
use crate::select::partition_top_k;
use crate::types::{HypothesisId, RecombinationKey};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Result of offering a candidate to a [`Stack`].
///
/// The stack never disposes of anything; the caller decides what to do with
/// an evicted hypothesis or a rejected candidate.
#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddOutcome {
    /// No equivalent member existed.
    Added,
    /// The candidate beat an equivalent member and replaced it.
    Recombined { evicted: HypothesisId },
    /// An equivalent member scored at least as well; the candidate was not
    /// inserted.
    Rejected { survivor: HypothesisId },
}

impl AddOutcome {
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    pub fn evicted(self) -> Option<HypothesisId> {
        match self {
            Self::Recombined { evicted } => Some(evicted),
            _ => None,
        }
    }

    pub fn survivor(self) -> Option<HypothesisId> {
        match self {
            Self::Rejected { survivor } => Some(survivor),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StackStats {
    pub added: usize,
    pub recombined: usize,
    pub rejected: usize,
}

/// Hypotheses of comparable progress, at most one per recombination class.
///
/// Members are bucketed by recombination key; a bucket holds more than one
/// id only when distinct states collide on the key.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    buckets: FxHashMap<RecombinationKey, SmallVec<[HypothesisId; 1]>>,
    len: usize,
    stats: StackStats,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ..Self::default()
        }
    }

    pub fn add(&mut self, arena: &HypothesisArena, candidate: HypothesisId) -> AddOutcome {
        let hypothesis = arena.get(candidate);
        let key = hypothesis.recombination_key();
        let bucket = self.buckets.entry(key).or_default();

        let existing = bucket
            .iter()
            .position(|member| arena.get(*member).equivalent_to(hypothesis));

        let outcome = match existing {
            None => {
                bucket.push(candidate);
                self.len += 1;
                self.stats.added += 1;
                AddOutcome::Added
            }
            Some(pos) => {
                let incumbent = bucket[pos];
                // Strictly better only: the incumbent keeps exact ties.
                if hypothesis.total_score() > arena.get(incumbent).total_score() {
                    bucket[pos] = candidate;
                    self.stats.recombined += 1;
                    AddOutcome::Recombined { evicted: incumbent }
                } else {
                    self.stats.rejected += 1;
                    AddOutcome::Rejected {
                        survivor: incumbent,
                    }
                }
            }
        };

        tracing::trace!(
            ?candidate,
            key,
            score = hypothesis.total_score(),
            ?outcome,
            "stack add"
        );
        debug_assert!(self.recombination_invariant_holds(arena, key));
        outcome
    }

    /// Best `k` members by score, in no particular order unless
    /// `k >= self.len()`, in which case every member is returned sorted.
    ///
    /// Members tied with the `k`-th best score may or may not make the cut;
    /// callers that need a sorted beam must sort the result themselves.
    pub fn best(&self, arena: &HypothesisArena, k: usize) -> Vec<HypothesisId> {
        if k >= self.len {
            return self.sorted(arena);
        }

        let mut ids = self.ids().collect::<Vec<_>>();
        partition_top_k(&mut ids, k, |left, right| arena.rank_cmp(*left, *right));
        tracing::debug!(members = self.len, k, kept = ids.len(), "stack best");
        ids
    }

    /// Every member, best first.
    pub fn sorted(&self, arena: &HypothesisArena) -> Vec<HypothesisId> {
        let mut ids = self.ids().collect::<Vec<_>>();
        ids.sort_unstable_by(|left, right| arena.rank_cmp(*left, *right));
        ids
    }

    /// Keeps only `best(k)` and returns the ids that were dropped.
    pub fn prune(&mut self, arena: &HypothesisArena, k: usize) -> Vec<HypothesisId> {
        if k >= self.len {
            return Vec::new();
        }

        let mut ids = self.ids().collect::<Vec<_>>();
        ids.sort_unstable_by(|left, right| arena.rank_cmp(*left, *right));
        let pruned = ids.split_off(k);

        for id in &pruned {
            let key = arena.get(*id).recombination_key();
            if let Some(bucket) = self.buckets.get_mut(&key) {
                bucket.retain(|member| *member != *id);
                if bucket.is_empty() {
                    self.buckets.remove(&key);
                }
            }
        }
        self.len -= pruned.len();
        tracing::debug!(kept = self.len, pruned = pruned.len(), "stack prune");
        pruned
    }

    /// Members in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = HypothesisId> + '_ {
        self.buckets.values().flat_map(|bucket| bucket.iter().copied())
    }

    pub fn contains(&self, arena: &HypothesisArena, id: HypothesisId) -> bool {
        self.buckets
            .get(&arena.get(id).recombination_key())
            .is_some_and(|bucket| bucket.contains(&id))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stats(&self) -> StackStats {
        self.stats
    }

    pub fn into_ids(self) -> Vec<HypothesisId> {
        self.buckets.into_values().flatten().collect()
    }

    fn recombination_invariant_holds(
        &self,
        arena: &HypothesisArena,
        key: RecombinationKey,
    ) -> bool {
        let Some(bucket) = self.buckets.get(&key) else {
            return true;
        };
        bucket.iter().enumerate().all(|(ix, left)| {
            bucket[ix + 1..]
                .iter()
                .all(|right| !arena.get(*left).equivalent_to(arena.get(*right)))
        })
    }
}
