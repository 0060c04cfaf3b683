use crate::error::{Result, StackError};
use crate::hypothesis::Hypothesis;
use crate::types::{validate_id_capacity, HypothesisId, WordId};
use std::cmp::Ordering;

/// Append-only store for every hypothesis created during one search run.
///
/// Stacks hold [`HypothesisId`]s into the arena. A hypothesis that loses
/// recombination stays allocated but unreferenced, so parent links from later
/// hypotheses never dangle. Dropping the arena releases the whole run.
#[derive(Debug, Default)]
pub struct HypothesisArena {
    hypotheses: Vec<Hypothesis>,
}

impl HypothesisArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hypotheses: Vec::with_capacity(capacity),
        }
    }

    pub fn alloc(&mut self, hypothesis: Hypothesis) -> Result<HypothesisId> {
        if let Some(parent) = hypothesis.parent() {
            if parent.index() >= self.hypotheses.len() {
                return Err(StackError::UnknownParent(parent));
            }
        }

        let id = HypothesisId(validate_id_capacity(self.hypotheses.len(), "hypothesis arena")?);
        self.hypotheses.push(hypothesis);
        Ok(id)
    }

    /// Panics if `id` was not allocated by this arena.
    pub fn get(&self, id: HypothesisId) -> &Hypothesis {
        &self.hypotheses[id.index()]
    }

    pub fn try_get(&self, id: HypothesisId) -> Option<&Hypothesis> {
        self.hypotheses.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (HypothesisId, &Hypothesis)> {
        self.hypotheses
            .iter()
            .enumerate()
            .map(|(ix, hypothesis)| (HypothesisId(ix as u32), hypothesis))
    }

    /// Ranking order: higher score first, earlier allocation first on an
    /// exact score tie.
    pub fn rank_cmp(&self, left: HypothesisId, right: HypothesisId) -> Ordering {
        self.get(right)
            .total_score()
            .total_cmp(&self.get(left).total_score())
            .then_with(|| left.cmp(&right))
    }

    /// Path from the root hypothesis down to `id`, inclusive.
    pub fn backtrace(&self, id: HypothesisId) -> Vec<HypothesisId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.get(current).parent() {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    pub fn depth(&self, id: HypothesisId) -> usize {
        self.backtrace(id).len() - 1
    }

    pub fn target_words(&self, id: HypothesisId) -> Vec<WordId> {
        self.backtrace(id)
            .into_iter()
            .flat_map(|step| self.get(step).target().iter().copied())
            .collect()
    }
}
