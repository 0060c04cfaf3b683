use crate::error::{Result, StackError};
use crate::features::{FeatureSet, FfState};
use crate::types::{FeatureId, HypothesisId, RecombinationKey, Score, WordId};
use rustc_hash::FxHasher;
use smallvec::SmallVec;
use std::any::Any;
use std::hash::Hasher;

pub(crate) type StateVec = SmallVec<[Box<dyn FfState>; 2]>;

/// One partial translation. Immutable once built.
#[derive(Debug)]
pub struct Hypothesis {
    total_score: Score,
    recombination_key: RecombinationKey,
    states: StateVec,
    parent: Option<HypothesisId>,
    target: SmallVec<[WordId; 4]>,
}

impl Hypothesis {
    pub fn builder(features: &FeatureSet) -> HypothesisBuilder<'_> {
        HypothesisBuilder::new(features)
    }

    pub fn total_score(&self) -> Score {
        self.total_score
    }

    /// Combined hash of every attached state, fixed at construction.
    pub fn recombination_key(&self) -> RecombinationKey {
        self.recombination_key
    }

    /// True iff every feature state compares equal. The key only filters;
    /// colliding keys with different states are not equivalent.
    pub fn equivalent_to(&self, other: &Hypothesis) -> bool {
        self.recombination_key == other.recombination_key
            && self.states.len() == other.states.len()
            && self
                .states
                .iter()
                .zip(other.states.iter())
                .all(|(left, right)| left.state_eq(&**right))
    }

    pub fn parent(&self) -> Option<HypothesisId> {
        self.parent
    }

    pub fn target(&self) -> &[WordId] {
        &self.target
    }

    pub fn state(&self, feature: FeatureId) -> Option<&dyn FfState> {
        self.states.get(feature.index()).map(|state| &**state)
    }

    /// Typed view of one feature's state, for the scorer that owns it.
    pub fn state_as<S: FfState>(&self, feature: FeatureId) -> Option<&S> {
        self.state(feature)
            .and_then(|state| state.as_any().downcast_ref::<S>())
    }

    pub fn states(&self) -> impl Iterator<Item = &(dyn FfState + 'static)> {
        self.states.iter().map(|state| &**state)
    }
}

pub(crate) fn combine_state_hashes(states: &[Box<dyn FfState>]) -> RecombinationKey {
    let mut hasher = FxHasher::default();
    for state in states {
        hasher.write_u64(state.state_hash());
    }
    hasher.finish()
}

/// Builds a [`Hypothesis`] against a [`FeatureSet`], checking that every
/// registered feature supplied a state of its declared type.
pub struct HypothesisBuilder<'a> {
    features: &'a FeatureSet,
    total_score: Score,
    states: SmallVec<[Option<Box<dyn FfState>>; 2]>,
    parent: Option<HypothesisId>,
    target: SmallVec<[WordId; 4]>,
    unknown_feature: Option<FeatureId>,
}

impl<'a> HypothesisBuilder<'a> {
    fn new(features: &'a FeatureSet) -> Self {
        let mut states = SmallVec::with_capacity(features.len());
        states.resize_with(features.len(), || None);
        Self {
            features,
            total_score: 0.0,
            states,
            parent: None,
            target: SmallVec::new(),
            unknown_feature: None,
        }
    }

    pub fn score(mut self, total_score: Score) -> Self {
        self.total_score = total_score;
        self
    }

    pub fn parent(mut self, parent: HypothesisId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn target(mut self, words: &[WordId]) -> Self {
        self.target = SmallVec::from_slice(words);
        self
    }

    pub fn state<S: FfState>(self, feature: FeatureId, state: S) -> Self {
        self.boxed_state(feature, Box::new(state))
    }

    pub fn boxed_state(mut self, feature: FeatureId, state: Box<dyn FfState>) -> Self {
        match self.states.get_mut(feature.index()) {
            Some(slot) => *slot = Some(state),
            None => {
                self.unknown_feature.get_or_insert(feature);
            }
        }
        self
    }

    pub fn build(self) -> Result<Hypothesis> {
        if let Some(feature) = self.unknown_feature {
            return Err(StackError::UnknownFeature(feature));
        }
        if self.total_score.is_nan() {
            return Err(StackError::NanScore);
        }

        let mut states = StateVec::with_capacity(self.states.len());
        for (slot, state) in self.features.slots().iter().zip(self.states) {
            let Some(state) = state else {
                return Err(StackError::MissingState {
                    feature: slot.name.clone(),
                });
            };
            if <dyn Any>::type_id(state.as_any()) != slot.state_type {
                return Err(StackError::StateTypeMismatch {
                    feature: slot.name.clone(),
                    expected: slot.state_type_name,
                    actual: state.state_type_name(),
                });
            }
            states.push(state);
        }

        let recombination_key = combine_state_hashes(&states);
        Ok(Hypothesis {
            total_score: self.total_score,
            recombination_key,
            states,
            parent: self.parent,
            target: self.target,
        })
    }
}
