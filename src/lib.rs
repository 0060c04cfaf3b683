//! Search-space management for a phrase-based translation decoder.
//!
//! A [`Stack`] holds partial translations ([`Hypothesis`]) of comparable
//! progress. Offering a candidate either adds it, replaces an equivalent
//! member it outscores, or is rejected; equivalence is decided by the
//! recombination state each stateful feature function attaches
//! ([`FfState`]). The search loop then reads the stack back as a bounded
//! beam ([`Stack::best`]) or a fully sorted list ([`Stack::sorted`]).
//!
//! Hypotheses live in a per-run [`HypothesisArena`]; stacks and parent links
//! refer to them by [`HypothesisId`].

mod arena;
mod beam;
mod error;
mod features;
mod hypothesis;
mod interner;
mod select;
mod stack;
mod states;
mod types;


pub use arena::HypothesisArena;
pub use beam::{select_beams, sorted_beam};
pub use error::{Result, StackError};
pub use features::{FeatureSet, FfState};
pub use hypothesis::{Hypothesis, HypothesisBuilder};
pub use interner::Vocabulary;
pub use select::partition_top_k;
pub use stack::{AddOutcome, Stack, StackStats};
pub use states::{DistortionState, NgramState};
pub use types::{
    BeamConfig, FeatureId, HypothesisId, RecombinationKey, Score, WordId, DEFAULT_BEAM_WIDTH,
    PARALLEL_BEAM_THRESHOLD,
};
