use crate::arena::HypothesisArena;
use crate::stack::Stack;
use crate::types::{BeamConfig, HypothesisId};
use rayon::prelude::*;

/// `best(beam_width)` for every stack, positionally aligned with `stacks`.
///
/// Stacks share no mutable state, so once there are enough of them the
/// selections run on the rayon pool.
pub fn select_beams(
    stacks: &[Stack],
    arena: &HypothesisArena,
    config: &BeamConfig,
) -> Vec<Vec<HypothesisId>> {
    let beam_width = config.beam_width;
    tracing::debug!(
        stacks = stacks.len(),
        beam_width,
        parallel = stacks.len() >= config.parallel_threshold,
        "selecting beams"
    );

    if stacks.len() >= config.parallel_threshold {
        stacks
            .par_iter()
            .map(|stack| stack.best(arena, beam_width))
            .collect()
    } else {
        stacks
            .iter()
            .map(|stack| stack.best(arena, beam_width))
            .collect()
    }
}

/// Sorted beam for one stack: `best(beam_width)` ordered best first.
pub fn sorted_beam(
    stack: &Stack,
    arena: &HypothesisArena,
    config: &BeamConfig,
) -> Vec<HypothesisId> {
    let mut beam = stack.best(arena, config.beam_width);
    beam.sort_unstable_by(|left, right| arena.rank_cmp(*left, *right));
    beam
}
