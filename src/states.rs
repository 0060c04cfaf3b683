use crate::types::WordId;
use smallvec::SmallVec;

/// Language-model history: the last `order - 1` target words.
///
/// Two hypotheses ending in the same context receive identical scores for
/// every continuation, so they recombine.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct NgramState {
    context: SmallVec<[WordId; 4]>,
}

impl NgramState {
    pub fn begin_sentence(bos: WordId) -> Self {
        Self {
            context: SmallVec::from_slice(&[bos]),
        }
    }

    pub fn from_context(context: &[WordId], order: usize) -> Self {
        let keep = order.saturating_sub(1);
        let start = context.len().saturating_sub(keep);
        Self {
            context: SmallVec::from_slice(&context[start..]),
        }
    }

    pub fn extended(&self, words: &[WordId], order: usize) -> Self {
        let keep = order.saturating_sub(1);
        if words.len() >= keep {
            return Self::from_context(words, order);
        }

        let mut context = SmallVec::<[WordId; 4]>::with_capacity(keep);
        let carried = keep - words.len();
        let start = self.context.len().saturating_sub(carried);
        context.extend_from_slice(&self.context[start..]);
        context.extend_from_slice(words);
        Self { context }
    }

    pub fn context(&self) -> &[WordId] {
        &self.context
    }
}

/// End of the most recently translated source span, for distance-based
/// reordering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DistortionState {
    pub last_source_end: Option<u32>,
}

impl DistortionState {
    pub fn after_span(end: u32) -> Self {
        Self {
            last_source_end: Some(end),
        }
    }

    /// Jump width from the previous span to a span starting at `start`.
    pub fn distance_to(&self, start: u32) -> u32 {
        let expected = self.last_source_end.map_or(0, |end| end + 1);
        expected.abs_diff(start)
    }
}
