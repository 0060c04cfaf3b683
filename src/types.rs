use crate::error::{Result, StackError};

pub const DEFAULT_BEAM_WIDTH: usize = 100;
pub const PARALLEL_BEAM_THRESHOLD: usize = 8;

/// Natural-log score; higher is better.
pub type Score = f64;
pub type RecombinationKey = u64;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct HypothesisId(pub(crate) u32);

impl HypothesisId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct WordId(pub(crate) u32);

impl WordId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FeatureId(pub(crate) u16);

impl FeatureId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub(crate) fn validate_id_capacity(len: usize, what: &'static str) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        tracing::debug!(what, len, "id capacity exceeded");
        StackError::CapacityExceeded { what }
    })
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BeamConfig {
    pub beam_width: usize,
    pub parallel_threshold: usize,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
            parallel_threshold: PARALLEL_BEAM_THRESHOLD,
        }
    }
}

impl BeamConfig {
    pub fn new(beam_width: usize) -> Result<Self> {
        if beam_width == 0 {
            return Err(StackError::InvalidBeamWidth);
        }
        Ok(Self {
            beam_width,
            ..Self::default()
        })
    }

    /// Minimum number of stacks before beams are selected on the rayon pool.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}
