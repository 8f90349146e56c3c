use super::{IndexIter, Sampler};

/// Visits `0..n` in order on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialSampler {
    n: usize,
}

impl SequentialSampler {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Sampler for SequentialSampler {
    fn len(&self) -> usize {
        self.n
    }

    fn iter(&self, _epoch: usize) -> IndexIter<'_> {
        Box::new(0..self.n)
    }
}
