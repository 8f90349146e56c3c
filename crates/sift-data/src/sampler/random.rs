use rand::seq::SliceRandom;
use rand::thread_rng;

use super::{epoch_rng, IndexIter, Sampler};

/// Visits every index of `0..n` once per pass, in a fresh random order.
///
/// Unseeded samplers draw from the thread-local RNG, so two passes (or two
/// samplers) almost never agree. With [`with_seed`](RandomSampler::with_seed)
/// the order for a given epoch is reproducible.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    n: usize,
    seed: Option<u64>,
}

impl RandomSampler {
    pub fn new(n: usize) -> Self {
        Self { n, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Sampler for RandomSampler {
    fn len(&self) -> usize {
        self.n
    }

    fn iter(&self, epoch: usize) -> IndexIter<'_> {
        let mut indices: Vec<usize> = (0..self.n).collect();
        match self.seed {
            Some(seed) => indices.shuffle(&mut epoch_rng(seed, epoch)),
            None => indices.shuffle(&mut thread_rng()),
        }
        Box::new(indices.into_iter())
    }
}
