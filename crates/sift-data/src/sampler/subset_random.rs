use rand::seq::SliceRandom;
use rand::thread_rng;

use super::{epoch_rng, IndexIter, Sampler};

/// Visits a fixed subset of indices once per pass, in a fresh random order.
///
/// Membership never changes after construction; only the order within the
/// subset is redrawn on each call to [`iter`](Sampler::iter).
#[derive(Debug, Clone)]
pub struct SubsetRandomSampler {
    indices: Vec<usize>,
    seed: Option<u64>,
}

impl SubsetRandomSampler {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The indices this sampler draws from, in construction order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl Sampler for SubsetRandomSampler {
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn iter(&self, epoch: usize) -> IndexIter<'_> {
        let mut order = self.indices.clone();
        match self.seed {
            Some(seed) => order.shuffle(&mut epoch_rng(seed, epoch)),
            None => order.shuffle(&mut thread_rng()),
        }
        Box::new(order.into_iter())
    }
}
