// Samplers: strategies for ordering or selecting dataset indices

mod first_last;
mod random;
mod sequential;
mod subset_random;

pub use first_last::{first_last_order, sequence_indices, FirstLast, FirstLastSampler};
pub use random::RandomSampler;
pub use sequential::SequentialSampler;
pub use subset_random::SubsetRandomSampler;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// An iterator over dataset indices for one pass.
pub type IndexIter<'a> = Box<dyn Iterator<Item = usize> + Send + 'a>;

/// A `Sampler` decides which dataset indices a pass visits and in what order.
///
/// Every call to [`iter`](Sampler::iter) computes a fresh pass; samplers keep
/// no cursor between passes. `epoch` lets seeded samplers vary their order
/// from pass to pass while staying reproducible. Deterministic samplers
/// ignore it.
///
/// Implementations must be `Send + Sync` so a loader can be moved across
/// threads.
pub trait Sampler: Send + Sync {
    /// Number of indices a pass yields.
    fn len(&self) -> usize;

    /// Whether a pass yields no indices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce the indices for pass number `epoch`.
    fn iter(&self, epoch: usize) -> IndexIter<'_>;
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn iter(&self, epoch: usize) -> IndexIter<'_> {
        (**self).iter(epoch)
    }
}

/// Per-pass RNG for a seeded sampler: same `(seed, epoch)`, same stream.
pub(crate) fn epoch_rng(seed: u64, epoch: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(epoch as u64))
}
