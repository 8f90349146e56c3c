// First-last ordering: 0, N-1, 1, N-2, ... meeting in the middle

use std::iter::FusedIterator;

use crate::dataset::DataSource;

use super::{IndexIter, Sampler};

/// Lazy first-last permutation of `0..n`.
///
/// Alternates between the lowest and highest index not yet emitted, so for
/// `n = 6` it yields `[0, 5, 1, 4, 2, 3]` and for `n = 5` it yields
/// `[0, 4, 1, 3, 2]`. The middle element of an odd-length range is emitted
/// once.
#[derive(Debug, Clone)]
pub struct FirstLast {
    n: usize,
    pos: usize,
}

impl FirstLast {
    /// The index emitted at output position `k`.
    fn at(&self, k: usize) -> usize {
        if k % 2 == 0 {
            k / 2
        } else {
            self.n - 1 - k / 2
        }
    }
}

impl Iterator for FirstLast {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pos >= self.n {
            return None;
        }
        let idx = self.at(self.pos);
        self.pos += 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.pos;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, skip: usize) -> Option<usize> {
        self.pos = self.pos.saturating_add(skip).min(self.n);
        self.next()
    }
}

impl ExactSizeIterator for FirstLast {}

impl FusedIterator for FirstLast {}

/// First-last ordering of `0..n`.
pub fn first_last_order(n: usize) -> FirstLast {
    FirstLast { n, pos: 0 }
}

/// Order `source`'s indices first-last.
///
/// Returns the lazy sequence together with its length, which is the source's
/// length at the time of the call.
pub fn sequence_indices<S: DataSource + ?Sized>(source: &S) -> (FirstLast, usize) {
    let n = source.len();
    (first_last_order(n), n)
}

/// A [`Sampler`] that walks its source in first-last order.
///
/// The source's length is queried on every pass, so a sampler over a growing
/// collection picks up the new length on its next [`iter`](Sampler::iter).
#[derive(Debug, Clone)]
pub struct FirstLastSampler<S> {
    source: S,
}

impl<S: DataSource> FirstLastSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: DataSource + Send + Sync> Sampler for FirstLastSampler<S> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn iter(&self, _epoch: usize) -> IndexIter<'_> {
        Box::new(first_last_order(self.source.len()))
    }
}
