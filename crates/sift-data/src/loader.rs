// DataLoader: batching and (optionally parallel) fetching over a sampler

use std::sync::Arc;

use rayon::prelude::*;

use crate::dataset::Dataset;
use crate::sampler::{IndexIter, Sampler};

/// Configuration for the DataLoader.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoaderConfig {
    /// Number of items per batch.
    pub batch_size: usize,
    /// Number of parallel workers for item fetching (0 = sequential).
    pub num_workers: usize,
    /// Whether to drop the last incomplete batch.
    pub drop_last: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            num_workers: 0,
            drop_last: false,
        }
    }
}

impl LoaderConfig {
    pub fn batch_size(mut self, bs: usize) -> Self {
        self.batch_size = bs;
        self
    }

    pub fn num_workers(mut self, n: usize) -> Self {
        self.num_workers = n;
        self
    }

    pub fn drop_last(mut self, d: bool) -> Self {
        self.drop_last = d;
        self
    }
}

/// A DataLoader draws indices from a [`Sampler`] and groups the matching
/// dataset items into batches.
///
/// Each call to [`iter_batches`](DataLoader::iter_batches) starts a new
/// epoch: the sampler is asked for a fresh order and the epoch counter
/// advances, so seeded samplers produce a different (but reproducible) order
/// per epoch.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: Arc<D>,
    sampler: S,
    config: LoaderConfig,
    epoch: usize,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Create a new DataLoader over a dataset.
    ///
    /// # Panics
    /// Panics if `config.batch_size` is zero.
    pub fn new(dataset: Arc<D>, sampler: S, config: LoaderConfig) -> Self {
        assert!(config.batch_size > 0, "DataLoader: batch_size must be > 0");
        Self {
            dataset,
            sampler,
            config,
            epoch: 0,
        }
    }

    /// Number of items visited per epoch.
    pub fn len(&self) -> usize {
        self.sampler.len()
    }

    /// Whether an epoch visits no items.
    pub fn is_empty(&self) -> bool {
        self.sampler.is_empty()
    }

    /// The number of batches per epoch.
    pub fn num_batches(&self) -> usize {
        if self.config.drop_last {
            self.len() / self.config.batch_size
        } else {
            self.len().div_ceil(self.config.batch_size)
        }
    }

    pub fn batch_size(&self) -> usize {
        self.config.batch_size
    }

    pub fn num_workers(&self) -> usize {
        self.config.num_workers
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn dataset(&self) -> &Arc<D> {
        &self.dataset
    }

    /// Number of epochs started so far.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Iterate over one epoch of batches, fetching lazily.
    pub fn iter_batches(&mut self) -> Batches<'_, D> {
        let epoch = self.epoch;
        self.epoch += 1;
        tracing::trace!(
            dataset = self.dataset.name(),
            epoch,
            batches = self.num_batches(),
            "starting epoch"
        );
        Batches {
            dataset: &*self.dataset,
            indices: self.sampler.iter(epoch),
            batch_size: self.config.batch_size,
            num_workers: self.config.num_workers,
            drop_last: self.config.drop_last,
            remaining: self.num_batches(),
        }
    }

    /// Produce all batches for one epoch.
    pub fn epoch_batches(&mut self) -> Vec<Vec<D::Item>> {
        self.iter_batches().collect()
    }
}

/// Iterator that yields one batch at a time.
pub struct Batches<'l, D: Dataset> {
    dataset: &'l D,
    indices: IndexIter<'l>,
    batch_size: usize,
    num_workers: usize,
    drop_last: bool,
    remaining: usize,
}

/// Fetch items for a slice of indices, optionally in parallel via rayon.
fn fetch<D: Dataset>(dataset: &D, indices: &[usize], parallel: bool) -> Vec<D::Item> {
    if parallel && indices.len() > 1 {
        indices.par_iter().map(|&i| dataset.get(i)).collect()
    } else {
        indices.iter().map(|&i| dataset.get(i)).collect()
    }
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Vec<D::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let batch_indices: Vec<usize> = self.indices.by_ref().take(self.batch_size).collect();
        if batch_indices.is_empty() || (self.drop_last && batch_indices.len() < self.batch_size)
        {
            self.remaining = 0;
            return None;
        }
        self.remaining -= 1;
        Some(fetch(self.dataset, &batch_indices, self.num_workers > 0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
