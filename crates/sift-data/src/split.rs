// Train / validation split: disjoint random membership, one loader per side

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, RngCore, SeedableRng};

use sift_core::{Error, Result};

use crate::combinators::SubsetDataset;
use crate::dataset::{DataSource, Dataset};
use crate::loader::{DataLoader, LoaderConfig};
use crate::sampler::SubsetRandomSampler;

/// Configuration for [`split_loaders`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitConfig {
    /// Number of items per batch, for both loaders.
    pub batch_size: usize,
    /// Worker count handed to both loaders.
    pub num_workers: usize,
    /// Whether both loaders drop their last incomplete batch.
    pub drop_last: bool,
    /// Optional random seed; pins both the partition and the per-epoch order.
    pub seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            num_workers: 2,
            drop_last: false,
            seed: None,
        }
    }
}

impl SplitConfig {
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

    pub fn seed(mut self, s: u64) -> Self {
        self.seed = Some(s);
        self
    }

    /// The loader configuration shared by both sides of the split.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::default()
            .batch_size(self.batch_size)
            .num_workers(self.num_workers)
            .drop_last(self.drop_last)
    }
}

/// Disjoint train / validation index sets covering `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub validation: Vec<usize>,
}

/// The (train, validation) loaders returned by [`split_loaders`].
pub type SplitLoaders<D> = (
    DataLoader<D, SubsetRandomSampler>,
    DataLoader<D, SubsetRandomSampler>,
);

/// Reject ratios outside the open interval `(0, 1)`. NaN is rejected too.
pub fn validate_ratio(ratio: f64) -> Result<()> {
    if ratio > 0.0 && ratio < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidRatio { ratio })
    }
}

/// Shuffle `0..n` with `rng` and cut it at `floor(validation_ratio * n)`.
///
/// The first `split` shuffled indices form the validation set, the rest the
/// training set.
pub fn split_indices<R: Rng + ?Sized>(
    n: usize,
    validation_ratio: f64,
    rng: &mut R,
) -> Result<SplitIndices> {
    validate_ratio(validation_ratio)?;

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let split = ((validation_ratio * n as f64).floor() as usize).min(n);
    let train = indices.split_off(split);

    tracing::debug!(
        total = n,
        train = train.len(),
        validation = indices.len(),
        validation_ratio,
        "split dataset indices"
    );

    Ok(SplitIndices {
        train,
        validation: indices,
    })
}

/// Split `dataset` into train / validation loaders using `rng` for the
/// partition.
///
/// When `config.seed` is set, each side's sampler also gets a seed drawn from
/// `rng`, so the per-epoch order is reproducible as well; otherwise the
/// samplers reshuffle from the thread-local RNG.
pub fn split_loaders_with_rng<D: Dataset, R: Rng + ?Sized>(
    dataset: Arc<D>,
    validation_ratio: f64,
    config: &SplitConfig,
    rng: &mut R,
) -> Result<SplitLoaders<D>> {
    let SplitIndices { train, validation } =
        split_indices(dataset.len(), validation_ratio, rng)?;

    let mut train_sampler = SubsetRandomSampler::new(train);
    let mut valid_sampler = SubsetRandomSampler::new(validation);
    if config.seed.is_some() {
        train_sampler = train_sampler.with_seed(rng.next_u64());
        valid_sampler = valid_sampler.with_seed(rng.next_u64());
    }

    let loader_config = config.loader_config();
    let dl_train = DataLoader::new(dataset.clone(), train_sampler, loader_config.clone());
    let dl_valid = DataLoader::new(dataset, valid_sampler, loader_config);
    Ok((dl_train, dl_valid))
}

/// Split `dataset` into train / validation loaders.
///
/// With `config.seed` unset the partition is drawn from the thread-local RNG
/// and differs between calls.
///
/// # Errors
/// [`Error::InvalidRatio`] if `validation_ratio` is not strictly between 0
/// and 1. Nothing is allocated in that case.
pub fn split_loaders<D: Dataset>(
    dataset: Arc<D>,
    validation_ratio: f64,
    config: &SplitConfig,
) -> Result<SplitLoaders<D>> {
    validate_ratio(validation_ratio)?;
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            split_loaders_with_rng(dataset, validation_ratio, config, &mut rng)
        }
        None => split_loaders_with_rng(dataset, validation_ratio, config, &mut thread_rng()),
    }
}

/// Split `dataset` into (train, validation) [`SubsetDataset`] views.
pub fn random_split<D: Dataset, R: Rng + ?Sized>(
    dataset: Arc<D>,
    validation_ratio: f64,
    rng: &mut R,
) -> Result<(SubsetDataset<D>, SubsetDataset<D>)> {
    let SplitIndices { train, validation } =
        split_indices(dataset.len(), validation_ratio, rng)?;
    Ok((
        SubsetDataset::new(dataset.clone(), train),
        SubsetDataset::new(dataset, validation),
    ))
}
