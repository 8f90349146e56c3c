//! # sift-data
//!
//! Index sampling, batching and train/validation splitting for training
//! pipelines.
//!
//! This crate provides:
//! - [`Dataset`] / [`DataSource`] traits: capability interfaces for any backing store
//! - [`Sampler`] trait and samplers, including the first-last [`FirstLastSampler`]
//! - [`DataLoader`]: batching and optional rayon-parallel fetching over a sampler
//! - [`split_loaders`]: disjoint random train/validation split with one loader per side
//   - Dataset combinators: VecDataset, SubsetDataset
//   - Seeded, reproducible splits and per-epoch orders via `SplitConfig::seed`

pub mod combinators;
pub mod dataset;
pub mod loader;
pub mod sampler;
pub mod split;

pub use combinators::{SubsetDataset, VecDataset};
pub use dataset::{DataSource, Dataset};
pub use loader::{Batches, DataLoader, LoaderConfig};
pub use sampler::{
    first_last_order, sequence_indices, FirstLast, FirstLastSampler, IndexIter, RandomSampler,
    Sampler, SequentialSampler, SubsetRandomSampler,
};
pub use split::{
    random_split, split_indices, split_loaders, split_loaders_with_rng, validate_ratio,
    SplitConfig, SplitIndices, SplitLoaders,
};

pub use sift_core::{Error, Result};
