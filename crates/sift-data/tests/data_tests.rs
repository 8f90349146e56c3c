// Tests for sift-data: first-last ordering, loaders, train/validation split

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sift_data::{
    sequence_indices, split_loaders, split_loaders_with_rng, DataLoader, DataSource, Dataset,
    Error, FirstLastSampler, LoaderConfig, SplitConfig,
};

// Simple in-memory dataset for testing: item i is (i, label)

struct ToyDataset {
    n: usize,
}

impl DataSource for ToyDataset {
    fn len(&self) -> usize {
        self.n
    }
}

impl Dataset for ToyDataset {
    type Item = (usize, u8);

    fn get(&self, index: usize) -> (usize, u8) {
        assert!(index < self.n, "index {index} out of range");
        (index, (index % 3) as u8)
    }

    fn name(&self) -> &str {
        "toy"
    }
}

fn toy(n: usize) -> Arc<ToyDataset> {
    Arc::new(ToyDataset { n })
}

fn ids(batches: &[Vec<(usize, u8)>]) -> Vec<usize> {
    batches.iter().flatten().map(|&(i, _)| i).collect()
}

// First-last ordering

#[test]
fn test_sequence_indices_literal_cases() {
    let cases: [(usize, &[usize]); 5] = [
        (0, &[]),
        (1, &[0]),
        (2, &[0, 1]),
        (5, &[0, 4, 1, 3, 2]),
        (6, &[0, 5, 1, 4, 2, 3]),
    ];
    for (n, expected) in cases {
        let ds = ToyDataset { n };
        let (seq, len) = sequence_indices(&ds);
        assert_eq!(len, n);
        assert_eq!(seq.collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_first_last_loader_batches() {
    let ds = toy(6);
    let sampler = FirstLastSampler::new(ds.clone());
    let mut loader = DataLoader::new(ds, sampler, LoaderConfig::default().batch_size(4));

    for _ in 0..2 {
        let batches = loader.epoch_batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(ids(&batches), vec![0, 5, 1, 4, 2, 3]);
    }
}

// Train / validation split

#[test]
fn test_split_sizes_and_disjointness() {
    for &(n, ratio) in &[(100, 0.2), (101, 0.33), (10, 0.95), (3, 0.5), (0, 0.5)] {
        let (mut train, mut valid) =
            split_loaders(toy(n), ratio, &SplitConfig::default().batch_size(7)).unwrap();

        let expected_valid = (ratio * n as f64).floor() as usize;
        assert_eq!(valid.len(), expected_valid);
        assert_eq!(train.len(), n - expected_valid);

        let train_ids: HashSet<usize> = ids(&train.epoch_batches()).into_iter().collect();
        let valid_ids: HashSet<usize> = ids(&valid.epoch_batches()).into_iter().collect();
        assert_eq!(train_ids.len(), n - expected_valid);
        assert_eq!(valid_ids.len(), expected_valid);
        assert!(train_ids.is_disjoint(&valid_ids));
        let all: HashSet<usize> = train_ids.union(&valid_ids).copied().collect();
        assert_eq!(all, (0..n).collect::<HashSet<_>>());
    }
}

#[test]
fn test_split_rejects_invalid_ratios() {
    for &ratio in &[0.0, 1.0, -0.1, 1.5] {
        match split_loaders(toy(10), ratio, &SplitConfig::default()) {
            Err(Error::InvalidRatio { ratio: got }) => assert_eq!(got, ratio),
            Ok(_) => panic!("ratio {ratio} should be rejected"),
        }
    }
}

#[test]
fn test_split_batches_stay_within_subset() {
    let (mut train, mut valid) =
        split_loaders(toy(200), 0.25, &SplitConfig::default().batch_size(16)).unwrap();

    let train_members: HashSet<usize> = train.sampler().indices().iter().copied().collect();
    let valid_members: HashSet<usize> = valid.sampler().indices().iter().copied().collect();

    for _ in 0..3 {
        for batch in train.iter_batches() {
            assert!(batch.len() <= 16);
            assert!(batch.iter().all(|(i, _)| train_members.contains(i)));
        }
        for batch in valid.iter_batches() {
            assert!(batch.len() <= 16);
            assert!(batch.iter().all(|(i, _)| valid_members.contains(i)));
        }
    }
}

#[test]
fn test_split_membership_fixed_across_epochs() {
    let (mut train, _valid) = split_loaders(toy(64), 0.5, &SplitConfig::default()).unwrap();

    let mut first = ids(&train.epoch_batches());
    let mut second = ids(&train.epoch_batches());
    first.sort_unstable();
    second.sort_unstable();
    assert_eq!(first, second);
}

#[test]
fn test_seeded_split_is_reproducible() {
    let config = SplitConfig::default().batch_size(10).seed(42);
    let (mut t1, mut v1) = split_loaders(toy(120), 0.3, &config).unwrap();
    let (mut t2, mut v2) = split_loaders(toy(120), 0.3, &config).unwrap();

    assert_eq!(t1.sampler().indices(), t2.sampler().indices());
    assert_eq!(v1.sampler().indices(), v2.sampler().indices());
    for _ in 0..2 {
        assert_eq!(t1.epoch_batches(), t2.epoch_batches());
        assert_eq!(v1.epoch_batches(), v2.epoch_batches());
    }
}

#[test]
fn test_split_with_injected_rng() {
    let config = SplitConfig::default().batch_size(5).num_workers(0);
    let mut rng_a = StdRng::seed_from_u64(3);
    let mut rng_b = StdRng::seed_from_u64(3);
    let (ta, va) = split_loaders_with_rng(toy(30), 0.4, &config, &mut rng_a).unwrap();
    let (tb, vb) = split_loaders_with_rng(toy(30), 0.4, &config, &mut rng_b).unwrap();

    assert_eq!(ta.sampler().indices(), tb.sampler().indices());
    assert_eq!(va.sampler().indices(), vb.sampler().indices());
    assert_eq!(va.len(), 12);
    assert_eq!(ta.num_workers(), 0);
}

#[test]
fn test_split_shares_dataset() {
    let ds = toy(10);
    let (train, valid) = split_loaders(ds.clone(), 0.5, &SplitConfig::default()).unwrap();
    assert!(Arc::ptr_eq(train.dataset(), &ds));
    assert!(Arc::ptr_eq(valid.dataset(), &ds));
    assert_eq!(train.dataset().name(), "toy");
}
