// Dataset combinators: in-memory datasets and index-restricted views

use std::sync::Arc;

use crate::dataset::{DataSource, Dataset};

// VecDataset: in-memory dataset from a vector of items

/// A simple in-memory dataset backed by a `Vec<T>`.
///
/// `get` clones the stored item, so cheap-to-clone items (or `Arc`-wrapped
/// ones) work best.
#[derive(Debug, Clone)]
pub struct VecDataset<T> {
    items: Vec<T>,
    dataset_name: String,
}

impl<T> VecDataset<T> {
    /// Create a VecDataset from a vector of items.
    pub fn new(items: Vec<T>, name: &str) -> Self {
        Self {
            items,
            dataset_name: name.to_string(),
        }
    }

    /// Borrow the stored items.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for VecDataset<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items, "vec")
    }
}

impl<T> DataSource for VecDataset<T> {
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Clone + Send + Sync> Dataset for VecDataset<T> {
    type Item = T;

    fn get(&self, index: usize) -> T {
        self.items[index].clone()
    }

    fn name(&self) -> &str {
        &self.dataset_name
    }
}

// SubsetDataset: view of selected indices

/// A dataset that exposes only the items at the given indices of a shared
/// inner dataset.
///
/// Index `i` of the subset maps to `indices[i]` of the inner dataset.
pub struct SubsetDataset<D: Dataset> {
    inner: Arc<D>,
    indices: Vec<usize>,
}

impl<D: Dataset> SubsetDataset<D> {
    /// Create a subset of `inner` containing only the items at `indices`.
    ///
    /// # Panics
    /// Panics (lazily, at `get` time) if any index is out of range.
    pub fn new(inner: Arc<D>, indices: Vec<usize>) -> Self {
        Self { inner, indices }
    }

    /// Indices into the inner dataset, in subset order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The dataset this subset is a view of.
    pub fn inner(&self) -> &Arc<D> {
        &self.inner
    }
}

impl<D: Dataset> DataSource for SubsetDataset<D> {
    fn len(&self) -> usize {
        self.indices.len()
    }
}

impl<D: Dataset> Dataset for SubsetDataset<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> D::Item {
        self.inner.get(self.indices[index])
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
