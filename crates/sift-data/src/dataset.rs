// Dataset traits: capability interfaces for anything a sampler or loader reads

use std::ops::Range;
use std::sync::Arc;

/// Anything with a known number of elements.
///
/// Samplers only need a length, so they accept a `DataSource` rather than a
/// full [`Dataset`].
pub trait DataSource {
    /// Total number of elements.
    fn len(&self) -> usize;

    /// Whether the source is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dataset is an indexed collection of items.
///
/// Implementations must be `Send + Sync` so a [`DataLoader`](crate::DataLoader)
/// can read from multiple threads when parallel fetching is enabled.
pub trait Dataset: DataSource + Send + Sync {
    /// The element type produced by [`get`](Dataset::get).
    type Item: Send;

    /// Retrieve the item at position `index`.
    ///
    /// # Panics
    /// May panic if `index >= self.len()`.
    fn get(&self, index: usize) -> Self::Item;

    /// Optional human-readable name.
    fn name(&self) -> &str {
        "dataset"
    }
}

impl<T> DataSource for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> DataSource for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl DataSource for Range<usize> {
    fn len(&self) -> usize {
        ExactSizeIterator::len(self)
    }
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: DataSource + ?Sized> DataSource for Arc<S> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<D: Dataset + ?Sized> Dataset for Arc<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> Self::Item {
        (**self).get(index)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
