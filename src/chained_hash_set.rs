use std::mem;

use log::debug;

use crate::{
    primes::next_prime,
    utils::{TableHash, reduce},
};

/// Number of buckets requested by [`ChainedHashSet::new`]
pub const DEFAULT_TABLE_SIZE: usize = 101;

/// A chain of elements that share a bucket index
type Bucket<T> = Vec<T>;

/// A hash set resolving collisions by separate chaining.
///
/// Every bucket holds the elements whose hash code reduces to its index. The bucket
/// array always has a prime length, and it grows to the next prime at or above
/// twice its size as soon as the number of elements exceeds the number of buckets.
///
/// Inserting an element that is already present and removing one that is absent
/// are silent no-ops.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ChainedHashSet<T> {
    /// The chains, one per bucket
    buckets: Vec<Bucket<T>>,
    /// Current number of elements in the hash set
    size: usize,
}

impl<T> Default for ChainedHashSet<T>
where
    T: Eq + TableHash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ChainedHashSet<T>
where
    T: Eq + TableHash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for ChainedHashSet<T>
where
    T: Eq + TableHash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> ChainedHashSet<T>
where
    T: Eq + TableHash,
{
    /// Creates a new `ChainedHashSet` with [`DEFAULT_TABLE_SIZE`] buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Creates a new `ChainedHashSet` with at least `capacity` buckets.
    ///
    /// The bucket count is the next prime at or above `capacity`; a capacity of 0
    /// is clamped to 1 first.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = next_prime(capacity.max(1));
        debug!("creating chained hash set with {capacity} buckets");

        Self { buckets: empty_buckets(capacity), size: 0 }
    }

    /// Gets the index of the bucket `item` belongs to
    fn bucket_index(&self, item: &T) -> usize {
        reduce(item.table_hash(), self.buckets.len())
    }

    /// Inserts `item` unless an equal element is already stored.
    ///
    /// Rehashes when the number of elements exceeds the number of buckets.
    pub fn insert(&mut self, item: T) {
        let index = self.bucket_index(&item);
        let Some(bucket) = self.buckets.get_mut(index) else {
            return;
        };

        if bucket.contains(&item) {
            return;
        }

        bucket.push(item);
        self.size = self.size.saturating_add(1);

        if self.size > self.buckets.len() {
            self.rehash();
        }
    }

    /// Returns true if an element equal to `item` is stored
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.buckets.get(self.bucket_index(item)).is_some_and(|bucket| bucket.contains(item))
    }

    /// Removes the element equal to `item`, if any
    pub fn remove(&mut self, item: &T) {
        let index = self.bucket_index(item);
        let Some(bucket) = self.buckets.get_mut(index) else {
            return;
        };

        if let Some(position) = bucket.iter().position(|stored| stored == item) {
            bucket.swap_remove(position);
            self.size = self.size.saturating_sub(1);
        }
    }

    /// Removes every element, keeping the current number of buckets
    pub fn make_empty(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Returns the number of elements in the hash set
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the hash set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the hash set
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the hash set
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Moves every element into a bucket array of `next_prime(2 * capacity)` buckets
    fn rehash(&mut self) {
        let new_capacity = next_prime(self.buckets.len().saturating_mul(2));
        debug!(
            "rehashing {} elements from {} to {new_capacity} buckets",
            self.size,
            self.buckets.len()
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.size = 0;

        // new_capacity > old element count, so these inserts never rehash again
        for item in old_buckets.into_iter().flatten() {
            self.insert(item);
        }
    }

    /// Returns the length of every chain, in bucket order
    #[cfg(test)]
    pub(crate) fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }
}

/// Allocates `capacity` empty chains
fn empty_buckets<T>(capacity: usize) -> Vec<Bucket<T>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}
