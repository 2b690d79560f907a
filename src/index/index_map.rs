//! # IndexMap: key -> `i32` map with separate chaining.
//!
//! ## Internal scheme
//! ```text
//! table: [bucket 0][bucket 1] ... [bucket cap-1]     cap is a power of two
//!            │
//!            └─► [Entry{key, value}] ─► [Entry{key, value}] ─► ...
//!
//! bucket(key) = hash(key) & (cap - 1)
//! ```
//!
//! ## Rules
//! - `put` overwrites in place when the key exists.
//! - Before inserting a new key, the table doubles once `len >= cap * 0.75`;
//!   every entry is re-bucketed under the new capacity.
//! - No ordering guarantee across keys.
//! - Key lookup uses `Eq` (value equality), hashing uses the configured `BuildHasher`.
//! - A miss is `None`, so a stored `-1` is distinguishable from an absent key.
//!
//! ## Example
//! ```rust
//! use tinyevents::IndexMap;
//!
//! let mut map = IndexMap::new();
//! assert_eq!(map.get(&"absent"), None);
//!
//! map.put("a", 1);
//! map.put("a", -1);
//! assert_eq!(map.get(&"a"), Some(-1));
//! assert_eq!(map.len(), 1);
//!
//! assert_eq!(map.remove(&"a"), Some(-1));
//! assert!(map.is_empty());
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Initial number of buckets.
const INITIAL_CAPACITY: usize = 16;

/// Growth threshold expressed as `LOAD_NUM / LOAD_DEN` (0.75).
const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;

struct Entry<K> {
    key: K,
    value: i32,
}

/// Chained hash map from `K` to `i32`.
pub struct IndexMap<K, S = ahash::RandomState> {
    table: Vec<Vec<Entry<K>>>,
    len: usize,
    hasher: S,
}

impl<K: Hash + Eq> IndexMap<K, ahash::RandomState> {
    /// Creates an empty map with 16 buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty map with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to a power of two (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, ahash::RandomState::new())
    }
}

impl<K: Hash + Eq> Default for IndexMap<K, ahash::RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> IndexMap<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the given bucket count and hasher.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            table: Self::empty_table(capacity.max(1).next_power_of_two()),
            len: 0,
            hasher,
        }
    }

    /// Inserts `value` for `key`, overwriting any previous value.
    pub fn put(&mut self, key: K, value: i32) {
        let index = self.bucket(&key);
        if let Some(entry) = self.table[index].iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return;
        }

        if self.len * LOAD_DEN >= self.table.len() * LOAD_NUM {
            self.grow();
        }

        let index = self.bucket(&key);
        self.table[index].push(Entry { key, value });
        self.len += 1;
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &K) -> Option<i32> {
        self.table[self.bucket(key)]
            .iter()
            .find(|e| e.key == *key)
            .map(|e| e.value)
    }

    /// True if `key` has a value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` and returns its value.
    ///
    /// The size only shrinks when an entry was actually removed.
    pub fn remove(&mut self, key: &K) -> Option<i32> {
        let index = self.bucket(key);
        let bucket = &mut self.table[index];
        let pos = bucket.iter().position(|e| e.key == *key)?;
        let entry = bucket.swap_remove(pos);
        self.len -= 1;
        Some(entry.value)
    }

    /// Removes every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        for bucket in &mut self.table {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates over all entries in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, i32)> + '_ {
        self.table
            .iter()
            .flat_map(|bucket| bucket.iter().map(|e| (&e.key, e.value)))
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    #[inline]
    fn bucket(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) as usize) & (self.table.len() - 1)
    }

    /// Doubles the bucket count and redistributes every entry.
    fn grow(&mut self) {
        let new_capacity = self.table.len() * 2;
        let old = std::mem::replace(&mut self.table, Self::empty_table(new_capacity));
        for entry in old.into_iter().flatten() {
            let index = self.bucket(&entry.key);
            self.table[index].push(entry);
        }
    }

    fn empty_table(capacity: usize) -> Vec<Vec<Entry<K>>> {
        std::iter::repeat_with(Vec::new).take(capacity).collect()
    }
}

impl<K, S> IndexMap<K, S> {
    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }
}

impl<K: fmt::Debug, S> fmt::Debug for IndexMap<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.table
                    .iter()
                    .flat_map(|bucket| bucket.iter().map(|e| (&e.key, e.value))),
            )
            .finish()
    }
}
