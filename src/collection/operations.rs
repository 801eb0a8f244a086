//! Pluggable container operations.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// How a collection reads and rewrites its container `C` of items `I`
/// addressed by `K`.
///
/// Implementations never mutate observable state: `set` and `remove` take
/// the container by value and return the new one. After `set(c, k, i)`,
/// `get` at `k` returns `i`; after `remove(c, k)` it returns `None`.
pub trait Operations<C, K, I>: Send + Sync + 'static {
    fn get<'a>(&self, items: &'a C, key: &K) -> Option<&'a I>;

    fn set(&self, items: C, key: K, item: I) -> C;

    fn remove(&self, items: C, key: &K) -> C;

    fn has(&self, items: &C, key: &K) -> bool {
        self.get(items, key).is_some()
    }
}

/// Operations for an ordered [`BTreeMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BTreeMapOps;

impl<K: Ord, I> Operations<BTreeMap<K, I>, K, I> for BTreeMapOps {
    fn get<'a>(&self, items: &'a BTreeMap<K, I>, key: &K) -> Option<&'a I> {
        items.get(key)
    }

    fn set(&self, mut items: BTreeMap<K, I>, key: K, item: I) -> BTreeMap<K, I> {
        items.insert(key, item);
        items
    }

    fn remove(&self, mut items: BTreeMap<K, I>, key: &K) -> BTreeMap<K, I> {
        items.remove(key);
        items
    }
}

/// Operations for a [`HashMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HashMapOps;

impl<K: Eq + Hash, I> Operations<HashMap<K, I>, K, I> for HashMapOps {
    fn get<'a>(&self, items: &'a HashMap<K, I>, key: &K) -> Option<&'a I> {
        items.get(key)
    }

    fn set(&self, mut items: HashMap<K, I>, key: K, item: I) -> HashMap<K, I> {
        items.insert(key, item);
        items
    }

    fn remove(&self, mut items: HashMap<K, I>, key: &K) -> HashMap<K, I> {
        items.remove(key);
        items
    }
}

/// Operations for a single always-present slot: the container is the
/// item itself, `set` replaces it and `remove` does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotOps;

impl<I> Operations<I, (), I> for SlotOps {
    fn get<'a>(&self, items: &'a I, _key: &()) -> Option<&'a I> {
        Some(items)
    }

    fn set(&self, _items: I, _key: (), item: I) -> I {
        item
    }

    fn remove(&self, items: I, _key: &()) -> I {
        items
    }
}
