//! Read-only projections of key/value maps.
//!
//! Keys are already immutable inside a map, so they come back as plain
//! shared references; values come back projected.

use crate::DeepReadonly;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Read-only view of a [`BTreeMap`].
pub struct MapView<'a, K, V> {
    map: &'a BTreeMap<K, V>,
}

impl<'a, K, V> MapView<'a, K, V> {
    #[inline]
    pub fn new(map: &'a BTreeMap<K, V>) -> Self {
        Self { map }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> std::collections::btree_map::Keys<'a, K, V> {
        self.map.keys()
    }

    /// The underlying map, without projecting its values.
    #[inline]
    pub fn as_map(&self) -> &'a BTreeMap<K, V> {
        self.map
    }
}

impl<'a, K: Ord, V: DeepReadonly> MapView<'a, K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<V::Projection<'a>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key).map(|v| v.project())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a K, V::Projection<'a>)> + 'a {
        self.map.iter().map(|(k, v)| (k, v.project()))
    }

    pub fn values(&self) -> impl Iterator<Item = V::Projection<'a>> + 'a {
        self.map.values().map(|v| v.project())
    }
}

impl<K, V> Clone for MapView<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for MapView<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Ord, V: DeepReadonly> DeepReadonly for BTreeMap<K, V> {
    type Projection<'a> = MapView<'a, K, V> where Self: 'a;

    #[inline]
    fn project(&self) -> MapView<'_, K, V> {
        MapView::new(self)
    }
}

/// Read-only view of a [`HashMap`].
pub struct HashMapView<'a, K, V, S> {
    map: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> HashMapView<'a, K, V, S> {
    #[inline]
    pub fn new(map: &'a HashMap<K, V, S>) -> Self {
        Self { map }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> std::collections::hash_map::Keys<'a, K, V> {
        self.map.keys()
    }

    #[inline]
    pub fn as_map(&self) -> &'a HashMap<K, V, S> {
        self.map
    }
}

impl<'a, K, V, S> HashMapView<'a, K, V, S>
where
    K: Eq + Hash,
    V: DeepReadonly,
    S: BuildHasher,
{
    pub fn get<Q>(&self, key: &Q) -> Option<V::Projection<'a>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(key).map(|v| v.project())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Entries in the map's iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a K, V::Projection<'a>)> + 'a {
        self.map.iter().map(|(k, v)| (k, v.project()))
    }

    pub fn values(&self) -> impl Iterator<Item = V::Projection<'a>> + 'a {
        self.map.values().map(|v| v.project())
    }
}

impl<K, V, S> Clone for HashMapView<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for HashMapView<'_, K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashMapView<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V, S> DeepReadonly for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: DeepReadonly,
    S: BuildHasher,
{
    type Projection<'a> = HashMapView<'a, K, V, S> where Self: 'a;

    #[inline]
    fn project(&self) -> HashMapView<'_, K, V, S> {
        HashMapView::new(self)
    }
}
