//! tagmap is the collection of key, value pairs that rides along with
//! each `DataPoint`. Think of it as a specialized hashmap. Tag order is
//! meaningful to downstream consumers, so the map remembers the order
//! in which keys were first inserted rather than sorting or hashing
//! them away.

use std::mem;
use std::slice::Iter;

/// The tagmap key, value collection. Behaves similarly to
/// `std::collections::HashMap` but iteration yields pairs in first
/// insertion order and lookups are a linear scan, which is the right
/// trade for the handful of tags a line carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagMap<K, V> {
    inner: Vec<(K, V)>,
}

/// Iteration over a `TagMap`. Behaves as you'd expect a key, value map
/// to behave, in insertion order.
pub struct TagMapIterator<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    tagmap: &'a TagMap<K, V>,
    index: usize,
}

impl<'a, K, V> IntoIterator for &'a TagMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = TagMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        TagMapIterator {
            tagmap: self,
            index: 0,
        }
    }
}

impl<'a, K, V> Iterator for TagMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let result = if self.index < self.tagmap.inner.len() {
            let (ref k, ref v) = self.tagmap.inner[self.index];
            Some((k, v))
        } else {
            None
        };
        self.index += 1;
        result
    }
}

impl<K, V> TagMap<K, V>
where
    K: PartialEq,
{
    /// Create a `tagmap::Iter` over the pairs, in insertion order.
    pub fn iter(&self) -> Iter<(K, V)> {
        self.inner.iter()
    }

    /// Get a value from the tagmap, if it exists.
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.inner.iter().position(|&(ref k, _)| k == key) {
            Some(idx) => Some(&self.inner[idx].1),
            None => None,
        }
    }

    /// Insert a key / value into self
    ///
    /// A repeated key keeps its original position in iteration order;
    /// only its value is replaced. This method will return the value
    /// previously stored under the given key, if there was such a
    /// value.
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        match self.inner.iter().position(|&(ref k, _)| *k == key) {
            Some(idx) => Some(mem::replace(&mut self.inner[idx].1, val)),
            None => {
                self.inner.push((key, val));
                None
            }
        }
    }

    /// Determine if the tagmap is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Return the length of the tagmap. This is the total number of key /
    /// values stored in the map.
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> Default for TagMap<K, V> {
    fn default() -> TagMap<K, V> {
        TagMap {
            inner: Vec::with_capacity(10),
        }
    }
}
