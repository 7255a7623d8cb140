//! An ordered map based on a red-black tree.

mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::ops;
use std::sync::atomic::{self, AtomicU64};

use self::node::{NodeId, Tree};
use crate::Error;

/// A process-unique identity minted for each map instance.
///
/// Cursors carry the identity of the map that produced them, so a
/// cursor presented to any other map (including a clone of its own) is
/// rejected instead of silently resolving into the wrong tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct MapId(u64);

impl MapId {
    fn next() -> MapId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        MapId(NEXT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// A detached position in a [`Map`].
///
/// A cursor either refers to an entry or marks the position one past
/// the maximum (the [`end`](Map::end) position). It is a small `Copy`
/// handle rather than a borrow, so it can be stored across mutations;
/// in exchange, every use goes back through the map and is validated
/// there. A cursor whose entry has been removed, or that is handed to a
/// map other than the one it came from, yields
/// [`Error::InvalidCursor`].
///
/// Cursors compare equal when they refer to the same position of the
/// same map.
///
/// # Examples
///
/// ```
/// use rbmap::Map;
///
/// let mut map = Map::new();
/// let (cur, _) = map.insert(1, "a");
///
/// map.insert(0, "z");
/// assert_eq!(map.key_value(cur), Ok((&1, &"a")));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cursor {
    map: MapId,
    node: Option<NodeId>,
}

/// An ordered map based on a red-black tree.
///
/// Entries are kept in ascending key order according to the map's
/// comparator. The behavior of this map is undefined if a key's ordering
/// relative to any other key changes while the key is in the map. This is
/// normally only possible through `Cell`, `RefCell`, or unsafe code.
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    tree: Tree<K, V>,
    len: usize,
    cmp: C,
    id: MapId,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Map<K, V> {
        Map::with_cmp(compare::natural())
    }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use rbmap::Map;
    ///
    /// let mut map = Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Map<K, V, C> {
        Map { tree: Tree::new(), len: 0, cmp, id: MapId::next() }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use rbmap::Map;
    ///
    /// let map: Map<i32, &str> = Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: Map<i32, &str, _> = Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Removes all entries from the map.
    ///
    /// All outstanding cursors into the map become invalid, and stay
    /// invalid even as later insertions reuse the map's storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.len(), 3);
    /// map.clear();
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Inserts an entry into the map, returning a cursor to the entry
    /// holding the key and whether the entry was newly inserted.
    ///
    /// If the map already contains an equal key, the stored entry is left
    /// untouched, `value` is dropped, and the second component is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// let (_, inserted) = map.insert(1, "a");
    /// assert!(inserted);
    ///
    /// let (cur, inserted) = map.insert(1, "b");
    /// assert!(!inserted);
    /// assert_eq!(map.key_value(cur), Ok((&1, &"a")));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool) {
        let (id, inserted) = self.tree.insert(&self.cmp, key, value);
        if inserted {
            self.len += 1;
        }
        (Cursor { map: self.id, node: Some(id) }, inserted)
    }

    /// Removes and returns the entry whose key is equal to the given key,
    /// returning `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K> {

        let id = self.tree.find(&self.cmp, key)?;
        self.len -= 1;
        Some(self.tree.remove(id))
    }

    /// Removes and returns the entry the cursor refers to.
    ///
    /// The cursor itself becomes invalid; cursors to other entries are
    /// unaffected. An end cursor, a cursor from another map, or a cursor
    /// whose entry was already removed yields [`Error::InvalidCursor`]
    /// and leaves the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, Map};
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(1, "a");
    /// let (cur, _) = map.insert(2, "b");
    ///
    /// assert_eq!(map.remove_at(cur), Ok((2, "b")));
    /// assert_eq!(map.remove_at(cur), Err(Error::InvalidCursor));
    /// assert_eq!(map.remove_at(map.end()), Err(Error::InvalidCursor));
    /// ```
    pub fn remove_at(&mut self, cursor: Cursor) -> Result<(K, V), Error> {
        let id = self.entry(cursor)?;
        self.len -= 1;
        Ok(self.tree.remove(id))
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.find(&self.cmp, key).is_some()
    }

    /// Returns the number of entries whose key is equal to the given key,
    /// which is always `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    ///
    /// assert_eq!(map.count(&1), 1);
    /// assert_eq!(map.count(&2), 0);
    /// ```
    pub fn count<Q: ?Sized>(&self, key: &Q) -> usize where C: Compare<Q, K> {
        self.contains_key(key) as usize
    }

    /// Returns a reference to the value associated with the given key, or
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        let id = self.tree.find(&self.cmp, key)?;
        Some(self.tree.key_value(id).1)
    }

    /// Returns a mutable reference to the value associated with the given
    /// key, or `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    ///
    /// *map.get_mut(&1).unwrap() = "b";
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
        where C: Compare<Q, K> {

        let id = self.tree.find(&self.cmp, key)?;
        Some(self.tree.value_mut(id))
    }

    /// Returns a reference to the value associated with the given key, or
    /// [`Error::KeyNotFound`] if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, Map};
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at<Q: ?Sized>(&self, key: &Q) -> Result<&V, Error> where C: Compare<Q, K> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the given
    /// key, or [`Error::KeyNotFound`] if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, Map};
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    ///
    /// *map.at_mut(&1).unwrap() = "b";
    /// assert_eq!(map.at(&1), Ok(&"b"));
    /// assert_eq!(map.at_mut(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V, Error>
        where C: Compare<Q, K> {

        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the given
    /// key, inserting an entry with `V::default()` first if the map does
    /// not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// *map.get_or_insert_default("hits") += 1;
    /// *map.get_or_insert_default("hits") += 1;
    ///
    /// assert_eq!(map.get(&"hits"), Some(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V where V: Default {
        let (id, inserted) = self.tree.insert(&self.cmp, key, V::default());
        if inserted {
            self.len += 1;
        }
        self.tree.value_mut(id)
    }

    /// Returns a reference to the map's minimum entry, or `None` if the
    /// map is empty.
    ///
    /// This is O(1): the map caches its bounds across mutations.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|id| self.tree.key_value(id))
    }

    /// Returns a reference to the map's maximum entry, or `None` if the
    /// map is empty.
    ///
    /// This is O(1): the map caches its bounds across mutations.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.last(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.last(), Some((&2, &"b")));
    /// ```
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|id| self.tree.key_value(id))
    }

    /// Removes and returns the map's minimum entry, or `None` if the map
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove_first(), Some((1, "a")));
    /// assert_eq!(map.remove_first(), Some((2, "b")));
    /// assert_eq!(map.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<(K, V)> {
        let id = self.tree.first()?;
        self.len -= 1;
        Some(self.tree.remove(id))
    }

    /// Removes and returns the map's maximum entry, or `None` if the map
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove_last(), Some((2, "b")));
    /// assert_eq!(map.remove_last(), Some((1, "a")));
    /// assert_eq!(map.remove_last(), None);
    /// ```
    pub fn remove_last(&mut self) -> Option<(K, V)> {
        let id = self.tree.last()?;
        self.len -= 1;
        Some(self.tree.remove(id))
    }

    /// Returns a cursor to the map's minimum entry, or the end cursor if
    /// the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.begin(), map.end());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.key_value(map.begin()), Ok((&1, &"a")));
    /// ```
    pub fn begin(&self) -> Cursor {
        Cursor { map: self.id, node: self.tree.first() }
    }

    /// Returns the cursor one position past the map's maximum entry.
    ///
    /// The end cursor refers to no entry; it serves as the terminator of
    /// a forward walk and the starting point of a backward one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, Map};
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.key_value(map.end()), Err(Error::InvalidCursor));
    /// assert_eq!(map.next(map.begin()), Ok(map.end()));
    /// ```
    pub fn end(&self) -> Cursor {
        Cursor { map: self.id, node: None }
    }

    /// Returns a cursor to the entry whose key is equal to the given key,
    /// or the end cursor if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.key_value(map.find(&1)), Ok((&1, &"a")));
    /// assert_eq!(map.find(&2), map.end());
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor where C: Compare<Q, K> {
        Cursor { map: self.id, node: self.tree.find(&self.cmp, key) }
    }

    /// Advances the cursor to the next entry in ascending order.
    ///
    /// Advancing the cursor of the maximum entry yields the end cursor;
    /// advancing the end cursor is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, Map};
    ///
    /// let mut map = Map::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let cur = map.next(map.begin()).unwrap();
    /// assert_eq!(map.key_value(cur), Ok((&2, &"b")));
    /// assert_eq!(map.next(cur), Ok(map.end()));
    /// assert_eq!(map.next(map.end()), Err(Error::InvalidCursor));
    /// ```
    pub fn next(&self, cursor: Cursor) -> Result<Cursor, Error> {
        let id = self.entry(cursor)?;
        Ok(Cursor { map: self.id, node: self.tree.successor(id) })
    }

    /// Moves the cursor back to the previous entry in ascending order.
    ///
    /// Moving back from the end cursor yields the maximum entry; moving
    /// back from the minimum entry (or from the end cursor of an empty
    /// map) is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, Map};
    ///
    /// let mut map = Map::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let cur = map.prev(map.end()).unwrap();
    /// assert_eq!(map.key_value(cur), Ok((&2, &"b")));
    /// assert_eq!(map.prev(map.begin()), Err(Error::InvalidCursor));
    /// ```
    pub fn prev(&self, cursor: Cursor) -> Result<Cursor, Error> {
        let node = match self.live(cursor)? {
            None => self.tree.last(),
            Some(id) => self.tree.predecessor(id),
        };
        node.map(|id| Cursor { map: self.id, node: Some(id) })
            .ok_or(Error::InvalidCursor)
    }

    /// Returns references to the entry the cursor refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, Map};
    ///
    /// let mut map = Map::new();
    /// let (cur, _) = map.insert(1, "a");
    ///
    /// assert_eq!(map.key_value(cur), Ok((&1, &"a")));
    /// assert_eq!(map.key_value(map.end()), Err(Error::InvalidCursor));
    /// ```
    pub fn key_value(&self, cursor: Cursor) -> Result<(&K, &V), Error> {
        let id = self.entry(cursor)?;
        Ok(self.tree.key_value(id))
    }

    /// Returns a mutable reference to the value of the entry the cursor
    /// refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    /// let (cur, _) = map.insert(1, "a");
    ///
    /// *map.value_mut(cur).unwrap() = "b";
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn value_mut(&mut self, cursor: Cursor) -> Result<&mut V, Error> {
        let id = self.entry(cursor)?;
        Ok(self.tree.value_mut(id))
    }

    /// Returns an iterator over the map's entries in ascending key order
    /// with references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter(node::Iter::new(&self.tree, self.len))
    }

    /// Returns an iterator over the map's entries in ascending key order
    /// with mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value = "x";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"x"));
    /// assert_eq!(map.get(&2), Some(&"x"));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut(node::IterMut::new(&mut self.tree, self.len))
    }

    /// Resolves a cursor against this map, distinguishing the end cursor
    /// from a live entry. Foreign and stale cursors are rejected.
    fn live(&self, cursor: Cursor) -> Result<Option<NodeId>, Error> {
        if cursor.map != self.id {
            return Err(Error::InvalidCursor);
        }
        match cursor.node {
            None => Ok(None),
            Some(id) if self.tree.contains(id) => Ok(Some(id)),
            Some(_) => Err(Error::InvalidCursor),
        }
    }

    /// Resolves a cursor that must refer to a live entry.
    fn entry(&self, cursor: Cursor) -> Result<NodeId, Error> {
        self.live(cursor)?.ok_or(Error::InvalidCursor)
    }
}

impl<K, V, C> Clone for Map<K, V, C> where K: Clone, V: Clone, C: Clone + Compare<K> {
    /// Deep-clones the map's entries and structure.
    ///
    /// The clone is a distinct container: cursors obtained from the
    /// original are not valid for it.
    fn clone(&self) -> Map<K, V, C> {
        Map {
            tree: self.tree.clone(),
            len: self.len,
            cmp: self.cmp.clone(),
            id: MapId::next(),
        }
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Map<K, V, C> {
        Map::with_cmp(C::default())
    }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (key, value) in it {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    /// Collects entries into a map. Because insertion leaves an existing
    /// entry untouched, the first occurrence of a key wins.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Map<K, V, C> {
        let mut map = Map::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: Hasher>(&self, h: &mut H) {
        self.len.hash(h);
        for entry in self.iter() {
            entry.hash(h);
        }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;

    /// Returns a reference to the value associated with the given key.
    ///
    /// # Panics
    ///
    /// Panics if the map does not contain the key. Indexing never
    /// inserts; use [`Map::get_or_insert_default`] for that.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Returns an iterator that consumes the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let entries: Vec<_> = map.into_iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter(node::IntoIter::new(self.tree, self.len))
    }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, C> PartialEq for Map<K, V, C>
    where K: PartialEq, V: PartialEq, C: Compare<K> {

    fn eq(&self, other: &Map<K, V, C>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for Map<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C>
    where K: PartialOrd, V: PartialOrd, C: Compare<K> {

    fn partial_cmp(&self, other: &Map<K, V, C>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K, V, C> Ord for Map<K, V, C> where K: Ord, V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Map<K, V, C>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// An iterator over the map's entries in ascending key order with
/// references to the values.
pub struct Iter<'a, K, V>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> {
        Iter(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries in ascending key order with
/// mutable references to the values.
pub struct IterMut<'a, K, V>(node::IterMut<'a, K, V>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator that consumes the map in ascending key order.
#[derive(Clone)]
pub struct IntoIter<K, V>(node::IntoIter<K, V>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
