//! In-order traversal cores shared by the map's public iterators.

use std::marker::PhantomData;
use std::mem;

use super::{NodeId, Tree};

/// A double-ended in-order walk over borrowed entries.
///
/// The walk follows successor/predecessor links; `remaining` counts the
/// entries still between the two ends so the iterator can stop exactly
/// when they meet.
pub struct Iter<'a, K, V> {
    tree: &'a Tree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(tree: &'a Tree<K, V>, len: usize) -> Iter<'a, K, V> {
        Iter {
            tree,
            front: tree.first(),
            back: tree.last(),
            remaining: len,
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(id);
        Some(self.tree.key_value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(id);
        Some(self.tree.key_value(id))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// The mutable counterpart of [`Iter`], sharing its walk.
pub struct IterMut<'a, K, V> {
    iter: Iter<'a, K, V>,
    _mut: PhantomData<&'a mut V>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub fn new(tree: &'a mut Tree<K, V>, len: usize) -> IterMut<'a, K, V> {
        IterMut { iter: Iter::new(tree, len), _mut: PhantomData }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let next = self.iter.next();
        // The walk was constructed from a unique borrow of the tree and
        // visits each node once, so the values it yields are disjoint.
        unsafe { mem::transmute(next) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
        let next_back = self.iter.next_back();
        unsafe { mem::transmute(next_back) }
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// A consuming in-order walk that drains the tree from its ends.
///
/// Detaching a node while its neighbors still link to it would leave
/// the walk crawling over freed slots, so each step removes a bound of
/// the tree outright. The tree stays structurally valid throughout,
/// which is what lets the walk run from both ends at once.
#[derive(Clone)]
pub struct IntoIter<K, V> {
    tree: Tree<K, V>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub fn new(tree: Tree<K, V>, len: usize) -> IntoIter<K, V> {
        IntoIter { tree, remaining: len }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let id = self.tree.first()?;
        self.remaining -= 1;
        Some(self.tree.remove(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        let id = self.tree.last()?;
        self.remaining -= 1;
        Some(self.tree.remove(id))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
