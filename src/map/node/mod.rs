//! The arena-backed red-black tree underlying the map.
//!
//! Nodes live in a `Vec` of slots and refer to each other through
//! [`NodeId`] handles instead of owned pointers, which keeps the
//! parent/child link cycle out of the ownership graph. Freed slots are
//! recycled through a free list; freeing a slot bumps its generation, so
//! a handle taken before the free can be told apart from a handle into
//! the slot's next occupant.

mod iter;


pub use self::iter::{IntoIter, Iter, IterMut};

use compare::Compare;
use std::cmp::Ordering::*;

/// A generational handle to a node slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId {
    index: u32,
    gen: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Clone)]
struct Slot<K, V> {
    gen: u32,
    node: Option<Node<K, V>>,
}

/// A red-black tree whose nodes live in a slot arena.
///
/// The tree tracks its root and caches its minimum and maximum nodes;
/// the caches are refreshed by a single [`Tree::update_bounds`] step at
/// the end of every structural mutation.
#[derive(Clone)]
pub struct Tree<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<u32>,
    root: Option<NodeId>,
    first: Option<NodeId>,
    last: Option<NodeId>,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Tree<K, V> {
        Tree {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            first: None,
            last: None,
        }
    }

    /// The minimum node, cached.
    pub fn first(&self) -> Option<NodeId> {
        self.first
    }

    /// The maximum node, cached.
    pub fn last(&self) -> Option<NodeId> {
        self.last
    }

    /// Checks whether `id` refers to a live node of this tree.
    ///
    /// This is the validation entry point for detached handles: an `id`
    /// whose slot has since been freed (or freed and reoccupied) fails
    /// the generation check.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots
            .get(id.index as usize)
            .map_or(false, |slot| slot.gen == id.gen && slot.node.is_some())
    }

    pub fn key_value(&self, id: NodeId) -> (&K, &V) {
        let node = self.node(id);
        (&node.key, &node.value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> &mut V {
        &mut self.node_mut(id).value
    }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<NodeId>
    where
        C: Compare<Q, K>,
    {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            cur = match cmp.compare(key, &node.key) {
                Equal => return Some(id),
                Less => node.left,
                Greater => node.right,
            };
        }
        None
    }

    /// Inserts an entry, returning the node holding the key and whether a
    /// new node was created. An equal key is left untouched and `value`
    /// is dropped.
    pub fn insert<C>(&mut self, cmp: &C, key: K, value: V) -> (NodeId, bool)
    where
        C: Compare<K>,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cur = self.root;

        while let Some(id) = cur {
            let ordering = cmp.compare(&key, &self.node(id).key);
            parent = Some(id);
            cur = match ordering {
                Equal => return (id, false),
                Less => {
                    side = Side::Left;
                    self.node(id).left
                }
                Greater => {
                    side = Side::Right;
                    self.node(id).right
                }
            };
        }

        let id = self.alloc(Node {
            key,
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });

        match parent {
            None => {
                self.set_color(id, Color::Black);
                self.root = Some(id);
            }
            Some(parent) => {
                self.set_child(parent, side, Some(id));
                self.insert_fixup(id);
            }
        }

        self.update_bounds();
        (id, true)
    }

    fn insert_fixup(&mut self, mut id: NodeId) {
        while let Some(parent) = self.parent(id) {
            if self.color(parent) == Color::Black {
                break;
            }

            // A red parent is never the root between mutations, so the
            // grandparent exists.
            let Some(grand) = self.parent(parent) else { break };
            let side = self.side_of(parent);
            let uncle = self.child(grand, side.opposite());

            if self.is_red(uncle) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle.expect("red uncle"), Color::Black);
                self.set_color(grand, Color::Red);
                id = grand;
                continue;
            }

            // Inner grandchild: one extra rotation turns it into the
            // outer case, with the roles of `id` and its parent swapped.
            let parent = if self.side_of(id) == side {
                parent
            } else {
                self.rotate(parent, side);
                id
            };

            self.set_color(parent, Color::Black);
            self.set_color(grand, Color::Red);
            self.rotate(grand, side.opposite());
            break;
        }

        let root = self.root.expect("fixup on an empty tree");
        self.set_color(root, Color::Black);
    }

    /// Removes the node `id` and returns its entry.
    ///
    /// A node with two children first swaps places with its in-order
    /// predecessor by relinking, never by moving the payloads, so other
    /// handles into the tree keep referring to the entries they were
    /// taken from.
    pub fn remove(&mut self, id: NodeId) -> (K, V) {
        if self.node(id).left.is_some() && self.node(id).right.is_some() {
            let left = self.node(id).left.expect("two-child node");
            let pred = self.extremum_from(left, Side::Right);
            self.swap_with_predecessor(id, pred);
        }

        // At most one child remains below `id`.
        let child = self.node(id).left.or(self.node(id).right);
        let parent = self.parent(id);
        let color = self.color(id);

        self.transplant(id, child);
        let node = self.release(id);

        if color == Color::Black {
            match child {
                Some(child) if self.color(child) == Color::Red => {
                    self.set_color(child, Color::Black);
                }
                _ => self.remove_fixup(parent, child),
            }
        }

        self.update_bounds();
        (node.key, node.value)
    }

    /// Swaps the positions of `id` and its in-order predecessor `pred`
    /// (the maximum of `id`'s left subtree, which has no right child).
    fn swap_with_predecessor(&mut self, id: NodeId, pred: NodeId) {
        let id_parent = self.parent(id);
        let id_side = id_parent.map(|_| self.side_of(id));
        let id_left = self.node(id).left.expect("two-child node");
        let id_right = self.node(id).right.expect("two-child node");
        let id_color = self.color(id);

        let pred_parent = self.parent(pred).expect("predecessor has a parent");
        let pred_left = self.node(pred).left;
        let pred_color = self.color(pred);

        // The predecessor takes over `id`'s links and color.
        self.set_color(pred, id_color);
        self.set_parent(pred, id_parent);
        self.set_child(pred, Side::Right, Some(id_right));
        self.set_parent(id_right, Some(pred));
        match id_side {
            None => self.root = Some(pred),
            Some(side) => {
                let id_parent = id_parent.expect("non-root node");
                self.set_child(id_parent, side, Some(pred));
            }
        }

        // `id` drops to the predecessor's old position.
        self.set_color(id, pred_color);
        self.set_child(id, Side::Right, None);
        self.set_child(id, Side::Left, pred_left);
        if let Some(left) = pred_left {
            self.set_parent(left, Some(id));
        }

        if pred_parent == id {
            // The predecessor was `id`'s left child.
            self.set_child(pred, Side::Left, Some(id));
            self.set_parent(id, Some(pred));
        } else {
            self.set_child(pred, Side::Left, Some(id_left));
            self.set_parent(id_left, Some(pred));
            // The predecessor is the maximum of the subtree, so it hung
            // off its parent's right side.
            self.set_child(pred_parent, Side::Right, Some(id));
            self.set_parent(id, Some(pred_parent));
        }
    }

    /// Replaces `id` with `child` in `id`'s parent (or at the root).
    fn transplant(&mut self, id: NodeId, child: Option<NodeId>) {
        let parent = self.parent(id);
        match parent {
            None => self.root = child,
            Some(parent) => {
                let side = self.side_of(id);
                self.set_child(parent, side, child);
            }
        }
        if let Some(child) = child {
            self.set_parent(child, parent);
        }
    }

    /// Restores the equal-black-height invariant after a black node was
    /// spliced out above `node` (which may be absent and is then black).
    fn remove_fixup(&mut self, mut parent: Option<NodeId>, mut node: Option<NodeId>) {
        while let Some(p) = parent {
            if self.is_red(node) {
                break;
            }

            let side = if self.child(p, Side::Left) == node {
                Side::Left
            } else {
                Side::Right
            };

            // The deficient side lost a black node, so the sibling
            // subtree is taller and the sibling itself exists.
            let mut sibling = self.child(p, side.opposite()).expect("sibling of a short side");

            if self.color(sibling) == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                sibling = self.child(p, side.opposite()).expect("sibling of a short side");
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                // Recoloring the sibling balances this subtree but leaves
                // it one black node short; reconsider at the parent.
                self.set_color(sibling, Color::Red);
                node = Some(p);
                parent = self.parent(p);
                continue;
            }

            let (sibling, far) = if self.is_red(far) {
                (sibling, far)
            } else {
                // Only the near nephew is red: rotate it over the
                // sibling to expose a red far nephew.
                let near = near.expect("red near nephew");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                let sibling = self.child(p, side.opposite()).expect("sibling of a short side");
                (sibling, self.child(sibling, side.opposite()))
            };

            self.set_color(sibling, self.color(p));
            self.set_color(p, Color::Black);
            self.set_color(far.expect("red far nephew"), Color::Black);
            self.rotate(p, side);
            return;
        }

        if let Some(node) = node {
            self.set_color(node, Color::Black);
        }
    }

    /// Rotates the edge above `id`'s child on `side.opposite()`, moving
    /// `id` down to `side` and promoting that child into its place.
    fn rotate(&mut self, id: NodeId, side: Side) {
        let up = self.child(id, side.opposite()).expect("rotation without a pivot");
        let inner = self.child(up, side);

        self.set_child(id, side.opposite(), inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(id));
        }

        let parent = self.parent(id);
        match parent {
            None => self.root = Some(up),
            Some(parent) => {
                let parent_side = self.side_of(id);
                self.set_child(parent, parent_side, Some(up));
            }
        }
        self.set_parent(up, parent);

        self.set_child(up, side, Some(id));
        self.set_parent(id, Some(up));
    }

    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Side::Right)
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Side::Left)
    }

    /// The in-order neighbor of `id` toward `side`: the extremum of the
    /// child subtree on that side, or else the first ancestor reached
    /// from the opposite side.
    fn step(&self, mut id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.child(id, side) {
            return Some(self.extremum_from(child, side.opposite()));
        }

        while let Some(parent) = self.parent(id) {
            if self.child(parent, side) != Some(id) {
                return Some(parent);
            }
            id = parent;
        }
        None
    }

    fn extremum_from(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.child(id, side) {
            id = child;
        }
        id
    }

    fn update_bounds(&mut self) {
        self.first = self.root.map(|root| self.extremum_from(root, Side::Left));
        self.last = self.root.map(|root| self.extremum_from(root, Side::Right));
    }

    /// Frees every slot while keeping the arena's capacity. Generations
    /// are bumped so handles into the cleared tree stay detectably stale
    /// even once their slots are reoccupied.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.gen = slot.gen.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.root = None;
        self.first = None;
        self.last = None;
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                NodeId { index, gen: slot.gen }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { gen: 0, node: Some(node) });
                NodeId { index, gen: 0 }
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let slot = &mut self.slots[id.index as usize];
        let node = slot.node.take().expect("released an empty slot");
        slot.gen = slot.gen.wrapping_add(1);
        self.free.push(id.index);
        node
    }

    fn node(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id.index as usize].node.as_ref().expect("dangling node id")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id.index as usize].node.as_mut().expect("dangling node id")
    }

    fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    /// Absent nodes count as black.
    fn is_red(&self, link: Option<NodeId>) -> bool {
        link.map_or(false, |id| self.color(id) == Color::Red)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let node = self.node(id);
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    /// Which side of its parent `id` hangs from. `id` must not be the root.
    fn side_of(&self, id: NodeId) -> Side {
        let parent = self.parent(id).expect("root has no side");
        if self.node(parent).left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.node_mut(id).parent = parent;
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        let node = self.node_mut(id);
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }
}
