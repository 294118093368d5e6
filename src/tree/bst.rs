//! Unbalanced binary search tree over arena storage.
//!
//! This is the structural half of the tree stack: placement, lookup,
//! splicing, rotation. It maintains the search-order invariant and
//! nothing else; the red-black layer composes over it and adds the
//! balancing discipline.
//!
//! Storage notes:
//!
//! 1. All nodes live in one `Vec`; links are `u32` indices (`NIL` for
//!    absent). No boxes, no reference counting, no unsafe.
//! 2. The arena is kept dense. Splicing a node out swap-removes its slot
//!    and re-targets every link into the slot that moved, so the arena
//!    length *is* the element count at all times.
//! 3. Ties on insert descend right, so the tree is a multiset: equal
//!    elements coexist and come out adjacent in order.

use smallvec::SmallVec;

use crate::relate::Relatable;
use crate::tree::Violation;
use crate::tree::node::{Color, NIL, Node, NodeId};

/// A generic binary search tree. Logarithmic operations on random input,
/// degrading to linear on adversarial input; see `RedBlackTree` for the
/// version that cannot degrade.
#[derive(Debug, Clone)]
pub struct BinarySearchTree<E> {
    nodes: Vec<Node<E>>,
    root: NodeId,
}

impl<E> Default for BinarySearchTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Structural operations (no ordering bound required)
// =============================================================================

impl<E> BinarySearchTree<E> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        BinarySearchTree {
            nodes: Vec::new(),
            root: NIL,
        }
    }

    /// Number of elements in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Smallest element, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&E> {
        if self.root == NIL {
            return None;
        }
        let id = self.leftmost(self.root);
        Some(&self.nodes[id as usize].element)
    }

    /// Largest element, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&E> {
        if self.root == NIL {
            return None;
        }
        let id = self.rightmost(self.root);
        Some(&self.nodes[id as usize].element)
    }

    /// Visits every element in ascending order.
    pub fn iter(&self) -> InOrder<'_, E> {
        InOrder::new(self)
    }

    /// The full ascending sequence. Elements are borrowed, never cloned.
    pub fn in_order(&self) -> Vec<&E> {
        self.iter().collect()
    }

    /// Nodes on the longest root-to-leaf path (0 for an empty tree).
    ///
    /// Walks with an explicit stack; a degenerate tree can be as deep as
    /// it is long, which would blow the call stack recursively.
    pub fn height(&self) -> usize {
        if self.root == NIL {
            return 0;
        }
        let mut max = 0;
        let mut stack: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        stack.push((self.root, 1));
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[id as usize];
            if node.left != NIL {
                stack.push((node.left, depth + 1));
            }
            if node.right != NIL {
                stack.push((node.right, depth + 1));
            }
        }
        max
    }

    // =========================================================================
    // Crate-internal navigation and surgery
    // =========================================================================

    #[inline(always)]
    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    #[inline(always)]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].parent
    }

    #[inline(always)]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].left
    }

    #[inline(always)]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].right
    }

    /// Nil leaves count as Black.
    #[inline(always)]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        id == NIL || self.nodes[id as usize].color == Color::Black
    }

    #[inline(always)]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        !self.is_black(id)
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(id != NIL);
        self.nodes[id as usize].color = color;
    }

    #[inline(always)]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        if id == NIL {
            Color::Black
        } else {
            self.nodes[id as usize].color
        }
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        debug_assert!(id != NIL);
        while self.nodes[id as usize].left != NIL {
            id = self.nodes[id as usize].left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        debug_assert!(id != NIL);
        while self.nodes[id as usize].right != NIL {
            id = self.nodes[id as usize].right;
        }
        id
    }

    /// Promotes `id`'s right child into `id`'s position.
    ///
    /// Reattaches the displaced subtree, fixes all three affected parent
    /// links, and retargets the root when `id` had no parent. In-order
    /// sequence is unchanged.
    pub(crate) fn rotate_left(&mut self, id: NodeId) {
        let r = self.nodes[id as usize].right;
        debug_assert!(r != NIL, "rotate_left needs a right child");
        let rl = self.nodes[r as usize].left;

        self.nodes[id as usize].right = rl;
        if rl != NIL {
            self.nodes[rl as usize].parent = id;
        }

        let p = self.nodes[id as usize].parent;
        self.nodes[r as usize].parent = p;
        if p == NIL {
            self.root = r;
        } else if self.nodes[p as usize].left == id {
            self.nodes[p as usize].left = r;
        } else {
            self.nodes[p as usize].right = r;
        }

        self.nodes[r as usize].left = id;
        self.nodes[id as usize].parent = r;
    }

    /// Mirror of [`Self::rotate_left`]: promotes the left child.
    pub(crate) fn rotate_right(&mut self, id: NodeId) {
        let l = self.nodes[id as usize].left;
        debug_assert!(l != NIL, "rotate_right needs a left child");
        let lr = self.nodes[l as usize].right;

        self.nodes[id as usize].left = lr;
        if lr != NIL {
            self.nodes[lr as usize].parent = id;
        }

        let p = self.nodes[id as usize].parent;
        self.nodes[l as usize].parent = p;
        if p == NIL {
            self.root = l;
        } else if self.nodes[p as usize].left == id {
            self.nodes[p as usize].left = l;
        } else {
            self.nodes[p as usize].right = l;
        }

        self.nodes[l as usize].right = id;
        self.nodes[id as usize].parent = l;
    }

    /// Walks `id` down to a leaf by exchanging elements along the removal
    /// chain, and returns the leaf that now holds the doomed element.
    ///
    /// Two children: exchange with the in-order predecessor and continue
    /// there. One child: exchange with the child and continue there.
    /// Leaf: done. The exchanges use `mem::swap`, so nothing is cloned;
    /// the walk follows links, not comparisons, so the transient
    /// misplacement of the doomed element is never observed.
    pub(crate) fn sink_to_leaf(&mut self, mut id: NodeId) -> NodeId {
        loop {
            let (left, right) = {
                let node = &self.nodes[id as usize];
                (node.left, node.right)
            };
            let next = if left != NIL && right != NIL {
                self.rightmost(left)
            } else if left != NIL {
                left
            } else if right != NIL {
                right
            } else {
                return id;
            };
            self.swap_elements(id, next);
            id = next;
        }
    }

    /// Detaches a childless node from its parent and frees its slot,
    /// returning the element it held.
    pub(crate) fn splice_leaf(&mut self, id: NodeId) -> E {
        debug_assert!(self.nodes[id as usize].is_leaf());
        let p = self.nodes[id as usize].parent;
        if p == NIL {
            self.root = NIL;
        } else if self.nodes[p as usize].left == id {
            self.nodes[p as usize].left = NIL;
        } else {
            debug_assert_eq!(self.nodes[p as usize].right, id);
            self.nodes[p as usize].right = NIL;
        }
        self.release(id)
    }

    fn swap_elements(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a < b {
            (a as usize, b as usize)
        } else {
            (b as usize, a as usize)
        };
        let (head, tail) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut head[lo].element, &mut tail[0].element);
    }

    /// Frees an already-detached slot, keeping the arena dense.
    ///
    /// `swap_remove` drops the last node into the vacated slot, so every
    /// link that still names the old end-of-arena index has to follow the
    /// move: the moved node's parent's child link, its children's parent
    /// links, and the root pointer if the moved node was the root.
    fn release(&mut self, id: NodeId) -> E {
        let node = self.nodes.swap_remove(id as usize);
        let moved_from = self.nodes.len() as NodeId;
        if (id as usize) < self.nodes.len() {
            let (p, l, r) = {
                let moved = &self.nodes[id as usize];
                (moved.parent, moved.left, moved.right)
            };
            if p == NIL {
                self.root = id;
            } else if self.nodes[p as usize].left == moved_from {
                self.nodes[p as usize].left = id;
            } else {
                debug_assert_eq!(self.nodes[p as usize].right, moved_from);
                self.nodes[p as usize].right = id;
            }
            if l != NIL {
                self.nodes[l as usize].parent = id;
            }
            if r != NIL {
                self.nodes[r as usize].parent = id;
            }
        }
        node.element
    }
}

// =============================================================================
// Ordered operations
// =============================================================================

impl<E: Relatable> BinarySearchTree<E> {
    /// Inserts `element` as a new leaf.
    ///
    /// Descends from the root, left when the new element is less than the
    /// current node, right otherwise; equal elements therefore land to
    /// the right of existing copies.
    pub fn insert(&mut self, element: E) {
        self.insert_node(element);
    }

    /// As [`Self::insert`], returning the new node's id for the
    /// red-black layer to fix up.
    pub(crate) fn insert_node(&mut self, element: E) -> NodeId {
        debug_assert!(self.nodes.len() < NIL as usize);
        let id = self.nodes.len() as NodeId;
        if self.root == NIL {
            self.nodes.push(Node::new(element, NIL));
            self.root = id;
            return id;
        }
        let mut cur = self.root;
        loop {
            let node = &self.nodes[cur as usize];
            if element.is_less_than(&node.element) {
                if node.left == NIL {
                    self.nodes[cur as usize].left = id;
                    break;
                }
                cur = node.left;
            } else {
                if node.right == NIL {
                    self.nodes[cur as usize].right = id;
                    break;
                }
                cur = node.right;
            }
        }
        self.nodes.push(Node::new(element, cur));
        id
    }

    /// Whether an equal element is present.
    pub fn search(&self, element: &E) -> bool {
        self.find(element) != NIL
    }

    /// Topmost node holding an element equal to `element`, or `NIL`.
    pub(crate) fn find(&self, element: &E) -> NodeId {
        let mut cur = self.root;
        while cur != NIL {
            let node = &self.nodes[cur as usize];
            if element.is_equal_to(&node.element) {
                return cur;
            }
            cur = if element.is_less_than(&node.element) {
                node.left
            } else {
                node.right
            };
        }
        NIL
    }

    /// Removes one element equal to `element`. Returns `false`, mutating
    /// nothing, when no such element exists.
    pub fn remove(&mut self, element: &E) -> bool {
        let id = self.find(element);
        if id == NIL {
            return false;
        }
        let leaf = self.sink_to_leaf(id);
        self.splice_leaf(leaf);
        true
    }

    /// Whether any element `x` satisfies `low <= x <= high`.
    ///
    /// Single-path descent: right while `low` is greater than the current
    /// node, left while `high` is less than it, found otherwise. When the
    /// descent abandons a subtree, every element in it is provably
    /// outside the bounds, so one path suffices for existence (this would
    /// not hold for collecting the matches). An inverted interval
    /// (`low > high`) finds nothing.
    pub fn between(&self, low: &E, high: &E) -> bool {
        let mut cur = self.root;
        while cur != NIL {
            let node = &self.nodes[cur as usize];
            if low.is_greater_than(&node.element) {
                cur = node.right;
            } else if high.is_less_than(&node.element) {
                cur = node.left;
            } else {
                return true;
            }
        }
        false
    }

    /// Checks structural soundness: link symmetry, every stored node
    /// reachable from the root, and ascending in-order sequence.
    ///
    /// A failure means a bug in the surgery above, not a user error.
    pub fn validate(&self) -> Result<(), Violation> {
        if self.root == NIL {
            if self.nodes.is_empty() {
                return Ok(());
            }
            return Err(Violation::CountMismatch {
                reachable: 0,
                stored: self.nodes.len(),
            });
        }
        if self.nodes[self.root as usize].parent != NIL {
            return Err(Violation::BrokenLink { node: self.root });
        }

        let mut seen = 0usize;
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        stack.push(self.root);
        while let Some(id) = stack.pop() {
            seen += 1;
            if seen > self.nodes.len() {
                // More nodes reachable than stored: the links must cycle.
                return Err(Violation::CountMismatch {
                    reachable: seen,
                    stored: self.nodes.len(),
                });
            }
            let node = &self.nodes[id as usize];
            for child in [node.left, node.right] {
                if child != NIL {
                    if child as usize >= self.nodes.len()
                        || self.nodes[child as usize].parent != id
                    {
                        return Err(Violation::BrokenLink { node: id });
                    }
                    stack.push(child);
                }
            }
        }
        if seen != self.nodes.len() {
            return Err(Violation::CountMismatch {
                reachable: seen,
                stored: self.nodes.len(),
            });
        }

        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        let mut cur = self.root;
        let mut prev = NIL;
        loop {
            while cur != NIL {
                stack.push(cur);
                cur = self.nodes[cur as usize].left;
            }
            let Some(id) = stack.pop() else { break };
            if prev != NIL {
                let before = &self.nodes[prev as usize].element;
                let here = &self.nodes[id as usize].element;
                if before.is_greater_than(here) {
                    return Err(Violation::Unordered { node: id });
                }
            }
            prev = id;
            cur = self.nodes[id as usize].right;
        }
        Ok(())
    }
}

// =============================================================================
// In-order iteration
// =============================================================================

/// Ascending traversal over a tree's elements.
///
/// Keeps the left spine on an inline stack; red-black trees never exceed
/// 2·log2(n+1) depth so the stack stays off the heap for any realistic
/// tree, and a degenerate unbalanced tree merely spills.
pub struct InOrder<'a, E> {
    nodes: &'a [Node<E>],
    stack: SmallVec<[NodeId; 32]>,
}

impl<'a, E> InOrder<'a, E> {
    fn new(tree: &'a BinarySearchTree<E>) -> Self {
        let mut iter = InOrder {
            nodes: &tree.nodes,
            stack: SmallVec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        while id != NIL {
            self.stack.push(id);
            id = self.nodes[id as usize].left;
        }
    }
}

impl<'a, E> Iterator for InOrder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id as usize];
        self.push_left_spine(node.right);
        Some(&node.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn empty_tree() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.height(), 0);
        assert!(!tree.search(&1));
        assert!(tree.in_order().is_empty());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn insert_orders_elements() {
        let mut tree = BinarySearchTree::new();
        for value in [10, 20, 5, 15, 3] {
            tree.insert(value);
        }
        assert_eq!(contents(&tree), vec![3, 5, 10, 15, 20]);
        assert_eq!(tree.min(), Some(&3));
        assert_eq!(tree.max(), Some(&20));
        assert_eq!(tree.len(), 5);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut tree = BinarySearchTree::new();
        for value in [7, 3, 7, 7, 3] {
            tree.insert(value);
        }
        assert_eq!(contents(&tree), vec![3, 3, 7, 7, 7]);
        assert!(tree.search(&7));
        assert!(tree.remove(&7));
        assert_eq!(contents(&tree), vec![3, 3, 7, 7]);
        assert!(tree.search(&7));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn search_hits_and_misses() {
        let mut tree = BinarySearchTree::new();
        for value in [8, 4, 12, 2, 6, 10, 14] {
            tree.insert(value);
        }
        for value in [8, 4, 12, 2, 6, 10, 14] {
            assert!(tree.search(&value));
        }
        for value in [0, 3, 5, 7, 9, 11, 13, 15] {
            assert!(!tree.search(&value));
        }
    }

    #[test]
    fn remove_leaf_one_child_two_children() {
        let mut tree = BinarySearchTree::new();
        for value in [8, 4, 12, 2, 6, 10, 14, 1] {
            tree.insert(value);
        }
        // leaf
        assert!(tree.remove(&6));
        assert!(tree.validate().is_ok());
        // one child (2 now has only child 1)
        assert!(tree.remove(&2));
        assert!(tree.validate().is_ok());
        // two children (the root)
        assert!(tree.remove(&8));
        assert!(tree.validate().is_ok());
        assert_eq!(contents(&tree), vec![1, 4, 10, 12, 14]);
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut tree = BinarySearchTree::new();
        tree.insert(1);
        tree.insert(2);
        assert!(!tree.remove(&99));
        assert_eq!(tree.len(), 2);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn remove_root_until_empty() {
        let mut tree = BinarySearchTree::new();
        for value in [5, 3, 8, 1, 4, 7, 9] {
            tree.insert(value);
        }
        while let Some(&root) = tree.min() {
            assert!(tree.remove(&root));
            assert!(tree.validate().is_ok());
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root, NIL);
    }

    #[test]
    fn ascending_insert_degenerates() {
        let mut tree = BinarySearchTree::new();
        for value in 1..=64 {
            tree.insert(value);
        }
        // No balancing here: the tree is a right spine.
        assert_eq!(tree.height(), 64);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn rotations_preserve_order() {
        let mut tree = BinarySearchTree::new();
        for value in [10, 5, 15, 3, 7, 12, 18] {
            tree.insert(value);
        }
        let before = contents(&tree);

        let root = tree.root_id();
        tree.rotate_left(root);
        assert_eq!(contents(&tree), before);
        assert!(tree.validate().is_ok());

        let root = tree.root_id();
        tree.rotate_right(root);
        assert_eq!(contents(&tree), before);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn rotation_retargets_root() {
        let mut tree = BinarySearchTree::new();
        for value in [10, 5, 15] {
            tree.insert(value);
        }
        let root = tree.root_id();
        tree.rotate_left(root);
        assert_eq!(tree.nodes[tree.root as usize].element, 15);
        assert_eq!(tree.parent_of(tree.root), NIL);
    }

    #[test]
    fn between_finds_existing_ranges() {
        let mut tree = BinarySearchTree::new();
        for value in [10, 20, 30, 40, 50] {
            tree.insert(value);
        }
        assert!(tree.between(&10, &10));
        assert!(tree.between(&15, &25));
        assert!(tree.between(&5, &100));
        assert!(tree.between(&49, &51));
        // Gaps between stored elements.
        assert!(!tree.between(&11, &19));
        assert!(!tree.between(&51, &100));
        assert!(!tree.between(&0, &9));
        // Inverted interval is empty.
        assert!(!tree.between(&25, &15));
    }

    #[test]
    fn between_on_empty_tree() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(!tree.between(&0, &100));
    }

    #[test]
    fn arena_stays_dense_under_churn() {
        let mut tree = BinarySearchTree::new();
        for value in [50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43] {
            tree.insert(value);
        }
        for value in [25, 87, 50, 6, 43] {
            assert!(tree.remove(&value));
            assert_eq!(tree.len(), tree.nodes.len());
            assert!(tree.validate().is_ok());
        }
        assert_eq!(contents(&tree), vec![12, 18, 31, 37, 62, 75]);
    }

    #[test]
    fn iterator_is_lazy_and_complete() {
        let mut tree = BinarySearchTree::new();
        for value in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert(value);
        }
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.by_ref().count(), 5);
    }

    #[test]
    fn works_with_borrowed_element_types() {
        let mut tree: BinarySearchTree<&str> = BinarySearchTree::new();
        for word in ["pear", "apple", "quince", "fig"] {
            tree.insert(word);
        }
        assert_eq!(tree.in_order(), vec![&"apple", &"fig", &"pear", &"quince"]);
        assert!(tree.search(&"fig"));
        assert!(tree.remove(&"fig"));
        assert!(!tree.search(&"fig"));
    }
}
