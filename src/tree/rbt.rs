//! Self-balancing tree: red-black rebalancing over the structural BST.
//!
//! The red-black discipline is four rules over the node colors:
//!
//! 1. Every node is Red or Black; absent children count as Black.
//! 2. The root is Black.
//! 3. A Red node never has a Red child.
//! 4. Every path from a node down to a nil leaf crosses the same number
//!    of Black nodes.
//!
//! Rules 3 and 4 together pin the height at no more than 2·log2(n+1), so
//! every operation stays logarithmic no matter how adversarial the
//! insertion or removal order is.
//!
//! Structure and placement are entirely the `BinarySearchTree`'s job;
//! this layer wraps it, and after each structural change runs a fix-up
//! chain (recoloring plus at most a couple of rotations) that walks
//! toward the root restoring the rules. Insertion starts from a freshly
//! placed Red leaf; removal starts from the leaf about to be spliced,
//! *before* it is detached, because the case analysis needs the leaf's
//! parent and sibling context.

use crate::relate::Relatable;
use crate::tree::Violation;
use crate::tree::bst::{BinarySearchTree, InOrder};
use crate::tree::node::{Color, NIL, NodeId};

/// An ordered multiset with a guaranteed-logarithmic height.
///
/// The API mirrors [`BinarySearchTree`]; the difference is purely that
/// insert and remove rebalance. Elements need only the [`Relatable`]
/// capability (any `Ord` type qualifies), and they are never cloned or
/// hashed.
#[derive(Debug, Clone)]
pub struct RedBlackTree<E> {
    bst: BinarySearchTree<E>,
}

impl<E> Default for RedBlackTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RedBlackTree<E> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        RedBlackTree {
            bst: BinarySearchTree::new(),
        }
    }

    /// Number of elements in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bst.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bst.is_empty()
    }

    /// Smallest element, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&E> {
        self.bst.min()
    }

    /// Largest element, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&E> {
        self.bst.max()
    }

    /// Visits every element in ascending order.
    pub fn iter(&self) -> InOrder<'_, E> {
        self.bst.iter()
    }

    /// The full ascending sequence, borrowed.
    pub fn in_order(&self) -> Vec<&E> {
        self.bst.in_order()
    }

    /// Nodes on the longest root-to-leaf path. Bounded by 2·log2(n+1)
    /// while the red-black rules hold.
    pub fn height(&self) -> usize {
        self.bst.height()
    }
}

impl<E: Relatable> RedBlackTree<E> {
    /// Inserts `element`, then restores the red-black rules.
    ///
    /// Duplicates are permitted, exactly as in the unbalanced tree.
    pub fn insert(&mut self, element: E) {
        let id = self.bst.insert_node(element);
        self.insert_fixup(id);
    }

    /// Removes one element equal to `element`, restoring the rules.
    /// Returns `false`, mutating nothing, when no such element exists.
    pub fn remove(&mut self, element: &E) -> bool {
        let id = self.bst.find(element);
        if id == NIL {
            return false;
        }
        let leaf = self.bst.sink_to_leaf(id);
        self.remove_fixup(leaf);
        self.bst.splice_leaf(leaf);
        true
    }

    /// Whether an equal element is present.
    pub fn search(&self, element: &E) -> bool {
        self.bst.search(element)
    }

    /// Whether any element `x` satisfies `low <= x <= high`.
    pub fn between(&self, low: &E, high: &E) -> bool {
        self.bst.between(low, high)
    }

    /// Checks the structural invariants plus all four red-black rules.
    ///
    /// A failure means a defect in the fix-up logic; it is not a
    /// condition user code should ever observe or handle.
    pub fn validate(&self) -> Result<(), Violation> {
        self.bst.validate()?;
        let root = self.bst.root_id();
        if root == NIL {
            return Ok(());
        }
        if self.bst.is_red(root) {
            return Err(Violation::RedRoot);
        }
        self.check_colors(root).map(|_| ())
    }

    // =========================================================================
    // Insertion fix-up
    // =========================================================================

    /// Restores the rules after `id` was placed as a Red leaf.
    ///
    /// Loops from the new node toward the root. A red uncle means one
    /// level of recoloring and the problem moves to the grandparent;
    /// a black uncle is terminal after at most two rotations.
    fn insert_fixup(&mut self, mut id: NodeId) {
        loop {
            let parent = self.bst.parent_of(id);
            if parent == NIL {
                // The node bubbled to (or started at) the root.
                self.bst.set_color(id, Color::Black);
                return;
            }
            if self.bst.is_black(parent) {
                return;
            }

            // A red parent is never the root, so a grandparent exists.
            let grand = self.bst.parent_of(parent);
            if grand == NIL {
                debug_assert!(grand != NIL, "red node at the root");
                return;
            }
            let parent_is_left = self.bst.left_of(grand) == parent;
            let uncle = if parent_is_left {
                self.bst.right_of(grand)
            } else {
                self.bst.left_of(grand)
            };

            if self.bst.is_red(uncle) {
                self.bst.set_color(parent, Color::Black);
                self.bst.set_color(uncle, Color::Black);
                self.bst.set_color(grand, Color::Red);
                id = grand;
                continue;
            }

            // Black uncle. Straighten a zig-zag first; the former parent
            // ends up at the bottom of the line and the chain continues
            // from there.
            let mut node = id;
            if parent_is_left && self.bst.right_of(parent) == node {
                self.bst.rotate_left(parent);
                node = parent;
            } else if !parent_is_left && self.bst.left_of(parent) == node {
                self.bst.rotate_right(parent);
                node = parent;
            }

            // Straight line: the middle node takes Black, the grandparent
            // turns Red and rotates down to the short side.
            let parent = self.bst.parent_of(node);
            self.bst.set_color(parent, Color::Black);
            self.bst.set_color(grand, Color::Red);
            if parent_is_left {
                self.bst.rotate_right(grand);
            } else {
                self.bst.rotate_left(grand);
            }
            return;
        }
    }

    // =========================================================================
    // Removal fix-up
    // =========================================================================

    /// Restores the rules before the doomed leaf `id` is spliced out.
    ///
    /// Removing a Black leaf leaves its side one Black short; the loop
    /// repairs the deficit locally when a red node is available to
    /// repaint, and otherwise pushes it one level up. Sibling lookups are
    /// guarded: under intact rules a black node always has one, and if a
    /// prior bug broke that we bail out and let `validate` report it
    /// rather than index past the arena.
    fn remove_fixup(&mut self, mut id: NodeId) {
        loop {
            // A red node absorbs the missing black by turning black.
            // On the first pass this is the doomed red leaf itself, which
            // needs no rebalancing at all.
            if self.bst.is_red(id) {
                self.bst.set_color(id, Color::Black);
                return;
            }
            let parent = self.bst.parent_of(id);
            if parent == NIL {
                // Every path through the root shortens equally.
                return;
            }

            let node_is_left = self.bst.left_of(parent) == id;
            let mut sibling = if node_is_left {
                self.bst.right_of(parent)
            } else {
                self.bst.left_of(parent)
            };
            if sibling == NIL {
                debug_assert!(sibling != NIL, "black node with no sibling");
                return;
            }

            // Red sibling: rotate it above the parent so the remaining
            // cases see a black one.
            if self.bst.is_red(sibling) {
                self.bst.set_color(parent, Color::Red);
                self.bst.set_color(sibling, Color::Black);
                if node_is_left {
                    self.bst.rotate_left(parent);
                } else {
                    self.bst.rotate_right(parent);
                }
                sibling = if node_is_left {
                    self.bst.right_of(parent)
                } else {
                    self.bst.left_of(parent)
                };
                if sibling == NIL {
                    debug_assert!(sibling != NIL, "rotation lost the sibling");
                    return;
                }
            }

            let sibling_left = self.bst.left_of(sibling);
            let sibling_right = self.bst.right_of(sibling);

            // All-black family: repaint the sibling red. With a black
            // parent the whole subtree is now one black short and the
            // deficit moves up; a red parent just picks it up instead.
            if self.bst.is_black(sibling_left) && self.bst.is_black(sibling_right) {
                self.bst.set_color(sibling, Color::Red);
                if self.bst.is_black(parent) {
                    id = parent;
                    continue;
                }
                self.bst.set_color(parent, Color::Black);
                return;
            }

            // Near child red, far child black: rotate the red onto the
            // far side to set up the terminal case.
            if node_is_left && self.bst.is_black(sibling_right) && self.bst.is_red(sibling_left) {
                self.bst.set_color(sibling, Color::Red);
                self.bst.set_color(sibling_left, Color::Black);
                self.bst.rotate_right(sibling);
                sibling = self.bst.right_of(parent);
            } else if !node_is_left
                && self.bst.is_black(sibling_left)
                && self.bst.is_red(sibling_right)
            {
                self.bst.set_color(sibling, Color::Red);
                self.bst.set_color(sibling_right, Color::Black);
                self.bst.rotate_left(sibling);
                sibling = self.bst.left_of(parent);
            }

            // Far child red: sibling takes the parent's color, parent and
            // far child turn black, and one rotation settles the deficit.
            let parent_color = self.bst.color_of(parent);
            self.bst.set_color(sibling, parent_color);
            self.bst.set_color(parent, Color::Black);
            if node_is_left {
                let far = self.bst.right_of(sibling);
                if far != NIL {
                    self.bst.set_color(far, Color::Black);
                }
                self.bst.rotate_left(parent);
            } else {
                let far = self.bst.left_of(sibling);
                if far != NIL {
                    self.bst.set_color(far, Color::Black);
                }
                self.bst.rotate_right(parent);
            }
            return;
        }
    }

    /// Checks rules 3 and 4 below `id`; returns the black count from `id`
    /// down to (and including) nil.
    fn check_colors(&self, id: NodeId) -> Result<usize, Violation> {
        if id == NIL {
            return Ok(1);
        }
        let left = self.bst.left_of(id);
        let right = self.bst.right_of(id);
        if self.bst.is_red(id) {
            if self.bst.is_red(left) {
                return Err(Violation::RedRed {
                    parent: id,
                    child: left,
                });
            }
            if self.bst.is_red(right) {
                return Err(Violation::RedRed {
                    parent: id,
                    child: right,
                });
            }
        }
        let left_height = self.check_colors(left)?;
        let right_height = self.check_colors(right)?;
        if left_height != right_height {
            return Err(Violation::BlackHeightMismatch { node: id });
        }
        Ok(left_height + if self.bst.is_black(id) { 1 } else { 0 })
    }
}
