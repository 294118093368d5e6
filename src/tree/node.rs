//! Node storage for the binary search trees.
//!
//! Nodes live in a `Vec` arena owned by the tree; `parent`, `left`, and
//! `right` are indices into that arena rather than pointers, with
//! `u32::MAX` standing in for "no node". Parent links form cycles with
//! the child links, which is exactly why they are indices: the arena owns
//! everything, the links only navigate.

/// Index of a node in a tree's arena.
pub(crate) type NodeId = u32;

/// The absent-node sentinel. Conceptually a Black nil leaf.
pub(crate) const NIL: NodeId = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// One tree node: an element, three navigation links, and a color.
///
/// The color is meaningful only under the red-black layer; the plain
/// binary search tree carries it untouched.
#[derive(Debug, Clone)]
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) color: Color,
}

impl<E> Node<E> {
    /// A freshly inserted node: Red, childless, attached under `parent`.
    pub(crate) fn new(element: E, parent: NodeId) -> Self {
        Node {
            element,
            parent,
            left: NIL,
            right: NIL,
            color: Color::Red,
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left == NIL && self.right == NIL
    }
}
