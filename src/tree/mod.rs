//! Ordered trees over [`Relatable`](crate::relate::Relatable) elements.
//!
//! Two variants share one arena-backed node store:
//!
//! - [`BinarySearchTree`]: plain ordered insertion, no balancing. Simple
//!   and fast on random input, degenerates to a linked list on sorted
//!   input.
//! - [`RedBlackTree`]: the same API with red-black rebalancing bolted
//!   onto insert and remove, holding the height at O(log n) for any
//!   input order.
//!
//! Both are multisets (duplicates allowed) and both expose `validate`,
//! which re-derives every structural and coloring rule from scratch.
//! Validation is test and fuzzing machinery; it is linear time and not
//! meant for production paths.

use std::fmt;

mod bst;
mod node;
mod rbt;

pub use bst::{BinarySearchTree, InOrder};
pub use rbt::RedBlackTree;

/// A broken tree invariant, as reported by `validate`.
///
/// Node ids are arena slots, only meaningful for debugging alongside a
/// dump of the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A child's parent link does not point back at its parent.
    BrokenLink { node: u32 },
    /// An adjacent in-order pair is out of order.
    Unordered { node: u32 },
    /// The nodes reachable from the root differ from the stored count.
    CountMismatch { reachable: usize, stored: usize },
    /// The root is Red.
    RedRoot,
    /// A Red node has a Red child.
    RedRed { parent: u32, child: u32 },
    /// A node's two subtrees disagree on their black counts.
    BlackHeightMismatch { node: u32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BrokenLink { node } => {
                write!(f, "node {node} has a child whose parent link points elsewhere")
            }
            Violation::Unordered { node } => {
                write!(f, "node {node} breaks the in-order ordering")
            }
            Violation::CountMismatch { reachable, stored } => {
                write!(f, "{reachable} nodes reachable from the root, {stored} stored")
            }
            Violation::RedRoot => write!(f, "the root is red"),
            Violation::RedRed { parent, child } => {
                write!(f, "red node {parent} has red child {child}")
            }
            Violation::BlackHeightMismatch { node } => {
                write!(f, "subtrees of node {node} have unequal black heights")
            }
        }
    }
}

impl std::error::Error for Violation {}
