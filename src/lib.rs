//! Grove - ordered containers built around a red-black tree.
//!
//! # Quick Start
//!
//! ```
//! use grove::tree::RedBlackTree;
//!
//! // Build an ordered multiset
//! let mut tree = RedBlackTree::new();
//! for value in [30, 10, 20] {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.search(&20));
//! assert_eq!(tree.in_order(), vec![&10, &20, &30]);
//!
//! // Removal rebalances too
//! tree.remove(&10);
//! assert_eq!(tree.min(), Some(&20));
//! ```

pub mod heap;
pub mod linked;
pub mod relate;
pub mod ring;
pub mod tree;
