//! AFL fuzz harness for the red-black tree
//!
//! Drives a `RedBlackTree` and a `BTreeMap` multiset model with the same
//! decoded operation stream and checks after every step:
//! 1. Observable agreement: remove/search/between/len answers match the model
//! 2. Structural soundness: `validate()` re-derives every red-black rule
//!
//! A final pass compares the whole in-order sequence plus min and max.

use afl::fuzz;
use grove::tree::RedBlackTree;
use std::collections::BTreeMap;

/// Keys fold into a small space so removals and duplicates actually hit.
const KEY_SPACE: u16 = 512;

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { key: u16 },
    Remove { key: u16 },
    Search { key: u16 },
    Between { low: u16, high: u16 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 4;
        let rest = &bytes[1..];
        let key = |lo: u8, hi: u8| u16::from_le_bytes([lo, hi]) % KEY_SPACE;

        match op_type {
            0 if rest.len() >= 2 => {
                let op = FuzzOp::Insert {
                    key: key(rest[0], rest[1]),
                };
                Some((op, &rest[2..]))
            }
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Remove {
                    key: key(rest[0], rest[1]),
                };
                Some((op, &rest[2..]))
            }
            2 if rest.len() >= 2 => {
                let op = FuzzOp::Search {
                    key: key(rest[0], rest[1]),
                };
                Some((op, &rest[2..]))
            }
            3 if rest.len() >= 4 => {
                let op = FuzzOp::Between {
                    low: key(rest[0], rest[1]),
                    high: key(rest[2], rest[3]),
                };
                Some((op, &rest[4..]))
            }
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut tree: RedBlackTree<u16> = RedBlackTree::new();
        let mut model: BTreeMap<u16, usize> = BTreeMap::new();
        let mut total = 0usize;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key } => {
                    tree.insert(key);
                    *model.entry(key).or_insert(0) += 1;
                    total += 1;
                }
                FuzzOp::Remove { key } => {
                    let removed = tree.remove(&key);
                    let expected = match model.get_mut(&key) {
                        Some(count) => {
                            *count -= 1;
                            if *count == 0 {
                                model.remove(&key);
                            }
                            total -= 1;
                            true
                        }
                        None => false,
                    };
                    assert_eq!(removed, expected, "remove({key}) disagrees with the model");
                }
                FuzzOp::Search { key } => {
                    assert_eq!(
                        tree.search(&key),
                        model.contains_key(&key),
                        "search({key}) disagrees with the model"
                    );
                }
                FuzzOp::Between { low, high } => {
                    let expected = low <= high && model.range(low..=high).next().is_some();
                    assert_eq!(
                        tree.between(&low, &high),
                        expected,
                        "between({low}, {high}) disagrees with the model"
                    );
                }
            }

            // CRITICAL INVARIANT: every step must leave a legal red-black tree
            if let Err(violation) = tree.validate() {
                panic!("Invariant failure after {op:?}: {violation}");
            }
            assert_eq!(tree.len(), total, "Length mismatch after {op:?}");
        }

        // Final deep comparison against the model
        let expected: Vec<u16> = model
            .iter()
            .flat_map(|(key, count)| std::iter::repeat(*key).take(*count))
            .collect();
        let actual: Vec<u16> = tree.iter().copied().collect();
        assert_eq!(actual, expected, "In-order mismatch");
        assert_eq!(tree.min(), expected.first(), "Min mismatch");
        assert_eq!(tree.max(), expected.last(), "Max mismatch");
        assert_eq!(tree.is_empty(), model.is_empty());
    });
}
