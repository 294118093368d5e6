//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_tree -- <crash_file>

use grove::tree::RedBlackTree;
use std::collections::BTreeMap;
use std::fs;

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
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }
    let data = fs::read(&args[1]).expect("Failed to read file");

    eprintln!("Input: {} bytes", data.len());
    eprintln!(
        "Hex: {}",
        data.iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    );

    let mut tree: RedBlackTree<u16> = RedBlackTree::new();
    let mut model: BTreeMap<u16, usize> = BTreeMap::new();
    let mut remaining = data.as_slice();
    let mut op_num = 0;

    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;

        match op {
            FuzzOp::Insert { key } => {
                eprintln!("Op {}: insert {}", op_num, key);
                eprintln!("  Before: len={} height={}", tree.len(), tree.height());
                tree.insert(key);
                *model.entry(key).or_insert(0) += 1;
                eprintln!("  After: len={} height={}", tree.len(), tree.height());
            }

            FuzzOp::Remove { key } => {
                eprintln!("Op {}: remove {}", op_num, key);
                eprintln!("  Before: len={} height={}", tree.len(), tree.height());
                let removed = tree.remove(&key);
                let expected = match model.get_mut(&key) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&key);
                        }
                        true
                    }
                    None => false,
                };
                eprintln!(
                    "  After: len={} height={} removed={}",
                    tree.len(),
                    tree.height(),
                    removed
                );
                assert_eq!(removed, expected, "remove({}) disagrees with the model", key);
            }

            FuzzOp::Search { key } => {
                let found = tree.search(&key);
                eprintln!("Op {}: search {} -> {}", op_num, key, found);
                assert_eq!(
                    found,
                    model.contains_key(&key),
                    "search({}) disagrees with the model",
                    key
                );
            }

            FuzzOp::Between { low, high } => {
                let found = tree.between(&low, &high);
                eprintln!("Op {}: between {} {} -> {}", op_num, low, high, found);
                let expected = low <= high && model.range(low..=high).next().is_some();
                assert_eq!(
                    found, expected,
                    "between({}, {}) disagrees with the model",
                    low, high
                );
            }
        }

        match tree.validate() {
            Ok(()) => eprintln!("  Invariant check: PASSED"),
            Err(violation) => panic!("Invariant failure after op {}: {}", op_num, violation),
        }
    }

    eprintln!("\n=== Final comparison ===");
    let expected: Vec<u16> = model
        .iter()
        .flat_map(|(key, count)| std::iter::repeat(*key).take(*count))
        .collect();
    let actual: Vec<u16> = tree.iter().copied().collect();
    eprintln!(
        "Final state: len={} height={} min={:?} max={:?}",
        tree.len(),
        tree.height(),
        tree.min(),
        tree.max()
    );
    assert_eq!(actual, expected, "In-order mismatch");
    assert_eq!(tree.min(), expected.first(), "Min mismatch");
    assert_eq!(tree.max(), expected.last(), "Max mismatch");

    eprintln!("\nAll checks passed!");
}
