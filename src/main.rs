use grove::tree::{BinarySearchTree, RedBlackTree};

fn main() {
    // Sorted input is the naive BST's worst case. Watch the heights.
    for n in [100usize, 1_000, 10_000] {
        let mut naive = BinarySearchTree::new();
        let mut balanced = RedBlackTree::new();
        for value in 0..n {
            naive.insert(value);
            balanced.insert(value);
        }
        let bound = (2.0 * ((n + 1) as f64).log2()) as usize;
        println!(
            "n = {n:>6}  naive height = {:>6}  red-black height = {:>2}  (bound {bound})",
            naive.height(),
            balanced.height(),
        );
    }

    // Churn a tree and re-derive every invariant from scratch.
    let mut tree = RedBlackTree::new();
    for value in 0..4_096u32 {
        tree.insert(value.wrapping_mul(2_654_435_761) % 4_096);
    }
    for value in 0..2_048u32 {
        tree.remove(&(value * 2 % 4_096));
    }
    match tree.validate() {
        Ok(()) => println!(
            "churned tree: {} elements, height {}, invariants hold",
            tree.len(),
            tree.height()
        ),
        Err(violation) => println!("churned tree is broken: {violation}"),
    }

    println!("tree handle: {} bytes", std::mem::size_of::<RedBlackTree<u64>>());
}
