//! Builds a Huffman tree from symbol frequencies.
//!
//! Every symbol with a nonzero count becomes a leaf. The two lightest nodes are repeatedly
//! joined under a new parent until one node is left; that node is the root. When two nodes
//! weigh the same, the one created first comes out first. Leaves are created in ascending
//! symbol order and each joined parent takes the next sequence number, so a given frequency
//! table always yields the same tree. The first node taken becomes the left (0) child.
//!
//! A table with one nonzero entry has nothing to join; the lone leaf is returned as the root.
//! A table with no nonzero entries yields no tree at all.
//!

use std::collections::BinaryHeap;

use log::{debug, trace};

use super::node::{Node, NodeData};

/// Largest alphabet we build trees for (byte values).
pub const MAX_SYMBOLS: usize = 256;

/// Turn a frequency table (indexed by symbol) into a tree. Entries past the first 256 are ignored.
/// Returns None if every count is zero.
pub fn tree_from_weights(freqs: &[u32]) -> Option<Node> {
    let mut seq = 0_u32;
    let mut heap: BinaryHeap<Node> = freqs
        .iter()
        .take(MAX_SYMBOLS)
        .enumerate()
        .filter(|&(_, &f)| f > 0)
        .map(|(sym, &f)| {
            let leaf = Node::leaf(sym as u8, f as u64, seq);
            seq += 1;
            leaf
        })
        .collect();

    debug!("Building a Huffman tree from {} symbols.", heap.len());

    loop {
        // Empty heap: no symbols, so no tree.
        let left = heap.pop()?;
        // Only one node left, and that one is the root.
        let right = match heap.pop() {
            Some(node) => node,
            None => return Some(left),
        };
        trace!(
            "Joining weights {} (seq {}) and {} (seq {}) as seq {}",
            left.weight,
            left.seq,
            right.weight,
            right.seq,
            seq
        );
        heap.push(Node::join(left, right, seq));
        seq += 1;
    }
}

/// Recursively walk the tree and return in "leaves" how far (deep) from the root node each leaf is.
/// A lone root leaf still needs one bit to be written, so it reports a depth of 1.
pub fn code_lengths(root: &Node) -> Vec<(u8, usize)> {
    let mut leaves = vec![];
    match root.node_data {
        NodeData::Leaf(sym) => leaves.push((sym, 1)),
        NodeData::Kids(..) => return_leaves(root, 0, &mut leaves),
    }
    leaves
}

fn return_leaves(node: &Node, depth: usize, leaves: &mut Vec<(u8, usize)>) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            return_leaves(left_child, depth + 1, leaves);
            return_leaves(right_child, depth + 1, leaves);
        }
        NodeData::Leaf(sym) => leaves.push((*sym, depth)),
    }
}

/// Sum over all symbols of frequency times code length.
pub fn weighted_path_length(root: &Node, freqs: &[u32]) -> u64 {
    code_lengths(root)
        .iter()
        .map(|&(sym, len)| freqs.get(sym as usize).copied().unwrap_or(0) as u64 * len as u64)
        .sum()
}

#[cfg(test)]
mod test {
    use super::{code_lengths, tree_from_weights, weighted_path_length};
    use crate::huffman_coding::node::NodeData;

    fn freq_table(pairs: &[(u8, u32)]) -> Vec<u32> {
        let mut freqs = vec![0_u32; 256];
        for &(sym, f) in pairs {
            freqs[sym as usize] = f;
        }
        freqs
    }

    /// Cost of an optimal code computed independently: the sum of every merged weight.
    fn reference_cost(freqs: &[u32]) -> u64 {
        let mut weights: Vec<u64> = freqs.iter().filter(|&&f| f > 0).map(|&f| f as u64).collect();
        if weights.len() == 1 {
            return weights[0];
        }
        let mut cost = 0;
        while weights.len() > 1 {
            weights.sort_unstable_by(|a, b| b.cmp(a));
            let a = weights.pop().unwrap();
            let b = weights.pop().unwrap();
            cost += a + b;
            weights.push(a + b);
        }
        cost
    }

    #[test]
    fn textbook_lengths() {
        let freqs = freq_table(&[(b'a', 5), (b'b', 9), (b'c', 12), (b'd', 13), (b'e', 16), (b'f', 45)]);
        let root = tree_from_weights(&freqs).unwrap();
        let mut lengths = code_lengths(&root);
        lengths.sort();
        assert_eq!(
            lengths,
            vec![(b'a', 4), (b'b', 4), (b'c', 3), (b'd', 3), (b'e', 3), (b'f', 1)]
        );
        assert_eq!(weighted_path_length(&root, &freqs), 224);
    }

    #[test]
    fn optimal_on_assorted_tables() {
        let tables = [
            freq_table(&[(0, 1), (1, 1), (2, 1), (3, 1)]),
            freq_table(&[(10, 1), (11, 2), (12, 4), (13, 8), (14, 16), (15, 32)]),
            freq_table(&[(b'x', 7), (b'y', 7), (b'z', 7)]),
            (0..256).map(|i| (i as u32 * 37) % 101).collect(),
            freq_table(&[(255, 1000), (0, 1)]),
        ];
        for freqs in tables.iter() {
            let root = tree_from_weights(freqs).unwrap();
            assert_eq!(weighted_path_length(&root, freqs), reference_cost(freqs));
        }
    }

    #[test]
    fn root_weight_is_total() {
        let freqs = freq_table(&[(1, 3), (2, 4), (3, 10)]);
        let root = tree_from_weights(&freqs).unwrap();
        assert_eq!(root.weight, 17);
    }

    #[test]
    fn ties_are_reproducible() {
        let freqs = freq_table(&[(b'a', 1), (b'b', 1), (b'c', 1), (b'd', 1)]);
        let first = tree_from_weights(&freqs).unwrap();
        let second = tree_from_weights(&freqs).unwrap();
        assert_eq!(first, second);
        // a and b are the two oldest nodes, so they are joined first, a on the left.
        let left = first.child(false).unwrap();
        assert_eq!(left.child(false).unwrap().symbol(), Some(b'a'));
        assert_eq!(left.child(true).unwrap().symbol(), Some(b'b'));
    }

    #[test]
    fn single_symbol_is_a_leaf_root() {
        let freqs = freq_table(&[(b'q', 12)]);
        let root = tree_from_weights(&freqs).unwrap();
        assert!(matches!(root.node_data, NodeData::Leaf(b'q')));
        assert_eq!(code_lengths(&root), vec![(b'q', 1)]);
    }

    #[test]
    fn no_symbols_no_tree() {
        assert!(tree_from_weights(&[0; 256]).is_none());
        assert!(tree_from_weights(&[]).is_none());
    }
}
