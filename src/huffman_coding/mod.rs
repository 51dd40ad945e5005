//! The huffman_coding module builds, stores and walks Huffman codes.
//!
//! A [`huffman::HuffmanCode`] is a binary tree whose leaves are byte values. Going left
//! appends a 0 to a symbol's code and going right appends a 1, so no code is a prefix of
//! another.
//!
//! - node: the tree element, ordered by weight for the build.
//! - huffman_tree_from_weights: greedy build of an optimal tree from frequency counts.
//! - huffman: the code itself, plus code lookup and encoding.
//! - code_file: writing the code as a `.code` table and reading it back.
//! - translate: decoding a bit stream with a code.
//!
//! Everything here is single threaded. A code is built once and not changed afterwards.
//!

pub mod code_file;
pub mod huffman;
pub mod huffman_tree_from_weights;
pub mod node;
pub mod translate;
