//! The tools module provides helper functions for the Huffman compressor.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Byte frequency count of the input.
//!
pub mod cli;
pub mod freq_count;
