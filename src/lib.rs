//! Huffman coding of byte streams.
//!
//! Version 0.1.0
//!
//! Builds an optimal prefix-free code from byte frequencies, saves it as a plain text `.code`
//! table, reads such a table back, and decodes a bitstream with it.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffcode test.txt`
//!
//! This writes the code table to test.code and the packed bits to test.short.
//! `$> huffcode -d test.short` then rebuilds the original bytes into test.new.
//!
//! From code:
//!
//! ```
//! use huffcode::{bits_from_str, HuffmanCode};
//!
//! let mut freqs = vec![0_u32; 256];
//! freqs[b'a' as usize] = 3;
//! freqs[b'b' as usize] = 1;
//! let code = HuffmanCode::from_frequencies(&freqs);
//!
//! let mut table = Vec::new();
//! code.save(&mut table).unwrap();
//! assert_eq!(table, b"98\n0\n97\n1\n");
//!
//! let mut out = Vec::new();
//! code.translate(&mut bits_from_str("1101"), &mut out).unwrap();
//! assert_eq!(out, b"aaba");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitreader::BitReader;
pub use bitstream::bitwriter::BitWriter;
pub use bitstream::{bits_from_str, BitSource};
pub use error::{HuffError, Result};
pub use huffman_coding::huffman::HuffmanCode;
