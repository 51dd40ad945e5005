//! The bitstream module is the I/O layer between byte streams and the Huffman translator.
//!
//! The translator only needs a [`BitSource`]: something that hands out one bit at a time and
//! says when it has run dry. [`bitreader::BitReader`] is the source for `.short` files and
//! [`bitwriter::BitWriter`] writes them.
//!
//! A `.short` file is the packed code bits, most significant bit first, followed by one trailer
//! byte that says how many bits of the last data byte are real (1-8, or 0 for an empty stream).
//! The zero padding in the last byte is never handed out as bits.
//!
use std::collections::VecDeque;
use std::io;

pub mod bitreader;
pub mod bitwriter;

/// A stream of bits consumed one at a time.
pub trait BitSource {
    /// Next bit (true = 1), or None once the source is exhausted.
    fn next_bit(&mut self) -> io::Result<Option<bool>>;
}

/// In-memory bit sequences, consumed from the front.
impl BitSource for VecDeque<bool> {
    fn next_bit(&mut self) -> io::Result<Option<bool>> {
        Ok(self.pop_front())
    }
}

/// Turn a string of '0' and '1' into a bit queue. Any other character is skipped.
pub fn bits_from_str(code: &str) -> VecDeque<bool> {
    code.chars()
        .filter_map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}
