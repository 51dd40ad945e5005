//! BitReader: reads the packed bitstream of a `.short` file.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!
use std::io::{self, Read};

use log::trace;

use super::BitSource;

const BUFFER_SIZE: usize = 64 * 1024;
/// We must see the last data byte and the trailer together before handing out the last byte's bits.
const LOOKAHEAD: usize = 2;

/// Reads bits, most significant bit first, from a byte source.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    /// When set, the last byte of the source is a trailer holding the valid bit count of the byte before it.
    framed: bool,
    eof: bool,
    source: R,
}

impl<R: Read> BitReader<R> {
    /// Creates a new BitReader for a `.short` stream (packed bits plus trailer byte).
    pub fn new(source: R) -> Self {
        Self::with_framing(source, true)
    }

    /// Creates a BitReader that hands out every bit of every byte, padding included.
    pub fn raw(source: R) -> Self {
        Self::with_framing(source, false)
    }

    fn with_framing(source: R, framed: bool) -> Self {
        Self {
            buffer: Vec::with_capacity(BUFFER_SIZE),
            cursor: 0,
            bit_index: 0,
            framed,
            eof: false,
            source,
        }
    }

    /// Refill the buffer until we hold at least LOOKAHEAD + 1 unread bytes or the source is dry.
    fn fill(&mut self) -> io::Result<()> {
        while !self.eof && self.buffer.len() - self.cursor <= LOOKAHEAD {
            // Drop what we already used before reading more
            self.buffer.drain(..self.cursor);
            self.cursor = 0;
            let start = self.buffer.len();
            self.buffer.resize(start + BUFFER_SIZE, 0);
            let size = loop {
                match self.source.read(&mut self.buffer[start..]) {
                    Ok(size) => break size,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        self.buffer.truncate(start);
                        return Err(e);
                    }
                }
            };
            self.buffer.truncate(start + size);
            if size == 0 {
                self.eof = true;
                trace!("Bit source exhausted at {}", self.loc());
            }
        }
        Ok(())
    }

    /// Number of bits of the current byte that may be handed out.
    fn valid_bits(&mut self) -> io::Result<usize> {
        self.fill()?;
        let remaining = self.buffer.len() - self.cursor;
        if !self.framed {
            return Ok(if remaining == 0 { 0 } else { 8 });
        }
        match (self.eof, remaining) {
            // Nothing at all, or only the trailer is left.
            (true, 0) | (true, 1) => Ok(0),
            // Current byte is the last data byte; the trailer follows it.
            (true, 2) => {
                let trailer = self.buffer[self.cursor + 1] as usize;
                if trailer == 0 || trailer > 8 {
                    return Err(bad_trailer(trailer as u8));
                }
                Ok(trailer)
            }
            _ => Ok(8),
        }
    }

    /// Return bit as Option<bool> (true for 1), or None if there is no more data to read
    pub fn bit(&mut self) -> io::Result<Option<bool>> {
        if self.bit_index >= self.valid_bits()? {
            return Ok(None);
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Ok(Some(bit == 1))
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl<R: Read> BitSource for BitReader<R> {
    fn next_bit(&mut self) -> io::Result<Option<bool>> {
        self.bit()
    }
}

fn bad_trailer(trailer: u8) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid bit count {} in stream trailer", trailer),
    )
}
