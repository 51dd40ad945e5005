use std::io::{self, Write};

/// Output is handed to the writer in chunks of about this size.
const BUFFER_SIZE: usize = 64 * 1024;

/// Writes a packed bitstream, most significant bit first, ending with the trailer byte that
/// tells the reader how many bits of the last byte are real.
pub struct BitWriter<W: Write> {
    /// Output buffer used to write the bitstream.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Count of every bit put on the stream so far.
    bits_written: u64,
    /// Handle to the output stream
    writer: W,
}

impl<W: Write> BitWriter<W> {
    /// Create a new BitWriter on top of `writer`. Call finish() when done or the tail is lost.
    pub fn new(writer: W) -> Self {
        Self {
            output: Vec::with_capacity(BUFFER_SIZE),
            queue: 0,
            q_bits: 0,
            bits_written: 0,
            writer,
        }
    }

    /// Move full bytes from the queue to the output buffer once the queue is nearly full.
    fn push_queue(&mut self) -> io::Result<()> {
        if self.q_bits > 56 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte); //push the packed byte out
                self.q_bits -= 8; //adjust the count of bits left in the queue
            }
        }
        if self.output.len() >= BUFFER_SIZE {
            self.writer.write_all(&self.output)?;
            self.output.clear();
        }
        Ok(())
    }

    /// Put a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) -> io::Result<()> {
        self.push_queue()?;
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        self.bits_written += 1;
        Ok(())
    }

    /// Put a run of bits on the stream, first bit first.
    pub fn out_bits(&mut self, bits: &[bool]) -> io::Result<()> {
        bits.iter().try_for_each(|&bit| self.out_bit(bit))
    }

    /// How many bits have been written so far (padding and trailer excluded).
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits.
    fn flush(&mut self) {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let byte = ((self.queue << (8 - self.q_bits)) & 0xff) as u8;
            self.output.push(byte);
            self.q_bits = 0;
        }
    }

    /// Pad the last byte, append the trailer and write everything out. Returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        let trailer = match self.bits_written % 8 {
            0 if self.bits_written == 0 => 0,
            0 => 8,
            n => n as u8,
        };
        self.flush();
        self.output.push(trailer);
        self.writer.write_all(&self.output)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
