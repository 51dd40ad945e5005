//! Byte frequency counts, the input to the Huffman tree build.
//!
use rayon::prelude::*;

/// Inputs larger than this are counted in parallel chunks.
const PAR_THRESHOLD: usize = 64 * 1024;
const CHUNK_SIZE: usize = 16 * 1024;

/// Returns a frequency count (index = byte value) of the input data.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    if data.len() <= PAR_THRESHOLD {
        return count(data, vec![0_u32; 256]);
    }
    data.par_chunks(CHUNK_SIZE)
        .fold(|| vec![0_u32; 256], |acc, chunk| count(chunk, acc))
        .reduce(|| vec![0_u32; 256], merge)
}

fn count(data: &[u8], mut freqs: Vec<u32>) -> Vec<u32> {
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

fn merge(mut total: Vec<u32>, part: Vec<u32>) -> Vec<u32> {
    total.iter_mut().zip(part).for_each(|(t, p)| *t += p);
    total
}
