use std::io::Write;

use log::{debug, error};

use super::huffman::HuffmanCode;
use super::node::{Node, NodeData};
use crate::bitstream::BitSource;
use crate::error::{HuffError, Result};

impl HuffmanCode {
    /// Decode bits from `input`, writing each symbol to `output` as soon as it is found.
    /// Returns the number of symbols written.
    ///
    /// If the bits run out part way down the tree, the partial code is dropped without error.
    /// A bit that leads nowhere means the stream was not written with this table.
    pub fn translate<S: BitSource, W: Write>(&self, input: &mut S, output: &mut W) -> Result<u64> {
        let root = self.root()?;
        let mut cursor = root;
        let mut depth = 0_usize;
        let mut symbols = 0_u64;

        while let Some(bit) = input.next_bit()? {
            cursor = match step(cursor, bit) {
                Some(next) => next,
                None => {
                    error!(
                        "Bit {} at depth {} after {} symbols leads nowhere.",
                        bit as u8, depth, symbols
                    );
                    return Err(HuffError::Mismatch(format!(
                        "no branch for bit {} at depth {} after {} symbols",
                        bit as u8, depth, symbols
                    )));
                }
            };
            depth += 1;
            if let Some(sym) = cursor.symbol() {
                output.write_all(&[sym])?;
                symbols += 1;
                cursor = root;
                depth = 0;
            }
        }

        if depth > 0 {
            debug!("Dropped {} trailing bits of an unfinished code.", depth);
        }
        debug!("Translated {} symbols.", symbols);
        Ok(symbols)
    }
}

/// Follow one bit down from `node`. A lone leaf root answers to "0" itself.
fn step(node: &Node, bit: bool) -> Option<&Node> {
    match node.node_data {
        NodeData::Kids(..) => node.child(bit),
        NodeData::Leaf(_) if !bit => Some(node),
        NodeData::Leaf(_) => None,
    }
}

#[cfg(test)]
mod test {
    use crate::bitstream::bitreader::BitReader;
    use crate::bitstream::bits_from_str;
    use crate::error::HuffError;
    use crate::huffman_coding::huffman::HuffmanCode;

    fn textbook() -> HuffmanCode {
        let mut freqs = vec![0_u32; 256];
        for (sym, f) in [(b'a', 5), (b'b', 9), (b'c', 12), (b'd', 13), (b'e', 16), (b'f', 45)] {
            freqs[sym as usize] = f;
        }
        HuffmanCode::from_frequencies(&freqs)
    }

    fn decode(code: &HuffmanCode, bits: &str) -> Result<Vec<u8>, HuffError> {
        let mut out = Vec::new();
        code.translate(&mut bits_from_str(bits), &mut out)?;
        Ok(out)
    }

    #[test]
    fn each_code_decodes_to_its_symbol() {
        let code = textbook();
        for (sym, path) in code.leaves().unwrap() {
            assert_eq!(decode(&code, &path).unwrap(), vec![sym]);
        }
    }

    #[test]
    fn message_round_trip() {
        let code = textbook();
        let codes = code.codes().unwrap();
        let message = b"deadbeefcafe";
        let bits: String = message.iter().map(|b| codes[b].as_str()).collect();
        assert_eq!(decode(&code, &bits).unwrap(), message.to_vec());
    }

    #[test]
    fn read_back_table_decodes_the_same() {
        let code = textbook();
        let mut table = Vec::new();
        code.save(&mut table).unwrap();
        let back = HuffmanCode::from_code_file(table.as_slice()).unwrap();
        for (sym, path) in code.leaves().unwrap() {
            assert_eq!(decode(&back, &path).unwrap(), vec![sym]);
        }
    }

    #[test]
    fn truncated_code_is_dropped() {
        let code = textbook();
        let codes = code.codes().unwrap();
        let a = &codes[&b'a'];
        // One whole 'a' then the first three bits of another.
        let bits = format!("{}{}", a, &a[..3]);
        assert_eq!(decode(&code, &bits).unwrap(), vec![b'a']);
    }

    #[test]
    fn padding_bits_from_raw_bytes() {
        let code = textbook();
        let codes = code.codes().unwrap();
        // 'f' and 'a' take 5 bits; the first 3 bits of another 'a' fill out the byte.
        let bits = format!("{}{}{}", codes[&b'f'], codes[&b'a'], &codes[&b'a'][..3]);
        assert_eq!(bits.len(), 8);
        let bytes: Vec<u8> = bits
            .as_bytes()
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0_u8, |acc, &c| (acc << 1) | (c - b'0')))
            .collect();
        let mut out = Vec::new();
        let count = code
            .translate(&mut BitReader::raw(bytes.as_slice()), &mut out)
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(out, b"fa".to_vec());
    }

    #[test]
    fn single_symbol_stream() {
        let mut freqs = vec![0_u32; 256];
        freqs[b'x' as usize] = 4;
        let code = HuffmanCode::from_frequencies(&freqs);
        assert_eq!(decode(&code, "0000").unwrap(), b"xxxx".to_vec());
        assert!(matches!(decode(&code, "001"), Err(HuffError::Mismatch(_))));
    }

    #[test]
    fn empty_code_is_rejected() {
        let code = HuffmanCode::from_frequencies(&[0; 256]);
        assert!(matches!(decode(&code, "0101"), Err(HuffError::EmptyScheme)));
    }

    #[test]
    fn no_bits_no_symbols() {
        assert_eq!(decode(&textbook(), "").unwrap(), Vec::<u8>::new());
    }
}
