use std::io::Write;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman_tree_from_weights::{self, tree_from_weights, MAX_SYMBOLS};
use super::node::{Node, NodeData};
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{HuffError, Result};

/// A prefix-free code held as a tree. Empty when built from a table with no nonzero counts.
///
/// A code with a single symbol is held as a lone leaf at the root. That symbol is written
/// as the one-bit code "0".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanCode {
    root: Option<Node>,
}

impl HuffmanCode {
    /// Build an optimal code from byte frequencies (index = symbol).
    pub fn from_frequencies(freqs: &[u32]) -> Self {
        let code = Self {
            root: tree_from_weights(freqs),
        };
        debug!("Built a Huffman code for {} symbols.", code.len());
        code
    }

    pub(crate) fn from_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// The root of the tree, or EmptyScheme if there is none.
    pub fn root(&self) -> Result<&Node> {
        self.root.as_ref().ok_or(HuffError::EmptyScheme)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.root
            .as_ref()
            .map_or(0, |root| huffman_tree_from_weights::code_lengths(root).len())
    }

    /// Every (symbol, code) pair, walking the tree depth first, left before right.
    pub fn leaves(&self) -> Result<Vec<(u8, String)>> {
        let root = self.root()?;
        let mut leaves = Vec::with_capacity(MAX_SYMBOLS);
        match root.node_data {
            // A lone symbol still takes one bit.
            NodeData::Leaf(sym) => leaves.push((sym, String::from("0"))),
            NodeData::Kids(..) => collect_codes(root, &mut String::new(), &mut leaves),
        }
        Ok(leaves)
    }

    /// Lookup from symbol to its code string.
    pub fn codes(&self) -> Result<FxHashMap<u8, String>> {
        Ok(self.leaves()?.into_iter().collect())
    }

    /// Sum over all symbols of frequency times code length.
    pub fn weighted_path_length(&self, freqs: &[u32]) -> Result<u64> {
        Ok(huffman_tree_from_weights::weighted_path_length(
            self.root()?,
            freqs,
        ))
    }

    /// Write the code for each byte of `data` to the bitstream.
    pub fn encode<W: Write>(&self, data: &[u8], bw: &mut BitWriter<W>) -> Result<()> {
        let mut table: Vec<Option<Vec<bool>>> = vec![None; MAX_SYMBOLS];
        for (sym, code) in self.leaves()? {
            trace!("Symbol {:>3}: {}", sym, code);
            table[sym as usize] = Some(code.bytes().map(|b| b == b'1').collect());
        }
        for &byte in data {
            let bits = table[byte as usize]
                .as_ref()
                .ok_or(HuffError::UnknownSymbol(byte))?;
            bw.out_bits(bits)?;
        }
        debug!(
            "Encoded {} bytes into {} bits.",
            data.len(),
            bw.bits_written()
        );
        Ok(())
    }
}

/// Walk the tree appending '0' going left and '1' going right; push each leaf's path.
fn collect_codes(node: &Node, path: &mut String, leaves: &mut Vec<(u8, String)>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            path.push('0');
            collect_codes(left, path, leaves);
            path.pop();
            path.push('1');
            collect_codes(right, path, leaves);
            path.pop();
        }
        NodeData::Leaf(sym) => leaves.push((*sym, path.clone())),
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanCode;
    use crate::bitstream::bitwriter::BitWriter;
    use crate::error::HuffError;

    fn textbook() -> Vec<u32> {
        let mut freqs = vec![0_u32; 256];
        for (sym, f) in [(b'a', 5), (b'b', 9), (b'c', 12), (b'd', 13), (b'e', 16), (b'f', 45)] {
            freqs[sym as usize] = f;
        }
        freqs
    }

    #[test]
    fn prefix_free() {
        let code = HuffmanCode::from_frequencies(&textbook());
        let leaves = code.leaves().unwrap();
        assert_eq!(leaves.len(), 6);
        for (a, code_a) in &leaves {
            for (b, code_b) in &leaves {
                if a != b {
                    assert!(!code_b.starts_with(code_a.as_str()), "{} prefixes {}", code_a, code_b);
                }
            }
        }
    }

    #[test]
    fn textbook_code_lengths() {
        let code = HuffmanCode::from_frequencies(&textbook());
        let codes = code.codes().unwrap();
        let len = |c: u8| codes[&c].len();
        assert_eq!(
            [len(b'f'), len(b'c'), len(b'd'), len(b'e'), len(b'a'), len(b'b')],
            [1, 3, 3, 3, 4, 4]
        );
        assert_eq!(code.weighted_path_length(&textbook()).unwrap(), 224);
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn single_symbol_code_is_zero() {
        let mut freqs = vec![0_u32; 256];
        freqs[b'z' as usize] = 3;
        let code = HuffmanCode::from_frequencies(&freqs);
        assert_eq!(code.len(), 1);
        assert_eq!(code.leaves().unwrap(), vec![(b'z', String::from("0"))]);
    }

    #[test]
    fn empty_code_rejects_use() {
        let code = HuffmanCode::from_frequencies(&[0; 256]);
        assert!(code.is_empty());
        assert_eq!(code.len(), 0);
        assert!(matches!(code.leaves(), Err(HuffError::EmptyScheme)));
        let mut bw = BitWriter::new(Vec::new());
        assert!(matches!(code.encode(b"abc", &mut bw), Err(HuffError::EmptyScheme)));
    }

    #[test]
    fn encode_writes_codes_in_order() {
        let code = HuffmanCode::from_frequencies(&textbook());
        let codes = code.codes().unwrap();
        let mut bw = BitWriter::new(Vec::new());
        code.encode(b"fab", &mut bw).unwrap();
        let expected = format!("{}{}{}", codes[&b'f'], codes[&b'a'], codes[&b'b']);
        assert_eq!(bw.bits_written() as usize, expected.len());
    }

    #[test]
    fn encode_unknown_symbol() {
        let code = HuffmanCode::from_frequencies(&textbook());
        let mut bw = BitWriter::new(Vec::new());
        assert!(matches!(
            code.encode(b"abz", &mut bw),
            Err(HuffError::UnknownSymbol(b'z'))
        ));
    }
}
