//! Reads and writes the `.code` table.
//!
//! The table is pairs of lines: the symbol as a decimal number, then its code as a string of
//! '0' and '1'. There is no header and no count; the table ends where the input ends. Record
//! order does not matter when reading.
//!
//! ```text
//! 102
//! 0
//! 99
//! 100
//! ```
//!
//! Reading rebuilds the tree one record at a time. Nodes start out unresolved and are filled
//! in as codes pass through them. Once the input is used up every node reachable from the root
//! must be a leaf or a branch with both children, otherwise the table was incomplete.
//!
use std::io::{BufRead, Write};

use log::{debug, info, trace, warn};

use super::huffman::HuffmanCode;
use super::node::{Node, NodeData};
use crate::error::{HuffError, Result};

/// A node of a tree that is still being read.
#[derive(Debug, Default)]
enum Slot {
    #[default]
    Unresolved,
    Branch(Box<Slot>, Box<Slot>),
    Leaf(u8),
}

impl HuffmanCode {
    /// Write the table: one symbol line and one code line per leaf, left subtree first.
    pub fn save<W: Write>(&self, output: &mut W) -> Result<()> {
        let leaves = self.leaves()?;
        for (sym, code) in &leaves {
            writeln!(output, "{}", sym)?;
            writeln!(output, "{}", code)?;
        }
        info!("Saved a code table with {} symbols.", leaves.len());
        Ok(())
    }

    /// Rebuild a code from a table written by save(). Reads until the input is exhausted.
    pub fn from_code_file<R: BufRead>(input: R) -> Result<Self> {
        let mut root = Slot::Unresolved;
        let mut lines = input.lines().enumerate();
        let mut records = 0;
        let mut last_line = 0;

        while let Some((idx, sym_line)) = lines.next() {
            let sym_line = sym_line?;
            let sym = parse_symbol(&sym_line, idx + 1)?;
            let (idx, code_line) = match lines.next() {
                Some((idx, line)) => (idx, line?),
                None => {
                    return Err(HuffError::format(
                        idx + 2,
                        format!("symbol {} has no code line", sym),
                    ))
                }
            };
            trace!("Record {}: symbol {} code {}", records, sym, code_line.trim());
            add_to_tree(&mut root, sym, code_line.trim(), idx + 1)?;
            records += 1;
            last_line = idx + 1;
        }

        if records == 0 {
            return Err(HuffError::format(1, "table has no records"));
        }
        let root = match root {
            // A lone symbol is stored under "0"; it becomes a leaf root again.
            Slot::Branch(left, right) if matches!(*right, Slot::Unresolved) => match *left {
                Slot::Leaf(sym) => Node::leaf(sym, 0, 0),
                left => resolve(Slot::Branch(Box::new(left), right), &mut String::new(), last_line)?,
            },
            root => resolve(root, &mut String::new(), last_line)?,
        };
        debug!("Read a code table with {} records.", records);
        Ok(HuffmanCode::from_root(root))
    }
}

fn parse_symbol(line: &str, line_no: usize) -> Result<u8> {
    let value: u32 = line
        .trim()
        .parse()
        .map_err(|_| HuffError::format(line_no, format!("'{}' is not a symbol number", line.trim())))?;
    u8::try_from(value)
        .map_err(|_| HuffError::format(line_no, format!("symbol {} is out of range", value)))
}

/// Walk `code` from the root, creating branches as needed, and put a leaf for `sym` at its end.
fn add_to_tree(root: &mut Slot, sym: u8, code: &str, line_no: usize) -> Result<()> {
    if code.is_empty() {
        return Err(HuffError::format(line_no, "empty code"));
    }
    let mut slot = root;
    for c in code.chars() {
        let bit = match c {
            '0' => false,
            '1' => true,
            other => {
                return Err(HuffError::format(
                    line_no,
                    format!("'{}' is not a 0 or 1 in code {}", other, code),
                ))
            }
        };
        slot = descend(slot, bit, code, line_no)?;
    }
    match slot {
        Slot::Branch(..) => {
            return Err(HuffError::format(
                line_no,
                format!("code {} for symbol {} is a prefix of another code", code, sym),
            ))
        }
        Slot::Leaf(old) => warn!("Code {} given again; symbol {} replaces {}.", code, sym, old),
        Slot::Unresolved => {}
    }
    *slot = Slot::Leaf(sym);
    Ok(())
}

/// Step into the child for `bit`, turning an unresolved node into a branch first.
fn descend<'a>(slot: &'a mut Slot, bit: bool, code: &str, line_no: usize) -> Result<&'a mut Slot> {
    if matches!(slot, Slot::Unresolved) {
        *slot = Slot::Branch(Box::default(), Box::default());
    }
    match slot {
        Slot::Branch(left, right) => Ok(if bit { right.as_mut() } else { left.as_mut() }),
        Slot::Leaf(other) => Err(HuffError::format(
            line_no,
            format!("code {} runs through the leaf for symbol {}", code, other),
        )),
        Slot::Unresolved => Err(HuffError::format(line_no, "unresolved node")),
    }
}

/// Turn a fully read slot tree into nodes. Any unresolved slot means a code is missing.
fn resolve(slot: Slot, path: &mut String, line_no: usize) -> Result<Node> {
    match slot {
        Slot::Leaf(sym) => Ok(Node::leaf(sym, 0, 0)),
        Slot::Branch(left, right) => {
            path.push('0');
            let left = resolve(*left, path, line_no)?;
            path.pop();
            path.push('1');
            let right = resolve(*right, path, line_no)?;
            path.pop();
            Ok(Node::new(0, 0, NodeData::Kids(Box::new(left), Box::new(right))))
        }
        Slot::Unresolved => Err(HuffError::format(
            line_no,
            format!("no code ends at or passes through {}", path),
        )),
    }
}
