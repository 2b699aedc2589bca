use bit_vec::BitVec;

use crate::{bits::BitReader, error::MalformedArchive};

const ROOT: usize = 0;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: [Option<usize>; 2],
    symbol: Option<u8>,
}

impl TrieNode {
    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// Binary trie keyed by code bits, rebuilt from an archive's code table.
#[derive(Debug, Clone)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl Default for DecodeTrie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }
}

/// A code that cannot be added without breaking the prefix-free property.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeConflict;

impl DecodeTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].is_leaf()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn insert(&mut self, code: &BitVec, symbol: u8) -> Result<(), CodeConflict> {
        if code.is_empty() {
            return Err(CodeConflict);
        }

        let mut current = ROOT;
        for bit in code.iter() {
            if self.nodes[current].symbol.is_some() {
                return Err(CodeConflict);
            }
            current = match self.nodes[current].children[bit as usize] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children[bit as usize] = Some(child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.symbol.is_some() || !node.is_leaf() {
            return Err(CodeConflict);
        }
        node.symbol = Some(symbol);
        Ok(())
    }

    /// Walks exactly `bit_count` bits from `reader`, emitting a symbol every
    /// time a terminal node is reached and restarting from the root.
    pub fn decode(
        &self,
        reader: &mut BitReader<'_>,
        bit_count: usize,
    ) -> Result<Vec<u8>, MalformedArchive> {
        let mut output = Vec::new();
        let mut current = ROOT;

        for bit_offset in 0..bit_count {
            let bit = reader.read_bit().ok_or(MalformedArchive::TruncatedCode)?;

            current = self.nodes[current].children[bit as usize]
                .ok_or(MalformedArchive::UnknownCodePath { bit_offset })?;

            if let Some(symbol) = self.nodes[current].symbol {
                output.push(symbol);
                current = ROOT;
            }
        }

        if current != ROOT {
            return Err(MalformedArchive::TruncatedCode);
        }

        Ok(output)
    }
}
