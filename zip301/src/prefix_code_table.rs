use std::{
    cmp::Reverse,
    collections::{BTreeMap, BinaryHeap},
};

use bit_vec::BitVec;
use itertools::Itertools;
use log::debug;

use crate::frequency::FrequencyTable;

type NodeId = usize;

/// Huffman tree stored as an arena. Nodes only refer to each other by index,
/// and a node's index is also the order in which it entered the merge queue.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        symbol: u8,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

impl Tree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Ties on weight go to the node that entered the queue first: leaves in
    /// ascending symbol order, then merged nodes in the order they were created.
    /// The first node popped becomes the left child. Returns `None` when there
    /// is nothing to encode.
    pub fn new(frequencies: &FrequencyTable) -> Option<Self> {
        let mut nodes = Vec::with_capacity(frequencies.len() * 2);
        let mut trees = Trees::default();

        for (symbol, weight) in frequencies.iter() {
            trees.insert(weight, nodes.len());
            nodes.push(Node::Leaf { symbol, weight });
        }

        loop {
            match trees.pop_lowest()? {
                PopResult::TreesToMerge { left, right } => {
                    let weight = nodes[left].weight() + nodes[right].weight();
                    trees.insert(weight, nodes.len());
                    nodes.push(Node::Internal {
                        weight,
                        left,
                        right,
                    });
                }
                PopResult::Single(root) => return Some(Tree { nodes, root }),
            }
        }
    }

    pub fn weight(&self) -> usize {
        self.nodes[self.root].weight()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walks the tree depth first, `0` for a left edge and `1` for a right edge.
    /// A lone leaf at the root has no edges and is given the code `0`.
    pub fn generate_codes(&self) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut pending = vec![(self.root, BitVec::new())];

        while let Some((id, path)) = pending.pop() {
            match self.nodes[id] {
                Node::Leaf { symbol, .. } => {
                    let code = if path.is_empty() {
                        BitVec::from_elem(1, false)
                    } else {
                        path
                    };
                    codes.insert(symbol, code);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);

                    pending.push((right, right_path));
                    pending.push((left, left_path));
                }
            }
        }

        CodeTable(codes)
    }
}

#[derive(Default)]
struct Trees(BinaryHeap<Reverse<(usize, NodeId)>>);

impl Trees {
    fn insert(&mut self, weight: usize, id: NodeId) {
        self.0.push(Reverse((weight, id)));
    }

    fn pop_lowest(&mut self) -> Option<PopResult> {
        let Reverse((_, left)) = self.0.pop()?;

        let item_result = match self.0.pop() {
            Some(Reverse((_, right))) => PopResult::TreesToMerge { left, right },
            None => PopResult::Single(left),
        };

        Some(item_result)
    }
}

enum PopResult {
    TreesToMerge { left: NodeId, right: NodeId },
    Single(NodeId),
}

/// Symbol to code mapping, iterated in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable(BTreeMap<u8, BitVec>);

impl CodeTable {
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        let tree = Tree::new(frequencies)?;
        let codes = tree.generate_codes();
        debug!(
            "built a tree of {} nodes for {} symbols",
            tree.node_count(),
            codes.len()
        );
        debug_assert!(is_prefix_free(&codes));
        Some(codes)
    }

    pub fn get(&self, symbol: u8) -> Option<&BitVec> {
        self.0.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitVec)> + '_ {
        self.0.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Number of bits needed to encode content with the given frequencies.
    pub fn encoded_bit_count(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }
}

/// Renders a code as the ASCII `0`/`1` string used in archive headers.
pub fn code_to_string(code: &BitVec) -> String {
    code.iter().map(|bit| if bit { '1' } else { '0' }).collect()
}

/// True when no code in the table is a prefix of another one.
pub fn is_prefix_free(table: &CodeTable) -> bool {
    table
        .iter()
        .map(|(_, code)| code)
        .sorted_by_key(|code| code.len())
        .tuple_combinations()
        .all(|(shorter, longer): (&BitVec, &BitVec)| {
            !longer.iter().take(shorter.len()).eq(shorter.iter())
        })
}
