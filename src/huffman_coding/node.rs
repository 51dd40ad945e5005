use std::cmp::Ordering;

/// What a node holds: either two children or a symbol.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// One element of a Huffman tree. The weight is only meaningful while the tree is being
/// built from frequencies; trees read back from a `.code` file carry zero weights.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Creation order, used to break ties between nodes of equal weight.
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    /// Create a leaf for `sym`.
    pub fn leaf(sym: u8, weight: u64, seq: u32) -> Node {
        Node::new(weight, seq, NodeData::Leaf(sym))
    }

    /// Join two nodes under a new parent whose weight is the sum of theirs.
    pub fn join(left: Node, right: Node, seq: u32) -> Node {
        Node::new(
            left.weight + right.weight,
            seq,
            NodeData::Kids(Box::new(left), Box::new(right)),
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Symbol held by a leaf, None for a branch.
    pub fn symbol(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    /// Child reached by `bit` (false = left/0, true = right/1). Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some(if bit { right } else { left }),
            NodeData::Leaf(_) => None,
        }
    }
}

impl Ord for Node {
    /// Reversed so a max-heap hands back the lightest node first. Equal weights fall back
    /// to creation order, oldest first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
