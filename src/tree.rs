//! Huffman code-tree construction.
//!
//! Nodes live in an arena and refer to their children by [`NodeId`]. The
//! builder keeps a min-heap of pending subtrees and merges the two lightest
//! until one remains, so construction is O(N log N) in the number of
//! distinct symbols.
//!
//! # Tie-breaking
//!
//! Every heap item carries an `order` number: leaves take the position of
//! their symbol in the frequency table (first occurrence in the input) and
//! each merged node takes the next unused number. Among equal weights the
//! lower `order` is extracted first. The first item extracted in a round
//! becomes the left child (bit `0`), the second the right child (bit `1`).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Index of a node in a [`CodeTree`] arena.
///
/// 32 bits wide, so a tree holds at most `u32::MAX` nodes (about 2^31
/// distinct symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A symbol and its count.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Occurrence count.
        weight: u64,
    },
    /// Two subtrees; weight is the sum of theirs.
    Internal {
        /// Subtree reached with a `0` bit.
        left: NodeId,
        /// Subtree reached with a `1` bit.
        right: NodeId,
        /// Combined count.
        weight: u64,
    },
}

impl<S> Node<S> {
    /// Aggregate frequency of the subtree rooted here.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// A complete code tree with a single root.
#[derive(Debug, Clone)]
pub struct CodeTree<S> {
    nodes: Vec<Node<S>>,
    root: NodeId,
}

impl<S> CodeTree<S> {
    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.index()]
    }

    /// Total count at the root, equal to the input length.
    pub fn weight(&self) -> u64 {
        self.node(self.root).weight()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves, one per distinct symbol.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Number of internal nodes; one less than the leaf count.
    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }
}

/// Convert an arena position to a 32-bit index.
pub(crate) fn arena_index(pos: usize) -> Result<u32> {
    u32::try_from(pos).map_err(|_| Error::TooManyNodes(pos))
}

/// A subtree waiting in the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    weight: u64,
    order: u32,
    node: NodeId,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue: lightest first, then earliest.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the code tree for a frequency table.
///
/// Fails with [`Error::EmptyInput`] when the table has no entries. A table
/// with a single symbol yields a tree whose root is that leaf. Fails with
/// [`Error::WeightOverflow`] if a merged weight does not fit in `u64` and
/// with [`Error::TooManyNodes`] if the arena outgrows [`NodeId`].
pub fn build_tree<S: Clone>(freq: &FrequencyTable<S>) -> Result<CodeTree<S>> {
    let n = freq.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    arena_index(2 * n - 1)?;
    let mut nodes = Vec::with_capacity(2 * n - 1);
    let mut pq = BinaryHeap::with_capacity(n);
    for (symbol, weight) in freq.iter() {
        let id = NodeId(arena_index(nodes.len())?);
        nodes.push(Node::Leaf {
            symbol: symbol.clone(),
            weight,
        });
        pq.push(Pending {
            weight,
            order: id.0,
            node: id,
        });
    }

    // Merged nodes are appended to the arena, so their arena index doubles as
    // the next order number.
    while pq.len() > 1 {
        let (Some(left), Some(right)) = (pq.pop(), pq.pop()) else {
            unreachable!("heap holds at least two items");
        };
        let id = NodeId(arena_index(nodes.len())?);
        let weight = left
            .weight
            .checked_add(right.weight)
            .ok_or(Error::WeightOverflow)?;
        nodes.push(Node::Internal {
            left: left.node,
            right: right.node,
            weight,
        });
        pq.push(Pending {
            weight,
            order: id.0,
            node: id,
        });
    }

    let root = pq.pop().ok_or(Error::EmptyInput)?.node;
    Ok(CodeTree { nodes, root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::tally;

    fn leaf_symbol<S: Clone>(tree: &CodeTree<S>, id: NodeId) -> Option<S> {
        match tree.node(id) {
            Node::Leaf { symbol, .. } => Some(symbol.clone()),
            Node::Internal { .. } => None,
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let freq = tally(std::iter::empty::<char>());
        assert!(matches!(build_tree(&freq), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_symbol_is_a_leaf() {
        let tree = build_tree(&tally("zzzz".chars())).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(leaf_symbol(&tree, tree.root()), Some('z'));
        assert_eq!(tree.weight(), 4);
    }

    #[test]
    fn test_node_counts() {
        let tree = build_tree(&tally("abracadabra".chars())).unwrap();
        assert!(!tree.is_empty());
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.internal_count(), 4);
        assert_eq!(tree.weight(), 11);
    }

    #[test]
    fn test_shape_for_aaabbc() {
        // c(1) and b(2) merge first, then a(3) against bc(3): a is older.
        let tree = build_tree(&tally("aaabbc".chars())).unwrap();
        let Node::Internal { left, right, weight } = *tree.node(tree.root()) else {
            panic!("root should be internal");
        };
        assert_eq!(weight, 6);
        assert_eq!(leaf_symbol(&tree, left), Some('a'));
        let Node::Internal { left, right, .. } = *tree.node(right) else {
            panic!("right child should be internal");
        };
        assert_eq!(leaf_symbol(&tree, left), Some('c'));
        assert_eq!(leaf_symbol(&tree, right), Some('b'));
    }

    #[test]
    fn test_ties_follow_first_occurrence() {
        let tree = build_tree(&tally("ab".chars())).unwrap();
        let Node::Internal { left, right, .. } = *tree.node(tree.root()) else {
            panic!("root should be internal");
        };
        assert_eq!(leaf_symbol(&tree, left), Some('a'));
        assert_eq!(leaf_symbol(&tree, right), Some('b'));
    }

    #[test]
    fn test_weights_near_u64_max() {
        let freq = FrequencyTable::from_counts([('a', u64::MAX - 2), ('b', 1), ('c', 1)]).unwrap();
        let tree = build_tree(&freq).unwrap();
        assert_eq!(tree.weight(), u64::MAX);
    }

    #[test]
    fn test_overflowing_counts_never_reach_the_builder() {
        let result = FrequencyTable::from_counts([('a', u64::MAX), ('b', 1), ('c', 1)])
            .and_then(|freq| build_tree(&freq));
        assert!(matches!(result, Err(Error::WeightOverflow)));
    }

    #[test]
    fn test_arena_index_bounds() {
        assert_eq!(arena_index(0).unwrap(), 0);
        assert_eq!(arena_index(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_arena_index_rejects_wide_positions() {
        let pos = u32::MAX as usize + 1;
        assert!(matches!(arena_index(pos), Err(Error::TooManyNodes(p)) if p == pos));
    }
}
