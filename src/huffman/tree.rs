use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};
use crate::huffman::frequencies::FrequencyTable;
use crate::{Freq, Symbol};

/// A node of the [Huffman tree](HuffmanTree). Every node exclusively owns its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
        weight: Freq,
    },
    Internal {
        /// The sum of the weights of the children.
        weight: Freq,
        left: Box<HuffNode>,
        /// Missing only in the root of a tree built from a single symbol.
        right: Option<Box<HuffNode>>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: Symbol, weight: Freq) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Creates a new internal node whose weight is the sum of the weights of `left` and `right`.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }

    /// Wraps a single node into an internal node, so that it sits one level below the root.
    fn wrap(child: Self) -> Self {
        HuffNode::Internal {
            weight: child.weight(),
            left: Box::new(child),
            right: None,
        }
    }

    #[inline(always)]
    pub fn weight(&self) -> Freq {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Returns the children of this node, left first. Leaves have none.
    pub fn children(&self) -> impl Iterator<Item = &HuffNode> {
        let (left, right) = match self {
            HuffNode::Leaf { .. } => (None, None),
            HuffNode::Internal { left, right, .. } => (Some(left.as_ref()), right.as_deref()),
        };
        left.into_iter().chain(right)
    }
}

/// An entry of the priority queue used to build the tree.
///
/// Entries are ordered by weight, then by symbol and finally by creation order. Internal nodes
/// have no symbol and use 0 in its place, while the creation order makes the order total, so
/// that building a tree from the same table always yields the same tree.
struct QueueEntry {
    weight: Freq,
    symbol: Symbol,
    order: usize,
    node: HuffNode,
}

impl QueueEntry {
    fn key(&self) -> (Freq, Symbol, usize) {
        (self.weight, self.symbol, self.order)
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A Huffman tree whose leaves are the symbols of a [`FrequencyTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lowest-priority nodes of a min-priority
    /// queue until a single node, the root, is left. The first popped node becomes the left
    /// child.
    ///
    /// Leaves are prioritized by ascending weight and, on equal weights, by ascending symbol.
    /// If the table contains a single symbol, its leaf is wrapped into an internal root so that
    /// it still gets a 1-bit code.
    ///
    /// # Errors
    /// [`HuffmanError::EmptyFrequencyTable`] if `frequencies` contains no symbol.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut order = 0;
        let mut queue = BinaryHeap::with_capacity(frequencies.len());

        for (symbol, weight) in frequencies.iter() {
            queue.push(Reverse(QueueEntry {
                weight,
                symbol,
                order,
                node: HuffNode::leaf(symbol, weight),
            }));
            order += 1;
        }

        loop {
            let Reverse(left) = queue.pop().ok_or(HuffmanError::EmptyFrequencyTable)?;
            let Some(Reverse(right)) = queue.pop() else {
                let root = match left.node {
                    leaf @ HuffNode::Leaf { .. } => HuffNode::wrap(leaf),
                    internal => internal,
                };
                return Ok(Self { root });
            };
            let node = HuffNode::merge(left.node, right.node);

            queue.push(Reverse(QueueEntry {
                weight: node.weight(),
                symbol: 0,
                order,
                node,
            }));
            order += 1;
        }
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Returns the weight of the root, i.e. the length of the input the tree was built from.
    pub fn weight(&self) -> Freq {
        self.root.weight()
    }

    /// Returns the number of leaves, i.e. the number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Returns the depth of the deepest leaf.
    pub fn depth(&self) -> usize {
        self.nodes()
            .filter(|(node, _)| node.is_leaf())
            .map(|(_, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns an iterator over all the nodes of the tree in depth-first order, left child
    /// first, together with their depth.
    pub fn nodes(&self) -> impl Iterator<Item = (&HuffNode, usize)> {
        let mut stack = vec![(&self.root, 0)];

        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            // pushed in reverse so that the left child is visited first
            let children = node.children().collect::<Vec<_>>();
            for child in children.into_iter().rev() {
                stack.push((child, depth + 1));
            }
            Some((node, depth))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(tree: &HuffmanTree) -> Vec<(Symbol, usize)> {
        tree.nodes()
            .filter_map(|(node, depth)| match node {
                HuffNode::Leaf { symbol, .. } => Some((*symbol, depth)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_symbol_is_wrapped() {
        let table = FrequencyTable::from_counts([(b'q', 42)]).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();

        assert!(!tree.root().is_leaf());
        assert_eq!(tree.weight(), 42);
        assert_eq!(leaves(&tree), vec![(b'q', 1)]);
    }

    #[test]
    fn empty_table_is_rejected() {
        let table = FrequencyTable::from_counts([]).unwrap();

        assert!(matches!(
            HuffmanTree::build(&table),
            Err(HuffmanError::EmptyFrequencyTable)
        ));
    }

    #[test]
    fn lowest_priority_node_becomes_left_child() {
        // 'c' and 'b' share the lowest weight: 'b' wins the tie and is popped first
        let table = FrequencyTable::from_counts([(b'a', 5), (b'b', 1), (b'c', 1)]).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();

        assert_eq!(
            tree.root(),
            &HuffNode::merge(
                HuffNode::merge(HuffNode::leaf(b'b', 1), HuffNode::leaf(b'c', 1)),
                HuffNode::leaf(b'a', 5),
            )
        );
        assert_eq!(leaves(&tree), vec![(b'b', 2), (b'c', 2), (b'a', 1)]);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn internal_nodes_win_ties_against_leaves() {
        // after merging 'a' and 'b' the internal node (2) ties with 'c' (2)
        let table =
            FrequencyTable::from_counts([(b'a', 1), (b'b', 1), (b'c', 2), (b'd', 4)]).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();

        assert_eq!(
            leaves(&tree),
            vec![(b'a', 3), (b'b', 3), (b'c', 2), (b'd', 1)]
        );
    }

    #[test]
    fn internal_weights_are_sums_of_children() {
        let table =
            FrequencyTable::from_counts((0..=255).map(|symbol| (symbol, symbol as Freq + 1)))
                .unwrap();
        let tree = HuffmanTree::build(&table).unwrap();

        assert_eq!(tree.leaf_count(), 256);
        assert_eq!(tree.weight(), table.total());
        for (node, _) in tree.nodes() {
            if !node.is_leaf() {
                assert_eq!(node.weight(), node.children().map(HuffNode::weight).sum::<Freq>());
            }
        }
    }
}
