use std::collections::BTreeMap;

use crate::error::{HuffmanError, Result};
use crate::huffman::tree::{HuffNode, HuffmanTree};
use crate::utils::kraft_sum;
use crate::{CodeLength, Symbol, MAX_CODE_LENGTH};

/// The codes obtained by walking the [Huffman tree](HuffmanTree): `'0'` when descending to the
/// left child, `'1'` when descending to the right one.
///
/// Only the lengths of these codes matter to the rest of the pipeline, the bits are kept for
/// reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeCodeTable {
    codes: BTreeMap<Symbol, String>,
}

impl TreeCodeTable {
    /// Collects the code of every leaf of `tree` with an iterative depth-first traversal.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(tree.root(), String::new())];

        while let Some((node, code)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    // a bare leaf as root never comes out of HuffmanTree::build, but it still
                    // deserves a 1-bit code
                    let code = if code.is_empty() { "0".to_owned() } else { code };
                    codes.insert(*symbol, code);
                }
                HuffNode::Internal { left, right, .. } => {
                    if let Some(right) = right {
                        stack.push((right.as_ref(), format!("{code}1")));
                    }
                    stack.push((left.as_ref(), format!("{code}0")));
                }
            }
        }
        Self { codes }
    }

    /// Returns the code of the given symbol, if any.
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns an iterator over the `(symbol, code)` pairs, in ascending order of symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes.iter().map(|(symbol, code)| (*symbol, code.as_str()))
    }

    /// Returns the length of every code, i.e. the depth of every leaf.
    pub fn lengths(&self) -> CodeLengthTable {
        CodeLengthTable {
            lengths: self
                .codes
                .iter()
                .map(|(symbol, code)| (*symbol, code.len() as CodeLength))
                .collect(),
        }
    }
}

/// The length of the code of every symbol. This is all the canonical assignment needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeLengthTable {
    lengths: BTreeMap<Symbol, CodeLength>,
}

impl CodeLengthTable {
    /// Creates a table from `(symbol, length)` pairs, e.g. the ones stored alongside an encoded
    /// stream. Pairs with a length of 0 mark absent symbols and are skipped; a repeated symbol
    /// keeps its last length.
    ///
    /// # Errors
    /// - [`HuffmanError::CodeLengthTooLong`] if a length exceeds [`MAX_CODE_LENGTH`];
    /// - [`HuffmanError::OversubscribedLengths`] if the lengths violate the Kraft inequality, so
    ///   that no prefix-free code with these lengths exists.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, CodeLength)>,
    {
        let lengths = pairs
            .into_iter()
            .filter(|(_, length)| *length > 0)
            .collect::<BTreeMap<_, _>>();

        // Kraft sum scaled by 2^MAX_CODE_LENGTH, so that it is computed exactly
        let mut scaled_sum = 0_u128;
        for (symbol, length) in lengths.iter() {
            if *length > MAX_CODE_LENGTH {
                return Err(HuffmanError::CodeLengthTooLong {
                    symbol: *symbol,
                    length: *length,
                    maximum: MAX_CODE_LENGTH,
                });
            }
            scaled_sum += 1_u128 << (MAX_CODE_LENGTH - length);
        }

        if scaled_sum > 1_u128 << MAX_CODE_LENGTH {
            return Err(HuffmanError::OversubscribedLengths {
                kraft_sum: kraft_sum(lengths.values().copied()),
            });
        }
        Ok(Self { lengths })
    }

    /// Returns the code length of the given symbol, if any.
    pub fn get(&self, symbol: Symbol) -> Option<CodeLength> {
        self.lengths.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Returns an iterator over the `(symbol, length)` pairs, in ascending order of symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, CodeLength)> + '_ {
        self.lengths.iter().map(|(symbol, length)| (*symbol, *length))
    }

    /// Returns the longest code length, 0 if the table is empty.
    pub fn max_length(&self) -> CodeLength {
        self.lengths.values().copied().max().unwrap_or(0)
    }

    /// Returns the sum, over all symbols, of 2^-length.
    pub fn kraft_sum(&self) -> f64 {
        kraft_sum(self.lengths.values().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequencies::FrequencyTable;

    #[test]
    fn codes_follow_the_tree() {
        let table = FrequencyTable::from_counts([(b'a', 5), (b'b', 1), (b'c', 1)]).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        let codes = TreeCodeTable::from_tree(&tree);

        assert_eq!(codes.get(b'a'), Some("1"));
        assert_eq!(codes.get(b'b'), Some("00"));
        assert_eq!(codes.get(b'c'), Some("01"));
        assert_eq!(codes.get(b'd'), None);

        let lengths = codes.lengths();
        assert_eq!(lengths.iter().collect::<Vec<_>>(), vec![(b'a', 1), (b'b', 2), (b'c', 2)]);
        assert_eq!(lengths.kraft_sum(), 1.0);
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let table = FrequencyTable::from_counts([(b' ', 31)]).unwrap();
        let codes = TreeCodeTable::from_tree(&HuffmanTree::build(&table).unwrap());

        assert_eq!(codes.get(b' '), Some("0"));
        assert_eq!(codes.lengths().get(b' '), Some(1));
        assert_eq!(codes.lengths().kraft_sum(), 0.5);
    }

    #[test]
    fn lengths_from_pairs_skip_absent_symbols() {
        let lengths = CodeLengthTable::from_pairs([(b'x', 2), (b'y', 0), (b'z', 1)]).unwrap();

        assert_eq!(lengths.len(), 2);
        assert_eq!(lengths.get(b'y'), None);
        assert_eq!(lengths.max_length(), 2);
    }

    #[test]
    fn oversubscribed_lengths_are_rejected() {
        let result = CodeLengthTable::from_pairs([(b'a', 1), (b'b', 1), (b'c', 1)]);

        assert!(matches!(result, Err(HuffmanError::OversubscribedLengths { .. })));
    }

    #[test]
    fn overlong_lengths_are_rejected() {
        let result = CodeLengthTable::from_pairs([(b'a', 1), (b'b', 65)]);

        assert!(matches!(
            result,
            Err(HuffmanError::CodeLengthTooLong { symbol: b'b', length: 65, .. })
        ));
    }
}
