use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;

use crate::error::{HuffmanError, Result};
use crate::huffman::codes::CodeLengthTable;
use crate::{CodeLength, Symbol, MAX_CODE_LENGTH};

/// A code of `length` bits whose value is held in the `length` least significant bits of
/// `value`, most significant bit first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Codeword {
    pub value: u64,
    pub length: CodeLength,
}

impl Codeword {
    pub fn new(value: u64, length: CodeLength) -> Self {
        Self { value, length }
    }

    /// Returns whether this code is a prefix of `other`. Every code is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.length <= other.length
            && other.value.checked_shr(other.length - self.length).unwrap_or(0) == self.value
    }

    /// Returns the bits of the code, most significant first.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let Codeword { value, length } = *self;
        (0..length).rev().map(move |shift| (value >> shift) & 1 == 1)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.length == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.value, width = self.length as usize)
    }
}

/// The canonical code of every symbol, derived from the [code lengths](CodeLengthTable) alone.
///
/// Sorting symbols by ascending length and then by ascending symbol, codes of the same length are
/// consecutive integers, and the first code of a longer length is the successor of the last code
/// of the previous length shifted left by the length difference. Hence, the same lengths always
/// yield the same codes, whatever the shape of the tree they come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalCodeTable {
    codes: BTreeMap<Symbol, Codeword>,

    /// The symbols in canonical order, i.e. by ascending length and then by ascending symbol.
    order: Vec<Symbol>,
}

impl CanonicalCodeTable {
    /// Assigns the canonical codes.
    ///
    /// # Errors
    /// - [`HuffmanError::EmptyFrequencyTable`] if `lengths` is empty;
    /// - [`HuffmanError::CodeLengthTooLong`] if a length exceeds [`MAX_CODE_LENGTH`].
    pub fn from_lengths(lengths: &CodeLengthTable) -> Result<Self> {
        if lengths.is_empty() {
            return Err(HuffmanError::EmptyFrequencyTable);
        }

        let sorted = lengths
            .iter()
            .map(|(symbol, length)| (length, symbol))
            .sorted_unstable()
            .collect::<Vec<_>>();

        let mut codes = BTreeMap::new();
        let mut order = Vec::with_capacity(sorted.len());
        let mut current_code = 0_u64;
        let mut current_length: CodeLength = 0;

        for (length, symbol) in sorted {
            if length > MAX_CODE_LENGTH {
                return Err(HuffmanError::CodeLengthTooLong {
                    symbol,
                    length,
                    maximum: MAX_CODE_LENGTH,
                });
            }

            if current_length == 0 {
                current_length = length;
            } else {
                current_code += 1;
                if length > current_length {
                    current_code <<= length - current_length;
                    current_length = length;
                }
            }

            codes.insert(symbol, Codeword::new(current_code, current_length));
            order.push(symbol);
        }

        Ok(Self { codes, order })
    }

    /// Returns the code of the given symbol, if any.
    #[inline(always)]
    pub fn get(&self, symbol: Symbol) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns an iterator over the `(symbol, code)` pairs, in ascending order of symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Codeword)> {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Returns an iterator over the `(symbol, code)` pairs in canonical order, i.e. by ascending
    /// code length and then by ascending symbol. Codes come out in increasing numeric order.
    pub fn iter_canonical(&self) -> impl Iterator<Item = (Symbol, &Codeword)> {
        self.order
            .iter()
            .filter_map(move |symbol| self.codes.get(symbol).map(|code| (*symbol, code)))
    }

    /// Returns whether no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        self.codes
            .values()
            .tuple_combinations()
            .all(|(a, b)| !a.is_prefix_of(b) && !b.is_prefix_of(a))
    }
}
