use crate::error::{HuffmanError, Result};
use crate::{Freq, Symbol};

/// The number of distinct values a [`Symbol`] can take.
pub const ALPHABET_SIZE: usize = 1 << Symbol::BITS;

/// The number of occurrences of every symbol of an input.
///
/// Like every other table indexed by symbol, the count of a symbol is stored in the index equal
/// to the symbol, so iterating over the table always yields symbols in ascending order. Symbols
/// that do not occur have a count of 0 and are never yielded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    freqs: Vec<Freq>,

    /// The sum of all the counts, i.e. the length of the input.
    total: Freq,
}

impl FrequencyTable {
    /// Counts the occurrences of every symbol of `input`.
    ///
    /// # Errors
    /// [`HuffmanError::InputTooShort`] if `input` holds fewer than `minimum` symbols. In this
    /// case nothing is counted.
    pub fn count(input: &[Symbol], minimum: usize) -> Result<Self> {
        if input.len() < minimum {
            return Err(HuffmanError::InputTooShort {
                length: input.len(),
                minimum,
            });
        }

        let mut freqs = vec![0; ALPHABET_SIZE];
        for symbol in input {
            freqs[*symbol as usize] += 1;
        }

        Ok(Self {
            freqs,
            total: input.len() as Freq,
        })
    }

    /// Creates a table from already known `(symbol, count)` pairs. Pairs with a count of 0 are
    /// skipped, repeated symbols add up.
    ///
    /// # Errors
    /// [`HuffmanError::FrequencyOverflow`] if a count, or the sum of all the counts, does not fit
    /// in a [`Freq`].
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, Freq)>,
    {
        let mut freqs: Vec<Freq> = vec![0; ALPHABET_SIZE];
        let mut total: Freq = 0;

        for (symbol, count) in counts {
            let freq = &mut freqs[symbol as usize];
            *freq = freq
                .checked_add(count)
                .ok_or(HuffmanError::FrequencyOverflow { symbol })?;
            total = total
                .checked_add(count)
                .ok_or(HuffmanError::FrequencyOverflow { symbol })?;
        }
        Ok(Self { freqs, total })
    }

    /// Returns the count of the given symbol, 0 if it never occurs.
    #[inline(always)]
    pub fn get(&self, symbol: Symbol) -> Freq {
        self.freqs[symbol as usize]
    }

    /// Returns the number of distinct symbols.
    pub fn len(&self) -> usize {
        self.freqs.iter().filter(|freq| **freq > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the sum of all the counts.
    pub fn total(&self) -> Freq {
        self.total
    }

    /// Returns an iterator over the `(symbol, count)` pairs of the symbols that occur, in
    /// ascending order of symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Freq)> + '_ {
        self.freqs
            .iter()
            .enumerate()
            .filter(|(_, freq)| **freq > 0)
            .map(|(symbol, freq)| (symbol as Symbol, *freq))
    }
}
