use thiserror::Error;

use crate::{CodeLength, Symbol};

/// Errors returned by the stages of the Huffman pipeline.
///
/// None of them is worth retrying: every stage is a pure function of its input, so running it
/// again on the same data fails in the same way.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The input is shorter than the minimum length accepted by the coder. Nothing is computed.
    #[error("input must be at least {minimum} symbols long, got {length}")]
    InputTooShort { length: usize, minimum: usize },

    /// A symbol of the input has no canonical code. This means that the tables were not built
    /// from the same input that is being encoded.
    #[error("no canonical code for symbol {symbol:#04x}")]
    MissingCode { symbol: Symbol },

    /// Adding up the counts of a frequency table overflowed.
    #[error("frequency count overflow while adding symbol {symbol:#04x}")]
    FrequencyOverflow { symbol: Symbol },

    /// A stage that needs at least one symbol was given an empty table.
    #[error("empty frequency table: cannot build a code")]
    EmptyFrequencyTable,

    /// A code length cannot be represented by the canonical assignment.
    #[error("code length {length} of symbol {symbol:#04x} exceeds maximum {maximum}")]
    CodeLengthTooLong {
        symbol: Symbol,
        length: CodeLength,
        maximum: CodeLength,
    },

    /// The code lengths violate the Kraft inequality, so no prefix-free code can have them.
    #[error("code lengths are oversubscribed: Kraft sum is {kraft_sum}")]
    OversubscribedLengths { kraft_sum: f64 },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
