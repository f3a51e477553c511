pub mod error;
pub mod huffman;
pub mod report;
pub mod utils;

pub use error::{HuffmanError, Result};
pub use huffman::pipeline::{HuffmanCoder, HuffmanRun, PipelineStage};

/// The type representing the symbols of the input alphabet. Only single bytes are supported,
/// so every table indexed by symbol has at most 256 entries.
pub type Symbol = u8;

/// The type representing the number of occurrences of a symbol, as well as the weight of a node
/// of the Huffman tree.
pub type Freq = u64;

/// The type representing the length, in bits, of a code.
pub type CodeLength = u32;

/// The minimum number of symbols an input must contain to be accepted by the
/// [coder](HuffmanCoder) built with [`HuffmanCoder::new`].
pub const MIN_INPUT_LENGTH: usize = 30;

/// The longest code the canonical assignment can represent, since canonical codes are held in
/// a 64-bit unsigned integer.
///
/// # Note
/// With a 256-symbol alphabet a tree deeper than this needs a Fibonacci-like distribution whose
/// total count is close to `u64::MAX`, so real inputs never get here.
pub const MAX_CODE_LENGTH: CodeLength = 64;
