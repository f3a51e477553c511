pub mod canonical;
pub mod codes;
pub mod encoder;
pub mod frequencies;
pub mod pipeline;
pub mod tree;

pub use canonical::{CanonicalCodeTable, Codeword};
pub use codes::{CodeLengthTable, TreeCodeTable};
pub use encoder::EncodedOutput;
pub use frequencies::{FrequencyTable, ALPHABET_SIZE};
pub use tree::{HuffNode, HuffmanTree};
