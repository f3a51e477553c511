use std::fmt;

use bitvec::prelude::*;

use crate::error::{HuffmanError, Result};
use crate::huffman::canonical::CanonicalCodeTable;
use crate::Symbol;

/// The bits obtained by concatenating the canonical code of every symbol of an input, in input
/// order, packed most significant bit first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedOutput {
    bits: BitVec<u8, Msb0>,
}

impl EncodedOutput {
    /// Encodes `input` with the given codes.
    ///
    /// # Errors
    /// [`HuffmanError::MissingCode`] if a symbol of `input` has no code, which means that `codes`
    /// was built from another input.
    pub fn encode(input: &[Symbol], codes: &CanonicalCodeTable) -> Result<Self> {
        let mut bits = BitVec::with_capacity(input.len());

        for symbol in input {
            let code = codes
                .get(*symbol)
                .ok_or(HuffmanError::MissingCode { symbol: *symbol })?;
            bits.extend(code.bits());
        }

        bits.shrink_to_fit();
        Ok(Self { bits })
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Returns the bits as a string of `'0'` and `'1'`.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
    }

    /// Returns the packed bytes. The last byte is padded with zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bits = self.bits.clone();
        bits.set_uninitialized(false);
        bits.into_vec()
    }
}

impl fmt::Display for EncodedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}
