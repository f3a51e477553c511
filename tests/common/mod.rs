/*
 * Utility functions and consts used by the tests.
 *
 */
#![allow(dead_code)]

use std::collections::BTreeMap;

use canonical_huffman::huffman::CodeLengthTable;
use canonical_huffman::{CodeLength, Symbol};
use rand::prelude::{Distribution, SmallRng};
use rand::SeedableRng;
use rand_distr::Zipf;

/// Forty distinct symbols, each occurring once.
pub const UNIFORM: &str = "abcdefghijklmnopqrstuvwxyz0123456789.,!?";

/// Four symbols, each occurring ten times.
pub const FOUR_SYMBOLS: &str = "aaaaaaaaaabbbbbbbbbbccccccccccdddddddddd";

/// A sentence with many spaces and letters of mixed frequency.
pub const SPACES: &str = "este es un texto de prueba con muchos espacios para el algoritmo";

/// Size of the list of symbols used to test.
pub const SYMBOL_LIST_LENGTH: usize = 100_000;

/// Number of distinct values the zipfian distribution can output.
const ALPHABET: u64 = 256;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a sequence of size [`SYMBOL_LIST_LENGTH`], containing symbols sampled from a Zipfian
/// distribution over the whole byte alphabet.
pub fn get_symbols(seed: u64) -> Vec<Symbol> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(ALPHABET, 1.1).unwrap();
    let mut symbols = Vec::with_capacity(SYMBOL_LIST_LENGTH);

    for _ in 0..SYMBOL_LIST_LENGTH {
        symbols.push((distribution.sample(&mut rng) as u64 - 1) as Symbol);
    }
    symbols
}

/// Assigns canonical codes the way DEFLATE describes it: count the codes of every length, find
/// the first code of every length, then hand out codes to symbols in ascending order.
pub fn reference_canonical_codes(lengths: &CodeLengthTable) -> BTreeMap<Symbol, (u64, CodeLength)> {
    let max_length = lengths.max_length() as usize;
    let mut length_count = vec![0_u64; max_length + 1];

    for (_, length) in lengths.iter() {
        length_count[length as usize] += 1;
    }

    let mut next_code = vec![0_u64; max_length + 1];
    let mut code = 0_u64;
    for bits in 1..=max_length {
        code = (code + length_count[bits - 1]) << 1;
        next_code[bits] = code;
    }

    let mut codes = BTreeMap::new();
    for (symbol, length) in lengths.iter() {
        codes.insert(symbol, (next_code[length as usize], length));
        next_code[length as usize] += 1;
    }
    codes
}
