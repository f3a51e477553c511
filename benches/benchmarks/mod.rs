use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod pipeline;
pub mod stages;

/// Size of the list of symbols used to bench.
const SYMBOL_LIST_LENGTH: usize = 1_000_000;

/// Number of distinct values the zipfian distribution can output.
const ALPHABET: u64 = 256;

/// Creates the symbols to bench with, sampled from a Zipfian distribution over all bytes.
fn get_symbols() -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0);
    let distribution = Zipf::new(ALPHABET, 1.0).unwrap();

    (0..SYMBOL_LIST_LENGTH)
        .map(|_| (distribution.sample(&mut rng) as u64 - 1) as u8)
        .collect()
}
