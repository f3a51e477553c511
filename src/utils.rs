use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::{CodeLength, Freq, Symbol};

/// The inputs the command-line tool runs with `--samples`: (description, input).
pub const SAMPLE_CASES: [(&str, &str); 3] = [
    (
        "text with many spaces",
        "este es un texto de prueba con muchos espacios para el algoritmo",
    ),
    (
        "few distinct symbols",
        "aaaaaaaaaabbbbbbbbbbccccccccccdddddddddd",
    ),
    (
        "uniform distribution",
        "abcdefghijklmnopqrstuvwxyz0123456789.,!?",
    ),
];

/// Returns the Shannon entropy, in bits per symbol, of a source whose symbols occur `counts`
/// times each. Zero counts contribute nothing; no counts at all give an entropy of 0.
pub fn entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = Freq>,
{
    let counts = counts.into_iter().filter(|count| *count > 0).collect::<Vec<_>>();
    let total = counts.iter().sum::<Freq>() as f64;

    counts
        .iter()
        .map(|count| {
            let probability = *count as f64 / total;
            -probability * probability.log2()
        })
        .sum()
}

/// Calculates the Kraft sum of the given code lengths:
/// ```text
/// kraft(L) = ∑ 2^(-l)
/// ```
/// A prefix-free code with these lengths exists if and only if the sum is at most 1.
pub fn kraft_sum<I>(lengths: I) -> f64
where
    I: IntoIterator<Item = CodeLength>,
{
    lengths
        .into_iter()
        .map(|length| f64::powi(2.0, -(length as i32)))
        .sum()
}

/// Reads the whole file at `path` as a sequence of symbols.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<Vec<Symbol>> {
    Ok(fs::read(path)?)
}
