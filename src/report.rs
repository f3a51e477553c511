//! Human-readable views over the results of a [run](HuffmanRun).
//!
//! Every view borrows what it shows and implements [`Display`](fmt::Display), so a run can be
//! reported any number of times without running any stage again.

use std::fmt;

use crate::huffman::{EncodedOutput, FrequencyTable, HuffNode, HuffmanTree};
use crate::utils::entropy;
use crate::{HuffmanRun, Symbol};

/// The default number of encoded bits shown by [`OutputPreview`].
pub const DEFAULT_PREVIEW_BITS: usize = 128;

/// Returns how a symbol is shown in tables: the space as `'space'`, other printable ASCII
/// characters as themselves, anything else as its hexadecimal value.
pub fn display_symbol(symbol: Symbol) -> String {
    match symbol {
        b' ' => "'space'".to_owned(),
        symbol if symbol.is_ascii_graphic() => (symbol as char).to_string(),
        symbol => format!("{:#04x}", symbol),
    }
}

/// Same as [`display_symbol`], but printable characters are quoted.
fn quoted_symbol(symbol: Symbol) -> String {
    match symbol {
        symbol if symbol.is_ascii_graphic() => format!("'{}'", symbol as char),
        symbol => display_symbol(symbol),
    }
}

/// How much a run compressed its input, assuming 8 bits per input symbol.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressionStats {
    /// The size of the input, in bits.
    pub original_bits: usize,
    /// The size of the encoded output, in bits.
    pub compressed_bits: usize,
    /// `compressed_bits / original_bits`.
    pub ratio: f64,
    /// The percentage of space saved, `100 × (1 − ratio)`.
    pub space_reduction: f64,
    /// The Shannon entropy of the input, in bits per symbol.
    pub entropy: f64,
    /// The average length of a code, weighted by symbol frequency, in bits per symbol.
    pub average_code_length: f64,
}

impl CompressionStats {
    pub fn new(run: &HuffmanRun) -> Self {
        let original_bits = run.input_len * 8;
        let compressed_bits = run.encoded.len();
        let ratio = match original_bits {
            0 => 0.0,
            bits => compressed_bits as f64 / bits as f64,
        };
        let average_code_length = match run.input_len {
            0 => 0.0,
            len => compressed_bits as f64 / len as f64,
        };

        Self {
            original_bits,
            compressed_bits,
            ratio,
            space_reduction: 100.0 * (1.0 - ratio),
            entropy: entropy(run.frequencies.iter().map(|(_, freq)| freq)),
            average_code_length,
        }
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Compression Report ---")?;
        writeln!(
            f,
            "Original Size: {} bits ({} chars)",
            self.original_bits,
            self.original_bits / 8
        )?;
        writeln!(f, "Compressed Size: {} bits", self.compressed_bits)?;
        writeln!(f, "Compression Ratio: {:.2}", self.ratio)?;
        writeln!(f, "Space Reduction: {:.2}%", self.space_reduction)?;
        writeln!(f, "Entropy: {:.3} bits/symbol", self.entropy)?;
        writeln!(
            f,
            "Average Code Length: {:.3} bits/symbol",
            self.average_code_length
        )?;
        writeln!(f, "--------------------------")
    }
}

/// The frequency of every symbol, by ascending symbol.
pub struct FrequencyReport<'a>(pub &'a FrequencyTable);

impl fmt::Display for FrequencyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Frequency Table ---")?;
        writeln!(f, "{:<10}{:<10}", "Symbol", "Freq")?;
        writeln!(f, "---------------------")?;
        for (symbol, freq) in self.0.iter() {
            writeln!(f, "{:<10}{:<10}", display_symbol(symbol), freq)?;
        }
        Ok(())
    }
}

/// The tree code and the canonical code of every symbol, in canonical order.
pub struct CodeReport<'a>(pub &'a HuffmanRun);

impl fmt::Display for CodeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Code Tables ---")?;
        writeln!(
            f,
            "{:<10}{:<10}{:<20}{:<20}",
            "Symbol", "Length", "Huffman Code", "Canonical Code"
        )?;
        writeln!(f, "{}", "-".repeat(53))?;
        for (symbol, code) in self.0.canonical.iter_canonical() {
            writeln!(
                f,
                "{:<10}{:<10}{:<20}{:<20}",
                display_symbol(symbol),
                code.length,
                self.0.tree_codes.get(symbol).unwrap_or("-"),
                code.to_string()
            )?;
        }
        Ok(())
    }
}

/// The tree drawn sideways: the root first, then every child on its own line, marked with `L`
/// or `R` and indented by depth.
pub struct TreeDiagram<'a>(pub &'a HuffmanTree);

impl TreeDiagram<'_> {
    fn write_node(
        f: &mut fmt::Formatter<'_>,
        node: &HuffNode,
        prefix: &str,
        is_root: bool,
    ) -> fmt::Result {
        f.write_str(prefix)?;
        if !is_root {
            f.write_str("----")?;
        }

        match node {
            HuffNode::Leaf { symbol, weight } => {
                writeln!(f, "{} ({})", quoted_symbol(*symbol), weight)?
            }
            HuffNode::Internal { weight, .. } => writeln!(f, "($) ({})", weight)?,
        }

        let child_prefix = match is_root {
            true => " ".to_owned(),
            false => format!("{prefix}     "),
        };
        // recursion is bounded by the depth of the tree, which is less than the alphabet size
        for (child, side) in node.children().zip(["L", "R"]) {
            Self::write_node(f, child, &format!("{child_prefix}{side}"), false)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Huffman Tree ---")?;
        Self::write_node(f, self.0.root(), "", true)
    }
}

/// The size of the encoded output and its first bits.
pub struct OutputPreview<'a> {
    pub encoded: &'a EncodedOutput,
    pub preview_bits: usize,
}

impl fmt::Display for OutputPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.encoded.to_bit_string();
        let shown = &bits[..self.preview_bits.min(bits.len())];
        let ellipsis = if bits.len() > self.preview_bits { "..." } else { "" };

        writeln!(f, "--- Compressed Output ---")?;
        writeln!(f, "Total bits: {}", bits.len())?;
        writeln!(f, "First {} bits: {}{}", self.preview_bits, shown, ellipsis)
    }
}

/// All the views of a run, one after the other.
pub struct Report<'a> {
    pub run: &'a HuffmanRun,
    pub preview_bits: usize,
}

impl<'a> Report<'a> {
    pub fn new(run: &'a HuffmanRun) -> Self {
        Self {
            run,
            preview_bits: DEFAULT_PREVIEW_BITS,
        }
    }

    pub fn with_preview_bits(run: &'a HuffmanRun, preview_bits: usize) -> Self {
        Self { run, preview_bits }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.run.compression_stats())?;
        writeln!(f, "{}", FrequencyReport(&self.run.frequencies))?;
        writeln!(f, "{}", CodeReport(self.run))?;
        writeln!(f, "{}", TreeDiagram(&self.run.tree))?;
        write!(
            f,
            "{}",
            OutputPreview {
                encoded: &self.run.encoded,
                preview_bits: self.preview_bits,
            }
        )
    }
}
