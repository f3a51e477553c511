use std::fmt;

use log::{debug, info, warn};

use crate::error::Result;
use crate::huffman::canonical::CanonicalCodeTable;
use crate::huffman::codes::{CodeLengthTable, TreeCodeTable};
use crate::huffman::encoder::EncodedOutput;
use crate::huffman::frequencies::FrequencyTable;
use crate::huffman::tree::HuffmanTree;
use crate::report::CompressionStats;
use crate::{Symbol, MIN_INPUT_LENGTH};

/// The states a run goes through. A run only moves forward; a failing stage aborts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineStage {
    Idle,
    Counted,
    TreeBuilt,
    CodesGenerated,
    Canonicalized,
    Encoded,
}

impl PipelineStage {
    /// Returns the stage following this one. [`PipelineStage::Encoded`] is final.
    pub fn next(self) -> Self {
        match self {
            PipelineStage::Idle => PipelineStage::Counted,
            PipelineStage::Counted => PipelineStage::TreeBuilt,
            PipelineStage::TreeBuilt => PipelineStage::CodesGenerated,
            PipelineStage::CodesGenerated => PipelineStage::Canonicalized,
            PipelineStage::Canonicalized | PipelineStage::Encoded => PipelineStage::Encoded,
        }
    }

    fn advance(&mut self) {
        let next = self.next();
        debug!("{} -> {}", self, next);
        *self = next;
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Counted => "counted",
            PipelineStage::TreeBuilt => "tree built",
            PipelineStage::CodesGenerated => "codes generated",
            PipelineStage::Canonicalized => "canonicalized",
            PipelineStage::Encoded => "encoded",
        };
        f.write_str(name)
    }
}

/// Everything a run produces. Nothing is shared with other runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanRun {
    /// The number of symbols of the input.
    pub input_len: usize,
    pub frequencies: FrequencyTable,
    pub tree: HuffmanTree,
    pub tree_codes: TreeCodeTable,
    pub lengths: CodeLengthTable,
    pub canonical: CanonicalCodeTable,
    pub encoded: EncodedOutput,
    pub stage: PipelineStage,
}

impl HuffmanRun {
    /// Returns the statistics of this run.
    pub fn compression_stats(&self) -> CompressionStats {
        CompressionStats::new(self)
    }
}

/// Runs the whole pipeline: frequencies, tree, tree codes, canonical codes and encoding.
///
/// The coder only holds its configuration, so the same coder can be used for any number of
/// independent runs, even from different threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HuffmanCoder {
    min_input_length: usize,
}

impl HuffmanCoder {
    /// Creates a coder that rejects inputs shorter than [`MIN_INPUT_LENGTH`] symbols.
    pub fn new() -> Self {
        Self::with_min_length(MIN_INPUT_LENGTH)
    }

    /// Creates a coder that rejects inputs shorter than `min_input_length` symbols.
    pub fn with_min_length(min_input_length: usize) -> Self {
        Self { min_input_length }
    }

    pub fn min_input_length(&self) -> usize {
        self.min_input_length
    }

    /// Runs the pipeline on `input`.
    ///
    /// # Errors
    /// The first error returned by a stage. In this case nothing is returned, and a later run
    /// starts from scratch.
    pub fn run(&self, input: &[Symbol]) -> Result<HuffmanRun> {
        let mut stage = PipelineStage::Idle;

        let frequencies = FrequencyTable::count(input, self.min_input_length)
            .inspect_err(|e| warn!("Rejecting input: {}", e))?;
        stage.advance();

        let tree = HuffmanTree::build(&frequencies)?;
        stage.advance();

        let tree_codes = TreeCodeTable::from_tree(&tree);
        let lengths = tree_codes.lengths();
        stage.advance();

        let canonical = CanonicalCodeTable::from_lengths(&lengths)?;
        stage.advance();

        let encoded = EncodedOutput::encode(input, &canonical)?;
        stage.advance();

        info!(
            "Encoded {} symbols ({} distinct) into {} bits",
            input.len(),
            frequencies.len(),
            encoded.len()
        );

        Ok(HuffmanRun {
            input_len: input.len(),
            frequencies,
            tree,
            tree_codes,
            lengths,
            canonical,
            encoded,
            stage,
        })
    }

    /// Runs the pipeline on the bytes of `text`.
    pub fn run_str(&self, text: &str) -> Result<HuffmanRun> {
        self.run(text.as_bytes())
    }
}

impl Default for HuffmanCoder {
    fn default() -> Self {
        Self::new()
    }
}
